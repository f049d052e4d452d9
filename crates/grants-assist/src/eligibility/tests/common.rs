use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::eligibility::{eligibility_router, EligibilityEngine, EligibilityService, ScoringPolicy};
use crate::profiles::{ApplicantProfile, ProfileStore, ProfileStoreError, UserId};
use crate::programs::{
    CatalogError, GrantCategory, GrantProgram, ProgramCatalog, ProgramFilter, ProgramId,
};

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::new(ScoringPolicy::default())
}

pub(super) fn program(
    id: &str,
    category: Option<GrantCategory>,
    agency: Option<&str>,
) -> GrantProgram {
    GrantProgram {
        id: ProgramId(id.to_string()),
        name: format!("{id} program"),
        agency: agency.map(str::to_string),
        category,
        min_award: Some(5_000.0),
        max_award: Some(250_000.0),
        match_required: None,
        description: None,
        eligibility_summary: None,
        deadline: None,
        rolling_deadline: true,
        program_url: None,
        is_active: true,
    }
}

pub(super) fn complete_profile() -> ApplicantProfile {
    ApplicantProfile {
        full_name: Some("Avery Collins".to_string()),
        organization_name: Some("Prairie Works LLC".to_string()),
        organization_type: Some("small_business".to_string()),
        address: Some("210 Walnut St".to_string()),
        city: Some("Des Moines".to_string()),
        state: Some("IA".to_string()),
        zip_code: Some("50309".to_string()),
        ein: Some("42-1234567".to_string()),
        uei_number: Some("ABCD1234EFGH".to_string()),
        sam_registered: true,
        annual_revenue: Some(480_000.0),
        employee_count: Some(12),
        ..ApplicantProfile::default()
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryProfiles {
    records: Arc<Mutex<HashMap<UserId, ApplicantProfile>>>,
}

impl MemoryProfiles {
    pub(super) fn insert(&self, user: &str, profile: ApplicantProfile) {
        self.records
            .lock()
            .expect("profile mutex poisoned")
            .insert(UserId(user.to_string()), profile);
    }
}

impl ProfileStore for MemoryProfiles {
    fn find_by_user(&self, user: &UserId) -> Result<Option<ApplicantProfile>, ProfileStoreError> {
        let guard = self.records.lock().expect("profile mutex poisoned");
        Ok(guard.get(user).cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryCatalog {
    programs: Arc<Mutex<Vec<GrantProgram>>>,
}

impl MemoryCatalog {
    pub(super) fn insert(&self, program: GrantProgram) {
        self.programs
            .lock()
            .expect("catalog mutex poisoned")
            .push(program);
    }
}

impl ProgramCatalog for MemoryCatalog {
    fn fetch(&self, id: &ProgramId) -> Result<Option<GrantProgram>, CatalogError> {
        let guard = self.programs.lock().expect("catalog mutex poisoned");
        Ok(guard.iter().find(|program| &program.id == id).cloned())
    }

    fn active(&self, filter: &ProgramFilter) -> Result<Vec<GrantProgram>, CatalogError> {
        let guard = self.programs.lock().expect("catalog mutex poisoned");
        let mut programs: Vec<GrantProgram> = guard
            .iter()
            .filter(|program| program.is_active)
            .filter(|program| {
                filter
                    .category
                    .map_or(true, |category| program.category == Some(category))
            })
            .filter(|program| {
                filter
                    .search
                    .as_deref()
                    .map_or(true, |term| program.matches_search(term))
            })
            .cloned()
            .collect();
        programs.sort_by(|left, right| left.name.cmp(&right.name));
        Ok(programs)
    }
}

pub(super) struct UnavailableProfiles;

impl ProfileStore for UnavailableProfiles {
    fn find_by_user(&self, _user: &UserId) -> Result<Option<ApplicantProfile>, ProfileStoreError> {
        Err(ProfileStoreError::Unavailable(
            "profile database offline".to_string(),
        ))
    }
}

pub(super) fn build_service() -> (
    EligibilityService<MemoryProfiles, MemoryCatalog>,
    MemoryProfiles,
    MemoryCatalog,
) {
    let profiles = MemoryProfiles::default();
    let catalog = MemoryCatalog::default();
    let service = EligibilityService::new(
        Arc::new(profiles.clone()),
        Arc::new(catalog.clone()),
        ScoringPolicy::default(),
    );
    (service, profiles, catalog)
}

pub(super) fn router_with_service(
    service: EligibilityService<MemoryProfiles, MemoryCatalog>,
) -> axum::Router {
    eligibility_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
