use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use chrono::{Days, NaiveDate};
use grants_assist::eligibility::ScoringPolicy;
use grants_assist::profiles::{ApplicantProfile, ProfileStore, ProfileStoreError, UserId};
use grants_assist::programs::{
    CatalogError, GrantCategory, GrantProgram, ProgramCatalog, ProgramFilter, ProgramId,
};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileStore {
    records: Arc<Mutex<HashMap<UserId, ApplicantProfile>>>,
}

impl InMemoryProfileStore {
    pub(crate) fn upsert(&self, user: UserId, profile: ApplicantProfile) {
        self.records
            .lock()
            .expect("profile mutex poisoned")
            .insert(user, profile);
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn find_by_user(&self, user: &UserId) -> Result<Option<ApplicantProfile>, ProfileStoreError> {
        let guard = self.records.lock().expect("profile mutex poisoned");
        Ok(guard.get(user).cloned())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryProgramCatalog {
    programs: Arc<Mutex<Vec<GrantProgram>>>,
}

impl InMemoryProgramCatalog {
    pub(crate) fn extend(&self, programs: Vec<GrantProgram>) {
        self.programs
            .lock()
            .expect("catalog mutex poisoned")
            .extend(programs);
    }

    pub(crate) fn count(&self) -> usize {
        self.programs.lock().expect("catalog mutex poisoned").len()
    }
}

impl ProgramCatalog for InMemoryProgramCatalog {
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

pub(crate) fn default_scoring_policy() -> ScoringPolicy {
    ScoringPolicy::default()
}

/// Sample catalog for demos and development deployments.
pub(crate) fn sample_programs(today: NaiveDate) -> Vec<GrantProgram> {
    let deadline = |days: u64| today.checked_add_days(Days::new(days));

    vec![
        sample_program(
            "sba_7a",
            "SBA 7(a) Loan Program",
            "SBA",
            GrantCategory::SmallBusiness,
            (5_000.0, 5_000_000.0),
            0.0,
            "Primary SBA program for financing working capital, equipment, inventory, or real estate.",
            "For-profit US business meeting SBA size standards with reasonable owner equity.",
            None,
            true,
            "https://www.sba.gov/funding-programs/loans/7a-loans",
        ),
        sample_program(
            "sba_microloan",
            "SBA Microloan Program",
            "SBA",
            GrantCategory::SmallBusiness,
            (500.0, 50_000.0),
            0.0,
            "Small short-term loans for working capital, inventory, supplies, or equipment.",
            "Small businesses and certain nonprofit childcare centers; startups are eligible.",
            None,
            true,
            "https://www.sba.gov/funding-programs/loans/microloans",
        ),
        sample_program(
            "hrsa_rural_health",
            "Rural Health Clinic Grant Program",
            "HHS",
            GrantCategory::Healthcare,
            (25_000.0, 200_000.0),
            0.0,
            "Supports rural health clinics in improving quality of care and expanding services.",
            "Certified Rural Health Clinic in a designated rural area.",
            deadline(60),
            false,
            "https://www.hrsa.gov/rural-health",
        ),
        sample_program(
            "pell_grant",
            "Federal Pell Grant",
            "ED",
            GrantCategory::Education,
            (750.0, 7_395.0),
            0.0,
            "Need-based grants for undergraduate students pursuing a first bachelor's degree.",
            "Exceptional financial need and enrollment in an eligible degree program.",
            None,
            true,
            "https://studentaid.gov/understand-aid/types/grants/pell",
        ),
        sample_program(
            "nonprofit_capacity",
            "Nonprofit Capacity Building Grant",
            "CNCS",
            GrantCategory::Nonprofit,
            (10_000.0, 75_000.0),
            0.25,
            "Funding to strengthen nonprofit operations and programs.",
            "501(c)(3) with at least two years of operation and community impact.",
            deadline(75),
            false,
            "https://americorps.gov/grants",
        ),
        sample_program(
            "usda_value_added",
            "Value-Added Producer Grant",
            "USDA",
            GrantCategory::Agriculture,
            (10_000.0, 250_000.0),
            0.5,
            "Helps agricultural producers develop new products and expand marketing.",
            "Independent producers, farmer cooperatives, or producer-based businesses.",
            deadline(80),
            false,
            "https://www.rd.usda.gov/programs-services/business-programs/value-added-producer-grants",
        ),
        sample_program(
            "sbir_phase1",
            "Small Business Innovation Research (SBIR) Phase I",
            "NSF",
            GrantCategory::Technology,
            (50_000.0, 275_000.0),
            0.0,
            "R&D funding for small businesses; Phase I establishes feasibility.",
            "US small business with fewer than 500 employees.",
            deadline(65),
            false,
            "https://www.sbir.gov/",
        ),
        sample_program(
            "hud_home",
            "HOME Investment Partnerships Program",
            "HUD",
            GrantCategory::Housing,
            (50_000.0, 1_000_000.0),
            0.25,
            "Grants to build, buy, and rehabilitate affordable housing.",
            "States, local governments, or designated CHDOs.",
            deadline(110),
            false,
            "https://www.hud.gov/program_offices/comm_planning/home",
        ),
        sample_program(
            "usda_rural_repair",
            "Rural Housing Repair Grant",
            "USDA",
            GrantCategory::Housing,
            (1_000.0, 10_000.0),
            0.0,
            "Grants to very low-income homeowners to repair and modernize rural homes.",
            "Owner-occupants in rural areas, 62 or older, unable to repay a repair loan.",
            None,
            true,
            "https://www.rd.usda.gov/programs-services/single-family-housing-programs",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn sample_program(
    id: &str,
    name: &str,
    agency: &str,
    category: GrantCategory,
    awards: (f64, f64),
    match_required: f64,
    description: &str,
    eligibility_summary: &str,
    deadline: Option<NaiveDate>,
    rolling_deadline: bool,
    program_url: &str,
) -> GrantProgram {
    GrantProgram {
        id: ProgramId(id.to_string()),
        name: name.to_string(),
        agency: Some(agency.to_string()),
        category: Some(category),
        min_award: Some(awards.0),
        max_award: Some(awards.1),
        match_required: Some(match_required),
        description: Some(description.to_string()),
        eligibility_summary: Some(eligibility_summary.to_string()),
        deadline,
        rolling_deadline,
        program_url: Some(program_url.to_string()),
        is_active: true,
    }
}
