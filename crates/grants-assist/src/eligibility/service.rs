use std::sync::Arc;

use super::engine::{EligibilityEngine, EligibilitySummary, EligibilityVerdict};
use super::policy::ScoringPolicy;
use crate::profiles::{ProfileStore, ProfileStoreError, UserId};
use crate::programs::{CatalogError, ProgramCatalog, ProgramFilter, ProgramId};

/// Service composing the profile store, program catalog, and scoring engine.
pub struct EligibilityService<P, C> {
    profiles: Arc<P>,
    catalog: Arc<C>,
    engine: Arc<EligibilityEngine>,
}

impl<P, C> EligibilityService<P, C>
where
    P: ProfileStore + 'static,
    C: ProgramCatalog + 'static,
{
    pub fn new(profiles: Arc<P>, catalog: Arc<C>, policy: ScoringPolicy) -> Self {
        Self {
            profiles,
            catalog,
            engine: Arc::new(EligibilityEngine::new(policy)),
        }
    }

    /// Rank every active program for the user.
    ///
    /// Users without a profile get the zeroed summary without touching the
    /// catalog.
    pub fn check_all(&self, user: &UserId) -> Result<EligibilitySummary, EligibilityServiceError> {
        let profile = self.profiles.find_by_user(user)?;
        if profile.is_none() {
            return Ok(EligibilitySummary::default());
        }

        let programs = self.catalog.active(&ProgramFilter::default())?;
        Ok(self.engine.check_programs(profile.as_ref(), &programs))
    }

    /// Evaluate the user against one specific program.
    ///
    /// An unresolvable program id is the only not-found condition; a missing
    /// profile instead yields the complete-your-profile sentinel verdict.
    pub fn check_program(
        &self,
        user: &UserId,
        program_id: &ProgramId,
    ) -> Result<EligibilityVerdict, EligibilityServiceError> {
        let program = self
            .catalog
            .fetch(program_id)?
            .ok_or(CatalogError::NotFound)?;

        match self.profiles.find_by_user(user)? {
            Some(profile) => Ok(self.engine.evaluate(&profile, &program)),
            None => Ok(self.engine.profile_required(program.id)),
        }
    }
}

/// Error raised by the eligibility service.
#[derive(Debug, thiserror::Error)]
pub enum EligibilityServiceError {
    #[error(transparent)]
    Profiles(#[from] ProfileStoreError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
