use serde::{Deserialize, Serialize};

use super::policy::ScoringPolicy;
use super::rules;
use crate::profiles::ApplicantProfile;
use crate::programs::{GrantProgram, ProgramId};

const FULLY_COMPLIANT_NOTE: &str = "You appear to meet all requirements";
const PROFILE_REQUIRED_NOTE: &str = "Complete your profile to check eligibility";

/// Stateless evaluator applying the scoring policy to profile/program pairs.
pub struct EligibilityEngine {
    policy: ScoringPolicy,
}

impl EligibilityEngine {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Evaluate one profile against one program.
    ///
    /// Pure and total: every profile field may be absent, and absence only
    /// ever costs points. A verdict with no missing requirements always
    /// scores 100; otherwise the threshold decides eligibility.
    pub fn evaluate(
        &self,
        profile: &ApplicantProfile,
        program: &GrantProgram,
    ) -> EligibilityVerdict {
        let (match_score, missing_requirements) =
            rules::score_profile(profile, program, &self.policy);

        let eligible = missing_requirements.is_empty()
            || match_score >= self.policy.eligible_score_threshold;

        let notes = if missing_requirements.is_empty() {
            FULLY_COMPLIANT_NOTE.to_string()
        } else {
            format!("Match score: {match_score}%")
        };

        EligibilityVerdict {
            program_id: program.id.clone(),
            eligible,
            match_score,
            missing_requirements,
            notes,
        }
    }

    /// Evaluate every supplied program for one user and rank the verdicts.
    ///
    /// Without a profile there is nothing to score, so the summary reports
    /// zero programs even when the catalog is non-empty. Ranking sorts by
    /// match score descending; ties keep the caller's ordering.
    pub fn check_programs(
        &self,
        profile: Option<&ApplicantProfile>,
        programs: &[GrantProgram],
    ) -> EligibilitySummary {
        let Some(profile) = profile else {
            return EligibilitySummary::default();
        };

        let mut verdicts: Vec<EligibilityVerdict> = programs
            .iter()
            .map(|program| self.evaluate(profile, program))
            .collect();

        let eligible_count = verdicts.iter().filter(|verdict| verdict.eligible).count();

        verdicts.sort_by(|left, right| {
            right
                .match_score
                .partial_cmp(&left.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        EligibilitySummary {
            total_programs: programs.len(),
            eligible_count,
            programs: verdicts,
        }
    }

    /// Sentinel verdict for single-program checks by users without a profile.
    pub fn profile_required(&self, program_id: ProgramId) -> EligibilityVerdict {
        EligibilityVerdict {
            program_id,
            eligible: false,
            match_score: 0.0,
            missing_requirements: vec!["Please complete your profile first".to_string()],
            notes: PROFILE_REQUIRED_NOTE.to_string(),
        }
    }
}

/// Outcome of evaluating one profile against one program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityVerdict {
    pub program_id: ProgramId,
    pub eligible: bool,
    pub match_score: f32,
    pub missing_requirements: Vec<String>,
    pub notes: String,
}

/// Ranked verdicts across the active catalog for one user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EligibilitySummary {
    pub total_programs: usize,
    pub eligible_count: usize,
    pub programs: Vec<EligibilityVerdict>,
}
