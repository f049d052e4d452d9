use serde::{Deserialize, Serialize};

/// Agencies whose programs require SAM.gov registration and a UEI number.
/// Membership checks are exact and case-sensitive.
pub const FEDERAL_REGISTRATION_AGENCIES: [&str; 4] = ["USDA", "SBA", "HHS", "DOC"];

/// Organization types accepted by healthcare-only programs.
pub const HEALTHCARE_ORGANIZATION_TYPES: [&str; 4] =
    ["healthcare", "nonprofit", "hospital", "clinic"];

const DEFAULT_ELIGIBLE_SCORE_THRESHOLD: f32 = 70.0;

/// Deduction weights and allow-lists backing the scoring pass.
///
/// These are policy dials, not derived data: tests pin them and operators can
/// tune them without touching the rule control flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub organization_name_deduction: f32,
    pub tax_id_deduction: f32,
    pub address_deduction: f32,
    pub sam_registration_deduction: f32,
    pub uei_deduction: f32,
    pub annual_revenue_deduction: f32,
    pub employee_count_deduction: f32,
    pub organization_type_deduction: f32,
    /// Score at or above which a profile stays eligible despite open gaps.
    pub eligible_score_threshold: f32,
    pub federal_registration_agencies: Vec<String>,
    pub healthcare_organization_types: Vec<String>,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            organization_name_deduction: 20.0,
            tax_id_deduction: 15.0,
            address_deduction: 10.0,
            sam_registration_deduction: 15.0,
            uei_deduction: 15.0,
            annual_revenue_deduction: 10.0,
            employee_count_deduction: 10.0,
            organization_type_deduction: 30.0,
            eligible_score_threshold: DEFAULT_ELIGIBLE_SCORE_THRESHOLD,
            federal_registration_agencies: FEDERAL_REGISTRATION_AGENCIES
                .iter()
                .map(|agency| agency.to_string())
                .collect(),
            healthcare_organization_types: HEALTHCARE_ORGANIZATION_TYPES
                .iter()
                .map(|kind| kind.to_string())
                .collect(),
        }
    }
}

impl ScoringPolicy {
    /// Whether a program's agency sits on the federal registration allow-list.
    pub fn requires_federal_registration(&self, agency: Option<&str>) -> bool {
        agency.is_some_and(|name| {
            self.federal_registration_agencies
                .iter()
                .any(|listed| listed == name)
        })
    }

    /// Whether an organization type satisfies healthcare-only programs.
    pub fn accepts_healthcare_organization(&self, organization_type: Option<&str>) -> bool {
        organization_type.is_some_and(|kind| {
            self.healthcare_organization_types
                .iter()
                .any(|listed| listed == kind)
        })
    }
}
