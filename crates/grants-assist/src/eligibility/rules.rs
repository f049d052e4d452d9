use super::policy::ScoringPolicy;
use crate::profiles::ApplicantProfile;
use crate::programs::{GrantCategory, GrantProgram};

/// Run the point-deduction pass for one profile/program pair.
///
/// Rules are independent and additive, so their evaluation order never
/// changes the score; it does fix the order of the returned requirement
/// list, which clients display as-is. The score starts at 100 and is
/// floored at 0 after all deductions.
pub(crate) fn score_profile(
    profile: &ApplicantProfile,
    program: &GrantProgram,
    policy: &ScoringPolicy,
) -> (f32, Vec<String>) {
    let mut missing = Vec::new();
    let mut score = 100.0_f32;

    let category = program.category;
    let federal = policy.requires_federal_registration(program.agency.as_deref());

    if is_blank(&profile.organization_name) && category != Some(GrantCategory::Education) {
        missing.push("Organization name required".to_string());
        score -= policy.organization_name_deduction;
    }

    if is_blank(&profile.ein) && category != Some(GrantCategory::Education) {
        missing.push("EIN (Tax ID) required for federal grants".to_string());
        score -= policy.tax_id_deduction;
    }

    if is_blank(&profile.address) || is_blank(&profile.city) || is_blank(&profile.state) {
        missing.push("Complete address required".to_string());
        score -= policy.address_deduction;
    }

    if federal && !profile.sam_registered {
        missing.push("SAM.gov registration required".to_string());
        score -= policy.sam_registration_deduction;
    }

    if is_blank(&profile.uei_number) && federal {
        missing.push("UEI number required for federal grants".to_string());
        score -= policy.uei_deduction;
    }

    if category == Some(GrantCategory::SmallBusiness) {
        if profile.annual_revenue.is_none() {
            missing.push("Annual revenue information needed".to_string());
            score -= policy.annual_revenue_deduction;
        }
        if profile.employee_count.is_none() {
            missing.push("Employee count needed".to_string());
            score -= policy.employee_count_deduction;
        }
    }

    if category == Some(GrantCategory::Healthcare)
        && !policy.accepts_healthcare_organization(profile.organization_type.as_deref())
    {
        missing.push("Must be healthcare organization".to_string());
        score -= policy.organization_type_deduction;
    }

    (score.max(0.0), missing)
}

/// Absent and present-but-empty both count as missing for text fields.
fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}
