//! Applicant profiles and the read interface eligibility checks consume.
//!
//! A profile is the reusable record a user fills in once and applies to many
//! programs. Every field is individually optional: a freshly created profile
//! is empty, and scoring treats each gap as a deduction rather than an error.

use serde::{Deserialize, Serialize};

/// Identifier wrapper for account holders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Reusable applicant record backing grant eligibility checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub full_name: Option<String>,
    pub organization_name: Option<String>,
    pub organization_type: Option<String>,

    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub congressional_district: Option<String>,

    pub ein: Option<String>,
    pub uei_number: Option<String>,
    #[serde(default)]
    pub sam_registered: bool,
    pub duns_number: Option<String>,

    pub phone: Option<String>,
    pub website: Option<String>,

    pub is_veteran: Option<bool>,
    pub is_minority_owned: Option<bool>,
    pub is_woman_owned: Option<bool>,
    pub is_rural: Option<bool>,
    pub annual_revenue: Option<f64>,
    pub employee_count: Option<u32>,
    pub years_in_operation: Option<u32>,
}

impl ApplicantProfile {
    /// Share of the core identity fields the user has filled in, as 0-100
    /// rounded to one decimal place.
    pub fn completeness(&self) -> f32 {
        let fields = [
            &self.full_name,
            &self.organization_name,
            &self.address,
            &self.city,
            &self.state,
            &self.zip_code,
            &self.phone,
            &self.ein,
            &self.uei_number,
        ];
        let filled = fields
            .iter()
            .filter(|field| field.as_deref().is_some_and(|value| !value.is_empty()))
            .count();

        (filled as f32 / fields.len() as f32 * 1000.0).round() / 10.0
    }
}

/// Read-side lookup the eligibility service uses to resolve a user's profile.
///
/// Absence is a normal outcome (`Ok(None)`), never an error: users without a
/// profile simply have no eligibility data yet.
pub trait ProfileStore: Send + Sync {
    fn find_by_user(&self, user: &UserId) -> Result<Option<ApplicantProfile>, ProfileStoreError>;
}

/// Error enumeration for profile store failures.
#[derive(Debug, thiserror::Error)]
pub enum ProfileStoreError {
    #[error("profile store unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_profile_has_zero_completeness() {
        assert_eq!(ApplicantProfile::default().completeness(), 0.0);
    }

    #[test]
    fn completeness_counts_only_populated_fields() {
        let profile = ApplicantProfile {
            full_name: Some("Avery Collins".to_string()),
            organization_name: Some("Prairie Works LLC".to_string()),
            city: Some("Des Moines".to_string()),
            state: Some("".to_string()),
            ..ApplicantProfile::default()
        };

        // 3 of 9 tracked fields; the empty string does not count.
        assert_eq!(profile.completeness(), 33.3);
    }

    #[test]
    fn profiles_deserialize_from_sparse_json() {
        let profile: ApplicantProfile =
            serde_json::from_str(r#"{ "organization_name": "Prairie Works LLC" }"#)
                .expect("sparse profile parses");
        assert_eq!(
            profile.organization_name.as_deref(),
            Some("Prairie Works LLC")
        );
        assert!(!profile.sam_registered);
        assert!(profile.ein.is_none());
    }
}
