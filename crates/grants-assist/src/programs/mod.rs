//! Grant program catalog: the funding-opportunity records users browse and
//! the read interface eligibility checks consume.

pub mod router;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use router::program_router;

/// Identifier wrapper for catalog entries (e.g. `sba_7a`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProgramId(pub String);

/// Categories of grants supported by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantCategory {
    Healthcare,
    SmallBusiness,
    Education,
    Nonprofit,
    Agriculture,
    Technology,
    Housing,
}

impl GrantCategory {
    pub const ALL: [GrantCategory; 7] = [
        GrantCategory::Healthcare,
        GrantCategory::SmallBusiness,
        GrantCategory::Education,
        GrantCategory::Nonprofit,
        GrantCategory::Agriculture,
        GrantCategory::Technology,
        GrantCategory::Housing,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            GrantCategory::Healthcare => "healthcare",
            GrantCategory::SmallBusiness => "small_business",
            GrantCategory::Education => "education",
            GrantCategory::Nonprofit => "nonprofit",
            GrantCategory::Agriculture => "agriculture",
            GrantCategory::Technology => "technology",
            GrantCategory::Housing => "housing",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            GrantCategory::Healthcare => "Healthcare",
            GrantCategory::SmallBusiness => "Small Business",
            GrantCategory::Education => "Education",
            GrantCategory::Nonprofit => "Nonprofit",
            GrantCategory::Agriculture => "Agriculture",
            GrantCategory::Technology => "Technology",
            GrantCategory::Housing => "Housing",
        }
    }
}

/// A funding opportunity as served by the catalog.
///
/// Scoring reads only `id`, `agency`, and `category`; the remaining fields
/// exist for browsing and are passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrantProgram {
    pub id: ProgramId,
    pub name: String,
    pub agency: Option<String>,
    pub category: Option<GrantCategory>,

    pub min_award: Option<f64>,
    pub max_award: Option<f64>,
    pub match_required: Option<f64>,

    pub description: Option<String>,
    pub eligibility_summary: Option<String>,

    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub rolling_deadline: bool,

    pub program_url: Option<String>,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl GrantProgram {
    /// Case-insensitive match against the list endpoint's search term.
    pub fn matches_search(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self
                .description
                .as_deref()
                .is_some_and(|text| text.to_lowercase().contains(&needle))
    }
}

/// Optional narrowing applied when listing active programs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProgramFilter {
    pub category: Option<GrantCategory>,
    pub search: Option<String>,
}

/// Read-side catalog access for browsing and eligibility checks.
pub trait ProgramCatalog: Send + Sync {
    fn fetch(&self, id: &ProgramId) -> Result<Option<GrantProgram>, CatalogError>;

    /// Active programs matching the filter, ordered by name.
    fn active(&self, filter: &ProgramFilter) -> Result<Vec<GrantProgram>, CatalogError>;
}

/// Error enumeration for catalog failures.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("program not found")]
    NotFound,
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}
