use crate::infra::{default_scoring_policy, sample_programs, InMemoryProfileStore, InMemoryProgramCatalog};
use chrono::Local;
use clap::Args;
use grants_assist::eligibility::{EligibilityService, EligibilitySummary};
use grants_assist::error::AppError;
use grants_assist::profiles::{ApplicantProfile, UserId};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluate a profile loaded from a JSON file instead of the built-in sample
    #[arg(long)]
    pub(crate) profile: Option<PathBuf>,
    /// Also score an empty profile to show the no-data baseline
    #[arg(long)]
    pub(crate) include_empty: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        profile,
        include_empty,
    } = args;

    let catalog = Arc::new(InMemoryProgramCatalog::default());
    catalog.extend(sample_programs(Local::now().date_naive()));
    let profiles = Arc::new(InMemoryProfileStore::default());
    let service = EligibilityService::new(
        profiles.clone(),
        catalog.clone(),
        default_scoring_policy(),
    );

    let profile = match profile {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str::<ApplicantProfile>(&raw)?
        }
        None => sample_profile(),
    };

    let user = UserId("demo-applicant".to_string());
    profiles.upsert(user.clone(), profile.clone());

    println!("Grant eligibility demo");
    println!("Catalog: {} active programs", catalog.count());
    println!("Profile completeness: {}%", profile.completeness());

    let summary = service.check_all(&user)?;
    render_summary(&summary);

    if include_empty {
        let empty_user = UserId("new-applicant".to_string());
        profiles.upsert(empty_user.clone(), ApplicantProfile::default());
        let baseline = service.check_all(&empty_user)?;
        println!("\nBaseline: freshly created profile");
        render_summary(&baseline);
    }

    Ok(())
}

fn render_summary(summary: &EligibilitySummary) {
    println!(
        "\nEligible for {} of {} programs",
        summary.eligible_count, summary.total_programs
    );
    for verdict in &summary.programs {
        let marker = if verdict.eligible { "+" } else { "-" };
        println!(
            "{marker} {} | score {} | {}",
            verdict.program_id.0, verdict.match_score, verdict.notes
        );
        for requirement in &verdict.missing_requirements {
            println!("    missing: {requirement}");
        }
    }
}

fn sample_profile() -> ApplicantProfile {
    ApplicantProfile {
        full_name: Some("Jordan Reyes".to_string()),
        organization_name: Some("Cedar Valley Bakery".to_string()),
        organization_type: Some("small_business".to_string()),
        address: Some("14 Market Ave".to_string()),
        city: Some("Cedar Rapids".to_string()),
        state: Some("IA".to_string()),
        zip_code: Some("52401".to_string()),
        ein: Some("42-7654321".to_string()),
        uei_number: Some("MBX4K2T9QH31".to_string()),
        sam_registered: true,
        phone: Some("319-555-0142".to_string()),
        annual_revenue: Some(420_000.0),
        employee_count: Some(8),
        years_in_operation: Some(5),
        ..ApplicantProfile::default()
    }
}
