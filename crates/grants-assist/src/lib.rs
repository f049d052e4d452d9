//! Core domain for the GrantsAssist platform.
//!
//! The crate owns the pieces a grant-matching deployment shares regardless of
//! its storage or transport choices: applicant profiles and the read trait to
//! resolve them, the grant program catalog, and the eligibility scoring
//! engine together with the axum routers that serve it.

pub mod config;
pub mod eligibility;
pub mod error;
pub mod profiles;
pub mod programs;
pub mod telemetry;
