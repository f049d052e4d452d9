use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::service::{EligibilityService, EligibilityServiceError};
use crate::profiles::{ProfileStore, UserId};
use crate::programs::{CatalogError, ProgramCatalog, ProgramId};

/// Router builder exposing the eligibility check endpoints.
///
/// Identity arrives as a path segment; authentication is the caller's layer.
pub fn eligibility_router<P, C>(service: Arc<EligibilityService<P, C>>) -> Router
where
    P: ProfileStore + 'static,
    C: ProgramCatalog + 'static,
{
    Router::new()
        .route(
            "/api/v1/eligibility/:user_id/check",
            get(check_handler::<P, C>),
        )
        .route(
            "/api/v1/eligibility/:user_id/check/:program_id",
            get(check_program_handler::<P, C>),
        )
        .with_state(service)
}

pub(crate) async fn check_handler<P, C>(
    State(service): State<Arc<EligibilityService<P, C>>>,
    Path(user_id): Path<String>,
) -> Response
where
    P: ProfileStore + 'static,
    C: ProgramCatalog + 'static,
{
    let user = UserId(user_id);
    match service.check_all(&user) {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn check_program_handler<P, C>(
    State(service): State<Arc<EligibilityService<P, C>>>,
    Path((user_id, program_id)): Path<(String, String)>,
) -> Response
where
    P: ProfileStore + 'static,
    C: ProgramCatalog + 'static,
{
    let user = UserId(user_id);
    let program = ProgramId(program_id);
    match service.check_program(&user, &program) {
        Ok(verdict) => (StatusCode::OK, axum::Json(verdict)).into_response(),
        Err(EligibilityServiceError::Catalog(CatalogError::NotFound)) => {
            let payload = json!({ "error": "program not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(error) => service_error_response(error),
    }
}

fn service_error_response(error: EligibilityServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
