use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::{CatalogError, GrantCategory, GrantProgram, ProgramCatalog, ProgramFilter, ProgramId};

/// Router builder exposing read-only catalog endpoints.
pub fn program_router<C>(catalog: Arc<C>) -> Router
where
    C: ProgramCatalog + 'static,
{
    Router::new()
        .route("/api/v1/programs", get(list_handler::<C>))
        .route("/api/v1/programs/categories", get(categories_handler))
        .route("/api/v1/programs/:program_id", get(fetch_handler::<C>))
        .with_state(catalog)
}

/// Payload for the program listing endpoint.
#[derive(Debug, Serialize)]
pub struct ProgramListResponse {
    pub total: usize,
    pub programs: Vec<GrantProgram>,
}

pub(crate) async fn list_handler<C>(
    State(catalog): State<Arc<C>>,
    Query(filter): Query<ProgramFilter>,
) -> Response
where
    C: ProgramCatalog + 'static,
{
    match catalog.active(&filter) {
        Ok(programs) => {
            let payload = ProgramListResponse {
                total: programs.len(),
                programs,
            };
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => catalog_error_response(error),
    }
}

pub(crate) async fn categories_handler() -> axum::Json<serde_json::Value> {
    let categories: Vec<serde_json::Value> = GrantCategory::ALL
        .iter()
        .map(|category| {
            json!({
                "id": category.label(),
                "name": category.display_name(),
            })
        })
        .collect();

    axum::Json(json!({ "categories": categories }))
}

pub(crate) async fn fetch_handler<C>(
    State(catalog): State<Arc<C>>,
    Path(program_id): Path<String>,
) -> Response
where
    C: ProgramCatalog + 'static,
{
    let id = ProgramId(program_id);
    match catalog.fetch(&id) {
        Ok(Some(program)) => (StatusCode::OK, axum::Json(program)).into_response(),
        Ok(None) | Err(CatalogError::NotFound) => {
            let payload = json!({ "error": "program not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(error) => catalog_error_response(error),
    }
}

fn catalog_error_response(error: CatalogError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
