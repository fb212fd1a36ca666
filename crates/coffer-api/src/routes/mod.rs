//! API route handlers

pub mod ledger;
pub mod oracle;

use axum::{http::StatusCode, routing::get, Json, Router};

use crate::dto::{ApiError, HealthResponse};
use crate::AppState;

/// Create the API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/ledger", ledger::router())
        .nest("/oracle", oracle::router())
        .with_state(state)
}

/// GET /health - Check API health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Map a core error to an HTTP response
pub(crate) fn map_error(e: coffer_core::Error) -> (StatusCode, Json<ApiError>) {
    use coffer_core::Error;

    let (status, code) = match &e {
        Error::Ledger(le) => (le.status_code(), le.error_code()),
        Error::Feed(fe) => (fe.status_code(), fe.error_code()),
        Error::Config(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::internal(e.to_string())),
            )
        }
    };

    (
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(ApiError::new(code, e.to_string())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use coffer_core::LedgerError;

    #[test]
    fn test_map_error_statuses() {
        let (status, body) = map_error(
            LedgerError::NotOwner {
                caller: "mallory".into(),
            }
            .into(),
        );
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body.0.code, "not_owner");

        let (status, body) = map_error(
            LedgerError::IndexOutOfRange { index: 0, len: 0 }.into(),
        );
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.0.code, "index_out_of_range");

        let (status, body) = map_error(coffer_core::Error::Config("bad floor".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.code, "internal_error");
    }
}
