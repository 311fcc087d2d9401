use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use shared::CheckRequest;
use tracing::info;

use crate::domain::{dates, CheckService, PreviewOutcome};

/// Application state containing the CheckService
#[derive(Clone)]
pub struct AppState {
    pub check_service: CheckService,
}

impl AppState {
    /// Create new application state with the given CheckService
    pub fn new(check_service: CheckService) -> Self {
        Self { check_service }
    }
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/checks/preview", post(preview_check))
        .route("/checks/validate", post(validate_check))
        .route("/checks/limits", get(check_limits))
        .route("/checks/current-date", get(current_date));

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Axum handler function for POST /api/checks/preview
pub async fn preview_check(
    State(state): State<AppState>,
    Json(request): Json<CheckRequest>,
) -> impl IntoResponse {
    info!("POST /api/checks/preview - payee: {:?}", request.payee);

    match state.check_service.preview(&request) {
        Ok(PreviewOutcome::Ready(response)) => (StatusCode::OK, Json(response)).into_response(),
        Ok(PreviewOutcome::Rejected(validation)) => {
            (StatusCode::UNPROCESSABLE_ENTITY, Json(validation)).into_response()
        }
        Err(e) => {
            tracing::error!("Error building check preview: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error building check preview").into_response()
        }
    }
}

/// Axum handler function for POST /api/checks/validate
pub async fn validate_check(
    State(state): State<AppState>,
    Json(request): Json<CheckRequest>,
) -> impl IntoResponse {
    info!("POST /api/checks/validate - payee: {:?}", request.payee);

    let validation = state.check_service.validate(&request);
    (StatusCode::OK, Json(validation)).into_response()
}

/// Axum handler function for GET /api/checks/limits
pub async fn check_limits(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/checks/limits");

    (StatusCode::OK, Json(state.check_service.limits().clone())).into_response()
}

/// Axum handler function for GET /api/checks/current-date
pub async fn current_date() -> impl IntoResponse {
    info!("GET /api/checks/current-date");

    (StatusCode::OK, Json(dates::current_date_response())).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use shared::{CheckPreviewResponse, CheckValidation, CurrentDateResponse};
    use tower::ServiceExt;

    fn test_app() -> Router {
        app(AppState::new(CheckService::new()))
    }

    fn json_request(uri: &str, body: &CheckRequest) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(body).unwrap()))
            .unwrap()
    }

    fn valid_request() -> CheckRequest {
        CheckRequest {
            payee: "ACME Corp.".to_string(),
            amount: "1234.56".to_string(),
            ..CheckRequest::default()
        }
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_preview_valid_check() {
        let response = test_app()
            .oneshot(json_request("/api/checks/preview", &valid_request()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let preview: CheckPreviewResponse = body_json(response).await;
        assert_eq!(preview.formatted_amount, "$1,234.56");
        assert_eq!(preview.amount_in_words.len(), 81);
        assert!(preview
            .amount_in_words
            .starts_with("One thousand two hundred thirty-four and 56/100 Dollars"));
    }

    #[tokio::test]
    async fn test_preview_invalid_check_returns_unprocessable() {
        let request = CheckRequest {
            payee: String::new(),
            ..valid_request()
        };

        let response = test_app()
            .oneshot(json_request("/api/checks/preview", &request))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let validation: CheckValidation = body_json(response).await;
        assert!(!validation.is_valid);
        assert!(!validation.errors.is_empty());
    }

    #[tokio::test]
    async fn test_validate_endpoint_always_returns_ok() {
        let request = CheckRequest {
            amount: "abc".to_string(),
            ..valid_request()
        };

        let response = test_app()
            .oneshot(json_request("/api/checks/validate", &request))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let validation: CheckValidation = body_json(response).await;
        assert!(!validation.is_valid);
    }

    #[tokio::test]
    async fn test_limits_endpoint() {
        let response = test_app()
            .oneshot(Request::builder().uri("/api/checks/limits").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let limits: shared::CheckLimits = body_json(response).await;
        assert_eq!(limits.payee_max_length, 150);
        assert_eq!(limits.amount_max, 999_999.99);
    }

    #[tokio::test]
    async fn test_current_date_endpoint() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/checks/current-date")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let current: CurrentDateResponse = body_json(response).await;
        assert_eq!(current.iso_date, dates::today_local_iso());
    }
}
