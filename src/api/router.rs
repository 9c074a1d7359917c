use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{logging_middleware, metrics_middleware, security_headers_middleware};
use super::state::AppState;
use super::ui;
use super::v1;

/// Health and JSON API routes only
pub fn create_api_router(state: AppState) -> Router {
    with_middleware(api_routes(), state)
}

/// Form page plus the JSON API on the same port
pub fn create_router_with_ui(state: AppState) -> Router {
    with_middleware(api_routes().merge(ui::create_ui_router()), state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .nest("/v1", v1::create_v1_router())
}

fn with_middleware(routes: Router<AppState>, state: AppState) -> Router {
    routes
        .route_layer(middleware::from_fn(metrics_middleware))
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::AppConfig;
    use crate::domain::classifier::MockObesityClassifier;
    use crate::domain::DomainError;
    use crate::infrastructure::services::PredictionService;

    fn app() -> Router {
        let state = crate::create_app_state(&AppConfig::default()).unwrap();
        create_router_with_ui(state)
    }

    fn failing_app() -> Router {
        let mut mock = MockObesityClassifier::new();
        mock.expect_classify()
            .returning(|_| Err(DomainError::prediction("tree has not been fitted")));

        let service = PredictionService::new(Arc::new(mock));
        create_router_with_ui(AppState::new(Arc::new(service)))
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        serde_json::from_str(&body_string(response).await).unwrap()
    }

    fn json_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn form_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_form_page_renders() {
        let response = app().oneshot(get("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        assert_eq!(
            response.headers().get(header::X_FRAME_OPTIONS).unwrap(),
            "DENY"
        );

        let html = body_string(response).await;
        assert!(html.contains("Obesity Risk Predictor"));
        assert!(!html.contains("Predicted level"));
    }

    #[tokio::test]
    async fn test_form_submission_shows_prediction() {
        let body = "age=30&gender=male&weight=70.0&height=1.70\
                    &family_history=no&high_calorie_food=no&exercise_days=3";
        let response = app().oneshot(form_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Predicted level:"));
        assert!(html.contains("FAF (exercise, 0-3 scale): 2"));
    }

    #[tokio::test]
    async fn test_form_submission_reproduces_training_row() {
        // Row 3 of the training sample: 19 years, 55 kg, 1.65 m, no/no, bucket 2
        let body = "age=19&weight=55&height=1.65&family_history=no\
                    &high_calorie_food=no&exercise_days=3";
        let html = body_string(app().oneshot(form_request(body)).await.unwrap()).await;

        assert!(html.contains("data-level=\"IW\""));
        assert!(html.contains("Predicted level: Insufficient Weight"));
    }

    #[tokio::test]
    async fn test_form_failure_shows_error_box() {
        let response = failing_app()
            .oneshot(form_request("age=30&exercise_days=2"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Prediction failed: tree has not been fitted"));
        assert!(!html.contains("Predicted level"));
    }

    #[tokio::test]
    async fn test_blank_form_field_renders_error_box() {
        let response = app()
            .oneshot(form_request("age=30&weight=&height=1.70&exercise_days=2"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Obesity Risk Predictor"));
        assert!(html.contains("notice error"));
        assert!(html.contains("Invalid form data"));
        assert!(html.contains("value=\"70.0\""));
        assert!(!html.contains("Predicted level"));
    }

    #[tokio::test]
    async fn test_json_prediction() {
        let request = json_request(
            "/v1/predictions",
            r#"{"age": 45, "weight": 95, "height": 1.75, "family_history": "yes",
                "high_calorie_food": "yes", "exercise_days": 2}"#,
        );
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["object"], "prediction");
        assert_eq!(json["level"]["code"], "O");
        assert_eq!(json["level"]["color"], "red");
        assert_eq!(json["features"]["faf"], 1);
        assert_eq!(json["advice"]["kind"], "warning");
    }

    #[tokio::test]
    async fn test_json_prediction_is_deterministic() {
        let body = r#"{"age": 30, "weight": 70, "height": 1.70, "exercise_days": 3}"#;

        let first = body_json(app().oneshot(json_request("/v1/predictions", body)).await.unwrap()).await;
        let second = body_json(app().oneshot(json_request("/v1/predictions", body)).await.unwrap()).await;

        assert_eq!(first["level"], second["level"]);
        let code = first["level"]["code"].as_str().unwrap();
        assert!(["IW", "N", "OW", "O"].contains(&code));
    }

    #[tokio::test]
    async fn test_json_prediction_failure() {
        let response = failing_app()
            .oneshot(json_request("/v1/predictions", "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"]["type"], "server_error");
        assert_eq!(json["error"]["code"], "prediction_failed");
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected_as_json() {
        let response = app()
            .oneshot(json_request("/v1/predictions", r#"{"family_history": "maybe"}"#))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
        let json = body_json(response).await;
        assert_eq!(json["error"]["type"], "invalid_request_error");
        assert_eq!(json["error"]["code"], "json_parse_error");
    }

    #[tokio::test]
    async fn test_categories() {
        let response = app().oneshot(get("/v1/categories")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let codes: Vec<&str> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["code"].as_str().unwrap())
            .collect();
        assert_eq!(codes, vec!["IW", "N", "OW", "O"]);
    }

    #[tokio::test]
    async fn test_model_summary() {
        let json = body_json(app().oneshot(get("/v1/model")).await.unwrap()).await;

        assert_eq!(json["object"], "model");
        assert_eq!(json["algorithm"], "decision_tree");
        assert_eq!(json["n_samples"], 10);
        assert_eq!(json["criterion"], "gini");
        assert_eq!(json["min_samples_split"], 2);
        assert_eq!(json["classes"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let health = app().oneshot(get("/health")).await.unwrap();
        assert_eq!(health.status(), StatusCode::OK);

        let live = app().oneshot(get("/live")).await.unwrap();
        assert_eq!(live.status(), StatusCode::OK);

        let ready = app().oneshot(get("/ready")).await.unwrap();
        assert_eq!(ready.status(), StatusCode::OK);
        let json = body_json(ready).await;
        assert_eq!(json["checks"][0]["name"], "classifier");
    }

    #[tokio::test]
    async fn test_ready_reports_broken_classifier() {
        let response = failing_app().oneshot(get("/ready")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_api_router_has_no_form() {
        let state = crate::create_app_state(&AppConfig::default()).unwrap();
        let response = create_api_router(state).oneshot(get("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
