pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ats::handlers as ats_handlers;
use crate::errors::AppError;
use crate::generation::handlers as generation_handlers;
use crate::render::handlers as render_handlers;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation API
        .route(
            "/api/v1/resumes/generate",
            post(generation_handlers::handle_generate),
        )
        // ATS API
        .route("/api/v1/ats/score", post(ats_handlers::handle_score))
        // Render API
        .route(
            "/api/v1/templates",
            get(render_handlers::handle_list_templates),
        )
        .route("/api/v1/render", post(render_handlers::handle_render))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::ats::scoring::KeywordAtsScorer;
    use crate::generation::generator::ContentGenerator;
    use crate::models::resume::GeneratedContent;

    /// Returns canned content so routes can be exercised without a model.
    struct CannedGenerator;

    #[async_trait]
    impl ContentGenerator for CannedGenerator {
        async fn generate(
            &self,
            experience: &str,
            _job_description: Option<&str>,
        ) -> Result<GeneratedContent, AppError> {
            Ok(GeneratedContent {
                summary: format!("Built React applications with TypeScript. {experience}"),
                bullets: vec!["Led team communication efforts".to_string()],
                keywords: vec!["React".to_string(), "TypeScript".to_string()],
            })
        }
    }

    fn test_router() -> Router {
        build_router(AppState {
            ats_scorer: Arc::new(KeywordAtsScorer),
            content_generator: Arc::new(CannedGenerator),
        })
    }

    async fn post_json(uri: &str, body: Value) -> Response {
        test_router()
            .oneshot(
                Request::post(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_score_endpoint_returns_report() {
        let response = post_json(
            "/api/v1/ats/score",
            json!({
                "job_description": "Python Django backend with Docker and Kubernetes",
                "summary": "Frontend developer",
                "bullets": ["Built UI components"]
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["report"]["categories"]["technical"]["percentage"], 0);
        assert_eq!(
            body["report"]["categories"]["technical"]["missing"],
            json!(["python", "docker", "kubernetes"])
        );
        assert!(body.get("disclaimer").is_none());
    }

    #[tokio::test]
    async fn test_score_endpoint_flags_blank_job_description() {
        let response = post_json(
            "/api/v1/ats/score",
            json!({"job_description": "  ", "summary": "Anything", "bullets": []}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["report"]["overall"], 100);
        assert_eq!(body["report"]["tier"], "strong");
        assert!(body["disclaimer"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_generate_with_job_description_includes_report() {
        let response = post_json(
            "/api/v1/resumes/generate",
            json!({
                "experience": "Five years of frontend work",
                "job_description": "Looking for a React and TypeScript developer with strong communication skills"
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["content"]["keywords"], json!(["React", "TypeScript"]));
        assert_eq!(body["match_report"]["tier"], "strong");
    }

    #[tokio::test]
    async fn test_generate_without_job_description_omits_report() {
        let response = post_json(
            "/api/v1/resumes/generate",
            json!({"experience": "Five years of frontend work", "job_description": ""}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body.get("match_report").is_none());
    }

    #[tokio::test]
    async fn test_generate_rejects_blank_experience() {
        let response = post_json("/api/v1/resumes/generate", json!({"experience": " "})).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_render_returns_html() {
        let response = post_json(
            "/api/v1/render",
            json!({
                "content": {
                    "summary": "Engineer",
                    "bullets": ["Shipped things"],
                    "keywords": ["Rust"]
                },
                "template": "modern"
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
        let html = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(html.contains("template-modern"));
        assert!(html.contains("<li>Shipped things</li>"));
    }

    #[tokio::test]
    async fn test_render_rejects_unknown_template() {
        let response = post_json(
            "/api/v1/render",
            json!({"content": {"summary": "Engineer"}, "template": "baroque"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_render_rejects_empty_content() {
        let response = post_json("/api/v1/render", json!({"content": {"summary": ""}})).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_templates() {
        let response = test_router()
            .oneshot(Request::get("/api/v1/templates").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let response = test_router()
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
