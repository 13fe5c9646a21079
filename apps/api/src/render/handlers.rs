//! Axum route handlers for the Render API.

use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::GeneratedContent;
use crate::render::html::render_html;
use crate::render::templates::{template_catalogue, TemplateId, TemplateInfo};

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub content: GeneratedContent,
    #[serde(default)]
    pub template: String,
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<TemplateInfo>> {
    Json(template_catalogue())
}

/// POST /api/v1/render
///
/// Renders resume content into a print-ready HTML document.
pub async fn handle_render(Json(request): Json<RenderRequest>) -> Result<Response, AppError> {
    let template: TemplateId = request.template.parse()?;

    if request.content.summary.trim().is_empty() && request.content.bullets.is_empty() {
        return Err(AppError::Validation("Content is required".to_string()));
    }

    let html = render_html(&request.content, template);
    info!(
        "Rendered resume with '{}' template ({} bytes)",
        template.as_str(),
        html.len()
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "inline; filename=\"resume.html\""),
        ],
        html,
    )
        .into_response())
}
