use serde::{Deserialize, Serialize};

/// Resume content produced by the generation collaborator.
/// Consumed as opaque text by ATS scoring and by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub summary: String,
    #[serde(default)]
    pub bullets: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}
