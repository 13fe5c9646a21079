//! Resume template catalogue.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Identifier of a rendering template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    #[default]
    Classic,
    Modern,
}

impl TemplateId {
    pub const ALL: [TemplateId; 2] = [TemplateId::Classic, TemplateId::Modern];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Classic => "classic",
            TemplateId::Modern => "modern",
        }
    }

    pub fn style(&self) -> TemplateStyle {
        match self {
            TemplateId::Classic => TemplateStyle {
                name: "Classic Professional",
                description: "Traditional format with clean lines and serif typography",
                font_family: "'Times New Roman', serif",
                header_border: "1px solid #d1d5db",
                section_title_css: "border-bottom: 1px solid #d1d5db; padding-bottom: 4px;",
                skill_tag_css: "background-color: #f3f4f6; color: #6b7280;",
            },
            TemplateId::Modern => TemplateStyle {
                name: "Modern Clean",
                description: "Contemporary design with emerald accents and sans-serif fonts",
                font_family: "'Arial', sans-serif",
                header_border: "3px solid #059669",
                section_title_css:
                    "color: #059669; border-left: 4px solid #059669; padding-left: 12px;",
                skill_tag_css: "background-color: rgba(5, 150, 105, 0.1); color: #059669;",
            },
        }
    }
}

impl FromStr for TemplateId {
    type Err = AppError;

    /// Case-insensitive. Blank input selects the default template.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "classic" => Ok(TemplateId::Classic),
            "modern" => Ok(TemplateId::Modern),
            other => Err(AppError::Validation(format!(
                "Unknown template '{other}'. Expected one of: classic, modern"
            ))),
        }
    }
}

/// Presentation choices a template makes. All values are trusted CSS fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateStyle {
    pub name: &'static str,
    pub description: &'static str,
    pub font_family: &'static str,
    pub header_border: &'static str,
    pub section_title_css: &'static str,
    pub skill_tag_css: &'static str,
}

/// Catalogue entry returned by GET /api/v1/templates.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
}

pub fn template_catalogue() -> Vec<TemplateInfo> {
    TemplateId::ALL
        .iter()
        .map(|id| {
            let style = id.style();
            TemplateInfo {
                id: *id,
                name: style.name,
                description: style.description,
            }
        })
        .collect()
}
