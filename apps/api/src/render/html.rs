//! HTML renderer — lays generated content out as a single print-ready page.
//!
//! Header and education blocks are placeholders the user edits by hand; the
//! generator never produces names, contact details or degrees.

use std::fmt::Write;

use crate::models::resume::GeneratedContent;
use crate::render::templates::{TemplateId, TemplateStyle};

/// Renders `content` with `template` into a standalone HTML document.
/// All content is escaped; template styles are trusted.
pub fn render_html(content: &GeneratedContent, template: TemplateId) -> String {
    let style = template.style();

    let mut bullets = String::new();
    for bullet in &content.bullets {
        let _ = write!(bullets, "<li>{}</li>", escape_html(bullet));
    }

    let mut skills = String::new();
    for keyword in &content.keywords {
        let _ = write!(skills, r#"<span class="skill-tag">{}</span>"#, escape_html(keyword));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Resume</title>
<style>
{css}
</style>
</head>
<body class="template-{template_id}">
<div class="header">
<h1>Your Name</h1>
<p>your.email@example.com | (555) 123-4567 | LinkedIn Profile</p>
</div>
<div class="section">
<h2 class="section-title">Professional Summary</h2>
<p class="summary">{summary}</p>
</div>
<div class="section">
<h2 class="section-title">Professional Experience</h2>
<div class="experience-item">
<div class="experience-header">
<div>
<div class="job-title">Your Job Title</div>
<div class="company">Company Name</div>
</div>
<div class="date">2020 - Present</div>
</div>
<ul class="bullets">{bullets}</ul>
</div>
</div>
<div class="section">
<h2 class="section-title">Key Skills</h2>
<div class="skills">{skills}</div>
</div>
<div class="section">
<h2 class="section-title">Education</h2>
<div class="education-item">
<div>
<div class="degree">Your Degree</div>
<div class="university">University Name</div>
</div>
<div class="date">Graduation Year</div>
</div>
</div>
</body>
</html>
"#,
        css = stylesheet(&style),
        template_id = template.as_str(),
        summary = escape_html(&content.summary),
        bullets = bullets,
        skills = skills,
    )
}

fn stylesheet(style: &TemplateStyle) -> String {
    format!(
        r#"* {{ margin: 0; padding: 0; box-sizing: border-box; }}
body {{ font-family: {font}; line-height: 1.6; color: #374151; background: white; padding: 40px; font-size: 14px; }}
.header {{ text-align: center; padding-bottom: 20px; border-bottom: {header_border}; margin-bottom: 30px; }}
.header h1 {{ font-size: 28px; font-weight: bold; color: #1f2937; margin-bottom: 8px; }}
.header p {{ color: #6b7280; font-size: 14px; }}
.section {{ margin-bottom: 25px; }}
.section-title {{ font-size: 18px; font-weight: bold; color: #1f2937; margin-bottom: 12px; {section_title} }}
.summary {{ text-align: justify; line-height: 1.7; }}
.experience-item {{ margin-bottom: 20px; }}
.experience-header, .education-item {{ display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 8px; }}
.job-title, .degree {{ font-weight: bold; color: #1f2937; }}
.job-title {{ font-size: 16px; }}
.company, .date, .university {{ color: #6b7280; font-size: 14px; }}
.bullets {{ margin-left: 20px; }}
.bullets li {{ margin-bottom: 4px; line-height: 1.5; }}
.skills {{ display: flex; flex-wrap: wrap; gap: 8px; }}
.skill-tag {{ padding: 4px 8px; border-radius: 4px; font-size: 12px; {skill_tag} }}
@page {{ size: A4; margin: 0.5in; }}
@media print {{ body {{ padding: 20px; }} }}"#,
        font = style.font_family,
        header_border = style.header_border,
        section_title = style.section_title_css,
        skill_tag = style.skill_tag_css,
    )
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
