// Resume rendering.
// Template catalogue and HTML layout of generated content.

pub mod handlers;
pub mod html;
pub mod templates;
