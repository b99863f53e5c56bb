//! Report rendering for readiness assessments.

pub mod html;
pub mod markdown;

pub use html::{generate_html, write_html_report};
pub use markdown::{to_markdown, write_markdown_report};
