//! # Rendering
//!
//! Turns a [`Catalog`] into a document: one heading per section followed by
//! an unordered list whose items are rendered fragment by fragment.
//!
//! - **`html`**: standalone markup with `<code class="inline-code">` spans
//! - **`markdown`**: the form read back by [`crate::io::parse_catalog`]
//! - **`plain`**: text without delimiters, for terminals and logs

pub mod html;
pub mod markdown;
pub mod plain;

use std::str::FromStr;

use crate::models::Catalog;

pub use html::render_html;
pub use markdown::render_markdown;
pub use plain::render_plain;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    Html,
    Markdown,
    Plain,
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown render format '{0}', expected html, markdown or plain")]
pub struct UnknownRenderFormat(pub String);

impl FromStr for RenderFormat {
    type Err = UnknownRenderFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(RenderFormat::Html),
            "markdown" | "md" => Ok(RenderFormat::Markdown),
            "plain" | "text" | "txt" => Ok(RenderFormat::Plain),
            _ => Err(UnknownRenderFormat(s.to_string())),
        }
    }
}

pub fn render(catalog: &Catalog, format: RenderFormat) -> String {
    match format {
        RenderFormat::Html => render_html(catalog),
        RenderFormat::Markdown => render_markdown(catalog),
        RenderFormat::Plain => render_plain(catalog),
    }
}
