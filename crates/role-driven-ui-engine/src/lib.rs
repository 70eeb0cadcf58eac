mod content;
pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use io::{CatalogError, CatalogFormat, CatalogSource, load_catalog, parse_catalog, write_catalog};
pub use models::{Catalog, Footer, Guideline, Link, Section};
pub use parsing::{TextFragment, join, parse};
pub use render::{RenderFormat, render, render_html, render_markdown, render_plain};
