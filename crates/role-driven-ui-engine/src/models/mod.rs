pub mod catalog;
pub mod guideline;
pub mod section;

pub use catalog::{Catalog, Footer, Link};
pub use guideline::Guideline;
pub use section::Section;
