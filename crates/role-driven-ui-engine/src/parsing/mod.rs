//! # Parsing
//!
//! Guideline descriptions carry one piece of markup: inline code delimited by
//! a single backtick on each side. [`inline`] splits a description into
//! typed fragments; [`span`] holds the byte ranges the splitter works in.

pub mod inline;
pub mod span;

pub use inline::{TextFragment, join, parse};
pub use span::Span;
