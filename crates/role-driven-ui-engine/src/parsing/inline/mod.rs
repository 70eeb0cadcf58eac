//! # Inline Parsing
//!
//! Cursor-based splitting of guideline text into plain and code fragments.
//!
//! ## Modules
//!
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`kinds`**: `CodeSpan`, which owns the backtick delimiter
//! - **`types`**: `InlineNode`, the lossless span-based parse result
//! - **`parser`**: `parse_spans()` producing `InlineNode`s
//! - **`fragment`**: `TextFragment` plus `parse()`/`join()` over owned text
//!
//! ## Rules
//!
//! A code span is a backtick, one or more non-backtick characters, and a
//! backtick. Anything else, including a lone backtick or an empty pair
//! (`` `` ``), stays in the surrounding plain text. Spans are recognised
//! left to right and never overlap.

pub mod cursor;
pub mod fragment;
pub mod kinds;
pub mod parser;
pub mod types;

pub use fragment::{TextFragment, join, parse};
pub use parser::parse_spans;
pub use types::InlineNode;
