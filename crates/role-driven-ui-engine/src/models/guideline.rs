use serde::{Deserialize, Serialize};

use crate::parsing::{TextFragment, parse};

/// One prose recommendation, shown as a list item.
///
/// Serializes as its bare description string so catalogs on disk read as
/// plain lists of sentences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Guideline {
    pub description: String,
}

impl Guideline {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    /// Parses the description into display fragments.
    ///
    /// Recomputed on every call; fragments are never cached on the model.
    pub fn fragments(&self) -> Vec<TextFragment> {
        parse(&self.description)
    }
}

impl From<&str> for Guideline {
    fn from(description: &str) -> Self {
        Self::new(description)
    }
}
