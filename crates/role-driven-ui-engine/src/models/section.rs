use serde::{Deserialize, Serialize};

use super::Guideline;

/// A named group of guidelines displayed under one heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    #[serde(default)]
    pub items: Vec<Guideline>,
}

impl Section {
    pub fn new<I, G>(title: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: Into<Guideline>,
    {
        Self {
            title: title.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}
