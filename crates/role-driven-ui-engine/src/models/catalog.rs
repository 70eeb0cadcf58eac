use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Guideline, Section};
use crate::parsing::TextFragment;

/// The whole guideline document: header, sections in display order, footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub title: String,
    /// Leading part of `title` shown with emphasis. Ignored unless it is a
    /// prefix of `title`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub last_updated: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Catalog {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            highlight: None,
            tagline: None,
            sections: Vec::new(),
            footer: None,
        }
    }

    /// The guideline catalog shipped with the crate.
    pub fn builtin() -> Self {
        crate::content::builtin_catalog()
    }

    /// Splits the title into its highlighted prefix and the remainder.
    ///
    /// Returns `(None, title)` when no highlight is set, it doesn't prefix
    /// the title, or it ends in the middle of a word.
    pub fn title_parts(&self) -> (Option<&str>, &str) {
        match self.highlight.as_deref() {
            Some(highlight) if !highlight.is_empty() => match self.title.strip_prefix(highlight) {
                Some(rest) if ends_on_word_boundary(highlight, rest) => {
                    (Some(highlight), rest.trim_start())
                }
                _ => (None, self.title.as_str()),
            },
            _ => (None, self.title.as_str()),
        }
    }

    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    pub fn guidelines(&self) -> impl Iterator<Item = &Guideline> {
        self.sections.iter().flat_map(|s| s.items.iter())
    }

    pub fn guideline_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// Every distinct inline-code text mentioned by any guideline, in the
    /// order first encountered.
    pub fn code_tokens(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut tokens = Vec::new();
        for guideline in self.guidelines() {
            for fragment in guideline.fragments() {
                if let TextFragment::Code(text) = fragment
                    && seen.insert(text.clone())
                {
                    tokens.push(text);
                }
            }
        }
        tokens
    }
}

fn ends_on_word_boundary(head: &str, rest: &str) -> bool {
    let last = head.chars().next_back();
    let next = rest.chars().next();
    match (last, next) {
        (_, None) => true,
        (Some(a), Some(b)) => !(a.is_alphanumeric() && b.is_alphanumeric()),
        (None, Some(_)) => false,
    }
}
