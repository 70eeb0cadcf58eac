//! The guideline catalog compiled into the crate.

use crate::models::{Catalog, Footer, Link, Section};

const TITLE: &str = "Role Driven UI and Config";
const HIGHLIGHT: &str = "Role Driven";
const TAGLINE: &str = "A focused practical language and standard for rendering interfaces \
from permissions with deterministic rules small surface area and strong ergonomics";

const SECTIONS: &[(&str, &[&str])] = &[
    (
        "Introduction",
        &[
            "Treat the server as source of truth for authorization and the client as a guide for visibility",
            "Prefer capability permissions over role names in every interface decision",
            "Use a single readable token language for interface and api behavior",
            "Adopt a compact signed Effective Permission Set for each user and context",
            "Keep the vocabulary human readable documented and guessable",
            "Favor small primitives composed well over complex policy tools",
        ],
    ),
    (
        "Permission Language",
        &[
            "Use the token grammar shown in code blocks such as `namespace:resource[#action]`",
            "Use namespaces like `ui` for visibility and `api` for server actions and optional *data* for sensitive fields",
            "Use hierarchy with intent and keep depth reasonable for clarity",
            "Use actions like `#read` `#create` `#update` `#delete` `#export` when useful",
            "Use wildcards carefully single level `*` and optional deep `**`",
            "Use negation for surgical pruning such as `!ui:dashboard:navbar`",
        ],
    ),
    (
        "Naming Guidance",
        &[
            "Prefer intent based names such as `ui:invoice:toolbar:export` over implementation labels",
            "Keep segments lowercase and use kebab case where needed",
            "Limit token depth to a practical range that matches the product shape",
        ],
    ),
    (
        "Deterministic Matching",
        &[
            "Build separate allow and deny sets and evaluate deterministically",
            "Choose the best match using exact match then single wildcard then optional deep wildcard",
            "Let specificity outrank generic matches for predictable outcomes",
            "Let deny override allow for safety under conflict",
            "Provide boolean helpers such as `allOf` `anyOf` and `not` for clarity",
        ],
    ),
    (
        "Effective Permission Set (EPS)",
        &[
            "Structure the Effective Permission Set with fields like `subject` `tenant` `perm_version` `allows` `denies` `issued_at` `ttl` `sig`",
            "Transport the Effective Permission Set via signed session claims or a dedicated endpoint like `/me/permissions`",
            "Revalidate freshness using version bumps and entity tags and short time to live values",
            "Keep the Effective Permission Set small to avoid unnecessary payload weight",
        ],
    ),
    (
        "UI Rendering",
        &[
            "Build menus from `ui` tokens and prune with denies for coherence",
            "Gate routes with `ui` tokens and show a gentle not available state for deep links",
            "Buttons, tabs, and rows should each have a clear token.",
            "Keep checks close to the elements they guard such as buttons tabs and rows",
            "Do not fetch privileged data for hidden sections and require matching `api` tokens for data access",
            "Prefer explainable states and brief reasons when elements are hidden or disabled",
        ],
    ),
    (
        "API Enforcement",
        &[
            "Always enforce `api` permissions on the server because interface gates are not security",
            "Mirror UI and API tokens where helpful.",
            "Mirror interface and api tokens where it aids mental mapping such as `ui:invoice:toolbar:export` with `api:invoice#export`",
            "Avoid leaking restricted information through counts previews filenames and metadata",
            "Return clear consistent errors for denied server actions",
        ],
    ),
    (
        "Multi-Tenant Context",
        &[
            "Include tenant context in the Effective Permission Set for multi tenant products",
            "Switching tenants refetches the EPS. Avoid stale grants.",
            "Roles may differ per tenant. Prefer per-tenant assignments.",
        ],
    ),
    (
        "Deny Semantics",
        &[
            "Model deny as removal of a node and its descendants unless a more specific allow exists",
            "Reserve deep wildcards and broad denies for administrative bundles and audits",
        ],
    ),
    (
        "Catalog & Documentation",
        &[
            "Maintain a permission catalog in both markdown and json for teams and tools",
            "Describe each token with a single sentence that states what it unlocks and where",
            "Generate diffs for role changes and review them like code changes",
        ],
    ),
    (
        "Linting & Conventions",
        &[
            "Enforce naming lint rules in continuous integration to prevent mistakes",
            "Disallow deep wildcard by default and allow it only when explicitly configured",
            "Resolve aliases to canonical tokens at build time for consistency",
            "Fail builds on unknown namespaces malformed tokens and invalid catalog entries",
        ],
    ),
    (
        "UX Patterns",
        &[
            "Prefer soft denial states that show context and a path forward over hard dead ends",
            "Group controls that always travel together behind a single interface token",
            "Use `allOf` when both interface and api permission are required to render an action",
            "Mirror optimistic interface updates and reconcile with the server on failure",
        ],
    ),
    (
        "Accessibility",
        &[
            "Remove denied content from the accessibility tree and prevent focus",
            "Avoid tooltips on disabled controls and place clear nearby explanations",
            "Preserve keyboard navigation order after pruning interface sections",
        ],
    ),
    (
        "Performance",
        &[
            "Use a trie or hashed segments so checks run in time proportional to depth",
            "Memoize permission checks per render tree to avoid repeated string scanning",
            "Keep the Effective Permission Set short lived and revalidate with entity tags rather than refetching on every route",
        ],
    ),
    (
        "Testing",
        &[
            "Unit test precedence including specific versus wildcard and deny over allow and deep paths",
            "Snapshot test menus and navigation generated from tokens to catch regressions",
            "Test tenant switching by diffing Effective Permission Sets before and after the switch",
            "Add negative tests to verify hidden elements never fetch privileged data",
        ],
    ),
    (
        "Observability & Explainability",
        &[
            "Provide an inspector that shows candidate token best allow best deny and final decision",
            "Log administrative changes to roles and tokens with actor timestamp and diff for audits",
            "Capture reasons for denials in support tools to speed up resolutions",
        ],
    ),
    (
        "Migration",
        &[
            "Plan migration by mapping current checks to explicit tokens with clear intent",
            "Enforce server side api permissions first then ship Effective Permission Set then gate the interface",
            "Start with page level tokens then refine to sections and finally to controls",
            "Enable denies after tests document the intended pruning behavior",
        ],
    ),
    (
        "Anti-Patterns",
        &[
            "Avoid relying on role string comparisons inside interface components",
            "Avoid shipping raw role lists to the client for inference",
            "Avoid using feature flags as permissions and avoid using permissions as feature flags",
            "Avoid prefetching restricted data and hiding the container afterward",
        ],
    ),
];

pub(crate) fn builtin_catalog() -> Catalog {
    Catalog {
        title: TITLE.to_string(),
        highlight: Some(HIGHLIGHT.to_string()),
        tagline: Some(TAGLINE.to_string()),
        sections: SECTIONS
            .iter()
            .map(|(title, items)| Section::new(*title, items.iter().copied()))
            .collect(),
        footer: Some(Footer {
            last_updated: "October 2025".to_string(),
            link: Some(Link {
                label: "View on GitHub".to_string(),
                href: "#".to_string(),
            }),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{TextFragment, join};

    #[test]
    fn builtin_has_every_section() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.sections.len(), 18);
        assert_eq!(catalog.sections[0].title, "Introduction");
        assert_eq!(catalog.sections[17].title, "Anti-Patterns");
        assert!(catalog.sections.iter().all(|s| !s.items.is_empty()));
    }

    #[test]
    fn builtin_guidelines_round_trip() {
        for guideline in builtin_catalog().guidelines() {
            assert_eq!(join(&guideline.fragments()), guideline.description);
        }
    }

    #[test]
    fn builtin_vocabulary_mentions_core_tokens() {
        let tokens = builtin_catalog().code_tokens();
        for expected in ["ui", "api", "allOf", "/me/permissions", "**"] {
            assert!(tokens.iter().any(|t| t == expected), "missing {expected}");
        }
    }

    #[test]
    fn no_guideline_contains_stray_ticks() {
        for guideline in builtin_catalog().guidelines() {
            let stray = guideline
                .fragments()
                .iter()
                .any(|f| matches!(f, TextFragment::Plain(t) if t.contains('`')));
            assert!(!stray, "unbalanced ticks in {:?}", guideline.description);
        }
    }
}
