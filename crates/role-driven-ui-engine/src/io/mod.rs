//! Reading and writing catalog files.
//!
//! The format is chosen from the file extension: Markdown (`.md`,
//! `.markdown`), TOML (`.toml`) or JSON (`.json`).

mod markdown;
mod source;

use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Catalog;
use crate::render::render_markdown;

pub use markdown::parse_markdown_catalog;
pub use source::CatalogSource;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unsupported catalog format for {0}, expected .md, .toml or .json")]
    UnsupportedFormat(PathBuf),
    #[error("Failed to parse TOML catalog: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Failed to write TOML catalog: {0}")]
    TomlWrite(#[from] toml::ser::Error),
    #[error("Failed to parse JSON catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid markdown catalog: {0}")]
    Markdown(String),
    #[error("Catalog cannot be written as Markdown without changing its {0}")]
    MarkdownWrite(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Markdown,
    Toml,
    Json,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("md" | "markdown") => Ok(CatalogFormat::Markdown),
            Some("toml") => Ok(CatalogFormat::Toml),
            Some("json") => Ok(CatalogFormat::Json),
            _ => Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Parse catalog text in the given format
pub fn parse_catalog(text: &str, format: CatalogFormat) -> Result<Catalog, CatalogError> {
    match format {
        CatalogFormat::Markdown => parse_markdown_catalog(text),
        CatalogFormat::Toml => Ok(toml::from_str(text)?),
        CatalogFormat::Json => Ok(serde_json::from_str(text)?),
    }
}

/// Serialize a catalog in the given format.
///
/// Markdown output is read back before it is returned; text the Markdown
/// form cannot carry (line breaks, edge whitespace, a highlight that is not
/// a title prefix) is an error rather than a silently different catalog.
pub fn serialize_catalog(catalog: &Catalog, format: CatalogFormat) -> Result<String, CatalogError> {
    match format {
        CatalogFormat::Markdown => {
            let text = render_markdown(catalog);
            let reloaded = parse_markdown_catalog(&text)?;
            match markdown::first_difference(catalog, &reloaded) {
                None => Ok(text),
                Some(part) => Err(CatalogError::MarkdownWrite(part)),
            }
        }
        CatalogFormat::Toml => Ok(toml::to_string_pretty(catalog)?),
        CatalogFormat::Json => Ok(serde_json::to_string_pretty(catalog)?),
    }
}

/// Load a catalog file, picking the format from its extension
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let format = CatalogFormat::from_path(path)?;
    if !path.exists() {
        return Err(CatalogError::NotFound(path.to_path_buf()));
    }
    log::debug!("Loading {format:?} catalog from {}", path.display());
    let text = fs::read_to_string(path)?;
    let catalog = parse_catalog(&text, format)?;
    log::info!(
        "Loaded catalog '{}' with {} sections and {} guidelines",
        catalog.title,
        catalog.sections.len(),
        catalog.guideline_count()
    );
    Ok(catalog)
}

/// Write a catalog file, picking the format from its extension
pub fn write_catalog(path: &Path, catalog: &Catalog) -> Result<(), CatalogError> {
    let format = CatalogFormat::from_path(path)?;
    let content = serialize_catalog(catalog, format)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, content)?;
    log::debug!("Wrote {format:?} catalog to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Footer, Link, Section};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    #[case("catalog.md", CatalogFormat::Markdown)]
    #[case("catalog.MARKDOWN", CatalogFormat::Markdown)]
    #[case("dir/catalog.toml", CatalogFormat::Toml)]
    #[case("catalog.json", CatalogFormat::Json)]
    fn format_from_extension(#[case] path: &str, #[case] expected: CatalogFormat) {
        assert_eq!(CatalogFormat::from_path(Path::new(path)).unwrap(), expected);
    }

    #[rstest]
    #[case("catalog.yaml")]
    #[case("catalog")]
    fn unsupported_extension(#[case] path: &str) {
        let result = CatalogFormat::from_path(Path::new(path));
        assert!(matches!(result, Err(CatalogError::UnsupportedFormat(_))));
    }

    #[test]
    fn toml_catalog_uses_string_items() {
        let text = r#"
title = "Guide"
tagline = "Short rules"

[[sections]]
title = "Language"
items = ["Use `ui` for visibility", "Use `api` for actions"]

[footer]
last_updated = "October 2025"
"#;
        let catalog = parse_catalog(text, CatalogFormat::Toml).unwrap();
        assert_eq!(catalog.title, "Guide");
        assert_eq!(catalog.tagline.as_deref(), Some("Short rules"));
        assert_eq!(catalog.sections.len(), 1);
        assert_eq!(catalog.sections[0].items[1].description, "Use `api` for actions");
        assert_eq!(catalog.footer.map(|f| f.last_updated), Some("October 2025".to_string()));
    }

    #[test]
    fn json_catalog_without_optional_fields() {
        let text = r#"{"title": "Guide", "sections": [{"title": "A", "items": ["one"]}]}"#;
        let catalog = parse_catalog(text, CatalogFormat::Json).unwrap();
        assert_eq!(catalog.highlight, None);
        assert_eq!(catalog.footer, None);
        assert_eq!(catalog.sections[0], Section::new("A", ["one"]));
    }

    #[test]
    fn invalid_toml_is_reported() {
        let result = parse_catalog("title = ", CatalogFormat::Toml);
        assert!(matches!(result, Err(CatalogError::TomlParse(_))));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let result = load_catalog(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }

    #[rstest]
    #[case("catalog.md")]
    #[case("catalog.toml")]
    #[case("catalog.json")]
    fn builtin_survives_write_then_load(#[case] name: &str) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(name);
        let catalog = Catalog::builtin();

        write_catalog(&path, &catalog).unwrap();
        let loaded = load_catalog(&path).unwrap();

        assert_eq!(loaded, catalog);
    }

    fn one_item_catalog(description: &str) -> Catalog {
        let mut catalog = Catalog::new("Guide");
        catalog.sections = vec![Section::new("Rules", [description])];
        catalog
    }

    #[rstest]
    #[case("a ``b`` c")]
    #[case("Use <b>bold</b> tags")]
    #[case("see [docs](http://x)")]
    #[case(r"a \* b")]
    #[case("snake_case_name and _x_")]
    #[case("optional *data* and **strong**")]
    #[case("1. numbered")]
    #[case("2) numbered")]
    #[case("# not a heading")]
    #[case("- dash first")]
    #[case("+ plus first")]
    #[case("> quoted")]
    #[case("~~~ fence")]
    #[case("--- rule")]
    #[case("Tom &amp; Jerry &#42; & co")]
    #[case("padded ` x ` code")]
    #[case("wildcards `*` and `**` and `ui:invoice#read`")]
    #[case("ends with a backslash \\")]
    #[case("![alt](img.png) <http://x>")]
    fn markdown_preserves_descriptions(#[case] description: &str) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.md");
        let catalog = one_item_catalog(description);

        write_catalog(&path, &catalog).unwrap();
        let loaded = load_catalog(&path).unwrap();

        assert_eq!(loaded.sections[0].items[0].description, description);
        assert_eq!(loaded, catalog);
    }

    #[rstest]
    #[case("Roles guide", "Role")]
    #[case("Role Driven UI and Config", "Role Driven")]
    #[case("Guide", "Guide")]
    fn markdown_preserves_highlighted_titles(#[case] title: &str, #[case] highlight: &str) {
        let mut catalog = Catalog::new(title);
        catalog.highlight = Some(highlight.to_string());

        let text = serialize_catalog(&catalog, CatalogFormat::Markdown).unwrap();
        let loaded = parse_catalog(&text, CatalogFormat::Markdown).unwrap();

        assert_eq!(loaded, catalog);
    }

    #[test]
    fn markdown_preserves_escaped_header_and_footer() {
        let mut catalog = Catalog::new("C# [draft]");
        catalog.tagline = Some("1. Rules for *all* <roles>".to_string());
        catalog.sections = vec![Section::new("Naming & `tokens`", ["x"])];
        catalog.footer = Some(Footer {
            last_updated: "Q4_2025".to_string(),
            link: Some(Link {
                label: "Docs [v2]".to_string(),
                href: "docs/read me.md".to_string(),
            }),
        });

        let text = serialize_catalog(&catalog, CatalogFormat::Markdown).unwrap();
        let loaded = parse_catalog(&text, CatalogFormat::Markdown).unwrap();

        assert_eq!(loaded, catalog);
    }

    #[rstest]
    #[case(one_item_catalog("first line\nsecond line"), "guideline 'first line")]
    #[case(one_item_catalog("  leading space"), "guideline '  leading space'")]
    #[case(one_item_catalog(""), "guideline ''")]
    #[case(
        Catalog { highlight: Some("Other".to_string()), ..Catalog::new("Guide") },
        "title 'Guide'"
    )]
    fn markdown_refuses_lossy_catalogs(#[case] catalog: Catalog, #[case] expected: &str) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.md");

        match write_catalog(&path, &catalog) {
            Err(CatalogError::MarkdownWrite(part)) => {
                assert!(part.contains(expected), "unexpected difference: {part}")
            }
            other => panic!("expected a markdown write error, got {other:?}"),
        }
        assert!(!path.exists());
    }
}
