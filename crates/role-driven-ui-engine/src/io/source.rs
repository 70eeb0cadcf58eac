use std::fmt;
use std::path::PathBuf;

use super::{CatalogError, load_catalog};
use crate::models::Catalog;

/// Where the displayed catalog comes from, for error messages and logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Path given on the command line.
    Argument(PathBuf),
    /// `catalog_path` from the user's config file.
    Configured {
        catalog_path: PathBuf,
        config_path: PathBuf,
    },
    Builtin,
}

impl CatalogSource {
    /// Picks the catalog: command-line path first, then the configured
    /// path, then the built-in guidelines.
    pub fn resolve(
        cli_path: Option<PathBuf>,
        configured_path: Option<PathBuf>,
        config_path: PathBuf,
    ) -> Self {
        match (cli_path, configured_path) {
            (Some(path), _) => CatalogSource::Argument(path),
            (None, Some(catalog_path)) => CatalogSource::Configured {
                catalog_path,
                config_path,
            },
            (None, None) => CatalogSource::Builtin,
        }
    }

    pub fn load(&self) -> Result<Catalog, CatalogError> {
        match self {
            CatalogSource::Argument(path)
            | CatalogSource::Configured {
                catalog_path: path, ..
            } => load_catalog(path),
            CatalogSource::Builtin => Ok(Catalog::builtin()),
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Argument(path) => write!(f, "'{}'", path.display()),
            CatalogSource::Configured {
                catalog_path,
                config_path,
            } => write!(
                f,
                "'{}' from config file '{}'",
                catalog_path.display(),
                config_path.display()
            ),
            CatalogSource::Builtin => f.write_str("built-in guidelines"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::write_catalog;
    use tempfile::TempDir;

    fn config_path() -> PathBuf {
        PathBuf::from("/home/u/.config/role-driven-ui/config.toml")
    }

    #[test]
    fn argument_wins_over_config() {
        let source = CatalogSource::resolve(
            Some(PathBuf::from("cli.md")),
            Some(PathBuf::from("/from/config.md")),
            config_path(),
        );
        assert_eq!(source, CatalogSource::Argument(PathBuf::from("cli.md")));
    }

    #[test]
    fn configured_path_used_without_argument() {
        let source =
            CatalogSource::resolve(None, Some(PathBuf::from("/from/config.md")), config_path());
        assert_eq!(
            source,
            CatalogSource::Configured {
                catalog_path: PathBuf::from("/from/config.md"),
                config_path: config_path(),
            }
        );
    }

    #[test]
    fn falls_back_to_builtin() {
        let source = CatalogSource::resolve(None, None, config_path());
        assert_eq!(source, CatalogSource::Builtin);
        assert_eq!(source.load().unwrap(), Catalog::builtin());
    }

    #[test]
    fn loads_catalog_file_from_argument() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("guide.json");
        let mut catalog = Catalog::new("Guide");
        catalog.tagline = Some("short".to_string());
        write_catalog(&path, &catalog).unwrap();

        let loaded = CatalogSource::Argument(path).load().unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn missing_configured_file_is_an_error() {
        let source = CatalogSource::Configured {
            catalog_path: PathBuf::from("/no/such/catalog.md"),
            config_path: config_path(),
        };
        assert!(matches!(source.load(), Err(CatalogError::NotFound(_))));
    }

    #[test]
    fn display_names_the_config_file() {
        let source = CatalogSource::Configured {
            catalog_path: PathBuf::from("/g.md"),
            config_path: PathBuf::from("/c.toml"),
        };
        assert_eq!(source.to_string(), "'/g.md' from config file '/c.toml'");
        assert_eq!(CatalogSource::Builtin.to_string(), "built-in guidelines");
    }
}
