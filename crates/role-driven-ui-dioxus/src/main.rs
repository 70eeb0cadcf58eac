use dioxus::prelude::*;
use role_driven_ui_config::Config;
use role_driven_ui_engine::{Catalog, CatalogSource};
use std::env;
use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::process;

mod ui;

use ui::App;
use ui::components::ErrorScreen;

/// Why the catalog could not be shown: a one-line summary and, when an
/// error caused it, that error's chain for the details pane.
#[derive(Debug, Clone, PartialEq)]
struct LoadFailure {
    message: String,
    details: Option<String>,
}

impl LoadFailure {
    fn caused_by(message: String, error: &dyn Error) -> Self {
        Self {
            message,
            details: Some(error_chain(error)),
        }
    }
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(details) = &self.details {
            write!(f, "\n{details}")?;
        }
        Ok(())
    }
}

fn error_chain(error: &dyn Error) -> String {
    let mut lines = vec![error.to_string()];
    let mut source = error.source();
    while let Some(cause) = source {
        lines.push(format!("caused by: {cause}"));
        source = cause.source();
    }
    lines.join("\n")
}

/// Resolves the catalog from the first CLI argument, the config file, or the
/// built-in guidelines, in that order.
fn catalog_source() -> Result<CatalogSource, LoadFailure> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        return Err(LoadFailure {
            message: format!("Usage: {} [catalog-path]", args[0]),
            details: None,
        });
    }
    let cli_path = args.get(1).map(PathBuf::from);

    let config = Config::load()
        .map_err(|e| LoadFailure::caused_by("Failed to load config file".to_string(), &e))?;
    Ok(CatalogSource::resolve(
        cli_path,
        config.and_then(|c| c.catalog_path),
        Config::config_path(),
    ))
}

fn load_catalog() -> Result<Catalog, LoadFailure> {
    let source = catalog_source()?;
    log::info!("Using catalog {source}");
    load_from(&source)
}

fn load_from(source: &CatalogSource) -> Result<Catalog, LoadFailure> {
    source
        .load()
        .map_err(|e| LoadFailure::caused_by(format!("Catalog {source} could not be loaded"), &e))
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("role-driven-ui starting up!");
    log::info!("Config path: {}", Config::config_path().display());

    // Fail on the terminal before a window opens
    if let Err(e) = load_catalog() {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    log::info!("About to launch Dioxus app for desktop");
    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

fn app_root() -> Element {
    // The file may change between the startup check and here, so errors are
    // still shown in the window.
    let loaded = use_hook(load_catalog);

    match loaded {
        Ok(catalog) => rsx! {
            App { catalog }
        },
        Err(failure) => rsx! {
            ErrorScreen {
                title: "Could not load guidelines",
                message: failure.message,
                details: failure.details,
            }
        },
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("Role Driven UI and Config")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
