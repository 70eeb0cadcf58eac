use role_driven_ui_engine::RenderFormat;
use std::path::PathBuf;

pub const USAGE: &str = "[--export | --format html|markdown|plain] [catalog-path]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Browse the catalog in the terminal.
    Interactive,
    /// Print the rendered catalog to stdout. `None` defers to the config file.
    Export(Option<RenderFormat>),
}

#[derive(Debug, PartialEq, Eq)]
pub struct Args {
    pub mode: Mode,
    pub catalog_path: Option<PathBuf>,
}

/// Parses arguments after the program name.
pub fn parse_args<I, S>(args: I) -> Result<Args, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut mode = Mode::Interactive;
    let mut catalog_path = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_ref() {
            "--export" => {
                if mode == Mode::Interactive {
                    mode = Mode::Export(None);
                }
            }
            "--format" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--format needs a value".to_string())?;
                let format = value
                    .as_ref()
                    .parse::<RenderFormat>()
                    .map_err(|e| e.to_string())?;
                mode = Mode::Export(Some(format));
            }
            flag if flag.starts_with("--") => return Err(format!("Unknown option {flag}")),
            path => {
                if catalog_path.is_some() {
                    return Err("Only one catalog path may be given".to_string());
                }
                catalog_path = Some(PathBuf::from(path));
            }
        }
    }

    Ok(Args { mode, catalog_path })
}
