use std::path::PathBuf;

use tracing::{info, warn};

use crate::error::{PokekaError, Result};
use crate::types::LangMode;

pub const LOG_DIR: &str = "logs";
pub const LOG_FILE: &str = "pokeka_search.log";

/// Seconds a notice stays on screen.
pub const NOTICE_TTL_SECS: i64 = 4;

/// Event poll interval in milliseconds.
pub const TICK_RATE_MS: u64 = 250;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub lang_mode: LangMode,
    pub catalog_path: Option<PathBuf>,
}

pub fn parse_lang_mode(arg: &str) -> Option<LangMode> {
    let arg = arg.trim_start_matches('-').to_lowercase();

    match arg.as_str() {
        "j" | "ja" | "jp" | "jpn" | "japanese" => Some(LangMode::Ja),
        "e" | "en" | "eng" | "english" => Some(LangMode::En),
        _ => None,
    }
}

/// Parse command-line arguments (program name already skipped).
pub fn parse_args<I>(args: I) -> Result<Config>
where
    I: IntoIterator<Item = String>,
{
    let mut config = Config::default();
    let mut mode_seen = false;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--catalog" | "-c" => {
                let path = args.next().ok_or_else(|| {
                    PokekaError::InvalidInput(format!("{arg} requires a file path"))
                })?;
                config.catalog_path = Some(PathBuf::from(path));
            }
            _ if !mode_seen => {
                mode_seen = true;
                match parse_lang_mode(&arg) {
                    Some(mode) => {
                        info!("Selected {} mode from argument '{}'", mode, arg);
                        config.lang_mode = mode;
                    }
                    None => warn!("Invalid language mode '{}', defaulting to ja", arg),
                }
            }
            _ => warn!("Ignoring extra argument '{}'", arg),
        }
    }

    if !mode_seen {
        info!("No language mode specified, defaulting to ja");
    }

    Ok(config)
}
