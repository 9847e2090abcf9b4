// lexcache-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use lexcache::DictionarySettings;
use tracing_subscriber::EnvFilter;

/// Settings file name looked up in the current directory.
const DEFAULT_CONFIG: &str = "lexcache.json";

/// Environment variable naming the settings file.
const CONFIG_ENV: &str = "LEXCACHE_CONFIG";

/// Locate and read the dictionary settings.
///
/// Search order:
/// 1. `config_path` argument (if provided)
/// 2. `LEXCACHE_CONFIG` environment variable
/// 3. `lexcache.json` in the current directory
pub fn load_settings(config_path: Option<&str>) -> Result<DictionarySettings, String> {
    let path = match config_path {
        Some(p) => PathBuf::from(p),
        None => match std::env::var(CONFIG_ENV) {
            Ok(p) => PathBuf::from(p),
            Err(_) => PathBuf::from(DEFAULT_CONFIG),
        },
    };
    read_settings(&path)
}

fn read_settings(path: &Path) -> Result<DictionarySettings, String> {
    if !path.is_file() {
        return Err(format!(
            "settings file {} not found (use -c PATH or set {CONFIG_ENV})",
            path.display()
        ));
    }
    DictionarySettings::from_json_file(path).map_err(|e| e.to_string())
}

/// Install a stderr log subscriber filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse a `--config=PATH` or `-c PATH` argument from command line args.
///
/// Returns `(config_path, remaining_args)`.
pub fn parse_config_path(args: &[String]) -> Result<(Option<String>, Vec<String>), String> {
    let mut config_path = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--config=") {
            config_path = Some(val.to_string());
        } else if arg == "--config" || arg == "-c" {
            match iter.next() {
                Some(val) => config_path = Some(val.clone()),
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((config_path, remaining))
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
