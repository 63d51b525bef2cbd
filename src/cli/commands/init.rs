use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// Writes the default configuration (handler codes, delimiters, formats)
/// to `config_path`, creating its directory if needed.
pub fn handle(cmd: &Commands, config_path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        if Config::init(config_path, *force)? {
            success(format!("Config file: {}", config_path.display()));
        } else {
            info(format!(
                "Config file already exists: {} (use --force to overwrite)",
                config_path.display()
            ));
        }
    }
    Ok(())
}
