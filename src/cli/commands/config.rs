use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, config_path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        if !(*print_config || *check || *edit_config) {
            info("Nothing to do: use --print, --check or --edit");
            return Ok(());
        }

        if *print_config {
            ConfigLogic::print(cfg, config_path)?;
        }
        if *check {
            ConfigLogic::check(cfg, config_path)?;
        }
        if *edit_config {
            ConfigLogic::edit(config_path, editor)?;
        }
    }
    Ok(())
}
