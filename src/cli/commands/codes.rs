use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{GREEN, colorize};
use crate::utils::table::{Cell, Column, Table};

/// Handle the `codes` command: print the identity → handler code table.
pub fn handle(cfg: &Config) -> AppResult<()> {
    if cfg.handler_codes.is_empty() {
        info("No handler codes configured; full names are written as is.");
        return Ok(());
    }

    header("Handler codes");

    let mut table = Table::new(vec![Column::left("Benutzer"), Column::left("Bearb.")]);
    for (identity, code) in cfg.handler_codes.iter() {
        table.add_row(vec![Cell::plain(identity), Cell::colored(code, GREEN)]);
    }
    print!("{}", table.render());

    info(format!(
        "Unmapped identities: {}",
        colorize(&format!("{:?}", cfg.unmapped_identity), GREEN)
    ));
    Ok(())
}
