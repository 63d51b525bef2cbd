use crate::cli::commands::transform::report;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::TransformLogic;
use crate::errors::AppResult;
use crate::ui::preview::render_preview;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Preview {
        input,
        sheet,
        limit,
    } = cmd
    {
        let input = expand_tilde(input);
        let summary = TransformLogic::summarize(&input, sheet.as_deref(), cfg)?;

        print!(
            "{}",
            render_preview(&summary.rows, &summary.unmapped, &cfg.output_date_format, *limit)
        );
        report(&summary);
    }
    Ok(())
}
