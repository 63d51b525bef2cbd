use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::TransformLogic;
use crate::core::pipeline::Summary;
use crate::errors::AppResult;
use crate::ui::messages::{detail, info, warning};
use crate::ui::preview::render_preview;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Transform {
        input,
        file,
        format,
        sheet,
        preview,
        force,
    } = cmd
    {
        let input = expand_tilde(input);
        let (summary, _out) = TransformLogic::transform(
            &input,
            file.as_deref(),
            *format,
            sheet.as_deref(),
            *force,
            cfg,
        )?;

        report(&summary);
        if *preview {
            print!(
                "{}",
                render_preview(&summary.rows, &summary.unmapped, &cfg.output_date_format, None)
            );
        }
    }
    Ok(())
}

/// Counters of a finished run.
pub(crate) fn report(summary: &Summary) {
    info(format!(
        "{} entries read, {} open, {} summary rows",
        summary.entries_read,
        summary.entries_open,
        summary.rows.len()
    ));

    if summary.entries_open == 0 {
        warning("No open entries ('Nein') found; the summary is empty.");
    }
    if !summary.dropped_categories.is_empty() {
        detail(format!(
            "Categories not exported: {}",
            summary.dropped_categories.join(", ")
        ));
    }
    if !summary.unmapped.is_empty() {
        detail(format!(
            "Without handler code: {}",
            summary.unmapped.join(", ")
        ));
    }
}
