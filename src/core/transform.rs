// src/core/transform.rs

use crate::config::{Config, UnmappedPolicy};
use crate::core::finalize::Finalizer;
use crate::core::pipeline::{self, Summary};
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportOptions, ensure_writable, export};
use crate::import::{LoadOptions, load_entries};
use crate::ui::messages::warning;
use crate::utils::path::{default_output_path, expand_tilde};
use std::io;
use std::path::{Path, PathBuf};

/// Logica di alto livello: input → pipeline → file di output.
pub struct TransformLogic;

impl TransformLogic {
    /// Load `input` and run the pipeline, without writing anything.
    pub fn summarize(input: &Path, sheet: Option<&str>, cfg: &Config) -> AppResult<Summary> {
        cfg.validate()?;

        if !input.is_file() {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("input file not found: {}", input.display()),
            )));
        }

        let opts = LoadOptions {
            delimiter: cfg.input_delimiter_byte()?,
            sheet: sheet.map(str::to_string),
        };
        let entries = load_entries(input, &opts)?;

        let finalizer = Finalizer::from_config(cfg);
        let summary = pipeline::run(entries, &finalizer)?;

        if finalizer.policy() == UnmappedPolicy::Warn {
            for identity in &summary.unmapped {
                warning(format!("No handler code for '{identity}', full name kept"));
            }
        }

        Ok(summary)
    }

    /// Run the pipeline on `input` and write the result.
    ///
    /// - `output`: target file; defaults to `Transformed_Data.<ext>` next to the input
    /// - `format`: defaults to the output file extension, then to the configured format
    ///
    /// Nothing is written when loading or transforming fails.
    pub fn transform(
        input: &Path,
        output: Option<&str>,
        format: Option<ExportFormat>,
        sheet: Option<&str>,
        force: bool,
        cfg: &Config,
    ) -> AppResult<(Summary, PathBuf)> {
        let format = format
            .or_else(|| output.and_then(|o| ExportFormat::from_path(Path::new(o))))
            .unwrap_or(cfg.default_format);

        let out_path = match output {
            Some(o) => expand_tilde(o),
            None => default_output_path(input, format.as_str()),
        };

        if same_file(input, &out_path) {
            return Err(AppError::Export(format!(
                "output file {} would overwrite the input",
                out_path.display()
            )));
        }

        let summary = Self::summarize(input, sheet, cfg)?;

        ensure_writable(&out_path, force)?;
        export(&summary.rows, format, &out_path, &export_options(cfg, input))?;

        Ok((summary, out_path))
    }
}

fn export_options(cfg: &Config, input: &Path) -> ExportOptions {
    let source = input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    ExportOptions {
        // validated in summarize()
        delimiter: cfg.output_delimiter_byte().unwrap_or(b';'),
        bom: cfg.output_bom,
        date_format: cfg.output_date_format.clone(),
        title: format!("Billing summary - {source}"),
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(x), Ok(y)) => x == y,
        _ => a == b,
    }
}
