use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config, path: &Path) -> AppResult<()> {
        println!("📄 Configuration ({}):\n", path.display());
        println!("{}", cfg.to_yaml()?);
        Ok(())
    }

    /// Report problems in `cfg`; an unusable configuration is an error.
    pub fn check(cfg: &Config, path: &Path) -> AppResult<()> {
        let issues = cfg.check();

        if issues.is_empty() {
            success(format!("Configuration OK: {}", path.display()));
            return Ok(());
        }

        for issue in &issues {
            warning(issue);
        }
        cfg.validate()?;
        Ok(())
    }

    /// Open `path` in `editor`, $EDITOR/$VISUAL, or the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "{} does not exist, run `rbillsheet init` first",
                path.display()
            )));
        }

        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });
        let requested = editor.clone().unwrap_or_else(|| default_editor.clone());

        for ed in [&requested, &default_editor] {
            match Command::new(ed).arg(path).status() {
                Ok(s) if s.success() => {
                    success(format!("Configuration file edited using '{ed}'"));
                    return Ok(());
                }
                _ => warning(format!("Editor '{ed}' not available")),
            }
            if requested == default_editor {
                break;
            }
        }

        Err(AppError::Config(format!(
            "failed to edit {} with '{requested}'",
            path.display()
        )))
    }
}
