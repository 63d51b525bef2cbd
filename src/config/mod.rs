use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::utils::formatting::is_valid_date_format;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod handler_codes;

pub use handler_codes::{HandlerCodes, Resolution, UnmappedPolicy};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub handler_codes: HandlerCodes,
    #[serde(default)]
    pub unmapped_identity: UnmappedPolicy,
    #[serde(default = "default_delimiter")]
    pub input_delimiter: char,
    #[serde(default = "default_delimiter")]
    pub output_delimiter: char,
    #[serde(default = "default_output_date_format")]
    pub output_date_format: String,
    #[serde(default = "default_output_bom")]
    pub output_bom: bool,
    #[serde(default)]
    pub default_format: ExportFormat,
}

fn default_delimiter() -> char {
    ';'
}
fn default_output_date_format() -> String {
    "%d.%m.%Y".to_string()
}
fn default_output_bom() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            handler_codes: HandlerCodes::default(),
            unmapped_identity: UnmappedPolicy::default(),
            input_delimiter: default_delimiter(),
            output_delimiter: default_delimiter(),
            output_date_format: default_output_date_format(),
            output_bom: default_output_bom(),
            default_format: ExportFormat::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rbillsheet")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rbillsheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rbillsheet.conf")
    }

    /// Load configuration from `path`, or return defaults if the file does not exist
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!("no configuration at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let cfg: Config = serde_yaml::from_str(&content)?;

        tracing::debug!(
            "loaded configuration from {} ({} handler codes)",
            path.display(),
            cfg.handler_codes.len()
        );
        Ok(cfg)
    }

    /// Write the default configuration to `path`.
    ///
    /// Returns `Ok(false)` without touching the file when it already exists
    /// and `force` is not set.
    pub fn init(path: &Path, force: bool) -> AppResult<bool> {
        if path.exists() && !force {
            return Ok(false);
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = Config::default().to_yaml()?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(true)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Field separator for delimited input, as the single byte the CSV reader expects.
    pub fn input_delimiter_byte(&self) -> AppResult<u8> {
        delimiter_byte("input_delimiter", self.input_delimiter)
    }

    pub fn output_delimiter_byte(&self) -> AppResult<u8> {
        delimiter_byte("output_delimiter", self.output_delimiter)
    }

    /// Fail on settings that would make a transform run impossible.
    pub fn validate(&self) -> AppResult<()> {
        self.input_delimiter_byte()?;
        self.output_delimiter_byte()?;

        if !is_valid_date_format(&self.output_date_format) {
            return Err(AppError::Config(format!(
                "output_date_format '{}' is not a valid date format",
                self.output_date_format
            )));
        }

        Ok(())
    }

    /// List configuration problems; an empty list means the file is usable.
    pub fn check(&self) -> Vec<String> {
        let mut issues = self.handler_codes.issues();

        if let Err(e) = self.input_delimiter_byte() {
            issues.push(e.to_string());
        }
        if let Err(e) = self.output_delimiter_byte() {
            issues.push(e.to_string());
        }
        if !is_valid_date_format(&self.output_date_format) {
            issues.push(format!(
                "output_date_format '{}' is not a valid date format",
                self.output_date_format
            ));
        }

        issues
    }
}

fn delimiter_byte(field: &str, c: char) -> AppResult<u8> {
    if c.is_ascii() && c != '"' && c != '\n' && c != '\r' {
        Ok(c as u8)
    } else {
        Err(AppError::Config(format!(
            "{field} must be a single ASCII character other than quote or newline, got {c:?}"
        )))
    }
}
