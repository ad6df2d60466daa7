use crate::error::{PicDumpError, Result};
use crate::ui::OutputMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file names looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILES: &[&str] = &["picdump.toml", ".picdump.toml"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Continue with the next file when one cannot be decoded.
    pub keep_going: bool,
    pub dry_run: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: String,
    pub verbose: u8,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
            verbose: 0,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PicDumpError::Config {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| PicDumpError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| PicDumpError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })?;

        Ok(config)
    }

    pub fn load_with_defaults<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_from_file(path),
            None => {
                for default_path in DEFAULT_CONFIG_FILES {
                    if Path::new(default_path).exists() {
                        return Self::load_from_file(default_path);
                    }
                }

                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(keep_going) = cli_args.keep_going {
            self.extraction.keep_going = keep_going;
        }

        if let Some(dry_run) = cli_args.dry_run {
            self.extraction.dry_run = dry_run;
        }

        if let Some(ref format) = cli_args.format {
            self.output.format = format.clone();
        }

        if let Some(verbose) = cli_args.verbose {
            self.output.verbose = verbose;
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self.output.format.to_lowercase().as_str() {
            "human" | "plain" | "json" => {}
            other => {
                return Err(PicDumpError::Config {
                    message: format!(
                        "Unknown output format '{}' (expected human, plain or json)",
                        other
                    ),
                });
            }
        }

        if self.output.verbose > 3 {
            return Err(PicDumpError::Config {
                message: "Verbosity must be between 0 and 3".to_string(),
            });
        }

        Ok(())
    }

    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_string(&self.output.format)
    }

    pub fn create_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config).unwrap_or_else(|_| String::new())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub keep_going: Option<bool>,
    pub dry_run: Option<bool>,
    pub format: Option<String>,
    pub verbose: Option<u8>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keep_going(mut self, keep_going: Option<bool>) -> Self {
        self.keep_going = keep_going;
        self
    }

    pub fn with_dry_run(mut self, dry_run: Option<bool>) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_format(mut self, format: Option<String>) -> Self {
        self.format = format;
        self
    }

    pub fn with_verbose(mut self, verbose: Option<u8>) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Where `--generate-config` writes when no `--config` path is given.
pub fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FILES[0])
}
