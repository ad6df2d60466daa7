use crate::config::{CliOverrides, Config};
use crate::error::Result;
use clap::{CommandFactory, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "picdump")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract embedded pictures from the ID3 tags of audio files")]
#[command(
    long_about = "PicDump reads the attached-picture frames of each given audio file and \
                  writes every picture next to its source as <name>_<picture type>.<ext>. \
                  Existing files are never overwritten."
)]
#[command(after_help = "EXAMPLES:\n  \
    picdump song.mp3\n  \
    picdump album/*.mp3 --keep-going\n  \
    picdump track.mp3 --dry-run --output-format json")]
pub struct Cli {
    /// Audio files to extract pictures from
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for progress and results
    #[arg(long, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only errors are printed)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Continue with the next file when one cannot be decoded
    #[arg(long, help = "Skip files whose tags cannot be read instead of stopping")]
    pub keep_going: bool,

    /// Dry run (show what would be written without writing)
    #[arg(long, help = "Show which images would be written without creating files")]
    pub dry_run: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Human => "human",
            OutputFormat::Json => "json",
            OutputFormat::Plain => "plain",
        }
    }
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new()
            .with_keep_going(self.keep_going.then_some(true))
            .with_dry_run(self.dry_run.then_some(true))
            .with_format(self.output_format.map(|f| f.as_str().to_string()))
            .with_verbose((self.verbose > 0).then_some(self.verbose))
    }

    pub fn has_files(&self) -> bool {
        !self.files.is_empty()
    }

    pub fn print_help() {
        // Nothing useful can be done if stdout is gone.
        let _ = Self::command().print_help();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_files_in_order() {
        let cli = Cli::try_parse_from(["picdump", "b.mp3", "a.mp3", "b.mp3"]).unwrap();
        assert_eq!(
            cli.files,
            vec![
                PathBuf::from("b.mp3"),
                PathBuf::from("a.mp3"),
                PathBuf::from("b.mp3")
            ]
        );
        assert!(cli.has_files());
    }

    #[test]
    fn test_parse_without_files() {
        let cli = Cli::try_parse_from(["picdump"]).unwrap();
        assert!(!cli.has_files());
    }

    #[test]
    fn test_flags_become_overrides() {
        let cli = Cli::try_parse_from([
            "picdump",
            "--keep-going",
            "--output-format",
            "plain",
            "-vv",
            "song.mp3",
        ])
        .unwrap();

        let overrides = cli.create_cli_overrides();
        assert_eq!(overrides.keep_going, Some(true));
        assert_eq!(overrides.dry_run, None);
        assert_eq!(overrides.format.as_deref(), Some("plain"));
        assert_eq!(overrides.verbose, Some(2));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["picdump", "-q", "-v", "song.mp3"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}
