pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod tags;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, ExtractionConfig, OutputConfig};
pub use error::{PicDumpError, Result, UserFriendlyError};

// Core functionality re-exports
pub use extractor::{
    extension_for_mime, output_path_for, ExtractionReport, ImageOutcome, ImageRecord,
    PictureExtractor, PictureWriter,
};
pub use tags::{Id3Decoder, PictureFrame, TagDecoder};
pub use ui::{OutputFormatter, OutputMode};

use std::path::{Path, PathBuf};

/// Main library interface for PicDump functionality
pub struct PicDump {
    config: Config,
    output_formatter: OutputFormatter,
}

impl PicDump {
    /// Create a new PicDump instance with the provided configuration
    pub fn new(config: Config, quiet: bool) -> Self {
        let output_formatter =
            OutputFormatter::new(config.output_mode(), config.output.verbose, quiet);

        Self {
            config,
            output_formatter,
        }
    }

    /// Create PicDump instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        Ok(Self::new(config, cli_args.quiet))
    }

    /// Extract every attached picture from `files`, in order, using the given decoder.
    pub fn run(&self, files: &[PathBuf], decoder: &dyn TagDecoder) -> Result<ExtractionReport> {
        if self.config.extraction.dry_run {
            self.output_formatter
                .info("DRY RUN MODE - No files will be written");
        }

        PictureExtractor::new(decoder)
            .with_keep_going(self.config.extraction.keep_going)
            .with_dry_run(self.config.extraction.dry_run)
            .extract_files(files, &self.output_formatter)
    }

    /// Extract with the ID3 decoder
    pub fn extract(&self, files: &[PathBuf]) -> Result<ExtractionReport> {
        self.run(files, &Id3Decoder::new())
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config).map_err(PicDumpError::Io)?;
        Ok(())
    }

    /// Get output formatter reference
    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &PicDumpError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    struct OneCover;

    impl TagDecoder for OneCover {
        fn decode(&self, _path: &Path) -> Result<Vec<PictureFrame>> {
            Ok(vec![PictureFrame::new("image/jpeg", 3, "Cover", b"jpeg".to_vec())])
        }
    }

    #[test]
    fn test_run_uses_config() {
        let temp_dir = TempDir::new().unwrap();
        let song = temp_dir.path().join("song.mp3");

        let mut config = Config::default();
        config.extraction.dry_run = true;
        let picdump = PicDump::new(config, true);

        let report = picdump.run(&[song.clone()], &OneCover).unwrap();
        assert_eq!(report.planned().count(), 1);
        assert!(!temp_dir.path().join("song_3.jpg").exists());

        let picdump = PicDump::new(Config::default(), true);
        let report = picdump.run(&[song], &OneCover).unwrap();
        assert_eq!(report.images_written, 1);
        assert!(temp_dir.path().join("song_3.jpg").exists());
    }

    #[test]
    fn test_run_without_files() {
        let picdump = PicDump::new(Config::default(), true);
        let result = picdump.run(&[], &OneCover);
        assert!(matches!(result, Err(PicDumpError::Usage)));
    }

    #[test]
    fn test_sample_config_generation() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("sample.toml");

        PicDump::generate_sample_config(&config_path).unwrap();

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[extraction]"));
        assert!(content.contains("[output]"));
    }
}
