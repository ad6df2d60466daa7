use crate::error::{PicDumpError, UserFriendlyError};
use crate::extractor::{ExtractionReport, ImageOutcome};
use crate::tags::PictureFrame;
use console::{style, Emoji, Term};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Human,
    Json,
    Plain,
}

impl OutputMode {
    pub fn from_string(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputMode::Json,
            "plain" => OutputMode::Plain,
            _ => OutputMode::Human,
        }
    }
}

// Emojis with text fallbacks
static CROSS: Emoji = Emoji("❌ ", "✗ ");
static INFO: Emoji = Emoji("ℹ️  ", "i ");
static PICTURE: Emoji = Emoji("🖼️  ", "");
static SKIP: Emoji = Emoji("⏭️  ", "");

/// Console sink for run progress.
///
/// Per-file lines (header, picture, write/skip) show at the default level;
/// `info` needs `-v`, `debug` needs `-vv`. Quiet mode leaves only errors.
pub struct OutputFormatter {
    mode: OutputMode,
    use_colors: bool,
    verbose_level: u8,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let use_colors = match mode {
            OutputMode::Human => Term::stdout().features().colors_supported() && !quiet,
            _ => false,
        };

        Self {
            mode,
            use_colors,
            verbose_level: if quiet { 0 } else { verbose },
            quiet,
        }
    }

    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Human if self.use_colors => {
                eprintln!("{}{}", CROSS, style(message).red().bold())
            }
            OutputMode::Human => eprintln!("✗ {}", message),
            OutputMode::Json => self.print_json_message("error", message),
            OutputMode::Plain => eprintln!("ERROR: {}", message),
        }
    }

    pub fn info(&self, message: &str) {
        if !self.should_show_message(1) {
            return;
        }

        match self.mode {
            OutputMode::Human if self.use_colors => println!("{}{}", INFO, style(message).cyan()),
            OutputMode::Human => println!("i {}", message),
            OutputMode::Json => self.print_json_message("info", message),
            OutputMode::Plain => println!("INFO: {}", message),
        }
    }

    pub fn debug(&self, message: &str) {
        if !self.should_show_message(2) {
            return;
        }

        match self.mode {
            OutputMode::Human if self.use_colors => println!("  {}", style(message).dim()),
            OutputMode::Human => println!("  DEBUG: {}", message),
            OutputMode::Json => self.print_json_message("debug", message),
            OutputMode::Plain => println!("DEBUG: {}", message),
        }
    }

    pub fn print_file_header(&self, source: &Path) {
        if !self.should_show_message(0) {
            return;
        }

        match self.mode {
            OutputMode::Human if self.use_colors => {
                println!("{} {}", style("--").dim(), style(source.display()).bold());
            }
            OutputMode::Human | OutputMode::Plain => println!("-- {}", source.display()),
            OutputMode::Json => self.print_json_object(&serde_json::json!({
                "type": "file",
                "path": source.display().to_string(),
            })),
        }
    }

    pub fn print_picture(&self, frame: &PictureFrame) {
        if !self.should_show_message(0) {
            return;
        }

        match self.mode {
            OutputMode::Human if self.use_colors => {
                println!("{}{}", PICTURE, style(frame).cyan());
            }
            OutputMode::Human | OutputMode::Plain => println!("{}", frame),
            OutputMode::Json => self.print_json_object(&serde_json::json!({
                "type": "picture",
                "description": frame.description,
                "mime_type": frame.mime_type,
                "picture_type": frame.picture_type,
                "bytes": frame.size(),
            })),
        }
    }

    /// Announces what happens to one image. `Written` is printed before the write starts.
    pub fn print_image(&self, outcome: ImageOutcome, target: &Path) {
        if !self.should_show_message(0) {
            return;
        }

        let path = target.display();
        match self.mode {
            OutputMode::Human | OutputMode::Plain => {
                let line = image_line(outcome, target);
                match outcome {
                    ImageOutcome::Skipped if self.use_colors => {
                        println!("{}{}", SKIP, style(line).yellow())
                    }
                    _ if self.use_colors => println!("{}", style(line).green()),
                    _ => println!("{}", line),
                }
            }
            OutputMode::Json => self.print_json_object(&serde_json::json!({
                "type": "image",
                "event": outcome,
                "path": path.to_string(),
            })),
        }
    }

    pub fn print_file_footer(&self) {
        if self.should_show_message(0) && self.mode != OutputMode::Json {
            println!();
        }
    }

    pub fn print_user_friendly_error(&self, error: &PicDumpError) {
        self.error(&error.user_message());

        let Some(suggestion) = error.suggestion() else {
            return;
        };

        match self.mode {
            OutputMode::Human if self.use_colors => eprintln!(
                "{}{}",
                INFO,
                style(format!("Suggestion: {}", suggestion)).cyan()
            ),
            OutputMode::Human => eprintln!("Suggestion: {}", suggestion),
            OutputMode::Json => self.print_json_object(&serde_json::json!({
                "type": "suggestion",
                "message": suggestion
            })),
            OutputMode::Plain => eprintln!("SUGGESTION: {}", suggestion),
        }
    }

    /// JSON mode always ends with the full report; text modes summarize at `-v`.
    pub fn print_extraction_summary(&self, report: &ExtractionReport) {
        match self.mode {
            OutputMode::Json => {
                let json_output =
                    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string());
                println!("{}", json_output);
            }
            OutputMode::Human if self.should_show_message(1) => self.print_human_summary(report),
            OutputMode::Plain if self.should_show_message(1) => self.print_plain_summary(report),
            _ => {}
        }
    }

    fn should_show_message(&self, min_verbose_level: u8) -> bool {
        !self.quiet && self.verbose_level >= min_verbose_level
    }

    fn print_json_message(&self, level: &str, message: &str) {
        self.print_json_object(&serde_json::json!({
            "type": "message",
            "level": level,
            "message": message,
            "timestamp": chrono::Utc::now().to_rfc3339()
        }));
    }

    fn print_json_object(&self, obj: &serde_json::Value) {
        println!(
            "{}",
            serde_json::to_string(obj).unwrap_or_else(|_| "{}".to_string())
        );
    }

    fn print_rule(&self) {
        if self.use_colors {
            println!("{}", style("─".repeat(60)).dim());
        } else {
            println!("{}", "-".repeat(60));
        }
    }

    fn print_human_summary(&self, report: &ExtractionReport) {
        self.print_rule();

        let value = |v: String| {
            if self.use_colors {
                style(v).cyan().bold().to_string()
            } else {
                v
            }
        };

        println!("  Files processed: {}", value(report.files_processed.to_string()));
        println!("  Images written:  {}", value(report.images_written.to_string()));
        println!("  Images skipped:  {}", value(report.images_skipped.to_string()));
        let planned = report.planned().count();
        if planned > 0 {
            println!("  Images planned:  {}", value(planned.to_string()));
        }
        println!("  Bytes written:   {}", value(format_bytes(report.bytes_written)));
        println!("  Time taken:      {}", value(format_duration(report.duration)));

        if report.has_failures() {
            println!("  Files failed:    {}", report.files_failed);
            for error in &report.errors {
                println!("    - {}", error);
            }
        }

        self.print_rule();
    }

    fn print_plain_summary(&self, report: &ExtractionReport) {
        println!("COMPLETED: Picture extraction");
        println!("Files processed: {}", report.files_processed);
        println!("Images written: {}", report.images_written);
        println!("Images skipped: {}", report.images_skipped);
        println!("Images planned: {}", report.planned().count());
        println!("Bytes written: {}", report.bytes_written);
        println!("Duration: {:?}", report.duration);
        if report.has_failures() {
            println!("Files failed: {}", report.files_failed);
        }
    }
}

fn image_line(outcome: ImageOutcome, target: &Path) -> String {
    match outcome {
        ImageOutcome::Written => format!("Writing image to {}", target.display()),
        ImageOutcome::Skipped => format!("File {} exists. Skipping...", target.display()),
        ImageOutcome::Planned => format!("Would write image to {}", target.display()),
    }
}

fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}s", secs)
    } else {
        format!("{}ms", duration.as_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_mode_parsing() {
        assert_eq!(OutputMode::from_string("human"), OutputMode::Human);
        assert_eq!(OutputMode::from_string("JSON"), OutputMode::Json);
        assert_eq!(OutputMode::from_string("plain"), OutputMode::Plain);
        assert_eq!(OutputMode::from_string("invalid"), OutputMode::Human);
    }

    #[test]
    fn test_quiet_mode() {
        let formatter = OutputFormatter::new(OutputMode::Human, 2, true);
        assert_eq!(formatter.verbose_level, 0);
        assert!(!formatter.use_colors);
        assert!(!formatter.should_show_message(0));
    }

    #[test]
    fn test_should_show_message() {
        let formatter = OutputFormatter::new(OutputMode::Plain, 0, false);
        assert!(formatter.should_show_message(0));
        assert!(!formatter.should_show_message(1));

        let verbose = OutputFormatter::new(OutputMode::Plain, 2, false);
        assert!(verbose.should_show_message(2));
    }

    #[test]
    fn test_image_lines() {
        let target = Path::new("song_3.png");
        assert_eq!(image_line(ImageOutcome::Written, target), "Writing image to song_3.png");
        assert_eq!(
            image_line(ImageOutcome::Skipped, target),
            "File song_3.png exists. Skipping..."
        );
        assert_eq!(
            image_line(ImageOutcome::Planned, target),
            "Would write image to song_3.png"
        );
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1048576), "1.0 MB");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
        assert_eq!(format_duration(Duration::from_secs(30)), "30s");
        assert_eq!(format_duration(Duration::from_millis(0)), "0ms");
    }
}
