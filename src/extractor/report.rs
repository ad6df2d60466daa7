use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageOutcome {
    Written,
    Skipped,
    /// Dry run: the image would have been written.
    Planned,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRecord {
    pub source: PathBuf,
    pub target: PathBuf,
    pub mime_type: String,
    pub picture_type: u8,
    pub bytes: u64,
    pub outcome: ImageOutcome,
}

/// Tally of one extraction run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub files_processed: usize,
    pub files_failed: usize,
    pub images_written: usize,
    pub images_skipped: usize,
    pub bytes_written: u64,
    pub images: Vec<ImageRecord>,
    pub errors: Vec<String>,
    pub started_at: DateTime<Utc>,
    pub duration: Duration,
    #[serde(skip)]
    start_time: Option<Instant>,
}

impl ExtractionReport {
    pub fn new() -> Self {
        Self {
            files_processed: 0,
            files_failed: 0,
            images_written: 0,
            images_skipped: 0,
            bytes_written: 0,
            images: Vec::new(),
            errors: Vec::new(),
            started_at: Utc::now(),
            duration: Duration::ZERO,
            start_time: Some(Instant::now()),
        }
    }

    pub fn record_image(
        &mut self,
        source: &Path,
        target: &Path,
        mime_type: &str,
        picture_type: u8,
        bytes: u64,
        outcome: ImageOutcome,
    ) {
        match outcome {
            ImageOutcome::Written => {
                self.images_written += 1;
                self.bytes_written += bytes;
            }
            ImageOutcome::Skipped => self.images_skipped += 1,
            ImageOutcome::Planned => {}
        }

        self.images.push(ImageRecord {
            source: source.to_path_buf(),
            target: target.to_path_buf(),
            mime_type: mime_type.to_string(),
            picture_type,
            bytes,
            outcome,
        });
    }

    pub fn file_done(&mut self) {
        self.files_processed += 1;
    }

    pub fn file_failed<S: Into<String>>(&mut self, error: S) {
        self.files_failed += 1;
        self.errors.push(error.into());
    }

    pub fn finish(&mut self) {
        if let Some(start) = self.start_time {
            self.duration = start.elapsed();
        }
    }

    pub fn has_failures(&self) -> bool {
        self.files_failed > 0
    }

    pub fn planned(&self) -> impl Iterator<Item = &ImageRecord> {
        self.images
            .iter()
            .filter(|image| image.outcome == ImageOutcome::Planned)
    }
}

impl Default for ExtractionReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_image_tallies() {
        let mut report = ExtractionReport::new();
        let source = Path::new("song.mp3");

        report.record_image(source, Path::new("song_3.jpg"), "image/jpeg", 3, 100, ImageOutcome::Written);
        report.record_image(source, Path::new("song_3.jpg"), "image/jpeg", 3, 50, ImageOutcome::Skipped);
        report.record_image(source, Path::new("song_4.png"), "image/png", 4, 10, ImageOutcome::Planned);
        report.file_done();

        assert_eq!(report.files_processed, 1);
        assert_eq!(report.images_written, 1);
        assert_eq!(report.images_skipped, 1);
        assert_eq!(report.bytes_written, 100);
        assert_eq!(report.images.len(), 3);
        assert_eq!(report.planned().count(), 1);
        assert!(!report.has_failures());
    }

    #[test]
    fn test_failures() {
        let mut report = ExtractionReport::new();
        report.file_failed("broken.mp3: no tag");
        report.finish();

        assert!(report.has_failures());
        assert_eq!(report.errors, vec!["broken.mp3: no tag".to_string()]);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let mut report = ExtractionReport::new();
        report.record_image(
            Path::new("a.mp3"),
            Path::new("a_0.img"),
            "",
            0,
            7,
            ImageOutcome::Written,
        );
        report.finish();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["images_written"], 1);
        assert_eq!(json["images"][0]["outcome"], "written");
        assert_eq!(json["images"][0]["target"], "a_0.img");
        assert!(json.get("start_time").is_none());
    }
}
