use crate::error::{PicDumpError, Result, UserFriendlyError};
use crate::extractor::naming::{extension_for_mime, output_path_for};
use crate::extractor::picture_writer::{PictureWriter, WriteStatus};
use crate::extractor::report::{ExtractionReport, ImageOutcome};
use crate::tags::{PictureFrame, TagDecoder};
use crate::ui::OutputFormatter;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Walks the input files in order and dumps every attached picture next to its source.
pub struct PictureExtractor<'a> {
    decoder: &'a dyn TagDecoder,
    writer: PictureWriter,
    keep_going: bool,
    dry_run: bool,
}

impl<'a> PictureExtractor<'a> {
    pub fn new(decoder: &'a dyn TagDecoder) -> Self {
        Self {
            decoder,
            writer: PictureWriter::new(),
            keep_going: false,
            dry_run: false,
        }
    }

    /// Record decode failures and move on instead of aborting the run.
    pub fn with_keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn extract_files(
        &self,
        files: &[PathBuf],
        output: &OutputFormatter,
    ) -> Result<ExtractionReport> {
        if files.is_empty() {
            return Err(PicDumpError::Usage);
        }

        let mut report = ExtractionReport::new();
        // Dry-run targets count as taken so later frames see what a real run would.
        let mut planned = HashSet::new();

        for source in files {
            output.print_file_header(source);

            match self.extract_file(source, output, &mut report, &mut planned) {
                Ok(()) => report.file_done(),
                Err(e @ PicDumpError::Decode { .. }) if self.keep_going => {
                    output.print_user_friendly_error(&e);
                    report.file_failed(e.user_message());
                }
                Err(e) => return Err(e),
            }

            output.print_file_footer();
        }

        report.finish();
        Ok(report)
    }

    fn extract_file(
        &self,
        source: &Path,
        output: &OutputFormatter,
        report: &mut ExtractionReport,
        planned: &mut HashSet<PathBuf>,
    ) -> Result<()> {
        let frames = self.decoder.decode(source)?;
        output.debug(&format!(
            "{} attached picture(s) in {}",
            frames.len(),
            source.display()
        ));

        for frame in &frames {
            self.extract_frame(source, frame, output, report, planned)?;
        }

        Ok(())
    }

    fn extract_frame(
        &self,
        source: &Path,
        frame: &PictureFrame,
        output: &OutputFormatter,
        report: &mut ExtractionReport,
        planned: &mut HashSet<PathBuf>,
    ) -> Result<()> {
        output.print_picture(frame);

        let extension = extension_for_mime(&frame.mime_type);
        let target = output_path_for(source, frame.picture_type, extension);

        let outcome = if planned.contains(&target) || self.writer.target_exists(&target) {
            ImageOutcome::Skipped
        } else if self.dry_run {
            planned.insert(target.clone());
            ImageOutcome::Planned
        } else {
            output.print_image(ImageOutcome::Written, &target);
            match self.writer.write_new(&target, &frame.data)? {
                WriteStatus::Written(_) => ImageOutcome::Written,
                WriteStatus::AlreadyExists => ImageOutcome::Skipped,
            }
        };

        if outcome != ImageOutcome::Written {
            output.print_image(outcome, &target);
        }

        report.record_image(
            source,
            &target,
            &frame.mime_type,
            frame.picture_type,
            frame.size(),
            outcome,
        );

        Ok(())
    }
}
