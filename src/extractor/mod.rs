pub mod naming;
pub mod picture_extractor;
pub mod picture_writer;
pub mod report;

pub use naming::{extension_for_mime, output_path_for};
pub use picture_extractor::PictureExtractor;
pub use picture_writer::{PictureWriter, WriteStatus};
pub use report::{ExtractionReport, ImageOutcome, ImageRecord};
