use crate::error::{PicDumpError, Result};
use crate::tags::PictureFrame;
use id3::Tag;
use std::path::Path;

/// Source of attached pictures for an audio file.
pub trait TagDecoder {
    /// Returns every attached picture in `path`, in tag order.
    fn decode(&self, path: &Path) -> Result<Vec<PictureFrame>>;
}

/// Reads APIC/PIC frames from ID3v2 tags.
#[derive(Debug, Default, Clone, Copy)]
pub struct Id3Decoder;

impl Id3Decoder {
    pub fn new() -> Self {
        Self
    }
}

impl TagDecoder for Id3Decoder {
    fn decode(&self, path: &Path) -> Result<Vec<PictureFrame>> {
        let tag = Tag::read_from_path(path).map_err(|source| PicDumpError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(tag.pictures().map(PictureFrame::from).collect())
    }
}
