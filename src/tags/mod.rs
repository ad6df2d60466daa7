pub mod decoder;
pub mod picture;

pub use decoder::{Id3Decoder, TagDecoder};
pub use picture::PictureFrame;
