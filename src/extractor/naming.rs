use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Extension used when the MIME type is not one of the known image types.
pub const FALLBACK_EXTENSION: &str = ".img";

/// Maps a declared MIME type to an output file extension.
///
/// The match is exact: no case folding, no parameter stripping.
pub fn extension_for_mime(mime_type: &str) -> &'static str {
    match mime_type {
        "image/jpeg" | "image/jpg" => ".jpg",
        "image/png" => ".png",
        "image/gif" => ".gif",
        _ => FALLBACK_EXTENSION,
    }
}

/// Builds `<source without extension>_<picture_type><extension>` next to `source`.
pub fn output_path_for(source: &Path, picture_type: u8, extension: &str) -> PathBuf {
    let mut name = source
        .file_stem()
        .map(OsStr::to_os_string)
        .unwrap_or_default();
    name.push(format!("_{}{}", picture_type, extension));
    source.with_file_name(name)
}
