use crate::error::{PicDumpError, Result};
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    Written(u64),
    /// The target appeared between the existence check and the create.
    AlreadyExists,
}

/// Writes picture bytes to fresh files, never replacing an existing one.
pub struct PictureWriter {
    buffer_size: usize,
}

impl PictureWriter {
    pub fn new() -> Self {
        Self {
            buffer_size: 64 * 1024, // 64KB buffer
        }
    }

    /// True if anything (file, directory, dangling symlink) sits at `target`.
    pub fn target_exists(&self, target: &Path) -> bool {
        fs::symlink_metadata(target).is_ok()
    }

    pub fn write_new(&self, target: &Path, data: &[u8]) -> Result<WriteStatus> {
        let file = match OpenOptions::new().write(true).create_new(true).open(target) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Ok(WriteStatus::AlreadyExists);
            }
            Err(source) => {
                return Err(PicDumpError::Write {
                    path: target.to_path_buf(),
                    source,
                });
            }
        };

        let mut writer = BufWriter::with_capacity(self.buffer_size, file);
        writer
            .write_all(data)
            .and_then(|_| writer.flush())
            .map_err(|source| PicDumpError::Write {
                path: target.to_path_buf(),
                source,
            })?;

        Ok(WriteStatus::Written(data.len() as u64))
    }
}

impl Default for PictureWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("song_3.png");
        let data = vec![0x89, b'P', b'N', b'G', 0, 1, 2, 3];

        let writer = PictureWriter::new();
        assert!(!writer.target_exists(&target));

        let status = writer.write_new(&target, &data).unwrap();
        assert_eq!(status, WriteStatus::Written(8));
        assert!(writer.target_exists(&target));
        assert_eq!(fs::read(&target).unwrap(), data);
    }

    #[test]
    fn test_never_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("song_3.jpg");
        fs::write(&target, b"original").unwrap();

        let status = PictureWriter::new().write_new(&target, b"replacement").unwrap();
        assert_eq!(status, WriteStatus::AlreadyExists);
        assert_eq!(fs::read(&target).unwrap(), b"original");
    }

    #[test]
    fn test_payload_larger_than_buffer() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("big_0.img");
        let data: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();

        let writer = PictureWriter::new();
        assert!(data.len() > writer.buffer_size);

        writer.write_new(&target, &data).unwrap();
        assert_eq!(fs::read(&target).unwrap(), data);
    }

    #[test]
    fn test_missing_directory_is_write_error() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("no_such_dir").join("song_3.jpg");

        let error = PictureWriter::new().write_new(&target, b"x").unwrap_err();
        assert!(matches!(error, PicDumpError::Write { .. }));
    }
}
