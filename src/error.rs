use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PicDumpError {
    #[error("No input files given")]
    Usage,

    #[error("Failed to read tags from {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: id3::Error,
    },

    #[error("Failed to write image {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl PicDumpError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PicDumpError::Usage => 1,
            PicDumpError::Decode { .. } => 3,
            PicDumpError::Write { .. } => 4,
            PicDumpError::Io(_) | PicDumpError::Config { .. } => 1,
        }
    }
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for PicDumpError {
    fn user_message(&self) -> String {
        match self {
            PicDumpError::Usage => "No input files given".to_string(),
            PicDumpError::Decode { path, source } => match source.kind {
                id3::ErrorKind::NoTag => {
                    format!("No ID3 tag found in {}", path.display())
                }
                id3::ErrorKind::Io(ref e) => {
                    format!("Cannot read {}: {}", path.display(), e)
                }
                _ => format!("Malformed ID3 tag in {}: {}", path.display(), source),
            },
            PicDumpError::Write { path, source } => {
                format!("Could not write {}: {}", path.display(), source)
            }
            PicDumpError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            PicDumpError::Usage => Some(
                "Pass one or more audio files, e.g. picdump song.mp3 album/*.mp3".to_string()
            ),
            PicDumpError::Decode { .. } => Some(
                "Check that the file exists and carries an ID3v2 tag. Use --keep-going to skip unreadable files.".to_string()
            ),
            PicDumpError::Write { .. } => Some(
                "Ensure you have write permission for the directory next to the source file and enough free disk space.".to_string()
            ),
            PicDumpError::Config { .. } => Some(
                "Check your configuration file syntax or regenerate it with --generate-config.".to_string()
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for PicDumpError {
    fn from(error: toml::de::Error) -> Self {
        PicDumpError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PicDumpError>;
