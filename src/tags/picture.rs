use std::fmt;

/// An attached picture as decoded from a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureFrame {
    pub mime_type: String,
    pub picture_type: u8,
    pub description: String,
    pub data: Vec<u8>,
}

impl PictureFrame {
    pub fn new<M, D>(mime_type: M, picture_type: u8, description: D, data: Vec<u8>) -> Self
    where
        M: Into<String>,
        D: Into<String>,
    {
        Self {
            mime_type: mime_type.into(),
            picture_type,
            description: description.into(),
            data,
        }
    }

    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    /// Human name of the ID3v2 picture type, when the code is a defined one.
    pub fn role(&self) -> Option<&'static str> {
        let role = match self.picture_type {
            0 => "other",
            1 => "file icon",
            2 => "other file icon",
            3 => "cover front",
            4 => "cover back",
            5 => "leaflet page",
            6 => "media",
            7 => "lead artist",
            8 => "artist",
            9 => "conductor",
            10 => "band",
            11 => "composer",
            12 => "lyricist",
            13 => "recording location",
            14 => "during recording",
            15 => "during performance",
            16 => "screen capture",
            17 => "bright coloured fish",
            18 => "illustration",
            19 => "band logotype",
            20 => "publisher logotype",
            _ => return None,
        };
        Some(role)
    }
}

impl From<&id3::frame::Picture> for PictureFrame {
    fn from(picture: &id3::frame::Picture) -> Self {
        Self {
            mime_type: picture.mime_type.clone(),
            picture_type: u8::from(picture.picture_type),
            description: picture.description.clone(),
            data: picture.data.clone(),
        }
    }
}

impl fmt::Display for PictureFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {} bytes)",
            self.description,
            self.mime_type,
            self.data.len()
        )?;
        match self.role() {
            Some(role) => write!(f, " [{}]", role),
            None => write!(f, " [type {}]", self.picture_type),
        }
    }
}
