use crate::error::FixerError;
use anyhow::Result;
use log::debug;
use std::path::{Path, PathBuf};

/// Cover file names, in order of preference.
pub const COVER_CANDIDATES: [&str; 3] =
    ["cover.jpg", "cover.jpeg", "cover.png"];

/// Returns the first of [`COVER_CANDIDATES`] that exists directly inside
/// `folder`.
pub fn find_cover(folder: &Path) -> Option<PathBuf> {
    let cover = COVER_CANDIDATES
        .iter()
        .map(|candidate| folder.join(candidate))
        .find(|path| path.exists());

    debug!("Cover in '{}': {:?}", folder.display(), cover);

    cover
}

/// Image data to embed as front cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    mime_type: String,
    data: Vec<u8>,
}

impl Artwork {
    /// Creates artwork from raw image data.
    pub fn new(mime_type: &str, data: Vec<u8>) -> Self {
        Artwork {
            mime_type: mime_type.to_owned(),
            data,
        }
    }

    /// Reads the cover at `path`. Returns `None` if the file is empty.
    pub fn read(path: &Path) -> Result<Option<Self>> {
        let data = std::fs::read(path).map_err(|source| FixerError::ReadCover {
            path: path.to_owned(),
            source,
        })?;

        debug!("Read {} bytes from '{}'", data.len(), path.display());

        if data.is_empty() {
            return Ok(None);
        }

        Ok(Some(Artwork::new(Artwork::mime_type_for(path), data)))
    }

    fn mime_type_for(path: &Path) -> &'static str {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some(extension) if extension.eq_ignore_ascii_case("png") => {
                "image/png"
            }
            _ => "image/jpeg",
        }
    }

    /// MIME type of the image.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// The image data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
