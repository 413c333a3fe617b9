use super::{Artwork, Tags, TextField};
use crate::error::FixerError;
use anyhow::Result;
use id3::frame::{Picture, PictureType};
use id3::{ErrorKind, Tag, TagLike};
use log::{debug, trace};
use std::path::Path;

/// Implementation of [`Tags`] for MP3 files.
#[derive(Debug)]
pub struct MP3Tags(Tag);

impl MP3Tags {
    /// Reads the ID3 tag of `path`. A file without a tag yields an empty
    /// tag, which is written on save.
    pub fn read_from_path(path: &Path) -> Result<Self> {
        match Tag::read_from_path(path) {
            Ok(tag) => {
                let version = tag.version();
                trace!("Read {version:?} tag from '{}'", path.display());
                Ok(Self(tag))
            }
            Err(id3::Error {
                kind: ErrorKind::NoTag,
                ..
            }) => {
                debug!("No ID3 tag found in '{}'", path.display());
                Ok(Self(Tag::new()))
            }
            Err(source) => Err(FixerError::ReadTag {
                path: path.to_owned(),
                source,
            }
            .into()),
        }
    }

    fn frame_id(field: TextField) -> &'static str {
        match field {
            TextField::Title => "TIT2",
            TextField::Artist => "TPE1",
            TextField::Album => "TALB",
        }
    }
}

impl Tags for MP3Tags {
    fn get(&self, field: TextField) -> Option<&str> {
        // ID3v2.4 separates multiple values with NUL; only the first counts.
        self.0
            .get(MP3Tags::frame_id(field))
            .and_then(|frame| frame.content().text())
            .and_then(|text| text.split('\0').next())
    }

    fn has_artwork(&self) -> bool {
        self.0.pictures().next().is_some()
    }

    fn set(&mut self, field: TextField, value: Option<&str>) {
        let id = MP3Tags::frame_id(field);

        self.0.remove(id);

        if let Some(value) = value {
            self.0.set_text(id, value);
        }
    }

    fn set_artwork(&mut self, artwork: Option<&Artwork>) {
        self.0.remove_all_pictures();

        if let Some(artwork) = artwork {
            self.0.add_frame(Picture {
                mime_type: artwork.mime_type().to_owned(),
                picture_type: PictureType::CoverFront,
                description: String::new(),
                data: artwork.data().to_vec(),
            });
        }
    }

    fn save(&self, path: &Path) -> Result<()> {
        let version = self.0.version();

        self.0
            .write_to_path(path, version)
            .map_err(|source| FixerError::WriteTag {
                path: path.to_owned(),
                source,
            })?;

        debug!("Saved {version:?} tag to '{}'", path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use id3::Version;

    const FAKE_AUDIO: &[u8] = b"\xFF\xFB\x90\x64not really audio";

    fn write_song(
        dir: &TempDir,
        name: &str,
        tag: Option<Tag>,
    ) -> Result<std::path::PathBuf> {
        let path = dir.path().join(name);
        std::fs::write(&path, FAKE_AUDIO)?;

        if let Some(tag) = tag {
            tag.write_to_path(&path, Version::Id3v24)?;
        }

        Ok(path)
    }

    #[test]
    fn test_untagged_file_loads_empty() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write_song(&dir, "untagged.mp3", None)?;

        let tags = MP3Tags::read_from_path(&path)?;

        assert_eq!(tags.title(), None);
        assert_eq!(tags.artist(), None);
        assert_eq!(tags.album(), None);
        assert!(!tags.has_artwork());

        Ok(())
    }

    #[test]
    fn test_missing_file_fails() -> Result<()> {
        let dir = TempDir::new()?;

        let result = MP3Tags::read_from_path(&dir.path().join("missing.mp3"));

        let error = result.expect_err("missing file should not load");
        assert!(matches!(
            error.downcast_ref::<FixerError>(),
            Some(FixerError::ReadTag { .. })
        ));

        Ok(())
    }

    #[test]
    fn test_set_and_save() -> Result<()> {
        let dir = TempDir::new()?;

        let mut tag = Tag::new();
        tag.set_title("Old");
        tag.set_artist("Someone");
        tag.set_album("Something");
        let path = write_song(&dir, "song.mp3", Some(tag))?;

        let mut tags = MP3Tags::read_from_path(&path)?;
        assert_eq!(tags.title(), Some("Old"));

        tags.set(TextField::Title, Some("New"));
        tags.set(TextField::Artist, Some(""));
        tags.set(TextField::Album, None);
        tags.set_artwork(Some(&Artwork::new("image/png", vec![1, 2, 3])));
        tags.save(&path)?;

        let tags = MP3Tags::read_from_path(&path)?;
        assert_eq!(tags.title(), Some("New"));
        assert_eq!(tags.artist(), Some(""));
        assert_eq!(tags.album(), None);
        assert!(tags.has_artwork());

        let tag = Tag::read_from_path(&path)?;
        let pictures: Vec<&Picture> = tag.pictures().collect();
        assert_eq!(pictures.len(), 1);
        assert_eq!(pictures[0].mime_type, "image/png");
        assert_eq!(pictures[0].picture_type, PictureType::CoverFront);
        assert_eq!(pictures[0].data, vec![1, 2, 3]);

        Ok(())
    }

    #[test]
    fn test_artwork_is_replaced() -> Result<()> {
        let dir = TempDir::new()?;
        let path = write_song(&dir, "song.mp3", None)?;

        let mut tags = MP3Tags::read_from_path(&path)?;
        tags.set_artwork(Some(&Artwork::new("image/jpeg", vec![1])));
        tags.set_artwork(Some(&Artwork::new("image/jpeg", vec![2])));
        tags.save(&path)?;

        let tag = Tag::read_from_path(&path)?;
        let data: Vec<&[u8]> =
            tag.pictures().map(|picture| picture.data.as_slice()).collect();
        assert_eq!(data, vec![&[2u8][..]]);

        Ok(())
    }
}
