#![warn(missing_docs)]
#![warn(clippy::pedantic)]
//! Song folder fixtures: a temporary folder populated with fake MP3 files
//! and cover images, plus a runner that tears the folder down even in the
//! case of panic.

use anyhow::Result;
use assert_fs::TempDir;
use id3::{Tag, TagLike, Version};
use std::path::{Path, PathBuf};

/// Stand-in for MPEG audio. The tag library never inspects the audio data,
/// so any payload after the ID3 header will do.
pub const FAKE_AUDIO: &[u8] = b"\xFF\xFB\x90\x64not really audio";

/// Stand-in for JPEG data.
pub const FAKE_JPEG: &[u8] = b"\xFF\xD8\xFF\xE0fake jpeg cover";

/// Initial tags for a fixture song. `None` leaves the frame out.
#[derive(Debug, Default, Clone, Copy)]
pub struct SongTags<'a> {
    /// Title frame
    pub title: Option<&'a str>,
    /// Artist frame
    pub artist: Option<&'a str>,
    /// Album frame
    pub album: Option<&'a str>,
}

/// A temporary folder holding songs and covers.
pub struct SongFolder {
    dir: TempDir,
}

impl SongFolder {
    /// Creates an empty folder.
    pub fn new() -> Result<Self> {
        Ok(SongFolder {
            dir: TempDir::new()?,
        })
    }

    /// Path of the folder.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes an untagged fake MP3 file.
    pub fn add_untagged_song(&self, name: &str) -> Result<PathBuf> {
        self.add_file(name, FAKE_AUDIO)
    }

    /// Writes a fake MP3 file carrying an ID3v2.4 tag with `tags`.
    pub fn add_song(&self, name: &str, tags: SongTags) -> Result<PathBuf> {
        let path = self.add_untagged_song(name)?;

        let mut tag = Tag::new();

        if let Some(title) = tags.title {
            tag.set_title(title);
        }

        if let Some(artist) = tags.artist {
            tag.set_artist(artist);
        }

        if let Some(album) = tags.album {
            tag.set_album(album);
        }

        tag.write_to_path(&path, Version::Id3v24)?;

        Ok(path)
    }

    /// Writes an arbitrary file.
    pub fn add_file(&self, name: &str, contents: &[u8]) -> Result<PathBuf> {
        let path = self.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Reads back the tag of song `name`.
    pub fn read_tag(&self, name: &str) -> Result<Tag> {
        Ok(Tag::read_from_path(self.path().join(name))?)
    }

    /// Removes the folder.
    pub fn close(self) -> Result<()> {
        self.dir.close()?;
        Ok(())
    }
}

/// Runs a test against a fresh [`SongFolder`] prepared by `setup_function`,
/// removing the folder afterwards.
///
/// # Errors
///
/// This returns any errors in the setup- and test-function, and any error
/// while removing the folder.
///
/// # Panics
///
/// This code uses `std::panic::catch_unwind` to catch any panic during testing
/// so the folder can be removed. An assert statement later panics again so
/// the original trace is preserved and displayed to the user.
pub fn test_runner<S, F>(setup_function: S, test_function: F) -> Result<()>
where
    S: FnOnce(&SongFolder) -> Result<()>,
    F: FnOnce(&SongFolder) -> Result<()>,
{
    let folder = SongFolder::new()?;

    setup_function(&folder)?;

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        test_function(&folder)
    }));

    folder.close()?;

    assert!(result.is_ok());

    // The above asserts checks that result is Ok.
    result.unwrap()
}
