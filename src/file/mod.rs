/// Cover discovery and artwork
pub mod cover;
/// MP3 implementation (powered by id3)
pub mod mp3;

pub use cover::{find_cover, Artwork};
pub use mp3::MP3Tags;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Text fields that can be read and replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    /// Song title
    Title,
    /// Song artist
    Artist,
    /// Album title
    Album,
}

/// A tag handle. Every field holds at most one value; mutations stay in
/// memory until [`Tags::save`] is called.
pub trait Tags: std::fmt::Debug {
    /// First value of `field`, if any.
    fn get(&self, field: TextField) -> Option<&str>;

    /// Whether any artwork is embedded.
    fn has_artwork(&self) -> bool;

    /// Replaces `field` with `value`, or clears it when `value` is `None`.
    fn set(&mut self, field: TextField, value: Option<&str>);

    /// Replaces all artwork with `artwork`, or clears it when `artwork` is
    /// `None`.
    fn set_artwork(&mut self, artwork: Option<&Artwork>);

    /// Persists the tag to `path`.
    fn save(&self, path: &Path) -> Result<()>;

    /// The current title, if any.
    fn title(&self) -> Option<&str> {
        self.get(TextField::Title)
    }

    /// The current artist, if any.
    fn artist(&self) -> Option<&str> {
        self.get(TextField::Artist)
    }

    /// The current album, if any.
    fn album(&self) -> Option<&str> {
        self.get(TextField::Album)
    }
}

/// A song and its exclusively owned tag handle.
#[derive(Debug)]
pub struct Song {
    path: PathBuf,
    tags: Box<dyn Tags>,
}

impl Song {
    /// Loads the tag handle of the MP3 file at `path`.
    pub fn load(path: &Path) -> Result<Song> {
        let tags = MP3Tags::read_from_path(path)?;

        Ok(Song::new(path.to_owned(), Box::new(tags)))
    }

    /// Pairs `path` with an already loaded tag handle.
    pub fn new(path: PathBuf, tags: Box<dyn Tags>) -> Song {
        Song { path, tags }
    }

    /// Path of the song.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name of the song, without the folder.
    pub fn file_name(&self) -> String {
        // Songs are selected by file name, so there always is one.
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// The tag handle.
    pub fn tags(&self) -> &dyn Tags {
        self.tags.as_ref()
    }

    /// The tag handle, mutably.
    pub fn tags_mut(&mut self) -> &mut dyn Tags {
        self.tags.as_mut()
    }

    /// Persists the tag handle to the song's path.
    pub fn save(&self) -> Result<()> {
        self.tags.save(&self.path)
    }
}
