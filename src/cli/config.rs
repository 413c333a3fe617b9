use super::args::Args;
use std::path::{Path, PathBuf};

/// Settings for a single run.
#[derive(Debug, Clone)]
pub struct Config {
    folder: PathBuf,
    preview: bool,
}

impl Config {
    /// Extension of the files that are treated as songs.
    pub const SONG_EXTENSION: &'static str = "mp3";

    /// Number of file names shown before selecting a fix rule.
    pub const FILENAME_PREVIEW_AMOUNT: usize = 5;

    /// Prefixed to output that only previews changes.
    pub const PREVIEW_PREFIX: &'static str = "[P] ";

    /// Name of the log file and of its folder in the temp dir.
    pub const LOG_NAME: &'static str = "mp3fixer";

    /// Creates a config for `folder`, stripping one trailing separator.
    pub fn new(folder: &str, preview: bool) -> Self {
        let folder = match folder.strip_suffix(std::path::is_separator) {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => folder,
        };

        Config {
            folder: PathBuf::from(folder),
            preview,
        }
    }

    pub(crate) fn from_args(args: &Args) -> Self {
        Config::new(&args.folder, args.preview)
    }

    /// The selected folder.
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Whether changes are only previewed.
    pub fn preview(&self) -> bool {
        self.preview
    }

    /// Prefix for writer output, empty unless previewing.
    pub fn preview_prefix(&self) -> &'static str {
        if self.preview {
            Config::PREVIEW_PREFIX
        } else {
            ""
        }
    }
}
