use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Errors raised while fixing a folder of songs.
pub enum FixerError {
    /// The selected folder does not exist.
    #[error("Provided directory [{}] does not exist", .0.display())]
    FolderNotFound(PathBuf),

    /// The selected path exists, but is not a folder.
    #[error("Provided path [{}] is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The tag library was unable to read a song.
    #[error("Unable to read tag from '{}': {source}", path.display())]
    ReadTag {
        /// Song that failed to load
        path: PathBuf,
        /// Underlying tag error
        source: id3::Error,
    },

    /// The tag library was unable to save a song.
    #[error("Unable to write tag to '{}': {source}", path.display())]
    WriteTag {
        /// Song that failed to save
        path: PathBuf,
        /// Underlying tag error
        source: id3::Error,
    },

    /// The cover image could not be read.
    #[error("Unable to read cover '{}': {source}", path.display())]
    ReadCover {
        /// Cover that failed to load
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Input was closed while a prompt was waiting for an answer.
    #[error("Input closed while waiting for an answer!")]
    InputClosed,

    /// Verbosity outside of the supported range.
    #[error("Verbosity must be between 0 and {max}, not {found}!")]
    Verbosity {
        /// Highest supported verbosity
        max: usize,
        /// Requested verbosity
        found: usize,
    },
}

impl FixerError {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            FixerError::FolderNotFound(_) | FixerError::NotADirectory(_) => 2,
            _ => 1,
        }
    }
}
