#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

//! Fixes the tags of a folder of MP3 files.
//!
//! Shows the title, artist, album and cover of every song, then asks which
//! of them to replace. Titles can be derived from the file names.

/// Controls the command line interface
pub mod cli;
/// Errors
pub mod error;
/// Songs, their tags and covers
pub mod file;
pub mod fix;
