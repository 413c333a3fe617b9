use super::Config;
use crate::error::FixerError;
use crate::file::Song;
use anyhow::Result;
use log::{debug, info};
use std::path::{Path, PathBuf};

pub(crate) struct Filesystem;

impl Filesystem {
    /// Lists files directly inside `path` matching `predicate`, sorted by
    /// name.
    fn search_path<P, Q>(path: &P, predicate: Q) -> Result<Vec<PathBuf>>
    where
        P: AsRef<Path>,
        Q: Fn(&Path) -> bool,
    {
        let mut found_paths = Vec::new();

        for entry in std::fs::read_dir(path)? {
            let entry_path = entry?.path();

            if entry_path.is_file() && predicate(&entry_path) {
                found_paths.push(entry_path);
            }
        }

        found_paths.sort();

        Ok(found_paths)
    }

    /// Checks that `folder` exists and is a directory.
    pub(crate) fn check_folder(folder: &Path) -> Result<()> {
        if !folder.exists() {
            return Err(FixerError::FolderNotFound(folder.to_owned()).into());
        }

        if !folder.is_dir() {
            return Err(FixerError::NotADirectory(folder.to_owned()).into());
        }

        debug!("Selected folder '{}'", folder.display());

        Ok(())
    }

    pub(crate) fn get_song_paths(folder: &Path) -> Result<Vec<PathBuf>> {
        let paths = Filesystem::search_path(&folder, |p| {
            p.extension()
                .map_or(false, |extension| extension == Config::SONG_EXTENSION)
        })?;

        info!("Found {} songs in '{}'", paths.len(), folder.display());

        Ok(paths)
    }

    /// Loads every song in `paths`. The first failure aborts loading.
    pub(crate) fn load_songs(paths: &[PathBuf]) -> Result<Vec<Song>> {
        paths.iter().map(|path| Song::load(path)).collect()
    }
}
