use super::fs::Filesystem;
use super::prompt::Prompter;
use super::{apply, args, logging, plan, ui, Config};
use crate::error::FixerError;
use crate::file::find_cover;
use anyhow::Result;
use indicatif::ProgressDrawTarget;
use log::info;
use std::io::{BufRead, Write};

/// Main entrypoint for mp3fixer
pub fn main() -> Result<()> {
    let args = args::parse_args();

    logging::setup_logger(args.verbose, Config::LOG_NAME)?;
    info!("Parsed arguments:\n{:#?}", &args);

    let config = Config::from_args(&args);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    run(&config, &mut prompter, ProgressDrawTarget::stdout())
}

/// Runs the whole workflow for `config`, asking questions through
/// `prompter` and drawing write progress to `progress`.
pub fn run<R: BufRead, W: Write>(
    config: &Config,
    prompter: &mut Prompter<R, W>,
    progress: ProgressDrawTarget,
) -> Result<()> {
    let folder = config.folder();

    Filesystem::check_folder(folder)?;

    let cover = find_cover(folder);
    let paths = Filesystem::get_song_paths(folder)?;

    ui::print_header(prompter.output(), config, cover.is_some(), paths.len())?;

    let mut songs = Filesystem::load_songs(&paths)?;

    ui::print_songs_table(prompter.output(), &songs)?;

    if songs.is_empty() {
        writeln!(prompter.output(), "\nNo songs to edit.")?;
        return Ok(());
    }

    let file_names: Vec<String> =
        songs.iter().map(crate::file::Song::file_name).collect();

    let edit_plan =
        match plan::plan_edits(prompter, cover.as_deref(), &file_names)? {
            Some(edit_plan) => edit_plan,
            None => return Ok(()),
        };

    let count = apply::apply_plan(
        &edit_plan,
        &mut songs,
        config.preview(),
        progress,
    )?;

    let pp = config.preview_prefix();

    if config.preview() {
        writeln!(prompter.output(), "{pp}Previewed {} songs.", songs.len())?;
    } else {
        writeln!(prompter.output(), "{pp}Saved {count} songs.")?;
    }

    Ok(())
}

/// Process exit code for an error returned by [`main`] or [`run`].
pub fn exit_code(error: &anyhow::Error) -> u8 {
    error
        .downcast_ref::<FixerError>()
        .map_or(1, FixerError::exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use std::io::Cursor;

    fn run_with(config: &Config, input: &str) -> (Result<()>, String) {
        colored::control::set_override(false);

        let mut prompter =
            Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());

        let result =
            run(config, &mut prompter, ProgressDrawTarget::hidden());
        let output = String::from_utf8_lossy(&prompter.into_output()).into();

        (result, output)
    }

    #[test]
    fn test_missing_folder() -> Result<()> {
        let dir = TempDir::new()?;
        let missing = dir.path().join("missing");
        let config = Config::new(&missing.to_string_lossy(), false);

        let (result, output) = run_with(&config, "");

        let error = result.expect_err("folder is missing");
        assert_eq!(exit_code(&error), 2);
        assert!(output.is_empty());

        Ok(())
    }

    #[test]
    fn test_empty_folder() -> Result<()> {
        let dir = TempDir::new()?;
        dir.child("cover.png").write_binary(b"png")?;
        let config = Config::new(&dir.path().to_string_lossy(), false);

        let (result, output) = run_with(&config, "");

        assert!(result.is_ok());
        assert!(output.contains("Found cover: YES"));
        assert!(output.contains("Total songs: 0"));
        assert!(output.contains("Title  Artist  Album  Cover"));
        assert!(output.contains("No songs to edit."));
        assert!(!output.contains("Do you want to edit"));

        Ok(())
    }

    #[test]
    fn test_unreadable_tag_aborts_before_table() -> Result<()> {
        let dir = TempDir::new()?;
        dir.child("a.mp3").write_binary(b"not really audio")?;
        // ID3v2.7 does not exist.
        dir.child("b.mp3")
            .write_binary(b"ID3\x07\x00\x00\x00\x00\x00\x00audio")?;
        let config = Config::new(&dir.path().to_string_lossy(), false);

        let (result, output) = run_with(&config, "y\n");

        let error = result.expect_err("b.mp3 has an unsupported tag");
        assert!(matches!(
            error.downcast_ref::<FixerError>(),
            Some(FixerError::ReadTag { .. })
        ));
        assert_eq!(exit_code(&error), 1);
        assert!(output.contains("Total songs: 2"));
        assert!(!output.contains("Title"));
        assert!(!output.contains("Do you want to edit"));

        Ok(())
    }

    #[test]
    fn test_preview_leaves_files_alone() -> Result<()> {
        let dir = TempDir::new()?;
        dir.child("A - One.mp3").write_binary(b"not really audio")?;
        let config = Config::new(&dir.path().to_string_lossy(), true);

        let (result, output) = run_with(&config, "y\n\n\ny\n1\n\n");

        assert!(result.is_ok());
        assert!(output.contains("Found cover: NO"));
        assert!(output.contains("[P] Previewed 1 songs."));
        assert_eq!(
            std::fs::read(dir.path().join("A - One.mp3"))?,
            b"not really audio"
        );

        Ok(())
    }

    #[test]
    fn test_exit_codes() {
        let other = anyhow::anyhow!("Something else");
        assert_eq!(exit_code(&other), 1);

        let closed = anyhow::Error::from(FixerError::InputClosed);
        assert_eq!(exit_code(&closed), 1);

        let not_dir = anyhow::Error::from(FixerError::NotADirectory(
            std::path::PathBuf::from("file"),
        ));
        assert_eq!(exit_code(&not_dir), 2);
    }
}
