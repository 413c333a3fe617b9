use super::Config;
use crate::error::FixerError;
use crate::file::Song;
use crate::fix::FixRule;
use colored::Colorize;
use indicatif::{
    ProgressBar as IProgressBar, ProgressDrawTarget, ProgressFinish,
    ProgressStyle,
};
use std::io::{Result, Write};

const BANNER: &str = r"
 __  __ _____ ____    ______ _
|  \/  |  __ \___ \  |  ____(_)
| \  / | |__) |__) | | |__   ___  _____ _ __
| |\/| |  ___/|__ <  |  __| | \ \/ / _ \ '__|
| |  | | |    ___) | | |    | |>  <  __/ |
|_|  |_|_|   |____/  |_|    |_/_/\_\___|_|
";

/// Shown in place of a missing tag value.
const MISSING: &str = "-";

/// Prints `error` for the operator.
pub fn print_error(error: &anyhow::Error) {
    match error.downcast_ref::<FixerError>() {
        Some(
            error @ (FixerError::FolderNotFound(_)
            | FixerError::NotADirectory(_)),
        ) => println!("{}", error.to_string().red()),
        _ => println!("An error occurred:\n{error}"),
    }
}

pub(crate) fn print_header<W: Write>(
    out: &mut W,
    config: &Config,
    found_cover: bool,
    total_songs: usize,
) -> Result<()> {
    writeln!(out, "{}", BANNER.green())?;
    writeln!(
        out,
        "Selected directory: {}",
        config.folder().display().to_string().green()
    )?;
    writeln!(
        out,
        "Found cover: {}",
        if found_cover { "YES".green() } else { "NO".red() }
    )?;
    writeln!(out, "Total songs: {total_songs}\n")
}

/// Column widths of the songs table, measured over all rows before any row
/// is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TableLayout {
    pub(crate) title: usize,
    pub(crate) artist: usize,
    pub(crate) album: usize,
}

impl TableLayout {
    const PADDING: usize = 2;

    pub(crate) fn measure(rows: &[SongRow]) -> Self {
        TableLayout {
            title: Self::width(rows.iter().map(|r| r.title), "Title"),
            artist: Self::width(rows.iter().map(|r| r.artist), "Artist"),
            album: Self::width(rows.iter().map(|r| r.album), "Album"),
        }
    }

    /// Longest value, at least as wide as the header, plus padding.
    fn width<'a, I>(values: I, header: &str) -> usize
    where
        I: Iterator<Item = &'a str>,
    {
        values
            .map(|value| value.chars().count())
            .max()
            .unwrap_or(0)
            .max(header.len())
            + Self::PADDING
    }
}

#[derive(Debug)]
pub(crate) struct SongRow<'a> {
    title: &'a str,
    artist: &'a str,
    album: &'a str,
    has_cover: bool,
}

impl<'a> From<&'a Song> for SongRow<'a> {
    fn from(song: &'a Song) -> Self {
        let tags = song.tags();

        SongRow {
            title: tags.title().unwrap_or(MISSING),
            artist: tags.artist().unwrap_or(MISSING),
            album: tags.album().unwrap_or(MISSING),
            has_cover: tags.has_artwork(),
        }
    }
}

pub(crate) fn print_songs_table<W: Write>(
    out: &mut W,
    songs: &[Song],
) -> Result<()> {
    let rows: Vec<SongRow> = songs.iter().map(SongRow::from).collect();
    let layout = TableLayout::measure(&rows);

    writeln!(
        out,
        "{}{}{}{}",
        format!("{:<w$}", "Title", w = layout.title).blue().bold(),
        format!("{:<w$}", "Artist", w = layout.artist).blue().bold(),
        format!("{:<w$}", "Album", w = layout.album).blue().bold(),
        "Cover".blue().bold(),
    )?;

    for row in &rows {
        writeln!(
            out,
            "{:<tw$}{:<rw$}{:<aw$}{}",
            row.title,
            row.artist,
            row.album,
            if row.has_cover { "Yes".green() } else { "No".red() },
            tw = layout.title,
            rw = layout.artist,
            aw = layout.album,
        )?;
    }

    Ok(())
}

pub(crate) fn print_filename_examples<W: Write>(
    out: &mut W,
    file_names: &[String],
) -> Result<()> {
    writeln!(out, "\nSome songs filenames from folder for example:")?;

    for name in file_names.iter().take(Config::FILENAME_PREVIEW_AMOUNT) {
        writeln!(out, "{name}")?;
    }

    Ok(())
}

pub(crate) fn fix_rule_menu() -> String {
    let options: Vec<String> =
        FixRule::ALL.iter().map(ToString::to_string).collect();

    format!("\n{}\n\nSelect fix: ", options.join("\n"))
}

pub(crate) fn print_rename_preview<W: Write>(
    out: &mut W,
    file_names: &[String],
    rule: FixRule,
) -> Result<()> {
    let width = file_names
        .iter()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0)
        + 2;

    for name in file_names {
        writeln!(out, "{name:<width$}{}  {}", "->".blue(), rule.apply(name))?;
    }

    Ok(())
}

pub(crate) fn create_progressbar(
    len: u64,
    msg: &'static str,
    finished_msg: &'static str,
    preview: bool,
    target: ProgressDrawTarget,
) -> IProgressBar {
    let bar = IProgressBar::with_draw_target(len, target);

    let pp = if preview { Config::PREVIEW_PREFIX } else { "" };

    let template = format!("{pp}[{{pos}}/{{len}}] {{msg}} {{wide_bar}}");

    bar.set_style(ProgressStyle::default_bar().template(&template).on_finish(
        ProgressFinish::WithMessage(std::borrow::Cow::Borrowed(finished_msg)),
    ));
    bar.set_message(msg);

    bar
}
