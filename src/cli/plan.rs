use super::prompt::Prompter;
use super::ui;
use crate::file::{Artwork, Tags, TextField};
use crate::fix::FixRule;
use anyhow::Result;
use log::info;
use std::io::{BufRead, Write};
use std::path::Path;

/// What happens to a text field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    /// Leave the field as it is.
    #[default]
    Keep,
    /// Replace the field with a value, which may be empty.
    Set(String),
    /// Remove the field.
    Clear,
}

impl FieldEdit {
    /// Applies the edit to `field` of `tags`.
    pub fn apply(&self, tags: &mut dyn Tags, field: TextField) {
        match self {
            FieldEdit::Keep => (),
            FieldEdit::Set(value) => tags.set(field, Some(value)),
            FieldEdit::Clear => tags.set(field, None),
        }
    }
}

/// Every decision the operator made, complete before any song is touched.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EditPlan {
    /// Cover to embed in every song.
    pub artwork: Option<Artwork>,
    /// New artist.
    pub artist: FieldEdit,
    /// New album.
    pub album: FieldEdit,
    /// Rule for deriving titles from file names.
    pub fix_rule: Option<FixRule>,
}

/// Walks the operator through the edit questions. Returns `None` if they
/// don't want to edit at all.
///
/// `cover` is the discovered cover file, `file_names` the names of all
/// songs, in table order.
pub fn plan_edits<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    cover: Option<&Path>,
    file_names: &[String],
) -> Result<Option<EditPlan>> {
    if !prompter.ask("\nDo you want to edit songs info? y/N: ", false)? {
        info!("Operator declined to edit");
        return Ok(None);
    }

    let plan = EditPlan {
        artwork: ask_artwork(prompter, cover)?,
        artist: ask_artist(prompter)?,
        album: ask_album(prompter)?,
        fix_rule: ask_fix_rule(prompter, file_names)?,
    };

    info!("Edit plan:\n{:#?}", plan);

    prompter.wait_for_enter("\nPress Enter to start fix...")?;

    Ok(Some(plan))
}

/// Reads the cover eagerly, so the plan holds its bytes.
fn ask_artwork<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    cover: Option<&Path>,
) -> Result<Option<Artwork>> {
    match cover {
        Some(path) if prompter.ask("Use cover from folder? Y/n: ", true)? => {
            Artwork::read(path)
        }
        _ => Ok(None),
    }
}

/// An empty artist is still set, as an empty string.
fn ask_artist<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<FieldEdit> {
    if prompter.ask("Change Artist? y/N: ", false)? {
        Ok(FieldEdit::Set(prompter.read_line("Type new Artist name: ")?))
    } else {
        Ok(FieldEdit::Keep)
    }
}

/// An empty album clears the field.
fn ask_album<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<FieldEdit> {
    if !prompter.ask("Change Album? y/N: ", false)? {
        return Ok(FieldEdit::Keep);
    }

    let album = prompter.read_line("Type new Album name: ")?;

    if album.is_empty() {
        Ok(FieldEdit::Clear)
    } else {
        Ok(FieldEdit::Set(album))
    }
}

fn ask_fix_rule<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    file_names: &[String],
) -> Result<Option<FixRule>> {
    if !prompter.ask("Fix song names? y/N: ", false)? {
        return Ok(None);
    }

    ui::print_filename_examples(prompter.output(), file_names)?;

    let menu = ui::fix_rule_menu();

    let rule = loop {
        let selection = prompter.read_line(&menu)?;

        match FixRule::from_selection(&selection) {
            Some(rule) => break rule,
            None => {
                writeln!(prompter.output(), "Unrecognized answer, try again")?;
            }
        }
    };

    writeln!(prompter.output())?;
    ui::print_rename_preview(prompter.output(), file_names, rule)?;

    Ok(Some(rule))
}
