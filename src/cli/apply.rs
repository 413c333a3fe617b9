use super::plan::EditPlan;
use super::ui;
use crate::file::{Song, TextField};
use anyhow::Result;
use indicatif::{ProgressDrawTarget, ProgressIterator};
use log::{debug, info};

/// Applies `plan` to every song and saves each song once. Nothing is saved
/// when `preview` is set. Progress is drawn to `target`.
///
/// The first failing save aborts the batch; songs saved before it stay
/// changed.
pub fn apply_plan(
    plan: &EditPlan,
    songs: &mut [Song],
    preview: bool,
    target: ProgressDrawTarget,
) -> Result<usize> {
    let bar = ui::create_progressbar(
        songs.len() as u64,
        "Fixing songs...",
        "Fixed songs.",
        preview,
        target,
    );

    let mut saved = 0;

    for song in songs.iter_mut().progress_with(bar) {
        apply_to_song(plan, song);

        if preview {
            debug!("Previewed '{}'", song.path().display());
        } else {
            song.save()?;
            saved += 1;
        }
    }

    info!("Saved {saved} songs");

    Ok(saved)
}

fn apply_to_song(plan: &EditPlan, song: &mut Song) {
    let title = plan.fix_rule.map(|rule| rule.apply(&song.file_name()));
    let tags = song.tags_mut();

    if let Some(title) = title {
        tags.set(TextField::Title, Some(&title));
    }

    plan.artist.apply(tags, TextField::Artist);
    plan.album.apply(tags, TextField::Album);

    if let Some(artwork) = &plan.artwork {
        tags.set_artwork(Some(artwork));
    }
}
