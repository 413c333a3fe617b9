use super::Config;
use crate::error::FixerError;
use anyhow::Result;
use log::{log, LevelFilter};
use std::fs;
use std::path::PathBuf;

static LOG_LEVELS: [log::LevelFilter; 6] = [
    LevelFilter::Off,
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

pub(crate) fn get_log_dir() -> PathBuf {
    std::env::temp_dir().join(Config::LOG_NAME)
}

fn level_for(verbosity: usize) -> Result<LevelFilter> {
    LOG_LEVELS.get(verbosity).copied().ok_or_else(|| {
        FixerError::Verbosity {
            max: LOG_LEVELS.len() - 1,
            found: verbosity,
        }
        .into()
    })
}

/// Setup logger. Logs go to a file only, stdout belongs to the prompts.
pub(crate) fn setup_logger(verbosity: usize, filename: &str) -> Result<()> {
    let level = level_for(verbosity)?;

    if level == LevelFilter::Off {
        return Ok(());
    }

    let path = get_log_dir();

    fs::create_dir_all(&path)?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{:.1}][{}][{}:{}] {}",
                record.level(),
                chrono::Local::now().format("%H:%M:%S.%6f"),
                record.target().rsplit("::").next().unwrap_or_default(),
                record.line().unwrap_or(0),
                message
            ));
        })
        .level(level)
        .chain(
            std::fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path.join(format!("{filename}.log")))?,
        )
        .apply()?;

    if let Some(level) = log::max_level().to_level() {
        log!(level, "Log started");
    }

    Ok(())
}
