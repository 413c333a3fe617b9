use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]

/// Holds application-wide command line arguments.
pub(crate) struct Args {
    /// Folder containing the songs.
    pub(crate) folder: String,

    #[clap(short, long)]
    /// Only preview changes, don't save any songs.
    pub(crate) preview: bool,

    #[clap(short, long, parse(from_occurrences))]
    /// Log verbosity, repeat up to five times.
    pub(crate) verbose: usize,
}

/// Parses arguments
pub(crate) fn parse_args() -> Args {
    Args::parse()
}
