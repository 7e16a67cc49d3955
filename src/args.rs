use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Path to config file.
    ///
    /// Defaults to the current working directory.
    #[clap(short = 'C', long)]
    pub path: Option<PathBuf>,

    #[clap(flatten)]
    pub verbose: Verbosity<WarnLevel>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Synchronize the Gmail account into the local maildir.
    Sync {
        /// Perform a full sync even if an incremental sync is possible.
        #[clap(long)]
        full: bool,
    },
    /// Reconcile notmuch tags with Gmail labels.
    Reconcile,
}
