#![doc = include_str!("../README.md")]

/// Command line arguments.
mod args;
/// Durable sync index.
mod cache;
/// Configuration file options.
mod config;
/// Notmuch tag reconciliation.
mod local;
/// Maildir storage.
mod maildir;
/// Raw RFC-822 message handling.
mod message;
/// OAuth token acquisition and refresh.
mod oauth;
/// Gmail API client.
mod remote;
/// Sync engine.
mod sync;

use args::Args;
use atty::Stream;
use clap::Parser;
use config::Config;
use crossbeam::channel::bounded;
use indicatif::ProgressBar;
use log::debug;
use snafu::prelude::*;
use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Could not open config file: {}", source))]
    OpenConfigFile { source: config::Error },

    #[snafu(display("Could not open lock file `{}': {}", path.to_string_lossy(), source))]
    OpenLockFile { path: PathBuf, source: io::Error },

    #[snafu(display("Could not lock: {}", source))]
    Lock { source: io::Error },

    #[snafu(display("Could not open maildir: {}", source))]
    OpenMaildir { source: maildir::Error },

    #[snafu(display("Could not access cache: {}", source))]
    CacheAccess { source: cache::Error },

    #[snafu(display("Could not obtain OAuth token: {}", source))]
    Auth { source: oauth::Error },

    #[snafu(display("Could not sync mail: {}", source))]
    Sync { source: sync::Error },

    #[snafu(display("Could not reconcile notmuch tags: {}", source))]
    Reconcile { source: local::Error },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

fn try_main(stdout: &mut StandardStream) -> Result<(), Error> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();

    let info_color_spec = ColorSpec::new()
        .set_fg(Some(Color::Green))
        .set_bold(true)
        .to_owned();

    // Determine working directory and load all data files.
    let config_dir = args.path.clone().unwrap_or_else(|| PathBuf::from("."));

    let config = Config::from_dir(&config_dir).context(OpenConfigFileSnafu {})?;
    debug!("Using config: {:?}", config);

    let maildir_root = config
        .maildir
        .clone()
        .unwrap_or_else(|| config_dir.clone());

    // Grab lock.
    let lock_file_path = maildir_root.join("outtake.lock");
    let mut lock = fslock::LockFile::open(&lock_file_path).context(OpenLockFileSnafu {
        path: lock_file_path,
    })?;
    let is_locked = lock.try_lock().context(LockSnafu {})?;
    if !is_locked {
        println!("Lock file owned by another process. Waiting...");
        lock.lock().context(LockSnafu {})?;
    }

    let maildir = maildir::Maildir::create(&maildir_root).context(OpenMaildirSnafu {})?;
    let cache = cache::Cache::open(&maildir_root).context(CacheAccessSnafu {})?;

    // The credential blob lives in the cache; acquire or refresh as needed.
    let token = match cache.oauth_token().context(CacheAccessSnafu {})? {
        Some(token) if !token.is_expired() => token,
        Some(token) => {
            debug!("Access token expired, refreshing");
            let token = oauth::refresh(&config, &token).context(AuthSnafu {})?;
            cache.set_oauth_token(&token).context(CacheAccessSnafu {})?;
            token
        }
        None => {
            let token = oauth::authorize(&config).context(AuthSnafu {})?;
            cache.set_oauth_token(&token).context(CacheAccessSnafu {})?;
            token
        }
    };
    let remote = remote::GmailRemote::new(&token.access_token, config.timeout);

    match args.command {
        args::Command::Sync { full } => {
            stdout.set_color(&info_color_spec).ok();
            write!(stdout, "Synchronizing mail...").ok();
            stdout.reset().ok();
            writeln!(stdout).ok();
            stdout.flush().ok();

            let (progress_tx, progress_rx) = bounded::<sync::Progress>(128);
            let render = thread::spawn(move || {
                let bar = ProgressBar::new(0);
                for progress in progress_rx.iter() {
                    bar.set_length(progress.total);
                    bar.set_position(progress.current);
                }
                bar.finish_and_clear();
            });

            let engine =
                sync::Engine::new(&cache, &maildir, &remote, &config, Some(progress_tx));
            let result = engine.sync(full);
            drop(engine);
            render.join().ok();
            result.context(SyncSnafu {})
        }
        args::Command::Reconcile => {
            local::reconcile(&cache, maildir.path(), &remote).context(ReconcileSnafu {})
        }
    }
}

fn main() {
    let mut stdout = StandardStream::stdout(if atty::is(Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    });
    let mut stderr = StandardStream::stderr(if atty::is(Stream::Stderr) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    });

    std::process::exit(match try_main(&mut stdout) {
        Ok(_) => 0,
        Err(err) => {
            stderr
                .set_color(ColorSpec::new().set_fg(Some(Color::Red)))
                .ok();
            writeln!(&mut stderr, "error: {err}").ok();
            1
        }
    });
}
