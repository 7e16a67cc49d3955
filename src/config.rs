use serde::Deserialize;
use snafu::prelude::*;
use std::{fs, io, path::PathBuf};

use snafu::Snafu;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Could not canonicalize config dir path: {}", source))]
    Canonicalize { source: io::Error },

    #[snafu(display("Could not read config file `{}': {}", filename.to_string_lossy(), source))]
    ReadConfigFile {
        filename: PathBuf,
        source: io::Error,
    },

    #[snafu(display("Could not parse config file `{}': {}", filename.to_string_lossy(), source))]
    ParseConfigFile {
        filename: PathBuf,
        source: toml::de::Error,
    },

    #[snafu(display("Must specify at least 1 for `concurrent_downloads'"))]
    ConcurrentDownloadsIsZero {},

    #[snafu(display("Must specify at least 1 for `message_buffer_size'"))]
    MessageBufferSizeIsZero {},
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// OAuth client ID of the Google Cloud project authorized to access the
    /// Gmail API.
    pub client_id: String,

    /// OAuth client secret paired with `client_id`.
    pub client_secret: String,

    /// Restrict synchronization to messages bearing this Gmail label name.
    ///
    /// If unset, the entire mailbox is synchronized.
    #[serde(default = "Default::default")]
    pub label: Option<String>,

    /// The location of the maildir, where downloaded email is finally stored.
    /// Defaults to the config directory itself.
    #[serde(default = "Default::default")]
    pub maildir: Option<PathBuf>,

    /// Number of messages to download in parallel.
    ///
    /// This corresponds to the number of blocking OS threads that will be
    /// created for Gmail API requests. Increasing this number too high will
    /// likely result in many failed connections.
    #[serde(default = "default_concurrent_downloads")]
    pub concurrent_downloads: usize,

    /// Capacity of the internal pipeline channels.
    ///
    /// Bounds how far the pagination and download stages may run ahead of the
    /// maildir writer.
    #[serde(default = "default_message_buffer_size")]
    pub message_buffer_size: usize,

    /// Number of seconds before timing out on a stalled connection.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_concurrent_downloads() -> usize {
    8
}

fn default_message_buffer_size() -> usize {
    128
}

fn default_timeout() -> u64 {
    30
}

impl Config {
    pub fn from_dir(path: &PathBuf) -> Result<Self> {
        let cpath = path.canonicalize().context(CanonicalizeSnafu)?;

        let filename = path.join("outtake.toml");

        let contents = fs::read_to_string(&filename).context(ReadConfigFileSnafu {
            filename: &filename,
        })?;
        let mut config: Self = toml::from_str(contents.as_str()).context(ParseConfigFileSnafu {
            filename: &filename,
        })?;

        // In directory mode, if a maildir isn't offered then we use the config
        // dir itself.
        if config.maildir.is_none() {
            config.maildir = Some(cpath);
        }

        // Perform final validation.
        ensure!(
            config.concurrent_downloads > 0,
            ConcurrentDownloadsIsZeroSnafu {}
        );
        ensure!(
            config.message_buffer_size > 0,
            MessageBufferSizeIsZeroSnafu {}
        );
        Ok(config)
    }
}
