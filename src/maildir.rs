use core::fmt;
use maildir::Maildir as MaildirStore;
use snafu::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Could not create maildir layout under `{}': {}", path.to_string_lossy(), source))]
    CreateMaildir { path: PathBuf, source: io::Error },

    #[snafu(display("Could not deliver message to maildir: {}", source))]
    Deliver { source: maildir::MaildirError },

    #[snafu(display("No maildir file exists for key `{}'", key))]
    UnknownKey { key: Key },

    #[snafu(display("Could not read mail file `{}': {}", path.to_string_lossy(), source))]
    ReadMailFile { path: PathBuf, source: io::Error },

    #[snafu(display("Could not remove mail file for key `{}': {}", key, source))]
    RemoveMailFile { key: Key, source: io::Error },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Opaque handle identifying a stored mail file, stable across the `new/` and
/// `cur/` subtrees.
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Key(pub String);

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

pub struct Maildir {
    store: MaildirStore,
}

impl Maildir {
    /// Open the maildir rooted at `path`, creating the `new/`, `cur/` and
    /// `tmp/` subtrees if missing.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let store = MaildirStore::from(path.as_ref().to_path_buf());
        store.create_dirs().context(CreateMaildirSnafu {
            path: path.as_ref(),
        })?;
        Ok(Self { store })
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Deliver a message into `new/`.
    pub fn deliver_new(&self, data: &[u8]) -> Result<Key> {
        let id = self.store.store_new(data).context(DeliverSnafu {})?;
        Ok(Key(id))
    }

    /// Deliver a message into `cur/`, marked seen.
    pub fn deliver_cur(&self, data: &[u8]) -> Result<Key> {
        let id = self
            .store
            .store_cur_with_flags(data, "S")
            .context(DeliverSnafu {})?;
        Ok(Key(id))
    }

    /// Path of the file stored under `key`.
    pub fn get_file(&self, key: &Key) -> Result<PathBuf> {
        self.store
            .find(&key.0)
            .map(|entry| entry.path().clone())
            .ok_or(Error::UnknownKey { key: key.clone() })
    }

    /// Raw bytes of the message stored under `key`.
    pub fn read(&self, key: &Key) -> Result<Vec<u8>> {
        let path = self.get_file(key)?;
        fs::read(&path).context(ReadMailFileSnafu { path })
    }

    /// Remove the file stored under `key`. Deleting an already-gone key
    /// succeeds, so interrupted runs can safely reapply their deletes.
    pub fn delete(&self, key: &Key) -> Result<()> {
        if self.store.find(&key.0).is_none() {
            return Ok(());
        }
        self.store
            .delete(&key.0)
            .context(RemoveMailFileSnafu { key: key.clone() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivered_keys_resolve_in_both_subtrees() {
        let dir = tempfile::tempdir().unwrap();
        let maildir = Maildir::create(dir.path()).unwrap();

        let new_key = maildir.deliver_new(b"Subject: a\r\n\r\nbody\r\n").unwrap();
        let cur_key = maildir.deliver_cur(b"Subject: b\r\n\r\nbody\r\n").unwrap();

        assert!(maildir
            .get_file(&new_key)
            .unwrap()
            .to_string_lossy()
            .contains("/new/"));
        assert!(maildir
            .get_file(&cur_key)
            .unwrap()
            .to_string_lossy()
            .contains("/cur/"));

        maildir.delete(&new_key).unwrap();
        assert!(matches!(
            maildir.get_file(&new_key),
            Err(Error::UnknownKey { .. })
        ));
        assert_eq!(maildir.read(&cur_key).unwrap(), b"Subject: b\r\n\r\nbody\r\n");
    }
}
