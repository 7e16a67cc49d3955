use crate::maildir::Key;
use crate::oauth::Token;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use snafu::prelude::*;
use std::path::{Path, PathBuf};

/// Cache filename, resident in the maildir root.
const CACHE_FILE: &str = ".outtake";

pub const UNREAD_LABEL: &str = "UNREAD";
pub const STARRED_LABEL: &str = "STARRED";
pub const SENT_LABEL: &str = "SENT";

/// Labels whose per-label membership sets are indexed in the cache.
pub const PINNED_LABELS: [&str; 3] = [UNREAD_LABEL, STARRED_LABEL, SENT_LABEL];

/// All tables map utf-8 keys to opaque value bytes.
type Table = TableDefinition<'static, &'static str, &'static [u8]>;

const MID_TO_KEY: Table = TableDefinition::new("mid_to_key");
const MID_TO_LABELS: Table = TableDefinition::new("mid_to_labels");
const GID_TO_MID: Table = TableDefinition::new("gid_to_mid");
const MID_TO_GID: Table = TableDefinition::new("mid_to_gid");
const LABEL_TO_GID_UNREAD: Table = TableDefinition::new("label_to_gid_UNREAD");
const LABEL_TO_GID_STARRED: Table = TableDefinition::new("label_to_gid_STARRED");
const LABEL_TO_GID_SENT: Table = TableDefinition::new("label_to_gid_SENT");
const HISTORY_INDEX: Table = TableDefinition::new("history_index");
const OAUTH_TOKEN: Table = TableDefinition::new("oauth_token");

const ALL_TABLES: [Table; 9] = [
    MID_TO_KEY,
    MID_TO_LABELS,
    GID_TO_MID,
    MID_TO_GID,
    LABEL_TO_GID_UNREAD,
    LABEL_TO_GID_STARRED,
    LABEL_TO_GID_SENT,
    HISTORY_INDEX,
    OAUTH_TOKEN,
];

fn label_table(label: &str) -> Table {
    match label {
        UNREAD_LABEL => LABEL_TO_GID_UNREAD,
        STARRED_LABEL => LABEL_TO_GID_STARRED,
        SENT_LABEL => LABEL_TO_GID_SENT,
        other => unreachable!("label `{other}' has no membership table"),
    }
}

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Could not open cache file `{}': {}", path.to_string_lossy(), source))]
    OpenCacheFile {
        path: PathBuf,
        source: redb::DatabaseError,
    },

    #[snafu(display("Could not begin cache transaction: {}", source))]
    Transaction { source: redb::TransactionError },

    #[snafu(display("Could not open cache table: {}", source))]
    Table { source: redb::TableError },

    #[snafu(display("Cache read/write failed: {}", source))]
    Storage { source: redb::StorageError },

    #[snafu(display("Could not commit cache transaction: {}", source))]
    Commit { source: redb::CommitError },

    #[snafu(display("Could not decode cached value in `{}': {}", table, source))]
    Decode {
        table: String,
        source: serde_json::Error,
    },

    #[snafu(display("Could not encode value for cache table `{}': {}", table, source))]
    Encode {
        table: String,
        source: serde_json::Error,
    },

    #[snafu(display("Corrupt history cursor in cache"))]
    CorruptCursor {},

    #[snafu(display("Cached key for message {} is not valid utf-8", gid))]
    CorruptKey { gid: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The durable index of everything outtake knows about the mirrored account.
///
/// One redb file holds all tables. Individual mutations are their own
/// committed transactions; cross-table consistency is the writer's problem,
/// which tolerates partial state by being idempotent.
pub struct Cache {
    db: Database,
}

impl Cache {
    /// Open (or create) the cache resident in the given maildir root.
    pub fn open(maildir_root: impl AsRef<Path>) -> Result<Self> {
        let path = maildir_root.as_ref().join(CACHE_FILE);
        let db = Database::create(&path).context(OpenCacheFileSnafu { path: &path })?;
        // Create every table up front so that reads never race table creation.
        let txn = db.begin_write().context(TransactionSnafu {})?;
        for table in ALL_TABLES {
            txn.open_table(table).context(TableSnafu {})?;
        }
        txn.commit().context(CommitSnafu {})?;
        Ok(Self { db })
    }

    fn get(&self, table: Table, key: &str) -> Result<Option<Vec<u8>>> {
        let txn = self.db.begin_read().context(TransactionSnafu {})?;
        let table = txn.open_table(table).context(TableSnafu {})?;
        Ok(table
            .get(key)
            .context(StorageSnafu {})?
            .map(|guard| guard.value().to_vec()))
    }

    fn set(&self, table: Table, key: &str, value: &[u8]) -> Result<()> {
        let txn = self.db.begin_write().context(TransactionSnafu {})?;
        {
            let mut table = txn.open_table(table).context(TableSnafu {})?;
            table.insert(key, value).context(StorageSnafu {})?;
        }
        txn.commit().context(CommitSnafu {})
    }

    fn del(&self, table: Table, key: &str) -> Result<()> {
        let txn = self.db.begin_write().context(TransactionSnafu {})?;
        {
            let mut table = txn.open_table(table).context(TableSnafu {})?;
            table.remove(key).context(StorageSnafu {})?;
        }
        txn.commit().context(CommitSnafu {})
    }

    /// Snapshot of the key set of a table.
    ///
    /// The snapshot is taken in one read transaction, so it is stable under
    /// concurrent writes to this or any other table.
    fn items(&self, table: Table) -> Result<Vec<String>> {
        let txn = self.db.begin_read().context(TransactionSnafu {})?;
        let table = txn.open_table(table).context(TableSnafu {})?;
        let mut keys = Vec::new();
        for item in table.iter().context(StorageSnafu {})? {
            let (key, _) = item.context(StorageSnafu {})?;
            keys.push(key.value().to_string());
        }
        Ok(keys)
    }

    /// Maildir key for a message, if it is stored locally.
    pub fn msg_key(&self, gid: &str) -> Result<Option<Key>> {
        self.get(MID_TO_KEY, gid)?
            .map(|bytes| {
                String::from_utf8(bytes)
                    .map(Key)
                    .map_err(|_| Error::CorruptKey {
                        gid: gid.to_string(),
                    })
            })
            .transpose()
    }

    pub fn set_msg_key(&self, gid: &str, key: &Key) -> Result<()> {
        self.set(MID_TO_KEY, gid, key.0.as_bytes())
    }

    /// All gids known to be stored locally. This is the canonical set of
    /// "known messages".
    pub fn msg_gids(&self) -> Result<Vec<String>> {
        self.items(MID_TO_KEY)
    }

    /// Labels last written to disk for this message.
    pub fn msg_labels(&self, gid: &str) -> Result<Option<Vec<String>>> {
        self.get(MID_TO_LABELS, gid)?
            .map(|bytes| {
                serde_json::from_slice(&bytes).context(DecodeSnafu {
                    table: "mid_to_labels",
                })
            })
            .transpose()
    }

    pub fn set_msg_labels(&self, gid: &str, labels: &[String]) -> Result<()> {
        let bytes = serde_json::to_vec(labels).context(EncodeSnafu {
            table: "mid_to_labels",
        })?;
        self.set(MID_TO_LABELS, gid, &bytes)
    }

    /// Record the gid↔mid cross references for a message.
    pub fn set_ids(&self, gid: &str, mid: &str) -> Result<()> {
        self.set(GID_TO_MID, gid, mid.as_bytes())?;
        self.set(MID_TO_GID, mid, gid.as_bytes())
    }

    pub fn mid_for_gid(&self, gid: &str) -> Result<Option<String>> {
        Ok(self
            .get(GID_TO_MID, gid)?
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
    }

    pub fn gid_for_mid(&self, mid: &str) -> Result<Option<String>> {
        Ok(self
            .get(MID_TO_GID, mid)?
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
    }

    /// Purge the per-message records for a gid: key, labels, and both id
    /// cross references. Label membership sets are the caller's concern.
    pub fn del_msg(&self, gid: &str) -> Result<()> {
        self.del(MID_TO_KEY, gid)?;
        self.del(MID_TO_LABELS, gid)?;
        if let Some(mid) = self.mid_for_gid(gid)? {
            self.del(MID_TO_GID, &mid)?;
        }
        self.del(GID_TO_MID, gid)
    }

    /// Record that `gid` bears the pinned label `label`.
    pub fn add_label_member(&self, label: &str, gid: &str) -> Result<()> {
        self.set(label_table(label), gid, b"")
    }

    pub fn del_label_member(&self, label: &str, gid: &str) -> Result<()> {
        self.del(label_table(label), gid)
    }

    pub fn has_label_member(&self, label: &str, gid: &str) -> Result<bool> {
        Ok(self.get(label_table(label), gid)?.is_some())
    }

    /// Snapshot of the gids bearing the pinned label `label`.
    pub fn label_members(&self, label: &str) -> Result<Vec<String>> {
        self.items(label_table(label))
    }

    /// The last fully-processed history id, or 0 if no sync has completed.
    pub fn history_index(&self) -> Result<u64> {
        match self.get(HISTORY_INDEX, "0")? {
            Some(bytes) => decode_uvarint(&bytes).ok_or(Error::CorruptCursor {}),
            None => Ok(0),
        }
    }

    pub fn set_history_index(&self, history_id: u64) -> Result<()> {
        self.set(HISTORY_INDEX, "0", &encode_uvarint(history_id))
    }

    pub fn oauth_token(&self) -> Result<Option<Token>> {
        self.get(OAUTH_TOKEN, "0")?
            .map(|bytes| {
                serde_json::from_slice(&bytes).context(DecodeSnafu {
                    table: "oauth_token",
                })
            })
            .transpose()
    }

    pub fn set_oauth_token(&self, token: &Token) -> Result<()> {
        let bytes = serde_json::to_vec(token).context(EncodeSnafu {
            table: "oauth_token",
        })?;
        self.set(OAUTH_TOKEN, "0", &bytes)
    }
}

fn encode_uvarint(mut value: u64) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(10);
    loop {
        let mut byte = (value & 0x7f) as u8;
        value >>= 7;
        if value != 0 {
            byte |= 0x80;
        }
        bytes.push(byte);
        if value == 0 {
            return bytes;
        }
    }
}

fn decode_uvarint(bytes: &[u8]) -> Option<u64> {
    let mut value = 0u64;
    let mut shift = 0;
    for &byte in bytes {
        if shift >= 64 {
            return None;
        }
        value |= u64::from(byte & 0x7f) << shift;
        if byte & 0x80 == 0 {
            return Some(value);
        }
        shift += 7;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_cache() -> (tempfile::TempDir, Cache) {
        let dir = tempfile::tempdir().unwrap();
        let cache = Cache::open(dir.path()).unwrap();
        (dir, cache)
    }

    #[test]
    fn uvarint_roundtrip() {
        for value in [0, 1, 127, 128, 300, u64::from(u32::MAX), u64::MAX] {
            assert_eq!(decode_uvarint(&encode_uvarint(value)), Some(value));
        }
        assert_eq!(decode_uvarint(&[]), None);
        assert_eq!(decode_uvarint(&[0x80]), None);
    }

    #[test]
    fn message_records_roundtrip() {
        let (_dir, cache) = open_cache();
        assert_eq!(cache.msg_key("a1").unwrap(), None);

        cache.set_msg_key("a1", &Key("k1".to_string())).unwrap();
        cache
            .set_msg_labels("a1", &["UNREAD".to_string(), "INBOX".to_string()])
            .unwrap();
        cache.set_ids("a1", "x@y").unwrap();

        assert_eq!(cache.msg_key("a1").unwrap(), Some(Key("k1".to_string())));
        assert_eq!(
            cache.msg_labels("a1").unwrap(),
            Some(vec!["UNREAD".to_string(), "INBOX".to_string()])
        );
        assert_eq!(cache.mid_for_gid("a1").unwrap(), Some("x@y".to_string()));
        assert_eq!(cache.gid_for_mid("x@y").unwrap(), Some("a1".to_string()));
        assert_eq!(cache.msg_gids().unwrap(), vec!["a1".to_string()]);

        cache.del_msg("a1").unwrap();
        assert_eq!(cache.msg_key("a1").unwrap(), None);
        assert_eq!(cache.msg_labels("a1").unwrap(), None);
        assert_eq!(cache.mid_for_gid("a1").unwrap(), None);
        assert_eq!(cache.gid_for_mid("x@y").unwrap(), None);
        assert!(cache.msg_gids().unwrap().is_empty());
    }

    #[test]
    fn label_membership() {
        let (_dir, cache) = open_cache();
        cache.add_label_member(UNREAD_LABEL, "a1").unwrap();
        cache.add_label_member(UNREAD_LABEL, "b2").unwrap();
        assert!(cache.has_label_member(UNREAD_LABEL, "a1").unwrap());
        assert!(!cache.has_label_member(STARRED_LABEL, "a1").unwrap());

        let mut members = cache.label_members(UNREAD_LABEL).unwrap();
        members.sort();
        assert_eq!(members, vec!["a1".to_string(), "b2".to_string()]);

        cache.del_label_member(UNREAD_LABEL, "a1").unwrap();
        assert!(!cache.has_label_member(UNREAD_LABEL, "a1").unwrap());
    }

    #[test]
    fn history_cursor_defaults_to_zero() {
        let (_dir, cache) = open_cache();
        assert_eq!(cache.history_index().unwrap(), 0);
        cache.set_history_index(8675309).unwrap();
        assert_eq!(cache.history_index().unwrap(), 8675309);
    }

    #[test]
    fn decode_failure_is_fatal() {
        let (_dir, cache) = open_cache();
        cache.set(MID_TO_LABELS, "a1", b"not json").unwrap();
        assert!(matches!(
            cache.msg_labels("a1"),
            Err(Error::Decode { .. })
        ));

        cache.set(HISTORY_INDEX, "0", &[0x80]).unwrap();
        assert!(matches!(
            cache.history_index(),
            Err(Error::CorruptCursor {})
        ));
    }

    #[test]
    fn items_snapshot_is_stable_under_writes() {
        let (_dir, cache) = open_cache();
        for gid in ["a1", "b2", "c3"] {
            cache.set_msg_key(gid, &Key(format!("k-{gid}"))).unwrap();
        }
        let snapshot = cache.msg_gids().unwrap();
        // Writes on other tables do not disturb a taken snapshot.
        cache.add_label_member(SENT_LABEL, "d4").unwrap();
        assert_eq!(snapshot.len(), 3);
    }
}
