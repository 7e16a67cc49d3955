use crate::cache::{self, Cache, PINNED_LABELS, SENT_LABEL, UNREAD_LABEL};
use crate::config::Config;
use crate::maildir::{self, Key, Maildir};
use crate::message::{self, Message};
use crate::remote::{self, Remote};
use crossbeam::channel::{bounded, Sender};
use itertools::Itertools;
use log::{info, warn};
use snafu::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Snafu)]
pub enum Error {
    /// The server's history horizon has passed the stored cursor; only a
    /// full sync can recover.
    #[snafu(display("Server history expired; full sync required"))]
    FullSyncRequired {},

    #[snafu(display("Could not list messages: {}", source))]
    ListMessages { source: remote::Error },

    #[snafu(display("Could not resolve labels: {}", source))]
    GetLabels { source: remote::Error },

    #[snafu(display("Label `{}' does not exist on the server", label))]
    UnknownLabel { label: String },

    #[snafu(display("Could not fetch message {}: {}", gid, source))]
    FetchMessage { gid: String, source: remote::Error },

    #[snafu(display("Could not decode raw message {}: {}", gid, source))]
    DecodeRawMessage {
        gid: String,
        source: base64::DecodeError,
    },

    #[snafu(display("Could not fetch metadata for message {}: {}", gid, source))]
    FetchMetadata { gid: String, source: remote::Error },

    #[snafu(display("Could not replay history: {}", source))]
    GetHistory { source: remote::Error },

    #[snafu(display("Stored message {} no longer parses: {}", gid, source))]
    ReparseMessage {
        gid: String,
        source: message::Error,
    },

    #[snafu(display("Malformed {:?} op for message {}", operation, gid))]
    MalformedOp { operation: Operation, gid: String },

    #[snafu(display("Cache operation failed: {}", source))]
    CacheOp { source: cache::Error },

    #[snafu(display("Maildir operation failed: {}", source))]
    MaildirOp { source: maildir::Error },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Best-effort progress report published while a sync pass runs. `total` is
/// a server-side estimate and may drift.
#[derive(Debug, Clone, Copy)]
pub struct Progress {
    pub current: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    None,
    Add,
    Delete,
    Relabel,
}

/// One unit of work flowing from the fetch stage to the writer.
#[derive(Debug)]
struct Op {
    gid: String,
    history_id: u64,
    /// `None` on a Relabel means the prior label state was unknown and the
    /// shard worker must refetch metadata for the authoritative list.
    labels: Option<Vec<String>>,
    message: Option<Message>,
    operation: Operation,
}

impl Op {
    fn none(gid: &str) -> Self {
        Self {
            gid: gid.to_string(),
            history_id: 0,
            labels: None,
            message: None,
            operation: Operation::None,
        }
    }
}

/// Shard index for a gid: all history events for one message must traverse
/// the same worker so their order is preserved. Gids that do not parse as
/// hex collapse onto shard 0, which unbalances the pool but keeps the
/// same-gid-same-shard guarantee.
fn shard_for_gid(gid: &str, shard_count: usize) -> usize {
    u64::from_str_radix(gid, 16)
        .map(|value| (value % shard_count as u64) as usize)
        .unwrap_or(0)
}

pub struct Engine<'a> {
    cache: &'a Cache,
    maildir: &'a Maildir,
    remote: &'a dyn Remote,
    label: Option<String>,
    concurrent_downloads: usize,
    message_buffer_size: usize,
    progress: Option<Sender<Progress>>,
}

impl<'a> Engine<'a> {
    pub fn new(
        cache: &'a Cache,
        maildir: &'a Maildir,
        remote: &'a dyn Remote,
        config: &Config,
        progress: Option<Sender<Progress>>,
    ) -> Self {
        Self {
            cache,
            maildir,
            remote,
            label: config.label.clone(),
            concurrent_downloads: config.concurrent_downloads,
            message_buffer_size: config.message_buffer_size,
            progress,
        }
    }

    /// Synchronize the account. Incremental when a history cursor exists and
    /// `force_full` is unset; falls back to full when the server's history
    /// horizon has passed the cursor.
    pub fn sync(&self, force_full: bool) -> Result<()> {
        let label_id = match &self.label {
            Some(name) => Some(self.label_to_id(name)?),
            None => None,
        };
        let history_id = self.cache.history_index().context(CacheOpSnafu {})?;
        if history_id > 0 && !force_full {
            match self.incremental(history_id, label_id.as_deref()) {
                Err(Error::FullSyncRequired {}) => {
                    info!("History cursor expired, falling back to full sync");
                    self.full(label_id.as_deref())
                }
                result => result,
            }
        } else {
            self.full(label_id.as_deref())
        }
    }

    /// Resolve a user-facing label name to its server id.
    fn label_to_id(&self, label: &str) -> Result<String> {
        self.remote
            .get_labels()
            .context(GetLabelsSnafu {})?
            .into_iter()
            .find(|l| l.name == label)
            .map(|l| l.id)
            .context(UnknownLabelSnafu { label })
    }

    /// Full sync: enumerate every id on the server, resolve each through the
    /// fetch pool, then delete whatever the cache knows that the server no
    /// longer listed.
    fn full(&self, label_id: Option<&str>) -> Result<()> {
        info!("Performing full sync");
        let (gid_tx, gid_rx) = bounded::<String>(self.message_buffer_size);
        let (op_tx, op_rx) = bounded::<Result<Op>>(self.message_buffer_size);
        let total = AtomicU64::new(0);

        crossbeam::thread::scope(|scope| -> Result<()> {
            for _ in 0..self.concurrent_downloads {
                let gid_rx = gid_rx.clone();
                let op_tx = op_tx.clone();
                scope.spawn(move |_| {
                    for gid in gid_rx.iter() {
                        if op_tx.send(self.handle_new_msg(&gid)).is_err() {
                            // The writer bailed; unwind.
                            return;
                        }
                    }
                });
            }

            let pager = {
                let op_tx = op_tx.clone();
                let total = &total;
                scope.spawn(move |_| -> HashSet<String> {
                    let mut seen = HashSet::new();
                    let mut page: Option<String> = None;
                    loop {
                        let list = match self.remote.list(label_id, page.as_deref()) {
                            Ok(list) => list,
                            Err(source) => {
                                let _ = op_tx.send(Err(Error::ListMessages { source }));
                                return seen;
                            }
                        };
                        total.fetch_add(list.estimated_total, Ordering::Relaxed);
                        for gid in list.ids {
                            seen.insert(gid.clone());
                            if gid_tx.send(gid).is_err() {
                                return seen;
                            }
                        }
                        match list.next_page {
                            Some(next) => page = Some(next),
                            None => return seen,
                        }
                    }
                })
            };

            // Only the workers and the pager may hold senders now; the
            // writer ends when all of them are done or gone.
            drop(op_tx);
            drop(gid_rx);

            let mut max_history_id = 0;
            let mut current = 0;
            let mut failure = None;
            for op in op_rx.iter() {
                self.emit_progress(current, total.load(Ordering::Relaxed));
                current += 1;
                match op {
                    Ok(op) => {
                        if op.operation == Operation::None {
                            continue;
                        }
                        if op.history_id > max_history_id {
                            max_history_id = op.history_id;
                        }
                        if let Err(error) = self.write_op(op) {
                            failure = Some(error);
                            break;
                        }
                    }
                    Err(error) => {
                        failure = Some(error);
                        break;
                    }
                }
            }
            drop(op_rx);
            let seen = pager.join().unwrap();
            if let Some(error) = failure {
                return Err(error);
            }

            // Garbage collection: anything we know about that the server no
            // longer lists was deleted remotely.
            for gid in self.cache.msg_gids().context(CacheOpSnafu {})? {
                if !seen.contains(&gid) {
                    self.write_del(&gid)?;
                }
            }

            if max_history_id > 0 {
                self.cache
                    .set_history_index(max_history_id)
                    .context(CacheOpSnafu {})?;
            }
            Ok(())
        })
        .unwrap()
    }

    /// Incremental sync: replay history deltas since `history_id`.
    ///
    /// Events are sharded by gid so that all events for one message traverse
    /// the fetch stage in arrival order; the single-threaded writer then
    /// guarantees serial application per gid.
    fn incremental(&self, history_id: u64, label_id: Option<&str>) -> Result<()> {
        info!("Performing incremental sync");
        let (op_tx, op_rx) = bounded::<Result<Op>>(self.message_buffer_size);
        let mut shard_txs = Vec::with_capacity(self.concurrent_downloads);
        let mut shard_rxs = Vec::with_capacity(self.concurrent_downloads);
        for _ in 0..self.concurrent_downloads {
            let (tx, rx) = bounded::<Op>(self.message_buffer_size);
            shard_txs.push(tx);
            shard_rxs.push(rx);
        }
        let total = AtomicU64::new(0);

        crossbeam::thread::scope(|scope| -> Result<()> {
            for shard_rx in shard_rxs {
                let op_tx = op_tx.clone();
                scope.spawn(move |_| {
                    for op in shard_rx.iter() {
                        if op_tx.send(self.resolve_history_op(op)).is_err() {
                            return;
                        }
                    }
                });
            }

            let pager = {
                let op_tx = op_tx.clone();
                let total = &total;
                scope.spawn(move |_| -> u64 {
                    let shard_count = shard_txs.len();
                    let dispatch = |op: Op| -> bool {
                        shard_txs[shard_for_gid(&op.gid, shard_count)].send(op).is_ok()
                    };
                    let mut max_history_id = history_id;
                    let mut page: Option<String> = None;
                    let mut first_page = true;
                    loop {
                        let history =
                            match self.remote.get_history(history_id, label_id, page.as_deref()) {
                                Ok(history) => history,
                                Err(source) if source.is_not_found()
                                    && first_page
                                    && history_id > 0 =>
                                {
                                    let _ = op_tx.send(Err(Error::FullSyncRequired {}));
                                    return max_history_id;
                                }
                                Err(source) => {
                                    let _ = op_tx.send(Err(Error::GetHistory { source }));
                                    return max_history_id;
                                }
                            };
                        first_page = false;
                        total.fetch_add(history.records.len() as u64, Ordering::Relaxed);
                        for record in history.records {
                            if record.id > max_history_id {
                                max_history_id = record.id;
                            }
                            for gid in record.messages_added {
                                let op = Op {
                                    operation: Operation::Add,
                                    history_id: record.id,
                                    ..Op::none(&gid)
                                };
                                if !dispatch(op) {
                                    return max_history_id;
                                }
                            }
                            for gid in record.messages_deleted {
                                let op = Op {
                                    operation: Operation::Delete,
                                    history_id: record.id,
                                    ..Op::none(&gid)
                                };
                                if !dispatch(op) {
                                    return max_history_id;
                                }
                            }
                            // Collapse this record's label churn into one
                            // delta per message before computing new lists.
                            let mut deltas: HashMap<String, (Vec<String>, Vec<String>)> =
                                HashMap::new();
                            for delta in record.labels_added {
                                deltas
                                    .entry(delta.gid)
                                    .or_default()
                                    .0
                                    .extend(delta.label_ids);
                            }
                            for delta in record.labels_removed {
                                deltas
                                    .entry(delta.gid)
                                    .or_default()
                                    .1
                                    .extend(delta.label_ids);
                            }
                            for (gid, (added, removed)) in deltas {
                                let labels = match self.compute_labels(&gid, &added, &removed) {
                                    Ok(labels) => labels,
                                    Err(error) => {
                                        let _ = op_tx.send(Err(error));
                                        return max_history_id;
                                    }
                                };
                                let changed = match &labels {
                                    Some(labels) => match self.labels_changed(&gid, labels) {
                                        Ok(changed) => changed,
                                        Err(error) => {
                                            let _ = op_tx.send(Err(error));
                                            return max_history_id;
                                        }
                                    },
                                    // Prior state unknown; let the shard
                                    // worker settle it.
                                    None => true,
                                };
                                if changed {
                                    let op = Op {
                                        operation: Operation::Relabel,
                                        history_id: record.id,
                                        labels,
                                        ..Op::none(&gid)
                                    };
                                    if !dispatch(op) {
                                        return max_history_id;
                                    }
                                }
                            }
                        }
                        match history.next_page {
                            Some(next) => page = Some(next),
                            None => return max_history_id,
                        }
                    }
                })
            };

            drop(op_tx);

            let mut current = 0;
            let mut failure = None;
            for op in op_rx.iter() {
                self.emit_progress(current, total.load(Ordering::Relaxed));
                current += 1;
                match op {
                    Ok(op) => {
                        if op.operation == Operation::None {
                            continue;
                        }
                        if let Err(error) = self.write_op(op) {
                            failure = Some(error);
                            break;
                        }
                    }
                    Err(error) => {
                        failure = Some(error);
                        break;
                    }
                }
            }
            drop(op_rx);
            let max_history_id = pager.join().unwrap();
            if let Some(error) = failure {
                return Err(error);
            }

            self.cache
                .set_history_index(max_history_id)
                .context(CacheOpSnafu {})?;
            Ok(())
        })
        .unwrap()
    }

    /// Resolve a sharded history event into a writable op. Adds need the
    /// full body/metadata dance; deletes pass through; relabels only need
    /// attention when the prior label state was unknown.
    fn resolve_history_op(&self, op: Op) -> Result<Op> {
        match op.operation {
            Operation::Add => self.handle_new_msg(&op.gid),
            Operation::Relabel if op.labels.is_none() => {
                let metadata = self
                    .remote
                    .get_metadata(&op.gid)
                    .context(FetchMetadataSnafu { gid: &op.gid })?;
                Ok(Op {
                    labels: Some(metadata.label_ids),
                    ..op
                })
            }
            _ => Ok(op),
        }
    }

    /// Resolve an id the server claims is new. The cache decides whether it
    /// really is: unknown ids become adds, known ids whose labels differ
    /// become relabels, everything else is a no-op.
    fn handle_new_msg(&self, gid: &str) -> Result<Op> {
        let key = self.cache.msg_key(gid).context(CacheOpSnafu {})?;
        let exists = key.is_some();
        let mut op = Op::none(gid);

        if !exists {
            match self.remote.get_raw(gid) {
                Ok(encoded) => {
                    let raw = base64::decode_config(&encoded, base64::URL_SAFE)
                        .context(DecodeRawMessageSnafu { gid })?;
                    match Message::parse(raw) {
                        Ok(parsed) => {
                            op.message = Some(parsed);
                            op.operation = Operation::Add;
                        }
                        Err(error) => {
                            // Often chats and such, which are not RFC-822
                            // messages. Skip them.
                            warn!("Error parsing message {gid}: {error}");
                            return Ok(op);
                        }
                    }
                }
                // Deleted between listing and fetching.
                Err(error) if error.is_not_found() => return Ok(op),
                Err(source) => return Err(Error::FetchMessage {
                    gid: gid.to_string(),
                    source,
                }),
            }
        }

        let metadata = self
            .remote
            .get_metadata(gid)
            .context(FetchMetadataSnafu { gid })?;
        op.history_id = metadata.history_id;
        let labels = metadata.label_ids;

        if exists && self.labels_changed(gid, &labels)? {
            // A known message whose labels moved: rewrite the stored copy.
            let key = key.ok_or(Error::MalformedOp {
                operation: Operation::Relabel,
                gid: gid.to_string(),
            })?;
            let raw = self.maildir.read(&key).context(MaildirOpSnafu {})?;
            let mut stored = Message::parse(raw).context(ReparseMessageSnafu { gid })?;
            stored.set_keywords(&labels);
            op.message = Some(stored);
            op.operation = Operation::Relabel;
        } else if let Some(message) = op.message.as_mut() {
            message.set_keywords(&labels);
        }
        op.labels = Some(labels);
        Ok(op)
    }

    /// True unless the stored label list equals `new_labels` modulo order.
    fn labels_changed(&self, gid: &str, new_labels: &[String]) -> Result<bool> {
        match self.cache.msg_labels(gid).context(CacheOpSnafu {})? {
            Some(old) => Ok(!old.iter().sorted().eq(new_labels.iter().sorted())),
            None => Ok(true),
        }
    }

    /// Merge a history label delta into the stored list, eagerly updating
    /// the pinned membership sets. Returns `None` when there is no stored
    /// list to merge into; callers must then refetch metadata rather than
    /// trust the delta alone.
    fn compute_labels(
        &self,
        gid: &str,
        added: &[String],
        removed: &[String],
    ) -> Result<Option<Vec<String>>> {
        for label in PINNED_LABELS {
            if added.iter().any(|l| l == label) {
                self.cache
                    .add_label_member(label, gid)
                    .context(CacheOpSnafu {})?;
            } else if removed.iter().any(|l| l == label) {
                self.cache
                    .del_label_member(label, gid)
                    .context(CacheOpSnafu {})?;
            }
        }

        match self.cache.msg_labels(gid).context(CacheOpSnafu {})? {
            Some(prior) => {
                let mut labels: HashSet<String> = prior.into_iter().collect();
                labels.extend(added.iter().cloned());
                for label in removed {
                    labels.remove(label);
                }
                Ok(Some(labels.into_iter().collect()))
            }
            None => Ok(None),
        }
    }

    fn write_op(&self, op: Op) -> Result<()> {
        match op.operation {
            Operation::None => Ok(()),
            Operation::Add => self.write_add(op),
            Operation::Delete => self.write_del(&op.gid),
            Operation::Relabel => {
                let labels = op.labels.ok_or(Error::MalformedOp {
                    operation: Operation::Relabel,
                    gid: op.gid.clone(),
                })?;
                self.write_labels(&op.gid, &labels, op.message)
            }
        }
    }

    /// Apply an Add: deliver the message, then record everything the cache
    /// tracks about it.
    fn write_add(&self, op: Op) -> Result<()> {
        let message = op.message.ok_or(Error::MalformedOp {
            operation: Operation::Add,
            gid: op.gid.clone(),
        })?;
        let labels = op.labels.unwrap_or_default();
        let gid = &op.gid;

        let key = self.deliver(&message, &labels)?;
        self.cache
            .set_msg_labels(gid, &labels)
            .context(CacheOpSnafu {})?;
        self.cache.set_msg_key(gid, &key).context(CacheOpSnafu {})?;
        if let Some(mid) = message.message_id() {
            self.cache.set_ids(gid, &mid).context(CacheOpSnafu {})?;
        }
        for label in PINNED_LABELS {
            if labels.iter().any(|l| l == label) {
                self.cache
                    .add_label_member(label, gid)
                    .context(CacheOpSnafu {})?;
            } else {
                self.cache
                    .del_label_member(label, gid)
                    .context(CacheOpSnafu {})?;
            }
        }
        Ok(())
    }

    /// Apply a Delete. Unknown gids succeed silently; we are deleting
    /// anyway.
    fn write_del(&self, gid: &str) -> Result<()> {
        let key = match self.cache.msg_key(gid).context(CacheOpSnafu {})? {
            Some(key) => key,
            None => return Ok(()),
        };
        self.maildir.delete(&key).context(MaildirOpSnafu {})?;
        self.cache.del_msg(gid).context(CacheOpSnafu {})?;
        for label in PINNED_LABELS {
            self.cache
                .del_label_member(label, gid)
                .context(CacheOpSnafu {})?;
        }
        Ok(())
    }

    /// Apply a Relabel: deliver a copy bearing the new `X-Keywords`, retire
    /// the old file. Maildir filenames are immutable, hence new-then-delete.
    fn write_labels(&self, gid: &str, labels: &[String], message: Option<Message>) -> Result<()> {
        let key = match self.cache.msg_key(gid).context(CacheOpSnafu {})? {
            Some(key) => key,
            None => {
                // The server emits label changes for messages it never let
                // us deliver.
                warn!("Unknown message {gid} for label write");
                return Ok(());
            }
        };
        let message = match message {
            Some(message) => message,
            None => {
                let raw = self.maildir.read(&key).context(MaildirOpSnafu {})?;
                let mut stored = Message::parse(raw).context(ReparseMessageSnafu { gid })?;
                stored.set_keywords(labels);
                stored
            }
        };
        let new_key = self.deliver(&message, labels)?;
        self.cache
            .set_msg_labels(gid, labels)
            .context(CacheOpSnafu {})?;
        self.cache
            .set_msg_key(gid, &new_key)
            .context(CacheOpSnafu {})?;
        self.maildir.delete(&key).context(MaildirOpSnafu {})
    }

    /// Sent mail and anything already read lands in `cur/`; unread mail is
    /// delivered to `new/`.
    fn deliver(&self, message: &Message, labels: &[String]) -> Result<Key> {
        let seen = labels.iter().any(|l| l == SENT_LABEL)
            || !labels.iter().any(|l| l == UNREAD_LABEL);
        if seen {
            self.maildir
                .deliver_cur(message.as_bytes())
                .context(MaildirOpSnafu {})
        } else {
            self.maildir
                .deliver_new(message.as_bytes())
                .context(MaildirOpSnafu {})
        }
    }

    fn emit_progress(&self, current: u64, total: u64) {
        if let Some(progress) = &self.progress {
            // Best effort; a missing or slow consumer never blocks the
            // pipeline.
            let _ = progress.try_send(Progress { current, total });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::STARRED_LABEL;
    use crate::remote::{HistoryPage, HistoryRecord, Label, LabelDelta, MessageList, Metadata};
    use std::sync::Mutex;

    #[derive(Default, Clone)]
    struct FakeMessage {
        raw: Option<Vec<u8>>,
        labels: Vec<String>,
        history_id: u64,
    }

    #[derive(Default)]
    struct FakeState {
        messages: HashMap<String, FakeMessage>,
        history: Vec<HistoryRecord>,
        history_expired: bool,
    }

    #[derive(Default)]
    struct FakeRemote {
        state: Mutex<FakeState>,
    }

    impl FakeRemote {
        fn insert(&self, gid: &str, mid: Option<&str>, labels: &[&str], history_id: u64) {
            let raw = mid.map(|mid| {
                format!("Message-Id: <{mid}>\r\nSubject: test {gid}\r\n\r\nbody of {gid}\r\n")
                    .into_bytes()
            });
            self.state.lock().unwrap().messages.insert(
                gid.to_string(),
                FakeMessage {
                    raw,
                    labels: labels.iter().map(|l| l.to_string()).collect(),
                    history_id,
                },
            );
        }

        fn insert_garbage(&self, gid: &str, history_id: u64) {
            self.state.lock().unwrap().messages.insert(
                gid.to_string(),
                FakeMessage {
                    raw: Some(b"not a mime message".to_vec()),
                    labels: Vec::new(),
                    history_id,
                },
            );
        }

        fn remove(&self, gid: &str) {
            self.state.lock().unwrap().messages.remove(gid);
        }

        fn set_labels(&self, gid: &str, labels: &[&str]) {
            let mut state = self.state.lock().unwrap();
            let message = state.messages.get_mut(gid).unwrap();
            message.labels = labels.iter().map(|l| l.to_string()).collect();
        }

        fn push_history(&self, record: HistoryRecord) {
            self.state.lock().unwrap().history.push(record);
        }

        fn expire_history(&self) {
            self.state.lock().unwrap().history_expired = true;
        }
    }

    impl Remote for FakeRemote {
        fn list(
            &self,
            _label_id: Option<&str>,
            _page: Option<&str>,
        ) -> remote::Result<MessageList> {
            let state = self.state.lock().unwrap();
            let ids: Vec<String> = state.messages.keys().cloned().sorted().collect();
            let estimated_total = ids.len() as u64;
            Ok(MessageList {
                ids,
                next_page: None,
                estimated_total,
            })
        }

        fn get_raw(&self, gid: &str) -> remote::Result<String> {
            let state = self.state.lock().unwrap();
            state
                .messages
                .get(gid)
                .and_then(|m| m.raw.as_ref())
                .map(|raw| base64::encode_config(raw, base64::URL_SAFE))
                .ok_or(remote::Error::NotFound {})
        }

        fn get_metadata(&self, gid: &str) -> remote::Result<Metadata> {
            let state = self.state.lock().unwrap();
            state
                .messages
                .get(gid)
                .map(|m| Metadata {
                    label_ids: m.labels.clone(),
                    history_id: m.history_id,
                })
                .ok_or(remote::Error::NotFound {})
        }

        fn get_history(
            &self,
            _since_history_id: u64,
            _label_id: Option<&str>,
            _page: Option<&str>,
        ) -> remote::Result<HistoryPage> {
            let state = self.state.lock().unwrap();
            if state.history_expired {
                return Err(remote::Error::NotFound {});
            }
            Ok(HistoryPage {
                records: state.history.clone(),
                next_page: None,
            })
        }

        fn modify_labels(
            &self,
            _gids: &[String],
            _add: &[String],
            _remove: &[String],
        ) -> remote::Result<()> {
            Ok(())
        }

        fn get_labels(&self) -> remote::Result<Vec<Label>> {
            Ok(vec![Label {
                id: "Label_1".to_string(),
                name: "lists".to_string(),
            }])
        }
    }

    struct Fixture {
        _dir: tempfile::TempDir,
        cache: Cache,
        maildir: Maildir,
        remote: FakeRemote,
        config: Config,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let maildir = Maildir::create(dir.path()).unwrap();
            let cache = Cache::open(dir.path()).unwrap();
            let config = Config {
                client_id: String::new(),
                client_secret: String::new(),
                label: None,
                maildir: None,
                concurrent_downloads: 4,
                message_buffer_size: 8,
                timeout: 5,
            };
            Self {
                _dir: dir,
                cache,
                maildir,
                remote: FakeRemote::default(),
                config,
            }
        }

        fn engine(&self) -> Engine {
            Engine::new(&self.cache, &self.maildir, &self.remote, &self.config, None)
        }

        fn stored_subtree(&self, gid: &str) -> String {
            let key = self.cache.msg_key(gid).unwrap().unwrap();
            let path = self.maildir.get_file(&key).unwrap();
            if path.to_string_lossy().contains("/new/") {
                "new".to_string()
            } else {
                "cur".to_string()
            }
        }

        fn stored_keywords(&self, gid: &str) -> Vec<String> {
            let key = self.cache.msg_key(gid).unwrap().unwrap();
            let raw = self.maildir.read(&key).unwrap();
            let mut keywords = Message::parse(raw).unwrap().keywords();
            keywords.sort();
            keywords
        }

        /// Check the cache↔maildir bi-implication and the pinned label set
        /// consistency for every known message.
        fn assert_invariants(&self) {
            for gid in self.cache.msg_gids().unwrap() {
                let key = self.cache.msg_key(&gid).unwrap().unwrap();
                assert!(
                    self.maildir.get_file(&key).is_ok(),
                    "cache key without maildir file for {gid}"
                );
                let labels = self.cache.msg_labels(&gid).unwrap().unwrap();
                for label in PINNED_LABELS {
                    assert_eq!(
                        self.cache.has_label_member(label, &gid).unwrap(),
                        labels.iter().any(|l| l == label),
                        "pinned membership for {label} disagrees with labels of {gid}"
                    );
                }
            }
        }
    }

    fn seed_s1(fixture: &Fixture) {
        fixture.remote.insert("a1", Some("x@y"), &["UNREAD"], 10);
        fixture
            .remote
            .insert("b2", Some("z@y"), &["SENT", "STARRED"], 11);
        fixture.engine().sync(false).unwrap();
    }

    #[test]
    fn first_run_full_sync() {
        let fixture = Fixture::new();
        seed_s1(&fixture);

        assert_eq!(fixture.stored_subtree("a1"), "new");
        assert_eq!(fixture.stored_subtree("b2"), "cur");
        assert_eq!(fixture.cache.msg_gids().unwrap().len(), 2);
        assert_eq!(
            fixture.cache.label_members(UNREAD_LABEL).unwrap(),
            vec!["a1".to_string()]
        );
        assert_eq!(
            fixture.cache.label_members(SENT_LABEL).unwrap(),
            vec!["b2".to_string()]
        );
        assert_eq!(
            fixture.cache.label_members(STARRED_LABEL).unwrap(),
            vec!["b2".to_string()]
        );
        assert_eq!(fixture.cache.mid_for_gid("a1").unwrap().unwrap(), "x@y");
        assert_eq!(fixture.cache.gid_for_mid("z@y").unwrap().unwrap(), "b2");
        assert_eq!(fixture.cache.history_index().unwrap(), 11);
        fixture.assert_invariants();
    }

    #[test]
    fn full_sync_is_idempotent() {
        let fixture = Fixture::new();
        seed_s1(&fixture);
        let keys_before: Vec<_> = ["a1", "b2"]
            .iter()
            .map(|gid| fixture.cache.msg_key(gid).unwrap().unwrap())
            .collect();

        fixture.engine().sync(true).unwrap();

        let keys_after: Vec<_> = ["a1", "b2"]
            .iter()
            .map(|gid| fixture.cache.msg_key(gid).unwrap().unwrap())
            .collect();
        assert_eq!(keys_before, keys_after);
        assert_eq!(fixture.cache.history_index().unwrap(), 11);
        fixture.assert_invariants();
    }

    #[test]
    fn incremental_add() {
        let fixture = Fixture::new();
        seed_s1(&fixture);

        fixture.remote.insert("c3", Some("q@y"), &["UNREAD"], 100);
        fixture.remote.push_history(HistoryRecord {
            id: 100,
            messages_added: vec!["c3".to_string()],
            ..Default::default()
        });
        fixture.engine().sync(false).unwrap();

        assert_eq!(fixture.stored_subtree("c3"), "new");
        assert_eq!(fixture.cache.mid_for_gid("c3").unwrap().unwrap(), "q@y");
        assert_eq!(fixture.cache.history_index().unwrap(), 100);
        fixture.assert_invariants();
    }

    #[test]
    fn incremental_relabel() {
        let fixture = Fixture::new();
        seed_s1(&fixture);
        let old_key = fixture.cache.msg_key("a1").unwrap().unwrap();

        fixture.remote.set_labels("a1", &["STARRED"]);
        fixture.remote.push_history(HistoryRecord {
            id: 101,
            labels_added: vec![LabelDelta {
                gid: "a1".to_string(),
                label_ids: vec!["STARRED".to_string()],
            }],
            labels_removed: vec![LabelDelta {
                gid: "a1".to_string(),
                label_ids: vec!["UNREAD".to_string()],
            }],
            ..Default::default()
        });
        fixture.engine().sync(false).unwrap();

        let new_key = fixture.cache.msg_key("a1").unwrap().unwrap();
        assert_ne!(old_key, new_key);
        assert!(fixture.maildir.get_file(&old_key).is_err());
        assert_eq!(fixture.stored_subtree("a1"), "cur");
        assert_eq!(fixture.stored_keywords("a1"), vec!["STARRED".to_string()]);
        assert!(fixture.cache.label_members(UNREAD_LABEL).unwrap().is_empty());
        assert_eq!(
            fixture.cache.label_members(STARRED_LABEL).unwrap(),
            vec!["a1".to_string(), "b2".to_string()]
        );
        assert_eq!(fixture.cache.history_index().unwrap(), 101);
        fixture.assert_invariants();
    }

    #[test]
    fn incremental_delete() {
        let fixture = Fixture::new();
        seed_s1(&fixture);
        let key = fixture.cache.msg_key("b2").unwrap().unwrap();

        fixture.remote.push_history(HistoryRecord {
            id: 102,
            messages_deleted: vec!["b2".to_string()],
            ..Default::default()
        });
        fixture.engine().sync(false).unwrap();

        assert!(fixture.maildir.get_file(&key).is_err());
        assert_eq!(fixture.cache.msg_key("b2").unwrap(), None);
        assert_eq!(fixture.cache.msg_labels("b2").unwrap(), None);
        assert_eq!(fixture.cache.gid_for_mid("z@y").unwrap(), None);
        assert!(fixture.cache.label_members(SENT_LABEL).unwrap().is_empty());
        assert!(fixture
            .cache
            .label_members(STARRED_LABEL)
            .unwrap()
            .is_empty());
        assert_eq!(fixture.cache.history_index().unwrap(), 102);
        fixture.assert_invariants();
    }

    #[test]
    fn expired_history_falls_back_to_full() {
        let fixture = Fixture::new();
        seed_s1(&fixture);

        fixture.remote.expire_history();
        fixture.remote.insert("c3", Some("q@y"), &["UNREAD"], 120);
        fixture.engine().sync(false).unwrap();

        assert_eq!(fixture.stored_subtree("c3"), "new");
        assert_eq!(fixture.cache.history_index().unwrap(), 120);
        fixture.assert_invariants();
    }

    #[test]
    fn body_not_found_during_add_is_skipped() {
        let fixture = Fixture::new();
        fixture.remote.insert("d4", None, &["UNREAD"], 50);

        fixture.engine().sync(false).unwrap();

        assert_eq!(fixture.cache.msg_key("d4").unwrap(), None);
        assert!(fixture.cache.msg_gids().unwrap().is_empty());
    }

    #[test]
    fn non_mime_artefacts_are_skipped() {
        let fixture = Fixture::new();
        fixture.remote.insert_garbage("e5", 60);
        fixture.remote.insert("a1", Some("x@y"), &["UNREAD"], 61);

        fixture.engine().sync(false).unwrap();

        assert_eq!(fixture.cache.msg_key("e5").unwrap(), None);
        assert!(fixture.cache.msg_key("a1").unwrap().is_some());
        fixture.assert_invariants();
    }

    #[test]
    fn full_sync_garbage_collects_deleted_messages() {
        let fixture = Fixture::new();
        seed_s1(&fixture);
        let key = fixture.cache.msg_key("b2").unwrap().unwrap();

        fixture.remote.remove("b2");
        fixture.engine().sync(true).unwrap();

        assert!(fixture.maildir.get_file(&key).is_err());
        assert_eq!(fixture.cache.msg_key("b2").unwrap(), None);
        assert_eq!(fixture.cache.msg_gids().unwrap(), vec!["a1".to_string()]);
        fixture.assert_invariants();
    }

    #[test]
    fn full_sync_reclassifies_known_messages_as_relabels() {
        let fixture = Fixture::new();
        seed_s1(&fixture);
        let old_key = fixture.cache.msg_key("a1").unwrap().unwrap();

        fixture.remote.set_labels("a1", &["STARRED"]);
        fixture.engine().sync(true).unwrap();

        let new_key = fixture.cache.msg_key("a1").unwrap().unwrap();
        assert_ne!(old_key, new_key);
        assert_eq!(fixture.stored_keywords("a1"), vec!["STARRED".to_string()]);
        assert_eq!(
            fixture.cache.label_members(STARRED_LABEL).unwrap(),
            vec!["a1".to_string(), "b2".to_string()]
        );
        fixture.assert_invariants();
    }

    #[test]
    fn relabel_without_prior_labels_refetches_metadata() {
        let fixture = Fixture::new();
        seed_s1(&fixture);

        // Simulate a crash that recorded the key but lost the label list.
        fixture.remote.set_labels("a1", &["STARRED", "INBOX"]);
        let labels = fixture.cache.msg_labels("a1").unwrap().unwrap();
        assert!(!labels.is_empty());
        fixture.cache.del_msg("a1").unwrap();
        let key = fixture.maildir.deliver_new(b"Subject: re\r\n\r\nx\r\n").unwrap();
        fixture.cache.set_msg_key("a1", &key).unwrap();

        fixture.remote.push_history(HistoryRecord {
            id: 130,
            labels_added: vec![LabelDelta {
                gid: "a1".to_string(),
                label_ids: vec!["STARRED".to_string()],
            }],
            ..Default::default()
        });
        fixture.engine().sync(false).unwrap();

        // The authoritative list from metadata won, not the bare delta.
        let mut stored = fixture.cache.msg_labels("a1").unwrap().unwrap();
        stored.sort();
        assert_eq!(stored, vec!["INBOX".to_string(), "STARRED".to_string()]);
        assert_eq!(fixture.cache.history_index().unwrap(), 130);
    }

    #[test]
    fn add_then_relabel_for_one_gid_converges() {
        let fixture = Fixture::new();
        seed_s1(&fixture);

        fixture.remote.insert("c3", Some("q@y"), &["STARRED"], 201);
        fixture.remote.push_history(HistoryRecord {
            id: 200,
            messages_added: vec!["c3".to_string()],
            ..Default::default()
        });
        fixture.remote.push_history(HistoryRecord {
            id: 201,
            labels_added: vec![LabelDelta {
                gid: "c3".to_string(),
                label_ids: vec!["STARRED".to_string()],
            }],
            labels_removed: vec![LabelDelta {
                gid: "c3".to_string(),
                label_ids: vec!["UNREAD".to_string()],
            }],
            ..Default::default()
        });
        fixture.engine().sync(false).unwrap();

        assert_eq!(fixture.stored_keywords("c3"), vec!["STARRED".to_string()]);
        assert_eq!(fixture.cache.history_index().unwrap(), 201);
        fixture.assert_invariants();
    }

    #[test]
    fn full_then_incremental_matches_fresh_full() {
        let incremental = Fixture::new();
        seed_s1(&incremental);
        incremental.remote.insert("c3", Some("q@y"), &["UNREAD"], 140);
        incremental.remote.push_history(HistoryRecord {
            id: 140,
            messages_added: vec!["c3".to_string()],
            ..Default::default()
        });
        incremental.engine().sync(false).unwrap();

        let fresh = Fixture::new();
        fresh.remote.insert("a1", Some("x@y"), &["UNREAD"], 10);
        fresh.remote.insert("b2", Some("z@y"), &["SENT", "STARRED"], 11);
        fresh.remote.insert("c3", Some("q@y"), &["UNREAD"], 140);
        fresh.engine().sync(false).unwrap();

        for fixture in [&incremental, &fresh] {
            fixture.assert_invariants();
        }
        let mut incremental_gids = incremental.cache.msg_gids().unwrap();
        incremental_gids.sort();
        let mut fresh_gids = fresh.cache.msg_gids().unwrap();
        fresh_gids.sort();
        assert_eq!(incremental_gids, fresh_gids);
        for gid in ["a1", "b2", "c3"] {
            assert_eq!(
                incremental.stored_keywords(gid),
                fresh.stored_keywords(gid)
            );
            assert_eq!(
                incremental.stored_subtree(gid),
                fresh.stored_subtree(gid)
            );
        }
        assert_eq!(incremental.cache.history_index().unwrap(), 140);
        assert_eq!(fresh.cache.history_index().unwrap(), 140);
    }

    #[test]
    fn shard_is_stable_per_gid() {
        for gid in ["a1", "b2", "c3", "deadbeef"] {
            assert_eq!(shard_for_gid(gid, 8), shard_for_gid(gid, 8));
            assert!(shard_for_gid(gid, 8) < 8);
        }
        // Unparseable gids collapse onto shard 0.
        assert_eq!(shard_for_gid("not-hex", 8), 0);
        assert_eq!(shard_for_gid("", 8), 0);
    }
}
