use crate::cache::{self, Cache, SENT_LABEL, STARRED_LABEL, UNREAD_LABEL};
use crate::remote::Remote;
use log::{debug, info, warn};
use notmuch::{Database, DatabaseMode};
use snafu::prelude::*;
use std::collections::HashSet;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

const SENT_TAG: &str = "sent";
const UNREAD_TAG: &str = "unread";
const FLAGGED_TAG: &str = "flagged";

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Could not run `notmuch new': {}", source))]
    RunNotmuchNew { source: io::Error },

    #[snafu(display("`notmuch new' exited with {}", status))]
    NotmuchNewStatus { status: ExitStatus },

    #[snafu(display("Could not open notmuch database: {}", source))]
    OpenDatabase { source: notmuch::Error },

    #[snafu(display("Could not query notmuch for tag `{}': {}", tag, source))]
    QueryTag {
        tag: String,
        source: notmuch::Error,
    },

    #[snafu(display("Cache operation failed: {}", source))]
    CacheOp { source: cache::Error },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// One-shot reconciliation between notmuch tags and Gmail labels.
///
/// Three corrections, mirroring how each side is authoritative for its own
/// kind of change: the server owns "what was sent", the local database owns
/// "what I have read" and "what I have flagged".
pub fn reconcile(cache: &Cache, maildir_root: &Path, remote: &dyn Remote) -> Result<()> {
    // Index freshly delivered files before querying.
    info!("Running notmuch new");
    let status = Command::new("notmuch")
        .arg("new")
        .status()
        .context(RunNotmuchNewSnafu {})?;
    ensure!(status.success(), NotmuchNewStatusSnafu { status });

    info!("Syncing notmuch tags and gmail labels");
    let db = Database::open_with_config(
        Some(maildir_root),
        DatabaseMode::ReadWrite,
        None::<&Path>,
        None,
    )
    .context(OpenDatabaseSnafu {})?;

    let sent_mids = mids_for_tag(&db, SENT_TAG)?;
    let unread_mids = mids_for_tag(&db, UNREAD_TAG)?;
    let flagged_mids = mids_for_tag(&db, FLAGGED_TAG)?;

    // Messages bearing the remote SENT label gain the local sent tag.
    for gid in cache.label_members(SENT_LABEL).context(CacheOpSnafu {})? {
        let mid = match cache.mid_for_gid(&gid).context(CacheOpSnafu {})? {
            Some(mid) => mid,
            None => {
                warn!("Couldn't get message id for gmail id {gid}");
                continue;
            }
        };
        if sent_mids.contains(&mid) {
            continue;
        }
        match db.find_message(&mid) {
            Ok(Some(message)) => match message.add_tag(SENT_TAG) {
                Ok(()) => debug!("Added sent tag to {mid}"),
                Err(error) => warn!("Couldn't add sent tag to {mid}: {error}"),
            },
            Ok(None) => warn!("notmuch couldn't find message {mid}"),
            Err(error) => warn!("notmuch lookup failed for {mid}: {error}"),
        }
    }

    // Messages whose local unread tag was cleared lose the remote UNREAD
    // label.
    let mut remove_unread = Vec::new();
    for gid in cache.label_members(UNREAD_LABEL).context(CacheOpSnafu {})? {
        let mid = match cache.mid_for_gid(&gid).context(CacheOpSnafu {})? {
            Some(mid) => mid,
            None => {
                warn!("Couldn't get message id for gmail id {gid}");
                continue;
            }
        };
        if unread_mids.contains(&mid) {
            continue;
        }
        remove_unread.push(gid);
    }

    // Messages flagged locally gain the remote STARRED label.
    let mut add_starred = Vec::new();
    for mid in &flagged_mids {
        let gid = match cache.gid_for_mid(mid).context(CacheOpSnafu {})? {
            Some(gid) => gid,
            None => {
                warn!("Couldn't get gmail id for message id {mid}");
                continue;
            }
        };
        if cache
            .has_label_member(STARRED_LABEL, &gid)
            .context(CacheOpSnafu {})?
        {
            continue;
        }
        add_starred.push(gid);
    }

    // Remote failures are not fatal; the next reconcile retries.
    if !remove_unread.is_empty() {
        match remote.modify_labels(&remove_unread, &[], &[UNREAD_LABEL.to_string()]) {
            Ok(()) => info!(
                "Removed unread label from {} messages",
                remove_unread.len()
            ),
            Err(error) => warn!("Error removing unread label for messages: {error}"),
        }
    }
    if !add_starred.is_empty() {
        match remote.modify_labels(&add_starred, &[STARRED_LABEL.to_string()], &[]) {
            Ok(()) => info!("Added flagged label to {} messages", add_starred.len()),
            Err(error) => warn!("Error adding flagged label for messages: {error}"),
        }
    }

    Ok(())
}

fn mids_for_tag(db: &Database, tag: &str) -> Result<HashSet<String>> {
    let query = db
        .create_query(&format!("tag:{tag}"))
        .context(QueryTagSnafu { tag })?;
    let messages = query.search_messages().context(QueryTagSnafu { tag })?;
    Ok(messages.map(|message| message.id().to_string()).collect())
}
