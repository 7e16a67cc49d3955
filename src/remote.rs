use itertools::Itertools;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use snafu::prelude::*;
use std::io;
use std::time::Duration;

/// The Gmail REST API caps batchModify at this many message ids per call.
const MAX_BATCH_MODIFY_IDS: usize = 1000;

const BASE_URL: &str = "https://gmail.googleapis.com/gmail/v1/users/me";
const PAGE_SIZE: usize = 500;

#[derive(Debug, Snafu)]
pub enum Error {
    /// The requested object no longer exists on the server.
    #[snafu(display("Not found"))]
    NotFound {},

    #[snafu(display("Could not complete API request: {}", source))]
    Request { source: ureq::Error },

    #[snafu(display("Could not interpret API response: {}", source))]
    Response { source: io::Error },

    #[snafu(display("Server returned an unparseable history id `{}'", value))]
    MalformedHistoryId { value: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound {})
    }
}

/// One page of a mailbox enumeration.
#[derive(Debug, Clone)]
pub struct MessageList {
    pub ids: Vec<String>,
    pub next_page: Option<String>,
    /// Server-side estimate of the total result set; may drift.
    pub estimated_total: u64,
}

/// Cheap per-message metadata, no body.
#[derive(Debug, Clone)]
pub struct Metadata {
    pub label_ids: Vec<String>,
    pub history_id: u64,
}

/// One page of the history delta stream.
#[derive(Debug, Clone)]
pub struct HistoryPage {
    pub records: Vec<HistoryRecord>,
    pub next_page: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct HistoryRecord {
    pub id: u64,
    pub messages_added: Vec<String>,
    pub messages_deleted: Vec<String>,
    pub labels_added: Vec<LabelDelta>,
    pub labels_removed: Vec<LabelDelta>,
}

#[derive(Debug, Clone)]
pub struct LabelDelta {
    pub gid: String,
    pub label_ids: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Label {
    pub id: String,
    pub name: String,
}

/// The remote account, as far as the sync engine is concerned.
///
/// `get_raw` returns the base64url wire encoding; decoding is the caller's
/// business, because a decode failure must be attributed to the message and
/// not the transport.
pub trait Remote: Send + Sync {
    fn list(&self, label_id: Option<&str>, page: Option<&str>) -> Result<MessageList>;

    fn get_raw(&self, gid: &str) -> Result<String>;

    fn get_metadata(&self, gid: &str) -> Result<Metadata>;

    fn get_history(
        &self,
        since_history_id: u64,
        label_id: Option<&str>,
        page: Option<&str>,
    ) -> Result<HistoryPage>;

    fn modify_labels(&self, gids: &[String], add: &[String], remove: &[String]) -> Result<()>;

    fn get_labels(&self) -> Result<Vec<Label>>;
}

// Wire types. Gmail encodes 64-bit ids as JSON strings; they are parsed to
// u64 at this boundary and nowhere else.

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageRefWire {
    id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageListWire {
    #[serde(default)]
    messages: Vec<MessageRefWire>,
    next_page_token: Option<String>,
    #[serde(default)]
    result_size_estimate: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMessageWire {
    raw: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MetadataWire {
    #[serde(default)]
    label_ids: Vec<String>,
    history_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryMessageWire {
    message: MessageRefWire,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryLabelsWire {
    message: MessageRefWire,
    #[serde(default)]
    label_ids: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryRecordWire {
    id: String,
    #[serde(default)]
    messages_added: Vec<HistoryMessageWire>,
    #[serde(default)]
    messages_deleted: Vec<HistoryMessageWire>,
    #[serde(default)]
    labels_added: Vec<HistoryLabelsWire>,
    #[serde(default)]
    labels_removed: Vec<HistoryLabelsWire>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryListWire {
    #[serde(default)]
    history: Vec<HistoryRecordWire>,
    next_page_token: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LabelWire {
    id: String,
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LabelListWire {
    #[serde(default)]
    labels: Vec<LabelWire>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchModifyWire<'a> {
    ids: &'a [&'a String],
    add_label_ids: &'a [String],
    remove_label_ids: &'a [String],
}

fn parse_history_id(value: &str) -> Result<u64> {
    value
        .parse()
        .ok()
        .context(MalformedHistoryIdSnafu { value })
}

fn history_page_from_wire(wire: HistoryListWire) -> Result<HistoryPage> {
    let records = wire
        .history
        .into_iter()
        .map(|record| {
            Ok(HistoryRecord {
                id: parse_history_id(&record.id)?,
                messages_added: record
                    .messages_added
                    .into_iter()
                    .map(|m| m.message.id)
                    .collect(),
                messages_deleted: record
                    .messages_deleted
                    .into_iter()
                    .map(|m| m.message.id)
                    .collect(),
                labels_added: record
                    .labels_added
                    .into_iter()
                    .map(|l| LabelDelta {
                        gid: l.message.id,
                        label_ids: l.label_ids,
                    })
                    .collect(),
                labels_removed: record
                    .labels_removed
                    .into_iter()
                    .map(|l| LabelDelta {
                        gid: l.message.id,
                        label_ids: l.label_ids,
                    })
                    .collect(),
            })
        })
        .collect::<Result<_>>()?;
    Ok(HistoryPage {
        records,
        next_page: wire.next_page_token,
    })
}

/// Gmail REST client.
pub struct GmailRemote {
    agent: ureq::Agent,
    authorization: String,
}

impl GmailRemote {
    pub fn new(access_token: &str, timeout: u64) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(timeout))
            .build();
        Self {
            agent,
            authorization: format!("Bearer {access_token}"),
        }
    }

    fn get_json<D: DeserializeOwned>(&self, url: &str) -> Result<D> {
        match self
            .agent
            .get(url)
            .set("Authorization", &self.authorization)
            .call()
        {
            Ok(response) => response.into_json().context(ResponseSnafu {}),
            Err(ureq::Error::Status(404, _)) => Err(Error::NotFound {}),
            Err(e) => Err(e).context(RequestSnafu {}),
        }
    }

    fn post_json(&self, url: &str, body: impl Serialize) -> Result<()> {
        match self
            .agent
            .post(url)
            .set("Authorization", &self.authorization)
            .send_json(body)
        {
            Ok(_) => Ok(()),
            Err(ureq::Error::Status(404, _)) => Err(Error::NotFound {}),
            Err(e) => Err(e).context(RequestSnafu {}),
        }
    }
}

impl Remote for GmailRemote {
    fn list(&self, label_id: Option<&str>, page: Option<&str>) -> Result<MessageList> {
        let mut url = format!("{BASE_URL}/messages?maxResults={PAGE_SIZE}");
        if let Some(label_id) = label_id {
            url.push_str(&format!("&labelIds={label_id}"));
        }
        if let Some(page) = page {
            url.push_str(&format!("&pageToken={page}"));
        }
        let wire: MessageListWire = self.get_json(&url)?;
        Ok(MessageList {
            ids: wire.messages.into_iter().map(|m| m.id).collect(),
            next_page: wire.next_page_token,
            estimated_total: wire.result_size_estimate,
        })
    }

    fn get_raw(&self, gid: &str) -> Result<String> {
        let wire: RawMessageWire = self.get_json(&format!("{BASE_URL}/messages/{gid}?format=raw"))?;
        Ok(wire.raw)
    }

    fn get_metadata(&self, gid: &str) -> Result<Metadata> {
        let wire: MetadataWire =
            self.get_json(&format!("{BASE_URL}/messages/{gid}?format=minimal"))?;
        Ok(Metadata {
            label_ids: wire.label_ids,
            history_id: parse_history_id(&wire.history_id)?,
        })
    }

    fn get_history(
        &self,
        since_history_id: u64,
        label_id: Option<&str>,
        page: Option<&str>,
    ) -> Result<HistoryPage> {
        let mut url =
            format!("{BASE_URL}/history?maxResults={PAGE_SIZE}&startHistoryId={since_history_id}");
        if let Some(label_id) = label_id {
            url.push_str(&format!("&labelId={label_id}"));
        }
        if let Some(page) = page {
            url.push_str(&format!("&pageToken={page}"));
        }
        history_page_from_wire(self.get_json(&url)?)
    }

    fn modify_labels(&self, gids: &[String], add: &[String], remove: &[String]) -> Result<()> {
        for batch in &gids.iter().chunks(MAX_BATCH_MODIFY_IDS) {
            let ids: Vec<&String> = batch.collect();
            self.post_json(
                &format!("{BASE_URL}/messages/batchModify"),
                BatchModifyWire {
                    ids: &ids,
                    add_label_ids: add,
                    remove_label_ids: remove,
                },
            )?;
        }
        Ok(())
    }

    fn get_labels(&self) -> Result<Vec<Label>> {
        let wire: LabelListWire = self.get_json(&format!("{BASE_URL}/labels"))?;
        Ok(wire
            .labels
            .into_iter()
            .map(|l| Label {
                id: l.id,
                name: l.name,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn history_ids_parse_from_wire_strings() {
        let wire: HistoryListWire = serde_json::from_value(json!({
            "history": [{
                "id": "101",
                "messagesAdded": [{"message": {"id": "c3", "threadId": "t"}}],
                "labelsAdded": [{"message": {"id": "a1"}, "labelIds": ["STARRED"]}],
                "labelsRemoved": [{"message": {"id": "a1"}, "labelIds": ["UNREAD"]}],
            }],
            "nextPageToken": "p2",
        }))
        .unwrap();
        let page = history_page_from_wire(wire).unwrap();
        assert_eq!(page.next_page.as_deref(), Some("p2"));
        assert_eq!(page.records.len(), 1);
        let record = &page.records[0];
        assert_eq!(record.id, 101);
        assert_eq!(record.messages_added, vec!["c3".to_string()]);
        assert!(record.messages_deleted.is_empty());
        assert_eq!(record.labels_added[0].gid, "a1");
        assert_eq!(record.labels_added[0].label_ids, vec!["STARRED".to_string()]);
        assert_eq!(record.labels_removed[0].label_ids, vec!["UNREAD".to_string()]);
    }

    #[test]
    fn malformed_history_id_is_an_error() {
        let wire: HistoryListWire =
            serde_json::from_value(json!({"history": [{"id": "xyzzy"}]})).unwrap();
        assert!(matches!(
            history_page_from_wire(wire),
            Err(Error::MalformedHistoryId { .. })
        ));
    }

    #[test]
    fn metadata_wire_defaults() {
        let wire: MetadataWire = serde_json::from_value(json!({
            "historyId": "77",
        }))
        .unwrap();
        assert!(wire.label_ids.is_empty());
        assert_eq!(parse_history_id(&wire.history_id).unwrap(), 77);
    }
}
