use log::warn;
use mailparse::MailHeaderMap;
use snafu::prelude::*;

/// Header carrying the canonical Gmail label set of a delivered message.
pub const KEYWORDS_HEADER: &str = "X-Keywords";

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Could not parse message: {}", source))]
    ParseMail { source: mailparse::MailParseError },

    #[snafu(display("Message has no header block"))]
    NoHeaders {},
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An RFC-822 message held as raw bytes.
///
/// The raw form is authoritative; headers are re-parsed on demand so that
/// in-place header edits cannot drift from what is written to disk.
#[derive(Debug, Clone)]
pub struct Message {
    raw: Vec<u8>,
}

impl Message {
    /// Validate and wrap raw message bytes.
    ///
    /// Messages without a single parseable header are rejected; Gmail emits
    /// non-MIME "chat" artefacts which must be detected here so callers can
    /// skip them.
    pub fn parse(raw: Vec<u8>) -> Result<Self> {
        let parsed = mailparse::parse_mail(&raw).context(ParseMailSnafu {})?;
        ensure!(!parsed.headers.is_empty(), NoHeadersSnafu {});
        Ok(Self { raw })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    /// The `Message-Id` header value with angle brackets trimmed.
    ///
    /// Requires exactly one `Message-Id` header; anything else is logged and
    /// treated as absent.
    pub fn message_id(&self) -> Option<String> {
        let parsed = mailparse::parse_mail(&self.raw).ok()?;
        let values = parsed.get_headers().get_all_values("Message-Id");
        if values.len() != 1 {
            warn!(
                "Expected message to contain exactly 1 Message-Id header, got {:?}",
                values
            );
            return None;
        }
        let id = values[0].trim().trim_matches(|c| c == '<' || c == '>');
        if id.is_empty() {
            warn!("Couldn't parse a valid Message-Id from {:?}", values);
            return None;
        }
        Some(id.to_string())
    }

    /// The label set recorded in the `X-Keywords` header, if any.
    pub fn keywords(&self) -> Vec<String> {
        let parsed = match mailparse::parse_mail(&self.raw) {
            Ok(parsed) => parsed,
            Err(_) => return Vec::new(),
        };
        parsed
            .get_headers()
            .get_all_values(KEYWORDS_HEADER)
            .iter()
            .flat_map(|value| value.split(','))
            .map(|label| label.trim().to_string())
            .filter(|label| !label.is_empty())
            .collect()
    }

    /// Replace the `X-Keywords` header with `labels`, preserving all other
    /// headers byte-for-byte.
    pub fn set_keywords(&mut self, labels: &[String]) {
        let (head_len, separator) = header_block(&self.raw);
        let head = &self.raw[..head_len];
        let rest = &self.raw[head_len..];

        let mut out = Vec::with_capacity(self.raw.len() + 64);
        let mut skipping_continuation = false;
        for line in split_lines(head) {
            if is_keywords_line(line) {
                skipping_continuation = true;
                continue;
            }
            if skipping_continuation && line.first().map_or(false, |b| *b == b' ' || *b == b'\t') {
                continue;
            }
            skipping_continuation = false;
            out.extend_from_slice(line);
        }
        out.extend_from_slice(KEYWORDS_HEADER.as_bytes());
        out.extend_from_slice(b": ");
        out.extend_from_slice(labels.join(", ").as_bytes());
        out.extend_from_slice(separator);
        out.extend_from_slice(rest);
        self.raw = out;
    }
}

/// Length of the header block (up to and excluding the blank separator line)
/// and the line terminator in use.
fn header_block(raw: &[u8]) -> (usize, &'static [u8]) {
    for i in 0..raw.len() {
        if raw[i..].starts_with(b"\r\n\r\n") {
            return (i + 2, b"\r\n");
        }
        if raw[i..].starts_with(b"\n\n") {
            return (i + 1, b"\n");
        }
    }
    // Headers-only message.
    if raw.contains(&b'\r') {
        (raw.len(), b"\r\n")
    } else {
        (raw.len(), b"\n")
    }
}

/// Split a header block into lines, keeping the terminators.
fn split_lines(head: &[u8]) -> impl Iterator<Item = &[u8]> + '_ {
    let mut rest = head;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = rest
            .iter()
            .position(|b| *b == b'\n')
            .map(|i| i + 1)
            .unwrap_or(rest.len());
        let (line, tail) = rest.split_at(end);
        rest = tail;
        Some(line)
    })
}

fn is_keywords_line(line: &[u8]) -> bool {
    let prefix = KEYWORDS_HEADER.len();
    line.len() > prefix
        && line[..prefix].eq_ignore_ascii_case(KEYWORDS_HEADER.as_bytes())
        && line[prefix] == b':'
}
