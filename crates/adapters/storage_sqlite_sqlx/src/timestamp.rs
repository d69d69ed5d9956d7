//! Timestamps are stored as RFC 3339 text.

use quill_domain::time::Timestamp;

pub(crate) fn encode(ts: Timestamp) -> String {
    ts.to_rfc3339()
}

pub(crate) fn decode(value: &str) -> Result<Timestamp, sqlx::Error> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.to_utc())
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}
