//! Record transformer: one parsed memo to one note.
//!
//! # Responsibility
//! - Resolve title, content and creation time with documented fallbacks.
//! - Stamp `modified` with the conversion instant.
//!
//! # Invariants
//! - Never fails; every missing or unusable field degrades to a placeholder
//!   and logs exactly one warning naming the field.
//! - `added` is the parsed creation time or `now`; `modified` is `now`.

use super::markup::markup_to_plain_text;
use super::options::TransformOptions;
use crate::memo::document::MemoDocument;
use crate::model::note::Note;
use crate::model::timestamp::{format_timestamp, instant_from_epoch_millis, parse_epoch_millis};
use chrono::{DateTime, Utc};
use log::warn;

/// Builds the note for `doc`, using `now` as the conversion instant.
pub fn memo_to_note(doc: &MemoDocument, options: &TransformOptions, now: DateTime<Utc>) -> Note {
    let content = match doc.content.as_deref() {
        Some(markup) => markup_to_plain_text(markup),
        None => {
            warn!("event=memo_transform module=convert status=warn field=content fallback=empty");
            String::new()
        }
    };

    let title = resolve_title(doc.title.as_deref(), &options.fallback_title);
    let added = resolve_created(doc.created_time.as_deref(), options.keep_created_millis, now);

    Note::new(title, content, format_timestamp(added), format_timestamp(now))
}

fn resolve_title(title: Option<&str>, fallback: &str) -> String {
    match title {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        Some(_) => {
            warn!("event=memo_transform module=convert status=warn field=title reason=empty fallback=default_title");
            fallback.to_string()
        }
        None => {
            warn!("event=memo_transform module=convert status=warn field=title reason=missing fallback=default_title");
            fallback.to_string()
        }
    }
}

fn resolve_created(
    created_time: Option<&str>,
    keep_millis: bool,
    now: DateTime<Utc>,
) -> DateTime<Utc> {
    let Some(raw) = created_time else {
        warn!("event=memo_transform module=convert status=warn field=created_time reason=missing fallback=now");
        return now;
    };

    match parse_epoch_millis(raw).and_then(|millis| instant_from_epoch_millis(millis, keep_millis)) {
        Some(instant) => instant,
        None => {
            warn!(
                "event=memo_transform module=convert status=warn field=created_time reason=invalid value={} fallback=now",
                raw.trim()
            );
            now
        }
    }
}
