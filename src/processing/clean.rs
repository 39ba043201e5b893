/*! Cleaning of raw records

Turns raw scraped records into cleaned, classified documents:

1. identifying fields (author names and ids, channels, avatars, timestamps) are dropped,
1. for news, boilerplate paragraphs (navigation, copyright notices...) are removed,
1. the text is normalized (and optionally has its emails redacted) into `processed_text`,
1. the normalized text is classified, result being stored in `is_target_script`.

Records that fail classification are dropped unless [CleanOptions::keep_rejected] is set.
Records whose `processed_text` ends up empty are always dropped.

A non-empty `processed_text` left by a previous run is reused (and redacted when redaction is enabled)
rather than recomputed from `text`. `is_target_script` is always recomputed with the current threshold.
When redaction is enabled, `text` is redacted in place but otherwise left as scraped:
paragraph filtering only applies to `processed_text`. Other existing fields are not overwritten.
!*/
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use log::{debug, error, info};
use serde::Serialize;

use crate::error::Error;
use crate::filtering::script::{BOILERPLATE_THRESHOLD, NEWS_THRESHOLD, SOCIAL_MEDIA_THRESHOLD};
use crate::filtering::{filter_paragraphs, Filter, ScriptFilter};
use crate::io::{append_table, save_table};
use crate::sources::{DumpSource, Fetch};
use crate::table::{Record, Table, Value};
use crate::transformers::{redact_pii, Normalize, RedactPii, Transform, TransformChain};

/// Fields that can identify the author of a record.
pub const IDENTIFYING_FIELDS: [&str; 8] = [
    "author",
    "author_id",
    "author_channel_id",
    "channel",
    "cid",
    "photo",
    "time",
    "time_parsed",
];

/// Kind of source the raw records come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    SocialMedia,
    News,
}

impl SourceKind {
    /// Default classification threshold.
    pub fn threshold(&self) -> f64 {
        match self {
            SourceKind::SocialMedia => SOCIAL_MEDIA_THRESHOLD,
            SourceKind::News => NEWS_THRESHOLD,
        }
    }

    /// Value of the `source_type` tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::SocialMedia => "social_media",
            SourceKind::News => "news",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "social" | "social_media" | "youtube" => Ok(SourceKind::SocialMedia),
            "news" => Ok(SourceKind::News),
            other => Err(Error::Custom(format!(
                "unknown source kind '{}' (expected social or news)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CleanOptions {
    pub source: SourceKind,
    pub threshold: f64,
    /// Redact emails from `text` and `processed_text`.
    pub redact_pii: bool,
    /// Keep (non-empty) records that fail classification.
    pub keep_rejected: bool,
}

impl CleanOptions {
    /// Options with the default threshold of `source`, no redaction.
    pub fn new(source: SourceKind) -> Self {
        Self {
            source,
            threshold: source.threshold(),
            redact_pii: false,
            keep_rejected: false,
        }
    }

    fn transforms(&self) -> TransformChain {
        let mut chain = TransformChain::default();
        chain.add(Box::new(Normalize));
        if self.redact_pii {
            chain.add(Box::new(RedactPii));
        }
        chain
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    pub input_count: usize,
    pub kept_count: usize,
    /// non-empty records that failed classification (kept or not).
    pub rejected_count: usize,
    pub empty_count: usize,
}

/// Clean a single record, see module documentation.
///
/// Classification is not enforced here: the result is stored in `is_target_script`.
pub fn clean_record(mut record: Record, options: &CleanOptions) -> Record {
    clean_with(
        &mut record,
        options,
        &options.transforms(),
        &ScriptFilter::with_threshold(options.threshold),
    );
    record
}

fn clean_with(
    record: &mut Record,
    options: &CleanOptions,
    transforms: &TransformChain,
    filter: &ScriptFilter,
) -> bool {
    for field in IDENTIFYING_FIELDS {
        record.remove(field);
    }

    let original = record
        .get("text")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();
    if options.redact_pii && record.get("text").and_then(Value::as_str).is_some() {
        record.set("text", redact_pii(&original));
    }

    // a previous run may have left a processed_text (possibly unredacted)
    let existing = record
        .get("processed_text")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .map(str::to_string);
    let processed = match existing {
        Some(text) if options.redact_pii => redact_pii(&text),
        Some(text) => text,
        None => {
            let prose = match options.source {
                SourceKind::News => filter_paragraphs(&original, BOILERPLATE_THRESHOLD),
                SourceKind::SocialMedia => original,
            };
            transforms.transform(&prose)
        }
    };

    let is_target_script = filter.detect(processed.as_str());
    record.set("processed_text", processed);
    record.set("is_target_script", is_target_script);
    record.augment("source_type", options.source.as_str());
    is_target_script
}

/// Clean raw records, returning the table of kept records.
pub fn clean_records(
    records: impl IntoIterator<Item = Record>,
    options: &CleanOptions,
) -> (Table, CleanReport) {
    let transforms = options.transforms();
    let filter = ScriptFilter::with_threshold(options.threshold);
    let mut report = CleanReport::default();
    let mut table = Table::default();

    for mut record in records {
        report.input_count += 1;
        let accepted = clean_with(&mut record, options, &transforms, &filter);

        if record.text("processed_text").is_empty() {
            report.empty_count += 1;
            continue;
        }

        if !accepted {
            report.rejected_count += 1;
            if !options.keep_rejected {
                continue;
            }
        }

        report.kept_count += 1;
        table.push(record);
    }

    debug!("{:?}", report);
    (table, report)
}

/// Clean the raw dump at `src` and write the result to `dst`.
///
/// If `append` is set, records are appended to `dst` (which is created if needed).
/// Errors are logged before being returned.
pub fn clean_file(
    src: &Path,
    dst: &Path,
    options: &CleanOptions,
    append: bool,
) -> Result<CleanReport, Error> {
    let target = src.to_string_lossy();
    let records = DumpSource::new().fetch(&target).map_err(|e| {
        error!("failed to read raw records from {:?}: {}", src, e);
        e
    })?;

    let (table, report) = clean_records(records, options);
    info!(
        "[{:?}] {} records: kept {}, rejected {}, empty {}",
        src, report.input_count, report.kept_count, report.rejected_count, report.empty_count
    );

    let written = if append {
        append_table(&table, dst)
    } else {
        save_table(&table, dst)
    };
    written.map_err(|e| {
        error!("failed to save output file {:?}: {}", dst, e);
        e
    })?;
    info!("saved cleaned data to {:?}", dst);

    Ok(report)
}
