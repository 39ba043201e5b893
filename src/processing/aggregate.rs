/*! Aggregation and sentence splitting

Merges cleaned tables into a single sentence-level table.

For each input table:
1. text, URL and source type columns are resolved once (see [crate::table::schema]),
1. every document is split into sentences (see [super::split]),
1. sentences shorter than 2 characters are dropped,
1. an emoji-free variant is computed, and sentences that are only emojis are dropped.

Then, sentences from all tables are deduplicated on their emoji-free variant,
keeping the first one seen (tables being read in the order they are provided).

Source types are inferred with a best-effort heuristic:
type column containing `news` or `article` gives [SourceType::News],
anything else gives [SourceType::SocialMedia], and tables whose path (file name or any
parent directory) contains `youtube` are [SourceType::YoutubeComment] whatever their type column says.
!*/
use std::fmt;
use std::path::{Path, PathBuf};

use log::{error, info, warn};
use serde::Serialize;

use crate::error::Error;
use crate::filtering::unique::Unseen;
use crate::filtering::FilterMut;
use crate::io::{load_table, save_table};
use crate::table::schema::TEXT_COLUMNS;
use crate::table::{Record, ResolvedSchema, Table};
use crate::transformers::strip_emojis;

use super::split::split_sentences;

/// Sentences with less characters than this are noise.
const MIN_SENTENCE_CHARS: usize = 2;

/// Column order of the aggregated table.
pub const SENTENCE_COLUMNS: [&str; 4] = [
    "sentence_original",
    "sentence_no_emoji",
    "source_type",
    "source_url",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    News,
    SocialMedia,
    YoutubeComment,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::News => "news",
            SourceType::SocialMedia => "social_media",
            SourceType::YoutubeComment => "youtube_comment",
        }
    }

    /// Infer the source type from a type/category cell and the path of the table it comes from.
    pub fn infer(type_hint: &str, origin: &Path) -> Self {
        if origin.to_string_lossy().to_lowercase().contains("youtube") {
            return SourceType::YoutubeComment;
        }

        let type_hint = type_hint.to_lowercase();
        if type_hint.contains("news") || type_hint.contains("article") {
            SourceType::News
        } else {
            SourceType::SocialMedia
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sentence-level unit, ready for annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    sentence_original: String,
    sentence_no_emoji: String,
    source_type: SourceType,
    source_url: String,
}

impl Sentence {
    /// Build a sentence, returning `None` if it is too short or only made of emojis.
    pub fn new(original: &str, source_type: SourceType, source_url: &str) -> Option<Self> {
        if original.chars().count() < MIN_SENTENCE_CHARS {
            return None;
        }

        let no_emoji = strip_emojis(original);
        let no_emoji = no_emoji.trim();
        if no_emoji.is_empty() {
            return None;
        }

        Some(Self {
            sentence_original: original.to_string(),
            sentence_no_emoji: no_emoji.to_string(),
            source_type,
            source_url: source_url.to_string(),
        })
    }

    pub fn original(&self) -> &str {
        &self.sentence_original
    }

    pub fn no_emoji(&self) -> &str {
        &self.sentence_no_emoji
    }

    pub fn source_type(&self) -> SourceType {
        self.source_type
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }
}

impl From<Sentence> for Record {
    fn from(s: Sentence) -> Record {
        let mut record = Record::new();
        record.set(SENTENCE_COLUMNS[0], s.sentence_original);
        record.set(SENTENCE_COLUMNS[1], s.sentence_no_emoji);
        record.set(SENTENCE_COLUMNS[2], s.source_type.as_str());
        record.set(SENTENCE_COLUMNS[3], s.source_url);
        record
    }
}

/// A loaded table along with where it comes from (used for source type inference).
#[derive(Debug, Clone)]
pub struct SourceTable {
    pub origin: PathBuf,
    pub table: Table,
}

impl SourceTable {
    pub fn new(origin: impl Into<PathBuf>, table: Table) -> Self {
        Self {
            origin: origin.into(),
            table,
        }
    }

    pub fn load(origin: &Path) -> Result<Self, Error> {
        Ok(Self::new(origin, load_table(origin)?))
    }
}

/// Split every document of a table into [Sentence]s.
///
/// Fails if the table has no text column.
pub fn split_table(source: &SourceTable) -> Result<Vec<Sentence>, Error> {
    let schema = ResolvedSchema::resolve(&source.table);
    let text_column = schema.text.ok_or_else(|| Error::MissingColumn {
        column: TEXT_COLUMNS.join("|"),
        available: source.table.columns().to_vec(),
    })?;

    let mut sentences = Vec::new();
    for record in source.table.iter() {
        let doc = record.text(text_column);
        let source_url = schema.url.map(|c| record.text(c)).unwrap_or_default();
        let type_hint = schema.kind.map(|c| record.text(c)).unwrap_or_default();
        let source_type = SourceType::infer(&type_hint, &source.origin);

        sentences.extend(
            split_sentences(&doc)
                .iter()
                .filter_map(|s| Sentence::new(s, source_type, &source_url)),
        );
    }

    Ok(sentences)
}

/// Split all tables, skipping (and logging) the ones that can't be split.
pub fn split_tables(sources: &[SourceTable]) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    for source in sources {
        match split_table(source) {
            Ok(s) => sentences.extend(s),
            Err(e) => warn!("skipping {:?}: {}", source.origin, e),
        }
    }
    sentences
}

/// Keep the first sentence of each emoji-free variant, preserving order.
pub fn dedup_sentences(sentences: Vec<Sentence>) -> Vec<Sentence> {
    let mut filter = Unseen::default();
    sentences
        .into_iter()
        .filter(|s| filter.detect_mut(s.no_emoji()))
        .collect()
}

/// Outcome of [aggregate_and_split].
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct AggregateReport {
    /// Tables that contributed.
    pub processed: Vec<PathBuf>,
    /// Tables that were skipped, with the reason.
    pub failed: Vec<(PathBuf, String)>,
    /// Sentences before deduplication.
    pub sentence_count: usize,
    /// Sentences written.
    pub unique_count: usize,
    /// `false` when no sentence survived: nothing is written in that case.
    pub written: bool,
}

/// Read every table of `inputs`, split them and write the deduplicated sentences to `output`.
///
/// Tables that can't be read or split are logged, reported and skipped.
/// Only a failure to write `output` is an error.
pub fn aggregate_and_split(inputs: &[PathBuf], output: &Path) -> Result<AggregateReport, Error> {
    let mut report = AggregateReport::default();
    let mut sentences = Vec::new();

    for input in inputs {
        let split = SourceTable::load(input).and_then(|source| {
            info!("processing {:?}, rows: {}", input, source.table.len());
            split_table(&source)
        });

        match split {
            Ok(s) => {
                sentences.extend(s);
                report.processed.push(input.clone());
            }
            Err(e) => {
                error!("failed to process {:?}: {}", input, e);
                report.failed.push((input.clone(), e.to_string()));
            }
        }
    }

    report.sentence_count = sentences.len();
    let sentences = dedup_sentences(sentences);
    report.unique_count = sentences.len();

    if sentences.is_empty() {
        warn!("no valid sentences found, {:?} not written", output);
        return Ok(report);
    }

    info!(
        "generated {} unique sentences (dropped {} duplicates)",
        report.unique_count,
        report.sentence_count - report.unique_count
    );

    let mut table = Table::with_columns(SENTENCE_COLUMNS.iter().map(|c| c.to_string()).collect());
    for sentence in sentences {
        table.push(sentence.into());
    }
    save_table(&table, output)?;
    report.written = true;
    info!("saved merged dataset to {:?}", output);

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::table::Value;

    fn source(origin: &str, rows: &[(&str, &str, &str)]) -> SourceTable {
        let table = Table::from_records(rows.iter().map(|(text, kind, url)| {
            [
                ("processed_text", *text),
                ("channel_category", *kind),
                ("source_url", *url),
            ]
            .into_iter()
            .collect::<Record>()
        }));
        SourceTable::new(origin, table)
    }

    #[test]
    fn infer_source_type() {
        let p = Path::new("data/clean/facebook.csv");
        assert_eq!(SourceType::infer("News", p), SourceType::News);
        assert_eq!(SourceType::infer("feature article", p), SourceType::News);
        assert_eq!(SourceType::infer("Entertainment", p), SourceType::SocialMedia);
        assert_eq!(SourceType::infer("", p), SourceType::SocialMedia);

        let yt = Path::new("data/clean/YouTube_comments.csv");
        assert_eq!(SourceType::infer("news", yt), SourceType::YoutubeComment);
        // the whole path counts
        let dir = Path::new("data/youtube/comments_clean.csv");
        assert_eq!(SourceType::infer("", dir), SourceType::YoutubeComment);
    }

    #[test]
    fn sentence_filtering() {
        assert!(Sentence::new("!", SourceType::News, "").is_none());
        assert!(Sentence::new("😀😀", SourceType::News, "").is_none());
        assert!(Sentence::new("😀 !", SourceType::News, "").is_some());

        let s = Sentence::new("ভাল 😀।", SourceType::News, "u").unwrap();
        assert_eq!(s.original(), "ভাল 😀।");
        assert_eq!(s.no_emoji(), "ভাল ।");
        assert_eq!(s.source_url(), "u");
    }

    #[test]
    fn split_one_table() {
        let src = source(
            "news.csv",
            &[("ভাল দিন। কি খবর? ধন্যবাদ", "news", "http://n/1")],
        );
        let sentences = split_table(&src).unwrap();
        let originals: Vec<_> = sentences.iter().map(Sentence::original).collect();
        assert_eq!(originals, ["ভাল দিন।", "কি খবর?", "ধন্যবাদ"]);
        assert!(sentences
            .iter()
            .all(|s| s.source_type() == SourceType::News && s.source_url() == "http://n/1"));
    }

    #[test]
    fn legacy_columns() {
        let table = Table::from_records(vec![[
            ("text", "অসম সুন্দৰ!"),
            ("Video Links", "https://youtu.be/x"),
        ]
        .into_iter()
        .collect::<Record>()]);
        let sentences = split_table(&SourceTable::new("youtube.csv", table)).unwrap();
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].source_url(), "https://youtu.be/x");
        assert_eq!(sentences[0].source_type(), SourceType::YoutubeComment);
    }

    #[test]
    fn no_text_column() {
        let table = Table::from_records(vec![[("body", "x")].into_iter().collect::<Record>()]);
        let src = SourceTable::new("bad.csv", table);
        assert!(split_table(&src).is_err());
        assert!(split_tables(&[src]).is_empty());
    }

    #[test]
    fn null_text_is_skipped() {
        let table = Table::from_records(vec![[("text", Value::Null)]
            .into_iter()
            .collect::<Record>()]);
        assert!(split_table(&SourceTable::new("a.csv", table))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn dedup_across_tables() {
        let sources = [
            source("a.csv", &[("ভাল দিন। ভাল দিন 😀।", "news", "a")]),
            source("b.csv", &[("ভাল দিন।", "", "b"), ("নতুন!", "", "b")]),
        ];
        let sentences = dedup_sentences(split_tables(&sources));

        let no_emoji: Vec<_> = sentences.iter().map(Sentence::no_emoji).collect();
        assert_eq!(no_emoji, ["ভাল দিন।", "ভাল দিন ।", "নতুন!"]);
        // first seen wins
        assert_eq!(sentences[0].source_url(), "a");

        let unique: HashSet<_> = no_emoji.iter().collect();
        assert_eq!(unique.len(), no_emoji.len());
    }

    #[test]
    fn files_with_failures() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("news.csv");
        let bad = dir.path().join("missing.csv");
        let out = dir.path().join("sentences.csv");
        save_table(&source("", &[("খবৰ। খবৰ।", "news", "u")]).table, &good).unwrap();

        let report = aggregate_and_split(&[bad.clone(), good.clone()], &out).unwrap();
        assert_eq!(report.processed, vec![good]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, bad);
        assert_eq!(report.sentence_count, 2);
        assert_eq!(report.unique_count, 1);
        assert!(report.written);

        let written = load_table(&out).unwrap();
        assert_eq!(written.columns(), SENTENCE_COLUMNS);
        assert_eq!(written.records()[0].text("source_type"), "news");
    }

    #[test]
    fn nothing_to_write() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("emojis.csv");
        let out = dir.path().join("sentences.csv");
        save_table(&source("", &[("😀😀 👍", "", "")]).table, &input).unwrap();

        let report = aggregate_and_split(&[input], &out).unwrap();
        assert!(!report.written);
        assert_eq!(report.unique_count, 0);
        assert!(!out.exists());
    }
}
