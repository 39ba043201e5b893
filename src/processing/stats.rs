//! Corpus statistics.
//!
//! Read-only pass over one or more tables, used to validate a corpus:
//! document, word and (approximate) sentence counts, vocabulary size.
//!
//! Words are whitespace-separated tokens. This is crude but deterministic,
//! and does not depend on any segmentation model.

use std::collections::HashMap;
use std::path::PathBuf;

use itertools::Itertools;
use log::{error, info, warn};
use serde::Serialize;

use crate::error::Error;
use crate::io::load_table;
use crate::table::schema::{resolve_column, TEXT_COLUMNS};
use crate::table::Table;

use super::split::sentence_fragments;

/// Token counter. Holds token counts and document/word/sentence totals.
#[derive(Debug, Default)]
pub struct Counter {
    counts: HashMap<String, u64>,
    nb_documents: u64,
    nb_words: u64,
    nb_sentences: u64,
}

impl Counter {
    /// Account for a single document.
    pub fn add_document(&mut self, doc: &str) {
        self.nb_documents += 1;
        for word in doc.split_whitespace() {
            self.nb_words += 1;
            self.counts
                .entry(word.to_string())
                .and_modify(|count| *count += 1)
                .or_insert(1);
        }
        self.nb_sentences += sentence_fragments(doc).count() as u64;
    }

    /// Account for every non-null document of `table`.
    ///
    /// Fails if no text column (`processed_text` or `text`) is present.
    pub fn add_table(&mut self, table: &Table) -> Result<(), Error> {
        let column = resolve_column(table, TEXT_COLUMNS).ok_or_else(|| Error::MissingColumn {
            column: TEXT_COLUMNS.join("|"),
            available: table.columns().to_vec(),
        })?;

        for value in table.iter().filter_map(|r| r.get(column)) {
            if !value.is_null() {
                self.add_document(&value.as_text());
            }
        }
        Ok(())
    }

    pub fn into_stats(self) -> CorpusStats {
        let avg_words_per_doc = if self.nb_documents == 0 {
            0.0
        } else {
            round2(self.nb_words as f64 / self.nb_documents as f64)
        };

        CorpusStats {
            document_count: self.nb_documents,
            word_count: self.nb_words,
            approx_sentence_count: self.nb_sentences,
            vocabulary_size: self.counts.len(),
            avg_words_per_doc,
            vocabulary: self.counts,
        }
    }
}

#[inline]
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct CorpusStats {
    pub document_count: u64,
    pub word_count: u64,
    pub approx_sentence_count: u64,
    pub vocabulary_size: usize,
    /// rounded to two decimals, 0 when there is no document.
    pub avg_words_per_doc: f64,
    #[serde(skip)]
    vocabulary: HashMap<String, u64>,
}

impl CorpusStats {
    /// Most frequent tokens, ties broken alphabetically.
    pub fn top_tokens(&self, n: usize) -> Vec<(String, u64)> {
        self.vocabulary
            .iter()
            .sorted_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)))
            .take(n)
            .map(|(token, count)| (token.clone(), *count))
            .collect()
    }
}

/// Compute statistics over all tables of `paths`, skipping (and logging) those
/// that can't be read or that have no text column.
pub fn compute_stats(paths: &[PathBuf]) -> CorpusStats {
    let mut counter = Counter::default();
    for path in paths {
        let table = match load_table(path) {
            Ok(t) => t,
            Err(e) => {
                error!("error processing {:?}: {}", path, e);
                continue;
            }
        };

        info!("analyzing {:?}...", path);
        if let Err(e) = counter.add_table(&table) {
            warn!("skipping {:?}: {}", path, e);
        }
    }
    counter.into_stats()
}
