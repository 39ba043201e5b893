/*! Corpus processing

Table-level stages of the corpus pipeline, each one usable in memory or from/to files:

- [clean]: raw records to cleaned, classified documents,
- [dedup]: exact deduplication of a table on a key column,
- [aggregate]: sentence splitting of several tables into a single deduplicated sentence table,
- [stats]: read-only corpus statistics.
!*/
pub mod aggregate;
pub mod clean;
pub mod dedup;
pub mod split;
pub mod stats;

pub use aggregate::{aggregate_and_split, AggregateReport, Sentence, SourceType};
pub use clean::{clean_file, clean_records, CleanOptions, CleanReport, SourceKind};
pub use dedup::{dedup_file, deduplicate, DedupReport};
pub use split::split_sentences;
pub use stats::{compute_stats, CorpusStats};
