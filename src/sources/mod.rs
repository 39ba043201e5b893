//! Raw record sources.
//!
//! A source produces raw records (as scraped: `text` plus whatever metadata the platform exposes)
//! for a given target. The [Fetch] trait is the seam between collection and the rest of the corpus.
//!
//! Network fetchers (comment APIs, news sites) live outside of this crate:
//! only [DumpSource], which reads records back from an on-disk dump, is provided.
use std::path::Path;

use log::{debug, info};

use crate::error::Error;
use crate::io::load_table;
use crate::table::Record;

/// Something that can produce raw records for a target (a video id, an article URL, a file...).
pub trait Fetch {
    fn fetch(&mut self, target: &str) -> Result<Vec<Record>, Error>;
}

/// Fetches records from a CSV or JSON Lines dump, the target being the dump path.
///
/// Keeps track of how many records have been fetched over its lifetime.
#[derive(Debug, Default)]
pub struct DumpSource {
    nb_fetched: usize,
}

impl DumpSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nb_fetched(&self) -> usize {
        self.nb_fetched
    }
}

impl Fetch for DumpSource {
    fn fetch(&mut self, target: &str) -> Result<Vec<Record>, Error> {
        debug!("fetching records from dump {}", target);
        let records = load_table(Path::new(target))?.into_records();
        info!("fetched {} records from {}", records.len(), target);
        self.nb_fetched += records.len();
        Ok(records)
    }
}
