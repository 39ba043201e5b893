//! # asmcorpus
//!
//! Builds an Assamese text corpus out of scraped social media comments and news articles.
//!
//! ```sh
//! asmcorpus 0.1.0
//! Assamese text corpus building tool.
//!
//! USAGE:
//!     asmcorpus <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     clean      Clean, anonymize and classify raw scraped records
//!     combine    Split tables into a single deduplicated sentence table
//!     dedup      Deduplicate a table on a key column
//!     help       Prints this message or the help of the given subcommand(s)
//!     stats      Compute corpus statistics
//! ```
//!
//! Logging is configured with `RUST_LOG` (e.g. `RUST_LOG=info asmcorpus stats --inputs 'data/*.csv'`).
use structopt::StructOpt;

use asmcorpus::error::Error;
use asmcorpus::filtering::KeyFilterKind;
use asmcorpus::io::expand_inputs;
use asmcorpus::processing::{self, CleanOptions};

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Asmcorpus::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Asmcorpus::Clean(c) => {
            let mut options = CleanOptions::new(c.source);
            if let Some(threshold) = c.threshold {
                options.threshold = threshold;
            }
            options.redact_pii = c.anonymize;
            options.keep_rejected = c.keep_rejected;

            let report = processing::clean_file(&c.input, &c.output, &options, c.append)?;
            println!(
                "{} records read, {} kept, {} rejected, {} empty",
                report.input_count, report.kept_count, report.rejected_count, report.empty_count
            );
        }

        cli::Asmcorpus::Dedup(d) => {
            let kind = if d.digest {
                KeyFilterKind::Digest
            } else {
                KeyFilterKind::Exact
            };
            let report = processing::dedup_file(&d.input, &d.output, &d.key, kind)?;
            println!(
                "original size: {}, final size: {}, removed duplicates: {}",
                report.original_count, report.final_count, report.removed_count
            );
        }

        cli::Asmcorpus::Combine(c) => {
            let inputs = expand_inputs(&c.inputs)?;
            let report = processing::aggregate_and_split(&inputs, &c.output)?;
            for (path, reason) in &report.failed {
                println!("skipped {:?}: {}", path, reason);
            }
            println!(
                "{} tables processed, {} sentences, {} unique",
                report.processed.len(),
                report.sentence_count,
                report.unique_count
            );
            if !report.written {
                return Err(Error::Custom(format!(
                    "no sentence to write, {:?} not created",
                    c.output
                )));
            }
        }

        cli::Asmcorpus::Stats(s) => {
            let inputs = expand_inputs(&s.inputs)?;
            let stats = processing::compute_stats(&inputs);
            let top = s.top.map(|n| stats.top_tokens(n)).unwrap_or_default();

            if s.json {
                let mut report = serde_json::to_value(&stats)?;
                if s.top.is_some() {
                    report["top_tokens"] = serde_json::to_value(&top)?;
                }
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("documents:           {}", stats.document_count);
                println!("words:               {}", stats.word_count);
                println!("sentences (approx.): {}", stats.approx_sentence_count);
                println!("vocabulary size:     {}", stats.vocabulary_size);
                println!("avg words per doc:   {:.2}", stats.avg_words_per_doc);
                for (token, count) in top {
                    println!("{}\t{}", count, token);
                }
            }
        }
    };
    Ok(())
}
