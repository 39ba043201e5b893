//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use asmcorpus::processing::SourceKind;

#[derive(Debug, StructOpt)]
#[structopt(name = "asmcorpus", about = "Assamese text corpus building tool.")]
/// Holds every command that is callable by the `asmcorpus` command.
pub enum Asmcorpus {
    #[structopt(about = "Clean, anonymize and classify raw scraped records")]
    Clean(Clean),
    #[structopt(about = "Deduplicate a table on a key column")]
    Dedup(Dedup),
    #[structopt(about = "Split tables into a single deduplicated sentence table")]
    Combine(Combine),
    #[structopt(about = "Compute corpus statistics")]
    Stats(Stats),
}

#[derive(Debug, StructOpt)]
/// Clean command and parameters.
///
/// ```sh
/// asmcorpus-clean 0.1.0
/// Clean, anonymize and classify raw scraped records
///
/// USAGE:
///     asmcorpus clean [FLAGS] [OPTIONS] --input <input> --output <output> --source <source>
/// ```
pub struct Clean {
    #[structopt(
        parse(from_os_str),
        long,
        help = "raw records dump (.csv or .jsonl)"
    )]
    pub input: PathBuf,
    #[structopt(parse(from_os_str), long, help = "cleaned table destination")]
    pub output: PathBuf,
    #[structopt(long, help = "kind of source (social or news)")]
    pub source: SourceKind,
    #[structopt(
        long,
        help = "classification threshold. Defaults to 0.4 for social media, 0.6 for news."
    )]
    pub threshold: Option<f64>,
    #[structopt(long, help = "redact emails from text")]
    pub anonymize: bool,
    #[structopt(long = "keep-rejected", help = "keep records that fail classification")]
    pub keep_rejected: bool,
    #[structopt(long, help = "append to the output instead of overwriting it")]
    pub append: bool,
}

#[derive(Debug, StructOpt)]
/// Dedup command and parameters.
pub struct Dedup {
    #[structopt(parse(from_os_str), long, help = "source table")]
    pub input: PathBuf,
    #[structopt(parse(from_os_str), long, help = "destination table")]
    pub output: PathBuf,
    #[structopt(long, help = "key column", default_value = "processed_text")]
    pub key: String,
    #[structopt(
        long,
        help = "keep 64-bit digests of keys instead of keys (less memory, collisions possible)"
    )]
    pub digest: bool,
}

#[derive(Debug, StructOpt)]
/// Combine command and parameters.
pub struct Combine {
    #[structopt(
        parse(from_os_str),
        long,
        required = true,
        min_values = 1,
        help = "cleaned tables (paths or glob patterns)"
    )]
    pub inputs: Vec<PathBuf>,
    #[structopt(parse(from_os_str), long, help = "sentence table destination")]
    pub output: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Stats command and parameters.
pub struct Stats {
    #[structopt(
        parse(from_os_str),
        long,
        required = true,
        min_values = 1,
        help = "tables to analyze (paths or glob patterns)"
    )]
    pub inputs: Vec<PathBuf>,
    #[structopt(long, help = "print statistics as JSON")]
    pub json: bool,
    #[structopt(long, help = "also report the n most frequent tokens")]
    pub top: Option<usize>,
}
