use std::path::{Path, PathBuf};

use asmcorpus::filtering::KeyFilterKind;
use asmcorpus::io::{expand_inputs, load_table, save_table};
use asmcorpus::processing::dedup::DEFAULT_KEY;
use asmcorpus::processing::{
    aggregate_and_split, clean_file, compute_stats, dedup_file, CleanOptions, SourceKind,
};
use asmcorpus::table::{Record, Table};

fn write_comments(path: &Path) {
    let comments = [
        ("আমি ভাল আছি। আপুনি কেনে আছে?", "a"),
        ("আমি ভাল আছি। আপুনি কেনে আছে?", "b"),
        ("আমাৰ নাম ৰাম 😀", "c"),
        ("আমার নাম রাম", "d"),
        ("nice song", "e"),
    ];
    let table = Table::from_records(comments.iter().map(|(text, author)| {
        [
            ("text", *text),
            ("author", *author),
            ("channel_category", "Music"),
            ("video_url", "https://youtube.com/watch?v=1"),
        ]
        .into_iter()
        .collect::<Record>()
    }));
    save_table(&table, path).unwrap();
}

fn write_articles(path: &Path) {
    let articles = [
        (
            "অসমৰ খবৰ আজি।\nCopyright 2024, all rights reserved",
            "http://news.example/1",
        ),
        ("আমি ভাল আছি।", "http://news.example/2"),
    ];
    let table = Table::from_records(articles.iter().map(|(text, url)| {
        [("text", *text), ("title", "শিৰোনাম"), ("source_url", *url)]
            .into_iter()
            .collect::<Record>()
    }));
    save_table(&table, path).unwrap();
}

fn column(table: &Table, name: &str) -> Vec<String> {
    table.iter().map(|r| r.text(name).into_owned()).collect()
}

#[test_log::test]
fn full_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let path = |name: &str| -> PathBuf { dir.path().join(name) };

    // raw dumps
    write_comments(&path("youtube_comments_raw.jsonl"));
    write_articles(&path("news_raw.csv"));

    // clean
    let mut social = CleanOptions::new(SourceKind::SocialMedia);
    social.redact_pii = true;
    let report = clean_file(
        &path("youtube_comments_raw.jsonl"),
        &path("youtube_comments_clean.csv"),
        &social,
        false,
    )
    .unwrap();
    assert_eq!(report.input_count, 5);
    assert_eq!(report.kept_count, 3);
    assert_eq!(report.rejected_count, 2);

    let report = clean_file(
        &path("news_raw.csv"),
        &path("news_clean.csv"),
        &CleanOptions::new(SourceKind::News),
        false,
    )
    .unwrap();
    assert_eq!(report.kept_count, 2);

    let cleaned = load_table(&path("news_clean.csv")).unwrap();
    assert_eq!(
        column(&cleaned, "processed_text"),
        ["অসমৰ খবৰ আজি।", "আমি ভাল আছি।"]
    );

    // dedup
    let report = dedup_file(
        &path("youtube_comments_clean.csv"),
        &path("youtube_comments_dedup.csv"),
        DEFAULT_KEY,
        KeyFilterKind::Exact,
    )
    .unwrap();
    assert_eq!(report.removed_count, 1);
    dedup_file(
        &path("news_clean.csv"),
        &path("news_dedup.csv"),
        DEFAULT_KEY,
        KeyFilterKind::Digest,
    )
    .unwrap();

    let deduped = load_table(&path("youtube_comments_dedup.csv")).unwrap();
    assert!(!deduped.has_column("author"));
    assert_eq!(column(&deduped, "channel_category"), ["Music", "Music"]);

    // combine
    let inputs = expand_inputs(&[path("*_dedup.csv")]).unwrap();
    assert_eq!(inputs.len(), 2);
    let report = aggregate_and_split(&inputs, &path("sentences.csv")).unwrap();
    assert!(report.written);
    assert!(report.failed.is_empty());
    assert_eq!(report.sentence_count, 5);
    assert_eq!(report.unique_count, 4);

    let raw_bytes = std::fs::read(path("sentences.csv")).unwrap();
    assert!(raw_bytes.starts_with(b"\xef\xbb\xbf"));

    let sentences = load_table(&path("sentences.csv")).unwrap();
    assert_eq!(
        sentences.columns(),
        [
            "sentence_original",
            "sentence_no_emoji",
            "source_type",
            "source_url"
        ]
    );
    assert_eq!(
        column(&sentences, "sentence_no_emoji"),
        [
            "অসমৰ খবৰ আজি।",
            "আমি ভাল আছি।",
            "আপুনি কেনে আছে?",
            "আমাৰ নাম ৰাম"
        ]
    );
    assert_eq!(
        column(&sentences, "source_type"),
        ["news", "news", "youtube_comment", "youtube_comment"]
    );
    assert_eq!(
        column(&sentences, "source_url")[3],
        "https://youtube.com/watch?v=1"
    );

    // stats
    let stats = compute_stats(&inputs);
    assert_eq!(stats.document_count, 4);
    assert_eq!(stats.word_count, 16);
    assert_eq!(stats.approx_sentence_count, 5);
    assert_eq!(stats.vocabulary_size, 13);
    assert_eq!(stats.avg_words_per_doc, 4.0);

    // the sentence table has no document column
    let stats = compute_stats(&[path("sentences.csv")]);
    assert_eq!(stats.document_count, 0);
}

#[test_log::test]
fn combine_without_sentences() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("emojis.csv");
    let output = dir.path().join("sentences.csv");

    let table = Table::from_records(vec![[("processed_text", "👍 😀😀")]
        .into_iter()
        .collect::<Record>()]);
    save_table(&table, &input).unwrap();

    let report = aggregate_and_split(&[input, dir.path().join("missing.csv")], &output).unwrap();
    assert!(!report.written);
    assert_eq!(report.failed.len(), 1);
    assert!(!output.exists());
}
