//! End-to-end runs over a temporary crawl layout.

use std::cell::RefCell;
use std::fs;
use std::path::Path;

use lemmatok::lemmatizer::DictionaryLemmatizer;
use lemmatok::stopwords::StopwordSet;
use lemmatok::{Config, Error, Lemmatizer, Pipeline, TokenFilter};
use tempfile::TempDir;

/// Returns the same tokens for any input and records what it was given.
struct Canned {
    tokens: Vec<String>,
    seen: RefCell<Vec<String>>,
}

impl Canned {
    fn new(tokens: &[&str]) -> Self {
        Self {
            tokens: tokens.iter().map(|s| s.to_string()).collect(),
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl Lemmatizer for Canned {
    fn lemmatize(&self, text: &str) -> lemmatok::Result<Vec<String>> {
        self.seen.borrow_mut().push(text.to_string());
        Ok(self.tokens.clone())
    }
}

struct Failing;

impl Lemmatizer for Failing {
    fn lemmatize(&self, _text: &str) -> lemmatok::Result<Vec<String>> {
        Err(Error::Lemmatizer("backend unavailable".to_string()))
    }
}

/// `<root>/task-1/{index.txt,pages/}` and `<root>/tokens` as output.
fn layout(root: &Path, index: &str, pages: &[(&str, &str)]) -> Config {
    let task = root.join("task-1");
    fs::create_dir_all(task.join("pages")).unwrap();
    fs::write(task.join("index.txt"), index).unwrap();
    for (name, text) in pages {
        fs::write(task.join("pages").join(format!("{name}.txt")), text).unwrap();
    }
    Config {
        index_path: task.join("index.txt"),
        pages_dir: task.join("pages"),
        output_dir: root.join("tokens"),
        ..Config::default()
    }
}

fn russian_filter() -> TokenFilter {
    TokenFilter::new(StopwordSet::for_language("ru").unwrap())
}

fn lemmas() -> DictionaryLemmatizer {
    DictionaryLemmatizer::from_pairs([
        ("кошки", "кошка"),
        ("спали", "спать"),
        ("на", "на"),
        ("окнах", "окно"),
        ("домов", "дом"),
    ])
}

#[test]
fn test_example_document() {
    let dir = TempDir::new().unwrap();
    let config = layout(dir.path(), "doc1 - Example Page\n", &[("doc1", "Привет мир!\n")]);
    assert!(!config.output_dir.exists());

    let lemmatizer = Canned::new(&["привет", " ", "мир", "!", "\n"]);
    let pipeline = Pipeline::new(&config, &lemmatizer, russian_filter());
    let report = pipeline.run().unwrap();

    assert_eq!(report.documents, 1);
    assert_eq!(report.tokens, 2);
    assert!(config.output_dir.is_dir());
    assert_eq!(
        fs::read_to_string(config.output_path("doc1")).unwrap(),
        "привет\nмир\n"
    );
    assert_eq!(*lemmatizer.seen.borrow(), vec!["привет мир!\n"]);
}

#[test]
fn test_only_first_line_is_tokenized() {
    let dir = TempDir::new().unwrap();
    let config = layout(
        dir.path(),
        "1 - https://example.com\n",
        &[("1", "Кошки спали\nокнах домов\n")],
    );

    Pipeline::new(&config, lemmas(), russian_filter()).run().unwrap();

    assert_eq!(
        fs::read_to_string(config.output_path("1")).unwrap(),
        "кошка\nспать\n"
    );
}

#[test]
fn test_stopwords_and_punctuation_never_written() {
    let dir = TempDir::new().unwrap();
    let config = layout(
        dir.path(),
        "1 - a\n2 - b\n",
        &[
            ("1", "Кошки и псы спали на окнах, «домов» не было…"),
            ("2", "и в не на"),
        ],
    );
    let filter = russian_filter();

    Pipeline::new(&config, lemmas(), filter.clone()).run().unwrap();

    for name in ["1", "2"] {
        let text = fs::read_to_string(config.output_path(name)).unwrap();
        for token in text.lines() {
            assert!(!filter.stopwords().contains(token), "stopword {token:?} in {name}");
            assert!(
                token.chars().all(char::is_alphanumeric),
                "non-letter token {token:?} in {name}"
            );
        }
    }
    assert_eq!(fs::read_to_string(config.output_path("2")).unwrap(), "");
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let config = layout(
        dir.path(),
        "1 - a\n2 - b\n",
        &[("1", "Кошки спали на окнах домов."), ("2", "Дом, окно!")],
    );
    let pipeline = Pipeline::new(&config, lemmas(), russian_filter());

    pipeline.run().unwrap();
    let first: Vec<Vec<u8>> = ["1", "2"]
        .iter()
        .map(|n| fs::read(config.output_path(n)).unwrap())
        .collect();
    pipeline.run().unwrap();
    let second: Vec<Vec<u8>> = ["1", "2"]
        .iter()
        .map(|n| fs::read(config.output_path(n)).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_existing_output_overwritten() {
    let dir = TempDir::new().unwrap();
    let config = layout(dir.path(), "1 - a\n", &[("1", "домов")]);
    fs::create_dir_all(&config.output_dir).unwrap();
    fs::write(config.output_path("1"), "old\nstale\ncontent\n").unwrap();

    Pipeline::new(&config, lemmas(), russian_filter()).run().unwrap();

    assert_eq!(fs::read_to_string(config.output_path("1")).unwrap(), "дом\n");
}

#[test]
fn test_missing_index_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        index_path: dir.path().join("task-1/index.txt"),
        pages_dir: dir.path().join("task-1/pages"),
        output_dir: dir.path().join("tokens"),
        ..Config::default()
    };

    let err = Pipeline::new(&config, lemmas(), russian_filter())
        .run()
        .unwrap_err();

    assert!(err.is_not_found());
    let written = fs::read_dir(&config.output_dir)
        .map(|entries| entries.count())
        .unwrap_or(0);
    assert_eq!(written, 0);
}

#[test]
fn test_missing_document_stops_batch() {
    let dir = TempDir::new().unwrap();
    let config = layout(
        dir.path(),
        "1 - a\n2 - b\n3 - c\n",
        &[("1", "кошки"), ("3", "домов")],
    );

    let err = Pipeline::new(&config, lemmas(), russian_filter())
        .run()
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(err.to_string().contains("2.txt"));
    assert_eq!(fs::read_to_string(config.output_path("1")).unwrap(), "кошка\n");
    assert!(!config.output_path("2").exists());
    assert!(!config.output_path("3").exists());
}

#[test]
fn test_malformed_index_processes_nothing() {
    let dir = TempDir::new().unwrap();
    let config = layout(dir.path(), "1 - a\njust a title\n", &[("1", "кошки")]);

    let err = Pipeline::new(&config, lemmas(), russian_filter())
        .run()
        .unwrap_err();

    assert!(matches!(err, Error::MalformedIndexLine { line: 2, .. }));
    assert!(!config.output_path("1").exists());
}

#[test]
fn test_trailing_blank_index_line_processes_nothing() {
    let dir = TempDir::new().unwrap();
    let config = layout(dir.path(), "1 - a\n2 - b\n\n", &[("1", "кошки"), ("2", "домов")]);
    let lemmatizer = Canned::new(&["кошка"]);

    let err = Pipeline::new(&config, &lemmatizer, russian_filter())
        .run()
        .unwrap_err();

    assert!(matches!(err, Error::MalformedIndexLine { line: 3, .. }));
    assert!(lemmatizer.seen.borrow().is_empty());
    assert!(!config.output_path("1").exists());
    assert!(!config.output_path("2").exists());
}

#[test]
fn test_lemmatizer_failure_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = layout(dir.path(), "1 - a\n", &[("1", "кошки")]);

    let err = Pipeline::new(&config, Failing, russian_filter())
        .run()
        .unwrap_err();

    assert!(matches!(err, Error::Lemmatizer(_)));
    assert!(!config.output_path("1").exists());
}

#[test]
fn test_backend_from_config() {
    let dir = TempDir::new().unwrap();
    let mut config = layout(dir.path(), "1 - a\n", &[("1", "Кошки спали")]);
    let table = dir.path().join("lemmas.tsv");
    fs::write(&table, "кошки\tкошка\n").unwrap();
    config.lemmatizer = lemmatok::LemmatizerKind::Dictionary;
    config.dictionary = Some(table);

    let lemmatizer = lemmatok::lemmatizer::from_config(&config).unwrap();
    let filter = lemmatok::pipeline::load_filter(&config).unwrap();
    Pipeline::new(&config, lemmatizer, filter).run().unwrap();

    assert_eq!(
        fs::read_to_string(config.output_path("1")).unwrap(),
        "кошка\nспали\n"
    );
}
