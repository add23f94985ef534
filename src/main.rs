//! lemmatok: lemmatize crawled pages into token files.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lemmatok::config::{Config, LemmatizerKind};
use lemmatok::{lemmatizer, pipeline, Lemmatizer, Pipeline};

#[derive(Parser)]
#[command(name = "lemmatok")]
#[command(about = "Lemmatize crawled pages and write filtered token files")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    options: ConfigArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Tokenize every page listed in the index (the default).
    Tokenize,

    /// Lemmatize a string and show which tokens survive filtering.
    Lemmatize {
        /// Text to lemmatize (lowercased first).
        text: String,
    },
}

/// Overrides on top of the config file (or built-in defaults).
#[derive(Args)]
struct ConfigArgs {
    /// JSON config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Crawl index file.
    #[arg(long, global = true)]
    index: Option<PathBuf>,

    /// Directory with crawled pages.
    #[arg(long, global = true)]
    pages: Option<PathBuf>,

    /// Directory for token files.
    #[arg(long, short, global = true)]
    output: Option<PathBuf>,

    /// Stopword language code.
    #[arg(long, short, global = true)]
    language: Option<String>,

    /// Extra stopwords, one per line.
    #[arg(long, global = true)]
    stopwords_file: Option<PathBuf>,

    /// Lemmatization backend.
    #[arg(long, value_enum, global = true)]
    lemmatizer: Option<LemmatizerKind>,

    /// Path to the mystem binary.
    #[arg(long, global = true)]
    mystem_bin: Option<PathBuf>,

    /// form<TAB>lemma table for the dictionary backend.
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,
}

impl ConfigArgs {
    fn resolve(self) -> Result<Config, Box<dyn std::error::Error + Send + Sync>> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(v) = self.index {
            config.index_path = v;
        }
        if let Some(v) = self.pages {
            config.pages_dir = v;
        }
        if let Some(v) = self.output {
            config.output_dir = v;
        }
        if let Some(v) = self.language {
            config.language = v;
        }
        if let Some(v) = self.stopwords_file {
            config.stopwords_file = Some(v);
        }
        if let Some(v) = self.lemmatizer {
            config.lemmatizer = v;
        }
        if let Some(v) = self.mystem_bin {
            config.mystem_bin = v;
        }
        if let Some(v) = self.dictionary {
            config.dictionary = Some(v);
        }
        Ok(config)
    }
}

const DEFAULT_LOG_FILTER: &str = "lemmatok=info";

/// `RUST_LOG` as given, or `lemmatok=info` when unset or unparsable.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let cli = Cli::parse();
    let config = cli.options.resolve()?;
    match cli.command.unwrap_or(Command::Tokenize) {
        Command::Tokenize => run_tokenize(config)?,
        Command::Lemmatize { text } => run_lemmatize(&text, config)?,
    }
    Ok(())
}

fn run_tokenize(config: Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = pipeline::load_filter(&config)?;
    let lemmatizer = lemmatizer::from_config(&config)?;
    tracing::info!(
        output = %config.output_dir.display(),
        lemmatizer = ?config.lemmatizer,
        "tokenizing"
    );

    let report = Pipeline::new(&config, lemmatizer, filter).run()?;
    tracing::info!(
        documents = report.documents,
        tokens = report.tokens,
        "done"
    );
    Ok(())
}

fn run_lemmatize(text: &str, config: Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = pipeline::load_filter(&config)?;
    let lemmatizer = lemmatizer::from_config(&config)?;

    for token in lemmatizer.lemmatize(&text.to_lowercase())? {
        let mark = if filter.is_valid(&token) { "+" } else { "-" };
        println!("{mark} {token:?}");
    }
    Ok(())
}
