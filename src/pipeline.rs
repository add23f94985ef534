//! Index -> pages -> token files.

use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::document;
use crate::error::{Error, Result};
use crate::filter::TokenFilter;
use crate::index;
use crate::lemmatizer::Lemmatizer;
use crate::stopwords::StopwordSet;

/// Totals for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub documents: usize,
    pub tokens: usize,
}

/// Stopwords for `config.language`, plus the optional extra list.
pub fn load_filter(config: &Config) -> Result<TokenFilter> {
    let mut stopwords = StopwordSet::for_language(&config.language)?;
    if let Some(path) = &config.stopwords_file {
        stopwords.extend_from_file(path)?;
    }
    tracing::debug!(language = %config.language, stopwords = stopwords.len(), "stopwords loaded");
    Ok(TokenFilter::new(stopwords))
}

/// One token per line, each followed by `\n`.
fn render(tokens: &[String]) -> String {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.len() + 1).sum());
    for token in tokens {
        out.push_str(token);
        out.push('\n');
    }
    out
}

pub struct Pipeline<'a, L: Lemmatizer> {
    config: &'a Config,
    lemmatizer: L,
    filter: TokenFilter,
}

impl<'a, L: Lemmatizer> Pipeline<'a, L> {
    pub fn new(config: &'a Config, lemmatizer: L, filter: TokenFilter) -> Self {
        Self {
            config,
            lemmatizer,
            filter,
        }
    }

    /// Lemmatize and filter one piece of text.
    pub fn tokens(&self, text: &str) -> Result<Vec<String>> {
        let raw = self.lemmatizer.lemmatize(text)?;
        Ok(self.filter.apply(&raw))
    }

    /// Process every document in the index, in order. Stops at the first
    /// error; token files already written are left in place.
    pub fn run(&self) -> Result<RunReport> {
        let output_dir = &self.config.output_dir;
        fs::create_dir_all(output_dir).map_err(|e| Error::io(output_dir, e))?;

        let names = index::load_index(&self.config.index_path)?;
        tracing::info!(
            index = %self.config.index_path.display(),
            documents = names.len(),
            "index loaded"
        );

        let mut report = RunReport::default();
        for name in &names {
            report.tokens += self.process_document(name)?;
            report.documents += 1;
        }
        Ok(report)
    }

    /// Tokenize a single document and write its token file. Returns the number
    /// of tokens written.
    pub fn process_document(&self, name: &str) -> Result<usize> {
        let source = self.config.document_path(name);
        println!("processing {}", source.display());

        let text = document::read_first_line(&source)?;
        let tokens = self.tokens(&text)?;

        let target = self.config.output_path(name);
        write_tokens(&target, &tokens)?;
        tracing::debug!(document = name, tokens = tokens.len(), "token file written");
        Ok(tokens.len())
    }
}

/// Create or truncate `path` with one token per line.
pub fn write_tokens(path: &Path, tokens: &[String]) -> Result<()> {
    fs::write(path, render(tokens)).map_err(|e| Error::io(path, e))
}
