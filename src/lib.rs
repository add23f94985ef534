//! Lemmatized token files for a crawled corpus.
//!
//! Reads the crawl index, lemmatizes the first line of every page, drops
//! stopwords and punctuation and writes one token file per page.

pub mod config;
pub mod document;
pub mod error;
pub mod filter;
pub mod index;
pub mod lemmatizer;
pub mod pipeline;
pub mod stopwords;

pub use config::{Config, LemmatizerKind};
pub use error::{Error, Result};
pub use filter::TokenFilter;
pub use lemmatizer::Lemmatizer;
pub use pipeline::{Pipeline, RunReport};
