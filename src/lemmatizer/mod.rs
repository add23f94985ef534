//! Lemmatization backends.
//!
//! The pipeline only needs `text -> tokens`; which engine produces them is
//! chosen at startup from [`LemmatizerKind`].

mod dictionary;
mod mystem;

pub use dictionary::DictionaryLemmatizer;
pub use mystem::Mystem;

use crate::config::{Config, LemmatizerKind};
use crate::error::Result;

/// Turns text into a sequence of tokens.
///
/// Implementations return lemmas for words and pass through the text between
/// them (spaces, punctuation, newlines) as separate tokens, in input order.
pub trait Lemmatizer {
    fn lemmatize(&self, text: &str) -> Result<Vec<String>>;
}

impl<L: Lemmatizer + ?Sized> Lemmatizer for Box<L> {
    fn lemmatize(&self, text: &str) -> Result<Vec<String>> {
        (**self).lemmatize(text)
    }
}

impl<L: Lemmatizer + ?Sized> Lemmatizer for &L {
    fn lemmatize(&self, text: &str) -> Result<Vec<String>> {
        (**self).lemmatize(text)
    }
}

/// Build the backend selected in `config`.
pub fn from_config(config: &Config) -> Result<Box<dyn Lemmatizer>> {
    match config.lemmatizer {
        LemmatizerKind::Mystem => Ok(Box::new(Mystem::new(&config.mystem_bin))),
        LemmatizerKind::Dictionary => {
            let dict = match &config.dictionary {
                Some(path) => DictionaryLemmatizer::load(path)?,
                None => DictionaryLemmatizer::default(),
            };
            Ok(Box::new(dict))
        }
    }
}
