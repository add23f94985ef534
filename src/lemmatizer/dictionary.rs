//! Table-driven lemmatizer: looks each word up in a `form -> lemma` map.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;

use super::Lemmatizer;
use crate::error::{Error, Result};

/// Word forms mapped to lemmas. Unknown words are emitted unchanged, so an
/// empty table gives plain segmentation.
#[derive(Debug, Clone, Default)]
pub struct DictionaryLemmatizer {
    lemmas: FxHashMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Word,
    Newline,
    Other,
}

fn classify(c: char) -> Class {
    if c.is_alphanumeric() {
        Class::Word
    } else if c == '\n' {
        Class::Newline
    } else {
        Class::Other
    }
}

/// Split into maximal runs of word characters and of other characters. Every
/// newline is a token of its own.
fn segment(text: &str) -> Vec<(Class, &str)> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut current: Option<Class> = None;

    for (i, c) in text.char_indices() {
        let class = classify(c);
        if let Some(prev) = current {
            if prev != class || class == Class::Newline {
                segments.push((prev, &text[start..i]));
                start = i;
            }
        }
        current = Some(class);
    }
    if let Some(prev) = current {
        segments.push((prev, &text[start..]));
    }
    segments
}

impl DictionaryLemmatizer {
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            lemmas: pairs
                .into_iter()
                .map(|(form, lemma)| (form.to_lowercase(), lemma.to_string()))
                .collect(),
        }
    }

    /// Parse `form<TAB>lemma` lines. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lemmas = FxHashMap::default();
        for (i, line) in text.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let (form, lemma) = line.split_once('\t').ok_or_else(|| {
                Error::Config(format!("dictionary line {}: expected form<TAB>lemma", i + 1))
            })?;
            lemmas.insert(form.trim().to_lowercase(), lemma.trim().to_string());
        }
        Ok(Self { lemmas })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&text)
    }

    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }
}

impl Lemmatizer for DictionaryLemmatizer {
    fn lemmatize(&self, text: &str) -> Result<Vec<String>> {
        Ok(segment(text)
            .into_iter()
            .map(|(class, s)| match class {
                Class::Word => self.lemmas.get(s).cloned().unwrap_or_else(|| s.to_string()),
                Class::Newline | Class::Other => s.to_string(),
            })
            .collect())
    }
}
