//! Token validity predicate.

use crate::stopwords::StopwordSet;

/// ASCII punctuation, the same set as Python's `string.punctuation`.
pub const ASCII_PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Typographic symbols common in Russian web text.
pub const EXTRA_NON_LETTERS: &str = "«»…° ";

/// Decides which lemmatizer tokens make it into a token file.
#[derive(Debug, Clone)]
pub struct TokenFilter {
    stopwords: StopwordSet,
    non_letters: Vec<char>,
}

impl TokenFilter {
    pub fn new(stopwords: StopwordSet) -> Self {
        let non_letters = ASCII_PUNCTUATION
            .chars()
            .chain(EXTRA_NON_LETTERS.chars())
            .collect();
        Self {
            stopwords,
            non_letters,
        }
    }

    /// A token is kept unless it is blank, a lone newline, a stopword, or
    /// contains any non-letter character.
    pub fn is_valid(&self, token: &str) -> bool {
        token != " "
            && !token.is_empty()
            && token != "\n"
            && !self.stopwords.contains(token)
            && !token.chars().any(|c| self.non_letters.contains(&c))
    }

    /// Valid tokens in their original order.
    pub fn apply<'a, I>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        tokens
            .into_iter()
            .filter(|t| self.is_valid(t))
            .cloned()
            .collect()
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }
}
