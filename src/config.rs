//! Run configuration. Defaults are the paths of the crawl layout
//! (`../task-1/index.txt`, `../task-1/pages/`, `tokens/`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

pub const DEFAULT_INDEX_PATH: &str = "../task-1/index.txt";
pub const DEFAULT_PAGES_DIR: &str = "../task-1/pages";
pub const DEFAULT_OUTPUT_DIR: &str = "tokens";
pub const DEFAULT_LANGUAGE: &str = "ru";
pub const DEFAULT_MYSTEM_BIN: &str = "mystem";

/// Which lemmatization backend to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LemmatizerKind {
    /// External `mystem` binary.
    #[default]
    Mystem,
    /// In-process form -> lemma table.
    Dictionary,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub index_path: PathBuf,
    pub pages_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Stopword language code, e.g. `ru`.
    pub language: String,
    /// Extra stopwords, one per line, merged into the built-in list.
    pub stopwords_file: Option<PathBuf>,
    pub lemmatizer: LemmatizerKind,
    pub mystem_bin: PathBuf,
    /// Tab-separated `form<TAB>lemma` table for the dictionary backend.
    pub dictionary: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index_path: PathBuf::from(DEFAULT_INDEX_PATH),
            pages_dir: PathBuf::from(DEFAULT_PAGES_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            language: DEFAULT_LANGUAGE.to_string(),
            stopwords_file: None,
            lemmatizer: LemmatizerKind::default(),
            mystem_bin: PathBuf::from(DEFAULT_MYSTEM_BIN),
            dictionary: None,
        }
    }
}

impl Config {
    /// Load from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Source text of a document: `<pages_dir>/<name>.txt`.
    pub fn document_path(&self, name: &str) -> PathBuf {
        self.pages_dir.join(format!("{name}.txt"))
    }

    /// Token file of a document: `<output_dir>/<name>.txt`.
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{name}.txt"))
    }
}
