//! Yandex Mystem, driven as a subprocess with JSON output.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

use serde::Deserialize;

use super::Lemmatizer;
use crate::error::{Error, Result};

/// `--format json`: one JSON array per input line.
/// `-i`: grammar info, needed to get an `analysis` block at all.
/// `-d`: contextual disambiguation, so `analysis[0]` is the best guess.
/// `-c`: copy the whole input, separators included.
const MYSTEM_ARGS: &[&str] = &["--format", "json", "-i", "-d", "-c"];

#[derive(Debug, Clone)]
pub struct Mystem {
    bin: PathBuf,
}

#[derive(Debug, Deserialize)]
struct Item {
    text: String,
    #[serde(default)]
    analysis: Vec<Analysis>,
}

#[derive(Debug, Deserialize)]
struct Analysis {
    lex: Option<String>,
}

impl Item {
    fn into_lemma(self) -> String {
        match self.analysis.into_iter().next().and_then(|a| a.lex) {
            Some(lex) => lex,
            None => self.text,
        }
    }
}

impl Mystem {
    pub fn new(bin: impl AsRef<Path>) -> Self {
        Self {
            bin: bin.as_ref().to_path_buf(),
        }
    }

    fn run(&self, text: &str) -> Result<String> {
        let mut child = Command::new(&self.bin)
            .args(MYSTEM_ARGS)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                Error::Lemmatizer(format!("cannot start {}: {e}", self.bin.display()))
            })?;

        let mut input = text.to_string();
        if !input.ends_with('\n') {
            input.push('\n');
        }
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| Error::Lemmatizer("mystem stdin not captured".to_string()))?;
        // Written from a separate thread so a full stdout pipe cannot block us.
        let writer = thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child
            .wait_with_output()
            .map_err(|e| Error::Lemmatizer(format!("mystem did not finish: {e}")))?;
        let written = writer
            .join()
            .map_err(|_| Error::Lemmatizer("mystem writer thread panicked".to_string()))?;

        // A crashed mystem also breaks the pipe; its exit status says more.
        if !output.status.success() {
            return Err(Error::Lemmatizer(format!(
                "mystem exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        written.map_err(|e| Error::Lemmatizer(format!("writing to mystem: {e}")))?;
        String::from_utf8(output.stdout)
            .map_err(|e| Error::Lemmatizer(format!("mystem output is not UTF-8: {e}")))
    }
}

/// Lemmas from Mystem's JSON output. Items without an analysis (separators,
/// unknown symbols) contribute their raw text; empty lemmas are dropped.
fn parse_output(stdout: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    for line in stdout.lines().filter(|l| !l.trim().is_empty()) {
        let items: Vec<Item> = serde_json::from_str(line)
            .map_err(|e| Error::Lemmatizer(format!("bad mystem output {line:?}: {e}")))?;
        tokens.extend(
            items
                .into_iter()
                .map(Item::into_lemma)
                .filter(|t| !t.is_empty()),
        );
    }
    Ok(tokens)
}

impl Lemmatizer for Mystem {
    fn lemmatize(&self, text: &str) -> Result<Vec<String>> {
        let stdout = self.run(text)?;
        let tokens = parse_output(&stdout)?;
        tracing::trace!(bin = %self.bin.display(), tokens = tokens.len(), "mystem finished");
        Ok(tokens)
    }
}
