//! Batch driver: token stream → one SVG file per syllable.
//!
//! Every token is rendered independently; a failing token is logged with the
//! reason and never stops the rest of the batch.

use std::path::PathBuf;
use std::sync::OnceLock;

use regex::Regex;

use crate::engine::Engine;
use crate::error::OutputError;

/// Filename prefix for generated artifacts.
pub const FILE_PREFIX: &str = "zasocaravita-";

/// Where and under what names the batch writes its artifacts.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("output"),
            prefix: FILE_PREFIX.to_string(),
        }
    }
}

impl OutputConfig {
    /// Deterministic artifact path for a token.
    pub fn path_for(&self, token: &str) -> PathBuf {
        self.dir.join(format!("{}{}.svg", self.prefix, token))
    }
}

/// A successfully written artifact.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub token: String,
    pub overwritten: bool,
}

/// A token the batch could not turn into an artifact.
#[derive(Debug, Clone)]
pub struct BatchFailure {
    pub token: String,
    pub error: String,
}

/// Outcome of one batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub written: Vec<GeneratedFile>,
    pub failures: Vec<BatchFailure>,
}

/// Pull candidate tokens out of free-form text: every maximal `[a-z]+` run.
pub fn extract_tokens(input: &str) -> Vec<String> {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    let token = TOKEN.get_or_init(|| Regex::new("[a-z]+").expect("token regex"));
    token
        .find_iter(input)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Render every token and write the artifacts.
///
/// Only the output directory creation can fail the whole run; per-token
/// render or write failures are collected in the summary.
pub fn run(engine: &Engine, tokens: &[String], output: &OutputConfig) -> Result<BatchSummary, OutputError> {
    std::fs::create_dir_all(&output.dir).map_err(|source| OutputError::Io {
        path: output.dir.clone(),
        source,
    })?;

    tracing::info!(count = tokens.len(), dir = %output.dir.display(), "generating syllables");

    let mut summary = BatchSummary::default();
    for token in tokens {
        let document = match engine.render_syllable(token) {
            Ok(document) => document,
            Err(error) => {
                tracing::warn!(token = %token, %error, "skipping syllable");
                summary.failures.push(BatchFailure {
                    token: token.clone(),
                    error: error.to_string(),
                });
                continue;
            }
        };

        let path = output.path_for(token);
        let overwritten = path.exists();
        if let Err(error) = std::fs::write(&path, document.as_bytes()) {
            tracing::warn!(token = %token, path = %path.display(), %error, "failed to write artifact");
            summary.failures.push(BatchFailure {
                token: token.clone(),
                error: error.to_string(),
            });
            continue;
        }

        if overwritten {
            tracing::info!(path = %path.display(), "overwrote file");
        } else {
            tracing::info!(path = %path.display(), "generated file");
        }
        summary.written.push(GeneratedFile {
            path,
            token: token.clone(),
            overwritten,
        });
    }

    Ok(summary)
}
