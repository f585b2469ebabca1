//! Environment-driven configuration for the upload collaborator.
//!
//! Values come from the process environment first, falling back to a `.env`
//! file in the working directory. A missing or incomplete configuration
//! disables uploading rather than failing the run; the batch renderer never
//! depends on it.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

const REQUIRED_VARS: [&str; 3] = [
    "MEDIAWIKI_API_URL",
    "MEDIAWIKI_USERNAME",
    "MEDIAWIKI_PASSWORD",
];

/// Key/value pairs read from a `.env` file.
#[derive(Debug, Default, Clone)]
pub struct EnvFile(HashMap<String, String>);

impl EnvFile {
    /// Load `path` if it exists. Lines are `KEY=value`; blank lines and `#`
    /// comments are skipped, and single or double quotes around the value are
    /// stripped.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let mut vars = HashMap::new();
        if !path.exists() {
            return Ok(Self(vars));
        }
        let content = std::fs::read_to_string(path)?;
        for raw_line in content.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            let mut value = value.trim();
            if (value.starts_with('"') && value.ends_with('"') && value.len() >= 2)
                || (value.starts_with('\'') && value.ends_with('\'') && value.len() >= 2)
            {
                value = &value[1..value.len() - 1];
            }
            vars.insert(key.to_string(), value.to_string());
        }
        Ok(Self(vars))
    }

    /// Resolve a variable: process environment first, then the file.
    pub fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().or_else(|| self.0.get(key).cloned())
    }
}

/// Interpret a boolean-ish setting the way the environment uses them:
/// unset → default; `0`, `false`, `no`, `off` (any case) → false; else true.
pub fn parse_boolean(value: Option<&str>, default: bool) -> bool {
    match value {
        None => default,
        Some(raw) => {
            let normalized = raw.trim().to_lowercase();
            !matches!(normalized.as_str(), "0" | "false" | "no" | "off")
        }
    }
}

/// Expand `{key}` placeholders from the context; unknown keys expand empty.
pub fn apply_template(template: &str, context: &[(&str, &str)]) -> String {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    let placeholder =
        PLACEHOLDER.get_or_init(|| Regex::new(r"\{(\w+)\}").expect("placeholder regex"));
    placeholder
        .replace_all(template, |captures: &regex::Captures<'_>| {
            context
                .iter()
                .find(|(key, _)| *key == &captures[1])
                .map(|(_, value)| (*value).to_string())
                .unwrap_or_default()
        })
        .into_owned()
}

/// Connection and templating settings for the wiki upload client.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// `api.php` endpoint of the target wiki.
    pub api_url: String,
    pub username: String,
    pub password: String,
    /// Remote filename template over `{basename}` / `{syllable}`.
    pub filename_template: String,
    /// Upload comment template; empty disables the comment.
    pub comment_template: String,
    /// Initial page text template, if any.
    pub text_template: Option<String>,
    /// Ask the wiki to ignore duplicate-upload warnings.
    pub ignore_warnings: bool,
}

/// Whether uploading is configured for this run.
#[derive(Debug, Clone)]
pub enum UploadSetting {
    Enabled(UploadConfig),
    Disabled { reason: String },
}

impl UploadConfig {
    /// Resolve the upload configuration from the environment and `.env` file.
    pub fn from_env(env: &EnvFile) -> UploadSetting {
        Self::from_lookup(|key| env.var(key))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> UploadSetting {
        let enabled = lookup("MEDIAWIKI_UPLOAD_ENABLED");
        if !parse_boolean(enabled.as_deref(), true) {
            return UploadSetting::Disabled {
                reason: "disabled via MEDIAWIKI_UPLOAD_ENABLED".into(),
            };
        }

        let missing: Vec<&str> = REQUIRED_VARS
            .iter()
            .filter(|key| lookup(key).map(|v| v.trim().is_empty()).unwrap_or(true))
            .copied()
            .collect();
        if !missing.is_empty() {
            return UploadSetting::Disabled {
                reason: format!("missing env vars: {}", missing.join(", ")),
            };
        }

        let get = |key: &str| lookup(key).unwrap_or_default();
        UploadSetting::Enabled(UploadConfig {
            api_url: get("MEDIAWIKI_API_URL").trim().to_string(),
            username: get("MEDIAWIKI_USERNAME"),
            password: get("MEDIAWIKI_PASSWORD"),
            filename_template: lookup("MEDIAWIKI_UPLOAD_FILENAME_TEMPLATE")
                .unwrap_or_else(|| "{basename}".into()),
            comment_template: lookup("MEDIAWIKI_UPLOAD_COMMENT")
                .unwrap_or_else(|| "Auto-upload of {basename}".into()),
            text_template: lookup("MEDIAWIKI_UPLOAD_TEXT"),
            ignore_warnings: parse_boolean(
                lookup("MEDIAWIKI_UPLOAD_IGNORE_WARNINGS").as_deref(),
                true,
            ),
        })
    }
}
