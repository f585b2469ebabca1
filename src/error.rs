//! Rich diagnostic error types for the zasocaravita renderer.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes and help text so users know exactly which token or
//! configuration value went wrong and how to fix it.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the zasocaravita renderer.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain (error codes, help text) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum ZasoError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syllable(#[from] SyllableError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Output(#[from] OutputError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Upload(#[from] UploadError),
}

// ---------------------------------------------------------------------------
// Syllable errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum SyllableError {
    #[error("invalid syllable: \"{token}\"")]
    #[diagnostic(
        code(zaso::syllable::invalid),
        help(
            "A syllable is up to two onset consonants, up to two vowels, and up \
             to two coda consonants, all lowercase, with at least one letter. \
             Run `zaso alphabet` to see the letter inventory."
        )
    )]
    InvalidSyllable { token: String },
}

// ---------------------------------------------------------------------------
// Layout errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum LayoutError {
    #[error("unsupported syllable structure: {onset} onset, {nucleus} nucleus, {coda} coda letter(s)")]
    #[diagnostic(
        code(zaso::layout::unsupported),
        help(
            "No tiling pattern is defined for this combination of slot lengths. \
             Syllables without a vowel carry at most two consonants, all in the onset."
        )
    )]
    UnsupportedStructure {
        onset: usize,
        nucleus: usize,
        coda: usize,
    },

    #[error("nucleus letter '{symbol}' has no vowel orientation")]
    #[diagnostic(
        code(zaso::layout::orientation),
        help(
            "The first nucleus letter decides whether the vowel band splits the \
             square horizontally or vertically, so it must be a vowel from the catalog."
        )
    )]
    UnknownOrientation { symbol: char },

    #[error("letter '{symbol}' is not in the catalog")]
    #[diagnostic(
        code(zaso::layout::unknown_letter),
        help(
            "The planner only accepts symbols from the fixed letter catalog. \
             If this syllable came from the parser, the catalog and grammar disagree; \
             that is a bug worth reporting."
        )
    )]
    UnknownLetter { symbol: char },
}

// ---------------------------------------------------------------------------
// Render errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum RenderError {
    #[error("planned glyph references unknown letter '{symbol}'")]
    #[diagnostic(
        code(zaso::render::unknown_letter),
        help(
            "The layout plan references a symbol absent from the letter catalog. \
             Plans produced by the planner never do this, so it is a bug worth reporting."
        )
    )]
    UnknownLetter { symbol: char },
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("invalid canvas configuration: {message}")]
    #[diagnostic(
        code(zaso::config::canvas),
        help(
            "The canvas must leave a positive drawable area: \
             size − 2·padding − gap·(slice − 1) must not be negative, and slice must be > 0."
        )
    )]
    InvalidCanvas { message: String },
}

// ---------------------------------------------------------------------------
// Output errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum OutputError {
    #[error("failed to write {path}")]
    #[diagnostic(
        code(zaso::output::io),
        help(
            "A filesystem operation failed. Check that the output directory exists, \
             has correct permissions, and that the disk is not full."
        )
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Upload errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum UploadError {
    #[error("wiki login failed: {result}")]
    #[diagnostic(
        code(zaso::upload::auth),
        help("Check MEDIAWIKI_USERNAME and MEDIAWIKI_PASSWORD in the environment or .env file.")
    )]
    AuthFailure { result: String },

    #[error("unable to obtain {kind} token")]
    #[diagnostic(
        code(zaso::upload::token),
        help(
            "The wiki API did not return the requested token. Verify that \
             MEDIAWIKI_API_URL points at an api.php endpoint and that the \
             account has upload rights."
        )
    )]
    TokenFailure { kind: String },

    #[error("wiki rejected upload: {result}")]
    #[diagnostic(
        code(zaso::upload::rejected),
        help(
            "The upload request reached the wiki but was not accepted. \
             A duplicate file or a blocked filename are the usual causes; \
             set MEDIAWIKI_UPLOAD_IGNORE_WARNINGS=1 to override warnings."
        )
    )]
    UploadRejected { result: String },

    #[error("transport error talking to the wiki: {message}")]
    #[diagnostic(
        code(zaso::upload::transport),
        help("Check network connectivity and that MEDIAWIKI_API_URL is reachable.")
    )]
    TransportError { message: String },

    #[error("wiki API error: {info}")]
    #[diagnostic(
        code(zaso::upload::api),
        help("The wiki returned an error payload. The info field is the wiki's own description.")
    )]
    Api { info: String },

    #[error("failed to read artifact {path}")]
    #[diagnostic(
        code(zaso::upload::io),
        help("The generated SVG could not be read back for upload. Was the output directory removed?")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for functions returning zasocaravita results.
pub type ZasoResult<T> = std::result::Result<T, ZasoError>;
