//! # zasocaravita
//!
//! SVG glyph renderer for Zasokese syllables. Each syllable decomposes into
//! onset, nucleus, and coda; a layout pattern tiles the square canvas with one
//! cell per letter, and every letter draws its strokes scaled into its cell.
//!
//! ## Architecture
//!
//! - **Letter catalog** (`alphabet`): the 23 letters with unit-square stroke paths
//! - **Decomposition** (`syllable`): onset/nucleus/coda parsing and validation
//! - **Canvas arithmetic** (`canvas`): the padded, gapped slice grid
//! - **Layout** (`layout`): shape and orientation → pattern → per-letter cells
//! - **Rendering** (`render`): layout plan → deterministic SVG document
//! - **Batch & upload** (`batch`, `upload`): token streams to files, optionally
//!   pushed to a MediaWiki instance
//!
//! ## Library usage
//!
//! ```
//! use zasocaravita::canvas::CanvasConfig;
//! use zasocaravita::engine::Engine;
//!
//! let engine = Engine::new(CanvasConfig::default()).unwrap();
//! let svg = engine.render_syllable("krait").unwrap();
//! assert!(svg.as_str().starts_with("<svg"));
//! ```

pub mod alphabet;
pub mod batch;
pub mod canvas;
pub mod config;
pub mod engine;
pub mod error;
pub mod layout;
pub mod render;
pub mod syllable;
pub mod upload;

pub use canvas::CanvasConfig;
pub use engine::Engine;
pub use error::{ZasoError, ZasoResult};
pub use render::SvgDocument;
pub use syllable::Syllable;
