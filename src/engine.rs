//! The rendering engine: parse → plan → render, behind one entry point.

use crate::canvas::CanvasConfig;
use crate::error::ZasoResult;
use crate::layout::{self, LayoutPlan};
use crate::render::{self, SvgDocument};
use crate::syllable::Syllable;

/// Renders syllable glyphs for one canvas profile.
///
/// The engine owns no mutable state; rendering is a pure function of the
/// token, the static letter catalog, and the profile, so one engine may be
/// shared freely across threads.
#[derive(Debug, Clone)]
pub struct Engine {
    config: CanvasConfig,
}

impl Engine {
    /// Create an engine after validating the canvas profile.
    pub fn new(config: CanvasConfig) -> ZasoResult<Self> {
        config.validate()?;
        tracing::info!(
            size = config.size,
            padding = config.padding,
            gap = config.gap,
            slice = config.slice,
            "initializing zasocaravita renderer"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Plan the layout for a token without rendering it.
    pub fn plan_syllable(&self, token: &str) -> ZasoResult<LayoutPlan> {
        let syllable = Syllable::parse(token)?;
        Ok(layout::plan(&syllable)?)
    }

    /// Render one token to an SVG document.
    ///
    /// The single operation the core exposes: any failure is specific to this
    /// token and leaves the engine fully usable for the next one.
    pub fn render_syllable(&self, token: &str) -> ZasoResult<SvgDocument> {
        let syllable = Syllable::parse(token)?;
        let plan = layout::plan(&syllable)?;
        let document = render::render(&plan, &self.config)?;
        tracing::debug!(token, pattern = plan.pattern, "rendered syllable");
        Ok(document)
    }
}

impl Default for Engine {
    fn default() -> Self {
        // The default profile is statically valid.
        Self {
            config: CanvasConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SyllableError, ZasoError};

    #[test]
    fn renders_a_valid_token() {
        let engine = Engine::default();
        let doc = engine.render_syllable("ta").unwrap();
        assert!(doc.as_str().contains("<polyline"));
    }

    #[test]
    fn invalid_token_fails_without_poisoning_the_engine() {
        let engine = Engine::default();
        assert!(matches!(
            engine.render_syllable("stra"),
            Err(ZasoError::Syllable(SyllableError::InvalidSyllable { .. }))
        ));
        assert!(engine.render_syllable("ta").is_ok());
    }

    #[test]
    fn rejects_invalid_canvas_profiles() {
        let config = CanvasConfig {
            size: 1.0,
            ..Default::default()
        };
        assert!(Engine::new(config).is_err());
    }
}
