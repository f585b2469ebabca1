//! Layout planning: syllable → ordered list of (letter, grid cell) pairs.
//!
//! The planner looks the syllable's slot-length shape up in the declarative
//! pattern table ([`patterns`]), picks the variant matching the nucleus
//! orientation, and assigns each pattern slot its letter. Plans are computed
//! fresh per syllable and never cached.

pub mod patterns;

use crate::alphabet::{self, AMBIGUOUS_VOWEL, Letter, LetterCategory, VowelOrientation};
use crate::canvas::Cell;
use crate::error::LayoutError;
use crate::syllable::Syllable;

pub use patterns::{Pattern, Placement, Slot};

/// One glyph to draw: a catalog symbol, its grid cell, and whether the
/// alternate path set disambiguates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedGlyph {
    pub symbol: char,
    pub cell: Cell,
    pub use_alt: bool,
}

/// The full layout for one syllable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPlan {
    /// Pattern name, e.g. `"CVC"`.
    pub pattern: &'static str,
    /// One entry per glyph, in pattern order.
    pub glyphs: Vec<PlannedGlyph>,
}

fn resolve(symbols: &[char]) -> Result<Vec<&'static Letter>, LayoutError> {
    symbols
        .iter()
        .map(|&symbol| alphabet::lookup(symbol).ok_or(LayoutError::UnknownLetter { symbol }))
        .collect()
}

/// Use the alternate path set for one nucleus vowel instance.
///
/// True only for the reserved ambiguity-prone vowel, in a two-vowel nucleus
/// that contains no vowel of the orthogonal (split-vertical) orientation.
fn use_alt_paths(letter: &Letter, nucleus: &[&Letter]) -> bool {
    if letter.alt_paths.is_none() || letter.symbol != AMBIGUOUS_VOWEL {
        return false;
    }
    if nucleus.len() < 2 {
        return false;
    }
    !nucleus.iter().any(|vowel| {
        matches!(
            vowel.category,
            LetterCategory::Vowel(VowelOrientation::SplitVertical)
        )
    })
}

/// Plan the layout for a parsed syllable.
///
/// Fails with [`LayoutError::UnsupportedStructure`] when the shape has no
/// tiling, [`LayoutError::UnknownOrientation`] when the nucleus leads with a
/// non-vowel, and [`LayoutError::UnknownLetter`] when a symbol is missing from
/// the catalog.
pub fn plan(syllable: &Syllable) -> Result<LayoutPlan, LayoutError> {
    let onset: Vec<char> = syllable.onset.chars().collect();
    let nucleus: Vec<char> = syllable.nucleus.chars().collect();
    let coda: Vec<char> = syllable.coda.chars().collect();
    let shape = (onset.len(), nucleus.len(), coda.len());

    let onset_letters = resolve(&onset)?;
    let nucleus_letters = resolve(&nucleus)?;
    let coda_letters = resolve(&coda)?;

    let orientation = match nucleus_letters.first() {
        None => None,
        Some(first) => Some(
            first
                .orientation()
                .ok_or(LayoutError::UnknownOrientation { symbol: first.symbol })?,
        ),
    };

    let pattern = patterns::lookup(shape, orientation).ok_or(LayoutError::UnsupportedStructure {
        onset: shape.0,
        nucleus: shape.1,
        coda: shape.2,
    })?;

    tracing::debug!(
        pattern = pattern.name,
        syllable = %syllable,
        ?orientation,
        "selected layout pattern"
    );

    let glyphs = pattern
        .placements
        .iter()
        .map(|placement| {
            // The table is statically consistent with the shape it is keyed
            // under (checked in patterns::tests), so slot indices are in range.
            let (letter, use_alt) = match placement.slot {
                Slot::Onset(i) => (onset_letters[i], false),
                Slot::Coda(i) => (coda_letters[i], false),
                Slot::Nucleus(i) => {
                    let letter = nucleus_letters[i];
                    (letter, use_alt_paths(letter, &nucleus_letters))
                }
            };
            PlannedGlyph {
                symbol: letter.symbol,
                cell: placement.cell,
                use_alt,
            }
        })
        .collect();

    Ok(LayoutPlan {
        pattern: pattern.name,
        glyphs,
    })
}
