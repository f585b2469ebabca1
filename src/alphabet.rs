//! Fixed letter catalog: 17 consonants and 6 vowels of the Zasocaravita alphabet.
//!
//! Each letter is a set of polylines in the unit square; the renderer scales
//! them into whatever grid cell the layout planner assigns. The catalog is the
//! single source of truth for the alphabet; the syllable grammar is derived
//! from it, so the parser and the planner can never disagree about which
//! symbols exist.

use std::sync::OnceLock;

/// A point in the unit square.
pub type Point = [f64; 2];

/// An open stroke through two or more unit-square points.
pub type Polyline = Vec<Point>;

/// Which axis a vowel splits the syllable square along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VowelOrientation {
    /// The vowel band runs along the horizontal edge (bottom strip, full width).
    SplitHorizontal,
    /// The vowel band runs along the vertical edge (right strip, full height).
    SplitVertical,
}

/// Category of a catalog letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterCategory {
    Consonant,
    Vowel(VowelOrientation),
}

/// A letter of the alphabet.
#[derive(Debug, Clone)]
pub struct Letter {
    /// Single lowercase symbol.
    pub symbol: char,
    /// Consonant or vowel (with split orientation).
    pub category: LetterCategory,
    /// Primary stroke set, unit-square coordinates.
    pub paths: Vec<Polyline>,
    /// Substitute stroke set, present only on the ambiguity-prone vowel.
    pub alt_paths: Option<Vec<Polyline>>,
}

impl Letter {
    /// Vowel orientation, or `None` for consonants.
    pub fn orientation(&self) -> Option<VowelOrientation> {
        match self.category {
            LetterCategory::Consonant => None,
            LetterCategory::Vowel(orientation) => Some(orientation),
        }
    }
}

/// The one vowel whose primary stroke collides with a neighbouring half-cell
/// vowel in a two-vowel nucleus, and which therefore carries alternate paths.
pub const AMBIGUOUS_VOWEL: char = 'i';

const H: f64 = 0.5;
const HI: f64 = 2.0 / 3.0;
// Mirror of HI about the centre; kept as 1 − HI so the two marks land
// symmetrically even under floating-point rounding.
const LO: f64 = 1.0 - HI;

static CATALOG: OnceLock<Vec<Letter>> = OnceLock::new();

fn consonant(symbol: char, paths: Vec<Polyline>) -> Letter {
    Letter {
        symbol,
        category: LetterCategory::Consonant,
        paths,
        alt_paths: None,
    }
}

fn vowel(symbol: char, orientation: VowelOrientation, paths: Vec<Polyline>) -> Letter {
    Letter {
        symbol,
        category: LetterCategory::Vowel(orientation),
        paths,
        alt_paths: None,
    }
}

fn build_catalog() -> Vec<Letter> {
    use VowelOrientation::{SplitHorizontal, SplitVertical};

    vec![
        // -- Consonants: single corner stroke --
        consonant('g', vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]]),
        consonant('n', vec![vec![[0.0, 0.0], [0.0, 1.0], [1.0, 1.0]]]),
        consonant('m', vec![vec![[1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]]),
        consonant('s', vec![vec![[1.0, 0.0], [0.0, 0.0], [0.0, 1.0]]]),
        // -- Consonants: corner stroke plus one tick --
        consonant(
            'd',
            vec![
                vec![[0.0, 0.0], [0.0, 1.0], [1.0, 1.0]],
                vec![[1.0, 0.0], [1.0, LO]],
            ],
        ),
        consonant(
            'v',
            vec![
                vec![[1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
                vec![[0.0, 0.0], [0.0, LO]],
            ],
        ),
        consonant(
            'z',
            vec![
                vec![[1.0, 0.0], [0.0, 0.0], [0.0, 1.0]],
                vec![[1.0, 1.0], [1.0, HI]],
            ],
        ),
        consonant(
            'l',
            vec![
                vec![[0.0, 0.0], [0.0, 1.0], [1.0, 1.0]],
                vec![[1.0, 0.0], [HI, 0.0]],
            ],
        ),
        consonant(
            'x',
            vec![
                vec![[1.0, 0.0], [0.0, 0.0], [0.0, 1.0]],
                vec![[1.0, 1.0], [HI, 1.0]],
            ],
        ),
        // -- Consonants: corner stroke plus two ticks --
        consonant(
            'k',
            vec![
                vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]],
                vec![[0.0, HI], [0.0, 1.0]],
                vec![[H, HI], [H, 1.0]],
            ],
        ),
        consonant(
            't',
            vec![
                vec![[0.0, 0.0], [0.0, 1.0], [1.0, 1.0]],
                vec![[1.0, 0.0], [1.0, LO]],
                vec![[H, LO], [H, 0.0]],
            ],
        ),
        consonant(
            'q',
            vec![
                vec![[1.0, 0.0], [0.0, 0.0], [0.0, 1.0]],
                vec![[1.0, 1.0], [1.0, HI]],
                vec![[H, HI], [H, 1.0]],
            ],
        ),
        consonant(
            'p',
            vec![
                vec![[1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
                vec![[0.0, 0.0], [0.0, LO]],
                vec![[H, LO], [H, 0.0]],
            ],
        ),
        // -- Consonants: folded strokes --
        consonant(
            'h',
            vec![vec![
                [0.0, 0.0],
                [0.0, 1.0],
                [H, 1.0],
                [H, 0.0],
                [1.0, 0.0],
                [1.0, 1.0],
            ]],
        ),
        consonant(
            'r',
            vec![vec![
                [0.0, 0.0],
                [1.0, 0.0],
                [1.0, H],
                [0.0, H],
                [0.0, 1.0],
                [1.0, 1.0],
            ]],
        ),
        consonant(
            'f',
            vec![vec![[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]],
        ),
        consonant(
            'c',
            vec![vec![[1.0, 0.0], [0.0, 0.0], [0.0, 1.0], [1.0, 1.0]]],
        ),
        // -- Vowels --
        vowel(
            'a',
            SplitHorizontal,
            vec![vec![[1.0, 0.0], [1.0, 1.0]], vec![[0.0, H], [1.0, H]]],
        ),
        vowel(
            'y',
            SplitHorizontal,
            vec![vec![[0.0, 0.0], [0.0, 1.0]], vec![[0.0, H], [1.0, H]]],
        ),
        vowel(
            'o',
            SplitVertical,
            vec![vec![[0.0, 0.0], [1.0, 0.0]], vec![[H, 0.0], [H, 1.0]]],
        ),
        vowel(
            'u',
            SplitVertical,
            vec![vec![[0.0, 1.0], [1.0, 1.0]], vec![[H, 0.0], [H, 1.0]]],
        ),
        Letter {
            symbol: 'i',
            category: LetterCategory::Vowel(SplitHorizontal),
            // A lone centred stroke; indistinguishable from a neighbouring 'i'
            // across the half-cell boundary, hence the alternate set.
            paths: vec![vec![[0.0, H], [1.0, H]]],
            alt_paths: Some(vec![vec![[H, 0.0], [H, 1.0]]]),
        },
        vowel(
            'e',
            SplitHorizontal,
            vec![vec![[0.0, 0.0], [1.0, 0.0]], vec![[0.0, 1.0], [1.0, 1.0]]],
        ),
    ]
}

/// Get the full letter catalog.
pub fn all_letters() -> &'static [Letter] {
    CATALOG.get_or_init(build_catalog)
}

/// Look up a letter by symbol. Returns `None` for symbols outside the alphabet.
pub fn lookup(symbol: char) -> Option<&'static Letter> {
    all_letters().iter().find(|l| l.symbol == symbol)
}

/// All consonant symbols, in catalog order.
pub fn consonant_symbols() -> String {
    all_letters()
        .iter()
        .filter(|l| l.category == LetterCategory::Consonant)
        .map(|l| l.symbol)
        .collect()
}

/// All vowel symbols, in catalog order.
pub fn vowel_symbols() -> String {
    all_letters()
        .iter()
        .filter(|l| matches!(l.category, LetterCategory::Vowel(_)))
        .map(|l| l.symbol)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_23_letters() {
        assert_eq!(all_letters().len(), 23);
        assert_eq!(consonant_symbols().len(), 17);
        assert_eq!(vowel_symbols().len(), 6);
    }

    #[test]
    fn lookup_finds_every_symbol_once() {
        for letter in all_letters() {
            let found = lookup(letter.symbol).expect("symbol should resolve");
            assert_eq!(found.symbol, letter.symbol);
        }
        let mut symbols: Vec<char> = all_letters().iter().map(|l| l.symbol).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), all_letters().len());
    }

    #[test]
    fn lookup_unknown_returns_none() {
        assert!(lookup('b').is_none());
        assert!(lookup('A').is_none());
        assert!(lookup('7').is_none());
    }

    #[test]
    fn only_the_ambiguous_vowel_has_alt_paths() {
        for letter in all_letters() {
            if letter.symbol == AMBIGUOUS_VOWEL {
                assert!(letter.alt_paths.is_some());
            } else {
                assert!(letter.alt_paths.is_none(), "unexpected alt on {}", letter.symbol);
            }
        }
    }

    #[test]
    fn vowel_orientations() {
        use VowelOrientation::{SplitHorizontal, SplitVertical};
        for (symbol, expected) in [
            ('a', SplitHorizontal),
            ('y', SplitHorizontal),
            ('i', SplitHorizontal),
            ('e', SplitHorizontal),
            ('o', SplitVertical),
            ('u', SplitVertical),
        ] {
            let letter = lookup(symbol).unwrap();
            assert_eq!(letter.orientation(), Some(expected), "vowel {symbol}");
        }
        assert_eq!(lookup('t').unwrap().orientation(), None);
    }

    #[test]
    fn paths_stay_inside_the_unit_square() {
        for letter in all_letters() {
            let sets = std::iter::once(&letter.paths).chain(letter.alt_paths.iter());
            for path in sets.flatten() {
                assert!(path.len() >= 2, "degenerate path on {}", letter.symbol);
                for [x, y] in path {
                    assert!((0.0..=1.0).contains(x), "{} x={x}", letter.symbol);
                    assert!((0.0..=1.0).contains(y), "{} y={y}", letter.symbol);
                }
            }
        }
    }
}
