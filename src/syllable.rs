//! Syllable parsing: token → (onset, nucleus, coda).
//!
//! The grammar is `C{0,2} V{0,2} C{0,2}`, anchored, over the consonant and
//! vowel alphabets of the catalog. The two alphabets are disjoint, so the
//! greedy capture groups decompose a matching token unambiguously.

use std::sync::OnceLock;

use regex::Regex;

use crate::alphabet;
use crate::error::SyllableError;

/// A token decomposed into its three phonological slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    /// 0–2 leading consonants.
    pub onset: String,
    /// 0–2 vowels.
    pub nucleus: String,
    /// 0–2 trailing consonants.
    pub coda: String,
}

fn grammar() -> &'static Regex {
    static GRAMMAR: OnceLock<Regex> = OnceLock::new();
    GRAMMAR.get_or_init(|| {
        let consonants = alphabet::consonant_symbols();
        let vowels = alphabet::vowel_symbols();
        // The alphabets are fixed lowercase ASCII, so the pattern is always valid.
        Regex::new(&format!(
            "^([{consonants}]{{0,2}})([{vowels}]{{0,2}})([{consonants}]{{0,2}})$"
        ))
        .expect("syllable grammar must compile")
    })
}

impl Syllable {
    /// Parse a token against the phonotactic grammar.
    ///
    /// Fails with [`SyllableError::InvalidSyllable`] when the token carries a
    /// symbol outside the alphabet, overflows a slot, or is empty.
    pub fn parse(token: &str) -> Result<Self, SyllableError> {
        let invalid = || SyllableError::InvalidSyllable {
            token: token.to_string(),
        };

        if token.is_empty() {
            return Err(invalid());
        }
        let captures = grammar().captures(token).ok_or_else(invalid)?;

        Ok(Self {
            onset: captures[1].to_string(),
            nucleus: captures[2].to_string(),
            coda: captures[3].to_string(),
        })
    }

    /// Slot lengths as `(|onset|, |nucleus|, |coda|)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (
            self.onset.chars().count(),
            self.nucleus.chars().count(),
            self.coda.chars().count(),
        )
    }

    /// The original token: concatenation of the three slots.
    pub fn token(&self) -> String {
        format!("{}{}{}", self.onset, self.nucleus, self.coda)
    }
}

impl std::fmt::Display for Syllable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.onset, self.nucleus, self.coda)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(token: &str) -> (String, String, String) {
        let s = Syllable::parse(token).unwrap();
        (s.onset, s.nucleus, s.coda)
    }

    #[test]
    fn decomposes_simple_syllables() {
        assert_eq!(parts("ta"), ("t".into(), "a".into(), "".into()));
        assert_eq!(parts("an"), ("".into(), "a".into(), "n".into()));
        assert_eq!(parts("krat"), ("kr".into(), "a".into(), "t".into()));
        assert_eq!(parts("io"), ("".into(), "io".into(), "".into()));
    }

    #[test]
    fn consonant_only_tokens_fill_the_onset_first() {
        assert_eq!(parts("t"), ("t".into(), "".into(), "".into()));
        assert_eq!(parts("tk"), ("tk".into(), "".into(), "".into()));
        // Three and four consonants spill into the coda; the planner decides
        // later whether such shapes have a tiling.
        assert_eq!(parts("tkt"), ("tk".into(), "".into(), "t".into()));
        assert_eq!(parts("tktk"), ("tk".into(), "".into(), "tk".into()));
    }

    #[test]
    fn rejects_overfull_slots() {
        assert!(Syllable::parse("stra").is_err()); // three onset consonants
        assert!(Syllable::parse("taaa").is_err()); // three vowels
        assert!(Syllable::parse("tantn").is_err()); // three coda consonants
    }

    #[test]
    fn rejects_foreign_symbols() {
        for token in ["b", "Ta", "t a", "ta1", "", "ta-", "tä"] {
            assert!(
                matches!(
                    Syllable::parse(token),
                    Err(SyllableError::InvalidSyllable { .. })
                ),
                "token {token:?} should be rejected"
            );
        }
    }

    #[test]
    fn reconcatenation_recovers_the_token() {
        for token in ["t", "tk", "a", "ta", "an", "krat", "io", "gruin", "tyst"] {
            match Syllable::parse(token) {
                Ok(syllable) => assert_eq!(syllable.token(), token),
                Err(_) => panic!("token {token:?} should parse"),
            }
        }
    }

    #[test]
    fn shape_counts_slot_lengths() {
        assert_eq!(Syllable::parse("krait").unwrap().shape(), (2, 2, 1));
        assert_eq!(Syllable::parse("a").unwrap().shape(), (0, 1, 0));
    }
}
