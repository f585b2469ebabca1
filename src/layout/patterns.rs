//! The tiling pattern table: one fixed tiling of the 6×6 unit grid for every
//! supported `(|onset|, |nucleus|, |coda|)` length combination, in two variants
//! keyed by the nucleus orientation.
//!
//! The table is pure data; the planner is the single interpreter that maps
//! slots to letters. Shared principles across all entries:
//!
//! - consonant-only syllables are 1 or 2 equal full-height columns;
//! - a nucleus splits the square into a consonant region and a vowel band,
//!   bottom strip for split-horizontal vowels, right strip for split-vertical;
//! - a 2-letter onset or coda halves its region along the axis perpendicular
//!   to the outer split;
//! - a 2-letter nucleus halves the vowel band along the band's own length.

use crate::alphabet::VowelOrientation;
use crate::canvas::Cell;

/// Which syllable slot a pattern cell is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Onset(usize),
    Nucleus(usize),
    Coda(usize),
}

/// One (slot, cell) assignment within a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub slot: Slot,
    pub cell: Cell,
}

/// A named tiling: an ordered list of placements covering the 6×6 grid.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub placements: &'static [Placement],
}

const fn on(i: usize, x: u8, y: u8, w: u8, h: u8) -> Placement {
    Placement {
        slot: Slot::Onset(i),
        cell: Cell { x, y, w, h },
    }
}

const fn nu(i: usize, x: u8, y: u8, w: u8, h: u8) -> Placement {
    Placement {
        slot: Slot::Nucleus(i),
        cell: Cell { x, y, w, h },
    }
}

const fn co(i: usize, x: u8, y: u8, w: u8, h: u8) -> Placement {
    Placement {
        slot: Slot::Coda(i),
        cell: Cell { x, y, w, h },
    }
}

// -- Consonant-only patterns (orientation-independent) --

static C: Pattern = Pattern {
    name: "C",
    placements: &[on(0, 0, 0, 6, 6)],
};
static CC: Pattern = Pattern {
    name: "CC",
    placements: &[on(0, 0, 0, 3, 6), on(1, 3, 0, 3, 6)],
};

// -- Single-vowel nucleus --

static V: Pattern = Pattern {
    name: "V",
    placements: &[nu(0, 0, 0, 6, 6)],
};
static CV_H: Pattern = Pattern {
    name: "CV",
    placements: &[on(0, 0, 0, 6, 4), nu(0, 0, 4, 6, 2)],
};
static CV_V: Pattern = Pattern {
    name: "CV",
    placements: &[on(0, 0, 0, 4, 6), nu(0, 4, 0, 2, 6)],
};
static CCV_H: Pattern = Pattern {
    name: "CCV",
    placements: &[on(0, 0, 0, 3, 4), on(1, 3, 0, 3, 4), nu(0, 0, 4, 6, 2)],
};
static CCV_V: Pattern = Pattern {
    name: "CCV",
    placements: &[on(0, 0, 0, 4, 3), on(1, 0, 3, 4, 3), nu(0, 4, 0, 2, 6)],
};
static VC_H: Pattern = Pattern {
    name: "VC",
    placements: &[nu(0, 0, 0, 6, 2), co(0, 0, 2, 6, 4)],
};
static VC_V: Pattern = Pattern {
    name: "VC",
    placements: &[nu(0, 0, 0, 2, 6), co(0, 2, 0, 4, 6)],
};
static CVC_H: Pattern = Pattern {
    name: "CVC",
    placements: &[on(0, 0, 0, 4, 4), nu(0, 0, 4, 4, 2), co(0, 4, 0, 2, 6)],
};
static CVC_V: Pattern = Pattern {
    name: "CVC",
    placements: &[on(0, 0, 0, 4, 4), nu(0, 4, 0, 2, 4), co(0, 0, 4, 6, 2)],
};
static CCVC_H: Pattern = Pattern {
    name: "CCVC",
    placements: &[
        on(0, 0, 0, 2, 4),
        on(1, 2, 0, 2, 4),
        nu(0, 0, 4, 4, 2),
        co(0, 4, 0, 2, 6),
    ],
};
static CCVC_V: Pattern = Pattern {
    name: "CCVC",
    placements: &[
        on(0, 0, 0, 4, 2),
        on(1, 0, 2, 4, 2),
        nu(0, 4, 0, 2, 4),
        co(0, 0, 4, 6, 2),
    ],
};
static VCC_H: Pattern = Pattern {
    name: "VCC",
    placements: &[nu(0, 0, 0, 2, 6), co(0, 2, 0, 4, 3), co(1, 2, 3, 4, 3)],
};
static VCC_V: Pattern = Pattern {
    name: "VCC",
    placements: &[nu(0, 0, 0, 6, 2), co(0, 0, 2, 3, 4), co(1, 3, 2, 3, 4)],
};
static CVCC_H: Pattern = Pattern {
    name: "CVCC",
    placements: &[
        on(0, 0, 0, 4, 4),
        nu(0, 0, 4, 4, 2),
        co(0, 4, 0, 2, 3),
        co(1, 4, 3, 2, 3),
    ],
};
static CVCC_V: Pattern = Pattern {
    name: "CVCC",
    placements: &[
        on(0, 0, 0, 4, 4),
        nu(0, 4, 0, 2, 4),
        co(0, 0, 4, 3, 2),
        co(1, 3, 4, 3, 2),
    ],
};
static CCVCC_H: Pattern = Pattern {
    name: "CCVCC",
    placements: &[
        on(0, 0, 0, 2, 4),
        on(1, 2, 0, 2, 4),
        nu(0, 0, 4, 4, 2),
        co(0, 4, 0, 2, 3),
        co(1, 4, 3, 2, 3),
    ],
};
static CCVCC_V: Pattern = Pattern {
    name: "CCVCC",
    placements: &[
        on(0, 0, 0, 4, 2),
        on(1, 0, 2, 4, 2),
        nu(0, 4, 0, 2, 4),
        co(0, 0, 4, 3, 2),
        co(1, 3, 4, 3, 2),
    ],
};

// -- Two-vowel nucleus --

static VV_H: Pattern = Pattern {
    name: "VV",
    placements: &[nu(0, 0, 0, 3, 6), nu(1, 3, 0, 3, 6)],
};
static VV_V: Pattern = Pattern {
    name: "VV",
    placements: &[nu(0, 0, 0, 6, 3), nu(1, 0, 3, 6, 3)],
};
static CVV_H: Pattern = Pattern {
    name: "CVV",
    placements: &[on(0, 0, 0, 6, 4), nu(0, 0, 4, 3, 2), nu(1, 3, 4, 3, 2)],
};
static CVV_V: Pattern = Pattern {
    name: "CVV",
    placements: &[on(0, 0, 0, 4, 6), nu(0, 4, 0, 2, 3), nu(1, 4, 3, 2, 3)],
};
static CCVV_H: Pattern = Pattern {
    name: "CCVV",
    placements: &[
        on(0, 0, 0, 3, 4),
        on(1, 3, 0, 3, 4),
        nu(0, 0, 4, 3, 2),
        nu(1, 3, 4, 3, 2),
    ],
};
static CCVV_V: Pattern = Pattern {
    name: "CCVV",
    placements: &[
        on(0, 0, 0, 4, 3),
        on(1, 0, 3, 4, 3),
        nu(0, 4, 0, 2, 3),
        nu(1, 4, 3, 2, 3),
    ],
};
static VVC_H: Pattern = Pattern {
    name: "VVC",
    placements: &[nu(0, 0, 0, 2, 3), nu(1, 0, 3, 2, 3), co(0, 2, 0, 4, 6)],
};
static VVC_V: Pattern = Pattern {
    name: "VVC",
    placements: &[nu(0, 0, 0, 3, 2), nu(1, 3, 0, 3, 2), co(0, 0, 2, 6, 4)],
};
static CVVC_H: Pattern = Pattern {
    name: "CVVC",
    placements: &[
        on(0, 0, 0, 4, 4),
        nu(0, 0, 4, 2, 2),
        nu(1, 2, 4, 2, 2),
        co(0, 4, 0, 2, 6),
    ],
};
static CVVC_V: Pattern = Pattern {
    name: "CVVC",
    placements: &[
        on(0, 0, 0, 4, 4),
        nu(0, 4, 0, 2, 2),
        nu(1, 4, 2, 2, 2),
        co(0, 0, 4, 6, 2),
    ],
};
static CCVVC_H: Pattern = Pattern {
    name: "CCVVC",
    placements: &[
        on(0, 0, 0, 2, 4),
        on(1, 2, 0, 2, 4),
        nu(0, 0, 4, 2, 2),
        nu(1, 2, 4, 2, 2),
        co(0, 4, 0, 2, 6),
    ],
};
static CCVVC_V: Pattern = Pattern {
    name: "CCVVC",
    placements: &[
        on(0, 0, 0, 4, 2),
        on(1, 0, 2, 4, 2),
        nu(0, 4, 0, 2, 2),
        nu(1, 4, 2, 2, 2),
        co(0, 0, 4, 6, 2),
    ],
};
static VVCC_H: Pattern = Pattern {
    name: "VVCC",
    placements: &[
        nu(0, 0, 0, 2, 3),
        nu(1, 0, 3, 2, 3),
        co(0, 2, 0, 4, 3),
        co(1, 2, 3, 4, 3),
    ],
};
static VVCC_V: Pattern = Pattern {
    name: "VVCC",
    placements: &[
        nu(0, 0, 0, 3, 2),
        nu(1, 3, 0, 3, 2),
        co(0, 0, 2, 3, 4),
        co(1, 3, 2, 3, 4),
    ],
};
static CVVCC_H: Pattern = Pattern {
    name: "CVVCC",
    placements: &[
        on(0, 0, 0, 4, 4),
        nu(0, 0, 4, 2, 2),
        nu(1, 2, 4, 2, 2),
        co(0, 4, 0, 2, 3),
        co(1, 4, 3, 2, 3),
    ],
};
static CVVCC_V: Pattern = Pattern {
    name: "CVVCC",
    placements: &[
        on(0, 0, 0, 4, 4),
        nu(0, 4, 0, 2, 2),
        nu(1, 4, 2, 2, 2),
        co(0, 0, 4, 3, 2),
        co(1, 3, 4, 3, 2),
    ],
};
static CCVVCC_H: Pattern = Pattern {
    name: "CCVVCC",
    placements: &[
        on(0, 0, 0, 2, 4),
        on(1, 2, 0, 2, 4),
        nu(0, 0, 4, 2, 2),
        nu(1, 2, 4, 2, 2),
        co(0, 4, 0, 2, 3),
        co(1, 4, 3, 2, 3),
    ],
};
static CCVVCC_V: Pattern = Pattern {
    name: "CCVVCC",
    placements: &[
        on(0, 0, 0, 4, 2),
        on(1, 0, 2, 4, 2),
        nu(0, 4, 0, 2, 2),
        nu(1, 4, 2, 2, 2),
        co(0, 0, 4, 3, 2),
        co(1, 3, 4, 3, 2),
    ],
};

/// The 20 supported slot-length combinations.
pub const SUPPORTED_SHAPES: [(usize, usize, usize); 20] = [
    (1, 0, 0),
    (2, 0, 0),
    (0, 1, 0),
    (1, 1, 0),
    (2, 1, 0),
    (0, 1, 1),
    (1, 1, 1),
    (2, 1, 1),
    (0, 1, 2),
    (1, 1, 2),
    (2, 1, 2),
    (0, 2, 0),
    (1, 2, 0),
    (2, 2, 0),
    (0, 2, 1),
    (1, 2, 1),
    (2, 2, 1),
    (0, 2, 2),
    (1, 2, 2),
    (2, 2, 2),
];

/// Look up the pattern for a slot-length shape and nucleus orientation.
///
/// Shapes without a nucleus ignore the orientation. Returns `None` for the
/// shapes no tiling is defined for (including everything the grammar cannot
/// produce).
pub fn lookup(
    shape: (usize, usize, usize),
    orientation: Option<VowelOrientation>,
) -> Option<&'static Pattern> {
    use VowelOrientation::{SplitHorizontal as SH, SplitVertical as SV};

    let pattern = match (shape, orientation) {
        ((1, 0, 0), _) => &C,
        ((2, 0, 0), _) => &CC,
        ((0, 1, 0), Some(_)) => &V,
        ((1, 1, 0), Some(SH)) => &CV_H,
        ((1, 1, 0), Some(SV)) => &CV_V,
        ((2, 1, 0), Some(SH)) => &CCV_H,
        ((2, 1, 0), Some(SV)) => &CCV_V,
        ((0, 1, 1), Some(SH)) => &VC_H,
        ((0, 1, 1), Some(SV)) => &VC_V,
        ((1, 1, 1), Some(SH)) => &CVC_H,
        ((1, 1, 1), Some(SV)) => &CVC_V,
        ((2, 1, 1), Some(SH)) => &CCVC_H,
        ((2, 1, 1), Some(SV)) => &CCVC_V,
        ((0, 1, 2), Some(SH)) => &VCC_H,
        ((0, 1, 2), Some(SV)) => &VCC_V,
        ((1, 1, 2), Some(SH)) => &CVCC_H,
        ((1, 1, 2), Some(SV)) => &CVCC_V,
        ((2, 1, 2), Some(SH)) => &CCVCC_H,
        ((2, 1, 2), Some(SV)) => &CCVCC_V,
        ((0, 2, 0), Some(SH)) => &VV_H,
        ((0, 2, 0), Some(SV)) => &VV_V,
        ((1, 2, 0), Some(SH)) => &CVV_H,
        ((1, 2, 0), Some(SV)) => &CVV_V,
        ((2, 2, 0), Some(SH)) => &CCVV_H,
        ((2, 2, 0), Some(SV)) => &CCVV_V,
        ((0, 2, 1), Some(SH)) => &VVC_H,
        ((0, 2, 1), Some(SV)) => &VVC_V,
        ((1, 2, 1), Some(SH)) => &CVVC_H,
        ((1, 2, 1), Some(SV)) => &CVVC_V,
        ((2, 2, 1), Some(SH)) => &CCVVC_H,
        ((2, 2, 1), Some(SV)) => &CCVVC_V,
        ((0, 2, 2), Some(SH)) => &VVCC_H,
        ((0, 2, 2), Some(SV)) => &VVCC_V,
        ((1, 2, 2), Some(SH)) => &CVVCC_H,
        ((1, 2, 2), Some(SV)) => &CVVCC_V,
        ((2, 2, 2), Some(SH)) => &CCVVCC_H,
        ((2, 2, 2), Some(SV)) => &CCVVCC_V,
        _ => return None,
    };
    Some(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: usize = 6;

    fn occupancy(pattern: &Pattern) -> [[u8; GRID]; GRID] {
        let mut grid = [[0u8; GRID]; GRID];
        for placement in pattern.placements {
            let cell = placement.cell;
            assert!(
                (cell.x + cell.w) as usize <= GRID && (cell.y + cell.h) as usize <= GRID,
                "{}: cell {:?} leaves the grid",
                pattern.name,
                cell
            );
            for col in cell.x..cell.x + cell.w {
                for row in cell.y..cell.y + cell.h {
                    grid[col as usize][row as usize] += 1;
                }
            }
        }
        grid
    }

    #[test]
    fn every_pattern_tiles_the_grid_exactly() {
        for shape in SUPPORTED_SHAPES {
            for orientation in [
                VowelOrientation::SplitHorizontal,
                VowelOrientation::SplitVertical,
            ] {
                let pattern = lookup(shape, Some(orientation))
                    .unwrap_or_else(|| panic!("missing pattern for {shape:?}"));
                let grid = occupancy(pattern);
                for (col, column) in grid.iter().enumerate() {
                    for (row, count) in column.iter().enumerate() {
                        assert_eq!(
                            *count, 1,
                            "{} {orientation:?}: unit ({col},{row}) covered {count} times",
                            pattern.name
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn placement_counts_match_shapes() {
        for (onset, nucleus, coda) in SUPPORTED_SHAPES {
            for orientation in [
                VowelOrientation::SplitHorizontal,
                VowelOrientation::SplitVertical,
            ] {
                let pattern = lookup((onset, nucleus, coda), Some(orientation)).unwrap();
                assert_eq!(
                    pattern.placements.len(),
                    onset + nucleus + coda,
                    "{}",
                    pattern.name
                );
                // Every slot index must stay within its slot length.
                for placement in pattern.placements {
                    let ok = match placement.slot {
                        Slot::Onset(i) => i < onset,
                        Slot::Nucleus(i) => i < nucleus,
                        Slot::Coda(i) => i < coda,
                    };
                    assert!(ok, "{}: slot {:?} out of shape", pattern.name, placement.slot);
                }
            }
        }
    }

    #[test]
    fn unreachable_shapes_have_no_pattern() {
        use VowelOrientation::SplitHorizontal;
        assert!(lookup((0, 0, 0), None).is_none());
        assert!(lookup((2, 0, 1), None).is_none());
        assert!(lookup((2, 0, 2), None).is_none());
        assert!(lookup((3, 1, 0), Some(SplitHorizontal)).is_none());
        // A nucleus without an orientation has no tiling either.
        assert!(lookup((1, 1, 0), None).is_none());
    }
}
