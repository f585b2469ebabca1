//! End-to-end tests: token in, SVG out, across every supported syllable shape.

use zasocaravita::batch::{self, OutputConfig};
use zasocaravita::canvas::CanvasConfig;
use zasocaravita::engine::Engine;
use zasocaravita::error::ZasoError;
use zasocaravita::layout;
use zasocaravita::syllable::Syllable;

/// One representative token per supported shape and nucleus orientation.
/// Horizontal-splitting nuclei use 'a'/'ai', vertical ones 'o'/'ou'.
const SHAPE_TOKENS: [&str; 38] = [
    "t", "tk", // consonant-only
    "a", "o", "ae", "ou", // bare nuclei
    "an", "on", "ain", "oun", // nucleus + coda
    "ant", "ont", "aint", "ount", // nucleus + double coda
    "ta", "to", "tai", "tou", // onset + nucleus
    "tan", "ton", "tain", "toun", // CVC
    "tant", "tont", "taint", "tount", // CVCC
    "tka", "tko", "tkai", "tkou", // CCV
    "tkan", "tkon", "tkain", "tkoun", // CCVC
    "tkant", "tkont", "tkaint", "tkount", // CCVCC
];

#[test]
fn every_supported_shape_renders() {
    let engine = Engine::default();
    for token in SHAPE_TOKENS {
        let document = engine
            .render_syllable(token)
            .unwrap_or_else(|error| panic!("{token}: {error}"));
        assert!(document.as_str().starts_with("<svg"), "{token}");
        assert!(document.as_str().contains("<polyline"), "{token}");
    }
}

#[test]
fn every_plan_tiles_the_drawable_square() {
    // A profile with no gap or padding makes the tiling exact in pixels:
    // the cell rectangles must partition the whole 12x12 canvas.
    let config = CanvasConfig {
        size: 12.0,
        padding: 0.0,
        gap: 0.0,
        slice: 6,
        ..Default::default()
    };
    config.validate().unwrap();

    for token in SHAPE_TOKENS {
        let plan = layout::plan(&Syllable::parse(token).unwrap()).unwrap();
        let rects: Vec<_> = plan
            .glyphs
            .iter()
            .map(|glyph| config.cell_rect(glyph.cell))
            .collect();

        let mut area = 0.0;
        for rect in &rects {
            assert!(rect.x >= 0.0 && rect.y >= 0.0, "{token}");
            assert!(rect.x + rect.width <= 12.0, "{token}");
            assert!(rect.y + rect.height <= 12.0, "{token}");
            area += rect.width * rect.height;
        }
        assert!((area - 144.0).abs() < 1e-9, "{token}: area {area}");

        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                let disjoint = a.x + a.width <= b.x
                    || b.x + b.width <= a.x
                    || a.y + a.height <= b.y
                    || b.y + b.height <= a.y;
                assert!(disjoint, "{token}: overlapping cells");
            }
        }
    }
}

#[test]
fn gapped_profile_accounts_for_every_gap_strip() {
    // size 21, padding 2, gap 1, slice 6 gives a unit of 2, so both the unit
    // and the gap terms of the span formula contribute. The cells plus the
    // gap strips between them must account for the whole 17x17 drawable area.
    //
    // A cell spanning w units is w*u + (w-1)*g wide, so for a plan with cells
    // (w_i, h_i) the uncovered gap area works out to
    //   g*(u+g) * (sum(w_i + h_i) - 2*slice) - g^2 * (cells - 1).
    let config = CanvasConfig {
        size: 21.0,
        padding: 2.0,
        gap: 1.0,
        slice: 6,
        ..Default::default()
    };
    config.validate().unwrap();
    let (unit, gap) = (config.unit(), config.gap);
    assert!((unit - 2.0).abs() < 1e-9);
    let drawable = 6.0 * unit + 5.0 * gap;

    for token in SHAPE_TOKENS {
        let plan = layout::plan(&Syllable::parse(token).unwrap()).unwrap();

        let mut covered = 0.0;
        let mut unit_edges = 0.0;
        for glyph in &plan.glyphs {
            let rect = config.cell_rect(glyph.cell);
            assert!(rect.x >= config.padding - 1e-9, "{token}");
            assert!(rect.x + rect.width <= config.size - config.padding + 1e-9, "{token}");
            assert!(rect.y >= config.padding - 1e-9, "{token}");
            assert!(rect.y + rect.height <= config.size - config.padding + 1e-9, "{token}");
            covered += rect.width * rect.height;
            unit_edges += f64::from(glyph.cell.w) + f64::from(glyph.cell.h);
        }

        let cells = plan.glyphs.len() as f64;
        let gap_area = gap * (unit + gap) * (unit_edges - 12.0) - gap * gap * (cells - 1.0);
        assert!(
            (covered + gap_area - drawable * drawable).abs() < 1e-9,
            "{token}: covered {covered} + gaps {gap_area} != {}",
            drawable * drawable
        );
    }
}

#[test]
fn malformed_tokens_are_rejected_up_front() {
    let engine = Engine::default();
    for token in ["", "stra", "taaa", "tantn", "Ta", "ta1", "b", "t k"] {
        assert!(
            matches!(engine.render_syllable(token), Err(ZasoError::Syllable(_))),
            "{token:?} should fail to parse"
        );
    }
}

#[test]
fn heavy_consonant_clusters_are_valid_but_unsupported() {
    // "tkt" and "tktk" parse (the grammar fills onset first) but no layout
    // pattern exists for a double onset with an empty nucleus and a coda.
    let engine = Engine::default();
    for token in ["tkt", "tktk"] {
        assert!(
            matches!(engine.render_syllable(token), Err(ZasoError::Layout(_))),
            "{token} should fail at layout"
        );
    }
}

#[test]
fn rendering_is_byte_identical_across_runs() {
    let engine = Engine::default();
    for token in ["ta", "krait", "tkount", "ii"] {
        let first = engine.render_syllable(token).unwrap();
        let second = engine.render_syllable(token).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes(), "{token}");
    }
}

#[test]
fn double_i_nucleus_switches_to_alternate_strokes() {
    let engine = Engine::default();
    // In "ii" both halves would draw the same centred line; the alternate
    // vertical strokes keep them distinguishable. A vertical-splitting
    // neighbour ("iu") already disambiguates, so no substitution happens.
    let doubled = engine.render_syllable("ii").unwrap();
    let mixed = engine.render_syllable("iu").unwrap();
    assert!(doubled.as_str().contains("points=\"4,2 4,12\""));
    assert_ne!(doubled.as_str(), mixed.as_str());

    // A single-vowel nucleus never substitutes.
    let plan = layout::plan(&Syllable::parse("ti").unwrap()).unwrap();
    assert!(plan.glyphs.iter().all(|glyph| !glyph.use_alt));
}

#[test]
fn batch_flow_writes_files_and_skips_bad_tokens() {
    let dir = tempfile::TempDir::new().unwrap();
    let engine = Engine::default();
    let output = OutputConfig {
        dir: dir.path().to_path_buf(),
        ..Default::default()
    };

    let tokens = batch::extract_tokens("ta krait\nstra, tkt an");
    let summary = batch::run(&engine, &tokens, &output).unwrap();

    assert_eq!(summary.written.len(), 3);
    assert_eq!(summary.failures.len(), 2);
    for token in ["ta", "krait", "an"] {
        let path = dir.path().join(format!("zasocaravita-{token}.svg"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("<svg"), "{token}");
        assert!(content.ends_with("</svg>"), "{token}");
    }
}
