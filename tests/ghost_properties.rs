//! Sweeps over box sizes, image sizes and positions, checking ghost geometry
//! against the properties every browser layout must satisfy.
//!
//! The cover size is cross-checked against the scale-factor formulation used
//! by browser engines (`scale = max(box_w / img_w, box_h / img_h)`), which is
//! computed independently from the aspect-ratio branches in `zenfit`.

use zenfit::*;

const EPS: f64 = 1e-9;

const BOXES: &[(f64, f64)] = &[
    (300.0, 300.0),
    (300.0, 150.0),
    (150.0, 300.0),
    (640.0, 360.0),
    (1.0, 1.0),
    (333.3, 77.7),
];

const IMAGES: &[(f64, f64)] = &[
    (600.0, 300.0),
    (300.0, 600.0),
    (300.0, 300.0),
    (100.0, 50.0),
    (4000.0, 3000.0),
    (1.0, 1000.0),
    (123.0, 457.0),
];

const POSITIONS: &[(u8, u8)] = &[(0, 0), (50, 50), (100, 100), (0, 100), (30, 70), (99, 1)];

fn cases() -> impl Iterator<Item = (Size, Size, Position)> {
    BOXES.iter().flat_map(|&(bw, bh)| {
        IMAGES.iter().flat_map(move |&(nw, nh)| {
            POSITIONS
                .iter()
                .map(move |&(x, y)| (Size::new(bw, bh), Size::new(nw, nh), Position::new(x, y)))
        })
    })
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPS * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn deterministic() {
    for mode in FitMode::ALL {
        for (frame, natural, pos) in cases() {
            let a = compute(mode, pos, frame, natural);
            let b = compute(mode, pos, frame, natural);
            assert_eq!(a, b);
        }
    }
}

#[test]
fn fill_and_contain_never_visible() {
    for mode in [FitMode::Fill, FitMode::Contain] {
        for (frame, natural, pos) in cases() {
            assert!(!compute(mode, pos, frame, natural).visible);
        }
    }
}

#[test]
fn cover_never_under_covers() {
    for (frame, natural, pos) in cases() {
        let g = compute(FitMode::Cover, pos, frame, natural);
        assert!(g.visible);
        assert!(
            g.width >= frame.width - EPS * frame.width,
            "{frame:?} {natural:?}: width {}",
            g.width
        );
        assert!(
            g.height >= frame.height - EPS * frame.height,
            "{frame:?} {natural:?}: height {}",
            g.height
        );
        // One axis matches the box exactly.
        assert!(g.width == frame.width || g.height == frame.height);
    }
}

#[test]
fn cover_matches_scale_factor_formulation() {
    for (frame, natural, pos) in cases() {
        let g = compute(FitMode::Cover, pos, frame, natural);
        let scale = (frame.width / natural.width).max(frame.height / natural.height);
        assert!(close(g.width, natural.width * scale), "{frame:?} {natural:?}");
        assert!(close(g.height, natural.height * scale), "{frame:?} {natural:?}");
        // Aspect ratio is preserved.
        assert!(close(g.width / g.height, natural.width / natural.height));
    }
}

#[test]
fn none_is_unscaled() {
    for (frame, natural, pos) in cases() {
        let g = compute(FitMode::None, pos, frame, natural);
        assert!(g.visible);
        assert_eq!(g.width, natural.width);
        assert_eq!(g.height, natural.height);
    }
}

#[test]
fn anchor_positions() {
    for mode in [FitMode::Cover, FitMode::None] {
        for (frame, natural, _) in cases() {
            let c = compute(mode, Position::CENTER, frame, natural);
            assert_eq!(c.left, (frame.width - c.width) / 2.0);
            assert_eq!(c.top, (frame.height - c.height) / 2.0);

            let s = compute(mode, Position::new(0, 0), frame, natural);
            assert_eq!((s.left, s.top), (0.0, 0.0));

            let e = compute(mode, Position::new(100, 100), frame, natural);
            assert_eq!(e.left, frame.width - e.width);
            assert_eq!(e.top, frame.height - e.height);
        }
    }
}

#[test]
fn offsets_are_signed_not_clamped() {
    // Overflowing image at the far edge must shift left/up past the box origin.
    let g = compute(
        FitMode::None,
        Position::new(100, 100),
        Size::new(100.0, 100.0),
        Size::new(250.0, 400.0),
    );
    assert_eq!((g.left, g.top), (-150.0, -300.0));
}

#[test]
fn visible_window_stays_inside_box() {
    for mode in [FitMode::Cover, FitMode::None] {
        for (frame, natural, pos) in cases() {
            let g = compute(mode, pos, frame, natural);
            if let Some(w) = g.visible_region(frame) {
                assert!(w.x >= 0.0 && w.y >= 0.0);
                assert!(w.x + w.width <= frame.width + EPS);
                assert!(w.y + w.height <= frame.height + EPS);
            }
            let f = g.cropped_fraction(frame);
            assert!((0.0..=1.0).contains(&f));
        }
    }
}

#[test]
fn cover_crop_window_keeps_box_aspect() {
    // Whatever cover crops from the source has the box's aspect ratio (±1px rounding).
    let frame = Size::new(400.0, 300.0);
    let natural = Size::new(4000.0, 2000.0);
    for &(x, y) in POSITIONS {
        let g = compute(FitMode::Cover, Position::new(x, y), frame, natural);
        let crop = g.source_crop(frame, natural).expect("cover crops a 2:1 image in a 4:3 box");
        assert_eq!(crop.height, 2000);
        assert!((crop.width as i64 - 2667).abs() <= 1, "width {}", crop.width);
        assert!(crop.x + crop.width <= 4000);
    }
}

#[test]
fn worked_examples() {
    let frame = Size::new(300.0, 300.0);

    let g = compute(FitMode::Cover, Position::new(50, 50), frame, Size::new(600.0, 300.0));
    assert_eq!((g.width, g.height, g.left, g.top), (600.0, 300.0, -150.0, 0.0));

    let g = compute(FitMode::Cover, Position::new(0, 100), frame, Size::new(300.0, 600.0));
    assert_eq!((g.width, g.height, g.left, g.top), (300.0, 600.0, 0.0, -300.0));

    let g = compute(FitMode::None, Position::new(17, 83), frame, Size::new(100.0, 50.0));
    assert_eq!((g.width, g.height), (100.0, 50.0));
}
