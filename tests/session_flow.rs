//! End-to-end flow as a host UI drives it: boxes register, images load at
//! different times, controls change, CSS is generated, parsed back and copied.

use zenfit::clipboard::{Clipboard, ClipboardError, CopyNotice, copy_css};
use zenfit::css::CssSnippet;
use zenfit::parse::parse;
use zenfit::stage::{Change, Session};
use zenfit::{FitMode, ObjectFit, Position, Size};

const BOX: Size = Size::new(300.0, 300.0);

struct FlakyClipboard {
    calls: u32,
    last: Option<String>,
}

impl Clipboard for FlakyClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.calls += 1;
        if self.calls == 1 {
            return Err(ClipboardError::new("document not focused"));
        }
        self.last = Some(text.to_owned());
        Ok(())
    }
}

#[test]
fn slow_image_does_not_block_others() {
    let mut session = Session::new();
    let fast = session.stage_mut().add_frame(BOX);
    let slow = session.stage_mut().add_frame(Size::new(200.0, 400.0));

    let ghosts = session.apply([
        Change::Fit(FitMode::Cover),
        Change::ImageLoaded {
            id: fast,
            natural: Size::new(600.0, 300.0),
        },
    ]);
    assert_eq!(ghosts.len(), 1);
    assert_eq!(ghosts[0].id, fast);

    let ghosts = session.apply([Change::ImageLoaded {
        id: slow,
        natural: Size::new(600.0, 300.0),
    }]);
    assert_eq!(ghosts.len(), 2);
    // Same image, different box: 2:1 into 1:2 → height matches 400.
    let g = ghosts[1].ghost;
    assert_eq!((g.width, g.height), (800.0, 400.0));
    assert_eq!(g.left, -300.0);
}

#[test]
fn controls_round_trip_through_css() {
    let mut session = Session::new();
    session.apply([
        Change::Fit(FitMode::None),
        Change::PositionX(12),
        Change::PositionY(88),
    ]);
    let fit = session.fit();
    assert_eq!(fit, ObjectFit::new(FitMode::None).position(Position::new(12, 88)));

    let css = CssSnippet::new(BOX).render(&fit);
    assert_eq!(
        css,
        "img {\n  width: 300px;\n  height: 300px;\n  object-fit: none;\n  object-position: 12% 88%;\n}\n"
    );
    let parsed = parse(&css);
    assert!(parsed.warnings.is_empty());
    assert_eq!(parsed.fit, fit);
}

#[test]
fn copy_failure_is_non_fatal() {
    let mut session = Session::new();
    let id = session.stage_mut().add_frame(BOX);
    session.apply([
        Change::Fit(FitMode::Cover),
        Change::ImageLoaded {
            id,
            natural: Size::new(300.0, 600.0),
        },
    ]);
    let before = session.stage().ghosts(&session.fit());

    let snippet = CssSnippet::new(BOX);
    let mut clip = FlakyClipboard {
        calls: 0,
        last: None,
    };
    let first = copy_css(&snippet, &session.fit(), &mut clip);
    assert_eq!(first, CopyNotice::Failed("document not focused".to_owned()));
    assert_eq!(session.stage().ghosts(&session.fit()), before);

    let second = copy_css(&snippet, &session.fit(), &mut clip);
    assert!(second.is_copied());
    assert!(clip.last.unwrap().contains("object-fit: cover;"));
}

#[test]
fn default_css_has_only_box_size() {
    let css = CssSnippet::new(BOX).render(&ObjectFit::default());
    assert_eq!(css, "img {\n  width: 300px;\n  height: 300px;\n}\n");
}
