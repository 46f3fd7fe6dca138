//! SVG visualization of `object-fit` results.
//!
//! Each panel shows one image box: the painted image clipped to the box, the
//! box outline, and for `cover` and `none` the semi-transparent ghost of
//! the whole image extending past the box edges. Panels are stacked
//! vertically, one per loaded box.
//!
//! # Example
//!
//! ```
//! use zenfit::{FitMode, ObjectFit, Size, svg::render_ghost_svg};
//!
//! let fit = ObjectFit::new(FitMode::Cover);
//! let svg = render_ghost_svg(&fit, Size::new(300.0, 300.0), Size::new(600.0, 300.0));
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains(r#"class="ghost""#));
//! ```

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::css::CssSnippet;
use crate::fit::{GhostRect, ObjectFit, Region, Size};
use crate::stage::Session;

/// Drawing area reserved for one box and its ghost.
const VIEW: Size = Size::new(320.0, 220.0);
/// Space around the whole document.
const PAD: f64 = 40.0;
/// Title line above each box.
const TITLE_H: f64 = 24.0;
/// Caption line below each box.
const CAPTION_H: f64 = 30.0;
/// Space between consecutive boxes.
const SPACING: f64 = 40.0;

/// Colors: the box background, its edge, the painted image, and the ghost
/// that shares the image color at low opacity.
const STYLE: &str = r##"<style>
  text { font-family: ui-monospace, "DejaVu Sans Mono", monospace; text-anchor: middle; }
  .title { font-size: 13px; font-weight: 600; fill: #222; }
  .caption { font-size: 11px; fill: #555; }
  .box-bg { fill: #f0f0f0; }
  .box-edge { fill: none; stroke: #222; stroke-width: 2; }
  .painted { fill: #d68a4b; }
  .ghost { fill: #d68a4b; fill-opacity: 0.25; stroke: #a45a1c; stroke-dasharray: 5,3; }
  @media (prefers-color-scheme: dark) {
    .title { fill: #eee; }
    .caption { fill: #bbb; }
    .box-bg { fill: #262626; }
    .box-edge { stroke: #eee; }
    .painted, .ghost { fill: #b86f35; }
    .ghost { stroke: #e09a5e; }
  }
</style>
"##;

/// Everything needed to draw one box.
struct Panel {
    title: String,
    caption: String,
    frame: Size,
    /// Where the browser paints the image, in box coordinates.
    painted: Region,
    ghost: GhostRect,
}

impl Panel {
    fn new(fit: &ObjectFit, frame: Size, natural: Size) -> Self {
        let ghost = fit.compute(frame, natural);
        let inline = CssSnippet::new(frame).render_inline(fit);
        let mut caption = if inline.is_empty() {
            String::from("object-fit: fill; (initial)")
        } else {
            inline
        };
        if ghost.visible {
            let cropped = ghost.cropped_fraction(frame) * 100.0;
            caption.push_str(&format!("  cropped {cropped:.0}%"));
        }
        Self {
            title: format!(
                "{}  box {}×{}  image {}×{}",
                fit.mode, frame.width, frame.height, natural.width, natural.height
            ),
            caption,
            frame,
            painted: fit.placement(frame, natural),
            ghost,
        }
    }

    /// Everything that gets drawn: the box plus the ghost when shown.
    fn bounds(&self) -> Region {
        let frame = Region::of(self.frame);
        if !self.ghost.visible {
            return frame;
        }
        let g = self.ghost.region();
        let x0 = frame.x.min(g.x);
        let y0 = frame.y.min(g.y);
        let x1 = (frame.x + frame.width).max(g.x + g.width);
        let y1 = (frame.y + frame.height).max(g.y + g.height);
        Region::new(x0, y0, x1 - x0, y1 - y0)
    }
}

/// Render one box as a complete SVG document.
pub fn render_ghost_svg(fit: &ObjectFit, frame: Size, natural: Size) -> String {
    render_panels(&[Panel::new(fit, frame, natural)])
}

/// Render every loaded box of a session, top to bottom.
///
/// Boxes still waiting on their image or on a usable size are left out.
pub fn render_session_svg(session: &Session) -> String {
    let fit = session.fit();
    let panels: Vec<Panel> = session
        .stage()
        .frames()
        .filter_map(|(_, frame)| Some(Panel::new(&fit, frame.size, frame.ready()?)))
        .collect();
    render_panels(&panels)
}

/// Uniform factor that shrinks or grows `bounds` into [`VIEW`].
fn view_scale(bounds: &Region) -> f64 {
    if bounds.width > 0.0 && bounds.height > 0.0 {
        (VIEW.width / bounds.width).min(VIEW.height / bounds.height)
    } else {
        1.0
    }
}

fn push_rect(svg: &mut String, (x, y, w, h): (f64, f64, f64, f64), attrs: &str) {
    svg.push_str(&format!(
        r#"<rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" {attrs}/>"#
    ));
    svg.push('\n');
}

fn push_text(svg: &mut String, x: f64, y: f64, class: &str, text: &str) {
    svg.push_str(&format!(
        r#"<text x="{x}" y="{y:.1}" class="{class}">{}</text>"#,
        escape_xml(text)
    ));
    svg.push('\n');
}

fn render_panels(panels: &[Panel]) -> String {
    if panels.is_empty() {
        return String::from(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"/>"#);
    }

    let slot = TITLE_H + VIEW.height + CAPTION_H;
    let count = panels.len() as f64;
    let height = 2.0 * PAD + slot * count + SPACING * (count - 1.0);
    let width = VIEW.width + 2.0 * PAD;
    let mid = width / 2.0;

    let mut svg = String::with_capacity(1024 + 768 * panels.len());
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {width} {height}">"#,
        width as u32,
        height as u32,
    ));
    svg.push('\n');
    svg.push_str(STYLE);

    for (i, panel) in panels.iter().enumerate() {
        let top = PAD + i as f64 * (slot + SPACING);
        push_text(&mut svg, mid, top + 15.0, "title", &panel.title);

        // Center the drawn bounds horizontally inside the view.
        let bounds = panel.bounds();
        let scale = view_scale(&bounds);
        let ox = mid - (bounds.x + bounds.width / 2.0) * scale;
        let oy = top + TITLE_H - bounds.y * scale;
        let place = |r: Region| {
            (
                ox + r.x * scale,
                oy + r.y * scale,
                r.width * scale,
                r.height * scale,
            )
        };

        let frame = place(Region::of(panel.frame));
        // Ghost goes underneath so the clipped image reads as the real result.
        if panel.ghost.visible {
            push_rect(&mut svg, place(panel.ghost.region()), r#"class="ghost""#);
        }
        push_rect(&mut svg, frame, r#"class="box-bg""#);
        svg.push_str(&format!(r#"<clipPath id="box-{i}">"#));
        push_rect(&mut svg, frame, "");
        svg.push_str("</clipPath>\n");
        push_rect(
            &mut svg,
            place(panel.painted),
            &format!(r#"class="painted" clip-path="url(#box-{i})""#),
        );
        push_rect(&mut svg, frame, r#"class="box-edge""#);

        let caption_y = top + TITLE_H + VIEW.height + 18.0;
        push_text(&mut svg, mid, caption_y, "caption", &panel.caption);
    }

    svg.push_str("</svg>\n");
    svg
}

/// XML text escaping for titles and captions.
fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
