//! CSS snippet generation.
//!
//! Renders the current [`ObjectFit`] as a stylesheet rule. Declarations that
//! equal the CSS initial values are left out, so the default state renders
//! only the fixed box size.
//!
//! ```
//! use zenfit::{FitMode, ObjectFit, Position, Size};
//! use zenfit::css::CssSnippet;
//!
//! let fit = ObjectFit::new(FitMode::Cover).position(Position::new(30, 70));
//! let css = CssSnippet::new(Size::new(300.0, 300.0)).render(&fit);
//!
//! assert_eq!(
//!     css,
//!     "img {\n  width: 300px;\n  height: 300px;\n  object-fit: cover;\n  object-position: 30% 70%;\n}\n"
//! );
//! ```

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use num_traits::Float;

use crate::fit::{FitMode, ObjectFit, Size};

/// Selector used when none is set.
pub const DEFAULT_SELECTOR: &str = "img";

/// Stylesheet rule generator for a fixed-size image box.
#[derive(Clone, Debug, PartialEq)]
pub struct CssSnippet {
    frame: Size,
    selector: Cow<'static, str>,
}

impl CssSnippet {
    /// Snippet for a box of the given size, using the `img` selector.
    pub fn new(frame: Size) -> Self {
        Self {
            frame,
            selector: Cow::Borrowed(DEFAULT_SELECTOR),
        }
    }

    /// Set the rule's selector.
    pub fn selector(mut self, selector: impl Into<Cow<'static, str>>) -> Self {
        self.selector = selector.into();
        self
    }

    /// The box size written into the rule.
    pub fn frame(&self) -> Size {
        self.frame
    }

    /// Declarations in output order, as `(property, value)` pairs.
    pub fn declarations(&self, fit: &ObjectFit) -> Vec<(&'static str, String)> {
        let mut decls = Vec::with_capacity(4);
        decls.push(("width", px(self.frame.width)));
        decls.push(("height", px(self.frame.height)));
        if fit.mode != FitMode::Fill {
            decls.push(("object-fit", String::from(fit.mode.as_str())));
        }
        if !fit.position.is_center() {
            decls.push((
                "object-position",
                format!("{}% {}%", fit.position.x(), fit.position.y()),
            ));
        }
        decls
    }

    /// Render the full rule block, terminated by a newline.
    pub fn render(&self, fit: &ObjectFit) -> String {
        let mut css = String::with_capacity(128);
        css.push_str(&self.selector);
        css.push_str(" {\n");
        for (property, value) in self.declarations(fit) {
            css.push_str(&format!("  {property}: {value};\n"));
        }
        css.push_str("}\n");
        css
    }

    /// Render only the `object-*` declarations on one line, for captions.
    pub fn render_inline(&self, fit: &ObjectFit) -> String {
        let parts: Vec<String> = self
            .declarations(fit)
            .into_iter()
            .filter(|(property, _)| property.starts_with("object-"))
            .map(|(property, value)| format!("{property}: {value};"))
            .collect();
        parts.join(" ")
    }
}

/// Format a pixel length, dropping the fraction for whole values.
fn px(v: f64) -> String {
    if Float::fract(v) == 0.0 {
        format!("{}px", v as i64)
    } else {
        let s = format!("{v:.3}");
        let s = s.trim_end_matches('0').trim_end_matches('.');
        format!("{s}px")
    }
}
