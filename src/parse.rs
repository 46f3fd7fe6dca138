//! Declaration parsing: CSS text back into an [`ObjectFit`].
//!
//! Accepts a bare declaration list (`object-fit: cover; object-position: 30% 70%`)
//! or a single rule block such as the output of [`CssSnippet`](crate::css::CssSnippet).
//! Parsing never fails; problems are reported as [`ParseWarning`]s and the
//! affected declaration is skipped.
//!
//! ```
//! use zenfit::{FitMode, Position};
//! use zenfit::parse::parse;
//!
//! let result = parse("img { object-fit: cover; object-position: right top; }");
//! assert!(result.warnings.is_empty());
//! assert_eq!(result.fit.mode, FitMode::Cover);
//! assert_eq!(result.fit.position, Position::new(100, 0));
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use crate::fit::{FitMode, ObjectFit, Position};

/// Result of parsing declaration text.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    /// Parsed state. Properties that were absent keep their initial values.
    pub fit: ObjectFit,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from declaration parsing. Property names are reported
/// lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A property appeared more than once (last valid value wins).
    DuplicateProperty { property: String, value: String },
    /// A property this crate does not model.
    PropertyNotRecognized { property: String, value: String },
    /// A property was recognized but its value could not be parsed.
    ValueInvalid {
        property: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse declaration text. See the [module docs](self).
pub fn parse(text: &str) -> ParseResult {
    let mut mode: Option<FitMode> = None;
    let mut position: Option<Position> = None;
    let mut warnings = Vec::new();

    for decl in split_declarations(rule_body(text)) {
        let (name, value) = split_declaration(decl);
        let property = name.to_ascii_lowercase();
        match property.as_str() {
            "object-fit" => match value.parse::<FitMode>() {
                Ok(m) => set_or_warn(&mut mode, m, &property, value, &mut warnings),
                Err(_) => warnings.push(ParseWarning::ValueInvalid {
                    property: "object-fit",
                    value: String::from(value),
                    reason: "expected fill, contain, cover or none",
                }),
            },
            "object-position" => match parse_position(value) {
                Ok(p) => set_or_warn(&mut position, p, &property, value, &mut warnings),
                Err(reason) => warnings.push(ParseWarning::ValueInvalid {
                    property: "object-position",
                    value: String::from(value),
                    reason,
                }),
            },
            // The box size is fixed by the host; accepted so snippets round-trip.
            "width" | "height" => {}
            _ => warnings.push(ParseWarning::PropertyNotRecognized {
                property: property.clone(),
                value: String::from(value),
            }),
        }
    }

    ParseResult {
        fit: ObjectFit {
            mode: mode.unwrap_or_default(),
            position: position.unwrap_or_default(),
        },
        warnings,
    }
}

fn set_or_warn<T>(
    field: &mut Option<T>,
    parsed: T,
    property: &str,
    value: &str,
    warnings: &mut Vec<ParseWarning>,
) {
    if field.is_some() {
        warnings.push(ParseWarning::DuplicateProperty {
            property: String::from(property),
            value: String::from(value),
        });
    }
    *field = Some(parsed);
}

// ---- Tokenizing ----

/// Contents of the first `{ ... }` block, or the whole text when there is none.
fn rule_body(text: &str) -> &str {
    match text.find('{') {
        Some(open) => {
            let body = &text[open + 1..];
            match body.rfind('}') {
                Some(close) => &body[..close],
                None => body,
            }
        }
        None => text,
    }
}

fn split_declarations(body: &str) -> impl Iterator<Item = &str> {
    body.split(';').map(str::trim).filter(|s| !s.is_empty())
}

/// Split `property: value` on the first ':'. A missing colon yields an empty value.
fn split_declaration(decl: &str) -> (&str, &str) {
    match decl.split_once(':') {
        Some((property, value)) => (property.trim(), value.trim()),
        None => (decl, ""),
    }
}

// ---- Value parsers ----

/// One `object-position` component.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Component {
    /// A percentage, usable on either axis.
    Percent(u8),
    /// `center`, usable on either axis.
    Center,
    /// `left` / `right`.
    Horizontal(u8),
    /// `top` / `bottom`.
    Vertical(u8),
}

impl Component {
    fn value(self) -> u8 {
        match self {
            Self::Percent(v) | Self::Horizontal(v) | Self::Vertical(v) => v,
            Self::Center => 50,
        }
    }
}

fn parse_position(value: &str) -> Result<Position, &'static str> {
    let mut parts = value.split_ascii_whitespace();
    let first = parts.next().ok_or("missing value")?;
    let second = parts.next();
    if parts.next().is_some() {
        return Err("expected one or two components");
    }

    let first = parse_component(first)?;
    let Some(second) = second else {
        return Ok(match first {
            Component::Vertical(y) => Position::new(50, y),
            other => Position::new(other.value(), 50),
        });
    };
    let second = parse_component(second)?;

    // Keywords pin their axis; `top left` is the same as `left top`.
    let (x, y) = match (first, second) {
        (Component::Vertical(_), _) | (_, Component::Horizontal(_)) => (second, first),
        _ => (first, second),
    };
    if matches!(x, Component::Vertical(_)) || matches!(y, Component::Horizontal(_)) {
        return Err("conflicting axis keywords");
    }
    Ok(Position::new(x.value(), y.value()))
}

fn parse_component(s: &str) -> Result<Component, &'static str> {
    match s.to_ascii_lowercase().as_str() {
        "left" => return Ok(Component::Horizontal(0)),
        "right" => return Ok(Component::Horizontal(100)),
        "top" => return Ok(Component::Vertical(0)),
        "bottom" => return Ok(Component::Vertical(100)),
        "center" => return Ok(Component::Center),
        "0" => return Ok(Component::Percent(0)),
        _ => {}
    }
    let digits = s
        .strip_suffix('%')
        .ok_or("expected a percentage or keyword")?;
    let pct: u32 = digits
        .trim()
        .parse()
        .map_err(|_| "expected a whole-number percentage")?;
    if pct > 100 {
        return Err("percentage out of range 0..=100");
    }
    Ok(Component::Percent(pct as u8))
}
