//! `object-fit` / `object-position` geometry.
//!
//! Reproduces the browser's replaced-element layout for the four standard
//! fit modes and derives the "ghost": the whole, uncropped image at the size
//! and offset the browser would use, relative to the visible box. Pure
//! geometry: no pixel operations, no allocations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use zenfit::{FitMode, ObjectFit, Position, Size};
//!
//! let ghost = ObjectFit::new(FitMode::Cover)
//!     .position(Position::new(50, 50))
//!     .compute(Size::new(300.0, 300.0), Size::new(600.0, 300.0));
//!
//! // Image is wider than the box: height matches, width overflows.
//! assert!(ghost.visible);
//! assert_eq!((ghost.width, ghost.height), (600.0, 300.0));
//! assert_eq!((ghost.left, ghost.top), (-150.0, 0.0));
//! ```

use core::fmt;
use core::str::FromStr;

use num_traits::Float;

/// How the image is mapped into its box. Mirrors the CSS `object-fit` keywords.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FitMode {
    /// Stretch to exactly the box size, ignoring aspect ratio.
    #[default]
    Fill,
    /// Scale to fit entirely inside the box, preserving aspect ratio.
    Contain,
    /// Scale to fill the box, preserving aspect ratio and cropping overflow.
    Cover,
    /// Render at natural size, unscaled.
    None,
}

impl FitMode {
    /// All modes, in the order a picker would list them.
    pub const ALL: [FitMode; 4] = [
        FitMode::Fill,
        FitMode::Contain,
        FitMode::Cover,
        FitMode::None,
    ];

    /// The CSS keyword for this mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Contain => "contain",
            Self::Cover => "cover",
            Self::None => "none",
        }
    }

    /// Whether the ghost overlay carries any information in this mode.
    ///
    /// `fill` never crops and `contain` never overflows, so only `cover`
    /// and `none` can hide part of the image.
    pub const fn shows_ghost(self) -> bool {
        matches!(self, Self::Cover | Self::None)
    }
}

impl fmt::Display for FitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitMode {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        FitMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or(FitError::UnknownFitMode)
    }
}

/// `object-position` as whole percentages along each axis.
///
/// `0` is flush with the start edge, `100` flush with the end edge, `50`
/// centered. Applies to the free space `box - image`, which is negative when
/// the image overflows. Fields are private so every value stays in `0..=100`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// The CSS initial value, `50% 50%`.
    pub const CENTER: Self = Self { x: 50, y: 50 };

    /// Create a position. Values above 100 are clamped to 100.
    pub const fn new(x: u8, y: u8) -> Self {
        Self {
            x: if x > 100 { 100 } else { x },
            y: if y > 100 { 100 } else { y },
        }
    }

    /// Horizontal percentage (0–100).
    pub const fn x(&self) -> u8 {
        self.x
    }

    /// Vertical percentage (0–100).
    pub const fn y(&self) -> u8 {
        self.y
    }

    /// Copy with a new horizontal percentage, clamped like [`new`](Self::new).
    pub const fn with_x(self, x: u8) -> Self {
        Self::new(x, self.y)
    }

    /// Copy with a new vertical percentage, clamped like [`new`](Self::new).
    pub const fn with_y(self, y: u8) -> Self {
        Self::new(self.x, y)
    }

    /// Whether this is the initial `50% 50%`.
    pub const fn is_center(&self) -> bool {
        self.x == 50 && self.y == 50
    }

    /// Horizontal fraction in `0.0..=1.0`.
    pub fn fraction_x(&self) -> f64 {
        f64::from(self.x) / 100.0
    }

    /// Vertical fraction in `0.0..=1.0`.
    pub fn fraction_y(&self) -> f64 {
        f64::from(self.y) / 100.0
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Width × height in CSS pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }

    /// Both dimensions finite and strictly positive.
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Axis-aligned rectangle in box coordinates (CSS pixels, may be negative).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Region {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Region {
    /// Create a new region.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The region covering a whole box, anchored at the origin.
    pub const fn of(frame: Size) -> Self {
        Self::new(0.0, 0.0, frame.width, frame.height)
    }

    /// Width × height.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Overlap with `other`, or `None` when the two do not overlap.
    pub fn intersect(&self, other: &Region) -> Option<Region> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = (self.x + self.width).min(other.x + other.width);
        let y1 = (self.y + self.height).min(other.y + other.height);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Region::new(x0, y0, x1 - x0, y1 - y0))
    }
}

/// Axis-aligned rectangle in natural-image pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Clamp this rect to fit within `(0, 0, max_w, max_h)`.
    /// Width and height are clamped to at least 1.
    pub fn clamp_to(self, max_w: u32, max_h: u32) -> Self {
        let x = self.x.min(max_w.saturating_sub(1));
        let y = self.y.min(max_h.saturating_sub(1));
        let w = self.width.min(max_w.saturating_sub(x)).max(1);
        let h = self.height.min(max_h.saturating_sub(y)).max(1);
        Self {
            x,
            y,
            width: w,
            height: h,
        }
    }

    /// Whether this rect covers the full image (no actual crop).
    pub fn is_full(&self, image_w: u32, image_h: u32) -> bool {
        self.x == 0 && self.y == 0 && self.width == image_w && self.height == image_h
    }
}

/// The uncropped image placed relative to its box.
///
/// `left`/`top` are offsets from the box's top-left corner and are negative
/// when the image overflows toward the start edge. When `visible` is false
/// the geometry fields are zero and must not be rendered.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GhostRect {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub top: f64,
    pub visible: bool,
}

impl GhostRect {
    /// A ghost that should not be shown.
    pub const HIDDEN: Self = Self {
        width: 0.0,
        height: 0.0,
        left: 0.0,
        top: 0.0,
        visible: false,
    };

    /// The ghost as a region in box coordinates.
    pub fn region(&self) -> Region {
        Region::new(self.left, self.top, self.width, self.height)
    }

    /// The part of the ghost the box actually shows.
    pub fn visible_region(&self, frame: Size) -> Option<Region> {
        if !self.visible {
            return None;
        }
        self.region().intersect(&Region::of(frame))
    }

    /// Share of the ghost's area clipped away by the box, in `0.0..=1.0`.
    pub fn cropped_fraction(&self, frame: Size) -> f64 {
        let total = self.region().area();
        if !self.visible || total <= 0.0 {
            return 0.0;
        }
        let shown = self.visible_region(frame).map_or(0.0, |r| r.area());
        (1.0 - shown / total).clamp(0.0, 1.0)
    }

    /// The visible window mapped back to natural-image pixels.
    ///
    /// `None` when the ghost is hidden, nothing is visible, or the whole
    /// image is visible.
    pub fn source_crop(&self, frame: Size, natural: Size) -> Option<Rect> {
        let window = self.visible_region(frame)?;
        let sx = natural.width / self.width;
        let sy = natural.height / self.height;
        let nat_w = Float::round(natural.width) as u32;
        let nat_h = Float::round(natural.height) as u32;
        let rect = Rect::new(
            Float::round((window.x - self.left) * sx) as u32,
            Float::round((window.y - self.top) * sy) as u32,
            Float::round(window.width * sx) as u32,
            Float::round(window.height * sy) as u32,
        )
        .clamp_to(nat_w, nat_h);
        if rect.is_full(nat_w, nat_h) {
            None
        } else {
            Some(rect)
        }
    }
}

/// Fit mode plus position: the complete `object-fit`/`object-position` input.
///
/// Immutable value; the host builds a new one whenever a control changes.
///
/// # Example
///
/// ```
/// use zenfit::{FitMode, ObjectFit, Position, Size};
///
/// let ghost = ObjectFit::new(FitMode::Cover)
///     .position(Position::new(0, 100))
///     .compute(Size::new(300.0, 300.0), Size::new(300.0, 600.0));
///
/// assert_eq!((ghost.width, ghost.height), (300.0, 600.0));
/// assert_eq!((ghost.left, ghost.top), (0.0, -300.0));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ObjectFit {
    pub mode: FitMode,
    pub position: Position,
}

impl ObjectFit {
    /// Create with the given mode at the default `50% 50%` position.
    pub const fn new(mode: FitMode) -> Self {
        Self {
            mode,
            position: Position::CENTER,
        }
    }

    /// Set the position.
    pub const fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Set the mode.
    pub const fn mode(mut self, mode: FitMode) -> Self {
        self.mode = mode;
        self
    }

    /// Whether both mode and position are at their CSS initial values.
    pub fn is_initial(&self) -> bool {
        self.mode == FitMode::Fill && self.position.is_center()
    }

    /// Compute the ghost rectangle. See [`compute`].
    pub fn compute(&self, frame: Size, natural: Size) -> GhostRect {
        compute(self.mode, self.position, frame, natural)
    }

    /// Like [`compute`](Self::compute), but rejects unusable dimensions.
    pub fn try_compute(&self, frame: Size, natural: Size) -> Result<GhostRect, FitError> {
        validate(frame, natural)?;
        Ok(self.compute(frame, natural))
    }

    /// The rectangle the browser paints the image into, for every mode.
    ///
    /// Unlike the ghost this is meaningful for `fill` and `contain` too.
    pub fn placement(&self, frame: Size, natural: Size) -> Region {
        let (w, h) = match self.mode {
            FitMode::Fill => (frame.width, frame.height),
            FitMode::Contain => {
                let scale = (frame.width / natural.width).min(frame.height / natural.height);
                (natural.width * scale, natural.height * scale)
            }
            FitMode::Cover | FitMode::None => target_size(self.mode, frame, natural),
        };
        let (left, top) = position_offset(frame, w, h, self.position);
        Region::new(left, top, w, h)
    }
}

/// Compute where the uncropped image sits relative to its box.
///
/// Callers must only invoke this once the natural size is known, with
/// strictly positive frame and natural dimensions. Use
/// [`ObjectFit::try_compute`] when that is not guaranteed.
pub fn compute(mode: FitMode, position: Position, frame: Size, natural: Size) -> GhostRect {
    if !mode.shows_ghost() {
        return GhostRect::HIDDEN;
    }
    let (width, height) = target_size(mode, frame, natural);
    let (left, top) = position_offset(frame, width, height, position);
    GhostRect {
        width,
        height,
        left,
        top,
        visible: true,
    }
}

/// Check the preconditions of [`compute`].
pub fn validate(frame: Size, natural: Size) -> Result<(), FitError> {
    if !natural.is_usable() {
        return Err(FitError::ZeroNaturalDimension);
    }
    if !frame.is_usable() {
        return Err(FitError::ZeroFrameDimension);
    }
    Ok(())
}

/// Geometry computation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FitError {
    /// Natural image width or height is zero, negative or not finite.
    ZeroNaturalDimension,
    /// Box width or height is zero, negative or not finite.
    ZeroFrameDimension,
    /// Keyword is not one of `fill`, `contain`, `cover`, `none`.
    UnknownFitMode,
    /// No frame with the given id.
    UnknownFrame,
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ZeroNaturalDimension => "natural image size must be positive",
            Self::ZeroFrameDimension => "box size must be positive",
            Self::UnknownFitMode => "unknown object-fit keyword",
            Self::UnknownFrame => "unknown frame",
        })
    }
}

impl core::error::Error for FitError {}

// ============================================================================
// Internal geometry
// ============================================================================

/// Target size for the modes that show a ghost.
fn target_size(mode: FitMode, frame: Size, natural: Size) -> (f64, f64) {
    match mode {
        FitMode::Cover => cover_size(frame, natural),
        _ => (natural.width, natural.height),
    }
}

/// Scale preserving aspect ratio until both axes cover the box.
/// Equal ratios take the width-constrained branch.
fn cover_size(frame: Size, natural: Size) -> (f64, f64) {
    let img_ratio = natural.aspect();
    let box_ratio = frame.aspect();
    if img_ratio > box_ratio {
        // Wider than the box: height matches, width overflows.
        (frame.height * img_ratio, frame.height)
    } else {
        (frame.width, frame.width / img_ratio)
    }
}

/// Signed offset of an `w`×`h` image inside `frame`. Not clamped.
fn position_offset(frame: Size, w: f64, h: f64, position: Position) -> (f64, f64) {
    (
        (frame.width - w) * position.fraction_x(),
        (frame.height - h) * position.fraction_y(),
    )
}
