//! Per-image recompute layer.
//!
//! A [`Stage`] tracks every displayed image box. Each box knows its own size
//! and, once the image has loaded, the image's natural size. Ghosts are only
//! computed for loaded boxes; a box still waiting on its image is skipped and
//! never holds up the others.
//!
//! A [`Session`] pairs the current [`ObjectFit`] with a stage and folds a
//! batch of [`Change`]s into one recompute pass.
//!
//! ```
//! use zenfit::{FitMode, Size};
//! use zenfit::stage::{Change, Session};
//!
//! let mut session = Session::new();
//! let a = session.stage_mut().add_frame(Size::new(300.0, 300.0));
//! let b = session.stage_mut().add_frame(Size::new(200.0, 100.0));
//!
//! let ghosts = session.apply([
//!     Change::Fit(FitMode::Cover),
//!     Change::ImageLoaded { id: a, natural: Size::new(600.0, 300.0) },
//! ]);
//!
//! // `b` has not loaded yet, so only `a` gets a ghost.
//! assert_eq!(ghosts.len(), 1);
//! assert_eq!(ghosts[0].id, a);
//! assert_eq!(ghosts[0].ghost.left, -150.0);
//! # let _ = b;
//! ```

use alloc::vec::Vec;

use log::{debug, warn};

use crate::fit::{FitError, FitMode, GhostRect, ObjectFit, Size, validate};

/// Handle to a box registered with a [`Stage`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(usize);

impl FrameId {
    /// Position of the box in insertion order.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One displayed image box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    /// Box size from the host layout.
    pub size: Size,
    /// Natural image size. `None` until the image has loaded.
    pub natural: Option<Size>,
}

impl Frame {
    /// Whether the natural size is known.
    pub fn is_loaded(&self) -> bool {
        self.natural.is_some()
    }

    /// Natural size, once the box is also usable for layout.
    pub fn ready(&self) -> Option<Size> {
        let natural = self.natural?;
        validate(self.size, natural).ok()?;
        Some(natural)
    }

    fn ghost(&self, fit: &ObjectFit) -> Option<GhostRect> {
        Some(fit.compute(self.size, self.ready()?))
    }
}

/// Ghost computed for one loaded box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameGhost {
    pub id: FrameId,
    pub ghost: GhostRect,
}

/// Collection of image boxes.
#[derive(Clone, Debug, Default)]
pub struct Stage {
    frames: Vec<Frame>,
}

impl Stage {
    /// Create an empty stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a box whose image has not loaded yet.
    ///
    /// The size may still be unusable (e.g. 0×0 before the host has laid the
    /// box out); such a box gets no ghost until [`resize_frame`](Self::resize_frame)
    /// gives it a real size.
    pub fn add_frame(&mut self, size: Size) -> FrameId {
        self.frames.push(Frame {
            size,
            natural: None,
        });
        FrameId(self.frames.len() - 1)
    }

    /// Look up a box.
    pub fn frame(&self, id: FrameId) -> Option<&Frame> {
        self.frames.get(id.0)
    }

    /// All boxes with their ids, in insertion order.
    pub fn frames(&self) -> impl Iterator<Item = (FrameId, &Frame)> {
        self.frames.iter().enumerate().map(|(i, f)| (FrameId(i), f))
    }

    /// Number of registered boxes.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no boxes are registered.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Record that a box's image finished loading.
    ///
    /// Only the natural size is checked. Loads fire once, so the size is kept
    /// even while the box itself is not laid out yet.
    pub fn image_loaded(&mut self, id: FrameId, natural: Size) -> Result<(), FitError> {
        let frame = self.frames.get_mut(id.0).ok_or(FitError::UnknownFrame)?;
        if !natural.is_usable() {
            return Err(FitError::ZeroNaturalDimension);
        }
        frame.natural = Some(natural);
        Ok(())
    }

    /// Update a box's size after a host layout change.
    pub fn resize_frame(&mut self, id: FrameId, size: Size) -> Result<(), FitError> {
        let frame = self.frames.get_mut(id.0).ok_or(FitError::UnknownFrame)?;
        if !size.is_usable() {
            return Err(FitError::ZeroFrameDimension);
        }
        frame.size = size;
        Ok(())
    }

    /// Ghost for one box, or `None` while its image is loading or the box
    /// has no usable size.
    pub fn ghost(&self, id: FrameId, fit: &ObjectFit) -> Option<GhostRect> {
        self.frames.get(id.0)?.ghost(fit)
    }

    /// Ghosts for every box that is both loaded and laid out, in insertion order.
    pub fn ghosts(&self, fit: &ObjectFit) -> Vec<FrameGhost> {
        self.frames()
            .filter_map(|(id, frame)| {
                Some(FrameGhost {
                    id,
                    ghost: frame.ghost(fit)?,
                })
            })
            .collect()
    }
}

/// A single input event from the host UI.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Change {
    /// Fit mode picked.
    Fit(FitMode),
    /// Horizontal slider moved.
    PositionX(u8),
    /// Vertical slider moved.
    PositionY(u8),
    /// Back to `fill` at `50% 50%`.
    Reset,
    /// An image finished loading.
    ImageLoaded { id: FrameId, natural: Size },
    /// A box was resized by the host layout.
    FrameResized { id: FrameId, size: Size },
}

/// Current controls plus the boxes they apply to.
#[derive(Clone, Debug, Default)]
pub struct Session {
    fit: ObjectFit,
    stage: Stage,
}

impl Session {
    /// Empty stage, initial controls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing controls and boxes.
    pub fn with_stage(fit: ObjectFit, stage: Stage) -> Self {
        Self { fit, stage }
    }

    /// Current controls.
    pub fn fit(&self) -> ObjectFit {
        self.fit
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    /// Apply a batch of changes, then recompute every loaded box once.
    ///
    /// A change that the stage rejects is logged and dropped; the rest of the
    /// batch still applies.
    pub fn apply(&mut self, changes: impl IntoIterator<Item = Change>) -> Vec<FrameGhost> {
        let mut applied = 0usize;
        for change in changes {
            match self.apply_one(change) {
                Ok(()) => applied += 1,
                Err(e) => warn!("ignoring {change:?}: {e}"),
            }
        }
        let ghosts = self.stage.ghosts(&self.fit);
        debug!(
            "recomputed {} of {} frames after {applied} changes ({:?})",
            ghosts.len(),
            self.stage.len(),
            self.fit
        );
        ghosts
    }

    fn apply_one(&mut self, change: Change) -> Result<(), FitError> {
        let p = self.fit.position;
        match change {
            Change::Fit(mode) => self.fit.mode = mode,
            Change::PositionX(x) => self.fit.position = p.with_x(x),
            Change::PositionY(y) => self.fit.position = p.with_y(y),
            Change::Reset => self.fit = ObjectFit::default(),
            Change::ImageLoaded { id, natural } => self.stage.image_loaded(id, natural)?,
            Change::FrameResized { id, size } => self.stage.resize_frame(id, size)?,
        }
        Ok(())
    }
}
