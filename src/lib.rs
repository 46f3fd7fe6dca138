//! `object-fit` / `object-position` geometry with crop ghosts and CSS snippets.
//!
//! Reproduces how a browser sizes and positions an image inside a fixed box,
//! so the cropped-away part can be drawn as a semi-transparent "ghost".
//! The geometry core is pure: no allocations, `no_std` compatible.
//!
//! # Modules
//!
//! - [`fit`]: Fit modes, positions, and ghost computation
//! - [`css`]: Stylesheet snippet generation (`alloc`)
//! - [`parse`]: Declaration text back into controls (`alloc`)
//! - [`stage`]: Per-image recompute and batched input changes (`alloc`)
//! - [`clipboard`]: Copy the snippet through a host clipboard (`alloc`)
//! - `svg`: SVG rendering of boxes and ghosts (`svg` feature)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod fit;

#[cfg(feature = "alloc")]
pub mod clipboard;
#[cfg(feature = "alloc")]
pub mod css;
#[cfg(feature = "alloc")]
pub mod parse;
#[cfg(feature = "alloc")]
pub mod stage;
#[cfg(feature = "svg")]
pub mod svg;

// Re-exports: core types from fit module
pub use fit::{
    FitError, FitMode, GhostRect, ObjectFit, Position, Rect, Region, Size, compute, validate,
};
