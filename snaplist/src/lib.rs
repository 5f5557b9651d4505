//! A headless snap-to-item scroll controller.
//!
//! For frame-loop utilities (tweens, gesture-end detection), see the `snaplist-adapter` crate.
//!
//! This crate focuses on the small amount of state and geometry needed to make a list of
//! uniformly pitched items "snap" so that exactly one item rests on a focus anchor:
//! offset → index mapping, index → offset mapping, end-of-list detection, deferred
//! animated scroll commands and an imperative focus API.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the viewport extent along the scroll axis
//! - live scroll samples and a "gesture ended" event
//! - a [`ScrollSurface`] that can animate or jump to an offset
//! - item rendering, with every item occupying exactly `item_pitch` along the axis
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod easing;
mod error;
pub mod geometry;
mod list;
mod options;
mod surface;
mod types;

#[cfg(test)]
mod tests;

pub use easing::{Animation, Easing};
pub use error::{Result, SnapListError};
pub use geometry::{
    Geometry, focus_distance, is_end_of_list, offset_for_index, snap_index, target_index,
};
pub use list::{FocusHandle, SnapList};
pub use options::{OnItemFocusCallback, OnReachEndCallback, SnapListOptions};
pub use surface::ScrollSurface;
pub use types::{Axis, ItemSlot, ScrollCommand, ScrollKind, ScrollMetrics, SnapAnchor};
