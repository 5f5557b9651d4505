//! Adapter utilities for the `snaplist` crate.
//!
//! The `snaplist` crate is UI-agnostic and focuses on the snap geometry and focus state.
//! This crate provides small, framework-neutral helpers commonly needed to drive it from a
//! frame loop:
//!
//! - Tween-based snap animation ([`Tween`], [`TweenSurface`])
//! - Gesture-end detection from raw pointer/scroll input ([`GestureTracker`])
//! - A [`Controller`] wiring both to a `SnapList`
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod gesture;
mod surface;
mod tween;


pub use controller::Controller;
pub use gesture::GestureTracker;
pub use surface::TweenSurface;
pub use tween::Tween;
