#![forbid(unsafe_code)]

//! Core: geometry primitives and input vocabulary for two-pane splits.
//!
//! # Role in Divider
//! `divider-core` is the leaf crate. It owns the pure arithmetic that converts
//! between a split ratio, pixel widths, and absolute screen positions, plus the
//! canonical input events an adapter feeds into the split state machine.
//!
//! # How it fits in the system
//! `divider-layout` builds the boundary policy and the drag state machine on
//! top of these functions. `divider-runtime` translates host events into
//! [`event::SplitInputEvent`] values.

pub mod event;
pub mod geometry;

pub use event::SplitInputEvent;
pub use geometry::{ContainerBounds, LimitKind};
