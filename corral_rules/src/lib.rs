// Copyright 2025 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=corral_rules --heading-base-level=0

//! Corral Rules: the invariant policy and read-side queries over frames and circles.
//!
//! Every function here is pure. Callers hand in the entity under consideration
//! plus the collection it must be checked against, and get back a decision or a
//! result value. Nothing is fetched, cached, or stored.
//!
//! - [`validate_circle`]: a circle must fit in its frame and not overlap its siblings.
//! - [`validate_frame`] / [`validate_destroy`] / [`validate_resize`]: frames must not
//!   overlap, cannot be destroyed while they own circles, and cannot be shrunk or moved
//!   away from the circles they own.
//! - [`RadiusQuery`]: circles lying entirely within a query disk.
//! - [`calculate`]: circle count and extremal groups for one frame.
//!
//! Rejections are values ([`Rejection`]), never panics.
//!
//! # Example
//!
//! ```rust
//! use corral_geometry::{Circle, CircleId, Frame, FrameId};
//! use corral_rules::{CircleDraft, Rejection, calculate, validate_circle};
//! use kurbo::{Point, Size};
//!
//! let frame = Frame::new(FrameId::new(0, 1), Point::new(200.0, 200.0), Size::new(400.0, 400.0)).unwrap();
//! let placed = [
//!     Circle::new(CircleId::new(0, 1), frame.id(), Point::new(100.0, 200.0), 30.0).unwrap(),
//!     Circle::new(CircleId::new(1, 1), frame.id(), Point::new(200.0, 100.0), 40.0).unwrap(),
//! ];
//!
//! // A new circle right on top of the first one is refused.
//! let draft = CircleDraft::new(Point::new(105.0, 200.0), 10.0);
//! assert_eq!(
//!     validate_circle(&draft, &frame, &placed),
//!     Err(Rejection::CircleOverlap { other: CircleId::new(0, 1) }),
//! );
//!
//! // Metrics group circles by extreme position.
//! let metrics = calculate(&frame, &placed);
//! let extremes = metrics.extremes.unwrap();
//! assert_eq!(extremes.highest[0].id(), CircleId::new(0, 1));
//! assert_eq!(extremes.rightmost[0].id(), CircleId::new(1, 1));
//! ```
//!
//! ## Concurrency
//!
//! The validators check a snapshot. If two writers validate circles for the same
//! frame concurrently, both can pass before either is stored. Whoever embeds these
//! rules must serialize writes per frame; `corral_registry` does so by owning all
//! entities behind `&mut self`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod circle;
pub mod frame;
pub mod metrics;
pub mod rejection;
pub mod search;

pub use circle::{CircleDraft, validate_circle};
pub use frame::{validate_destroy, validate_frame, validate_resize};
pub use metrics::{Extreme, Extremes, FrameMetrics, Placement, calculate, extremal_group};
pub use rejection::{Rejection, RejectionKind, Validation};
pub use search::{QueryError, RadiusQuery, filter_within_radius};
