// Copyright 2025 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=corral_registry --heading-base-level=0

//! Corral Registry: an in-memory owner of frames and circles.
//!
//! [`Registry`] stores every frame and circle, hands out generational ids, and
//! runs the `corral_rules` validators on every write. Reads return borrowed views.
//!
//! - Frames: [`Registry::create_frame`], [`Registry::create_frame_with_circles`],
//!   [`Registry::update_frame`], [`Registry::remove_frame`].
//! - Circles: [`Registry::add_circle`], [`Registry::add_circles`],
//!   [`Registry::move_circle`], [`Registry::remove_circle`].
//! - Queries: [`Registry::search_circles`], [`Registry::frame_metrics`].
//!
//! Refusals are logged at `warn` through `tracing` and returned as [`RegistryError`].
//!
//! # Example
//!
//! ```rust
//! use corral_registry::{Registry, RegistryError};
//! use corral_rules::{CircleDraft, RadiusQuery, Rejection};
//! use kurbo::{Point, Size};
//!
//! let mut reg = Registry::new();
//! let frame = reg.create_frame(Point::new(200.0, 200.0), Size::new(400.0, 400.0)).unwrap();
//!
//! let a = reg.add_circle(frame, CircleDraft::new(Point::new(100.0, 100.0), 50.0)).unwrap();
//! // Touching is allowed.
//! reg.add_circle(frame, CircleDraft::new(Point::new(150.0, 100.0), 50.0)).unwrap();
//! // Overlapping is not.
//! assert_eq!(
//!     reg.add_circle(frame, CircleDraft::new(Point::new(110.0, 100.0), 20.0)),
//!     Err(RegistryError::Rejected(Rejection::CircleOverlap { other: a })),
//! );
//!
//! let query = RadiusQuery::new(100.0, 100.0, 30.0).unwrap();
//! let found = reg.search_circles(&query, None);
//! assert_eq!(found.len(), 1);
//!
//! let metrics = reg.frame_metrics(frame).unwrap();
//! assert_eq!(metrics.total_circles, 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
mod registry;
mod slots;

pub use error::{Position, RegistryError};
pub use registry::{BatchOutcome, Registry};
