// Copyright 2025 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=corral_geometry --heading-base-level=0

//! Corral Geometry: frames, circles, and the predicates between them.
//!
//! This crate is the leaf of the Corral workspace. It defines the two entities and
//! the pure predicates every higher layer relies on:
//!
//! - [`Frame`]: an axis-aligned rectangle given by center and size; a container for circles.
//! - [`Circle`]: a disk given by center and diameter, owned by exactly one frame.
//! - [`Disc`]: the shape of a circle without identity, as checked before it is stored.
//! - [`predicates`]: distance, containment, overlap, touch, and radius membership.
//!
//! Nothing here owns storage or decides which entities to compare.
//! Callers pass the candidates in; the predicates answer yes or no.
//!
//! # Example
//!
//! ```rust
//! use corral_geometry::{Circle, CircleId, Frame, FrameId, circle_fits_inside_frame, circles_overlap, circles_touch};
//! use kurbo::{Point, Size};
//!
//! let frame = Frame::new(FrameId::new(0, 1), Point::new(100.0, 100.0), Size::new(200.0, 200.0)).unwrap();
//! let a = Circle::new(CircleId::new(0, 1), frame.id(), Point::new(100.0, 100.0), 50.0).unwrap();
//! let b = Circle::new(CircleId::new(1, 1), frame.id(), Point::new(140.0, 100.0), 30.0).unwrap();
//!
//! assert!(circle_fits_inside_frame(&a, &frame));
//! // 40 apart with radii 25 and 15: they touch, which is allowed.
//! assert!(circles_touch(&a, &b));
//! assert!(!circles_overlap(&a, &b));
//! ```
//!
//! ## Conventions
//!
//! - The y axis points up; a frame's top edge is `center_y + height / 2`.
//! - Containment is boundary-inclusive; overlap is strict. Touching shapes never overlap.
//! - Pairwise entity checks treat equal ids as "the same entity" and return `false`.
//!
//! ### Precision
//!
//! Coordinates and sizes are held as [`Hundredths`]: integers counting `0.01`
//! units. `f64` inputs are rounded to the nearest hundredth when a frame, circle,
//! or disc is built. Containment, overlap, and touch compare those integers
//! (squared distances against squared radius sums), so two circles `0.30` apart
//! with radii `0.10` and `0.20` touch exactly, on an axis or a diagonal. Touch and
//! overlap never both hold for one pair.
//!
//! This crate is `no_std`. Enable `std` (default) or `libm` for Kurbo's float functions.

#![no_std]

pub mod error;
pub mod fixed;
pub mod predicates;
pub mod types;

pub use error::ValueError;
pub use fixed::Hundredths;
pub use predicates::{
    circle_fits_inside_frame, circle_within_radius, circles_overlap, circles_touch,
    disc_fits_inside, discs_overlap, discs_touch, euclidean_distance, frames_overlap,
};
pub use types::{Circle, CircleId, Disc, Frame, FrameId};
