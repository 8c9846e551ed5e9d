// Copyright 2025 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement rules for a circle inside its frame.

use corral_geometry::{Circle, CircleId, Disc, Frame, disc_fits_inside, discs_overlap};
use kurbo::Point;

use crate::rejection::{Rejection, Validation};

/// A circle as submitted for create or update, before it is accepted.
///
/// Coordinates are optional so that a request missing one can be reported as
/// [`Rejection::MissingCoordinate`] rather than silently defaulted.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircleDraft {
    /// Identity of the circle being updated; `None` for a new circle.
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: Option<CircleId>,
    /// Center x, if given.
    pub center_x: Option<f64>,
    /// Center y, if given.
    pub center_y: Option<f64>,
    /// Diameter of the circle.
    pub diameter: f64,
}

impl CircleDraft {
    /// A new circle at `center`.
    pub fn new(center: Point, diameter: f64) -> Self {
        Self {
            id: None,
            center_x: Some(center.x),
            center_y: Some(center.y),
            diameter,
        }
    }

    /// A draft describing `circle` as it currently is, for an update.
    pub fn from_circle(circle: &Circle) -> Self {
        let center = circle.center();
        Self {
            id: Some(circle.id()),
            center_x: Some(center.x),
            center_y: Some(center.y),
            diameter: circle.diameter(),
        }
    }
}

/// Decide whether `draft` may be placed in `frame` next to `siblings`.
///
/// Checks run in this order and the first failure is returned:
/// 1. both center coordinates are present,
/// 2. every scalar is in its domain,
/// 3. the circle fits inside the frame (touching an edge is fine),
/// 4. no sibling overlaps it (touching is fine).
///
/// A sibling with the same id as `draft.id` is the circle's own stored state and
/// is skipped. On success the accepted disc, rounded to hundredths, is returned.
pub fn validate_circle<'a, I>(
    draft: &CircleDraft,
    frame: &Frame,
    siblings: I,
) -> Validation<Disc>
where
    I: IntoIterator<Item = &'a Circle>,
{
    let Some(x) = draft.center_x else {
        return Err(Rejection::MissingCoordinate { field: "center_x" });
    };
    let Some(y) = draft.center_y else {
        return Err(Rejection::MissingCoordinate { field: "center_y" });
    };
    let disc = Disc::new(Point::new(x, y), draft.diameter)?;

    if !disc_fits_inside(&disc, frame) {
        return Err(Rejection::OutOfBounds { circle: draft.id });
    }
    let blocker = siblings
        .into_iter()
        .filter(|s| Some(s.id()) != draft.id)
        .find(|s| discs_overlap(&disc, &s.disc()));
    if let Some(other) = blocker {
        return Err(Rejection::CircleOverlap { other: other.id() });
    }
    Ok(disc)
}
