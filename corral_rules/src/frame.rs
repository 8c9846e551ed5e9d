// Copyright 2025 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement and removal rules for frames.

use corral_geometry::{Circle, Frame, circle_fits_inside_frame, frames_overlap};

use crate::rejection::{Rejection, Validation};

/// Decide whether `candidate` may exist next to `others`.
///
/// A frame in `others` with the candidate's own id is its stored state and never
/// counts. Frames that only share an edge are accepted.
pub fn validate_frame<'a, I>(candidate: &Frame, others: I) -> Validation
where
    I: IntoIterator<Item = &'a Frame>,
{
    match others
        .into_iter()
        .find(|other| frames_overlap(candidate, other))
    {
        Some(other) => Err(Rejection::FrameOverlap { other: other.id() }),
        None => Ok(()),
    }
}

/// Decide whether `frame` may be destroyed given the circles it owns.
pub fn validate_destroy<'a, I>(frame: &Frame, owned: I) -> Validation
where
    I: IntoIterator<Item = &'a Circle>,
{
    let circles = owned.into_iter().count();
    if circles > 0 {
        return Err(Rejection::HasDependents {
            frame: frame.id(),
            circles,
        });
    }
    Ok(())
}

/// Decide whether a moved or resized `frame` still contains every circle it owns.
pub fn validate_resize<'a, I>(frame: &Frame, owned: I) -> Validation
where
    I: IntoIterator<Item = &'a Circle>,
{
    match owned
        .into_iter()
        .find(|c| !circle_fits_inside_frame(c, frame))
    {
        Some(stranded) => Err(Rejection::OutOfBounds {
            circle: Some(stranded.id()),
        }),
        None => Ok(()),
    }
}
