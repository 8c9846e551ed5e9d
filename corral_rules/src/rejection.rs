// Copyright 2025 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Why a create, update, or destroy was refused.

use corral_geometry::{CircleId, FrameId, ValueError};

/// Outcome of a validator: `Ok` means accepted.
pub type Validation<T = ()> = Result<T, Rejection>;

/// A structured refusal returned by the validators.
///
/// These are expected domain outcomes, never panics. Callers render them with
/// [`Rejection::kind`], [`Rejection::field`], and the `Display` message.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Rejection {
    /// A circle was submitted without one of its center coordinates.
    #[error("{field} cannot be null")]
    MissingCoordinate {
        /// `"center_x"` or `"center_y"`.
        field: &'static str,
    },
    /// A circle would extend past its frame.
    ///
    /// `circle` is set when an existing circle is stranded by a frame update.
    #[error("circle must fit completely inside the frame")]
    OutOfBounds {
        /// The circle that does not fit, when it already exists.
        circle: Option<CircleId>,
    },
    /// A circle would intersect a sibling circle.
    #[error("circle cannot overlap with other circles")]
    CircleOverlap {
        /// The first sibling found in the way.
        other: CircleId,
    },
    /// A frame would intersect another frame.
    #[error("frame cannot overlap with other frames")]
    FrameOverlap {
        /// The first frame found in the way.
        other: FrameId,
    },
    /// A frame cannot be destroyed while it owns circles.
    #[error("cannot delete frame with associated circles")]
    HasDependents {
        /// The frame that was to be destroyed.
        frame: FrameId,
        /// How many circles it still owns.
        circles: usize,
    },
    /// A scalar field is out of its domain.
    #[error(transparent)]
    Value(#[from] ValueError),
}

/// Coarse classification of a [`Rejection`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RejectionKind {
    /// See [`Rejection::MissingCoordinate`].
    MissingCoordinate,
    /// See [`Rejection::OutOfBounds`].
    OutOfBounds,
    /// Circle or frame overlap.
    Overlap,
    /// See [`Rejection::HasDependents`].
    HasDependents,
    /// Not a finite number.
    InvalidNumber,
    /// Zero or below where a positive value is required.
    NonPositive,
    /// Below zero where a non-negative value is required.
    Negative,
}

impl Rejection {
    /// The kind of refusal.
    pub fn kind(&self) -> RejectionKind {
        match self {
            Self::MissingCoordinate { .. } => RejectionKind::MissingCoordinate,
            Self::OutOfBounds { .. } => RejectionKind::OutOfBounds,
            Self::CircleOverlap { .. } | Self::FrameOverlap { .. } => RejectionKind::Overlap,
            Self::HasDependents { .. } => RejectionKind::HasDependents,
            Self::Value(ValueError::InvalidNumber { .. }) => RejectionKind::InvalidNumber,
            Self::Value(ValueError::NonPositive { .. }) => RejectionKind::NonPositive,
            Self::Value(ValueError::Negative { .. }) => RejectionKind::Negative,
        }
    }

    /// The input field at fault, or `None` when the refusal concerns the entity as a whole.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingCoordinate { field } => Some(field),
            Self::Value(err) => Some(err.field()),
            _ => None,
        }
    }
}
