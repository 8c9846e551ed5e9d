// Copyright 2025 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors returned by [`Registry`](crate::Registry) operations.

use core::fmt;

use corral_geometry::{CircleId, FrameId};
use corral_rules::Rejection;

/// Where a circle sat in a submitted list.
///
/// The wrapped index is zero-based. It displays one-based as `circle_1`,
/// `circle_2`, and so on, which is how both [`RegistryError::Nested`] and
/// [`BatchOutcome`](crate::BatchOutcome) name refused circles.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Position(pub usize);

impl Position {
    /// The zero-based index into the submitted slice.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "circle_{}", self.0 + 1)
    }
}

/// Why a registry operation did not happen.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RegistryError {
    /// No live frame has this id.
    #[error("frame {0:?} not found")]
    UnknownFrame(FrameId),
    /// No live circle has this id.
    #[error("circle {0:?} not found")]
    UnknownCircle(CircleId),
    /// The validators refused the change.
    #[error(transparent)]
    Rejected(#[from] Rejection),
    /// A circle submitted together with a new frame was refused; nothing was stored.
    #[error("{position}: {source}")]
    Nested {
        /// Position of the circle in the submitted list.
        position: Position,
        /// Why it was refused.
        source: Rejection,
    },
}

impl RegistryError {
    /// The underlying rejection, if the validators were involved.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected(r) | Self::Nested { source: r, .. } => Some(r),
            Self::UnknownFrame(_) | Self::UnknownCircle(_) => None,
        }
    }
}
