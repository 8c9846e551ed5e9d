// Copyright 2025 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-point scalars with two decimal places.
//!
//! Every coordinate and size held by a [`Frame`](crate::Frame) or
//! [`Circle`](crate::Circle) is a [`Hundredths`]: an integer count of `0.01`
//! units. Inputs arrive as `f64` and are rounded to the nearest hundredth, half
//! away from zero. Comparisons between shapes then run in integer arithmetic, so
//! a decimal contact such as `0.10 + 0.20 == 0.30` is exact.

use crate::error::ValueError;

/// A scalar stored as an integer number of hundredths.
///
/// The magnitude is bounded by [`Hundredths::MAX`], which keeps every squared
/// distance the predicates compute inside `i128` and keeps the `f64` view exact
/// enough to round-trip.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Hundredths(i64);

impl Hundredths {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// Largest accepted magnitude: `10^13` units.
    pub const MAX: Self = Self(1_000_000_000_000_000);

    /// Wrap a raw count of hundredths, if it is within range.
    pub const fn from_raw(raw: i64) -> Option<Self> {
        if raw > Self::MAX.0 || raw < -Self::MAX.0 {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// The raw count of hundredths.
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Round `value` to the nearest hundredth.
    ///
    /// Returns `None` for NaN, infinities, and magnitudes past [`Hundredths::MAX`].
    pub fn nearest(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let scaled = value * 100.0;
        let limit = Self::MAX.0 as f64;
        if scaled > limit || scaled < -limit {
            return None;
        }
        let rounded = if scaled < 0.0 {
            scaled - 0.5
        } else {
            scaled + 0.5
        };
        Self::from_raw(truncate(rounded))
    }

    /// Accept `value` if it rounds to a strictly positive number of hundredths.
    pub fn positive(field: &'static str, value: f64) -> Result<Self, ValueError> {
        let h = Self::nearest(value).ok_or(ValueError::InvalidNumber { field })?;
        if h.0 <= 0 {
            return Err(ValueError::NonPositive { field, value });
        }
        Ok(h)
    }

    /// Accept `value` if it rounds to a non-negative number of hundredths.
    pub fn non_negative(field: &'static str, value: f64) -> Result<Self, ValueError> {
        let h = Self::nearest(value).ok_or(ValueError::InvalidNumber { field })?;
        if h.0 < 0 {
            return Err(ValueError::Negative { field, value });
        }
        Ok(h)
    }

    /// The value as the nearest `f64`.
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Callers bound the magnitude to Hundredths::MAX first; truncation completes the rounding."
)]
fn truncate(v: f64) -> i64 {
    v as i64
}

#[cfg(feature = "serde")]
impl serde::Serialize for Hundredths {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_f64())
    }
}
