// Copyright 2025 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar domain errors raised while building frames, circles, and queries.

/// A scalar input fell outside its domain.
///
/// Every constructor in this workspace funnels its numeric inputs through
/// [`Hundredths::positive`](crate::Hundredths::positive) or
/// [`Hundredths::non_negative`](crate::Hundredths::non_negative), so geometry values
/// held by a [`Frame`](crate::Frame) or [`Circle`](crate::Circle) are always in range.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValueError {
    /// The value is NaN, infinite, too large, or could not be read as a number.
    #[error("{field} must be a valid number")]
    InvalidNumber {
        /// Name of the offending field.
        field: &'static str,
    },
    /// The value must be strictly greater than zero after rounding to hundredths.
    #[error("{field} must be a positive number, got {value}")]
    NonPositive {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The value must not be below zero.
    #[error("{field} must not be negative, got {value}")]
    Negative {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl ValueError {
    /// Name of the field that was rejected.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidNumber { field }
            | Self::NonPositive { field, .. }
            | Self::Negative { field, .. } => field,
        }
    }
}
