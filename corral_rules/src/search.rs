// Copyright 2025 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radius search: which circles lie entirely inside a query disk.

use alloc::vec::Vec;

use corral_geometry::{Circle, Hundredths, ValueError, circle_within_radius};
use kurbo::Point;

/// A checked radius query.
///
/// The center lies in the non-negative quadrant and the radius is strictly
/// positive. All three are rounded to hundredths, like every stored coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RadiusQuery {
    center: Point,
    radius: f64,
}

/// Errors from [`RadiusQuery::parse`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum QueryError {
    /// One or more parameters were absent or blank.
    #[error("Missing required search parameters: {}", .fields.join(", "))]
    Missing {
        /// Names of the missing parameters, in declaration order.
        fields: Vec<&'static str>,
    },
    /// A parameter was present but is not an acceptable number.
    #[error(transparent)]
    Value(#[from] ValueError),
}

impl RadiusQuery {
    /// Build a query from numbers, checking their domain.
    pub fn new(center_x: f64, center_y: f64, radius: f64) -> Result<Self, ValueError> {
        Ok(Self {
            center: Point::new(
                Hundredths::non_negative("center_x", center_x)?.to_f64(),
                Hundredths::non_negative("center_y", center_y)?.to_f64(),
            ),
            radius: Hundredths::positive("radius", radius)?.to_f64(),
        })
    }

    /// Build a query from raw request parameters.
    ///
    /// Absent or blank parameters are reported together. Each present parameter
    /// must be a plain decimal literal (optional leading `-`, digits, optional
    /// fraction, optional exponent), surrounding whitespace ignored. Literals
    /// such as `inf`, `NaN`, `1.`, or `+3` are rejected as invalid numbers.
    pub fn parse(
        center_x: Option<&str>,
        center_y: Option<&str>,
        radius: Option<&str>,
    ) -> Result<Self, QueryError> {
        let params = [
            ("center_x", center_x),
            ("center_y", center_y),
            ("radius", radius),
        ];
        let missing: Vec<&'static str> = params
            .iter()
            .filter(|(_, raw)| raw.is_none_or(|s| s.trim().is_empty()))
            .map(|(field, _)| *field)
            .collect();
        if !missing.is_empty() {
            return Err(QueryError::Missing { fields: missing });
        }

        let mut values = [0.0_f64; 3];
        for (slot, (field, raw)) in values.iter_mut().zip(params) {
            *slot = read_number(field, raw.unwrap_or_default())?;
        }
        let [x, y, r] = values;
        Ok(Self::new(x, y, r)?)
    }

    /// Center of the query disk.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Radius of the query disk.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Whether the whole of `circle` lies within the query disk.
    pub fn contains(&self, circle: &Circle) -> bool {
        circle_within_radius(circle, self.center, self.radius)
    }

    /// Every candidate that lies within the query disk, in input order.
    ///
    /// Returns an empty list when nothing matches; whether that is "not found"
    /// is the caller's call.
    pub fn filter<'a, I>(&self, candidates: I) -> Vec<&'a Circle>
    where
        I: IntoIterator<Item = &'a Circle>,
    {
        candidates.into_iter().filter(|c| self.contains(c)).collect()
    }
}

/// Free-function form of [`RadiusQuery::filter`].
pub fn filter_within_radius<'a, I>(candidates: I, query: &RadiusQuery) -> Vec<&'a Circle>
where
    I: IntoIterator<Item = &'a Circle>,
{
    query.filter(candidates)
}

fn read_number(field: &'static str, raw: &str) -> Result<f64, ValueError> {
    let s = raw.trim();
    if !is_decimal_literal(s) {
        return Err(ValueError::InvalidNumber { field });
    }
    s.parse::<f64>()
        .map_err(|_| ValueError::InvalidNumber { field })
}

/// `-?\d+(\.\d+)?([eE][+-]?\d+)?`
fn is_decimal_literal(s: &str) -> bool {
    fn digits(b: &[u8]) -> usize {
        b.iter().take_while(|c| c.is_ascii_digit()).count()
    }

    let mut b = s.as_bytes();
    if let [b'-', rest @ ..] = b {
        b = rest;
    }
    let n = digits(b);
    if n == 0 {
        return false;
    }
    b = &b[n..];
    if let [b'.', rest @ ..] = b {
        let n = digits(rest);
        if n == 0 {
            return false;
        }
        b = &rest[n..];
    }
    if let [b'e' | b'E', rest @ ..] = b {
        let rest = match rest {
            [b'+' | b'-', tail @ ..] => tail,
            _ => rest,
        };
        let n = digits(rest);
        if n == 0 {
            return false;
        }
        b = &rest[n..];
    }
    b.is_empty()
}
