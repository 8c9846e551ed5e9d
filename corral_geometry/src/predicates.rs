// Copyright 2025 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Containment, overlap, and touch predicates.
//!
//! Two layers are provided:
//! - Shape-level functions over [`Disc`] ([`disc_fits_inside`], [`discs_overlap`],
//!   [`discs_touch`]). These know nothing about identity.
//! - Entity-level functions over [`Frame`] and [`Circle`]. Pairwise checks return
//!   `false` when both arguments carry the same id, so an entity never collides
//!   with an earlier copy of itself.
//!
//! Overlap is strict: shapes whose boundaries meet exactly do not overlap.
//! Every comparison between shapes runs on the integer [`Hundredths`] the shapes
//! hold, squaring instead of taking roots, so contact is decided exactly.

use core::cmp::Ordering;

use kurbo::Point;

use crate::fixed::Hundredths;
use crate::types::{Circle, Disc, Frame};

/// `sqrt((x1 - x2)^2 + (y1 - y2)^2)`.
#[inline]
pub fn euclidean_distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    Point::new(x1, y1).distance(Point::new(x2, y2))
}

/// Whether `disc` lies within `frame`, boundary included.
pub fn disc_fits_inside(disc: &Disc, frame: &Frame) -> bool {
    let (dx0, dx1) = disc.x_span();
    let (dy0, dy1) = disc.y_span();
    let (fx0, fx1) = frame.x_span();
    let (fy0, fy1) = frame.y_span();
    dx0 >= fx0 && dx1 <= fx1 && dy0 >= fy0 && dy1 <= fy1
}

/// Whether two discs share interior points: `distance < r1 + r2`.
pub fn discs_overlap(a: &Disc, b: &Disc) -> bool {
    contact(a, b) == Ordering::Less
}

/// Whether two discs meet exactly at their boundaries: `distance == r1 + r2`.
pub fn discs_touch(a: &Disc, b: &Disc) -> bool {
    contact(a, b) == Ordering::Equal
}

/// Whether `circle` lies entirely within its `frame`, touching the edges allowed.
pub fn circle_fits_inside_frame(circle: &Circle, frame: &Frame) -> bool {
    disc_fits_inside(&circle.disc(), frame)
}

/// Whether two distinct circles overlap. Touching circles do not.
pub fn circles_overlap(a: &Circle, b: &Circle) -> bool {
    a.id() != b.id() && discs_overlap(&a.disc(), &b.disc())
}

/// Whether two distinct circles touch exactly.
pub fn circles_touch(a: &Circle, b: &Circle) -> bool {
    a.id() != b.id() && discs_touch(&a.disc(), &b.disc())
}

/// Whether two distinct frames overlap.
///
/// Strict AABB overlap: the projections must overlap with positive length on
/// both axes, so frames sharing an edge or a corner do not overlap.
pub fn frames_overlap(a: &Frame, b: &Frame) -> bool {
    fn spans(a: (i64, i64), b: (i64, i64)) -> bool {
        a.0 < b.1 && a.1 > b.0
    }
    a.id() != b.id() && spans(a.x_span(), b.x_span()) && spans(a.y_span(), b.y_span())
}

/// Whether the whole of `circle` lies within the disk of `radius` around `center`:
/// `distance + circle.radius <= radius`.
///
/// `center` and `radius` are rounded to hundredths like every other input. A
/// query that cannot be represented matches nothing.
pub fn circle_within_radius(circle: &Circle, center: Point, radius: f64) -> bool {
    let (Some(qx), Some(qy), Some(r)) = (
        Hundredths::nearest(center.x),
        Hundredths::nearest(center.y),
        Hundredths::nearest(radius),
    ) else {
        return false;
    };
    let disc = circle.disc();
    // 2 * distance <= 2 * radius - diameter
    let reach = 2 * r.raw() - disc.diameter_raw();
    if reach < 0 {
        return false;
    }
    let (cx, cy) = disc.center_raw();
    4 * (sq(cx - qx.raw()) + sq(cy - qy.raw())) <= sq(reach)
}

/// Compares `4 * distance^2` with `(d1 + d2)^2`, the squares of
/// `2 * distance` and `2 * (r1 + r2)`.
fn contact(a: &Disc, b: &Disc) -> Ordering {
    let (ax, ay) = a.center_raw();
    let (bx, by) = b.center_raw();
    let gap = 4 * (sq(ax - bx) + sq(ay - by));
    gap.cmp(&sq(a.diameter_raw() + b.diameter_raw()))
}

fn sq(v: i64) -> i128 {
    i128::from(v) * i128::from(v)
}
