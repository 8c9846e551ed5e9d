// Copyright 2025 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entity identifiers and the two geometric entities: frames and circles.

use kurbo::{Point, Rect, Size};

use crate::error::ValueError;
use crate::fixed::Hundredths;

/// Identifier for a frame.
///
/// A small, copyable handle made of a slot index and a generation counter.
/// Two ids are the same entity exactly when both parts match; the derived
/// ordering is only used to keep collections deterministic.
///
/// ## Semantics
///
/// - Storage that hands out ids starts every slot at generation `1`.
/// - When a slot is freed and reused, its generation is incremented, so a stale
///   id never aliases the new occupant.
/// - Embedders with their own keys can use generation `0` and the key as slot.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameId(u32, u32);

impl FrameId {
    /// Create an id from a slot index and a generation.
    pub const fn new(slot: u32, generation: u32) -> Self {
        Self(slot, generation)
    }

    /// Slot index.
    pub const fn slot(self) -> u32 {
        self.0
    }

    /// Generation of the slot when this id was issued.
    pub const fn generation(self) -> u32 {
        self.1
    }
}

/// Identifier for a circle. Same semantics as [`FrameId`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircleId(u32, u32);

impl CircleId {
    /// Create an id from a slot index and a generation.
    pub const fn new(slot: u32, generation: u32) -> Self {
        Self(slot, generation)
    }

    /// Slot index.
    pub const fn slot(self) -> u32 {
        self.0
    }

    /// Generation of the slot when this id was issued.
    pub const fn generation(self) -> u32 {
        self.1
    }
}

/// Axis-aligned rectangle described by its center and size.
///
/// The y axis points up: [`Frame::top_edge`] is `center_y + height / 2`.
/// Values are held as [`Hundredths`]; the size is strictly positive and the
/// center lies in the non-negative quadrant.
///
/// With the `serde` feature, deserializing goes through [`Frame::new`], so the
/// same domain checks apply.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Frame {
    id: FrameId,
    width: Hundredths,
    height: Hundredths,
    center_x: Hundredths,
    center_y: Hundredths,
}

impl Frame {
    /// Create a frame, checking the scalar domain of every field.
    ///
    /// Each value is rounded to the nearest hundredth.
    pub fn new(id: FrameId, center: Point, size: Size) -> Result<Self, ValueError> {
        Ok(Self {
            id,
            width: Hundredths::positive("width", size.width)?,
            height: Hundredths::positive("height", size.height)?,
            center_x: Hundredths::non_negative("center_x", center.x)?,
            center_y: Hundredths::non_negative("center_y", center.y)?,
        })
    }

    /// Identity of this frame.
    pub fn id(&self) -> FrameId {
        self.id
    }

    /// Width of the frame.
    pub fn width(&self) -> f64 {
        self.width.to_f64()
    }

    /// Height of the frame.
    pub fn height(&self) -> f64 {
        self.height.to_f64()
    }

    /// Center point.
    pub fn center(&self) -> Point {
        Point::new(self.center_x.to_f64(), self.center_y.to_f64())
    }

    /// Size of the frame.
    pub fn size(&self) -> Size {
        Size::new(self.width.to_f64(), self.height.to_f64())
    }

    /// `center_x - width / 2`.
    pub fn left_edge(&self) -> f64 {
        halves(self.x_span().0)
    }

    /// `center_x + width / 2`.
    pub fn right_edge(&self) -> f64 {
        halves(self.x_span().1)
    }

    /// `center_y - height / 2`.
    pub fn bottom_edge(&self) -> f64 {
        halves(self.y_span().0)
    }

    /// `center_y + height / 2`.
    pub fn top_edge(&self) -> f64 {
        halves(self.y_span().1)
    }

    /// Bounds as a Kurbo rectangle: `x0..x1` is left..right, `y0..y1` is bottom..top.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.left_edge(),
            self.bottom_edge(),
            self.right_edge(),
            self.top_edge(),
        )
    }

    /// Horizontal extent in half-hundredths: `(2 * center_x - width, 2 * center_x + width)`.
    pub(crate) fn x_span(&self) -> (i64, i64) {
        span(self.center_x, self.width)
    }

    /// Vertical extent in half-hundredths.
    pub(crate) fn y_span(&self) -> (i64, i64) {
        span(self.center_y, self.height)
    }
}

/// A disk without identity: center and diameter in [`Hundredths`].
///
/// This is the shape the validators accept or refuse before a [`Circle`]
/// exists for it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Disc {
    center_x: Hundredths,
    center_y: Hundredths,
    diameter: Hundredths,
}

impl Disc {
    /// Create a disc, checking the scalar domain of every field.
    ///
    /// Each value is rounded to the nearest hundredth.
    pub fn new(center: Point, diameter: f64) -> Result<Self, ValueError> {
        Ok(Self {
            center_x: Hundredths::non_negative("center_x", center.x)?,
            center_y: Hundredths::non_negative("center_y", center.y)?,
            diameter: Hundredths::positive("diameter", diameter)?,
        })
    }

    /// Center point.
    pub fn center(&self) -> Point {
        Point::new(self.center_x.to_f64(), self.center_y.to_f64())
    }

    /// Diameter of the disc.
    pub fn diameter(&self) -> f64 {
        self.diameter.to_f64()
    }

    /// `diameter / 2`.
    pub fn radius(&self) -> f64 {
        halves(self.diameter.raw())
    }

    /// The disc as a Kurbo shape.
    pub fn to_kurbo(&self) -> kurbo::Circle {
        kurbo::Circle::new(self.center(), self.radius())
    }

    pub(crate) fn center_raw(&self) -> (i64, i64) {
        (self.center_x.raw(), self.center_y.raw())
    }

    pub(crate) fn diameter_raw(&self) -> i64 {
        self.diameter.raw()
    }

    pub(crate) fn x_span(&self) -> (i64, i64) {
        span(self.center_x, self.diameter)
    }

    pub(crate) fn y_span(&self) -> (i64, i64) {
        span(self.center_y, self.diameter)
    }
}

/// Disk owned by exactly one [`Frame`].
///
/// The owning frame is fixed when the circle is built. With the `serde`
/// feature, deserializing goes through [`Circle::new`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Circle {
    id: CircleId,
    frame: FrameId,
    diameter: Hundredths,
    center_x: Hundredths,
    center_y: Hundredths,
}

impl Circle {
    /// Create a circle owned by `frame`, checking the scalar domain of every field.
    pub fn new(
        id: CircleId,
        frame: FrameId,
        center: Point,
        diameter: f64,
    ) -> Result<Self, ValueError> {
        Ok(Self::from_disc(id, frame, Disc::new(center, diameter)?))
    }

    /// Give an already checked disc an identity and an owner.
    pub fn from_disc(id: CircleId, frame: FrameId, disc: Disc) -> Self {
        Self {
            id,
            frame,
            diameter: disc.diameter,
            center_x: disc.center_x,
            center_y: disc.center_y,
        }
    }

    /// Identity of this circle.
    pub fn id(&self) -> CircleId {
        self.id
    }

    /// The owning frame.
    pub fn frame(&self) -> FrameId {
        self.frame
    }

    /// Diameter of the circle.
    pub fn diameter(&self) -> f64 {
        self.diameter.to_f64()
    }

    /// `diameter / 2`.
    pub fn radius(&self) -> f64 {
        halves(self.diameter.raw())
    }

    /// Center point.
    pub fn center(&self) -> Point {
        Point::new(self.center_x.to_f64(), self.center_y.to_f64())
    }

    /// The circle's shape without identity.
    pub fn disc(&self) -> Disc {
        Disc {
            center_x: self.center_x,
            center_y: self.center_y,
            diameter: self.diameter,
        }
    }

    /// Euclidean distance between the two centers.
    pub fn distance_to(&self, other: &Self) -> f64 {
        self.center().distance(other.center())
    }

    /// Copy of this circle moved to `center`, keeping identity, owner, and diameter.
    pub fn moved_to(&self, center: Point) -> Result<Self, ValueError> {
        Ok(Self {
            center_x: Hundredths::non_negative("center_x", center.x)?,
            center_y: Hundredths::non_negative("center_y", center.y)?,
            ..*self
        })
    }
}

/// `(2 * center - extent, 2 * center + extent)`, in half-hundredths.
fn span(center: Hundredths, extent: Hundredths) -> (i64, i64) {
    let c = 2 * center.raw();
    (c - extent.raw(), c + extent.raw())
}

/// A count of half-hundredths as an `f64`.
fn halves(v: i64) -> f64 {
    v as f64 / 200.0
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Frame {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Record {
            id: FrameId,
            width: f64,
            height: f64,
            center_x: f64,
            center_y: f64,
        }
        let r = Record::deserialize(deserializer)?;
        Self::new(
            r.id,
            Point::new(r.center_x, r.center_y),
            Size::new(r.width, r.height),
        )
        .map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Circle {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Record {
            id: CircleId,
            frame: FrameId,
            diameter: f64,
            center_x: f64,
            center_y: f64,
        }
        let r = Record::deserialize(deserializer)?;
        Self::new(r.id, r.frame, Point::new(r.center_x, r.center_y), r.diameter)
            .map_err(serde::de::Error::custom)
    }
}
