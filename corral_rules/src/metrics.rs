// Copyright 2025 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame summary: circle count and the extremal circles along each axis.
//!
//! ## Ties
//!
//! Each extremal group holds every circle whose coordinate equals the extreme
//! value, not a single winner. Two circles sharing the highest `center_y` both
//! land in [`Extremes::highest`]. Groups keep the order in which circles were
//! supplied, so the output is deterministic for a given input.
//!
//! A circle can belong to several groups at once; [`Extremes::placement_of`]
//! reports all of them as a [`Placement`] bit set.

use alloc::vec::Vec;

use bitflags::bitflags;
use corral_geometry::{Circle, CircleId, Frame};

/// One of the four extremal groups.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Extreme {
    /// Largest `center_y`.
    Highest,
    /// Smallest `center_y`.
    Lowest,
    /// Smallest `center_x`.
    Leftmost,
    /// Largest `center_x`.
    Rightmost,
}

impl Extreme {
    /// All four groups, in reporting order.
    pub const ALL: [Self; 4] = [Self::Highest, Self::Lowest, Self::Leftmost, Self::Rightmost];

    /// The coordinate this group ranks by.
    fn coordinate(self, circle: &Circle) -> f64 {
        let center = circle.center();
        match self {
            Self::Highest | Self::Lowest => center.y,
            Self::Leftmost | Self::Rightmost => center.x,
        }
    }

    /// Whether `candidate` is strictly more extreme than `best`.
    fn beats(self, candidate: f64, best: f64) -> bool {
        match self {
            Self::Highest | Self::Rightmost => candidate > best,
            Self::Lowest | Self::Leftmost => candidate < best,
        }
    }

    /// The matching [`Placement`] bit.
    pub fn placement(self) -> Placement {
        match self {
            Self::Highest => Placement::HIGHEST,
            Self::Lowest => Placement::LOWEST,
            Self::Leftmost => Placement::LEFTMOST,
            Self::Rightmost => Placement::RIGHTMOST,
        }
    }
}

bitflags! {
    /// Which extremal groups a circle belongs to.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct Placement: u8 {
        /// In the highest group.
        const HIGHEST   = 0b0000_0001;
        /// In the lowest group.
        const LOWEST    = 0b0000_0010;
        /// In the leftmost group.
        const LEFTMOST  = 0b0000_0100;
        /// In the rightmost group.
        const RIGHTMOST = 0b0000_1000;
    }
}

/// The four extremal groups of a non-empty set of circles.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Extremes<'a> {
    /// Circles with the largest `center_y`.
    #[cfg_attr(feature = "serde", serde(rename = "highest_circles"))]
    pub highest: Vec<&'a Circle>,
    /// Circles with the smallest `center_y`.
    #[cfg_attr(feature = "serde", serde(rename = "lowest_circles"))]
    pub lowest: Vec<&'a Circle>,
    /// Circles with the smallest `center_x`.
    #[cfg_attr(feature = "serde", serde(rename = "leftmost_circles"))]
    pub leftmost: Vec<&'a Circle>,
    /// Circles with the largest `center_x`.
    #[cfg_attr(feature = "serde", serde(rename = "rightmost_circles"))]
    pub rightmost: Vec<&'a Circle>,
}

impl<'a> Extremes<'a> {
    /// The group for `extreme`.
    pub fn group(&self, extreme: Extreme) -> &[&'a Circle] {
        match extreme {
            Extreme::Highest => &self.highest,
            Extreme::Lowest => &self.lowest,
            Extreme::Leftmost => &self.leftmost,
            Extreme::Rightmost => &self.rightmost,
        }
    }

    /// Every group the circle `id` appears in; empty if none.
    pub fn placement_of(&self, id: CircleId) -> Placement {
        Extreme::ALL
            .into_iter()
            .filter(|e| self.group(*e).iter().any(|c| c.id() == id))
            .fold(Placement::empty(), |acc, e| acc | e.placement())
    }
}

/// Summary of one frame and its circles.
///
/// `extremes` is `None` exactly when the frame has no circles. That is distinct
/// from groups that exist but are empty, which cannot happen.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FrameMetrics<'a> {
    /// The frame summarized.
    pub frame: &'a Frame,
    /// Number of circles supplied.
    pub total_circles: usize,
    /// Extremal groups; absent for an empty frame.
    #[cfg_attr(
        feature = "serde",
        serde(flatten, skip_serializing_if = "Option::is_none")
    )]
    pub extremes: Option<Extremes<'a>>,
}

/// Compute the metrics of `frame` from the circles it owns.
///
/// `circles` is taken as given; the caller is expected to pass exactly the
/// frame's circles.
pub fn calculate<'a, I>(frame: &'a Frame, circles: I) -> FrameMetrics<'a>
where
    I: IntoIterator<Item = &'a Circle>,
{
    let circles: Vec<&'a Circle> = circles.into_iter().collect();
    let extremes = (!circles.is_empty()).then(|| Extremes {
        highest: group(&circles, Extreme::Highest),
        lowest: group(&circles, Extreme::Lowest),
        leftmost: group(&circles, Extreme::Leftmost),
        rightmost: group(&circles, Extreme::Rightmost),
    });
    FrameMetrics {
        frame,
        total_circles: circles.len(),
        extremes,
    }
}

/// Every circle sharing the extreme coordinate for `extreme`, in input order.
pub fn extremal_group<'a, I>(circles: I, extreme: Extreme) -> Vec<&'a Circle>
where
    I: IntoIterator<Item = &'a Circle>,
{
    let circles: Vec<&'a Circle> = circles.into_iter().collect();
    group(&circles, extreme)
}

fn group<'a>(circles: &[&'a Circle], extreme: Extreme) -> Vec<&'a Circle> {
    let Some(best) = circles
        .iter()
        .map(|c| extreme.coordinate(c))
        .reduce(|best, v| if extreme.beats(v, best) { v } else { best })
    else {
        return Vec::new();
    };
    circles
        .iter()
        .copied()
        .filter(|c| extreme.coordinate(c) == best)
        .collect()
}
