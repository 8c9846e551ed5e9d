// Copyright 2025 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The registry: storage, lifecycle operations, and read queries.

use alloc::vec::Vec;

use corral_geometry::{Circle, CircleId, Frame, FrameId};
use corral_rules::{
    CircleDraft, FrameMetrics, RadiusQuery, Rejection, calculate, validate_circle,
    validate_destroy, validate_frame, validate_resize,
};
use kurbo::{Point, Size};
use tracing::{debug, warn};

use crate::error::{Position, RegistryError};
use crate::slots::Slots;

#[derive(Clone, Debug)]
struct FrameNode {
    frame: Frame,
    circles: Vec<CircleId>, // creation order
}

/// Result of [`Registry::add_circles`].
///
/// Circles are validated one after another; each accepted circle is stored
/// immediately and constrains the ones after it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchOutcome {
    /// Ids of the stored circles, in submission order.
    pub created: Vec<CircleId>,
    /// Refused circles with their position in the submitted list.
    pub rejected: Vec<(Position, Rejection)>,
}

impl BatchOutcome {
    /// True if every submitted circle was stored.
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Owner of all frames and circles.
///
/// Every write takes `&mut self`, so writes are serialized: a circle is
/// validated against exactly the siblings that exist when it is stored.
/// Share a registry across threads behind a lock rather than validating
/// against copies.
#[derive(Default)]
pub struct Registry {
    frames: Slots<FrameNode>,
    circles: Slots<Circle>,
}

impl core::fmt::Debug for Registry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Registry")
            .field("frames_alive", &self.frames.len())
            .field("circles_alive", &self.circles.len())
            .finish_non_exhaustive()
    }
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // --- frames ---

    /// Create a frame that overlaps no existing frame.
    pub fn create_frame(&mut self, center: Point, size: Size) -> Result<FrameId, RegistryError> {
        let (slot, generation) = self.frames.vacant();
        let frame = self
            .checked_frame(FrameId::new(slot, generation), center, size)
            .map_err(|e| refused("create_frame", e))?;
        self.frames.insert(FrameNode {
            frame,
            circles: Vec::new(),
        });
        debug!(frame = ?frame.id(), "frame created");
        Ok(frame.id())
    }

    /// Create a frame together with its first circles, atomically.
    ///
    /// Each circle must fit the new frame and not overlap the circles listed
    /// before it. If anything is refused nothing is stored and the error names
    /// the offending position.
    pub fn create_frame_with_circles(
        &mut self,
        center: Point,
        size: Size,
        drafts: &[CircleDraft],
    ) -> Result<(FrameId, Vec<CircleId>), RegistryError> {
        let (slot, generation) = self.frames.vacant();
        let frame = self
            .checked_frame(FrameId::new(slot, generation), center, size)
            .map_err(|e| refused("create_frame_with_circles", e))?;

        let mut staged: Vec<Circle> = Vec::with_capacity(drafts.len());
        for ((index, draft), (slot, generation)) in
            drafts.iter().enumerate().zip(self.circles.upcoming())
        {
            let draft = CircleDraft { id: None, ..*draft };
            let circle = validate_circle(&draft, &frame, &staged)
                .map(|disc| {
                    Circle::from_disc(CircleId::new(slot, generation), frame.id(), disc)
                })
                .map_err(|source| {
                    refused(
                        "create_frame_with_circles",
                        RegistryError::Nested {
                            position: Position(index),
                            source,
                        },
                    )
                })?;
            staged.push(circle);
        }

        let ids: Vec<CircleId> = staged.iter().map(Circle::id).collect();
        for circle in staged {
            self.circles.insert(circle);
        }
        self.frames.insert(FrameNode {
            frame,
            circles: ids.clone(),
        });
        debug!(frame = ?frame.id(), circles = ids.len(), "frame created with circles");
        Ok((frame.id(), ids))
    }

    /// Move or resize a frame.
    ///
    /// The frame must still overlap no other frame and must still contain every
    /// circle it owns.
    pub fn update_frame(
        &mut self,
        id: FrameId,
        center: Point,
        size: Size,
    ) -> Result<(), RegistryError> {
        if !self.is_frame_alive(id) {
            return Err(refused("update_frame", RegistryError::UnknownFrame(id)));
        }
        let frame = self
            .checked_frame(id, center, size)
            .and_then(|frame| {
                validate_resize(&frame, self.circles_in(id))?;
                Ok(frame)
            })
            .map_err(|e| refused("update_frame", e))?;
        if let Some(node) = self.frame_node_mut(id) {
            node.frame = frame;
        }
        debug!(frame = ?id, "frame updated");
        Ok(())
    }

    /// Remove a frame that owns no circles.
    pub fn remove_frame(&mut self, id: FrameId) -> Result<Frame, RegistryError> {
        let Some(node) = self.frame_node(id) else {
            return Err(refused("remove_frame", RegistryError::UnknownFrame(id)));
        };
        validate_destroy(&node.frame, self.circles_in(id))
            .map_err(|e| refused("remove_frame", e.into()))?;
        let node = self
            .frames
            .remove(id.slot(), id.generation())
            .ok_or(RegistryError::UnknownFrame(id))?;
        debug!(frame = ?id, "frame removed");
        Ok(node.frame)
    }

    // --- circles ---

    /// Add one circle to `frame`.
    ///
    /// `draft.id` is ignored; the registry assigns the id.
    pub fn add_circle(
        &mut self,
        frame: FrameId,
        draft: CircleDraft,
    ) -> Result<CircleId, RegistryError> {
        let Some(&owner) = self.frame(frame) else {
            return Err(refused("add_circle", RegistryError::UnknownFrame(frame)));
        };
        self.place_circle(&owner, draft)
            .map_err(|e| refused("add_circle", e.into()))
    }

    /// Add several circles to `frame`, keeping the ones that pass.
    ///
    /// Only an unknown frame fails the whole call.
    pub fn add_circles(
        &mut self,
        frame: FrameId,
        drafts: &[CircleDraft],
    ) -> Result<BatchOutcome, RegistryError> {
        let Some(&owner) = self.frame(frame) else {
            return Err(refused("add_circles", RegistryError::UnknownFrame(frame)));
        };
        let mut outcome = BatchOutcome::default();
        for (index, draft) in drafts.iter().enumerate() {
            match self.place_circle(&owner, *draft) {
                Ok(id) => outcome.created.push(id),
                Err(rejection) => {
                    let position = Position(index);
                    warn!(op = "add_circles", %position, reason = %rejection, "refused");
                    outcome.rejected.push((position, rejection));
                }
            }
        }
        debug!(
            frame = ?frame,
            created = outcome.created.len(),
            rejected = outcome.rejected.len(),
            "batch applied"
        );
        Ok(outcome)
    }

    /// Move a circle to a new center.
    ///
    /// Only the center can change: the diameter and owning frame are fixed.
    /// A `None` coordinate is a missing value and is refused. The circle's own
    /// stored position never blocks the move.
    pub fn move_circle(
        &mut self,
        id: CircleId,
        center_x: Option<f64>,
        center_y: Option<f64>,
    ) -> Result<(), RegistryError> {
        let Some(&circle) = self.circle(id) else {
            return Err(refused("move_circle", RegistryError::UnknownCircle(id)));
        };
        let Some(&frame) = self.frame(circle.frame()) else {
            return Err(refused(
                "move_circle",
                RegistryError::UnknownFrame(circle.frame()),
            ));
        };
        let draft = CircleDraft {
            id: Some(id),
            center_x,
            center_y,
            diameter: circle.diameter(),
        };
        let moved = validate_circle(&draft, &frame, self.circles_in(frame.id()))
            .map(|disc| Circle::from_disc(id, frame.id(), disc))
            .map_err(|e| refused("move_circle", e.into()))?;
        if let Some(slot) = self.circles.get_mut(id.slot(), id.generation()) {
            *slot = moved;
        }
        debug!(circle = ?id, "circle moved");
        Ok(())
    }

    /// Remove a circle. Returns it if it was alive.
    pub fn remove_circle(&mut self, id: CircleId) -> Option<Circle> {
        let circle = self.circles.remove(id.slot(), id.generation())?;
        if let Some(node) = self.frame_node_mut(circle.frame()) {
            node.circles.retain(|c| *c != id);
        }
        debug!(circle = ?id, "circle removed");
        Some(circle)
    }

    // --- reads ---

    /// Returns true if `id` refers to a live frame.
    pub fn is_frame_alive(&self, id: FrameId) -> bool {
        self.frames.is_alive(id.slot(), id.generation())
    }

    /// Returns true if `id` refers to a live circle.
    pub fn is_circle_alive(&self, id: CircleId) -> bool {
        self.circles.is_alive(id.slot(), id.generation())
    }

    /// The frame with this id, if alive.
    pub fn frame(&self, id: FrameId) -> Option<&Frame> {
        self.frame_node(id).map(|n| &n.frame)
    }

    /// The circle with this id, if alive.
    pub fn circle(&self, id: CircleId) -> Option<&Circle> {
        self.circles.get(id.slot(), id.generation())
    }

    /// All live frames.
    pub fn frames(&self) -> impl Iterator<Item = &Frame> + '_ {
        self.frames.iter().map(|n| &n.frame)
    }

    /// All live circles.
    pub fn circles(&self) -> impl Iterator<Item = &Circle> + '_ {
        self.circles.iter()
    }

    /// Circles owned by `frame`, in creation order. Empty for an unknown frame.
    pub fn circles_in(&self, frame: FrameId) -> impl Iterator<Item = &Circle> + '_ {
        self.frame_node(frame)
            .into_iter()
            .flat_map(|n| n.circles.iter())
            .filter_map(|id| self.circle(*id))
    }

    /// Circles lying entirely within the query disk, optionally limited to one frame.
    pub fn search_circles(&self, query: &RadiusQuery, frame: Option<FrameId>) -> Vec<&Circle> {
        match frame {
            Some(frame) => query.filter(self.circles_in(frame)),
            None => query.filter(self.circles()),
        }
    }

    /// Count and extremal groups for a live frame.
    pub fn frame_metrics(&self, id: FrameId) -> Option<FrameMetrics<'_>> {
        let node = self.frame_node(id)?;
        Some(calculate(&node.frame, self.circles_in(id)))
    }

    // --- internals ---

    fn checked_frame(
        &self,
        id: FrameId,
        center: Point,
        size: Size,
    ) -> Result<Frame, RegistryError> {
        let frame = Frame::new(id, center, size).map_err(Rejection::from)?;
        validate_frame(&frame, self.frames())?;
        Ok(frame)
    }

    fn place_circle(&mut self, owner: &Frame, draft: CircleDraft) -> Result<CircleId, Rejection> {
        let frame = owner.id();
        let draft = CircleDraft { id: None, ..draft };
        let disc = validate_circle(&draft, owner, self.circles_in(frame))?;
        let (slot, generation) = self.circles.vacant();
        let circle = Circle::from_disc(CircleId::new(slot, generation), frame, disc);
        self.circles.insert(circle);
        if let Some(node) = self.frame_node_mut(frame) {
            node.circles.push(circle.id());
        }
        debug!(frame = ?frame, circle = ?circle.id(), "circle created");
        Ok(circle.id())
    }

    fn frame_node(&self, id: FrameId) -> Option<&FrameNode> {
        self.frames.get(id.slot(), id.generation())
    }

    fn frame_node_mut(&mut self, id: FrameId) -> Option<&mut FrameNode> {
        self.frames.get_mut(id.slot(), id.generation())
    }
}

fn refused(op: &'static str, err: RegistryError) -> RegistryError {
    warn!(op, reason = %err, "refused");
    err
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use alloc::format;
    use alloc::vec;
    use corral_rules::{Extreme, RejectionKind};
    use std::sync::Mutex;

    fn draft(x: f64, y: f64, d: f64) -> CircleDraft {
        CircleDraft::new(Point::new(x, y), d)
    }

    fn square_frame(reg: &mut Registry) -> FrameId {
        reg.create_frame(Point::new(200.0, 200.0), Size::new(400.0, 400.0))
            .unwrap()
    }

    #[test]
    fn frames_cannot_overlap_but_may_share_an_edge() {
        let mut reg = Registry::new();
        let a = square_frame(&mut reg);

        let err = reg
            .create_frame(Point::new(500.0, 200.0), Size::new(400.0, 400.0))
            .unwrap_err();
        assert_eq!(err, RegistryError::Rejected(Rejection::FrameOverlap { other: a }));

        let b = reg
            .create_frame(Point::new(600.0, 200.0), Size::new(400.0, 400.0))
            .unwrap();
        assert_ne!(a, b);
        assert_eq!(reg.frames().count(), 2);
    }

    #[test]
    fn invalid_frame_dimensions_are_refused() {
        let mut reg = Registry::new();
        let err = reg
            .create_frame(Point::new(10.0, 10.0), Size::new(0.0, 5.0))
            .unwrap_err();
        assert_eq!(err.rejection().map(Rejection::kind), Some(RejectionKind::NonPositive));
        assert_eq!(reg.frames().count(), 0);
    }

    #[test]
    fn circles_are_checked_against_frame_and_siblings() {
        let mut reg = Registry::new();
        let f = square_frame(&mut reg);

        let a = reg.add_circle(f, draft(100.0, 100.0, 50.0)).unwrap();
        // Touching `a` on the right is fine.
        let b = reg.add_circle(f, draft(150.0, 100.0, 50.0)).unwrap();
        assert_eq!(reg.circles_in(f).count(), 2);

        let err = reg.add_circle(f, draft(110.0, 100.0, 20.0)).unwrap_err();
        assert_eq!(err, RegistryError::Rejected(Rejection::CircleOverlap { other: a }));

        let err = reg.add_circle(f, draft(390.0, 200.0, 40.0)).unwrap_err();
        assert_eq!(err.rejection().map(Rejection::kind), Some(RejectionKind::OutOfBounds));

        let missing = CircleDraft {
            center_y: None,
            ..draft(300.0, 300.0, 10.0)
        };
        let err = reg.add_circle(f, missing).unwrap_err();
        assert_eq!(format!("{err}"), "center_y cannot be null");

        let ids: Vec<_> = reg.circles_in(f).map(Circle::id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn caller_supplied_id_is_ignored_on_create() {
        let mut reg = Registry::new();
        let f = square_frame(&mut reg);
        let a = reg.add_circle(f, draft(100.0, 100.0, 50.0)).unwrap();

        // Claiming to be `a` must not exempt the new circle from overlapping it.
        let spoof = CircleDraft {
            id: Some(a),
            ..draft(100.0, 100.0, 50.0)
        };
        let err = reg.add_circle(f, spoof).unwrap_err();
        assert_eq!(err, RegistryError::Rejected(Rejection::CircleOverlap { other: a }));
    }

    #[test]
    fn unknown_frame_is_reported_before_validation() {
        let mut reg = Registry::new();
        let f = square_frame(&mut reg);
        reg.remove_frame(f).unwrap();
        assert_eq!(
            reg.add_circle(f, draft(1.0, 1.0, 0.5)),
            Err(RegistryError::UnknownFrame(f))
        );
        assert_eq!(reg.add_circles(f, &[]), Err(RegistryError::UnknownFrame(f)));
        assert!(reg.frame_metrics(f).is_none());
    }

    #[test]
    fn frame_with_circles_cannot_be_removed() {
        let mut reg = Registry::new();
        let f = square_frame(&mut reg);
        let c = reg.add_circle(f, draft(100.0, 100.0, 50.0)).unwrap();

        assert_eq!(
            reg.remove_frame(f),
            Err(RegistryError::Rejected(Rejection::HasDependents {
                frame: f,
                circles: 1,
            }))
        );
        assert!(reg.is_frame_alive(f));

        assert!(reg.remove_circle(c).is_some());
        assert!(reg.remove_circle(c).is_none());
        let removed = reg.remove_frame(f).unwrap();
        assert_eq!(removed.id(), f);
        assert!(!reg.is_frame_alive(f));
    }

    #[test]
    fn stale_ids_do_not_resolve_after_slot_reuse() {
        let mut reg = Registry::new();
        let old = square_frame(&mut reg);
        reg.remove_frame(old).unwrap();
        let new = square_frame(&mut reg);
        assert_eq!(old.slot(), new.slot());
        assert_ne!(old, new);
        assert!(reg.frame(old).is_none());
        assert!(reg.frame(new).is_some());
    }

    #[test]
    fn move_ignores_own_position_but_not_siblings() {
        let mut reg = Registry::new();
        let f = square_frame(&mut reg);
        let a = reg.add_circle(f, draft(100.0, 100.0, 50.0)).unwrap();
        let b = reg.add_circle(f, draft(300.0, 300.0, 50.0)).unwrap();

        // Overlaps its own old position only.
        reg.move_circle(a, Some(110.0), Some(100.0)).unwrap();
        assert_eq!(reg.circle(a).unwrap().center(), Point::new(110.0, 100.0));
        assert_eq!(reg.circle(a).unwrap().diameter(), 50.0);

        assert_eq!(
            reg.move_circle(a, Some(290.0), Some(300.0)),
            Err(RegistryError::Rejected(Rejection::CircleOverlap { other: b }))
        );
        assert_eq!(
            reg.move_circle(a, None, Some(100.0)),
            Err(RegistryError::Rejected(Rejection::MissingCoordinate {
                field: "center_x"
            }))
        );
        assert_eq!(reg.circle(a).unwrap().center(), Point::new(110.0, 100.0));

        reg.remove_circle(b);
        assert_eq!(
            reg.move_circle(b, Some(10.0), Some(10.0)),
            Err(RegistryError::UnknownCircle(b))
        );
    }

    #[test]
    fn frame_update_cannot_strand_circles() {
        let mut reg = Registry::new();
        let f = square_frame(&mut reg);
        let c = reg.add_circle(f, draft(350.0, 350.0, 50.0)).unwrap();

        assert_eq!(
            reg.update_frame(f, Point::new(100.0, 100.0), Size::new(200.0, 200.0)),
            Err(RegistryError::Rejected(Rejection::OutOfBounds { circle: Some(c) }))
        );
        assert_eq!(reg.frame(f).unwrap().size(), Size::new(400.0, 400.0));

        // Growing is fine, and the frame does not collide with itself.
        reg.update_frame(f, Point::new(250.0, 250.0), Size::new(500.0, 500.0))
            .unwrap();
        assert_eq!(reg.frame(f).unwrap().right_edge(), 500.0);
    }

    #[test]
    fn frame_update_cannot_overlap_another_frame() {
        let mut reg = Registry::new();
        let a = square_frame(&mut reg);
        let b = reg
            .create_frame(Point::new(600.0, 200.0), Size::new(400.0, 400.0))
            .unwrap();
        assert_eq!(
            reg.update_frame(b, Point::new(550.0, 200.0), Size::new(400.0, 400.0)),
            Err(RegistryError::Rejected(Rejection::FrameOverlap { other: a }))
        );
    }

    #[test]
    fn batch_keeps_accepted_circles() {
        let mut reg = Registry::new();
        let f = square_frame(&mut reg);
        let outcome = reg
            .add_circles(
                f,
                &[
                    draft(100.0, 100.0, 50.0),
                    draft(110.0, 100.0, 50.0), // overlaps the first
                    draft(300.0, 300.0, 50.0),
                    draft(500.0, 300.0, 50.0), // outside
                ],
            )
            .unwrap();

        assert!(!outcome.is_complete());
        assert_eq!(outcome.created.len(), 2);
        let indices: Vec<_> = outcome.rejected.iter().map(|(p, _)| p.index()).collect();
        assert_eq!(indices, vec![1, 3]);
        assert_eq!(format!("{}", outcome.rejected[1].0), "circle_4");
        assert_eq!(outcome.rejected[0].1.kind(), RejectionKind::Overlap);
        assert_eq!(reg.circles_in(f).count(), 2);
    }

    #[test]
    fn nested_create_is_atomic() {
        let mut reg = Registry::new();
        let err = reg
            .create_frame_with_circles(
                Point::new(200.0, 200.0),
                Size::new(400.0, 400.0),
                &[draft(100.0, 100.0, 50.0), draft(120.0, 100.0, 50.0)],
            )
            .unwrap_err();
        assert!(matches!(err, RegistryError::Nested {
                position: Position(1),
                ..
            }));
        assert_eq!(
            format!("{err}"),
            "circle_2: circle cannot overlap with other circles"
        );
        assert_eq!(reg.frames().count(), 0);
        assert_eq!(reg.circles().count(), 0);

        let (f, ids) = reg
            .create_frame_with_circles(
                Point::new(200.0, 200.0),
                Size::new(400.0, 400.0),
                &[draft(100.0, 100.0, 50.0), draft(300.0, 100.0, 50.0)],
            )
            .unwrap();
        assert_eq!(reg.circles_in(f).map(Circle::id).collect::<Vec<_>>(), ids);
        assert!(ids.iter().all(|id| reg.circle(*id).unwrap().frame() == f));
    }

    #[test]
    fn nested_ids_match_stored_ids_after_reuse() {
        let mut reg = Registry::new();
        let f = square_frame(&mut reg);
        let a = reg.add_circle(f, draft(50.0, 50.0, 10.0)).unwrap();
        let b = reg.add_circle(f, draft(80.0, 50.0, 10.0)).unwrap();
        reg.remove_circle(a);
        reg.remove_circle(b);

        let (g, ids) = reg
            .create_frame_with_circles(
                Point::new(700.0, 200.0),
                Size::new(200.0, 200.0),
                &[
                    draft(650.0, 200.0, 10.0),
                    draft(700.0, 200.0, 10.0),
                    draft(750.0, 200.0, 10.0),
                ],
            )
            .unwrap();
        for id in &ids {
            assert_eq!(reg.circle(*id).unwrap().frame(), g);
        }
        assert_eq!(reg.circles().count(), 3);
    }

    #[test]
    fn search_can_be_scoped_to_one_frame() {
        let mut reg = Registry::new();
        let a = square_frame(&mut reg);
        let b = reg
            .create_frame(Point::new(600.0, 200.0), Size::new(400.0, 400.0))
            .unwrap();
        let near_a = reg.add_circle(a, draft(390.0, 200.0, 10.0)).unwrap();
        let near_b = reg.add_circle(b, draft(410.0, 200.0, 10.0)).unwrap();
        reg.add_circle(b, draft(700.0, 200.0, 10.0)).unwrap();

        let query = RadiusQuery::new(400.0, 200.0, 20.0).unwrap();
        let all: Vec<_> = reg.search_circles(&query, None).iter().map(|c| c.id()).collect();
        assert_eq!(all, vec![near_a, near_b]);
        let only_b: Vec<_> = reg
            .search_circles(&query, Some(b))
            .iter()
            .map(|c| c.id())
            .collect();
        assert_eq!(only_b, vec![near_b]);
    }

    #[test]
    fn metrics_follow_creation_order() {
        let mut reg = Registry::new();
        let f = square_frame(&mut reg);
        assert!(reg.frame_metrics(f).unwrap().extremes.is_none());

        let a = reg.add_circle(f, draft(100.0, 300.0, 20.0)).unwrap();
        let b = reg.add_circle(f, draft(300.0, 300.0, 20.0)).unwrap();
        let c = reg.add_circle(f, draft(200.0, 100.0, 20.0)).unwrap();

        let metrics = reg.frame_metrics(f).unwrap();
        assert_eq!(metrics.total_circles, 3);
        let extremes = metrics.extremes.unwrap();
        let ids = |e| extremes.group(e).iter().map(|c| c.id()).collect::<Vec<_>>();
        assert_eq!(ids(Extreme::Highest), vec![a, b]);
        assert_eq!(ids(Extreme::Lowest), vec![c]);
        assert_eq!(ids(Extreme::Leftmost), vec![a]);
        assert_eq!(ids(Extreme::Rightmost), vec![b]);
    }

    #[test]
    fn concurrent_overlapping_adds_admit_one() {
        let reg = Mutex::new(Registry::new());
        let f = square_frame(&mut reg.lock().unwrap());

        let results: Vec<_> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let reg = &reg;
                    s.spawn(move || {
                        let x = 200.0 + f64::from(i);
                        reg.lock().unwrap().add_circle(f, draft(x, 200.0, 50.0))
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert_eq!(reg.lock().unwrap().circles_in(f).count(), 1);
    }
}
