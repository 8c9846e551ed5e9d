// Copyright 2025 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registry basics.
//!
//! Create frames and circles, watch the invariants refuse bad writes, then
//! tear everything down in the allowed order.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p corral_demos --example registry_basics`

use corral_registry::{Registry, RegistryError};
use corral_rules::CircleDraft;
use kurbo::{Point, Size};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), RegistryError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut reg = Registry::new();
    let left = reg.create_frame(Point::new(200.0, 200.0), Size::new(400.0, 400.0))?;
    // Shares the x = 400 edge with `left`, which is not an overlap.
    let right = reg.create_frame(Point::new(600.0, 200.0), Size::new(400.0, 400.0))?;

    if let Err(err) = reg.create_frame(Point::new(400.0, 200.0), Size::new(100.0, 100.0)) {
        info!("straddling frame refused: {err}");
    }

    let a = reg.add_circle(left, CircleDraft::new(Point::new(100.0, 100.0), 50.0))?;
    let b = reg.add_circle(left, CircleDraft::new(Point::new(150.0, 100.0), 50.0))?;
    info!("touching circles accepted: {a:?} {b:?}");

    if let Err(err) = reg.add_circle(left, CircleDraft::new(Point::new(120.0, 110.0), 20.0)) {
        info!("overlapping circle refused: {err}");
    }

    let batch = reg.add_circles(
        right,
        &[
            CircleDraft::new(Point::new(500.0, 100.0), 40.0),
            CircleDraft::new(Point::new(790.0, 100.0), 40.0),
            CircleDraft::new(Point::new(600.0, 300.0), 40.0),
        ],
    )?;
    info!("batch: {} created", batch.created.len());
    for (position, rejection) in &batch.rejected {
        info!("{position} refused: {rejection}");
    }

    // Moving `a` onto its own old footprint is fine.
    reg.move_circle(a, Some(95.0), Some(100.0))?;

    if let Err(err) = reg.update_frame(left, Point::new(50.0, 50.0), Size::new(100.0, 100.0)) {
        info!("shrinking frame refused: {err}");
    }

    if let Err(err) = reg.remove_frame(left) {
        info!("removing frame refused: {err}");
    }
    for id in reg.circles_in(left).map(|c| c.id()).collect::<Vec<_>>() {
        reg.remove_circle(id);
    }
    let removed = reg.remove_frame(left)?;
    info!("removed frame at {:?}", removed.center());
    assert!(!reg.is_frame_alive(left));
    Ok(())
}
