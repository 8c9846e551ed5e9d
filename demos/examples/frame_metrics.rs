// Copyright 2025 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame metrics.
//!
//! Place circles with tied coordinates and print the extremal groups, including
//! which groups each circle belongs to.
//!
//! Run:
//! - `cargo run -p corral_demos --example frame_metrics`

use corral_registry::{Registry, RegistryError};
use corral_rules::{CircleDraft, Extreme};
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
    let frame = reg.create_frame(Point::new(200.0, 200.0), Size::new(400.0, 400.0))?;

    let empty = reg.frame_metrics(frame).ok_or(RegistryError::UnknownFrame(frame))?;
    info!("empty frame: {} circles, extremes {:?}", empty.total_circles, empty.extremes);

    reg.add_circles(
        frame,
        &[
            CircleDraft::new(Point::new(100.0, 300.0), 30.0),
            CircleDraft::new(Point::new(300.0, 300.0), 30.0),
            CircleDraft::new(Point::new(200.0, 100.0), 30.0),
            CircleDraft::new(Point::new(100.0, 100.0), 30.0),
        ],
    )?;

    let metrics = reg.frame_metrics(frame).ok_or(RegistryError::UnknownFrame(frame))?;
    info!("{} circles", metrics.total_circles);
    let Some(extremes) = metrics.extremes else {
        return Ok(());
    };
    for extreme in Extreme::ALL {
        let centers: Vec<Point> = extremes.group(extreme).iter().map(|c| c.center()).collect();
        info!("{extreme:?}: {centers:?}");
    }
    for circle in reg.circles_in(frame) {
        info!(
            "{:?} at {:?} is {:?}",
            circle.id(),
            circle.center(),
            extremes.placement_of(circle.id())
        );
    }
    Ok(())
}
