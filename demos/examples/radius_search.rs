// Copyright 2025 the Corral Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radius search.
//!
//! Parse search parameters the way a request handler would, then find circles
//! lying entirely inside the query disk across all frames and within one.
//!
//! Run:
//! - `cargo run -p corral_demos --example radius_search`

use corral_registry::Registry;
use corral_rules::{CircleDraft, RadiusQuery};
use kurbo::{Point, Size};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut reg = Registry::new();
    let a = reg.create_frame(Point::new(200.0, 200.0), Size::new(400.0, 400.0))?;
    let b = reg.create_frame(Point::new(600.0, 200.0), Size::new(400.0, 400.0))?;
    reg.add_circle(a, CircleDraft::new(Point::new(380.0, 200.0), 20.0))?;
    reg.add_circle(b, CircleDraft::new(Point::new(420.0, 200.0), 20.0))?;
    // Its center is inside the query disk but its edge is not.
    reg.add_circle(b, CircleDraft::new(Point::new(435.0, 200.0), 20.0))?;

    for params in [
        (Some("400"), Some("200"), Some("40")),
        (Some("400"), None, Some("  ")),
        (Some("4e2"), Some("200"), Some("-1")),
        (Some("four"), Some("200"), Some("40")),
    ] {
        match RadiusQuery::parse(params.0, params.1, params.2) {
            Ok(q) => info!("{params:?} -> center {:?}, radius {}", q.center(), q.radius()),
            Err(err) => info!("{params:?} -> {err}"),
        }
    }

    let query = RadiusQuery::parse(Some("400"), Some("200"), Some("40"))?;
    let everywhere: Vec<Point> = reg
        .search_circles(&query, None)
        .iter()
        .map(|c| c.center())
        .collect();
    info!("all frames: {everywhere:?}");
    let in_b: Vec<Point> = reg
        .search_circles(&query, Some(b))
        .iter()
        .map(|c| c.center())
        .collect();
    info!("frame b only: {in_b:?}");
    Ok(())
}
