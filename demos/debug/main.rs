//! Transecta debug run — exercises both generation pipelines on a small
//! synthetic transect and prints the resulting point sets.
//!
//! Usage:
//! ```text
//! cargo run --example debug                # summary output
//! RUST_LOG=transecta=debug cargo run --example debug   # per-marker status
//! ```

use transecta::geometry::Path;
use transecta::marker::Marker;
use transecta::math::Point2;
use transecta::operations::{CartesianOffsets, TransectOffsets};
use transecta::results::{Field, FieldKind, ResultStore, Schema, Value};

fn main() -> transecta::Result<()> {
    // Default: WARN for everything, INFO for transecta.
    // Override with RUST_LOG env var (e.g. RUST_LOG=transecta=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("transecta=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut store = ResultStore::new();

    // A transect with one corner, and three markers along it.
    let path = Path::from_points(&[
        Point2::new(0.0, 0.0),
        Point2::new(60.0, 0.0),
        Point2::new(60.0, 40.0),
    ])?;
    let markers = vec![
        Marker::new(Point2::new(5.0, 2.0)),
        Marker::new(Point2::new(45.0, -3.0)),
        Marker::new(Point2::new(62.0, 35.0)),
    ];

    let transect_out = TransectOffsets::new(path, markers).execute(&mut store)?;
    for status in &transect_out.statuses {
        println!(
            "marker {}: dist {:.2}, plus {:?}, minus {:?}",
            status.marker_id, status.marker_dist, status.plus, status.minus
        );
    }
    for id in [transect_out.plus_set, transect_out.minus_set] {
        let set = store.set(id)?;
        println!("{}: {} points", set.name(), set.records().len());
    }

    // Cartesian offsets around two named sites.
    let schema = Schema::new(vec![Field::new("site", FieldKind::Text)]);
    let sites = vec![
        Marker::with_attributes(Point2::new(10.0, 10.0), vec![Value::Text("A1".to_owned())]),
        Marker::with_attributes(Point2::new(30.0, 5.0), vec![Value::Text("B2".to_owned())]),
    ];
    let cartesian_out = CartesianOffsets::new(sites, schema).execute(&mut store)?;
    let set = store.set(cartesian_out.set)?;
    println!(
        "{}: {} points ({} markers skipped)",
        set.name(),
        cartesian_out.emitted,
        cartesian_out.skipped_markers
    );
    for record in set.records() {
        println!("  ({:.1}, {:.1}) {:?}", record.point.x, record.point.y, record.values);
    }

    Ok(())
}
