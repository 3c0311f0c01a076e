use tracing::{debug, info};

use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::Path;
use crate::marker::Marker;
use crate::math::Point2;
use crate::results::{Field, FieldKind, OffsetRecord, ResultSetId, ResultStore, Schema, Value};

/// Arc-length offset applied on both sides of each snapped marker, in map
/// units.
pub const DEFAULT_OFFSET: f64 = 10.0;

/// Outcome of a single offset attempt for one marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OffsetOutcome {
    /// The offset point was generated and appended.
    Emitted(Point2),
    /// The offset fell before the path start; nothing was emitted.
    SkippedBeforeStart,
    /// The offset fell beyond the path end; nothing was emitted.
    SkippedBeyondEnd,
}

/// Per-marker status for one generation run.
#[derive(Debug, Clone, Copy)]
pub struct MarkerStatus {
    /// 1-based marker id.
    pub marker_id: usize,
    /// Arc-length position of the snapped marker along the path.
    pub marker_dist: f64,
    /// Outcome of the `+offset` attempt.
    pub plus: OffsetOutcome,
    /// Outcome of the `-offset` attempt.
    pub minus: OffsetOutcome,
}

/// Output of a [`TransectOffsets`] run.
#[derive(Debug)]
pub struct TransectOffsetsOutput {
    /// Result set holding the `+offset` points.
    pub plus_set: ResultSetId,
    /// Result set holding the `-offset` points.
    pub minus_set: ResultSetId,
    /// Per-marker statuses, in marker order.
    pub statuses: Vec<MarkerStatus>,
}

/// Generates points at ± a fixed arc-length distance from each marker,
/// measured along a transect path.
///
/// Each marker is snapped to its closest location on the path; the snapped
/// arc-length position is then shifted by the configured offset in both
/// directions and re-projected onto the path. Offsets that would fall
/// before the path start or beyond its end are skipped, not errors.
#[derive(Debug)]
pub struct TransectOffsets {
    path: Path,
    markers: Vec<Marker>,
    offset: f64,
}

impl TransectOffsets {
    /// Creates a new generation run with the default offset.
    #[must_use]
    pub fn new(path: Path, markers: Vec<Marker>) -> Self {
        Self {
            path,
            markers,
            offset: DEFAULT_OFFSET,
        }
    }

    /// Sets the arc-length offset distance in map units.
    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Executes the run, populating one `plus` and one `minus` result set.
    ///
    /// Result sets are named after the offset value (`plus10_points` /
    /// `minus10_points` for the default) with schema
    /// `marker_id: Int, marker_dist: Real, offset: Text`.
    ///
    /// # Errors
    ///
    /// - [`OperationError::InvalidInput`] if the offset is not a positive
    ///   finite distance
    /// - [`GeometryError::MissingGeometry`] if a marker has no point
    ///   geometry
    pub fn execute(&self, store: &mut ResultStore) -> Result<TransectOffsetsOutput> {
        if !self.offset.is_finite() || self.offset <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "offset must be a positive finite distance, got {}",
                self.offset
            ))
            .into());
        }

        let length = self.path.length();
        debug!(length, "transect length");

        let schema = Schema::new(vec![
            Field::new("marker_id", FieldKind::Int),
            Field::new("marker_dist", FieldKind::Real),
            Field::new("offset", FieldKind::Text),
        ]);
        let plus_set = store.create(format!("plus{}_points", self.offset), schema.clone());
        let minus_set = store.create(format!("minus{}_points", self.offset), schema);

        let plus_label = format!("+{}m", self.offset);
        let minus_label = format!("-{}m", self.offset);

        let mut statuses = Vec::with_capacity(self.markers.len());
        for (index, marker) in self.markers.iter().enumerate() {
            let marker_id = index + 1;
            let point = marker
                .geometry
                .ok_or(GeometryError::MissingGeometry(marker_id))?;

            let snapped = self.path.snap(point);
            let marker_dist = snapped.arc_length;
            debug!(marker_id, marker_dist, "snapped marker to transect");

            let plus_s = marker_dist + self.offset;
            let plus = if plus_s <= length {
                let plus_point = self.path.interpolate(plus_s)?;
                store.append(
                    plus_set,
                    Self::record(plus_point, marker_id, marker_dist, &plus_label),
                )?;
                OffsetOutcome::Emitted(plus_point)
            } else {
                debug!(marker_id, plus_s, "skipped +offset (beyond transect end)");
                OffsetOutcome::SkippedBeyondEnd
            };

            let minus_s = marker_dist - self.offset;
            let minus = if minus_s >= 0.0 {
                let minus_point = self.path.interpolate(minus_s)?;
                store.append(
                    minus_set,
                    Self::record(minus_point, marker_id, marker_dist, &minus_label),
                )?;
                OffsetOutcome::Emitted(minus_point)
            } else {
                debug!(marker_id, minus_s, "skipped -offset (before transect start)");
                OffsetOutcome::SkippedBeforeStart
            };

            statuses.push(MarkerStatus {
                marker_id,
                marker_dist,
                plus,
                minus,
            });
        }

        info!(markers = self.markers.len(), "finished creating offset points");
        Ok(TransectOffsetsOutput {
            plus_set,
            minus_set,
            statuses,
        })
    }

    fn record(point: Point2, marker_id: usize, marker_dist: f64, label: &str) -> OffsetRecord {
        #[allow(clippy::cast_possible_wrap)]
        let id = marker_id as i64;
        OffsetRecord::new(
            point,
            vec![
                Value::Int(id),
                Value::Real(marker_dist),
                Value::Text(label.to_owned()),
            ],
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn single_segment_path() -> Path {
        Path::from_points(&[Point2::new(0.0, 0.0), Point2::new(100.0, 0.0)]).unwrap()
    }

    #[test]
    fn marker_mid_path_emits_both_offsets() {
        // Path (0,0)→(100,0), marker at (50,5), offset 10.
        let mut store = ResultStore::new();
        let op = TransectOffsets::new(
            single_segment_path(),
            vec![Marker::new(Point2::new(50.0, 5.0))],
        );
        let out = op.execute(&mut store).unwrap();

        assert_eq!(out.statuses.len(), 1);
        let status = out.statuses[0];
        assert_eq!(status.marker_id, 1);
        assert!((status.marker_dist - 50.0).abs() < 1e-10);

        let plus = store.set(out.plus_set).unwrap();
        assert_eq!(plus.name(), "plus10_points");
        assert_eq!(plus.records().len(), 1);
        let plus_rec = &plus.records()[0];
        assert!((plus_rec.point.x - 60.0).abs() < 1e-10);
        assert!(plus_rec.point.y.abs() < 1e-10);
        assert_eq!(
            plus_rec.values,
            vec![
                Value::Int(1),
                Value::Real(50.0),
                Value::Text("+10m".to_owned())
            ]
        );

        let minus = store.set(out.minus_set).unwrap();
        assert_eq!(minus.name(), "minus10_points");
        let minus_rec = &minus.records()[0];
        assert!((minus_rec.point.x - 40.0).abs() < 1e-10);
        assert_eq!(minus_rec.values[2], Value::Text("-10m".to_owned()));
    }

    #[test]
    fn marker_near_end_skips_plus_offset() {
        // Marker at (95,0): plus distance 105 > 100 is skipped, minus lands
        // at (85,0).
        let mut store = ResultStore::new();
        let op = TransectOffsets::new(
            single_segment_path(),
            vec![Marker::new(Point2::new(95.0, 0.0))],
        );
        let out = op.execute(&mut store).unwrap();

        let status = out.statuses[0];
        assert_eq!(status.plus, OffsetOutcome::SkippedBeyondEnd);
        assert!(matches!(status.minus, OffsetOutcome::Emitted(p) if (p.x - 85.0).abs() < 1e-10));

        assert!(store.set(out.plus_set).unwrap().records().is_empty());
        assert_eq!(store.set(out.minus_set).unwrap().records().len(), 1);
    }

    #[test]
    fn marker_near_start_skips_minus_offset() {
        let mut store = ResultStore::new();
        let op = TransectOffsets::new(
            single_segment_path(),
            vec![Marker::new(Point2::new(3.0, -2.0))],
        );
        let out = op.execute(&mut store).unwrap();

        let status = out.statuses[0];
        assert_eq!(status.minus, OffsetOutcome::SkippedBeforeStart);
        assert!(matches!(status.plus, OffsetOutcome::Emitted(p) if (p.x - 13.0).abs() < 1e-10));
    }

    #[test]
    fn marker_exactly_offset_from_end_still_emits() {
        // Snapped at 90 on a length-100 path: plus lands exactly on the end.
        let mut store = ResultStore::new();
        let op = TransectOffsets::new(
            single_segment_path(),
            vec![Marker::new(Point2::new(90.0, 1.0))],
        );
        let out = op.execute(&mut store).unwrap();

        assert!(matches!(out.statuses[0].plus, OffsetOutcome::Emitted(p) if (p.x - 100.0).abs() < 1e-10));
    }

    #[test]
    fn offsets_follow_path_around_corners() {
        // L-shaped path (0,0)→(10,0)→(10,10); marker snaps at arc 8, so the
        // plus point wraps onto the second segment.
        let path = Path::from_points(&[
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
        ])
        .unwrap();
        let mut store = ResultStore::new();
        let op = TransectOffsets::new(path, vec![Marker::new(Point2::new(8.0, -1.0))])
            .with_offset(5.0);
        let out = op.execute(&mut store).unwrap();

        let status = out.statuses[0];
        assert!((status.marker_dist - 8.0).abs() < 1e-10);
        assert!(matches!(
            status.plus,
            OffsetOutcome::Emitted(p) if (p.x - 10.0).abs() < 1e-10 && (p.y - 3.0).abs() < 1e-10
        ));
        assert!(matches!(
            status.minus,
            OffsetOutcome::Emitted(p) if (p.x - 3.0).abs() < 1e-10 && p.y.abs() < 1e-10
        ));
    }

    #[test]
    fn custom_offset_names_sets_and_labels() {
        let mut store = ResultStore::new();
        let op = TransectOffsets::new(
            single_segment_path(),
            vec![Marker::new(Point2::new(50.0, 0.0))],
        )
        .with_offset(25.0);
        let out = op.execute(&mut store).unwrap();

        let plus = store.set(out.plus_set).unwrap();
        assert_eq!(plus.name(), "plus25_points");
        assert_eq!(plus.records()[0].values[2], Value::Text("+25m".to_owned()));
    }

    #[test]
    fn non_positive_offset_rejected() {
        let mut store = ResultStore::new();
        let op = TransectOffsets::new(single_segment_path(), vec![]).with_offset(0.0);
        assert!(op.execute(&mut store).is_err());
    }

    #[test]
    fn marker_without_geometry_fails() {
        let mut store = ResultStore::new();
        let op = TransectOffsets::new(single_segment_path(), vec![Marker::empty(vec![])]);
        assert!(op.execute(&mut store).is_err());
    }

    #[test]
    fn statuses_keep_marker_order() {
        let mut store = ResultStore::new();
        let op = TransectOffsets::new(
            single_segment_path(),
            vec![
                Marker::new(Point2::new(20.0, 1.0)),
                Marker::new(Point2::new(70.0, -1.0)),
                Marker::new(Point2::new(40.0, 0.5)),
            ],
        );
        let out = op.execute(&mut store).unwrap();

        let ids: Vec<_> = out.statuses.iter().map(|s| s.marker_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        let dists: Vec<_> = out.statuses.iter().map(|s| s.marker_dist).collect();
        assert!((dists[0] - 20.0).abs() < 1e-10);
        assert!((dists[1] - 70.0).abs() < 1e-10);
        assert!((dists[2] - 40.0).abs() < 1e-10);
    }
}
