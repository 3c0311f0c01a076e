use tracing::{debug, info};

use crate::error::{OperationError, Result};
use crate::marker::Marker;
use crate::math::Vector2;
use crate::results::{Field, FieldKind, OffsetRecord, ResultSetId, ResultStore, Schema, Value};

/// Default offset distances in map units.
pub const DEFAULT_DISTANCES: [f64; 2] = [10.0, 1.0];

/// Returns the default direction table: the four cardinal unit vectors, in
/// N, S, E, W order.
#[must_use]
pub fn default_directions() -> Vec<(String, Vector2)> {
    vec![
        ("N".to_owned(), Vector2::new(0.0, 1.0)),
        ("S".to_owned(), Vector2::new(0.0, -1.0)),
        ("E".to_owned(), Vector2::new(1.0, 0.0)),
        ("W".to_owned(), Vector2::new(-1.0, 0.0)),
    ]
}

/// Output of a [`CartesianOffsets`] run.
#[derive(Debug)]
pub struct CartesianOffsetsOutput {
    /// Result set holding all generated offset points.
    pub set: ResultSetId,
    /// Number of records appended.
    pub emitted: usize,
    /// Number of markers skipped for missing point geometry.
    pub skipped_markers: usize,
}

/// Generates points offset from each marker by fixed Cartesian deltas.
///
/// For every marker with point geometry, one point is emitted per
/// `(distance, direction)` combination at `marker + direction * distance`.
/// Markers without point geometry are skipped. No boundary checks apply.
#[derive(Debug)]
pub struct CartesianOffsets {
    markers: Vec<Marker>,
    marker_schema: Schema,
    distances: Vec<f64>,
    directions: Vec<(String, Vector2)>,
}

impl CartesianOffsets {
    /// Creates a new generation run with the default distances and the four
    /// cardinal directions.
    ///
    /// `marker_schema` describes the attributes every input marker carries;
    /// those attributes are copied verbatim onto each output record.
    #[must_use]
    pub fn new(markers: Vec<Marker>, marker_schema: Schema) -> Self {
        Self {
            markers,
            marker_schema,
            distances: DEFAULT_DISTANCES.to_vec(),
            directions: default_directions(),
        }
    }

    /// Sets the offset distances in map units.
    #[must_use]
    pub fn with_distances(mut self, distances: Vec<f64>) -> Self {
        self.distances = distances;
        self
    }

    /// Sets the direction table. Vectors need not be unit length; the
    /// effective displacement is `vector * distance`.
    #[must_use]
    pub fn with_directions(mut self, directions: Vec<(String, Vector2)>) -> Self {
        self.directions = directions;
        self
    }

    /// Executes the run, populating one `marker_offsets` result set whose
    /// schema is the marker schema extended with `direction: Text` and
    /// `distance_m: Real`.
    ///
    /// # Errors
    ///
    /// - [`OperationError::InvalidInput`] if a configured distance is not a
    ///   positive finite value, or no directions are configured
    /// - [`crate::error::ResultsError::SchemaMismatch`] if a marker's
    ///   attributes do not conform to the declared marker schema
    pub fn execute(&self, store: &mut ResultStore) -> Result<CartesianOffsetsOutput> {
        if self.directions.is_empty() {
            return Err(
                OperationError::InvalidInput("no directions configured".to_owned()).into(),
            );
        }
        for &dist in &self.distances {
            if !dist.is_finite() || dist <= 0.0 {
                return Err(OperationError::InvalidInput(format!(
                    "distance must be a positive finite value, got {dist}"
                ))
                .into());
            }
        }

        let schema = self.marker_schema.extended(vec![
            Field::new("direction", FieldKind::Text),
            Field::new("distance_m", FieldKind::Real),
        ]);
        let set = store.create("marker_offsets", schema);

        let mut emitted = 0;
        let mut skipped_markers = 0;
        for (index, marker) in self.markers.iter().enumerate() {
            let Some(point) = marker.geometry else {
                skipped_markers += 1;
                debug!(marker = index + 1, "skipped marker without point geometry");
                continue;
            };

            for &dist in &self.distances {
                for (label, direction) in &self.directions {
                    let offset_point = point + direction * dist;
                    let mut values = marker.attributes.clone();
                    values.push(Value::Text(label.clone()));
                    values.push(Value::Real(dist));
                    store.append(set, OffsetRecord::new(offset_point, values))?;
                    emitted += 1;
                }
            }
        }

        info!(emitted, skipped_markers, "offset points layer created");
        Ok(CartesianOffsetsOutput {
            set,
            emitted,
            skipped_markers,
        })
    }
}
