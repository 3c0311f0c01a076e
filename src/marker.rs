use crate::math::Point2;
use crate::results::Value;

/// An input feature with optional point geometry and pass-through attributes.
///
/// Markers are read-only inputs; their id is their 1-based position in the
/// input collection. `geometry` is `None` for features with empty or
/// non-point geometry.
#[derive(Debug, Clone)]
pub struct Marker {
    /// The marker's point, if it has one.
    pub geometry: Option<Point2>,
    /// Attribute values, in the order of the marker schema.
    pub attributes: Vec<Value>,
}

impl Marker {
    /// Creates a marker at the given point with no attributes.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self {
            geometry: Some(point),
            attributes: Vec::new(),
        }
    }

    /// Creates a marker at the given point with the given attributes.
    #[must_use]
    pub fn with_attributes(point: Point2, attributes: Vec<Value>) -> Self {
        Self {
            geometry: Some(point),
            attributes,
        }
    }

    /// Creates a marker with empty geometry.
    #[must_use]
    pub fn empty(attributes: Vec<Value>) -> Self {
        Self {
            geometry: None,
            attributes,
        }
    }
}
