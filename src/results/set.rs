use crate::math::Point2;

use super::schema::{Schema, Value};

slotmap::new_key_type! {
    /// Unique identifier for a result set in the result store.
    pub struct ResultSetId;
}

/// One generated output point with its attribute values.
#[derive(Debug, Clone)]
pub struct OffsetRecord {
    /// The generated point.
    pub point: Point2,
    /// Attribute values, in schema order.
    pub values: Vec<Value>,
}

impl OffsetRecord {
    /// Creates a new record.
    #[must_use]
    pub fn new(point: Point2, values: Vec<Value>) -> Self {
        Self { point, values }
    }
}

/// Data associated with a named result set.
///
/// A result set is append-only: it is created empty with a fixed schema and
/// populated during a single pass over the input markers. Records preserve
/// insertion order.
#[derive(Debug, Clone)]
pub struct ResultSetData {
    name: String,
    schema: Schema,
    records: Vec<OffsetRecord>,
}

impl ResultSetData {
    /// Creates an empty result set with the given name and schema.
    #[must_use]
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
            records: Vec::new(),
        }
    }

    /// Returns the set's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the set's schema.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[OffsetRecord] {
        &self.records
    }

    pub(super) fn push(&mut self, record: OffsetRecord) {
        self.records.push(record);
    }
}
