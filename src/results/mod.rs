pub mod schema;
pub mod set;

pub use schema::{Field, FieldKind, Schema, Value};
pub use set::{OffsetRecord, ResultSetData, ResultSetId};

use crate::error::ResultsError;
use slotmap::SlotMap;

/// Central arena that owns all generated result sets.
///
/// Sets are referenced via typed IDs (generational indices). Records can be
/// appended but never removed or mutated; a single sequential writer is
/// assumed.
#[derive(Debug, Default)]
pub struct ResultStore {
    sets: SlotMap<ResultSetId, ResultSetData>,
}

impl ResultStore {
    /// Creates a new, empty result store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty, schema-typed result set and returns its ID.
    pub fn create(&mut self, name: impl Into<String>, schema: Schema) -> ResultSetId {
        self.sets.insert(ResultSetData::new(name, schema))
    }

    /// Appends one record to a result set, preserving insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`ResultsError::SetNotFound`] if the ID is stale, or
    /// [`ResultsError::SchemaMismatch`] if the record's values do not
    /// conform to the set's schema.
    pub fn append(&mut self, id: ResultSetId, record: OffsetRecord) -> Result<(), ResultsError> {
        let set = self
            .sets
            .get_mut(id)
            .ok_or_else(|| ResultsError::SetNotFound("result set".into()))?;
        set.schema().check(&record.values)?;
        set.push(record);
        Ok(())
    }

    /// Returns a reference to the result-set data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the set is not found in the store.
    pub fn set(&self, id: ResultSetId) -> Result<&ResultSetData, ResultsError> {
        self.sets
            .get(id)
            .ok_or_else(|| ResultsError::SetNotFound("result set".into()))
    }

    /// Iterates over all result sets in the store.
    pub fn iter(&self) -> impl Iterator<Item = (ResultSetId, &ResultSetData)> {
        self.sets.iter()
    }
}
