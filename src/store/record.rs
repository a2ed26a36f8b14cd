//! Record representation

use serde::Serialize;
use serde_json::{Map, Value};

/// Record identifier, assigned by the store
pub type RecordId = u64;

/// Arbitrary record fields (everything but the id)
pub type Fields = Map<String, Value>;

/// A single item within a collection.
///
/// Serialized flat, so a show looks like
/// `{"id": 1, "name": "Breaking Bad", "episodes_seen": 5}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: Fields,
}

impl Record {
    /// Build a record, discarding any `id` key carried in `fields`
    pub(crate) fn new(id: RecordId, mut fields: Fields) -> Self {
        fields.remove("id");
        Self { id, fields }
    }

    /// Look up a field by name
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Merge `fields` into this record. The id is immutable.
    pub(crate) fn merge(&mut self, fields: Fields) {
        for (key, value) in fields {
            if key == "id" {
                continue;
            }
            self.fields.insert(key, value);
        }
    }

    /// Convert into a JSON object with `id` alongside the fields
    pub fn into_object(self) -> Map<String, Value> {
        let mut object = Map::with_capacity(self.fields.len() + 1);
        object.insert("id".to_string(), Value::from(self.id));
        object.extend(self.fields);
        object
    }
}
