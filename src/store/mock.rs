//! Mock store implementation

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::record::{Fields, Record, RecordId};

/// A named, ordered sequence of records
#[derive(Debug)]
struct Collection {
    /// Records in insertion order
    records: Vec<Record>,
    /// Next id to hand out. Never decremented.
    next_id: RecordId,
}

impl Default for Collection {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }
}

impl Collection {
    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }
}

/// In-memory collection store.
///
/// Every operation takes the lock for its own duration only; a sequence of
/// calls is not atomic.
#[derive(Debug, Default)]
pub struct MockStore {
    collections: RwLock<HashMap<String, Collection>>,
}

impl MockStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with `collection` seeded from `records`
    pub fn with_collection<I>(collection: &str, records: I) -> Self
    where
        I: IntoIterator<Item = Fields>,
    {
        let store = Self::new();
        store.seed(collection, records);
        store
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Collection>> {
        // Records are plain values, a panicking writer cannot leave them torn.
        self.collections
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Collection>> {
        self.collections
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// All records of `collection` in insertion order
    pub fn get(&self, collection: &str) -> Vec<Record> {
        self.read()
            .get(collection)
            .map(|c| c.records.clone())
            .unwrap_or_default()
    }

    /// Look up a single record by id
    pub fn get_by_id(&self, collection: &str, id: RecordId) -> Option<Record> {
        let collections = self.read();
        let coll = collections.get(collection)?;
        coll.position(id).map(|idx| coll.records[idx].clone())
    }

    /// Append a new record and return it with its assigned id
    pub fn create(&self, collection: &str, fields: Fields) -> Record {
        let mut collections = self.write();
        let coll = collections.entry(collection.to_string()).or_default();

        let record = Record::new(coll.next_id, fields);
        coll.next_id += 1;
        coll.records.push(record.clone());
        record
    }

    /// Merge `fields` into an existing record
    pub fn update_by_id(&self, collection: &str, id: RecordId, fields: Fields) -> Option<Record> {
        let mut collections = self.write();
        let coll = collections.get_mut(collection)?;
        let idx = coll.position(id)?;

        let record = &mut coll.records[idx];
        record.merge(fields);
        Some(record.clone())
    }

    /// Remove a record, returning it if it existed
    pub fn delete_by_id(&self, collection: &str, id: RecordId) -> Option<Record> {
        let mut collections = self.write();
        let coll = collections.get_mut(collection)?;
        let idx = coll.position(id)?;
        Some(coll.records.remove(idx))
    }

    /// Bulk-create records, returning how many were added
    pub fn seed<I>(&self, collection: &str, records: I) -> usize
    where
        I: IntoIterator<Item = Fields>,
    {
        records
            .into_iter()
            .map(|fields| self.create(collection, fields))
            .count()
    }

    /// Number of records currently in `collection`
    pub fn len(&self, collection: &str) -> usize {
        self.read()
            .get(collection)
            .map(|c| c.records.len())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn fields(value: Value) -> Fields {
        value.as_object().cloned().unwrap()
    }

    fn show(name: &str, episodes: u64) -> Fields {
        fields(json!({"name": name, "episodes_seen": episodes}))
    }

    #[test]
    fn test_unknown_collection_is_empty() {
        let store = MockStore::new();
        assert!(store.get("shows").is_empty());
        assert!(store.get_by_id("shows", 1).is_none());
        assert!(store.update_by_id("shows", 1, Fields::new()).is_none());
        assert!(store.delete_by_id("shows", 1).is_none());
        assert_eq!(store.len("shows"), 0);
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let store = MockStore::new();
        let a = store.create("shows", show("Dark", 3));
        let b = store.create("shows", show("Lost", 10));

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.len("shows"), 2);
    }

    #[test]
    fn test_get_preserves_insertion_order() {
        let store = MockStore::new();
        store.create("shows", show("Dark", 3));
        store.create("shows", show("Lost", 10));
        store.create("shows", show("Fargo", 1));

        let names: Vec<_> = store
            .get("shows")
            .into_iter()
            .map(|r| r.get("name").cloned().unwrap())
            .collect();
        assert_eq!(names, vec![json!("Dark"), json!("Lost"), json!("Fargo")]);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let store = MockStore::new();
        let first = store.create("shows", show("Dark", 3));
        store.delete_by_id("shows", first.id).unwrap();
        let second = store.create("shows", show("Dark", 3));

        assert_ne!(first.id, second.id);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_ids_stay_unique_after_middle_delete() {
        let store = MockStore::new();
        store.create("shows", show("a", 1));
        store.create("shows", show("b", 1));
        store.create("shows", show("c", 1));
        store.delete_by_id("shows", 2);
        let d = store.create("shows", show("d", 1));

        assert_eq!(d.id, 4);
        let ids: Vec<_> = store.get("shows").iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_update_merges_fields() {
        let store = MockStore::new();
        let created = store.create("shows", show("Dark", 3));

        let updated = store
            .update_by_id("shows", created.id, fields(json!({"episodes_seen": 9, "rating": 5})))
            .unwrap();

        assert_eq!(updated.get("name"), Some(&json!("Dark")));
        assert_eq!(updated.get("episodes_seen"), Some(&json!(9)));
        assert_eq!(updated.get("rating"), Some(&json!(5)));
        assert_eq!(store.get_by_id("shows", created.id), Some(updated));
    }

    #[test]
    fn test_update_missing_returns_none() {
        let store = MockStore::new();
        store.create("shows", show("Dark", 3));
        assert!(store.update_by_id("shows", 42, show("x", 1)).is_none());
    }

    #[test]
    fn test_delete_returns_record() {
        let store = MockStore::new();
        let created = store.create("shows", show("Dark", 3));

        let deleted = store.delete_by_id("shows", created.id);
        assert_eq!(deleted, Some(created.clone()));
        assert!(store.get_by_id("shows", created.id).is_none());
        assert!(store.delete_by_id("shows", created.id).is_none());
    }

    #[test]
    fn test_collections_are_independent() {
        let store = MockStore::new();
        store.create("shows", show("Dark", 3));
        let movie = store.create("movies", fields(json!({"title": "Heat"})));

        assert_eq!(movie.id, 1);
        assert_eq!(store.len("shows"), 1);
        assert_eq!(store.len("movies"), 1);
    }

    #[test]
    fn test_with_collection_seeds() {
        let store = MockStore::with_collection("shows", vec![show("Dark", 3), show("Lost", 10)]);
        assert_eq!(store.len("shows"), 2);
        assert_eq!(store.create("shows", show("Fargo", 1)).id, 3);
    }
}
