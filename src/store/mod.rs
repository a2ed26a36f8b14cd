//! In-memory mock datastore
//!
//! Maps a collection name to an ordered list of records. Each collection
//! owns a monotonic id counter, so ids are unique within the collection and
//! never handed out twice, even after the record holding them is deleted.
//!
//! Nothing here survives process exit.

mod mock;
mod record;

pub use mock::MockStore;
pub use record::{Fields, Record, RecordId};
