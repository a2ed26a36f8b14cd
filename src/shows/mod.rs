//! # Shows collection
//!
//! Typed view over the `shows` collection of the mock store. The store
//! itself is schemaless; this module decides what a valid show looks like
//! when it arrives over HTTP.

mod errors;

pub use errors::{ShowError, ShowResult};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::store::{Fields, Record};

/// Collection name in the store
pub const COLLECTION: &str = "shows";

const NAME: &str = "name";
const EPISODES_SEEN: &str = "episodes_seen";

/// A validated show ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewShow {
    pub name: String,
    pub episodes_seen: u64,
}

impl NewShow {
    pub fn new(name: impl Into<String>, episodes_seen: u64) -> Self {
        Self {
            name: name.into(),
            episodes_seen,
        }
    }

    /// Validate a POST body.
    ///
    /// A `null` field counts as missing. Fields other than `name` and
    /// `episodes_seen` are dropped.
    pub fn from_body(body: &Value) -> ShowResult<Self> {
        let object = body.as_object().ok_or(ShowError::NotAnObject)?;

        let name = present(object, NAME).ok_or(ShowError::MissingName)?;
        let episodes = present(object, EPISODES_SEEN).ok_or(ShowError::MissingEpisodes)?;

        Ok(Self {
            name: expect_name(name)?.to_string(),
            episodes_seen: expect_episodes(episodes)?,
        })
    }

    /// Check the same rules `from_body` applies
    pub fn validate(&self) -> ShowResult<()> {
        if self.name.is_empty() {
            return Err(ShowError::InvalidField {
                field: NAME,
                expected: "a non-empty string",
            });
        }
        Ok(())
    }

    /// Store representation
    pub fn into_fields(self) -> Fields {
        let mut fields = Map::new();
        fields.insert(NAME.to_string(), Value::String(self.name));
        fields.insert(EPISODES_SEEN.to_string(), Value::from(self.episodes_seen));
        fields
    }
}

/// A validated partial update.
///
/// Known fields are type-checked; anything else is merged as given.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowPatch {
    fields: Fields,
}

impl ShowPatch {
    /// Validate a PUT body
    pub fn from_body(body: &Value) -> ShowResult<Self> {
        let object = body.as_object().ok_or(ShowError::NotAnObject)?;

        if let Some(name) = object.get(NAME) {
            expect_name(name)?;
        }
        if let Some(episodes) = object.get(EPISODES_SEEN) {
            expect_episodes(episodes)?;
        }

        Ok(Self {
            fields: object.clone(),
        })
    }

    pub fn into_fields(self) -> Fields {
        self.fields
    }
}

/// Keep shows that have seen at least `min` episodes.
///
/// Records without an integer `episodes_seen` never match.
pub fn min_episodes_filter(records: Vec<Record>, min: i64) -> Vec<Record> {
    records
        .into_iter()
        .filter(|record| {
            record
                .get(EPISODES_SEEN)
                .and_then(Value::as_i64)
                .is_some_and(|seen| seen >= min)
        })
        .collect()
}

fn present<'a>(object: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    object.get(field).filter(|value| !value.is_null())
}

fn expect_name(value: &Value) -> ShowResult<&str> {
    match value.as_str() {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(ShowError::InvalidField {
            field: NAME,
            expected: "a non-empty string",
        }),
    }
}

fn expect_episodes(value: &Value) -> ShowResult<u64> {
    value.as_u64().ok_or(ShowError::InvalidField {
        field: EPISODES_SEEN,
        expected: "a non-negative integer",
    })
}
