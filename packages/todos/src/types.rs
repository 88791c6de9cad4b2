// ABOUTME: Todo type definitions
// ABOUTME: Wire and row shape of a single todo item

use serde::{Deserialize, Deserializer, Serialize};

/// A persisted task record.
///
/// Every field defaults when absent from JSON input or given as `null`, so
/// `{"title":"x"}` decodes with `completed = false` and `id = 0`. The id in a request body is
/// never trusted: storage assigns it on create and the path supplies it on
/// update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
}

/// `null` leaves the field at its zero value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Todo {
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            id: 0,
            title: title.into(),
            completed,
        }
    }

    /// Same todo, pinned to `id`.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}
