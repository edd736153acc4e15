//! Todo records
//!
//! The todo backend echoes back whatever it stored, plus its own fields
//! (`id`, `_id`, ...). Those are kept untouched in `extra`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Todo as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Server-assigned fields, unvalidated
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Draft posted from the add form; serializes to exactly `{"title","description"}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
}

impl NewTodo {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}
