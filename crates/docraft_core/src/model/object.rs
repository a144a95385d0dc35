//! Digital content object model.
//!
//! # Responsibility
//! - Define the top-level document entity owned by the storage layer.
//!
//! # Invariants
//! - `id`, once assigned by a save, is stable and never reused.
//! - All caller-owned fields live in the attribute map and are opaque here.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Stable identifier for a content object (`dco_<epoch-millis>`).
pub type ObjectId = String;

/// Top-level document entity.
///
/// The storage layer only knows about `id`; everything else (title,
/// metadata, authoring state) is caller-defined and carried in `attrs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentObject {
    /// Unset until the first save assigns an id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Caller-owned fields, persisted verbatim alongside `id`.
    #[serde(flatten)]
    pub attrs: Map<String, Value>,
}

impl ContentObject {
    /// Creates an empty, not-yet-saved object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style attribute setter for construction sites.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Returns one caller-owned attribute, if present.
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.attrs.insert(key.into(), value.into());
    }
}

/// Fixed catalog entry describing a document specification kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSpec {
    pub id: String,
    pub name: String,
}
