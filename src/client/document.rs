//! Decoded response documents.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A JSON object decoded from a response body.
///
/// Values are a tagged tree (null, bool, number, string, array, object),
/// so anything that is not an object at the top level fails to decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    /// Decode a body, requiring a JSON object at the top level.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `results` array of a search response, if present.
    pub fn results(&self) -> Option<&[Value]> {
        self.get("results").and_then(Value::as_array).map(Vec::as_slice)
    }
}
