//! Facility map records.

use serde::{Deserialize, Serialize};

/// A facility record from the upstream map feed.
///
/// The shape is owned entirely by the feed that populates the collection;
/// this service relabels the document id and passes every other field
/// through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facility {
    #[serde(alias = "_firestore_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}
