//! Historical incident records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Coordinate;

/// A georeferenced historical incident as read from the incident store.
///
/// The engine only reads these records; creation and lifecycle belong to
/// the store. Severity is carried through for display but does not affect
/// scoring, which weights every incident equally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentRecord {
    /// Store-assigned primary key, unique within one query result.
    pub id: i64,

    /// Where the incident occurred.
    pub location: Coordinate,

    /// Incident category (e.g. "theft", "assault").
    pub category: String,

    /// Severity on the store's own scale; informational only.
    pub severity: i32,

    /// Free-text description, where the source provided one.
    pub description: Option<String>,

    /// When the incident occurred.
    pub occurred_at: DateTime<Utc>,
}
