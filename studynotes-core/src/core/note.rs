use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single user-authored study note tied to a course label.
///
/// Serialized with camelCase keys (`createdAt`, `updatedAt`); `updated_at`
/// stays absent on the wire until the note's first successful update.
/// `id` and `created_at` are assigned at creation and never change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub course: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Note {
    /// Creates a new note with a freshly generated unique id and the current time.
    pub fn new(title: String, course: String, content: String) -> Self {
        Note {
            id: Uuid::new_v4().to_string(),
            title,
            course,
            content,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}
