use chrono::{DateTime, Utc};

/// Store-assigned identifier. `0` marks a record that was never persisted.
pub type RecordId = i32;

/// Capabilities a record store needs from the records it persists.
pub trait Record: Clone + Send + Sync + 'static {
    /// Lowercase name used in error messages, e.g. `"post"`.
    const ENTITY_TYPE: &'static str;

    fn id(&self) -> RecordId;

    fn assign_id(&mut self, id: RecordId);

    /// Stamp timestamps. `created_at` is only written on insert.
    fn touch(&mut self, now: DateTime<Utc>, inserted: bool);
}
