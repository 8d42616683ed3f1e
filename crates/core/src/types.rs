/// Primary keys for owned plants and reminders are random UUIDs.
pub type EntityId = uuid::Uuid;

/// User identities are resolved outside this service and stored as opaque text.
pub type UserId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
