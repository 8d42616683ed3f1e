//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Reads take `&PgPool`; writes that may run inside a caller's transaction
//! accept any [`sqlx::PgExecutor`].

pub mod owned_plant_repo;
pub mod reminder_repo;

pub use owned_plant_repo::OwnedPlantRepo;
pub use reminder_repo::ReminderRepo;
