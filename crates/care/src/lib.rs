//! Owned plant registry and reminder engine.
//!
//! Every operation runs to completion inside the calling request; the
//! current time is passed in by the caller.

pub mod engine;
pub mod error;
pub mod registry;

pub use engine::{CompletedReminder, ReminderEngine};
pub use error::{CareError, CareResult};
pub use registry::PlantRegistry;
