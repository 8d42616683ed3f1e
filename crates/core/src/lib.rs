//! Domain rules shared by every Plauntie crate.
//!
//! Has no internal dependencies; storage and HTTP layers build on it.

pub mod error;
pub mod plant;
pub mod reminder;
pub mod types;
