//! Row structs and request DTOs.

pub mod owned_plant;
pub mod reminder;
