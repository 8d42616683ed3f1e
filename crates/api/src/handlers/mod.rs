pub mod catalog;
pub mod plants;
pub mod reminders;
pub mod root;
