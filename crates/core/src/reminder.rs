//! Reminder kinds, care cadences and due-date arithmetic.
//!
//! Everything here is pure: callers pass the current time in, so the same
//! rules drive the database-backed engine and its tests.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default days between waterings for a newly added plant.
pub const DEFAULT_WATERING_CADENCE_DAYS: i32 = 7;

/// Default days between fertilizings for a newly added plant.
pub const DEFAULT_FERTILIZING_CADENCE_DAYS: i32 = 30;

/// Smallest accepted cadence.
pub const MIN_CADENCE_DAYS: i32 = 1;

/// Largest accepted cadence (one year).
pub const MAX_CADENCE_DAYS: i32 = 365;

/// Default forward horizon for surfacing pending reminders.
pub const DEFAULT_LOOKAHEAD_DAYS: i64 = 7;

/// Largest accepted lookahead horizon.
pub const MAX_LOOKAHEAD_DAYS: i64 = 365;

pub const KIND_WATERING: &str = "watering";
pub const KIND_FERTILIZING: &str = "fertilizing";
pub const KIND_REPOTTING: &str = "repotting";

/// All valid reminder kind strings.
pub const VALID_KINDS: &[&str] = &[KIND_WATERING, KIND_FERTILIZING, KIND_REPOTTING];

// ---------------------------------------------------------------------------
// Reminder kind
// ---------------------------------------------------------------------------

/// The care action a reminder asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    Watering,
    Fertilizing,
    Repotting,
}

impl ReminderKind {
    /// String representation for display, logging, and database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Watering => KIND_WATERING,
            Self::Fertilizing => KIND_FERTILIZING,
            Self::Repotting => KIND_REPOTTING,
        }
    }

    /// Parse a kind from its database string value.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            KIND_WATERING => Ok(Self::Watering),
            KIND_FERTILIZING => Ok(Self::Fertilizing),
            KIND_REPOTTING => Ok(Self::Repotting),
            _ => Err(CoreError::Validation(format!(
                "Invalid reminder kind '{s}'. Must be one of: {}",
                VALID_KINDS.join(", ")
            ))),
        }
    }

    /// Whether completing a reminder of this kind schedules a successor.
    pub fn is_recurring(&self) -> bool {
        match self {
            Self::Watering | Self::Fertilizing => true,
            Self::Repotting => false,
        }
    }

    /// Kinds created automatically when a plant is added.
    pub fn initial_kinds() -> [Self; 2] {
        [Self::Watering, Self::Fertilizing]
    }
}

impl std::fmt::Display for ReminderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for ReminderKind {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str_value(&value)
    }
}

// ---------------------------------------------------------------------------
// Cadence
// ---------------------------------------------------------------------------

/// A plant's recurring care intervals, in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareCadence {
    pub watering_days: i32,
    pub fertilizing_days: i32,
}

impl Default for CareCadence {
    fn default() -> Self {
        Self {
            watering_days: DEFAULT_WATERING_CADENCE_DAYS,
            fertilizing_days: DEFAULT_FERTILIZING_CADENCE_DAYS,
        }
    }
}

impl CareCadence {
    /// Build a cadence, falling back to defaults for omitted values.
    pub fn new(watering_days: Option<i32>, fertilizing_days: Option<i32>) -> Self {
        let defaults = Self::default();
        Self {
            watering_days: watering_days.unwrap_or(defaults.watering_days),
            fertilizing_days: fertilizing_days.unwrap_or(defaults.fertilizing_days),
        }
    }

    /// Cadence for a kind. Repotting has none.
    pub fn days_for(&self, kind: ReminderKind) -> Option<i32> {
        match kind {
            ReminderKind::Watering => Some(self.watering_days),
            ReminderKind::Fertilizing => Some(self.fertilizing_days),
            ReminderKind::Repotting => None,
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        validate_cadence_days("watering_frequency_days", self.watering_days)?;
        validate_cadence_days("fertilizing_frequency_days", self.fertilizing_days)
    }
}

/// Validate that a cadence lies within [`MIN_CADENCE_DAYS`]..=[`MAX_CADENCE_DAYS`].
pub fn validate_cadence_days(field: &str, days: i32) -> Result<(), CoreError> {
    if !(MIN_CADENCE_DAYS..=MAX_CADENCE_DAYS).contains(&days) {
        return Err(CoreError::Validation(format!(
            "{field} must be between {MIN_CADENCE_DAYS} and {MAX_CADENCE_DAYS}, got {days}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Due dates
// ---------------------------------------------------------------------------

/// Due date of the next reminder of `kind`, or `None` for non-recurring kinds.
pub fn next_due_date(
    kind: ReminderKind,
    cadence: &CareCadence,
    now: Timestamp,
) -> Option<Timestamp> {
    if !kind.is_recurring() {
        return None;
    }
    cadence
        .days_for(kind)
        .map(|days| now + Duration::days(i64::from(days)))
}

/// The `(kind, due_date)` pairs created when a plant is added at `now`.
pub fn initial_schedule(cadence: &CareCadence, now: Timestamp) -> Vec<(ReminderKind, Timestamp)> {
    ReminderKind::initial_kinds()
        .into_iter()
        .filter_map(|kind| next_due_date(kind, cadence, now).map(|due| (kind, due)))
        .collect()
}

/// Validate a lookahead horizon, applying the default when omitted.
pub fn resolve_lookahead_days(requested: Option<i64>) -> Result<i64, CoreError> {
    let days = requested.unwrap_or(DEFAULT_LOOKAHEAD_DAYS);
    if !(0..=MAX_LOOKAHEAD_DAYS).contains(&days) {
        return Err(CoreError::Validation(format!(
            "lookahead_days must be between 0 and {MAX_LOOKAHEAD_DAYS}, got {days}"
        )));
    }
    Ok(days)
}

/// Latest due date (inclusive) surfaced by a lookahead window starting at `now`.
///
/// Pending reminders with `due_date <= horizon` are in the window,
/// overdue ones included.
pub fn due_horizon(now: Timestamp, lookahead_days: i64) -> Timestamp {
    now + Duration::days(lookahead_days)
}
