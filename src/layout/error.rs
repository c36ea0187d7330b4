//! Error types for the layout engine

use chrono::NaiveDate;
use thiserror::Error;

use crate::calendar::month_name;

/// Errors that can occur during layout computation
#[derive(Debug, Error)]
pub enum LayoutError {
    /// An event whose end date precedes its start date
    #[error("event '{name}' ends {end} before it starts {start}")]
    InvalidRange {
        name: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    /// An event with an empty name
    #[error("event at index {index} has an empty name")]
    EmptyName { index: usize },

    /// A year whose months cannot be represented
    #[error("year {year} is outside the supported range")]
    UnsupportedYear { year: i32 },

    /// More simultaneous events in a month than lanes in a day cell
    #[error("too many events in {}: '{name}' exceeds the {capacity}-lane capacity", month_name(*month))]
    CapacityExceeded {
        name: String,
        month: u32,
        capacity: u32,
    },

    /// No single lane is free across an event's whole span in a month
    #[error("no lane is free for '{name}' across its days in {}", month_name(*month))]
    NoFreeLane { name: String, month: u32 },

    /// A lane persisted from an earlier month is already taken
    #[error("event '{name}' holds lane {lane} but it is taken in {}", month_name(*month))]
    SlotConflict {
        name: String,
        lane: u32,
        month: u32,
    },
}

impl LayoutError {
    /// Create an invalid range error
    pub fn invalid_range(name: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self::InvalidRange {
            name: name.into(),
            start,
            end,
        }
    }

    /// Create a capacity exceeded error
    pub fn capacity_exceeded(name: impl Into<String>, month: u32, capacity: u32) -> Self {
        Self::CapacityExceeded {
            name: name.into(),
            month,
            capacity,
        }
    }

    /// Create a no free lane error
    pub fn no_free_lane(name: impl Into<String>, month: u32) -> Self {
        Self::NoFreeLane {
            name: name.into(),
            month,
        }
    }

    /// Create a slot conflict error
    pub fn slot_conflict(name: impl Into<String>, lane: u32, month: u32) -> Self {
        Self::SlotConflict {
            name: name.into(),
            lane,
            month,
        }
    }
}
