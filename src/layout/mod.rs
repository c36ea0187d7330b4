//! Layout engine for the year planner sheet
//!
//! This module takes a year and a set of events and computes the spatial
//! layout, producing a [`LayoutDocument`] of positioned drawing primitives.

pub mod background;
pub mod config;
pub mod engine;
pub mod error;
pub mod slots;
pub mod types;

pub use config::LayoutConfig;
pub use engine::compute;
pub use error::LayoutError;
pub use slots::Placement;
pub use types::*;

use crate::event::Event;

/// Validate events before any layout work is done.
///
/// Every event needs a non-empty name (it doubles as the bar label and as
/// the key error messages refer to) and a date range that does not end
/// before it starts. Nothing is mutated when validation fails.
pub fn validate_events(events: &[Event]) -> Result<(), LayoutError> {
    for (index, event) in events.iter().enumerate() {
        if event.name.is_empty() {
            return Err(LayoutError::EmptyName { index });
        }
        if event.dates.end < event.dates.start {
            return Err(LayoutError::invalid_range(
                &event.name,
                event.dates.start,
                event.dates.end,
            ));
        }
    }
    Ok(())
}
