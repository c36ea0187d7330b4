//! TOML planner files
//!
//! A planner file names the year and lists events:
//!
//! ```toml
//! year = 2015
//!
//! [[event]]
//! name = "Summer holiday"
//! start = 2015-08-15
//! end = 2015-08-22
//! kind = "background"
//! color = "#d0ff9c"
//! ```
//!
//! `start` and `end` are TOML date values. `end` defaults to `start`,
//! `kind` to `normal`; `color` replaces the background fill of the kind's
//! palette style.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::event::{Event, EventKind};
use crate::style::{Color, StylePalette};

/// Errors that can occur when loading or parsing planner files
#[derive(Error, Debug)]
pub enum PlanFileError {
    #[error("Failed to read planner file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse planner TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A parsed planner file
#[derive(Debug, Clone, Deserialize)]
pub struct PlanFile {
    /// The year the sheet covers.
    pub year: i32,
    #[serde(default, rename = "event")]
    pub events: Vec<EventEntry>,
}

/// One `[[event]]` table
#[derive(Debug, Clone, Deserialize)]
pub struct EventEntry {
    pub name: String,
    #[serde(deserialize_with = "toml_date")]
    pub start: NaiveDate,
    #[serde(default, deserialize_with = "toml_date_opt")]
    pub end: Option<NaiveDate>,
    #[serde(default)]
    pub kind: EventKind,
    #[serde(default)]
    pub color: Option<Color>,
}

impl PlanFile {
    /// Load a planner file from disk
    pub fn from_file(path: &Path) -> Result<Self, PlanFileError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a planner file from a TOML string
    pub fn from_str(content: &str) -> Result<Self, PlanFileError> {
        Ok(toml::from_str(content)?)
    }

    /// Build the event list for the layout engine.
    ///
    /// An entry's `color` becomes an explicit style: the palette default
    /// for its kind with the background fill replaced.
    pub fn events(&self, palette: &StylePalette) -> Vec<Event> {
        self.events
            .iter()
            .map(|entry| {
                let end = entry.end.unwrap_or(entry.start);
                let mut event = Event::new(&entry.name, (entry.start, end)).with_kind(entry.kind);
                if let Some(color) = entry.color {
                    event = event
                        .with_style(palette.style_for(entry.kind).clone().with_background(color));
                }
                event
            })
            .collect()
    }
}

/// Deserialize a TOML date value into a `NaiveDate`.
///
/// TOML has its own datetime type, so the value arrives as
/// [`toml::value::Datetime`] rather than a string chrono could parse.
/// A datetime's time component is ignored; a time without a date is
/// rejected.
fn toml_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let value = toml::value::Datetime::deserialize(deserializer)?;
    let date = value
        .date
        .ok_or_else(|| serde::de::Error::custom("expected a calendar date, got a time"))?;
    NaiveDate::from_ymd_opt(date.year as i32, date.month as u32, date.day as u32)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid calendar date '{}'", value)))
}

fn toml_date_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    toml_date(deserializer).map(Some)
}
