//! Planner events and date ranges

use chrono::NaiveDate;
use serde::Deserialize;

use crate::style::Style;

/// An inclusive span of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A range covering a single day.
    pub fn single(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Restrict this range to `first..=last`, or `None` if they are
    /// disjoint.
    pub fn clip_to(&self, first: NaiveDate, last: NaiveDate) -> Option<DateRange> {
        let start = self.start.max(first);
        let end = self.end.min(last);
        if start <= end {
            Some(DateRange { start, end })
        } else {
            None
        }
    }

    /// Number of days in the range, counting both endpoints.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl From<(NaiveDate, NaiveDate)> for DateRange {
    fn from((start, end): (NaiveDate, NaiveDate)) -> Self {
        DateRange::new(start, end)
    }
}

impl From<NaiveDate> for DateRange {
    fn from(day: NaiveDate) -> Self {
        DateRange::single(day)
    }
}

/// How an event participates in the layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    /// Drawn as a bar in a horizontal lane across its day span.
    #[default]
    Normal,
    /// Tints the day cells it covers instead of occupying a lane.
    Background,
    /// Like `Background`, for single dates such as public holidays.
    SpecialDate,
    /// Marker kind for the weekend tint; carries no dates of its own.
    Weekend,
    /// Placeholder that neither draws nor reserves anything.
    Empty,
}

impl EventKind {
    /// Whether events of this kind compete for day-cell lanes.
    pub fn occupies_lane(self) -> bool {
        matches!(self, EventKind::Normal)
    }

    /// Whether events of this kind tint the day cells they cover.
    pub fn paints_background(self) -> bool {
        matches!(self, EventKind::Background | EventKind::SpecialDate)
    }
}

/// A single entry on the planner sheet.
///
/// The layout engine only ever mutates the slot assignment; dates, name,
/// kind and style belong to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub dates: DateRange,
    pub name: String,
    pub kind: EventKind,
    /// Explicit style overriding the palette default for this kind.
    pub style: Option<Style>,
    slot: Option<u32>,
}

impl Event {
    /// A normal event spanning `dates` (a single day or a `(start, end)`
    /// pair).
    pub fn new(name: impl Into<String>, dates: impl Into<DateRange>) -> Self {
        Self {
            dates: dates.into(),
            name: name.into(),
            kind: EventKind::Normal,
            style: None,
            slot: None,
        }
    }

    pub fn with_kind(mut self, kind: EventKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// The lane this event was packed into, once layout has run.
    ///
    /// The assignment persists across months so a bar spanning a month
    /// boundary keeps one visual row for its whole duration.
    pub fn slot(&self) -> Option<u32> {
        self.slot
    }

    pub(crate) fn assign_slot(&mut self, lane: u32) {
        self.slot = Some(lane);
    }

    /// Clear a persisted lane so the event can be laid out afresh.
    pub fn reset_slot(&mut self) {
        self.slot = None;
    }
}
