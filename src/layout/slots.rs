//! Lane packing for normal events
//!
//! Every day cell starts a month with a fixed set of free lanes. Events are
//! processed in ascending start order; each one takes the lowest lane that
//! is free on every day it covers, then removes that lane from those days.
//! An event whose span crosses a month boundary keeps the lane it was given
//! first, so its bar stays on one visual row for its whole duration.

use chrono::NaiveDate;

use crate::calendar::MonthGrid;
use crate::event::Event;

use super::error::LayoutError;
use super::types::DayCell;

/// A normal event placed in the current month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Index into the caller's event slice.
    pub event: usize,
    /// 1-based lane the event occupies.
    pub lane: u32,
    /// First covered day inside the month.
    pub first_day: NaiveDate,
    /// Last covered day inside the month.
    pub last_day: NaiveDate,
}

/// Assign lanes for the events intersecting `month`.
///
/// `order` lists indices of lane-occupying events in ascending start-date
/// order; `cells` holds one [`DayCell`] per day of the month with its free
/// lanes. Events outside the month are skipped, events reaching across its
/// edges are clipped. Lane choices are recorded both in the returned
/// placements and on the events themselves, where they persist into later
/// months.
///
/// A lane persisted from an earlier month is revalidated against this
/// month's free sets rather than trusted; if another event took it in the
/// meantime the run aborts with [`LayoutError::SlotConflict`] instead of
/// drawing two bars on one row.
pub fn assign(
    month: &MonthGrid,
    cells: &mut [DayCell],
    events: &mut [Event],
    order: &[usize],
    capacity: u32,
) -> Result<Vec<Placement>, LayoutError> {
    let mut placements = Vec::new();

    for &index in order {
        let event = &events[index];
        let Some(span) = event.dates.clip_to(month.first, month.last) else {
            continue;
        };

        let from = (span.start - month.first).num_days() as usize;
        let to = (span.end - month.first).num_days() as usize;
        let days = &mut cells[from..=to];

        // A day with no lane left cannot take another event, whichever
        // lane would be chosen.
        if days.iter().any(|cell| cell.free.is_empty()) {
            return Err(LayoutError::capacity_exceeded(
                &event.name,
                month.month,
                capacity,
            ));
        }

        let lane = match event.slot() {
            None => {
                let mut common = days[0].free.clone();
                for cell in &days[1..] {
                    common.retain(|lane| cell.free.contains(lane));
                }
                match common.first() {
                    Some(&lane) => lane,
                    None => {
                        return Err(LayoutError::no_free_lane(&event.name, month.month));
                    }
                }
            }
            Some(lane) => {
                if days.iter().all(|cell| cell.free.contains(&lane)) {
                    lane
                } else {
                    return Err(LayoutError::slot_conflict(&event.name, lane, month.month));
                }
            }
        };

        if events[index].slot().is_none() {
            events[index].assign_slot(lane);
        }
        for cell in cells[from..=to].iter_mut() {
            cell.free.remove(&lane);
        }
        placements.push(Placement {
            event: index,
            lane,
            first_day: span.start,
            last_day: span.end,
        });
    }

    Ok(placements)
}
