//! Layout computation engine
//!
//! This module turns a year's worth of events into a `LayoutDocument` of
//! positioned drawing primitives, one horizontal band per month.
//!
//! Each month is laid out in three passes:
//!
//! 1. **Background resolution**: every day of the month gets a resolved
//!    style (weekday, weekend, or a matching background range).
//! 2. **Cell emission**: the month label, then one rectangle and day
//!    number per day, left to right.
//! 3. **Slot packing**: normal events are placed into horizontal lanes
//!    (see [`super::slots`]) and emitted as bars with labels.
//!
//! Within a band, primitives are emitted background first, so their order
//! is also their paint order: event bars cover day cells, labels cover
//! bars.

use crate::calendar::{month_abbrev, MonthGrid};
use crate::event::Event;
use crate::style::StylePalette;

use super::background;
use super::config::LayoutConfig;
use super::error::LayoutError;
use super::slots;
use super::types::{
    BoundingBox, DayCell, LayoutDocument, MonthLayout, Point, Primitive, TextAnchor,
};

/// Month label baseline, as a fraction of the cell height.
const MONTH_LABEL_DROP: f64 = 0.33;
/// Day number anchor, as fractions of the cell width and height.
const DAY_NUMBER_ACROSS: f64 = 0.75;
const DAY_NUMBER_DROP: f64 = 0.90;

/// Compute the layout for a full year.
///
/// Months are processed January to December, each a band of day cells one
/// row below the previous. Lane choices are written back onto the events,
/// which is how a bar crossing a month boundary keeps its row; pass
/// freshly built events (or call [`Event::reset_slot`]) to lay out from
/// scratch.
///
/// On error nothing is returned, but events processed before the failure
/// keep any lane they were assigned.
pub fn compute(
    year: i32,
    events: &mut [Event],
    config: &LayoutConfig,
    palette: &StylePalette,
) -> Result<LayoutDocument, LayoutError> {
    super::validate_events(events)?;

    let months: Vec<MonthGrid> = (1..=12)
        .map(|month| MonthGrid::new(year, month))
        .collect::<Option<_>>()
        .ok_or(LayoutError::UnsupportedYear { year })?;

    // Stable orderings over indices, computed once for the whole year.
    let mut background_order: Vec<usize> = (0..events.len())
        .filter(|&i| events[i].kind.paints_background())
        .collect();
    background_order.sort_by_key(|&i| (events[i].dates.start, events[i].dates.end));

    let mut lane_order: Vec<usize> = (0..events.len())
        .filter(|&i| events[i].kind.occupies_lane())
        .collect();
    lane_order.sort_by_key(|&i| events[i].dates.start);

    let (cell_width, cell_height) = config.cell_size;
    let capacity = config.max_day_events;

    let mut document = LayoutDocument::new(year);
    let mut band_top = config.margin;

    for month in &months {
        let mut primitives = Vec::new();
        let first_cell_x = config.margin + month.offset as f64 * cell_width;

        // Month label in the gutter left of the first day cell.
        primitives.push(Primitive::text(
            month_abbrev(month.month),
            Point::new(
                first_cell_x - cell_width / 2.0,
                band_top + cell_height * MONTH_LABEL_DROP,
            ),
            TextAnchor::Middle,
            palette.label.foreground,
            &palette.label,
        ));

        let mut cells: Vec<DayCell> = {
            let background_events: Vec<&Event> =
                background_order.iter().map(|&i| &events[i]).collect();
            month
                .days()
                .map(|day| {
                    let style = background::resolve(day, &background_events, palette);
                    DayCell::new(day, style.clone(), capacity)
                })
                .collect()
        };

        for (day_index, cell) in cells.iter().enumerate() {
            let x = first_cell_x + day_index as f64 * cell_width;
            let bounds = BoundingBox::new(x, band_top, cell_width, cell_height);
            primitives.push(Primitive::rect(bounds, &cell.style));
            primitives.push(Primitive::text(
                (day_index + 1).to_string(),
                Point::new(
                    x + cell_width * DAY_NUMBER_ACROSS,
                    band_top + cell_height * DAY_NUMBER_DROP,
                ),
                TextAnchor::Middle,
                cell.style.foreground,
                &cell.style,
            ));
        }

        let placements = slots::assign(month, &mut cells, events, &lane_order, capacity)?;

        for placement in placements {
            let event = &events[placement.event];
            let style = palette.resolve(event);
            let x = config.margin + month.column(placement.first_day) as f64 * cell_width;
            let y = band_top + (placement.lane - 1) as f64 * config.event_height;
            let span_days = (placement.last_day - placement.first_day).num_days() as f64 + 1.0;
            let bounds =
                BoundingBox::new(x, y, span_days * cell_width, config.event_height);
            primitives.push(Primitive::rect(bounds, style));
            primitives.push(Primitive::text(
                &event.name,
                Point::new(x + config.label_inset.0, y + config.label_inset.1),
                TextAnchor::Start,
                style.contrast_color(),
                style,
            ));
        }

        document.months.push(MonthLayout {
            month: month.month,
            primitives,
        });
        band_top += cell_height;
    }

    document.compute_bounds();
    Ok(document)
}
