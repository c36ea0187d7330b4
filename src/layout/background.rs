//! Background style resolution for day cells

use chrono::NaiveDate;

use crate::calendar::is_weekend;
use crate::event::Event;
use crate::style::{Style, StylePalette};

/// Resolve the style a day cell is painted with.
///
/// `background` holds the background-kind events sorted ascending by
/// `(start, end)`; matches are applied in sequence so the last one wins.
/// Weekends supersede any match, and weekdays with no match fall back to
/// the weekday default.
pub fn resolve<'a>(
    day: NaiveDate,
    background: &[&'a Event],
    palette: &'a StylePalette,
) -> &'a Style {
    if is_weekend(day) {
        return &palette.weekend;
    }
    let mut style = &palette.weekday;
    for event in background {
        if event.dates.contains(day) {
            style = palette.resolve(event);
        }
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;
    use crate::style::Color;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn background_event(name: &str, start: NaiveDate, end: NaiveDate) -> Event {
        Event::new(name, (start, end)).with_kind(EventKind::Background)
    }

    #[test]
    fn test_unmatched_weekday_uses_weekday_style() {
        let palette = StylePalette::default();
        // 2015-06-01 is a Monday with no background events.
        let style = resolve(date(2015, 6, 1), &[], &palette);
        assert_eq!(style, &palette.weekday);
    }

    #[test]
    fn test_matched_day_uses_event_style() {
        let palette = StylePalette::default();
        let vacation = background_event("Vacation", date(2015, 7, 1), date(2015, 8, 31));
        let style = resolve(date(2015, 7, 15), &[&vacation], &palette);
        assert_eq!(style, &palette.special);
    }

    #[test]
    fn test_last_match_wins() {
        let palette = StylePalette::default();
        let outer = background_event("Quarter", date(2015, 4, 1), date(2015, 6, 30));
        let inner = background_event("Audit week", date(2015, 5, 11), date(2015, 5, 15))
            .with_style(palette.special.clone().with_background(Color::new(120, 180, 255)));

        // Sorted by (start, end): outer first, inner later, so inner wins
        // where both match.
        let style = resolve(date(2015, 5, 13), &[&outer, &inner], &palette);
        assert_eq!(style.background, Color::new(120, 180, 255));

        let style = resolve(date(2015, 4, 13), &[&outer, &inner], &palette);
        assert_eq!(style, &palette.special);
    }

    #[test]
    fn test_single_day_event_paints_one_day() {
        let palette = StylePalette::default();
        let holiday = Event::new("Founding day", date(2015, 6, 1))
            .with_kind(EventKind::SpecialDate);
        // Monday the 1st is tinted, Tuesday the 2nd is back to default.
        assert_eq!(resolve(date(2015, 6, 1), &[&holiday], &palette), &palette.special);
        assert_eq!(resolve(date(2015, 6, 2), &[&holiday], &palette), &palette.weekday);
    }

    #[test]
    fn test_weekend_supersedes_background_match() {
        let palette = StylePalette::default();
        let vacation = background_event("Vacation", date(2015, 7, 1), date(2015, 8, 31));
        // 2015-07-18 is a Saturday inside the vacation range.
        let style = resolve(date(2015, 7, 18), &[&vacation], &palette);
        assert_eq!(style, &palette.weekend);
    }

    #[test]
    fn test_weekend_without_match_uses_weekend_style() {
        let palette = StylePalette::default();
        let style = resolve(date(2015, 6, 6), &[], &palette);
        assert_eq!(style, &palette.weekend);
    }
}
