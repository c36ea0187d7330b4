//! Configuration for the layout engine

/// Configuration options for layout computation
///
/// All lengths are millimeters. The defaults produce a twelve-band sheet
/// that fills an A0 landscape page.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Margin from the sheet's top-left corner to the first cell
    pub margin: f64,

    /// Size of one day cell (width, height)
    pub cell_size: (f64, f64),

    /// Height of one event bar, and so of one lane
    pub event_height: f64,

    /// Offset of an event label from its bar's top-left corner (x, y)
    pub label_inset: (f64, f64),

    /// Maximum number of events stacked on a single day
    pub max_day_events: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin: 10.0,
            cell_size: (30.0, 64.0),
            event_height: 10.0,
            label_inset: (3.0, 7.0),
            max_day_events: 5,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sheet margin
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set the day cell size
    pub fn with_cell_size(mut self, width: f64, height: f64) -> Self {
        self.cell_size = (width, height);
        self
    }

    /// Set the event bar height
    pub fn with_event_height(mut self, height: f64) -> Self {
        self.event_height = height;
        self
    }

    /// Set the per-day event capacity
    pub fn with_max_day_events(mut self, capacity: u32) -> Self {
        self.max_day_events = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.margin, 10.0);
        assert_eq!(config.cell_size, (30.0, 64.0));
        assert_eq!(config.event_height, 10.0);
        assert_eq!(config.label_inset, (3.0, 7.0));
        assert_eq!(config.max_day_events, 5);
    }

    #[test]
    fn test_builder_pattern() {
        let config = LayoutConfig::new()
            .with_cell_size(20.0, 40.0)
            .with_max_day_events(3);

        assert_eq!(config.cell_size, (20.0, 40.0));
        assert_eq!(config.max_day_events, 3);
    }

    #[test]
    fn test_capacity_fits_cell_height() {
        // Five 10mm lanes stack inside a 64mm cell.
        let config = LayoutConfig::default();
        let stacked = config.max_day_events as f64 * config.event_height;
        assert!(stacked <= config.cell_size.1);
    }
}
