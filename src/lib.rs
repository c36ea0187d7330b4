//! Wallplanner - a year wall-planner layout engine
//!
//! This library lays a full year of events out as one printable sheet:
//! twelve horizontal month bands of day cells, with events drawn as bars
//! packed into lanes. The layout engine produces resolved drawing
//! primitives in millimeters; the SVG renderer only transcribes them.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use wallplanner::{render_year, Event};
//!
//! let start = NaiveDate::from_ymd_opt(2015, 3, 15).unwrap();
//! let end = NaiveDate::from_ymd_opt(2015, 5, 15).unwrap();
//! let mut events = vec![Event::new("Festival", (start, end))];
//!
//! let svg = render_year(2015, &mut events).unwrap();
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("Festival"));
//! ```

pub mod calendar;
pub mod event;
pub mod layout;
pub mod planfile;
pub mod renderer;
pub mod style;

pub use event::{DateRange, Event, EventKind};
pub use layout::{LayoutConfig, LayoutDocument, LayoutError};
pub use planfile::PlanFile;
pub use renderer::{render_svg, SvgConfig};
pub use style::{Color, Style, StylePalette};

/// Configuration for the complete planning pipeline
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Style palette for cells, bars and labels
    pub palette: StylePalette,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            svg: SvgConfig::default(),
            palette: StylePalette::default(),
        }
    }
}

impl PlannerConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the style palette
    pub fn with_palette(mut self, palette: StylePalette) -> Self {
        self.palette = palette;
        self
    }
}

/// Compute the layout for a year with default configuration.
///
/// Lane assignments are written back onto `events`; see
/// [`Event::slot`] for how they persist across months and runs.
pub fn plan_year(year: i32, events: &mut [Event]) -> Result<LayoutDocument, LayoutError> {
    plan_year_with_config(year, events, &PlannerConfig::default())
}

/// Compute the layout for a year with custom configuration
pub fn plan_year_with_config(
    year: i32,
    events: &mut [Event],
    config: &PlannerConfig,
) -> Result<LayoutDocument, LayoutError> {
    layout::compute(year, events, &config.layout, &config.palette)
}

/// Lay out a year and render it to SVG with default configuration
///
/// This is the main entry point for the library.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use wallplanner::{render_year, Event, EventKind};
///
/// let mut events = vec![
///     Event::new(
///         "Summer holiday",
///         (
///             NaiveDate::from_ymd_opt(2015, 7, 1).unwrap(),
///             NaiveDate::from_ymd_opt(2015, 8, 31).unwrap(),
///         ),
///     )
///     .with_kind(EventKind::Background),
/// ];
///
/// let svg = render_year(2015, &mut events).unwrap();
/// assert!(svg.contains("</svg>"));
/// ```
pub fn render_year(year: i32, events: &mut [Event]) -> Result<String, LayoutError> {
    render_year_with_config(year, events, &PlannerConfig::default())
}

/// Lay out a year and render it to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use wallplanner::{render_year_with_config, LayoutConfig, PlannerConfig, SvgConfig};
///
/// let config = PlannerConfig::new()
///     .with_layout(LayoutConfig::default().with_max_day_events(3))
///     .with_svg(SvgConfig::default().fit_to_content());
///
/// let svg = render_year_with_config(2015, &mut [], &config).unwrap();
/// assert!(svg.contains("<svg"));
/// ```
pub fn render_year_with_config(
    year: i32,
    events: &mut [Event],
    config: &PlannerConfig,
) -> Result<String, LayoutError> {
    let document = plan_year_with_config(year, events, config)?;
    Ok(render_svg(&document, &config.svg))
}
