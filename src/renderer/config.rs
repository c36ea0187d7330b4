//! Configuration for SVG rendering

/// Configuration options for SVG output
#[derive(Debug, Clone, PartialEq)]
pub struct SvgConfig {
    /// Physical page size in millimeters (width, height), or `None` to
    /// size the page to the content
    pub page_size: Option<(f64, f64)>,

    /// Padding around the viewBox when sizing to content
    pub viewbox_padding: f64,

    /// Whether to include the XML declaration
    pub standalone: bool,

    /// Whether to format output with newlines and indentation
    pub pretty_print: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            // A0 landscape, the size the default layout metrics fill.
            page_size: Some((1189.0, 841.0)),
            viewbox_padding: 10.0,
            standalone: true,
            pretty_print: true,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a fixed page size in millimeters
    pub fn with_page_size(mut self, width: f64, height: f64) -> Self {
        self.page_size = Some((width, height));
        self
    }

    /// Size the page to the laid-out content instead of a fixed sheet
    pub fn fit_to_content(mut self) -> Self {
        self.page_size = None;
        self
    }

    /// Set the viewBox padding used when sizing to content
    pub fn with_viewbox_padding(mut self, padding: f64) -> Self {
        self.viewbox_padding = padding;
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }
}
