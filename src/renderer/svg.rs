//! SVG generation from layout documents

use crate::layout::{BoundingBox, LayoutDocument, Primitive, RectPrimitive, TextAnchor, TextPrimitive};

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
            indent: 1,
        }
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a rectangle element
    pub fn add_rect(&mut self, rect: &RectPrimitive) {
        self.elements.push(format!(
            r#"{}<rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            self.indent_str(),
            rect.bounds.x,
            rect.bounds.y,
            rect.bounds.width,
            rect.bounds.height,
            rect.fill,
            rect.stroke,
            rect.stroke_width
        ));
    }

    /// Add a text element
    pub fn add_text(&mut self, text: &TextPrimitive) {
        let anchor = match text.anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };

        self.elements.push(format!(
            r#"{}<text x="{}" y="{}" text-anchor="{}" font-family="{}" font-size="{}" fill="{}">{}</text>"#,
            self.indent_str(),
            text.position.x,
            text.position.y,
            anchor,
            escape_xml(&text.font),
            text.size,
            text.fill,
            escape_xml(&text.text)
        ));
    }

    /// Open a group element
    pub fn start_group(&mut self, id: &str) {
        self.elements
            .push(format!(r#"{}<g id="{}">"#, self.indent_str(), id));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Build the final SVG string
    ///
    /// With a fixed page size the viewBox equals the page, so one viewBox
    /// unit is one millimeter; when sizing to content the viewBox wraps
    /// `content` plus the configured padding.
    pub fn build(self, content: BoundingBox) -> String {
        let viewbox = match self.config.page_size {
            Some((width, height)) => BoundingBox::new(0.0, 0.0, width, height),
            None => {
                let padding = self.config.viewbox_padding;
                BoundingBox::new(
                    content.x - padding,
                    content.y - padding,
                    content.width + 2.0 * padding,
                    content.height + 2.0 * padding,
                )
            }
        };

        let nl = self.newline();
        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}mm" height="{}mm" viewBox="{} {} {} {}">"#,
            viewbox.width, viewbox.height, viewbox.x, viewbox.y, viewbox.width, viewbox.height
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render a LayoutDocument to an SVG string
///
/// Primitives are written in document order, one group per month band, so
/// the engine's emission order is also the SVG paint order.
pub fn render_svg(document: &LayoutDocument, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    for month in &document.months {
        builder.start_group(&format!("month-{:02}", month.month));
        for primitive in &month.primitives {
            match primitive {
                Primitive::Rect(rect) => builder.add_rect(rect),
                Primitive::Text(text) => builder.add_text(text),
            }
        }
        builder.end_group();
    }

    builder.build(document.bounds)
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{MonthLayout, Point};
    use crate::style::{Color, StylePalette};

    fn one_rect_document() -> LayoutDocument {
        let palette = StylePalette::default();
        let mut document = LayoutDocument::new(2015);
        document.months.push(MonthLayout {
            month: 1,
            primitives: vec![Primitive::rect(
                BoundingBox::new(10.0, 10.0, 30.0, 64.0),
                &palette.weekday,
            )],
        });
        document.compute_bounds();
        document
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn test_render_fixed_page() {
        let svg = render_svg(&one_rect_document(), &SvgConfig::default());

        assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(svg.contains(r#"width="1189mm" height="841mm""#));
        assert!(svg.contains(r#"viewBox="0 0 1189 841""#));
        assert!(svg.contains(r#"<g id="month-01">"#));
        assert!(svg.contains(r##"fill="#c8c8c8""##));
        assert!(svg.contains(r#"stroke-width="0.5""#));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_render_fit_to_content() {
        let config = SvgConfig::new().fit_to_content().with_viewbox_padding(5.0);
        let svg = render_svg(&one_rect_document(), &config);

        assert!(svg.contains(r#"viewBox="5 5 40 74""#));
        assert!(svg.contains(r#"width="40mm" height="74mm""#));
    }

    #[test]
    fn test_render_text_attributes() {
        let palette = StylePalette::default();
        let mut document = LayoutDocument::new(2015);
        document.months.push(MonthLayout {
            month: 2,
            primitives: vec![Primitive::text(
                "R&D week",
                Point::new(13.0, 17.0),
                TextAnchor::Start,
                Color::BLACK,
                &palette.event,
            )],
        });
        document.compute_bounds();

        let svg = render_svg(&document, &SvgConfig::default());
        assert!(svg.contains(r#"text-anchor="start""#));
        assert!(svg.contains(r#"font-family="Ubuntu""#));
        assert!(svg.contains(r#"font-size="5""#));
        assert!(svg.contains(">R&amp;D week</text>"));
    }

    #[test]
    fn test_compact_output_has_no_newlines() {
        let config = SvgConfig::new().with_pretty_print(false).with_standalone(false);
        let svg = render_svg(&one_rect_document(), &config);
        assert!(!svg.contains('\n'));
        assert!(svg.starts_with("<svg"));
    }

    #[test]
    fn test_months_render_in_document_order() {
        let palette = StylePalette::default();
        let mut document = LayoutDocument::new(2015);
        for month in 1..=3 {
            document.months.push(MonthLayout {
                month,
                primitives: vec![Primitive::rect(
                    BoundingBox::new(10.0, month as f64 * 64.0, 30.0, 64.0),
                    &palette.weekday,
                )],
            });
        }
        document.compute_bounds();

        let svg = render_svg(&document, &SvgConfig::default());
        let first = svg.find("month-01").unwrap();
        let second = svg.find("month-02").unwrap();
        let third = svg.find("month-03").unwrap();
        assert!(first < second && second < third);
    }
}
