//! Core types for the layout engine

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::style::{Color, Style};

/// A 2D point, in millimeters from the sheet's top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A bounding box representing the spatial extent of a primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a zero-sized bounding box at the origin
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Compute the union of two bounding boxes (smallest box containing both)
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        BoundingBox::new(x, y, right - x, bottom - y)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::zero()
    }
}

/// Text anchor position for labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// A filled, stroked rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct RectPrimitive {
    pub bounds: BoundingBox,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
}

/// A run of text anchored at a baseline point
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub position: Point,
    pub anchor: TextAnchor,
    pub fill: Color,
    pub font: String,
    /// Text size in millimeters.
    pub size: f64,
}

/// A single drawing instruction.
///
/// Primitives carry fully resolved colors and sizes; a rendering backend
/// only translates them into its own format. Within a month, later
/// primitives paint over earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect(RectPrimitive),
    Text(TextPrimitive),
}

impl Primitive {
    /// A rectangle filled and stroked per `style`.
    pub fn rect(bounds: BoundingBox, style: &Style) -> Primitive {
        Primitive::Rect(RectPrimitive {
            bounds,
            fill: style.background,
            stroke: style.stroke,
            stroke_width: style.stroke_width,
        })
    }

    /// Text in `style`'s font and size, filled with an explicit color.
    ///
    /// The fill is separate from the style because labels on bright bars
    /// use the contrast color rather than the style's foreground.
    pub fn text(
        text: impl Into<String>,
        position: Point,
        anchor: TextAnchor,
        fill: Color,
        style: &Style,
    ) -> Primitive {
        Primitive::Text(TextPrimitive {
            text: text.into(),
            position,
            anchor,
            fill,
            font: style.font.clone(),
            size: style.text_size,
        })
    }
}

/// The primitives for one month band, in paint order
#[derive(Debug, Clone, PartialEq)]
pub struct MonthLayout {
    /// 1-based month number.
    pub month: u32,
    pub primitives: Vec<Primitive>,
}

/// The complete result of a layout run
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutDocument {
    pub year: i32,
    /// One band per month, January first.
    pub months: Vec<MonthLayout>,
    /// Bounding box containing all primitives
    pub bounds: BoundingBox,
}

impl LayoutDocument {
    /// Create an empty document for `year`
    pub fn new(year: i32) -> Self {
        Self {
            year,
            months: vec![],
            bounds: BoundingBox::zero(),
        }
    }

    /// All primitives in paint order, months top to bottom.
    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.months.iter().flat_map(|month| month.primitives.iter())
    }

    /// Compute the bounding box that contains all primitives
    pub fn compute_bounds(&mut self) {
        let mut bounds: Option<BoundingBox> = None;
        for primitive in self.primitives() {
            let extent = match primitive {
                Primitive::Rect(rect) => rect.bounds,
                Primitive::Text(text) => estimate_text_bounds(text),
            };
            bounds = Some(match bounds {
                Some(current) => current.union(&extent),
                None => extent,
            });
        }
        self.bounds = bounds.unwrap_or_else(BoundingBox::zero);
    }
}

/// Estimate the extent of a text primitive, accounting for its anchor.
///
/// Width is approximated at 0.6 em per character; the baseline sits at the
/// position point, so the box extends one text size upward.
fn estimate_text_bounds(text: &TextPrimitive) -> BoundingBox {
    let width = text.text.chars().count() as f64 * text.size * 0.6;
    let left = match text.anchor {
        TextAnchor::Start => text.position.x,
        TextAnchor::Middle => text.position.x - width / 2.0,
        TextAnchor::End => text.position.x - width,
    };
    BoundingBox::new(left, text.position.y - text.size, width, text.size)
}

/// Lane bookkeeping for one day cell during slot assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Resolved background style for the cell.
    pub style: Style,
    /// Lanes still open on this day, 1-based.
    pub free: BTreeSet<u32>,
}

impl DayCell {
    /// A cell with all `capacity` lanes free.
    pub fn new(date: NaiveDate, style: Style, capacity: u32) -> Self {
        Self {
            date,
            style,
            free: (1..=capacity).collect(),
        }
    }
}
