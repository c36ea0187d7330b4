//! SVG renderer for generating output from layout documents
//!
//! This module takes a LayoutDocument and produces an SVG string,
//! one millimeter of sheet per user unit.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::render_svg;
