//! Flag Elements - Parametric Primitives
//!
//! Every primitive renders its own markup fragments, describes itself,
//! and checks itself against the canvas. Elements are immutable value
//! objects; the canvas is passed in rather than stored.

mod bars;
mod cross;
mod moon;
mod shapes;
mod side;
mod star;

pub use bars::{BarLayout, BarLayoutError, Bars, Orientation};
pub use cross::Cross;
pub use moon::Moon;
pub use shapes::{Background, Canton, Circle, Rect, Triangle};
pub use side::{Side, SidePosition, SideShape};
pub use star::Star;

use crate::canvas::Canvas;
use crate::colors::{ColorSequencer, HexColor};
use crate::validation::ValidationViolation;

/// Marker class carried by every generated primitive.
pub const COMPONENT_CLASS: &str = "flag-component";

pub trait FlagElement: std::fmt::Debug {
    /// Markup fragments in paint order. Draws one color per primitive.
    fn render(&self, canvas: Canvas, colors: &mut ColorSequencer) -> Vec<String>;

    fn describe(&self, canvas: Canvas) -> String;

    /// `None` when the element fits the canvas. A warning-severity
    /// finding never blocks rendering.
    fn validate(&self, canvas: Canvas) -> Option<ValidationViolation>;
}

pub(crate) fn rect_fragment(x: i64, y: i64, width: i64, height: i64, fill: &HexColor) -> String {
    format!(
        r#"    <rect class="{}" x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
        COMPONENT_CLASS, x, y, width, height, fill
    )
}

pub(crate) fn polygon_fragment(points: &str, fill: &HexColor) -> String {
    format!(
        r#"    <polygon class="{}" points="{}" fill="{}"/>"#,
        COMPONENT_CLASS, points, fill
    )
}

pub(crate) fn points_attr(points: &[(i64, i64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{},{}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}
