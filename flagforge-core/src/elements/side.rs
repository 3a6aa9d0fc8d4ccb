use serde::{Deserialize, Serialize};
use std::fmt;

use super::{points_attr, polygon_fragment, rect_fragment, FlagElement};
use crate::canvas::Canvas;
use crate::colors::ColorSequencer;
use crate::validation::ValidationViolation;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SidePosition {
    #[default]
    Left,
    Right,
}

impl fmt::Display for SidePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SidePosition::Left => f.write_str("left"),
            SidePosition::Right => f.write_str("right"),
        }
    }
}

/// What a side feature turns into for a given canvas height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideShape {
    Bar,
    Triangle,
    Trapezoid,
}

impl fmt::Display for SideShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SideShape::Bar => f.write_str("bar"),
            SideShape::Triangle => f.write_str("triangle"),
            SideShape::Trapezoid => f.write_str("trapezoid"),
        }
    }
}

/// Hoist-side (or fly-side) wedge: a bar, triangle or trapezoid.
///
/// `right_edge_length` is the length of the inner edge, centered
/// vertically. Full height gives a bar, zero gives a triangle whose
/// apex sits at the vertical center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Side {
    pub width: i64,
    pub right_edge_length: i64,
    #[serde(default)]
    pub position: SidePosition,
}

impl Side {
    pub fn new(width: i64, right_edge_length: i64, position: SidePosition) -> Self {
        Self {
            width,
            right_edge_length,
            position,
        }
    }

    pub fn shape(&self, canvas: Canvas) -> SideShape {
        if self.right_edge_length == canvas.height() {
            SideShape::Bar
        } else if self.right_edge_length == 0 {
            SideShape::Triangle
        } else {
            SideShape::Trapezoid
        }
    }

    /// x of the canvas edge the side is anchored to, and x of its inner edge.
    fn edges(&self, canvas: Canvas) -> (i64, i64) {
        match self.position {
            SidePosition::Left => (0, self.width),
            SidePosition::Right => (canvas.width(), canvas.width().saturating_sub(self.width)),
        }
    }
}

impl FlagElement for Side {
    fn render(&self, canvas: Canvas, colors: &mut ColorSequencer) -> Vec<String> {
        let fill = colors.next_color();
        let height = canvas.height();
        let (outer, inner) = self.edges(canvas);

        let fragment = match self.shape(canvas) {
            SideShape::Bar => rect_fragment(outer.min(inner), 0, self.width, height, &fill),
            SideShape::Triangle => {
                let apex = (inner, height / 2);
                polygon_fragment(&points_attr(&[(outer, 0), apex, (outer, height)]), &fill)
            }
            SideShape::Trapezoid => {
                let top = height.saturating_sub(self.right_edge_length) / 2;
                let bottom = top.saturating_add(self.right_edge_length);
                polygon_fragment(
                    &points_attr(&[(outer, 0), (inner, top), (inner, bottom), (outer, height)]),
                    &fill,
                )
            }
        };
        vec![fragment]
    }

    fn describe(&self, canvas: Canvas) -> String {
        format!(
            "{} {} (width {}, right edge {})",
            self.position,
            self.shape(canvas),
            self.width,
            self.right_edge_length
        )
    }

    fn validate(&self, canvas: Canvas) -> Option<ValidationViolation> {
        if self.width < 1 {
            return Some(ValidationViolation::error("Side width must be >= 1"));
        }
        if self.width >= canvas.width() {
            return Some(ValidationViolation::error(format!(
                "Side width {} must be less than flag width {}",
                self.width,
                canvas.width()
            )));
        }
        if self.right_edge_length < 0 {
            return Some(ValidationViolation::error(
                "Side right edge length must be >= 0",
            ));
        }
        if self.right_edge_length > canvas.height() {
            return Some(ValidationViolation::error(format!(
                "Side right edge length {} must be <= flag height {}",
                self.right_edge_length,
                canvas.height()
            )));
        }
        None
    }
}
