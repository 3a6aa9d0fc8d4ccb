//! Plain primitives: background, canton, circle, rectangle, triangle.

use serde::{Deserialize, Serialize};

use super::{points_attr, polygon_fragment, rect_fragment, FlagElement, COMPONENT_CLASS};
use crate::canvas::Canvas;
use crate::colors::ColorSequencer;
use crate::validation::ValidationViolation;

/// Full-canvas field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Background;

impl FlagElement for Background {
    fn render(&self, canvas: Canvas, colors: &mut ColorSequencer) -> Vec<String> {
        vec![rect_fragment(
            0,
            0,
            canvas.width(),
            canvas.height(),
            &colors.next_color(),
        )]
    }

    fn describe(&self, _canvas: Canvas) -> String {
        "background".to_string()
    }

    fn validate(&self, _canvas: Canvas) -> Option<ValidationViolation> {
        None
    }
}

/// Upper-hoist rectangle anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canton {
    pub width: i64,
    pub height: i64,
}

impl Canton {
    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }
}

impl FlagElement for Canton {
    fn render(&self, _canvas: Canvas, colors: &mut ColorSequencer) -> Vec<String> {
        vec![rect_fragment(0, 0, self.width, self.height, &colors.next_color())]
    }

    fn describe(&self, _canvas: Canvas) -> String {
        format!("canton ({}x{})", self.width, self.height)
    }

    fn validate(&self, canvas: Canvas) -> Option<ValidationViolation> {
        if self.width < 1 {
            return Some(ValidationViolation::error("Canton width must be >= 1"));
        }
        if self.height < 1 {
            return Some(ValidationViolation::error("Canton height must be >= 1"));
        }
        if self.width >= canvas.width() {
            return Some(ValidationViolation::error(format!(
                "Canton width {} must be less than flag width {}",
                self.width,
                canvas.width()
            )));
        }
        if self.height >= canvas.height() {
            return Some(ValidationViolation::error(format!(
                "Canton height {} must be less than flag height {}",
                self.height,
                canvas.height()
            )));
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Circle {
    pub center_x: i64,
    pub center_y: i64,
    pub radius: i64,
}

impl Circle {
    pub fn new(center_x: i64, center_y: i64, radius: i64) -> Self {
        Self {
            center_x,
            center_y,
            radius,
        }
    }
}

impl FlagElement for Circle {
    fn render(&self, _canvas: Canvas, colors: &mut ColorSequencer) -> Vec<String> {
        vec![format!(
            r#"    <circle class="{}" cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            COMPONENT_CLASS,
            self.center_x,
            self.center_y,
            self.radius,
            colors.next_color()
        )]
    }

    fn describe(&self, _canvas: Canvas) -> String {
        format!(
            "circle at ({},{}) radius {}",
            self.center_x, self.center_y, self.radius
        )
    }

    fn validate(&self, canvas: Canvas) -> Option<ValidationViolation> {
        if self.radius < 1 {
            return Some(ValidationViolation::error("Circle radius must be >= 1"));
        }
        if !canvas.contains(self.center_x, self.center_y) {
            return Some(ValidationViolation::error(
                "Circle center point must be within SVG bounds",
            ));
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl FlagElement for Rect {
    fn render(&self, _canvas: Canvas, colors: &mut ColorSequencer) -> Vec<String> {
        vec![rect_fragment(
            self.x,
            self.y,
            self.width,
            self.height,
            &colors.next_color(),
        )]
    }

    fn describe(&self, _canvas: Canvas) -> String {
        format!(
            "rect {}x{} at ({},{})",
            self.width, self.height, self.x, self.y
        )
    }

    fn validate(&self, canvas: Canvas) -> Option<ValidationViolation> {
        if self.width < 1 || self.height < 1 {
            return Some(ValidationViolation::error(
                "Rectangle width and height must be >= 1",
            ));
        }
        if !canvas.contains(self.x, self.y) {
            return Some(ValidationViolation::error(
                "Rectangle origin must be within SVG bounds",
            ));
        }
        // origin is inside, so the remaining room cannot underflow
        if self.width > canvas.width() - self.x || self.height > canvas.height() - self.y {
            return Some(ValidationViolation::error("Rectangle exceeds flag bounds"));
        }
        None
    }
}

/// Arbitrary triangle. Vertices may sit exactly on the canvas edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triangle {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
    pub x3: i64,
    pub y3: i64,
}

impl Triangle {
    pub fn new(a: (i64, i64), b: (i64, i64), c: (i64, i64)) -> Self {
        Self {
            x1: a.0,
            y1: a.1,
            x2: b.0,
            y2: b.1,
            x3: c.0,
            y3: c.1,
        }
    }

    pub fn vertices(&self) -> [(i64, i64); 3] {
        [(self.x1, self.y1), (self.x2, self.y2), (self.x3, self.y3)]
    }
}

impl FlagElement for Triangle {
    fn render(&self, _canvas: Canvas, colors: &mut ColorSequencer) -> Vec<String> {
        vec![polygon_fragment(
            &points_attr(&self.vertices()),
            &colors.next_color(),
        )]
    }

    fn describe(&self, _canvas: Canvas) -> String {
        format!(
            "triangle ({},{})-({},{})-({},{})",
            self.x1, self.y1, self.x2, self.y2, self.x3, self.y3
        )
    }

    fn validate(&self, canvas: Canvas) -> Option<ValidationViolation> {
        if self
            .vertices()
            .iter()
            .any(|&(x, y)| !canvas.contains_inclusive(x, y))
        {
            return Some(ValidationViolation::error(
                "Triangle points must be within SVG bounds",
            ));
        }
        None
    }
}
