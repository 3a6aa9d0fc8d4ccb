use serde::{Deserialize, Serialize};

use super::{polygon_fragment, FlagElement};
use crate::canvas::Canvas;
use crate::colors::ColorSequencer;
use crate::validation::ValidationViolation;

const POINTS: usize = 10;
const INNER_RATIO: f64 = 0.4;
const STEP_DEGREES: f64 = 36.0;

/// Five-pointed star. `angle` 0 puts the first tip straight up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    #[serde(default)]
    pub angle: f64,
}

impl Star {
    pub fn new(center_x: f64, center_y: f64, radius: f64, angle: f64) -> Self {
        Self {
            center_x,
            center_y,
            radius,
            angle,
        }
    }

    /// Ten vertices alternating between the outer and inner radius.
    pub fn vertices(&self) -> Vec<(f64, f64)> {
        let inner = self.radius * INNER_RATIO;
        (0..POINTS)
            .map(|i| {
                let r = if i % 2 == 0 { self.radius } else { inner };
                let theta = (self.angle + i as f64 * STEP_DEGREES - 90.0).to_radians();
                (
                    self.center_x + r * theta.cos(),
                    self.center_y + r * theta.sin(),
                )
            })
            .collect()
    }
}

impl FlagElement for Star {
    fn render(&self, _canvas: Canvas, colors: &mut ColorSequencer) -> Vec<String> {
        let points = self
            .vertices()
            .iter()
            .map(|(x, y)| format!("{:.2},{:.2}", x, y))
            .collect::<Vec<_>>()
            .join(" ");
        vec![polygon_fragment(&points, &colors.next_color())]
    }

    fn describe(&self, _canvas: Canvas) -> String {
        format!(
            "star at ({},{}) radius {} angle {}°",
            self.center_x, self.center_y, self.radius, self.angle
        )
    }

    fn validate(&self, canvas: Canvas) -> Option<ValidationViolation> {
        if self.radius.is_nan() || self.radius < 1.0 {
            return Some(ValidationViolation::error("Star radius must be >= 1"));
        }
        if !canvas.contains_f64(self.center_x, self.center_y) {
            return Some(ValidationViolation::error(
                "Star center point must be within SVG bounds",
            ));
        }
        None
    }
}
