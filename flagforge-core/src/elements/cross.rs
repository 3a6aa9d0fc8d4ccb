use serde::{Deserialize, Serialize};

use super::{points_attr, polygon_fragment, FlagElement};
use crate::canvas::Canvas;
use crate::colors::ColorSequencer;
use crate::validation::ValidationViolation;

/// Plus-shaped cross whose arms run to all four canvas edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cross {
    pub center_x: i64,
    pub center_y: i64,
    pub width: i64,
}

impl Cross {
    pub fn new(center_x: i64, center_y: i64, width: i64) -> Self {
        Self {
            center_x,
            center_y,
            width,
        }
    }

    /// The twelve outline vertices, clockwise from the top of the vertical arm.
    ///
    /// The half width is floored, so an odd `width` yields arms one unit
    /// thinner than requested.
    pub fn outline(&self, canvas: Canvas) -> [(i64, i64); 12] {
        let half = self.width / 2;
        let left = self.center_x.saturating_sub(half);
        let right = self.center_x.saturating_add(half);
        let top = self.center_y.saturating_sub(half);
        let bottom = self.center_y.saturating_add(half);
        let (w, h) = (canvas.width(), canvas.height());
        [
            (left, 0),
            (right, 0),
            (right, top),
            (w, top),
            (w, bottom),
            (right, bottom),
            (right, h),
            (left, h),
            (left, bottom),
            (0, bottom),
            (0, top),
            (left, top),
        ]
    }
}

impl FlagElement for Cross {
    fn render(&self, canvas: Canvas, colors: &mut ColorSequencer) -> Vec<String> {
        let points = points_attr(&self.outline(canvas));
        vec![polygon_fragment(&points, &colors.next_color())]
    }

    fn describe(&self, _canvas: Canvas) -> String {
        format!(
            "cross at ({},{}) width {}",
            self.center_x, self.center_y, self.width
        )
    }

    fn validate(&self, canvas: Canvas) -> Option<ValidationViolation> {
        if self.width < 1 {
            return Some(ValidationViolation::error("Cross width must be >= 1"));
        }
        if !canvas.contains(self.center_x, self.center_y) {
            return Some(ValidationViolation::error(
                "Cross center point must be within SVG bounds",
            ));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::test_support::{attr, canvas, sequencer};

    #[test]
    fn test_outline_spans_canvas() {
        let out = Cross::new(15, 10, 6).render(canvas(30, 20), &mut sequencer(&["#ff0000"]));
        assert_eq!(out.len(), 1);
        assert_eq!(
            attr(&out[0], "points").unwrap(),
            "12,0 18,0 18,7 30,7 30,13 18,13 18,20 12,20 12,13 0,13 0,7 12,7"
        );
        assert_eq!(attr(&out[0], "fill").unwrap(), "#ff0000");
    }

    #[test]
    fn test_odd_width_floors_half() {
        let outline = Cross::new(10, 10, 5).outline(canvas(20, 20));
        // half width 2: arms are 4 units thick
        assert_eq!(outline[0], (8, 0));
        assert_eq!(outline[1], (12, 0));
    }

    #[test]
    fn test_huge_width_saturates() {
        let outline = Cross::new(i64::MAX, 10, i64::MAX).outline(canvas(20, 20));
        assert_eq!(outline[1], (i64::MAX, 0));
        assert_eq!(outline[3], (20, 10 - i64::MAX / 2));
    }

    #[test]
    fn test_center_must_be_strictly_inside() {
        let c = canvas(30, 20);
        assert_eq!(Cross::new(0, 0, 2).validate(c), None);
        assert_eq!(Cross::new(29, 19, 2).validate(c), None);
        for (x, y) in [(30, 10), (10, 20), (-1, 5)] {
            let finding = Cross::new(x, y, 2).validate(c).unwrap();
            assert_eq!(finding.message, "Cross center point must be within SVG bounds");
        }
        assert_eq!(
            Cross::new(10, 10, 0).validate(c).unwrap().message,
            "Cross width must be >= 1"
        );
    }
}
