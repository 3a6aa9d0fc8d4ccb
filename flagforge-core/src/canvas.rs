//! Canvas - the fixed coordinate space every element is drawn into.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CanvasError {
    #[error("Canvas dimensions must be > 0, got {0}x{1}")]
    Empty(u32, u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        if width == 0 || height == 0 {
            return Err(CanvasError::Empty(width, height));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i64 {
        i64::from(self.width)
    }

    pub fn height(&self) -> i64 {
        i64::from(self.height)
    }

    /// Half-open bounds check: `0 <= x < width` and `0 <= y < height`.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        (0..self.width()).contains(&x) && (0..self.height()).contains(&y)
    }

    /// Same as [`Canvas::contains`] for fractional centers (stars, moons).
    pub fn contains_f64(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && x < self.width() as f64 && y >= 0.0 && y < self.height() as f64
    }

    /// Closed bounds check; points on the far edges are accepted.
    pub fn contains_inclusive(&self, x: i64, y: i64) -> bool {
        (0..=self.width()).contains(&x) && (0..=self.height()).contains(&y)
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(Canvas::new(0, 10), Err(CanvasError::Empty(0, 10)));
        assert_eq!(Canvas::new(10, 0), Err(CanvasError::Empty(10, 0)));
    }

    #[test]
    fn test_bounds_policies() {
        let canvas = Canvas::new(30, 20).unwrap();
        assert!(canvas.contains(0, 0));
        assert!(canvas.contains(29, 19));
        assert!(!canvas.contains(30, 10));
        assert!(!canvas.contains(-1, 10));
        assert!(canvas.contains_inclusive(30, 20));
        assert!(!canvas.contains_inclusive(31, 20));
        assert!(!canvas.contains_f64(29.5, 20.0));
    }

    #[test]
    fn test_display() {
        let canvas = Canvas::new(18, 15).unwrap();
        assert_eq!(canvas.to_string(), "18x15");
        assert_eq!(canvas.view_box(), "0 0 18 15");
    }
}
