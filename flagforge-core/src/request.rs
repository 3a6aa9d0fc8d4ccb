//! Flag Requests - the structured description of one flag
//!
//! Everything here is already typed: colors are `#rrggbb`, coordinates are
//! numbers. Turning human shorthand into this shape happens upstream.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::canvas::{Canvas, CanvasError};
use crate::colors::{ColorError, ColorSequencer, HexColor};
use crate::composition::Composition;
use crate::elements::{Bars, Canton, Circle, Cross, Moon, Rect, Side, Star, Triangle};

const SOLID_LABEL: &str = "solid rectangle";
const DEFAULT_STEM: &str = "flag";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error(transparent)]
    Canvas(#[from] CanvasError),

    #[error(transparent)]
    Color(#[from] ColorError),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagRequest {
    pub name: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub colors: Vec<String>,
    /// Makes fallback colors reproducible.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub bars: Option<Bars>,
    #[serde(default)]
    pub canton: Option<Canton>,
    #[serde(default)]
    pub sides: Vec<Side>,
    #[serde(default)]
    pub crosses: Vec<Cross>,
    #[serde(default)]
    pub circles: Vec<Circle>,
    #[serde(default)]
    pub rects: Vec<Rect>,
    #[serde(default)]
    pub triangles: Vec<Triangle>,
    #[serde(default)]
    pub stars: Vec<Star>,
    #[serde(default)]
    pub moons: Vec<Moon>,
}

impl FlagRequest {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            ..Self::default()
        }
    }

    pub fn canvas(&self) -> Result<Canvas, CanvasError> {
        Canvas::new(self.width, self.height)
    }

    pub fn palette(&self) -> Result<Vec<HexColor>, ColorError> {
        self.colors.iter().map(|c| HexColor::parse(c)).collect()
    }

    /// Anything drawn on top of the field.
    pub fn has_overlays(&self) -> bool {
        self.canton.is_some()
            || !self.sides.is_empty()
            || !self.crosses.is_empty()
            || !self.circles.is_empty()
            || !self.rects.is_empty()
            || !self.triangles.is_empty()
            || !self.stars.is_empty()
            || !self.moons.is_empty()
    }

    /// Assembles the composition.
    ///
    /// Without bars the field is a plain background, described as a solid
    /// rectangle when nothing else is requested.
    pub fn build(&self) -> Result<Composition, RequestError> {
        let canvas = self.canvas()?;
        let palette = self.palette()?;
        let colors = match self.seed {
            Some(seed) => ColorSequencer::seeded(palette, seed),
            None => ColorSequencer::new(palette),
        };

        let mut flag = Composition::new(canvas, colors);
        match &self.bars {
            Some(bars) => flag.add_bars(bars.clone()),
            None if self.has_overlays() => flag.add_background(),
            None => flag.add_background_labeled(SOLID_LABEL),
        }

        if !self.sides.is_empty() {
            flag.add_sides(self.sides.clone());
        }
        if !self.rects.is_empty() {
            flag.add_rects(self.rects.clone());
        }
        if !self.triangles.is_empty() {
            flag.add_triangles(self.triangles.clone());
        }
        if let Some(canton) = self.canton {
            flag.add_canton(canton);
        }
        if !self.crosses.is_empty() {
            flag.add_crosses(self.crosses.clone());
        }
        if !self.circles.is_empty() {
            flag.add_circles(self.circles.clone());
        }
        if !self.stars.is_empty() {
            flag.add_stars(self.stars.clone());
        }
        if !self.moons.is_empty() {
            flag.add_moons(self.moons.clone());
        }

        Ok(flag)
    }

    /// File name stem: lowercase ASCII letters and digits, every other run
    /// of characters collapsed to a single `-`.
    ///
    /// Separators and dots never survive, so the stem always names a file
    /// directly inside the output directory.
    pub fn file_stem(&self) -> String {
        let mut stem = String::with_capacity(self.name.len());
        for c in self.name.chars() {
            if c.is_ascii_alphanumeric() {
                stem.push(c.to_ascii_lowercase());
            } else if !stem.is_empty() && !stem.ends_with('-') {
                stem.push('-');
            }
        }
        let stem = stem.trim_end_matches('-');
        if stem.is_empty() {
            DEFAULT_STEM.to_string()
        } else {
            stem.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::LayerKind;
    use crate::elements::Orientation;

    #[test]
    fn test_deserialize_full_request() {
        let json = r##"{
            "name": "USA",
            "width": 30,
            "height": 20,
            "colors": ["#B22234", "#ffffff", "#3c3b6e"],
            "bars": {"orientation": "horizontal", "count": 13},
            "canton": {"width": 12, "height": 7},
            "stars": [{"centerX": 6, "centerY": 3, "radius": 2}]
        }"##;
        let request: FlagRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.bars, Some(Bars::equal(Orientation::Horizontal, 13)));
        assert_eq!(request.stars[0].angle, 0.0);

        let flag = request.build().unwrap();
        assert_eq!(
            flag.populated(),
            vec![LayerKind::Bars, LayerKind::Canton, LayerKind::Stars]
        );
        assert_eq!(
            flag.summary(),
            "30x20 13 horizontal bars (1 units tall each) + canton (12x7) + star at (6,3) radius 2 angle 0°"
        );
    }

    #[test]
    fn test_plain_request_is_solid_rectangle() {
        let flag = FlagRequest::new("laos", 18, 15).build().unwrap();
        assert_eq!(flag.summary(), "18x15 solid rectangle");
        assert_eq!(flag.populated(), vec![LayerKind::Background]);
    }

    #[test]
    fn test_overlays_get_background() {
        let mut request = FlagRequest::new("japan", 30, 20);
        request.circles.push(Circle::new(15, 10, 8));
        let flag = request.build().unwrap();
        assert_eq!(flag.describe(), "background + circle at (15,10) radius 8");
    }

    #[test]
    fn test_assembly_order_drives_description() {
        let mut request = FlagRequest::new("mixed", 30, 20);
        request.crosses.push(Cross::new(15, 10, 4));
        request.canton = Some(Canton::new(10, 8));
        request.sides.push(Side::new(5, 20, Default::default()));
        let flag = request.build().unwrap();
        assert_eq!(
            flag.describe(),
            "background + left bar (width 5, right edge 20) + canton (10x8) + cross at (15,10) width 4"
        );
    }

    #[test]
    fn test_invalid_color_rejected() {
        let mut request = FlagRequest::new("bad", 10, 10);
        request.colors = vec!["#ff0000".into(), "blue".into()];
        let err = request.build().unwrap_err();
        assert_eq!(err, RequestError::Color(ColorError::InvalidColor("blue".into())));
        assert_eq!(err.to_string(), "Invalid color: blue");
    }

    #[test]
    fn test_empty_canvas_rejected() {
        let err = FlagRequest::new("empty", 0, 10).build().unwrap_err();
        assert_eq!(err, RequestError::Canvas(CanvasError::Empty(0, 10)));
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(FlagRequest::new("  Papua New  Guinea ", 1, 1).file_stem(), "papua-new-guinea");
        assert_eq!(FlagRequest::new("", 1, 1).file_stem(), "flag");
        assert_eq!(FlagRequest::new("Côte d'Ivoire", 1, 1).file_stem(), "c-te-d-ivoire");
    }

    #[test]
    fn test_file_stem_strips_path_components() {
        let stem = |name: &str| FlagRequest::new(name, 1, 1).file_stem();
        assert_eq!(stem("../escaped"), "escaped");
        assert_eq!(stem("..\\..\\windows"), "windows");
        assert_eq!(stem("/etc/passwd"), "etc-passwd");
        assert_eq!(stem("a/../../b"), "a-b");
        assert_eq!(stem(".."), "flag");
        for name in ["../escaped", "/abs/path", "..", "dir\\file", "x/./y"] {
            let safe = stem(name);
            assert!(
                safe.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "{name:?} -> {safe:?}"
            );
        }
    }
}
