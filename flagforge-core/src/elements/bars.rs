use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::{rect_fragment, FlagElement};
use crate::canvas::Canvas;
use crate::colors::ColorSequencer;
use crate::validation::ValidationViolation;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    fn capitalized(self) -> &'static str {
        match self {
            Orientation::Horizontal => "Horizontal",
            Orientation::Vertical => "Vertical",
        }
    }

    /// Length of the canvas along the split axis.
    fn extent(self, canvas: Canvas) -> i64 {
        match self {
            Orientation::Horizontal => canvas.height(),
            Orientation::Vertical => canvas.width(),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("horizontal"),
            Orientation::Vertical => f.write_str("vertical"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BarLayout {
    /// `count` bars of (near) equal size.
    Equal { count: u32 },
    /// One entry per bar, summing to the canvas extent.
    Explicit { sizes: Vec<i64> },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BarLayoutError {
    #[error("bars take either `count` or `sizes`, not both")]
    Ambiguous,

    #[error("bars need a `count` or a `sizes` list")]
    Missing,
}

/// Stripes across the whole canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BarsPayload", into = "BarsPayload")]
pub struct Bars {
    pub orientation: Orientation,
    pub layout: BarLayout,
}

/// Wire form of [`Bars`]: exactly one of `count` / `sizes`.
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct BarsPayload {
    orientation: Orientation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sizes: Option<Vec<i64>>,
}

impl TryFrom<BarsPayload> for Bars {
    type Error = BarLayoutError;

    fn try_from(payload: BarsPayload) -> Result<Self, Self::Error> {
        let layout = match (payload.count, payload.sizes) {
            (Some(count), None) => BarLayout::Equal { count },
            (None, Some(sizes)) => BarLayout::Explicit { sizes },
            (Some(_), Some(_)) => return Err(BarLayoutError::Ambiguous),
            (None, None) => return Err(BarLayoutError::Missing),
        };
        Ok(Self {
            orientation: payload.orientation,
            layout,
        })
    }
}

impl From<Bars> for BarsPayload {
    fn from(bars: Bars) -> Self {
        let (count, sizes) = match bars.layout {
            BarLayout::Equal { count } => (Some(count), None),
            BarLayout::Explicit { sizes } => (None, Some(sizes)),
        };
        Self {
            orientation: bars.orientation,
            count,
            sizes,
        }
    }
}

impl Bars {
    pub fn equal(orientation: Orientation, count: u32) -> Self {
        Self {
            orientation,
            layout: BarLayout::Equal { count },
        }
    }

    pub fn explicit(orientation: Orientation, sizes: Vec<i64>) -> Self {
        Self {
            orientation,
            layout: BarLayout::Explicit { sizes },
        }
    }

    /// `(offset, size)` of each bar along the split axis.
    ///
    /// Equal division hands the remainder out one unit at a time to the
    /// leading bars, so the spans stay contiguous and cover the extent.
    pub fn spans(&self, canvas: Canvas) -> Vec<(i64, i64)> {
        match &self.layout {
            BarLayout::Explicit { sizes } => {
                let mut offset = 0i64;
                sizes
                    .iter()
                    .map(|&size| {
                        let span = (offset, size);
                        offset = offset.saturating_add(size);
                        span
                    })
                    .collect()
            }
            BarLayout::Equal { count } => {
                let count = i64::from(*count);
                if count == 0 {
                    return vec![];
                }
                let extent = self.orientation.extent(canvas);
                let base = extent / count;
                let remainder = extent % count;
                (0..count)
                    .map(|i| {
                        let size = base + i64::from(i < remainder);
                        (i * base + i.min(remainder), size)
                    })
                    .collect()
            }
        }
    }
}

impl FlagElement for Bars {
    fn render(&self, canvas: Canvas, colors: &mut ColorSequencer) -> Vec<String> {
        self.spans(canvas)
            .into_iter()
            .map(|(offset, size)| {
                let fill = colors.next_color();
                match self.orientation {
                    Orientation::Horizontal => rect_fragment(0, offset, canvas.width(), size, &fill),
                    Orientation::Vertical => rect_fragment(offset, 0, size, canvas.height(), &fill),
                }
            })
            .collect()
    }

    fn describe(&self, canvas: Canvas) -> String {
        match (&self.layout, self.orientation) {
            (BarLayout::Explicit { sizes }, orientation) => {
                let list = sizes.iter().map(i64::to_string).collect::<Vec<_>>().join(",");
                let label = match orientation {
                    Orientation::Horizontal => "heights",
                    Orientation::Vertical => "widths",
                };
                format!("{} {} bars ({}: {})", sizes.len(), orientation, label, list)
            }
            (BarLayout::Equal { count }, orientation) => {
                let each = orientation
                    .extent(canvas)
                    .checked_div(i64::from(*count))
                    .unwrap_or(0);
                let unit = match orientation {
                    Orientation::Horizontal => "units tall each",
                    Orientation::Vertical => "units wide each",
                };
                format!("{} {} bars ({} {})", count, orientation, each, unit)
            }
        }
    }

    fn validate(&self, canvas: Canvas) -> Option<ValidationViolation> {
        let name = self.orientation.capitalized();
        let extent = self.orientation.extent(canvas);
        match &self.layout {
            BarLayout::Explicit { sizes } => {
                if sizes.len() < 2 {
                    return Some(ValidationViolation::error(format!(
                        "{} bars must have >= 2 widths specified",
                        name
                    )));
                }
                match sizes.iter().try_fold(0i64, |acc, &size| acc.checked_add(size)) {
                    Some(total) if total == extent => {}
                    Some(total) => {
                        return Some(ValidationViolation::error(format!(
                            "{} bar widths sum to {}, but flag dimension is {}",
                            name, total, extent
                        )));
                    }
                    None => {
                        return Some(ValidationViolation::error(format!(
                            "{} bar widths overflow, but flag dimension is {}",
                            name, extent
                        )));
                    }
                }
                if sizes.iter().any(|&size| size <= 0) {
                    return Some(ValidationViolation::error(format!(
                        "{} bar widths must be > 0",
                        name
                    )));
                }
                None
            }
            BarLayout::Equal { count } => {
                if *count < 2 {
                    return Some(ValidationViolation::error(format!(
                        "{} bars must be >= 2",
                        name
                    )));
                }
                if extent % i64::from(*count) != 0 {
                    let axis = match self.orientation {
                        Orientation::Horizontal => "Height",
                        Orientation::Vertical => "Width",
                    };
                    return Some(ValidationViolation::warning(format!(
                        "{} {} doesn't divide evenly by {} bars.",
                        axis, extent, count
                    )));
                }
                None
            }
        }
    }
}
