//! Color System - Palette Sequencing
//!
//! Colors are handed out in paint order. Once the supplied palette runs
//! out, fallback colors come from the sequencer's random source.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

/// A lowercase `#rrggbb` color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let digits = input
            .strip_prefix('#')
            .ok_or_else(|| ColorError::InvalidColor(input.to_string()))?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidColor(input.to_string()));
        }
        Ok(Self(format!("#{}", digits.to_ascii_lowercase())))
    }

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{:02x}{:02x}{:02x}", r, g, b))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hands out palette colors in request order, then random ones.
///
/// The cursor only moves forward during a render pass; [`ColorSequencer::reset`]
/// rewinds it so the palette can be replayed.
pub struct ColorSequencer {
    colors: Vec<HexColor>,
    cursor: usize,
    rng: Box<dyn RngCore>,
}

impl ColorSequencer {
    /// Sequencer whose fallback colors come from the thread-local RNG.
    pub fn new(colors: Vec<HexColor>) -> Self {
        Self::with_rng(colors, Box::new(rand::rng()))
    }

    /// Sequencer with reproducible fallback colors.
    pub fn seeded(colors: Vec<HexColor>, seed: u64) -> Self {
        Self::with_rng(colors, Box::new(StdRng::seed_from_u64(seed)))
    }

    pub fn with_rng(colors: Vec<HexColor>, rng: Box<dyn RngCore>) -> Self {
        Self {
            colors,
            cursor: 0,
            rng,
        }
    }

    /// Next palette color, or a random one once the palette is exhausted.
    pub fn next_color(&mut self) -> HexColor {
        match self.colors.get(self.cursor) {
            Some(color) => {
                self.cursor += 1;
                color.clone()
            }
            None => self.random_color(),
        }
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Palette entries not yet handed out.
    pub fn remaining(&self) -> usize {
        self.colors.len() - self.cursor
    }

    fn random_color(&mut self) -> HexColor {
        let r: u8 = self.rng.random();
        let g: u8 = self.rng.random();
        let b: u8 = self.rng.random();
        HexColor::from_rgb(r, g, b)
    }
}

impl fmt::Debug for ColorSequencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorSequencer")
            .field("colors", &self.colors)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}
