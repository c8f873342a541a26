//! Arrangement strategies for tiled clients.
mod monocle;
mod tile;

use crate::models::Rect;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

pub const TILE: &str = "Tile";
pub const MONOCLE: &str = "Monocle";
pub const FLOATING: &str = "Floating";

#[derive(Debug, Error)]
#[error("Could not parse layout: {0}")]
pub struct ParseLayoutError(String);

/// How a layout places the tiled clients of a monitor.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement {
    /// A master column on the left, the remaining clients stacked on the right.
    Tile,
    /// Every client fills the usable area.
    Monocle,
    /// No automatic placement.
    Floating,
}

impl Arrangement {
    /// Rectangles for `count` clients in tiling order, or `None` when the arrangement leaves
    /// placement to the user.
    #[must_use]
    pub fn apply(self, area: Rect, mfact: f64, nmaster: u32, count: usize) -> Option<Vec<Rect>> {
        match self {
            Self::Tile => Some(tile::update(area, mfact, nmaster, count)),
            Self::Monocle => Some(monocle::update(area, count)),
            Self::Floating => None,
        }
    }
}

impl FromStr for Arrangement {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            TILE => Ok(Self::Tile),
            MONOCLE => Ok(Self::Monocle),
            FLOATING => Ok(Self::Floating),
            _ => Err(ParseLayoutError(s.to_string())),
        }
    }
}

/// A named arrangement, the symbol is what status bars display.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub symbol: String,
    pub arrangement: Arrangement,
}

impl Layout {
    #[must_use]
    pub fn new(symbol: impl Into<String>, arrangement: Arrangement) -> Self {
        Self {
            symbol: symbol.into(),
            arrangement,
        }
    }

    /// Whether this layout places clients at all.
    #[must_use]
    pub fn arranges(&self) -> bool {
        self.arrangement != Arrangement::Floating
    }

    /// The layouts offered when nothing is configured, the first one is the default.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("[]=", Arrangement::Tile),
            Self::new("><>", Arrangement::Floating),
            Self::new("[M]", Arrangement::Monocle),
        ]
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new("[]=", Arrangement::Tile)
    }
}
