//! Badge colors used when rendering statuses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display color attached to every canonical status and timeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Green,
    Yellow,
    Orange,
    Red,
    Blue,
    #[default]
    Gray,
}

impl BadgeColor {
    /// Returns the color name understood by the rendering layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeColor::Green => "green",
            BadgeColor::Yellow => "yellow",
            BadgeColor::Orange => "orange",
            BadgeColor::Red => "red",
            BadgeColor::Blue => "blue",
            BadgeColor::Gray => "gray",
        }
    }
}

impl fmt::Display for BadgeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
