//! Kernel records: one decorative makhana placement each.

use serde::{Deserialize, Serialize};

use crate::zone::{MIDLINE, PLANE_MAX, PLANE_MIN};

/// Depth layer of a kernel.
///
/// Drives stacking order and how fast the kernel floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    #[serde(rename = "bg")]
    Background,
    #[serde(rename = "mg")]
    Midground,
    #[serde(rename = "fg")]
    Foreground,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Background, Layer::Midground, Layer::Foreground];

    /// Layer for the `index`-th kernel of a half.
    ///
    /// Multiples of three win over even indices, so index 0 and 6 are
    /// foreground while 2, 4, 8 are midground.
    pub fn for_index(index: usize) -> Self {
        if index % 3 == 0 {
            Layer::Foreground
        } else if index % 2 == 0 {
            Layer::Midground
        } else {
            Layer::Background
        }
    }

    pub fn z_index(&self) -> u32 {
        match self {
            Layer::Background => 0,
            Layer::Midground => 10,
            Layer::Foreground => 20,
        }
    }

    /// Length of one float cycle, in seconds.
    pub fn period_secs(&self) -> f64 {
        match self {
            Layer::Background => 14.0,
            Layer::Midground => 10.0,
            Layer::Foreground => 7.0,
        }
    }

    pub fn casts_shadow(&self) -> bool {
        matches!(self, Layer::Foreground)
    }

    /// Short label, also used as the serialized name and CSS modifier.
    pub fn as_label(&self) -> &'static str {
        match self {
            Layer::Background => "bg",
            Layer::Midground => "mg",
            Layer::Foreground => "fg",
        }
    }
}

/// Which side of the midline a kernel was generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Half {
    Left,
    Right,
}

impl Half {
    /// Half a given x coordinate falls into.
    pub fn of(x: f64) -> Self {
        if x < MIDLINE { Half::Left } else { Half::Right }
    }
}

/// A single decorative marker.
///
/// `x`/`y` are percentages of the hero, `size` is a pixel diameter and
/// `rot` a rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Kernel {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub rot: f64,
    pub layer: Layer,
}

impl Kernel {
    /// False when safe-zone repulsion pushed the kernel past the top or
    /// bottom edge. Such kernels are kept; the page clips them.
    pub fn is_on_plane(&self) -> bool {
        (PLANE_MIN..=PLANE_MAX).contains(&self.x) && (PLANE_MIN..=PLANE_MAX).contains(&self.y)
    }

    pub fn half(&self) -> Half {
        Half::of(self.x)
    }
}
