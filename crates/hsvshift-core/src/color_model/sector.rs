//! Hue sectors and the HSV → RGB channel table.
//!
//! The hue circle is split into six 60° sectors. Inside a sector each RGB
//! channel is one of four quantities derived from `(S, V, f)`, where `f` is
//! the fractional position inside the sector:
//!
//! ```text
//! p = V × (1 − S)
//! q = V × (1 − S × f)
//! t = V × (1 − S × (1 − f))
//! ```
//!
//! | sector | hue range  | (R, G, B) |
//! |--------|------------|-----------|
//! | 0      | [0, 60)    | (V, t, p) |
//! | 1      | [60, 120)  | (q, V, p) |
//! | 2      | [120, 180) | (p, V, t) |
//! | 3      | [180, 240) | (p, q, V) |
//! | 4      | [240, 300) | (t, p, V) |
//! | 5      | [300, 360) | (V, p, q) |
//!
//! With `S = 0` all four quantities equal `V`, so achromatic pixels come out
//! gray in every sector.

use crate::color_model::adjust::wrap_degrees;

/// One of the four per-pixel quantities a channel can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// `V` itself.
    Value = 0,
    /// `p`, the channel floor.
    Floor = 1,
    /// `q`, falling across the sector.
    Falling = 2,
    /// `t`, rising across the sector.
    Rising = 3,
}

impl Component {
    /// Pick this component out of `[V, p, q, t]`.
    #[inline]
    pub fn pick<T: Copy>(self, components: &[T; 4]) -> T {
        components[self as usize]
    }
}

/// A 60° hue sector, named by the hues at its two edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sector {
    RedYellow = 0,
    YellowGreen = 1,
    GreenCyan = 2,
    CyanBlue = 3,
    BlueMagenta = 4,
    MagentaRed = 5,
}

impl Sector {
    /// All sectors in hue order.
    pub const ALL: [Sector; 6] = [
        Sector::RedYellow,
        Sector::YellowGreen,
        Sector::GreenCyan,
        Sector::CyanBlue,
        Sector::BlueMagenta,
        Sector::MagentaRed,
    ];

    /// Sector index for a hue already scaled to sextants (`hue / 60`).
    ///
    /// Returned as `f32` so the vector path can compare whole planes against
    /// it; clamped to 5 so a rounding artifact at 6.0 stays in the last sector.
    #[inline]
    pub fn index_of_sextant(sextant: f32) -> f32 {
        sextant.floor().min(5.0)
    }

    /// Sextant position `hue / 60` for any hue, wrapped into `[0, 6)`.
    #[inline]
    pub fn sextant(hue_degrees: f32) -> f32 {
        wrap_degrees(hue_degrees) / 60.0
    }

    /// Locate `hue_degrees` on the hue circle: its sector and the fractional
    /// position `f ∈ [0, 1)` inside it. Hues of 360° and 0° land identically.
    pub fn locate(hue_degrees: f32) -> (Self, f32) {
        let sextant = Self::sextant(hue_degrees);
        let index = Self::index_of_sextant(sextant);
        (Self::from_index(index as usize), sextant - index)
    }

    /// Sector for an index; anything past 5 folds into the last sector.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(5)]
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Which component feeds the R, G and B channels in this sector.
    pub const fn layout(self) -> [Component; 3] {
        use Component::{Falling as Q, Floor as P, Rising as T, Value as V};
        match self {
            Self::RedYellow => [V, T, P],
            Self::YellowGreen => [Q, V, P],
            Self::GreenCyan => [P, V, T],
            Self::CyanBlue => [P, Q, V],
            Self::BlueMagenta => [T, P, V],
            Self::MagentaRed => [V, P, Q],
        }
    }
}

/// `[V, p, q, t]` for one pixel.
#[inline]
pub fn components(saturation: f32, value: f32, fraction: f32) -> [f32; 4] {
    [
        value,
        value * (1.0 - saturation),
        value * (1.0 - saturation * fraction),
        value * (1.0 - saturation * (1.0 - fraction)),
    ]
}
