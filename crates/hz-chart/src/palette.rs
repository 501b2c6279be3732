//! Colors and palettes bound to band layers by position.

use core::fmt;
use core::str::FromStr;

use hz_core::HorizonError;
use serde::{Deserialize, Serialize};

/// An opaque RGB color, written as `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Create a color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Self::rgb(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = HorizonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || HorizonError::InvalidParameter {
            name: "color",
            value: s.to_string(),
            expected: "#RRGGBB hex color",
        };

        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());

        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = HorizonError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Positive layers, lightest (band 0) to darkest.
const DEFAULT_POSITIVE: [Color; 3] = [
    Color::rgb(0x8B, 0xBC, 0xD4),
    Color::rgb(0x2B, 0x7A, 0xBD),
    Color::rgb(0x00, 0x50, 0xA0),
];

/// Negative layers, lightest (band 0) to darkest.
const DEFAULT_NEGATIVE: [Color; 3] = [
    Color::rgb(0xEF, 0x94, 0x83),
    Color::rgb(0xE0, 0x24, 0x21),
    Color::rgb(0xA9, 0x0E, 0x0A),
];

/// Ordered colors, one per band layer.
///
/// Entry `i` colors layer `i` of every band set: the first half the positive layers,
/// the second half the negative ones. There is no other binding than position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorPalette {
    colors: Vec<Color>,
}

impl Default for ColorPalette {
    /// Three blue and three red layers.
    fn default() -> Self {
        Self::graded(3)
    }
}

impl ColorPalette {
    /// Wrap an explicit color list.
    #[must_use]
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Parse a list of `#RRGGBB` strings.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for the first unparsable color.
    pub fn parse<S: AsRef<str>>(colors: &[S]) -> Result<Self, HorizonError> {
        colors
            .iter()
            .map(|c| c.as_ref().parse())
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// Blue/red palette with `2 * bands` entries, light to dark within each sign.
    ///
    /// Three bands give the stock six-color palette exactly.
    #[must_use]
    pub fn graded(bands: usize) -> Self {
        let ramp = |stops: &[Color; 3]| -> Vec<Color> {
            if bands == stops.len() {
                return stops.to_vec();
            }
            (0..bands)
                .map(|k| {
                    let t = if bands > 1 {
                        k as f64 / (bands - 1) as f64
                    } else {
                        0.5
                    };
                    if t <= 0.5 {
                        stops[0].lerp(stops[1], t * 2.0)
                    } else {
                        stops[1].lerp(stops[2], (t - 0.5) * 2.0)
                    }
                })
                .collect()
        };

        let mut colors = ramp(&DEFAULT_POSITIVE);
        colors.extend(ramp(&DEFAULT_NEGATIVE));
        Self { colors }
    }

    /// Number of colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` when the palette holds no colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for layer `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Iterate in layer order.
    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter()
    }

    /// Colors as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }
}
