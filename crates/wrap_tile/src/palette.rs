//! Colors, palettes and per-pass role assignment.
//!
//! A [`Palette`] is shuffled once per generation pass and colors are popped off it without
//! replacement: first the background, then the dot grid, then one color per active
//! [`ShapeFamily`]. No two roles ever share a color within a pass.
use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::error::{Error, Result};
use crate::shape::ShapeFamily;

/// Opaque sRGB color.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `RRGGBB`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(Error::UnknownOption {
                option: "color",
                value: hex.to_owned(),
            });
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| Error::UnknownOption {
                option: "color",
                value: hex.to_owned(),
            })
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Color::from_hex(s)
    }
}

/// Dark gray used for drop shadows and for the outline of filled shapes.
pub const SHADOW_COLOR: Color = Color::rgb(0x44, 0x44, 0x44);

/// Roles that always take a color, independent of the active families.
pub const FIXED_ROLE_COUNT: usize = 2;

const VIBRANT: [Color; 12] = [
    Color::rgb(0xFF, 0x6E, 0xC7), // neon pink
    Color::rgb(0x70, 0xA1, 0xFF), // sky blue
    Color::rgb(0xA2, 0x9B, 0xFE), // lavender
    Color::rgb(0xFF, 0xE6, 0x6D), // lemon yellow
    Color::rgb(0x1A, 0xBC, 0x9C), // turquoise
    Color::rgb(0xFF, 0x3C, 0xAC), // hot pink
    Color::rgb(0xFF, 0xF2, 0x00), // bright yellow
    Color::rgb(0xA0, 0xE7, 0xE5), // aqua
    Color::rgb(0xFF, 0x9F, 0x43), // tangerine
    Color::rgb(0x7B, 0xED, 0x9F), // mint
    Color::rgb(0xFD, 0xA7, 0xDF), // orchid
    Color::rgb(0x54, 0xA0, 0xFF), // azure
];

/// Ordered set of distinct colors.
///
/// Deserialization goes through [`Palette::new`], so duplicates are rejected there too.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Color>", into = "Vec<Color>"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::vibrant()
    }
}

impl Palette {
    /// Create a palette, rejecting duplicate colors.
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        for (i, c) in colors.iter().enumerate() {
            if colors[..i].contains(c) {
                return Err(Error::InvalidConfig(format!(
                    "palette contains duplicate color {c}"
                )));
            }
        }
        Ok(Self { colors })
    }

    /// The built-in neon/pastel palette, large enough for every family plus the fixed roles.
    pub fn vibrant() -> Self {
        Self {
            colors: VIBRANT.to_vec(),
        }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Check that `family_count` families plus the fixed roles fit without reusing a color.
    pub fn ensure_capacity(&self, family_count: usize) -> Result<()> {
        let needed = family_count + FIXED_ROLE_COUNT;
        if needed > self.colors.len() {
            return Err(Error::PaletteTooSmall {
                needed,
                available: self.colors.len(),
            });
        }
        Ok(())
    }

    /// Shuffle a copy of the palette into a deck that colors are popped from.
    pub fn deal(&self, rng: &mut dyn RngCore) -> ColorDeck {
        let mut colors = self.colors.clone();
        colors.shuffle(rng);
        ColorDeck { colors }
    }

    /// Deal a fresh deck and pop colors for background, dots and each family.
    pub fn assign_roles(
        &self,
        families: &[ShapeFamily],
        rng: &mut dyn RngCore,
    ) -> Result<RoleColors> {
        self.ensure_capacity(families.len())?;
        let mut deck = self.deal(rng);
        let background = deck.pop()?;
        let dots = deck.pop()?;
        let mut assigned = Vec::with_capacity(families.len());
        for &family in families {
            assigned.push((family, deck.pop()?));
        }
        Ok(RoleColors {
            background,
            dots,
            families: assigned,
        })
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = Error;

    fn try_from(colors: Vec<Color>) -> Result<Self> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<Color> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}

/// Shuffled colors of one pass. Each pop removes the color for the rest of the pass.
#[derive(Debug, Clone)]
pub struct ColorDeck {
    colors: Vec<Color>,
}

impl ColorDeck {
    pub fn pop(&mut self) -> Result<Color> {
        self.colors.pop().ok_or_else(|| Error::from("palette exhausted"))
    }

    pub fn remaining(&self) -> usize {
        self.colors.len()
    }
}

/// Colors chosen for one generation pass.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RoleColors {
    pub background: Color,
    pub dots: Color,
    pub families: Vec<(ShapeFamily, Color)>,
}

impl RoleColors {
    pub fn for_family(&self, family: ShapeFamily) -> Option<Color> {
        self.families
            .iter()
            .find(|(f, _)| *f == family)
            .map(|(_, c)| *c)
    }

    /// Every assigned color in role order: background, dots, families.
    pub fn all(&self) -> Vec<Color> {
        let mut out = vec![self.background, self.dots];
        out.extend(self.families.iter().map(|(_, c)| *c));
        out
    }
}
