//! Nine-step tint/shade palettes.

use std::ops::Index;
use rgb::RGB8;
use serde::{Serialize, Deserialize};
use tracing::{debug, warn};
use crate::{RGBColor, WHITE, BLACK, parse_hex, format_hex, error::Result};

pub(crate) mod ty;
use ty::Shade;

/// A base color that passed [`is_valid_hex`](crate::is_valid_hex).
///
/// It keeps the text it was parsed from, so that the `500` shade of
/// the palette reproduces the caller's spelling (case, `#` or not).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseColor {
    text: String,
    color: RGB8,
}

impl BaseColor {
    pub fn parse(text: &str) -> Result<Self> {
        Ok(BaseColor { color: parse_hex(text)?, text: text.to_string() })
    }

    pub fn text(&self) -> &str { &self.text }

    pub fn color(&self) -> RGB8 { self.color }
}

/// One entry of a [`Palette`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Swatch {
    shade: Shade,
    key: String,
    hex: String,
    color: RGB8,
}

impl Swatch {
    pub fn shade(&self) -> Shade { self.shade }

    /// The key `"{name}.{shade}"`.
    pub fn key(&self) -> &str { &self.key }

    /// Hex text of the color.  Canonical `#rrggbb` except for the
    /// base shade which is the caller's text.
    pub fn hex(&self) -> &str { &self.hex }

    pub fn color(&self) -> RGB8 { self.color }
}

/// Nine colors `"{name}.100"` to `"{name}.900"`, lightest first.
///
/// Invariant: exactly one swatch per [`Shade`], in ascending order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    name: String,
    swatches: Vec<Swatch>,
}

/// Ratio of the blend toward white (shades 100–400) or black
/// (600–900).  Not defined for the base shade.
fn blend_ratio(shade: Shade) -> f64 {
    let i = shade.index();
    if i < 5 { 0.8 - (i - 1) as f64 * 0.2 }
    else { (i - 5) as f64 * 0.2 }
}

/// Build the palette of `base` labelled `name`.
///
/// `name` should not contain a `.`: in the keys it separates the name
/// from the shade.
pub fn generate(base: &BaseColor, name: &str) -> Palette {
    let swatches = Shade::ALL.iter().map(|&shade| {
        let (hex, color) = match shade {
            Shade::S500 => (base.text.clone(), base.color),
            s => {
                let target = if s < Shade::S500 { &WHITE } else { &BLACK };
                let c = base.color.blend(target, blend_ratio(s));
                (format_hex(c), c)
            }
        };
        Swatch { shade, key: format!("{name}.{shade}"), hex, color }
    }).collect();
    debug!(name, base = %base.text, "generated palette");
    Palette { name: name.to_string(), swatches }
}

impl Palette {
    /// Validate `hex` and build its palette.
    pub fn generate(hex: &str, name: &str) -> Result<Self> {
        Ok(generate(&BaseColor::parse(hex)?, name))
    }

    pub fn name(&self) -> &str { &self.name }

    /// Returns the number of colors in the palette (always 9).
    pub fn len(&self) -> usize { self.swatches.len() }

    pub fn swatches(&self) -> &[Swatch] { &self.swatches }

    pub fn iter(&self) -> std::slice::Iter<'_, Swatch> {
        self.swatches.iter()
    }

    /// The swatch of the given shade.
    pub fn shade(&self, s: Shade) -> &Swatch {
        &self.swatches[s as usize]
    }

    /// The `500` swatch, i.e., the base color.
    pub fn base(&self) -> &Swatch { self.shade(Shade::S500) }

    /// Hex text stored under `key` (e.g. `"Blue.300"`).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.swatches.iter().find(|s| s.key == key).map(|s| s.hex())
    }

    /// Returns the (key, hex) pairs in shade order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.swatches.iter().map(|s| (s.key(), s.hex()))
    }
}

impl Index<&str> for Palette {
    type Output = str;

    /// Panics if `key` is not one of the palette keys.
    fn index(&self, key: &str) -> &str {
        match self.get(key) {
            Some(hex) => hex,
            None => panic!("no key {key:?} in palette {:?}", self.name),
        }
    }
}

impl Index<Shade> for Palette {
    type Output = Swatch;

    fn index(&self, s: Shade) -> &Swatch { self.shade(s) }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Swatch;
    type IntoIter = std::slice::Iter<'a, Swatch>;

    fn into_iter(self) -> Self::IntoIter { self.swatches.iter() }
}

/// A base color and its label, as supplied by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    pub name: String,
    pub hex: String,
}

impl ColorEntry {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        ColorEntry { name: name.into(), hex: hex.into() }
    }

    pub fn palette(&self) -> Result<Palette> {
        Palette::generate(&self.hex, &self.name)
    }
}

/// Build the palette of each entry.  An invalid entry gives an
/// [`InvalidColorFormat`](crate::Error::InvalidColorFormat) error
/// naming it and does not prevent the others from being processed.
pub fn generate_all(entries: &[ColorEntry]) -> Vec<Result<Palette>> {
    entries.iter().enumerate().map(|(i, e)| {
        e.palette().map_err(|err| {
            let err = err.at_entry(i, &e.name);
            warn!(index = i, name = %e.name, "skipping entry: {err}");
            err
        })
    }).collect()
}

/// Palettes of the valid entries only, in order.
pub fn valid_palettes(entries: &[ColorEntry]) -> Vec<Palette> {
    generate_all(entries).into_iter().filter_map(|p| p.ok()).collect()
}
