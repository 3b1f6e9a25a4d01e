//! Accessible color palettes from a single base color.
//!
//! - [`Palette`]: nine shades, `name.100` (lightest) to `name.900`
//!   (darkest), obtained by [blending](RGBColor::blend) the base color
//!   toward white and black.
//! - [`relative_luminance`], [`contrast_ratio`], [`ComplianceTier`]
//!   and [`recommended_text_color`] following
//!   [WCAG 2.x](https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio).
//! - [`export`]: CSS, SCSS and JSON renderings of palettes.
//!
//! Colors are [`rgb::RGB8`] values; [`parse_hex`] and [`format_hex`]
//! convert them from and to `#rrggbb` text.
//!
//! ```
//! use tint_shade::{Palette, ComplianceTier, ContrastResult, WHITE};
//! let p = Palette::generate("#4287f5", "Blue")?;
//! assert_eq!(&p["Blue.500"], "#4287f5");
//! assert_eq!(&p["Blue.100"], "#d9e7fd");
//! let c = ContrastResult::between(WHITE, p.base().color());
//! assert_eq!(c.tier, ComplianceTier::Fail);
//! # Ok::<(), tint_shade::Error>(())
//! ```

use rgb::{RGBA, RGB8, RGBA8};

mod error;
mod hex;
mod palette;
mod contrast;
pub mod export;

pub use error::{Error, Result};
pub use hex::{is_valid_hex, parse_hex, format_hex};
pub use palette::{generate, generate_all, valid_palettes,
                  BaseColor, ColorEntry, Palette, Swatch};
pub use palette::ty::{ComplianceTier, Shade};
pub use contrast::{relative_luminance, contrast_ratio, compliance_tier,
                   recommended_text_color, ContrastResult, SwatchReport};

/// Pure white, the target of tints.
pub const WHITE: RGB8 = RGB8::new(255, 255, 255);
/// Pure black, the target of shades.
pub const BLACK: RGB8 = RGB8::new(0, 0, 0);

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    /// Integer encodings truncate the components toward zero.
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// Linear interpolation from `self` (`ratio = 0.`) to `c1`
    /// (`ratio = 1.`), component by component.
    ///
    /// `ratio` is not clamped; values outside \[0, 1\] give
    /// meaningless colors.  For 8-bit encodings the result is
    /// truncated, not rounded, so it is slightly biased toward `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use tint_shade::{RGBColor, WHITE};
    /// let c = RGB8::new(0x42, 0x87, 0xf5).blend(&WHITE, 0.8);
    /// assert_eq!(c, RGB8::new(0xd9, 0xe7, 0xfd));
    /// ```
    fn blend(&self, c1: &Self, ratio: f64) -> Self {
        let RGBA{ r: r0, g: g0, b: b0, a: a0 } = self.to_rgba();
        let RGBA{ r: r1, g: g1, b: b1, a: a1 } = c1.to_rgba();
        let mix = |x0: f64, x1: f64| x0 * (1. - ratio) + x1 * ratio;
        Self::from_rgba(RGBA{ r: mix(r0, r1), g: mix(g0, g1),
                              b: mix(b0, b1), a: mix(a0, a1) })
    }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: c.r as u8,  g: c.g as u8,  b: c.b as u8 }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: c.r as u8,  g: c.g as u8,  b: c.b as u8, a: c.a as u8 }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints() {
        let c = RGB8::new(12, 200, 77);
        assert_eq!(c.blend(&WHITE, 0.), c);
        assert_eq!(c.blend(&WHITE, 1.), WHITE);
        assert_eq!(c.blend(&BLACK, 1.), BLACK);
    }

    #[test]
    fn blend_truncates() {
        // 0x42 * 0.8 = 52.8 -> 52, not 53.
        let c = RGB8::new(0x42, 0x87, 0xf5).blend(&BLACK, 0.2);
        assert_eq!(c, RGB8::new(52, 108, 196));
        // 1 * 0.5 + 0 * 0.5 = 0.5 -> 0
        assert_eq!(RGB8::new(1, 1, 1).blend(&BLACK, 0.5), BLACK);
    }

    #[test]
    fn blend_alpha() {
        let c0 = RGBA8::new(0, 0, 0, 0);
        let c1 = RGBA8::new(255, 255, 255, 255);
        assert_eq!(c0.blend(&c1, 0.5), RGBA8::new(127, 127, 127, 127));
        let f = RGBA::<f64>::new(0., 10., 20., 1.)
            .blend(&RGBA::new(10., 30., 20., 1.), 0.25);
        assert_eq!(f, RGBA::new(2.5, 15., 20., 1.));
    }
}
