//! WCAG 2.x relative luminance and contrast ratio.
//!
//! See <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>.  The
//! sRGB linearization uses the 0.03928 threshold of the WCAG text.

use lazy_static::lazy_static;
use rgb::RGB8;
use serde::{Serialize, Deserialize};
use crate::{WHITE, BLACK, parse_hex, Swatch, Palette,
            palette::ty::ComplianceTier, error::Result};

lazy_static! {
    /// Linear light value of each 8-bit sRGB channel value.
    static ref LINEAR: [f64; 256] = {
        let mut t = [0.; 256];
        for (i, v) in t.iter_mut().enumerate() {
            let c = i as f64 / 255.;
            *v = if c <= 0.03928 { c / 12.92 }
                 else { ((c + 0.055) / 1.055).powf(2.4) };
        }
        t
    };
}

/// Relative luminance of `c`, in \[0, 1\] (0 for black, 1 for white).
pub fn relative_luminance(c: RGB8) -> f64 {
    0.2126 * LINEAR[c.r as usize] + 0.7152 * LINEAR[c.g as usize]
        + 0.0722 * LINEAR[c.b as usize]
}

/// Contrast ratio between `c0` and `c1`, in \[1, 21\].  The order of
/// the arguments does not matter.
///
/// ```
/// use tint_shade::{contrast_ratio, WHITE, BLACK};
/// assert_eq!(contrast_ratio(WHITE, BLACK), 21.);
/// assert_eq!(contrast_ratio(WHITE, WHITE), 1.);
/// ```
pub fn contrast_ratio(c0: RGB8, c1: RGB8) -> f64 {
    let l0 = relative_luminance(c0);
    let l1 = relative_luminance(c1);
    let (lighter, darker) = if l0 >= l1 { (l0, l1) } else { (l1, l0) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Level reached by a contrast ratio: 7 and above is AAA, 4.5 and
/// above is AA.
pub fn compliance_tier(ratio: f64) -> ComplianceTier {
    if ratio >= 7. { ComplianceTier::Aaa }
    else if ratio >= 4.5 { ComplianceTier::Aa }
    else { ComplianceTier::Fail }
}

/// Text color to write on `background`: black on backgrounds whose
/// relative luminance exceeds 0.5, white otherwise.
pub fn recommended_text_color(background: RGB8) -> RGB8 {
    if relative_luminance(background) > 0.5 { BLACK } else { WHITE }
}

/// Contrast ratio of a color pair and the tier it reaches.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    pub ratio: f64,
    pub tier: ComplianceTier,
}

impl ContrastResult {
    pub fn between(foreground: RGB8, background: RGB8) -> Self {
        let ratio = contrast_ratio(foreground, background);
        ContrastResult { ratio, tier: compliance_tier(ratio) }
    }

    /// Same as [`ContrastResult::between`] for colors given as hex
    /// text.
    pub fn between_hex(foreground: &str, background: &str) -> Result<Self> {
        Ok(Self::between(parse_hex(foreground)?, parse_hex(background)?))
    }
}

/// What is needed to display a swatch: its contrast with black and
/// white text and the text color to use.
#[derive(Clone, Debug, PartialEq)]
pub struct SwatchReport {
    pub key: String,
    pub hex: String,
    pub black_text: ContrastResult,
    pub white_text: ContrastResult,
    pub text_color: RGB8,
}

impl SwatchReport {
    pub fn new(s: &Swatch) -> Self {
        let c = s.color();
        SwatchReport {
            key: s.key().to_string(),
            hex: s.hex().to_string(),
            black_text: ContrastResult::between(BLACK, c),
            white_text: ContrastResult::between(WHITE, c),
            text_color: recommended_text_color(c),
        }
    }
}

impl Palette {
    /// Reports of the nine swatches, lightest first.
    pub fn report(&self) -> Vec<SwatchReport> {
        self.iter().map(SwatchReport::new).collect()
    }
}
