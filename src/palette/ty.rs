use std::fmt;
use serde::{Serialize, Deserialize};

/// Step of a [`Palette`](crate::Palette), from the lightest
/// (`S100`) to the darkest (`S900`).  `S500` is the base color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shade {
    S100, S200, S300, S400, S500, S600, S700, S800, S900,
}

impl Shade {
    /// All shades, in ascending order.
    pub const ALL: [Shade; 9] = {
        use Shade::*;
        [S100, S200, S300, S400, S500, S600, S700, S800, S900]
    };

    /// Position of the shade, 1 for `S100` to 9 for `S900`.
    #[inline]
    pub fn index(self) -> u16 { self as u16 + 1 }

    /// The shade number: 100, 200,…, 900.
    #[inline]
    pub fn number(self) -> u16 { 100 * self.index() }

    /// Inverse of [`Shade::number`].
    pub fn from_number(n: u16) -> Option<Shade> {
        if n % 100 == 0 && (100 ..= 900).contains(&n) {
            Some(Shade::ALL[(n / 100 - 1) as usize])
        } else {
            None
        }
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// WCAG accessibility level reached by a contrast ratio (normal
/// size text).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
         Serialize, Deserialize)]
pub enum ComplianceTier {
    /// Below 4.5:1.
    #[serde(rename = "FAIL")]
    Fail,
    /// At least 4.5:1.
    #[serde(rename = "AA")]
    Aa,
    /// At least 7:1.
    #[serde(rename = "AAA")]
    Aaa,
}

impl ComplianceTier {
    pub fn as_str(self) -> &'static str {
        match self {
            ComplianceTier::Aaa => "AAA",
            ComplianceTier::Aa => "AA",
            ComplianceTier::Fail => "FAIL",
        }
    }
}

impl fmt::Display for ComplianceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
