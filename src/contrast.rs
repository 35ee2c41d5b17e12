//! Legibility checks for text or icons drawn on top of a synthesized color, following WCAG 2:
//! relative luminance from linearized sRGB with the Rec. 709 weights, and the contrast ratio
//! `(lighter + 0.05) / (darker + 0.05)`. The overlay is always pure white or pure black, whichever
//! contrasts more.
//!
//! One fact worth knowing: for any background, the better of white and black reaches at least
//! about 4.58:1, so the chosen overlay always passes the AA threshold for normal text.

use std::fmt;

use crate::color::{RGBColor, RGBParseError};
use crate::consts::srgb_to_linear;

/// The WCAG AA minimum contrast ratio for normal-size text.
pub const WCAG_AA_NORMAL: f64 = 4.5;

/// The label color drawn over a background.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Overlay {
    /// White text.
    Light,
    /// Black text.
    Dark,
}

impl Overlay {
    /// The overlay as a color.
    pub fn color(self) -> RGBColor {
        match self {
            Overlay::Light => RGBColor::WHITE,
            Overlay::Dark => RGBColor::BLACK,
        }
    }
}

impl fmt::Display for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.color())
    }
}

/// The verdict for one background color.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct ContrastResult {
    /// The overlay that contrasts more with the background. Ties go to [`Overlay::Dark`].
    pub overlay: Overlay,
    /// The contrast ratio between the overlay and the background, from 1 to 21.
    pub contrast_ratio: f64,
    /// True if `contrast_ratio` meets [`WCAG_AA_NORMAL`].
    pub is_accessible: bool,
}

/// The WCAG relative luminance of a color: 0 for black, 1 for white. Channels are clamped to
/// [0, 1] first.
pub fn relative_luminance(color: &RGBColor) -> f64 {
    // WCAG 2 quotes a knee of 0.03928; the IEC 0.04045 used here differs by less than one 8-bit step
    let lin = |c: f64| srgb_to_linear(c.max(0.).min(1.));
    0.2126 * lin(color.r) + 0.7152 * lin(color.g) + 0.0722 * lin(color.b)
}

/// The WCAG contrast ratio between two colors. Symmetric, and never below 1.
///
/// ```
/// # use worldview_hue::color::RGBColor;
/// # use worldview_hue::contrast::contrast_ratio;
/// let ratio = contrast_ratio(&RGBColor::BLACK, &RGBColor::WHITE);
/// assert!((ratio - 21.).abs() < 1e-9);
/// ```
pub fn contrast_ratio(a: &RGBColor, b: &RGBColor) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Picks the overlay for a background color that has already been parsed.
pub fn validate_color(background: &RGBColor) -> ContrastResult {
    let on_white = contrast_ratio(background, &RGBColor::WHITE);
    let on_black = contrast_ratio(background, &RGBColor::BLACK);
    let (overlay, contrast_ratio) = if on_white > on_black {
        (Overlay::Light, on_white)
    } else {
        (Overlay::Dark, on_black)
    };
    ContrastResult {
        overlay,
        contrast_ratio,
        is_accessible: contrast_ratio >= WCAG_AA_NORMAL,
    }
}

/// Picks the overlay for a background given as a hex code.
///
/// # Errors
/// A malformed hex code is an error, never a default: a guess here could hide a real legibility
/// problem.
///
/// ```
/// # use worldview_hue::contrast::{validate_contrast, Overlay};
/// let result = validate_contrast("#1e1b4b").unwrap();
/// assert_eq!(result.overlay, Overlay::Light);
/// assert!(result.is_accessible);
/// assert!(validate_contrast("1e1b4b").is_err());
/// ```
pub fn validate_contrast(hex: &str) -> Result<ContrastResult, RGBParseError> {
    let background = RGBColor::from_hex_code(hex)?;
    Ok(validate_color(&background))
}
