//! The color synthesizer: turns one (category, score) pair into one color.
//!
//! 1. The score becomes an intensity through the contrast curve in [`transform`].
//! 2. The intensity places lightness and chroma inside the category's window.
//! 3. Lightness gets a small per-category offset, `sin(ordinal * 0.7) * 4`, so that two categories
//!    with the same score still differ in lightness. A step of 0.7 radians keeps all seven offsets
//!    distinct.
//! 4. The CIELCH color is mapped into sRGB by [`map_into_srgb`], which desaturates rather than fails.
//! 5. If even that can't produce a color, an HSL color with the category's hue and the computed
//!    lightness is used instead.
//!
//! The same (category, score) always gives the same color, bit for bit.
//!
//! [`transform`]: crate::transform::transform

use crate::bound::map_into_srgb;
use crate::category::{Category, CategorySpec};
use crate::color::RGBColor;
use crate::colormap::ColorMap;
use crate::colors::{CIELCHColor, HSLColor};
use crate::transform::{clamp_score, ScoreCurve};

/// Radians between the lightness offsets of consecutive categories.
pub const BOOST_STEP: f64 = 0.7;

/// Largest lightness offset, in CIELCH lightness units.
pub const BOOST_AMPLITUDE: f64 = 4.0;

/// HSL saturation of the last-resort color.
pub const FALLBACK_SATURATION: f64 = 0.5;

/// Mid-gray, `#808080`: what a string naming no category renders as.
pub const NEUTRAL_COLOR: RGBColor = RGBColor {
    r: 128. / 255.,
    g: 128. / 255.,
    b: 128. / 255.,
};

/// Everything the synthesizer worked out for one (category, score) pair. The rendered color is
/// `color`; the rest is there for inspection.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Swatch {
    /// The category.
    pub category: Category,
    /// The score after clamping to [0, 1].
    pub score: f64,
    /// The score after the curve.
    pub intensity: f64,
    /// The CIELCH color the category's tuning asks for.
    pub requested: CIELCHColor,
    /// The CIELCH color actually shown. Differs from `requested` only in chroma, and only when
    /// `requested` is outside the sRGB gamut.
    pub rendered: CIELCHColor,
    /// The output color, with channels snapped to 8 bits.
    pub color: RGBColor,
    /// True if chroma had to be reduced to fit sRGB.
    pub desaturated: bool,
    /// True if the perceptual conversion failed and the HSL fallback was used.
    pub fallback: bool,
}

/// The lightness offset for a category at the given ordinal.
pub fn lightness_boost(ordinal: usize) -> f64 {
    (ordinal as f64 * BOOST_STEP).sin() * BOOST_AMPLITUDE
}

/// The CIELCH color a category's tuning asks for at a given intensity, before any gamut mapping.
/// Lightness includes the category's offset and is clamped to [0, 100].
pub fn lch_for_intensity(spec: &CategorySpec, intensity: f64) -> CIELCHColor {
    let (l_min, l_max) = spec.lightness_range;
    let (c_min, c_max) = spec.chroma_range;
    let lightness = l_min + intensity * (l_max - l_min);
    let chroma = c_min + intensity * (c_max - c_min);
    let boosted = (lightness + lightness_boost(spec.ordinal)).max(0.).min(100.);
    CIELCHColor {
        l: boosted,
        c: chroma,
        h: spec.hue,
    }
}

/// The CIELCH color requested for a category and score, before gamut mapping.
pub fn target_lch(category: Category, score: f64) -> CIELCHColor {
    lch_for_intensity(category.spec(), ScoreCurve::Contrast.apply(score))
}

// hue and lightness only; always inside the gamut
fn fallback_color(hue: f64, lightness: f64) -> RGBColor {
    let h = if hue.is_finite() { hue } else { 0. };
    let l = if lightness.is_finite() { lightness / 100. } else { 0.5 };
    HSLColor {
        h,
        s: FALLBACK_SATURATION,
        l,
    }
    .to_rgb()
}

/// Runs the whole pipeline for one category's tuning, with the given curve.
pub fn render(spec: &CategorySpec, score: f64, curve: ScoreCurve) -> Swatch {
    let intensity = curve.apply(score);
    let requested = lch_for_intensity(spec, intensity);
    let (rendered, rgb, desaturated, fallback) = match map_into_srgb(requested) {
        Ok(mapping) => (mapping.mapped, mapping.rgb, mapping.desaturated, false),
        Err(e) => {
            warn!("{}: {}, using HSL fallback", spec.category, e);
            (requested, fallback_color(spec.hue, requested.l), false, true)
        }
    };
    let color = rgb.quantized();
    trace!("{} at {:.3} -> {}", spec.category, score, color);
    Swatch {
        category: spec.category,
        score: clamp_score(score),
        intensity,
        requested,
        rendered,
        color,
        desaturated,
        fallback,
    }
}

/// The full record of how a category and score become a color. Uses the same curve as
/// [`synthesize`], so the numbers always agree with what is drawn.
pub fn inspect(category: Category, score: f64) -> Swatch {
    render(category.spec(), score, ScoreCurve::Contrast)
}

/// The color for a category at a score. Scores outside [0, 1] are clamped.
///
/// ```
/// # use worldview_hue::{synthesize, Category};
/// let strong = synthesize(Category::Teleology, 1.0);
/// let weak = synthesize(Category::Teleology, 0.05);
/// assert_ne!(strong, weak);
/// assert_eq!(synthesize(Category::Teleology, 7.0), strong);
/// ```
pub fn synthesize(category: Category, score: f64) -> RGBColor {
    inspect(category, score).color
}

/// Like [`synthesize`], but with the category given by name. A name that matches no category
/// renders as [`NEUTRAL_COLOR`] instead of failing, so callers always have something to draw.
pub fn synthesize_named(name: &str, score: f64) -> RGBColor {
    match name.parse::<Category>() {
        Ok(category) => synthesize(category, score),
        Err(e) => {
            warn!("{}, rendering neutral gray", e);
            NEUTRAL_COLOR
        }
    }
}

/// One category viewed as a colormap from scores to colors.
///
/// ```
/// # use worldview_hue::colormap::ColorMap;
/// # use worldview_hue::synth::CategoryColorMap;
/// # use worldview_hue::Category;
/// let cmap = CategoryColorMap::new(Category::Axiology);
/// let greens = cmap.transform(vec![0., 0.5, 1.]);
/// assert_eq!(greens.len(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CategoryColorMap {
    /// The category whose tuning is used.
    pub category: Category,
    /// How scores become intensities. [`ScoreCurve::Contrast`] matches [`synthesize`].
    pub curve: ScoreCurve,
}

impl CategoryColorMap {
    /// A colormap that agrees with [`synthesize`] for this category.
    pub fn new(category: Category) -> CategoryColorMap {
        CategoryColorMap {
            category,
            curve: ScoreCurve::Contrast,
        }
    }
}

impl ColorMap<RGBColor> for CategoryColorMap {
    fn transform_single(&self, x: f64) -> RGBColor {
        render(self.category.spec(), x, self.curve).color
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::category::CATEGORY_SPECS;

    #[test]
    fn test_boosts_are_distinct() {
        let boosts: Vec<f64> = (0..7).map(lightness_boost).collect();
        for i in 0..7 {
            assert!(boosts[i].abs() <= BOOST_AMPLITUDE);
            for j in (i + 1)..7 {
                assert!((boosts[i] - boosts[j]).abs() > 0.1);
            }
        }
        assert_eq!(boosts[0], 0.);
    }

    #[test]
    fn test_lch_window() {
        let spec = Category::Praxeology.spec();
        let low = lch_for_intensity(spec, 0.);
        let high = lch_for_intensity(spec, 1.);
        let boost = lightness_boost(spec.ordinal);
        assert!((low.l - (spec.lightness_range.0 + boost)).abs() <= 1e-9);
        assert!((high.l - (spec.lightness_range.1 + boost)).abs() <= 1e-9);
        assert_eq!(low.c, spec.chroma_range.0);
        assert_eq!(high.c, spec.chroma_range.1);
        assert_eq!(low.h, spec.hue);
    }

    #[test]
    fn test_lightness_clamped_after_boost() {
        let spec = CategorySpec {
            category: Category::Axiology,
            hue: 140.,
            lightness_range: (0., 99.),
            chroma_range: (10., 20.),
            ordinal: 2,
        };
        assert_eq!(lch_for_intensity(&spec, 1.).l, 100.);
        let spec = CategorySpec {
            lightness_range: (1., 50.),
            ordinal: 6,
            ..spec
        };
        assert_eq!(lch_for_intensity(&spec, 0.).l, 0.);
    }

    #[test]
    fn test_swatch_agrees_with_synthesize() {
        for &c in Category::ALL.iter() {
            for &s in &[0., 0.3, 0.6, 1.] {
                let swatch = inspect(c, s);
                assert_eq!(swatch.color, synthesize(c, s));
                assert_eq!(swatch.requested, target_lch(c, s));
                assert!(!swatch.fallback);
                assert_eq!(swatch.rendered.l, swatch.requested.l);
                assert!(swatch.rendered.c <= swatch.requested.c);
            }
        }
    }

    #[test]
    fn test_unknown_name_is_neutral_gray() {
        assert_eq!(synthesize_named("Astrology", 0.9).to_string(), "#808080");
        assert_eq!(synthesize_named("", 0.9), NEUTRAL_COLOR);
        assert_eq!(
            synthesize_named("teleology", 0.9),
            synthesize(Category::Teleology, 0.9)
        );
    }

    #[test]
    fn test_fallback_still_renders() {
        let broken = CategorySpec {
            hue: f64::INFINITY,
            ..CATEGORY_SPECS[3]
        };
        let swatch = render(&broken, 0.5, ScoreCurve::Contrast);
        assert!(swatch.fallback);
        assert!(swatch.color.in_gamut(0.));
        assert_eq!(swatch.color.to_string().len(), 7);
    }

    #[test]
    fn test_fallback_color_tracks_lightness() {
        let dark = fallback_color(25., 20.);
        let light = fallback_color(25., 80.);
        assert!(dark.r < light.r);
        assert_eq!(fallback_color(f64::NAN, f64::NAN), HSLColor{h: 0., s: 0.5, l: 0.5}.to_rgb());
    }

    #[test]
    fn test_top_of_range_is_the_most_saturated() {
        for &c in Category::ALL.iter() {
            let low = inspect(c, 0.);
            let mid = inspect(c, 0.5);
            let high = inspect(c, 1.);
            assert!(mid.rendered.c > low.rendered.c, "{}", c);
            assert!(high.rendered.c > mid.rendered.c + 10., "{}", c);
            // the bottom of the window is always displayable as asked
            assert!(!low.desaturated, "{}", c);
        }
    }

    #[test]
    fn test_colormap_matches_synthesize() {
        let cmap = CategoryColorMap::new(Category::Cosmology);
        assert!(matches!(cmap.curve, ScoreCurve::Contrast));
        let scores = vec![-1., 0., 0.25, 0.8, 2.];
        let colors = cmap.transform(scores.clone());
        for (s, col) in scores.into_iter().zip(colors) {
            assert_eq!(col, synthesize(Category::Cosmology, s));
        }
        let linear = CategoryColorMap {
            curve: ScoreCurve::Linear,
            ..cmap
        };
        // the curves agree at the ends and nowhere else
        assert_eq!(linear.transform_single(1.), cmap.transform_single(1.));
        assert_ne!(linear.transform_single(0.5), cmap.transform_single(0.5));
    }
}
