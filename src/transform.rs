//! The score transform: how a raw score becomes an intensity between 0 and 1. Scores are first
//! clamped, then squared, which pulls low scores toward 0 and spreads the high end out, and then
//! passed through a quadratic ease-in/ease-out that pushes the lower and upper thirds of the range
//! further apart. The S-curve alone fixes 0, 0.5 and 1; the full transform is monotonic and fixes
//! 0 and 1.

/// The exponent applied to a clamped score before the S-curve.
pub const SCORE_EXPONENT: f64 = 2.0;

/// Clamps a score into [0, 1]. NaN counts as 0, so that every `f64` has a defined intensity.
///
/// ```
/// # use worldview_hue::transform::clamp_score;
/// assert_eq!(clamp_score(-3.), 0.);
/// assert_eq!(clamp_score(0.4), 0.4);
/// assert_eq!(clamp_score(17.), 1.);
/// assert_eq!(clamp_score(std::f64::NAN), 0.);
/// ```
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.
    } else if score < 0. {
        0.
    } else if score > 1. {
        1.
    } else {
        score
    }
}

/// Quadratic ease-in/ease-out on [0, 1]: `2t^2` below one half, `1 - 2(1-t)^2` above.
pub fn s_curve(t: f64) -> f64 {
    if t < 0.5 {
        2. * t * t
    } else {
        1. - 2. * (1. - t) * (1. - t)
    }
}

/// Maps any score to an intensity in [0, 1]: clamp, raise to [`SCORE_EXPONENT`], then
/// [`s_curve`].
///
/// ```
/// # use worldview_hue::transform::transform;
/// assert_eq!(transform(0.), 0.);
/// assert_eq!(transform(1.), 1.);
/// assert_eq!(transform(-0.5), 0.);
/// assert!(transform(0.3) < transform(0.31));
/// ```
pub fn transform(score: f64) -> f64 {
    let enhanced = clamp_score(score).powf(SCORE_EXPONENT);
    s_curve(enhanced)
}

/// A named mapping of scores to intensities, for anything that wants to choose its curve. Every
/// variant clamps its input to [0, 1] first.
///
/// Not `PartialEq`: function pointers have no reliable identity, so two `Generic` curves can't be
/// compared. Use `matches!` for the named variants.
#[derive(Debug, Clone, Copy)]
pub enum ScoreCurve {
    /// Intensity equals the clamped score.
    Linear,
    /// The contrast-enhancing curve the synthesizer renders with: see [`transform`].
    Contrast,
    /// Any function from [0, 1] to [0, 1]. Its output is clamped again, so a careless function
    /// can't push colors outside a category's window.
    Generic(fn(f64) -> f64),
}

impl ScoreCurve {
    /// Maps a score to an intensity in [0, 1].
    pub fn apply(&self, score: f64) -> f64 {
        match *self {
            ScoreCurve::Linear => clamp_score(score),
            ScoreCurve::Contrast => transform(score),
            ScoreCurve::Generic(func) => clamp_score(func(clamp_score(score))),
        }
    }
}

impl Default for ScoreCurve {
    fn default() -> ScoreCurve {
        ScoreCurve::Contrast
    }
}
