//! The diagnostic sampler: a fixed sweep of scores through every category, for tests and for
//! eyeballing the tuning. Nothing on the rendering path uses it.

use std::io;

use crate::category::Category;
use crate::color::RGBColor;
use crate::colormap::ColorMap;
use crate::contrast::{validate_color, Overlay};
use crate::synth::{inspect, CategoryColorMap};

/// The scores every sweep probes, in order.
pub const PROBE_SCORES: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// A category's color at each of the [`PROBE_SCORES`].
///
/// ```
/// # use worldview_hue::{sample_range, Category};
/// let sweep = sample_range(Category::Epistemology);
/// let scores: Vec<f64> = sweep.iter().map(|&(s, _)| s).collect();
/// assert_eq!(scores, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn sample_range(category: Category) -> Vec<(f64, RGBColor)> {
    let colors = CategoryColorMap::new(category).transform(PROBE_SCORES.iter().cloned());
    PROBE_SCORES.iter().cloned().zip(colors).collect()
}

/// One row of the full sweep: everything about one category at one probe score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleRecord {
    /// The category.
    pub category: Category,
    /// The probe score.
    pub score: f64,
    /// The score after the contrast curve.
    pub intensity: f64,
    /// Rendered CIELCH lightness.
    pub lightness: f64,
    /// Rendered CIELCH chroma, after any gamut mapping.
    pub chroma: f64,
    /// CIELCH hue.
    pub hue: f64,
    /// Whether gamut mapping reduced chroma.
    pub desaturated: bool,
    /// The output color as `#rrggbb`.
    pub hex: String,
    /// The legible label color.
    pub overlay: Overlay,
    /// Contrast between `hex` and `overlay`.
    pub contrast_ratio: f64,
}

/// Every category at every probe score, in spectrum order and then score order.
pub fn sample_all() -> Vec<SampleRecord> {
    Category::ALL
        .iter()
        .flat_map(|&category| {
            PROBE_SCORES.iter().map(move |&score| {
                let swatch = inspect(category, score);
                let contrast = validate_color(&swatch.color);
                SampleRecord {
                    category,
                    score,
                    intensity: swatch.intensity,
                    lightness: swatch.rendered.l,
                    chroma: swatch.rendered.c,
                    hue: swatch.rendered.h,
                    desaturated: swatch.desaturated,
                    hex: swatch.color.to_string(),
                    overlay: contrast.overlay,
                    contrast_ratio: contrast.contrast_ratio,
                }
            })
        })
        .collect()
}

/// Writes [`sample_all`] as CSV, with a header row.
pub fn write_samples_csv<W: io::Write>(writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in sample_all() {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::synth::synthesize;

    #[test]
    fn test_sample_range_shape() {
        for &cat in Category::ALL.iter() {
            let sweep = sample_range(cat);
            assert_eq!(sweep.len(), 5);
            for (i, &(score, color)) in sweep.iter().enumerate() {
                assert_eq!(score, PROBE_SCORES[i]);
                assert_eq!(color, synthesize(cat, score));
                let hex = color.to_string();
                assert_eq!(hex.len(), 7);
                assert!(hex.starts_with('#'));
                assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
            }
        }
    }

    #[test]
    fn test_sample_all() {
        let rows = sample_all();
        assert_eq!(rows.len(), 35);
        assert_eq!(rows[0].category, Category::Ontology);
        assert_eq!(rows[0].score, 0.0);
        assert_eq!(rows[34].category, Category::Teleology);
        assert_eq!(rows[34].score, 1.0);
        assert!(rows.iter().all(|r| r.contrast_ratio >= 4.5));
    }

    #[test]
    fn test_csv_export() {
        let mut buf = Vec::new();
        write_samples_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 36);
        assert_eq!(
            lines[0],
            "category,score,intensity,lightness,chroma,hue,desaturated,hex,overlay,contrast_ratio"
        );
        assert!(lines[1].starts_with("Ontology,0.0,"));
        assert!(lines[35].starts_with("Teleology,1.0,"));
    }
}
