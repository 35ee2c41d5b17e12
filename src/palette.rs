//! The palette builder: colors for all seven categories at once.
//!
//! A palette is always total. A category missing from the input gets [`NEUTRAL_SCORE`]. If the
//! input names a category more than once, the last score given wins: duplicates are never summed
//! or averaged.

use std::collections::btree_map;
use std::collections::{BTreeMap, HashMap};

use crate::category::Category;
use crate::color::RGBColor;
use crate::synth::synthesize;

/// The score used for a category that the input doesn't mention.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// One color per category, for all seven categories, in spectrum order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    colors: BTreeMap<Category, RGBColor>,
}

impl Palette {
    /// The color for a category. Never missing, since a palette always has all seven.
    pub fn get(&self, category: Category) -> RGBColor {
        self.colors
            .get(&category)
            .cloned()
            .unwrap_or_else(|| synthesize(category, NEUTRAL_SCORE))
    }

    /// The number of entries, which is always 7.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false: see [`Palette::len`].
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterates over (category, color) in spectrum order.
    pub fn iter(&self) -> btree_map::Iter<Category, RGBColor> {
        self.colors.iter()
    }

    /// The palette as category name to `#rrggbb` string.
    pub fn to_hex_map(&self) -> BTreeMap<String, String> {
        self.colors
            .iter()
            .map(|(cat, col)| (cat.to_string(), col.to_string()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = (&'a Category, &'a RGBColor);
    type IntoIter = btree_map::Iter<'a, Category, RGBColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

/// Builds the palette for a set of scores. See the module documentation for how missing and
/// repeated categories are treated.
///
/// ```
/// # use worldview_hue::{build_palette, synthesize, Category};
/// let palette = build_palette(&[(Category::Axiology, 0.9), (Category::Axiology, 0.1)]);
/// assert_eq!(palette.len(), 7);
/// assert_eq!(palette.get(Category::Axiology), synthesize(Category::Axiology, 0.1));
/// assert_eq!(palette.get(Category::Ontology), synthesize(Category::Ontology, 0.5));
/// ```
pub fn build_palette(scores: &[(Category, f64)]) -> Palette {
    let mut latest: HashMap<Category, f64> = HashMap::new();
    for &(category, score) in scores {
        if let Some(previous) = latest.insert(category, score) {
            debug!(
                "{} scored twice ({} then {}), keeping the last",
                category, previous, score
            );
        }
    }
    let colors = Category::ALL
        .iter()
        .map(|&category| {
            let score = latest.get(&category).cloned().unwrap_or(NEUTRAL_SCORE);
            (category, synthesize(category, score))
        })
        .collect();
    Palette { colors }
}

/// Like [`build_palette`], with categories given by name. Names that match no category are
/// skipped (and logged), so their scores simply don't count.
pub fn build_palette_named(scores: &[(&str, f64)]) -> Palette {
    let parsed: Vec<(Category, f64)> = scores
        .iter()
        .filter_map(|&(name, score)| match name.parse::<Category>() {
            Ok(category) => Some((category, score)),
            Err(e) => {
                warn!("{}, ignoring its score", e);
                None
            }
        })
        .collect();
    build_palette(&parsed)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use maplit::btreemap;

    #[test]
    fn test_empty_input_is_all_neutral() {
        let palette = build_palette(&[]);
        assert_eq!(palette.len(), 7);
        assert!(!palette.is_empty());
        for (&cat, &col) in &palette {
            assert_eq!(col, synthesize(cat, NEUTRAL_SCORE));
        }
    }

    #[test]
    fn test_spectrum_order() {
        let palette = build_palette(&[]);
        let order: Vec<Category> = palette.iter().map(|(c, _)| *c).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn test_last_duplicate_wins() {
        let palette = build_palette(&[
            (Category::Mythology, 0.0),
            (Category::Cosmology, 0.7),
            (Category::Mythology, 1.0),
        ]);
        assert_eq!(palette.get(Category::Mythology), synthesize(Category::Mythology, 1.0));
        assert_eq!(palette.get(Category::Cosmology), synthesize(Category::Cosmology, 0.7));
        // not the average
        assert_ne!(palette.get(Category::Mythology), synthesize(Category::Mythology, 0.5));
    }

    #[test]
    fn test_named() {
        let named = build_palette_named(&[("teleology", 0.9), ("Astrology", 1.0), ("Ontology", 0.1)]);
        let typed = build_palette(&[(Category::Teleology, 0.9), (Category::Ontology, 0.1)]);
        assert_eq!(named, typed);
    }

    #[test]
    fn test_hex_map() {
        let palette = build_palette(&[]);
        let expected = btreemap! {
            "Ontology".to_string() => synthesize(Category::Ontology, 0.5).to_string(),
            "Epistemology".to_string() => synthesize(Category::Epistemology, 0.5).to_string(),
            "Praxeology".to_string() => synthesize(Category::Praxeology, 0.5).to_string(),
            "Axiology".to_string() => synthesize(Category::Axiology, 0.5).to_string(),
            "Mythology".to_string() => synthesize(Category::Mythology, 0.5).to_string(),
            "Cosmology".to_string() => synthesize(Category::Cosmology, 0.5).to_string(),
            "Teleology".to_string() => synthesize(Category::Teleology, 0.5).to_string(),
        };
        assert_eq!(palette.to_hex_map(), expected);
    }
}
