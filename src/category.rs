//! The seven worldview categories and their color tuning. Each category owns a fixed hue, chosen
//! so that the seven read as a spectrum from violet (Ontology) to red (Teleology), and a window of
//! CIELCH lightness and chroma that a score is placed into. The windows are deliberately uneven:
//! most are very wide so that low and high scores look nothing alike, while Mythology (the yellow)
//! stays bright, because a dark yellow reads as brown.
//!
//! The table is compile-time data. Nothing about it is computed or changed at runtime.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One of the seven worldview categories, in spectrum order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// What exists. Violet.
    Ontology,
    /// How we know. Blue.
    Epistemology,
    /// How we act. Cyan.
    Praxeology,
    /// What is valuable. Green.
    Axiology,
    /// The stories we live by. Yellow.
    Mythology,
    /// Where everything comes from. Orange.
    Cosmology,
    /// What everything is for. Red.
    Teleology,
}

/// The color tuning of one category.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct CategorySpec {
    /// The category this row belongs to.
    pub category: Category,
    /// CIELCH hue, in degrees.
    pub hue: f64,
    /// (min, max) CIELCH lightness. A score of 0 lands at min, 1 at max.
    pub lightness_range: (f64, f64),
    /// (min, max) CIELCH chroma. Some maxima are beyond what sRGB can show, which pushes the top of
    /// the range to the most saturated displayable color.
    ///
    /// Lightness never climbs past the hue's sRGB cusp (the lightness where that hue holds the most
    /// chroma), so the displayable chroma keeps growing along the whole range.
    pub chroma_range: (f64, f64),
    /// Position in spectrum order, 0 to 6. Only used to stagger lightness between categories.
    pub ordinal: usize,
}

/// The tuning table, indexed by ordinal.
pub const CATEGORY_SPECS: [CategorySpec; 7] = [
    CategorySpec {
        category: Category::Ontology,
        hue: 310.,
        lightness_range: (12., 40.),
        chroma_range: (30., 120.),
        ordinal: 0,
    },
    CategorySpec {
        category: Category::Epistemology,
        hue: 275.,
        lightness_range: (15., 58.),
        chroma_range: (20., 62.),
        ordinal: 1,
    },
    CategorySpec {
        category: Category::Praxeology,
        hue: 220.,
        lightness_range: (20., 76.),
        chroma_range: (15., 44.),
        ordinal: 2,
    },
    CategorySpec {
        category: Category::Axiology,
        hue: 140.,
        lightness_range: (18., 84.),
        chroma_range: (25., 100.),
        ordinal: 3,
    },
    CategorySpec {
        category: Category::Mythology,
        hue: 95.,
        lightness_range: (60., 87.),
        chroma_range: (45., 88.),
        ordinal: 4,
    },
    CategorySpec {
        category: Category::Cosmology,
        hue: 60.,
        lightness_range: (25., 68.),
        chroma_range: (35., 88.),
        ordinal: 5,
    },
    CategorySpec {
        category: Category::Teleology,
        hue: 25.,
        lightness_range: (14., 58.),
        chroma_range: (32., 95.),
        ordinal: 6,
    },
];

/// An error for a string that names no category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryParseError {
    /// The string matched none of the seven names.
    #[error("unknown worldview category {0:?}")]
    Unknown(String),
}

impl Category {
    /// All seven categories, in spectrum order.
    pub const ALL: [Category; 7] = [
        Category::Ontology,
        Category::Epistemology,
        Category::Praxeology,
        Category::Axiology,
        Category::Mythology,
        Category::Cosmology,
        Category::Teleology,
    ];

    /// This category's tuning.
    pub fn spec(self) -> &'static CategorySpec {
        &CATEGORY_SPECS[self.ordinal()]
    }

    /// Position in spectrum order, 0 to 6.
    pub fn ordinal(self) -> usize {
        match self {
            Category::Ontology => 0,
            Category::Epistemology => 1,
            Category::Praxeology => 2,
            Category::Axiology => 3,
            Category::Mythology => 4,
            Category::Cosmology => 5,
            Category::Teleology => 6,
        }
    }

    /// The category's name, capitalized.
    pub fn name(self) -> &'static str {
        match self {
            Category::Ontology => "Ontology",
            Category::Epistemology => "Epistemology",
            Category::Praxeology => "Praxeology",
            Category::Axiology => "Axiology",
            Category::Mythology => "Mythology",
            Category::Cosmology => "Cosmology",
            Category::Teleology => "Teleology",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    /// Case-insensitive, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Category, CategoryParseError> {
        let wanted = s.trim();
        Category::ALL
            .iter()
            .cloned()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CategoryParseError::Unknown(s.to_string()))
    }
}
