//! This module brings the most common functionality under a single namespace: the four engine
//! calls, the category type, the output color with its parse error, and the traits needed to
//! convert colors and use colormaps. The alternative color spaces in [`colors`](crate::colors) are
//! not included.

pub use crate::bound::Bound;
pub use crate::category::Category;
pub use crate::color::{Color, RGBColor, RGBParseError};
pub use crate::colormap::ColorMap;
pub use crate::contrast::{validate_contrast, ContrastResult, Overlay};
pub use crate::palette::{build_palette, Palette};
pub use crate::sampler::sample_range;
pub use crate::synth::synthesize;
