//! This module contains the color spaces, besides sRGB and XYZ, that the engine works in. Each main
//! type is imported into this module's namespace directly.
pub mod cielabcolor;
pub mod cielchcolor;
pub mod hslcolor;

pub use self::cielabcolor::CIELABColor;
pub use self::cielchcolor::{CIELCHColor, ConversionError};
pub use self::hslcolor::HSLColor;
