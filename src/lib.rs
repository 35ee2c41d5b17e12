//! Worldview-hue turns a per-category assessment score into a color. Each of the seven worldview
//! categories owns a fixed hue on a violet-to-red spectrum and a hand-tuned window of lightness and
//! chroma in CIELCH. A score is pushed through a contrast-enhancing curve, placed inside that
//! window, nudged by a small per-category lightness ripple so neighbouring categories never
//! coincide, and finally mapped into the sRGB gamut.
//!
//! The crate exposes four calls: [`synthesize`] for one color, [`build_palette`] for all seven at
//! once, [`validate_contrast`] to pick a legible label color, and [`sample_range`] for tooling.
//! Everything is a pure function of its inputs over constant tables, so every call is safe to
//! make from any thread.
//!
//! ```
//! use worldview_hue::{build_palette, synthesize, validate_contrast, Category};
//!
//! let red = synthesize(Category::Teleology, 0.9);
//! let hex = red.to_string();
//! assert_eq!(hex.len(), 7);
//!
//! let label = validate_contrast(&hex).unwrap();
//! assert!(label.is_accessible);
//!
//! let palette = build_palette(&[(Category::Mythology, 0.2)]);
//! assert_eq!(palette.len(), 7);
//! ```

#![doc(html_root_url = "https://docs.rs/worldview-hue/0.1.0")]
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
#![allow(clippy::unreadable_literal)]

extern crate csv;
extern crate num;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate thiserror;

pub mod bound;
pub mod category;
pub mod color;
pub mod colormap;
pub mod colors;
mod consts;
pub mod contrast;
pub mod coord;
pub mod palette;
pub mod prelude;
pub mod sampler;
pub mod synth;
pub mod transform;

pub use category::{Category, CategorySpec};
pub use color::RGBColor;
pub use contrast::{validate_contrast, ContrastResult, Overlay};
pub use palette::{build_palette, Palette};
pub use sampler::sample_range;
pub use synth::synthesize;
