//! This module defines a generalized trait for a colormap: a mapping of the numbers between 0 and 1
//! to colors in a continuous way. Each worldview category is one such map (see
//! [`CategoryColorMap`](crate::synth::CategoryColorMap)).

/// A trait that models a colormap, a continuous mapping of the numbers between 0 and 1 to
/// colors. Any output type works, but it must be consistent.
pub trait ColorMap<T> {
    /// Maps a given number between 0 and 1 to an output color. This should never fail or panic:
    /// out-of-range input maps to some color, usually the one at the nearest end of the range.
    fn transform_single(&self, x: f64) -> T;
    /// Maps a given collection of numbers to colors, in order. Not lazy: the output is collected.
    fn transform<U: IntoIterator<Item = f64>>(&self, inputs: U) -> Vec<T> {
        inputs.into_iter().map(|x| self.transform_single(x)).collect()
    }
}
