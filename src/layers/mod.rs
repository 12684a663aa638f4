mod dense;

pub use self::dense::*;

/// Describes a layer of a feed-forward network.
pub trait Layer {
    /// Gets the number of elements in the input shape
    fn num_in(&self) -> usize;
    /// Gets the number of elements in the output shape
    fn num_out(&self) -> usize;
    fn name(&self) -> &'static str;
}
