//! State and algorithms for the translation between high- and low-resolution
//! colors.

mod sampler;

pub use sampler::Sampler;
