//! Sample precision
//!
//! Buffers are generic over their sample type. `f32` is the default and the
//! format most hosts hand out; `f64` is available when extra headroom matters.

use std::fmt::Debug;

use num_traits::Float;
use rand::distributions::uniform::SampleUniform;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Floating-point sample type stored in an [`AudioBuffer`](crate::AudioBuffer)
///
/// `SampleUniform` lets noise be drawn directly in the sample's own precision.
pub trait Sample:
    Float + SampleUniform + Default + Debug + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// Convert from a double-precision value, rounding if needed
    fn from_f64(value: f64) -> Self;

    /// Widen to double precision
    fn as_f64(self) -> f64;
}

impl Sample for f32 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Sample for f64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}

/// Bytes occupied by one sample of type `T`
#[inline]
pub fn bytes_per_sample<T: Sample>() -> usize {
    std::mem::size_of::<T>()
}
