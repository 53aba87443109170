//! audio-buffer-utils - Multi-channel audio buffer transforms
//!
//! A toolkit of per-sample and per-channel operations over [`AudioBuffer`]:
//! construction and copying, slicing and concatenation, sample mapping and
//! folding, and signal-level operations such as normalization, trimming,
//! mixing, rotation and DC offset removal.
//!
//! # Conventions
//!
//! - Every operation validates its buffer arguments first and fails with
//!   [`BufferError::InvalidArgument`] before touching any samples.
//! - Ranges are [`SampleRange`]s: omitted bounds cover the whole buffer and
//!   negative bounds count from the end.
//! - Only [`subbuffer`] aliases its parent; all other results own their data.
//!
//! # Example
//! ```
//! use audio_buffer_utils::{concat, create, equal, slice, SampleRange};
//!
//! let buffer = create::<f32>(&[0.1, 0.2, 0.3, 0.4, 0.5, 0.6], Some(2), None).unwrap();
//! let head = slice(&buffer, SampleRange::to_end(1)).unwrap();
//! let tail = slice(&buffer, SampleRange::from_start(1)).unwrap();
//! assert!(equal(&concat(&head, &tail).unwrap(), &buffer).unwrap());
//! ```

pub mod buffer;
pub mod config;
pub mod error;
pub mod ops;

pub use buffer::{
    bytes_per_sample, clone, copy, create, create_with_config, resolve_index, shallow, subbuffer,
    AudioBuffer, Sample, SampleRange, Source, SubBuffer,
};
pub use config::BufferConfig;
pub use error::{BufferError, Result};
pub use ops::*;

/// Check that `buffer` is well-formed
///
/// Equivalent to [`AudioBuffer::validate`]; provided for symmetry with the
/// free-function API.
pub fn validate<T: Sample>(buffer: &AudioBuffer<T>) -> Result<()> {
    buffer.validate()
}
