//! Audio buffer types
//!
//! - The [`AudioBuffer`] entity and its shape validation
//! - Sample precision ([`Sample`])
//! - Index resolution ([`SampleRange`])
//! - Construction and copying ([`create`], [`shallow`], [`clone`], [`copy`])
//! - Aliasing views ([`subbuffer`])

pub mod audio_buffer;
pub mod create;
pub mod range;
pub mod sample;
pub mod view;

pub use audio_buffer::AudioBuffer;
pub use create::{clone, copy, create, create_with_config, shallow, Source};
pub use range::{resolve_index, SampleRange};
pub use sample::{bytes_per_sample, Sample};
pub use view::{subbuffer, SubBuffer};
