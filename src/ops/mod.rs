//! Buffer operations
//!
//! Free functions over [`AudioBuffer`](crate::AudioBuffer). In-place
//! operations take `&mut AudioBuffer` and hand it back; the `_into` variants
//! read one buffer and write another; everything else returns a new buffer.

pub mod arrange;
pub mod fill;
pub mod query;
pub mod signal;

pub use arrange::{
    concat, concat_all, map, pad, pad_left, pad_right, repeat, resize, reverse, reverse_into,
    rotate, shift, slice, PadArg,
};
pub use fill::{
    fill, fill_into, fill_with, fill_with_into, invert, invert_into, noise, noise_into,
    noise_with_rng, zero, zero_into,
};
pub use query::{data, data_into, equal, equal_all, mean, peak, reduce, size};
pub use signal::{
    mix, mix_with, normalize, normalize_into, remove_static, remove_static_into, trim, trim_left,
    trim_right,
};
