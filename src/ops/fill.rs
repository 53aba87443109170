//! Generic sample fill
//!
//! [`fill`] and [`fill_with`] are the primitives most in-place transforms are
//! built on. The `_into` forms read from one buffer and write to another.
//! Callbacks receive `(sample, index, channel, channel_data)`.

use rand::Rng;

use crate::buffer::{AudioBuffer, Sample, SampleRange};
use crate::error::{BufferError, Result};

/// Check that `target` can receive the first `channels` channels up to `end`
fn check_target<T: Sample>(target: &AudioBuffer<T>, channels: usize, end: usize) -> Result<()> {
    target.validate()?;
    if target.number_of_channels() < channels {
        return Err(BufferError::invalid(format!(
            "target has {} channels, source has {}",
            target.number_of_channels(),
            channels
        )));
    }
    if target.len() < end {
        return Err(BufferError::invalid(format!(
            "target length {} is shorter than the range end {}",
            target.len(),
            end
        )));
    }
    Ok(())
}

/// Set every sample in `range` to `value`
pub fn fill<T: Sample>(
    buffer: &mut AudioBuffer<T>,
    value: T,
    range: impl Into<SampleRange>,
) -> Result<&mut AudioBuffer<T>> {
    buffer.validate()?;
    let range = range.into().resolve(buffer.len());

    for channel in buffer.channels_mut() {
        channel[range.clone()].fill(value);
    }

    Ok(buffer)
}

/// Replace every sample in `range` with the callback's result
///
/// The callback sees the channel as it is being rewritten, so samples before
/// the current index already hold their new values.
pub fn fill_with<T, F>(
    buffer: &mut AudioBuffer<T>,
    mut f: F,
    range: impl Into<SampleRange>,
) -> Result<&mut AudioBuffer<T>>
where
    T: Sample,
    F: FnMut(T, usize, usize, &[T]) -> T,
{
    buffer.validate()?;
    let range = range.into().resolve(buffer.len());

    for (ch, data) in buffer.channels_mut().enumerate() {
        for i in range.clone() {
            let value = f(data[i], i, ch, data);
            data[i] = value;
        }
    }

    Ok(buffer)
}

/// Write `value` into `target` over `source`'s channels and range
///
/// # Errors
/// `InvalidArgument` if `target` has fewer channels than `source` or is too
/// short for the resolved range
pub fn fill_into<'t, T: Sample>(
    source: &AudioBuffer<T>,
    target: &'t mut AudioBuffer<T>,
    value: T,
    range: impl Into<SampleRange>,
) -> Result<&'t mut AudioBuffer<T>> {
    source.validate()?;
    let range = range.into().resolve(source.len());
    check_target(target, source.number_of_channels(), range.end)?;

    for channel in target.channels_mut().take(source.number_of_channels()) {
        channel[range.clone()].fill(value);
    }

    Ok(target)
}

/// Write `f(source_sample, ...)` into `target`; `source` is left untouched
///
/// # Errors
/// `InvalidArgument` if `target` has fewer channels than `source` or is too
/// short for the resolved range
pub fn fill_with_into<'t, T, F>(
    source: &AudioBuffer<T>,
    target: &'t mut AudioBuffer<T>,
    mut f: F,
    range: impl Into<SampleRange>,
) -> Result<&'t mut AudioBuffer<T>>
where
    T: Sample,
    F: FnMut(T, usize, usize, &[T]) -> T,
{
    source.validate()?;
    let range = range.into().resolve(source.len());
    check_target(target, source.number_of_channels(), range.end)?;

    for (ch, (data, out)) in source.channels().zip(target.channels_mut()).enumerate() {
        for i in range.clone() {
            out[i] = f(data[i], i, ch, data);
        }
    }

    Ok(target)
}

/// Negate every sample in `range`
pub fn invert<T: Sample>(
    buffer: &mut AudioBuffer<T>,
    range: impl Into<SampleRange>,
) -> Result<&mut AudioBuffer<T>> {
    fill_with(buffer, |sample, _, _, _| -sample, range)
}

/// Write the negated samples of `source` into `target`
pub fn invert_into<'t, T: Sample>(
    source: &AudioBuffer<T>,
    target: &'t mut AudioBuffer<T>,
    range: impl Into<SampleRange>,
) -> Result<&'t mut AudioBuffer<T>> {
    fill_with_into(source, target, |sample, _, _, _| -sample, range)
}

/// Silence every sample in `range`
pub fn zero<T: Sample>(
    buffer: &mut AudioBuffer<T>,
    range: impl Into<SampleRange>,
) -> Result<&mut AudioBuffer<T>> {
    fill(buffer, T::zero(), range)
}

/// Silence `target` over `source`'s channels and range
pub fn zero_into<'t, T: Sample>(
    source: &AudioBuffer<T>,
    target: &'t mut AudioBuffer<T>,
    range: impl Into<SampleRange>,
) -> Result<&'t mut AudioBuffer<T>> {
    fill_into(source, target, T::zero(), range)
}

/// Fill `range` with white noise, uniform in [-1, 1), from the thread RNG
pub fn noise<T: Sample>(
    buffer: &mut AudioBuffer<T>,
    range: impl Into<SampleRange>,
) -> Result<&mut AudioBuffer<T>> {
    noise_with_rng(buffer, &mut rand::thread_rng(), range)
}

/// Fill `range` with white noise from a caller-supplied generator
///
/// # Example
/// ```
/// use audio_buffer_utils::{create, noise_with_rng};
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let mut buffer = create::<f32>(64_usize, Some(1), None).unwrap();
/// noise_with_rng(&mut buffer, &mut rng, ..).unwrap();
/// assert!(buffer.channel(0).iter().all(|s| (-1.0..1.0).contains(s)));
/// ```
pub fn noise_with_rng<'b, T: Sample, R: Rng>(
    buffer: &'b mut AudioBuffer<T>,
    rng: &mut R,
    range: impl Into<SampleRange>,
) -> Result<&'b mut AudioBuffer<T>> {
    fill_with(buffer, |_, _, _, _| rng.gen_range(-T::one()..T::one()), range)
}

/// Write white noise into `target` over `source`'s channels and range
pub fn noise_into<'t, T: Sample>(
    source: &AudioBuffer<T>,
    target: &'t mut AudioBuffer<T>,
    range: impl Into<SampleRange>,
) -> Result<&'t mut AudioBuffer<T>> {
    let mut rng = rand::thread_rng();
    fill_with_into(source, target, |_, _, _, _| rng.gen_range(-T::one()..T::one()), range)
}
