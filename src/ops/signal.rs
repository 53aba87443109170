//! Signal-level transforms
//!
//! Peak normalization, DC offset removal, silence trimming and mixing.

use tracing::debug;

use crate::buffer::{resolve_index, AudioBuffer, Sample, SampleRange};
use crate::error::Result;
use crate::ops::arrange::slice;
use crate::ops::fill::{fill_with, fill_with_into};
use crate::ops::query::{mean, peak};

// ============================================================================
// Normalization
// ============================================================================

/// Divisor that brings `peak` up to 1. Quieter signals are amplified, louder
/// ones are left alone, silence is divided by 1.
///
/// Dividing by the peak puts it on exactly 1, so a second pass is a no-op.
fn normalize_divisor<T: Sample>(peak: T) -> T {
    if peak == T::zero() || peak >= T::one() {
        return T::one();
    }
    peak
}

#[inline]
fn clamp_unit<T: Sample>(value: T) -> T {
    value.max(-T::one()).min(T::one())
}

/// Amplify `range` so its peak reaches 1, clamping to [-1, 1]
///
/// Peaks already above 1 are clamped rather than scaled down.
///
/// # Example
/// ```
/// use audio_buffer_utils::{create, normalize};
///
/// let mut buffer = create::<f32>(&[0.0, 0.1, 0.0, -0.2], Some(1), None).unwrap();
/// normalize(&mut buffer, ..).unwrap();
/// assert!((buffer.channel(0)[1] - 0.5).abs() < 1e-6);
/// assert!((buffer.channel(0)[3] + 1.0).abs() < 1e-6);
/// ```
pub fn normalize<T: Sample>(
    buffer: &mut AudioBuffer<T>,
    range: impl Into<SampleRange>,
) -> Result<&mut AudioBuffer<T>> {
    let range = range.into();
    let level = peak(buffer, range)?;
    let divisor = normalize_divisor(level);
    debug!(peak = level.as_f64(), gain = divisor.recip().as_f64(), "normalizing");

    fill_with(buffer, |sample, _, _, _| clamp_unit(sample / divisor), range)
}

/// Write the normalized samples of `source` into `target`
pub fn normalize_into<'t, T: Sample>(
    source: &AudioBuffer<T>,
    target: &'t mut AudioBuffer<T>,
    range: impl Into<SampleRange>,
) -> Result<&'t mut AudioBuffer<T>> {
    let range = range.into();
    let level = peak(source, range)?;
    let divisor = normalize_divisor(level);
    debug!(peak = level.as_f64(), gain = divisor.recip().as_f64(), "normalizing into target");

    fill_with_into(source, target, |sample, _, _, _| clamp_unit(sample / divisor), range)
}

// ============================================================================
// DC offset removal
// ============================================================================

/// Subtract each channel's mean over `range` from that range
///
/// An empty range leaves the buffer unchanged.
pub fn remove_static<T: Sample>(
    buffer: &mut AudioBuffer<T>,
    range: impl Into<SampleRange>,
) -> Result<&mut AudioBuffer<T>> {
    let range = range.into();
    let means = mean(buffer, range)?;
    if means.is_empty() {
        return Ok(buffer);
    }

    fill_with(buffer, |sample, _, ch, _| sample - means[ch], range)
}

/// Write `source` with its per-channel DC offset removed into `target`
pub fn remove_static_into<'t, T: Sample>(
    source: &AudioBuffer<T>,
    target: &'t mut AudioBuffer<T>,
    range: impl Into<SampleRange>,
) -> Result<&'t mut AudioBuffer<T>> {
    let range = range.into();
    let means = mean(source, range)?;
    if means.is_empty() {
        target.validate()?;
        return Ok(target);
    }

    fill_with_into(source, target, |sample, _, ch, _| sample - means[ch], range)
}

// ============================================================================
// Trimming
// ============================================================================

/// Remove leading and trailing samples whose magnitude is at most `level`
///
/// Bounds are taken across all channels: the earliest loud sample in any
/// channel starts the result and the latest loud sample in any channel ends
/// it. A buffer with no loud samples is returned untrimmed.
pub fn trim<T: Sample>(buffer: &AudioBuffer<T>, level: T) -> Result<AudioBuffer<T>> {
    trim_bounds(buffer, level, true, true)
}

/// Remove leading samples whose magnitude is at most `level`
pub fn trim_left<T: Sample>(buffer: &AudioBuffer<T>, level: T) -> Result<AudioBuffer<T>> {
    trim_bounds(buffer, level, true, false)
}

/// Remove trailing samples whose magnitude is at most `level`
pub fn trim_right<T: Sample>(buffer: &AudioBuffer<T>, level: T) -> Result<AudioBuffer<T>> {
    trim_bounds(buffer, level, false, true)
}

fn trim_bounds<T: Sample>(
    buffer: &AudioBuffer<T>,
    level: T,
    left: bool,
    right: bool,
) -> Result<AudioBuffer<T>> {
    buffer.validate()?;

    let level = level.abs();
    let loud = |s: &T| s.abs() > level;

    let start = if left {
        buffer
            .channels()
            .filter_map(|data| data.iter().position(loud))
            .min()
            .unwrap_or(0)
    } else {
        0
    };

    let end = if right {
        buffer
            .channels()
            .filter_map(|data| data.iter().rposition(loud))
            .max()
            .map_or(buffer.len(), |last| last + 1)
    } else {
        buffer.len()
    };

    debug!(start, end, length = buffer.len(), "trim bounds");
    slice(buffer, SampleRange::new(start as isize, end as isize))
}

// ============================================================================
// Mixing
// ============================================================================

/// Blend `b` into `a` in place: `a * (1 - ratio) + b * ratio`
///
/// `b`'s first sample lines up with `a[offset]`; a negative offset counts
/// from the end of `a`. Samples outside the overlap are untouched, as are
/// channels missing from either buffer.
pub fn mix<'a, T: Sample>(
    a: &'a mut AudioBuffer<T>,
    b: &AudioBuffer<T>,
    ratio: T,
    offset: isize,
) -> Result<&'a mut AudioBuffer<T>> {
    let keep = T::one() - ratio;
    mix_with(a, b, |x, y, _, _| x * keep + y * ratio, offset)
}

/// Combine `b` into `a` in place with `f(a_sample, b_sample, b_index, channel)`
pub fn mix_with<'a, T, F>(
    a: &'a mut AudioBuffer<T>,
    b: &AudioBuffer<T>,
    mut f: F,
    offset: isize,
) -> Result<&'a mut AudioBuffer<T>>
where
    T: Sample,
    F: FnMut(T, T, usize, usize) -> T,
{
    a.validate()?;
    b.validate()?;

    let start = if offset < 0 {
        resolve_index(offset, a.len())
    } else {
        offset as usize
    };

    for (ch, (dst, src)) in a.channels_mut().zip(b.channels()).enumerate() {
        for (j, (x, &y)) in dst.iter_mut().skip(start).zip(src).enumerate() {
            *x = f(*x, y, j, ch);
        }
    }

    Ok(a)
}
