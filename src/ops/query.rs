//! Whole-buffer queries
//!
//! Comparisons, folds and measurements that read a buffer without changing it.

use crate::buffer::{bytes_per_sample, AudioBuffer, Sample, SampleRange};
use crate::error::{BufferError, Result};

/// Check whether two buffers hold the same samples
///
/// Channel count and length must match and every sample pair must compare
/// equal with `==`, so `NaN` never matches and `-0.0` matches `0.0`. The
/// sample rate is not compared.
pub fn equal<T: Sample>(a: &AudioBuffer<T>, b: &AudioBuffer<T>) -> Result<bool> {
    a.validate()?;
    b.validate()?;

    if a.len() != b.len() || a.number_of_channels() != b.number_of_channels() {
        return Ok(false);
    }

    Ok(a.channels().zip(b.channels()).all(|(x, y)| x == y))
}

/// Check a chain of buffers pairwise: `equal(b[0], b[1]) && equal(b[1], b[2]) ...`
///
/// # Errors
/// `InvalidArgument` if fewer than two buffers are given
pub fn equal_all<T: Sample>(buffers: &[&AudioBuffer<T>]) -> Result<bool> {
    if buffers.len() < 2 {
        return Err(BufferError::invalid(format!(
            "equality needs at least two buffers, got {}",
            buffers.len()
        )));
    }

    for pair in buffers.windows(2) {
        if !equal(pair[0], pair[1])? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Fold samples in `range`, all of channel 0 first, then channel 1, and so on
///
/// The callback receives `(accumulator, sample, index, channel, channel_data)`.
///
/// # Example
/// ```
/// use audio_buffer_utils::{create, reduce};
///
/// let buffer = create::<f32>(&[1.0, 2.0, 3.0, 4.0], Some(2), None).unwrap();
/// let sum = reduce(&buffer, |acc, s, _, _, _| acc + s, 0.0, ..).unwrap();
/// assert_eq!(sum, 10.0);
/// ```
pub fn reduce<T, A, F>(
    buffer: &AudioBuffer<T>,
    mut f: F,
    initial: A,
    range: impl Into<SampleRange>,
) -> Result<A>
where
    T: Sample,
    F: FnMut(A, T, usize, usize, &[T]) -> A,
{
    buffer.validate()?;
    let range = range.into().resolve(buffer.len());

    let mut acc = initial;
    for (ch, data) in buffer.channels().enumerate() {
        for i in range.clone() {
            acc = f(acc, data[i], i, ch, data);
        }
    }
    Ok(acc)
}

/// Per-channel arithmetic mean over `range`
///
/// Returns an empty vector when the range is empty.
pub fn mean<T: Sample>(buffer: &AudioBuffer<T>, range: impl Into<SampleRange>) -> Result<Vec<T>> {
    buffer.validate()?;
    let range = range.into().resolve(buffer.len());

    if range.is_empty() {
        return Ok(Vec::new());
    }

    let count = range.len() as f64;
    Ok(buffer
        .channels()
        .map(|data| {
            let sum: f64 = data[range.clone()].iter().map(|&s| s.as_f64()).sum();
            T::from_f64(sum / count)
        })
        .collect())
}

/// Peak absolute sample value across all channels within `range`
pub fn peak<T: Sample>(buffer: &AudioBuffer<T>, range: impl Into<SampleRange>) -> Result<T> {
    reduce(buffer, |max, s, _, _, _| max.max(s.abs()), T::zero(), range)
}

/// Memory footprint of the sample data in bytes
pub fn size<T: Sample>(buffer: &AudioBuffer<T>) -> Result<usize> {
    buffer.validate()?;
    Ok(buffer.number_of_channels() * bytes_per_sample::<T>() * buffer.len())
}

/// Copy every channel out into fresh arrays
pub fn data<T: Sample>(buffer: &AudioBuffer<T>) -> Result<Vec<Vec<T>>> {
    let mut out = Vec::with_capacity(buffer.number_of_channels());
    data_into(buffer, &mut out)?;
    Ok(out)
}

/// Copy every channel into `out[channel]`
///
/// An existing entry at least as long as the buffer is overwritten in place
/// (any extra tail is left alone); a shorter or missing entry is replaced by
/// a fresh copy. Entries past the buffer's channel count are untouched.
pub fn data_into<'o, T: Sample>(
    buffer: &AudioBuffer<T>,
    out: &'o mut Vec<Vec<T>>,
) -> Result<&'o mut Vec<Vec<T>>> {
    buffer.validate()?;

    for (ch, data) in buffer.channels().enumerate() {
        match out.get_mut(ch) {
            Some(existing) if existing.len() >= data.len() => {
                existing[..data.len()].copy_from_slice(data);
            }
            Some(existing) => *existing = data.to_vec(),
            None => out.push(data.to_vec()),
        }
    }

    Ok(out)
}
