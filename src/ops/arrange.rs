//! Sample arrangement
//!
//! Operations that move samples around, cut buffers apart or join them:
//! reverse, slice, map, concat, resize, pad, rotate, shift and repeat.

use tracing::{debug, warn};

use crate::buffer::{copy, AudioBuffer, Sample, SampleRange};
use crate::error::{BufferError, Result};
use crate::ops::fill::fill;

// ============================================================================
// Reversal
// ============================================================================

/// Reverse sample order within `range` in every channel
pub fn reverse<T: Sample>(
    buffer: &mut AudioBuffer<T>,
    range: impl Into<SampleRange>,
) -> Result<&mut AudioBuffer<T>> {
    buffer.validate()?;
    let range = range.into().resolve(buffer.len());

    for channel in buffer.channels_mut() {
        channel[range.clone()].reverse();
    }

    Ok(buffer)
}

/// Copy `source` into `target`, then reverse `range` of `target`
///
/// # Errors
/// `InvalidArgument` if `source` does not fit in `target`
pub fn reverse_into<'t, T: Sample>(
    source: &AudioBuffer<T>,
    target: &'t mut AudioBuffer<T>,
    range: impl Into<SampleRange>,
) -> Result<&'t mut AudioBuffer<T>> {
    copy(source, target, 0)?;
    reverse(target, range)
}

// ============================================================================
// Slicing and mapping
// ============================================================================

/// New buffer holding an independent copy of `range`
///
/// Channel count and sample rate are kept even when the slice is empty.
pub fn slice<T: Sample>(
    buffer: &AudioBuffer<T>,
    range: impl Into<SampleRange>,
) -> Result<AudioBuffer<T>> {
    buffer.validate()?;
    let range = range.into().resolve(buffer.len());

    let channels: Vec<Vec<T>> = buffer
        .channels()
        .map(|data| data[range.clone()].to_vec())
        .collect();
    AudioBuffer::from_channels(channels, buffer.sample_rate())
}

/// New buffer of `f(sample, index, channel, channel_data)`; `buffer` is untouched
pub fn map<T, F>(buffer: &AudioBuffer<T>, mut f: F) -> Result<AudioBuffer<T>>
where
    T: Sample,
    F: FnMut(T, usize, usize, &[T]) -> T,
{
    buffer.validate()?;

    let channels: Vec<Vec<T>> = buffer
        .channels()
        .enumerate()
        .map(|(ch, data)| {
            data.iter()
                .enumerate()
                .map(|(i, &sample)| f(sample, i, ch, data))
                .collect()
        })
        .collect();
    AudioBuffer::from_channels(channels, buffer.sample_rate())
}

// ============================================================================
// Concatenation
// ============================================================================

/// Join two buffers end to end
///
/// See [`concat_all`] for how channel counts and sample rates are merged.
pub fn concat<T: Sample>(a: &AudioBuffer<T>, b: &AudioBuffer<T>) -> Result<AudioBuffer<T>> {
    concat_all(&[a, b])
}

/// Join buffers end to end, in order
///
/// The result has the largest channel count and the highest sample rate of
/// the inputs and the sum of their lengths. A buffer with fewer channels
/// contributes silence to the channels it lacks. Rates are not converted.
///
/// # Errors
/// `InvalidArgument` if `buffers` is empty
pub fn concat_all<T: Sample>(buffers: &[&AudioBuffer<T>]) -> Result<AudioBuffer<T>> {
    if buffers.is_empty() {
        return Err(BufferError::invalid("nothing to concatenate"));
    }
    for buffer in buffers {
        buffer.validate()?;
    }

    let number_of_channels = buffers
        .iter()
        .map(|b| b.number_of_channels())
        .max()
        .unwrap_or(0);
    let length: usize = buffers.iter().map(|b| b.len()).sum();
    let sample_rate = buffers.iter().map(|b| b.sample_rate()).max().unwrap_or(0);

    if buffers.iter().any(|b| b.sample_rate() != sample_rate) {
        warn!(
            sample_rate,
            "concatenating buffers with different sample rates without resampling"
        );
    }

    let mut channels = vec![Vec::with_capacity(length); number_of_channels];
    for buffer in buffers {
        for (ch, out) in channels.iter_mut().enumerate() {
            if ch < buffer.number_of_channels() {
                out.extend_from_slice(buffer.channel(ch));
            } else {
                out.resize(out.len() + buffer.len(), T::zero());
            }
        }
    }

    AudioBuffer::from_channels(channels, sample_rate)
}

// ============================================================================
// Resizing and padding
// ============================================================================

/// Truncate or zero-extend to `length` samples
pub fn resize<T: Sample>(buffer: &AudioBuffer<T>, length: usize) -> Result<AudioBuffer<T>> {
    buffer.validate()?;

    if length < buffer.len() {
        return slice(buffer, SampleRange::to_end(length as isize));
    }

    let tail = AudioBuffer::silence(
        buffer.number_of_channels(),
        length - buffer.len(),
        buffer.sample_rate(),
    )?;
    concat(buffer, &tail)
}

/// One positional argument of [`pad`]: either the buffer or the target length
#[derive(Debug, Clone, Copy)]
pub enum PadArg<'a, T: Sample> {
    Length(usize),
    Buffer(&'a AudioBuffer<T>),
}

impl<'a, T: Sample> From<usize> for PadArg<'a, T> {
    fn from(length: usize) -> Self {
        PadArg::Length(length)
    }
}

impl<'a, T: Sample> From<&'a AudioBuffer<T>> for PadArg<'a, T> {
    fn from(buffer: &'a AudioBuffer<T>) -> Self {
        PadArg::Buffer(buffer)
    }
}

/// Pad to `length`, choosing the side from the argument order
///
/// `(length, buffer)` pads on the left, `(buffer, length)` on the right.
///
/// # Errors
/// `InvalidArgument` unless exactly one argument is a buffer
pub fn pad<'a, T: Sample>(
    a: impl Into<PadArg<'a, T>>,
    b: impl Into<PadArg<'a, T>>,
    value: T,
) -> Result<AudioBuffer<T>> {
    match (a.into(), b.into()) {
        (PadArg::Length(length), PadArg::Buffer(buffer)) => pad_left(buffer, length, value),
        (PadArg::Buffer(buffer), PadArg::Length(length)) => pad_right(buffer, length, value),
        _ => Err(BufferError::invalid("pad needs one buffer and one length")),
    }
}

/// Prepend `value` samples until the buffer is `length` long
pub fn pad_left<T: Sample>(
    buffer: &AudioBuffer<T>,
    length: usize,
    value: T,
) -> Result<AudioBuffer<T>> {
    match padding(buffer, length, value)? {
        Some(block) => concat(&block, buffer),
        None => Ok(buffer.clone()),
    }
}

/// Append `value` samples until the buffer is `length` long
pub fn pad_right<T: Sample>(
    buffer: &AudioBuffer<T>,
    length: usize,
    value: T,
) -> Result<AudioBuffer<T>> {
    match padding(buffer, length, value)? {
        Some(block) => concat(buffer, &block),
        None => Ok(buffer.clone()),
    }
}

/// The `value`-filled block needed to reach `length`, if any
fn padding<T: Sample>(
    buffer: &AudioBuffer<T>,
    length: usize,
    value: T,
) -> Result<Option<AudioBuffer<T>>> {
    buffer.validate()?;

    if length <= buffer.len() {
        return Ok(None);
    }

    let mut block = AudioBuffer::silence(
        buffer.number_of_channels(),
        length - buffer.len(),
        buffer.sample_rate(),
    )?;
    if value != T::zero() {
        fill(&mut block, value, ..)?;
    }
    Ok(Some(block))
}

// ============================================================================
// Rotation and shifting
// ============================================================================

/// Circular shift; positive offsets move samples toward higher indices
pub fn rotate<T: Sample>(
    buffer: &mut AudioBuffer<T>,
    offset: isize,
) -> Result<&mut AudioBuffer<T>> {
    buffer.validate()?;

    let len = buffer.len();
    if len == 0 {
        return Ok(buffer);
    }

    let steps = offset.rem_euclid(len as isize) as usize;
    for channel in buffer.channels_mut() {
        channel.rotate_right(steps);
    }

    Ok(buffer)
}

/// Linear shift; vacated samples become zero and samples pushed past either
/// end are dropped
pub fn shift<T: Sample>(buffer: &mut AudioBuffer<T>, offset: isize) -> Result<&mut AudioBuffer<T>> {
    buffer.validate()?;

    let len = buffer.len();
    let steps = offset.unsigned_abs().min(len);

    for channel in buffer.channels_mut() {
        if offset > 0 {
            channel.copy_within(..len - steps, steps);
            channel[..steps].fill(T::zero());
        } else if offset < 0 {
            channel.copy_within(steps.., 0);
            channel[len - steps..].fill(T::zero());
        }
    }

    Ok(buffer)
}

// ============================================================================
// Repetition
// ============================================================================

/// Repeat the buffer `times` times
///
/// Zero or negative counts give an empty buffer with the same channel count
/// and rate; a count of one gives an unchanged copy.
pub fn repeat<T: Sample>(buffer: &AudioBuffer<T>, times: isize) -> Result<AudioBuffer<T>> {
    buffer.validate()?;

    match times {
        t if t <= 0 => {
            debug!(times, "repeat count is not positive, returning empty buffer");
            AudioBuffer::silence(buffer.number_of_channels(), 0, buffer.sample_rate())
        }
        1 => Ok(buffer.clone()),
        t => concat_all(&vec![buffer; t as usize]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::create;
    use crate::ops::query::equal;

    fn mono(samples: &[f32]) -> AudioBuffer {
        create(samples, Some(1), None).unwrap()
    }

    fn buffer_of(channels: Vec<Vec<f32>>) -> AudioBuffer {
        AudioBuffer::from_channels(channels, 44100).unwrap()
    }

    // ------------------------------------------------------------------------
    // Reversal
    // ------------------------------------------------------------------------

    #[test]
    fn test_reverse_in_place() {
        let mut buffer = buffer_of(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        reverse(&mut buffer, ..).unwrap();
        assert_eq!(buffer.channel(0), &[3.0, 2.0, 1.0]);
        assert_eq!(buffer.channel(1), &[6.0, 5.0, 4.0]);
    }

    #[test]
    fn test_reverse_window() {
        let mut buffer = mono(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        reverse(&mut buffer, SampleRange::new(1, -1)).unwrap();
        assert_eq!(buffer.channel(0), &[1.0, 4.0, 3.0, 2.0, 5.0]);
    }

    #[test]
    fn test_reverse_into_keeps_source() {
        let source = mono(&[1.0, 2.0, 3.0]);
        let mut target = mono(&[0.0, 0.0, 0.0]);
        reverse_into(&source, &mut target, ..).unwrap();
        assert_eq!(target.channel(0), &[3.0, 2.0, 1.0]);
        assert_eq!(source.channel(0), &[1.0, 2.0, 3.0]);
    }

    // ------------------------------------------------------------------------
    // Slicing and mapping
    // ------------------------------------------------------------------------

    #[test]
    fn test_slice_negative() {
        let buffer = mono(&[1.0, 2.0, 3.0, 4.0]);
        let sliced = slice(&buffer, SampleRange::from_start(-2)).unwrap();
        assert_eq!(sliced.channel(0), &[3.0, 4.0]);
    }

    #[test]
    fn test_slice_empty_keeps_shape() {
        let buffer = create::<f32>(8_usize, Some(3), Some(22050)).unwrap();
        let sliced = slice(&buffer, SampleRange::new(5, 2)).unwrap();
        assert_eq!(sliced.len(), 0);
        assert_eq!(sliced.number_of_channels(), 3);
        assert_eq!(sliced.sample_rate(), 22050);
    }

    #[test]
    fn test_slice_is_independent() {
        let buffer = mono(&[1.0, 2.0, 3.0]);
        let mut sliced = slice(&buffer, ..).unwrap();
        sliced.channel_mut(0)[0] = 0.0;
        assert_eq!(buffer.channel(0)[0], 1.0);
    }

    #[test]
    fn test_map_leaves_source() {
        let buffer = buffer_of(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let mapped = map(&buffer, |s, i, ch, _| s * 10.0 + (i + ch) as f32).unwrap();
        assert_eq!(mapped.channel(0), &[10.0, 21.0]);
        assert_eq!(mapped.channel(1), &[31.0, 42.0]);
        assert_eq!(buffer.channel(0), &[1.0, 2.0]);
    }

    // ------------------------------------------------------------------------
    // Concatenation
    // ------------------------------------------------------------------------

    #[test]
    fn test_concat_fills_missing_channels() {
        let stereo = buffer_of(vec![vec![1.0, 1.0], vec![2.0, 2.0]]);
        let single = mono(&[3.0, 3.0, 3.0]);

        let joined = concat(&single, &stereo).unwrap();
        assert_eq!(joined.number_of_channels(), 2);
        assert_eq!(joined.len(), 5);
        assert_eq!(joined.channel(0), &[3.0, 3.0, 3.0, 1.0, 1.0]);
        assert_eq!(joined.channel(1), &[0.0, 0.0, 0.0, 2.0, 2.0]);
    }

    #[test]
    fn test_concat_takes_max_rate() {
        let a = create::<f32>(2_usize, Some(1), Some(22050)).unwrap();
        let b = create::<f32>(2_usize, Some(1), Some(48000)).unwrap();
        assert_eq!(concat(&a, &b).unwrap().sample_rate(), 48000);
    }

    #[test]
    fn test_concat_all() {
        let a = mono(&[1.0]);
        let b = mono(&[2.0]);
        let c = mono(&[3.0]);
        let joined = concat_all(&[&a, &b, &c]).unwrap();
        assert_eq!(joined.channel(0), &[1.0, 2.0, 3.0]);

        assert!(concat_all::<f32>(&[]).is_err());
    }

    #[test]
    fn test_slice_concat_identity() {
        let buffer = buffer_of(vec![vec![0.1, 0.2, 0.3, 0.4], vec![-0.1, -0.2, -0.3, -0.4]]);
        for k in 0..=buffer.len() as isize {
            let head = slice(&buffer, SampleRange::to_end(k)).unwrap();
            let tail = slice(&buffer, SampleRange::from_start(k)).unwrap();
            assert!(equal(&concat(&head, &tail).unwrap(), &buffer).unwrap(), "split at {}", k);
        }
    }

    // ------------------------------------------------------------------------
    // Resizing and padding
    // ------------------------------------------------------------------------

    #[test]
    fn test_resize_grow_and_shrink() {
        let buffer = buffer_of(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let grown = resize(&buffer, 4).unwrap();
        assert_eq!(grown.channel(0), &[1.0, 2.0, 0.0, 0.0]);
        assert_eq!(grown.channel(1), &[3.0, 4.0, 0.0, 0.0]);

        let back = resize(&grown, 2).unwrap();
        assert!(equal(&back, &buffer).unwrap());
    }

    #[test]
    fn test_resize_keeps_sample_rate() {
        let buffer = create::<f32>(4_usize, Some(1), Some(8000)).unwrap();
        assert_eq!(resize(&buffer, 10).unwrap().sample_rate(), 8000);
    }

    #[test]
    fn test_pad_sides() {
        let buffer = mono(&[1.0, 1.0]);

        let left = pad_left(&buffer, 4, 0.5).unwrap();
        assert_eq!(left.channel(0), &[0.5, 0.5, 1.0, 1.0]);

        let right = pad_right(&buffer, 3, 0.0).unwrap();
        assert_eq!(right.channel(0), &[1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_pad_argument_order() {
        let buffer = mono(&[1.0]);

        let left = pad::<f32>(3_usize, &buffer, 0.0).unwrap();
        assert_eq!(left.channel(0), &[0.0, 0.0, 1.0]);

        let right = pad::<f32>(&buffer, 3_usize, 0.0).unwrap();
        assert_eq!(right.channel(0), &[1.0, 0.0, 0.0]);

        assert!(pad::<f32>(3_usize, 4_usize, 0.0).is_err());
        assert!(pad::<f32>(&buffer, &buffer, 0.0).is_err());
    }

    #[test]
    fn test_pad_shorter_target_is_noop() {
        let buffer = mono(&[1.0, 2.0, 3.0]);
        let padded = pad_right(&buffer, 2, 0.0).unwrap();
        assert!(equal(&padded, &buffer).unwrap());
    }

    // ------------------------------------------------------------------------
    // Rotation and shifting
    // ------------------------------------------------------------------------

    #[test]
    fn test_rotate() {
        let mut buffer = mono(&[0.0, 0.0, 1.0, 1.0, 0.0, 0.0, -1.0, -1.0]);
        rotate(&mut buffer, 2).unwrap();
        assert_eq!(buffer.channel(0), &[-1.0, -1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_rotate_negative_and_wrapping() {
        let mut buffer = mono(&[1.0, 2.0, 3.0, 4.0]);
        rotate(&mut buffer, -1).unwrap();
        assert_eq!(buffer.channel(0), &[2.0, 3.0, 4.0, 1.0]);

        rotate(&mut buffer, 9).unwrap();
        assert_eq!(buffer.channel(0), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_shift() {
        let mut buffer = mono(&[0.0, 0.0, 1.0, 1.0, 0.0, 0.0, -1.0, -1.0]);
        shift(&mut buffer, 2).unwrap();
        assert_eq!(buffer.channel(0), &[0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_shift_negative_and_overflow() {
        let mut buffer = mono(&[1.0, 2.0, 3.0, 4.0]);
        shift(&mut buffer, -1).unwrap();
        assert_eq!(buffer.channel(0), &[2.0, 3.0, 4.0, 0.0]);

        shift(&mut buffer, 10).unwrap();
        assert_eq!(buffer.channel(0), &[0.0; 4]);
    }

    // ------------------------------------------------------------------------
    // Repetition
    // ------------------------------------------------------------------------

    #[test]
    fn test_repeat() {
        let buffer = buffer_of(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);

        let empty = repeat(&buffer, 0).unwrap();
        assert_eq!(empty.len(), 0);
        assert_eq!(empty.number_of_channels(), 2);

        assert!(equal(&repeat(&buffer, 1).unwrap(), &buffer).unwrap());

        let tripled = repeat(&buffer, 3).unwrap();
        assert_eq!(tripled.channel(1), &[3.0, 4.0, 3.0, 4.0, 3.0, 4.0]);
        assert_eq!(repeat(&buffer, -2).unwrap().len(), 0);
    }
}
