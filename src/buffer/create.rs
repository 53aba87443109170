//! Construction and copying
//!
//! [`create`] is the single factory: it accepts a length, flat samples, an
//! existing buffer or per-channel arrays. [`shallow`], [`clone`] and [`copy`]
//! cover pre-allocation and deep copies.

use tracing::trace;

use crate::buffer::audio_buffer::AudioBuffer;
use crate::buffer::sample::Sample;
use crate::config::BufferConfig;
use crate::error::{BufferError, Result};

/// What a buffer is built from
#[derive(Debug, Clone)]
pub enum Source<'a, T: Sample> {
    /// Zero-filled buffer of this many samples per channel
    Length(usize),
    /// Flat planar data: channel 0's samples, then channel 1's, and so on
    Samples(&'a [T]),
    /// Deep copy of an existing buffer
    Buffer(&'a AudioBuffer<T>),
    /// One array per channel
    Channels(Vec<Vec<T>>),
}

impl<'a, T: Sample> From<usize> for Source<'a, T> {
    fn from(length: usize) -> Self {
        Source::Length(length)
    }
}

impl<'a, T: Sample> From<&'a [T]> for Source<'a, T> {
    fn from(samples: &'a [T]) -> Self {
        Source::Samples(samples)
    }
}

impl<'a, T: Sample, const N: usize> From<&'a [T; N]> for Source<'a, T> {
    fn from(samples: &'a [T; N]) -> Self {
        Source::Samples(samples.as_slice())
    }
}

impl<'a, T: Sample> From<&'a Vec<T>> for Source<'a, T> {
    fn from(samples: &'a Vec<T>) -> Self {
        Source::Samples(samples.as_slice())
    }
}

impl<'a, T: Sample> From<&'a AudioBuffer<T>> for Source<'a, T> {
    fn from(buffer: &'a AudioBuffer<T>) -> Self {
        Source::Buffer(buffer)
    }
}

impl<'a, T: Sample> From<Vec<Vec<T>>> for Source<'a, T> {
    fn from(channels: Vec<Vec<T>>) -> Self {
        Source::Channels(channels)
    }
}

/// Build a buffer using the default [`BufferConfig`]
///
/// # Example
/// ```
/// use audio_buffer_utils::create;
///
/// // Two channels of two samples each
/// let buffer = create::<f32>(&[1.0, 0.0, -1.0, 0.0], Some(2), None).unwrap();
/// assert_eq!(buffer.channel(0), &[1.0, 0.0]);
/// assert_eq!(buffer.channel(1), &[-1.0, 0.0]);
/// ```
pub fn create<'a, T: Sample>(
    source: impl Into<Source<'a, T>>,
    channels: Option<usize>,
    sample_rate: Option<u32>,
) -> Result<AudioBuffer<T>> {
    create_with_config(&BufferConfig::default(), source, channels, sample_rate)
}

/// Build a buffer, taking missing channel count and rate from `config`
///
/// # Errors
/// `InvalidArgument` when:
/// * flat data is non-empty and the channel count is zero
/// * per-channel arrays differ in length
/// * an explicit channel count disagrees with a buffer or channel-array source
/// * the resulting sample rate is zero
pub fn create_with_config<'a, T: Sample>(
    config: &BufferConfig,
    source: impl Into<Source<'a, T>>,
    channels: Option<usize>,
    sample_rate: Option<u32>,
) -> Result<AudioBuffer<T>> {
    let source = source.into();

    let buffer = match source {
        Source::Length(length) => {
            let channels = channels.unwrap_or(config.channels);
            AudioBuffer::silence(channels, length, sample_rate.unwrap_or(config.sample_rate))?
        }
        Source::Samples(samples) => {
            let channels = channels.unwrap_or(config.channels);
            AudioBuffer::from_channels(
                split_planar(samples, channels)?,
                sample_rate.unwrap_or(config.sample_rate),
            )?
        }
        Source::Buffer(buffer) => {
            buffer.validate()?;
            check_channel_count(channels, buffer.number_of_channels())?;
            let mut copy = buffer.clone();
            if let Some(rate) = sample_rate {
                copy.set_sample_rate(rate)?;
            }
            copy
        }
        Source::Channels(data) => {
            check_channel_count(channels, data.len())?;
            AudioBuffer::from_channels(data, sample_rate.unwrap_or(config.sample_rate))?
        }
    };

    trace!(
        channels = buffer.number_of_channels(),
        length = buffer.len(),
        sample_rate = buffer.sample_rate(),
        "created buffer"
    );

    Ok(buffer)
}

/// Split flat planar data into `channels` equal arrays, dropping any
/// trailing samples that do not fill a whole channel
fn split_planar<T: Sample>(samples: &[T], channels: usize) -> Result<Vec<Vec<T>>> {
    if channels == 0 {
        if samples.is_empty() {
            return Ok(Vec::new());
        }
        return Err(BufferError::invalid("cannot split samples across zero channels"));
    }

    let length = samples.len() / channels;
    if samples.len() % channels != 0 {
        trace!(
            dropped = samples.len() % channels,
            "trailing samples do not fill a channel"
        );
    }

    Ok((0..channels)
        .map(|ch| samples[ch * length..(ch + 1) * length].to_vec())
        .collect())
}

fn check_channel_count(requested: Option<usize>, actual: usize) -> Result<()> {
    match requested {
        Some(requested) if requested != actual => Err(BufferError::invalid(format!(
            "requested {} channels but the source has {}",
            requested, actual
        ))),
        _ => Ok(()),
    }
}

/// New zeroed buffer with the same channel count, length and rate
pub fn shallow<T: Sample>(buffer: &AudioBuffer<T>) -> Result<AudioBuffer<T>> {
    buffer.validate()?;
    AudioBuffer::silence(buffer.number_of_channels(), buffer.len(), buffer.sample_rate())
}

/// Deep copy with independent storage
pub fn clone<T: Sample>(buffer: &AudioBuffer<T>) -> Result<AudioBuffer<T>> {
    let mut target = shallow(buffer)?;
    copy(buffer, &mut target, 0)?;
    Ok(target)
}

/// Copy samples of `from` into `to`, starting at `offset` in `to`
///
/// Only the channels both buffers have are copied; `to` is never resized.
///
/// # Errors
/// `InvalidArgument` if `from` does not fit in `to` after `offset`. Nothing
/// is written in that case.
pub fn copy<'t, T: Sample>(
    from: &AudioBuffer<T>,
    to: &'t mut AudioBuffer<T>,
    offset: usize,
) -> Result<&'t mut AudioBuffer<T>> {
    from.validate()?;
    to.validate()?;

    let end = offset.saturating_add(from.len());
    if end > to.len() {
        return Err(BufferError::invalid(format!(
            "{} samples at offset {} do not fit in a buffer of length {}",
            from.len(),
            offset,
            to.len()
        )));
    }

    for (src, dst) in from.channels().zip(to.channels_mut()) {
        dst[offset..end].copy_from_slice(src);
    }

    Ok(to)
}
