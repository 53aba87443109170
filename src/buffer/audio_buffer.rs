//! Audio Buffer
//!
//! The buffer type every operation in this crate works on: a set of
//! equal-length, independently owned channel arrays tagged with a sample rate.

use serde::{Deserialize, Deserializer, Serialize};

use crate::buffer::sample::Sample;
use crate::config::DEFAULT_SAMPLE_RATE;
use crate::error::{BufferError, Result};

// ============================================================================
// Audio Buffer
// ============================================================================

/// Multi-channel audio buffer
///
/// Stores audio as non-interleaved (planar) samples. Each channel is a
/// separate `Vec<T>` and all channels share one length.
///
/// # Example
/// ```
/// use audio_buffer_utils::AudioBuffer;
///
/// // 1 second of stereo silence
/// let buffer = AudioBuffer::<f32>::silence(2, 44100, 44100).unwrap();
/// assert_eq!(buffer.number_of_channels(), 2);
/// assert_eq!(buffer.len(), 44100);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct AudioBuffer<T: Sample = f32> {
    /// Sample data: outer Vec is channels, inner Vec is samples
    channels: Vec<Vec<T>>,
    /// Sample rate in Hz, informational only
    sample_rate: u32,
}

impl<T: Sample> AudioBuffer<T> {
    /// Create a zero-filled buffer
    ///
    /// # Errors
    /// `InvalidArgument` if `sample_rate` is zero
    pub fn silence(number_of_channels: usize, length: usize, sample_rate: u32) -> Result<Self> {
        Self::from_channels(vec![vec![T::zero(); length]; number_of_channels], sample_rate)
    }

    /// Create a buffer from per-channel sample arrays
    ///
    /// # Errors
    /// `InvalidArgument` if the channels differ in length or `sample_rate`
    /// is zero
    pub fn from_channels(channels: Vec<Vec<T>>, sample_rate: u32) -> Result<Self> {
        let buffer = Self {
            channels,
            sample_rate,
        };
        buffer.validate()?;
        Ok(buffer)
    }

    /// Create a buffer from interleaved sample data (L, R, L, R, ... for stereo)
    ///
    /// # Errors
    /// `InvalidArgument` if the data length is not a multiple of
    /// `number_of_channels`, or the channel count is zero while data is present
    pub fn from_interleaved(
        interleaved: &[T],
        number_of_channels: usize,
        sample_rate: u32,
    ) -> Result<Self> {
        if number_of_channels == 0 {
            if interleaved.is_empty() {
                return Self::from_channels(Vec::new(), sample_rate);
            }
            return Err(BufferError::invalid(
                "cannot split interleaved samples across zero channels",
            ));
        }

        if interleaved.len() % number_of_channels != 0 {
            return Err(BufferError::invalid(format!(
                "interleaved data length {} is not divisible by channel count {}",
                interleaved.len(),
                number_of_channels
            )));
        }

        let length = interleaved.len() / number_of_channels;
        let mut channels = vec![Vec::with_capacity(length); number_of_channels];

        for frame in interleaved.chunks_exact(number_of_channels) {
            for (ch, &sample) in frame.iter().enumerate() {
                channels[ch].push(sample);
            }
        }

        Self::from_channels(channels, sample_rate)
    }

    /// Convert the buffer to interleaved format
    pub fn to_interleaved(&self) -> Vec<T> {
        let mut interleaved = Vec::with_capacity(self.number_of_channels() * self.len());

        for index in 0..self.len() {
            for channel in &self.channels {
                interleaved.push(channel[index]);
            }
        }

        interleaved
    }

    /// Check the buffer shape: equal channel lengths and a positive rate
    ///
    /// Every public operation calls this on its buffer arguments before
    /// touching any samples.
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(BufferError::invalid("sample rate must be positive"));
        }

        let length = self.len();
        if let Some((index, channel)) = self
            .channels
            .iter()
            .enumerate()
            .find(|(_, ch)| ch.len() != length)
        {
            return Err(BufferError::invalid(format!(
                "channel {} has {} samples, expected {}",
                index,
                channel.len(),
                length
            )));
        }

        Ok(())
    }

    /// Number of channels
    #[inline]
    pub fn number_of_channels(&self) -> usize {
        self.channels.len()
    }

    /// Number of samples per channel
    #[inline]
    pub fn len(&self) -> usize {
        self.channels.first().map(|ch| ch.len()).unwrap_or(0)
    }

    /// Check if the buffer holds no samples
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sample rate in Hz
    #[inline]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Replace the sample rate tag. No resampling is performed.
    ///
    /// # Errors
    /// `InvalidArgument` if `sample_rate` is zero
    pub fn set_sample_rate(&mut self, sample_rate: u32) -> Result<()> {
        if sample_rate == 0 {
            return Err(BufferError::invalid("sample rate must be positive"));
        }
        self.sample_rate = sample_rate;
        Ok(())
    }

    /// Duration in seconds
    #[inline]
    pub fn duration_secs(&self) -> f64 {
        self.len() as f64 / self.sample_rate as f64
    }

    /// Immutable access to one channel
    ///
    /// # Panics
    /// Panics if the channel index is out of bounds
    #[inline]
    pub fn channel(&self, index: usize) -> &[T] {
        &self.channels[index]
    }

    /// Mutable access to one channel
    ///
    /// The slice cannot be resized, so the equal-length invariant holds.
    ///
    /// # Panics
    /// Panics if the channel index is out of bounds
    #[inline]
    pub fn channel_mut(&mut self, index: usize) -> &mut [T] {
        &mut self.channels[index]
    }

    /// Iterate over all channels
    pub fn channels(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.channels.iter().map(|ch| ch.as_slice())
    }

    /// Iterate mutably over all channels
    pub fn channels_mut(&mut self) -> impl Iterator<Item = &mut [T]> + '_ {
        self.channels.iter_mut().map(|ch| ch.as_mut_slice())
    }

    /// Get a sample, or `None` if either index is out of bounds
    #[inline]
    pub fn get_sample(&self, channel: usize, index: usize) -> Option<T> {
        self.channels
            .get(channel)
            .and_then(|ch| ch.get(index).copied())
    }

    /// Set a sample; returns false if either index is out of bounds
    #[inline]
    pub fn set_sample(&mut self, channel: usize, index: usize, value: T) -> bool {
        if let Some(sample) = self
            .channels
            .get_mut(channel)
            .and_then(|ch| ch.get_mut(index))
        {
            *sample = value;
            return true;
        }
        false
    }

    /// Take ownership of the channel arrays
    pub fn into_channels(self) -> Vec<Vec<T>> {
        self.channels
    }

    /// Check if all samples are finite (not NaN or Infinity)
    pub fn is_finite(&self) -> bool {
        self.channels
            .iter()
            .flat_map(|ch| ch.iter())
            .all(|s| s.is_finite())
    }
}

impl<T: Sample> Default for AudioBuffer<T> {
    fn default() -> Self {
        Self {
            channels: Vec::new(),
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

/// Wire form of a buffer, checked before it becomes an [`AudioBuffer`]
#[derive(Deserialize)]
struct BufferParts<T> {
    channels: Vec<Vec<T>>,
    sample_rate: u32,
}

impl<'de, T: Sample> Deserialize<'de> for AudioBuffer<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let parts = BufferParts::<T>::deserialize(deserializer)?;
        AudioBuffer::from_channels(parts.channels, parts.sample_rate)
            .map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
