//! Aliasing sub-buffer views
//!
//! A [`SubBuffer`] borrows its parent mutably and exposes a sample window and
//! an optional channel selection. Unlike every other operation in this crate
//! it copies nothing: writes through the view land in the parent buffer.

use crate::buffer::audio_buffer::AudioBuffer;
use crate::buffer::range::SampleRange;
use crate::buffer::sample::Sample;
use crate::error::{BufferError, Result};

/// Window into another buffer's storage
#[derive(Debug)]
pub struct SubBuffer<'a, T: Sample> {
    parent: &'a mut AudioBuffer<T>,
    start: usize,
    end: usize,
    /// Parent channel index for each view channel
    channel_map: Vec<usize>,
}

/// Create a view over `range` of `buffer`, restricted to `channels` if given
///
/// `channels` may select a subset of channels, reorder them, or repeat one.
///
/// # Errors
/// `InvalidArgument` if a channel index is out of range
///
/// # Example
/// ```
/// use audio_buffer_utils::{create, subbuffer, SampleRange};
///
/// let mut buffer = create::<f32>(&[0.0, 0.0, 0.0, 0.0], Some(1), None).unwrap();
/// {
///     let mut view = subbuffer(&mut buffer, SampleRange::new(1, 3), None).unwrap();
///     view.channel_mut(0).fill(1.0);
/// }
/// assert_eq!(buffer.channel(0), &[0.0, 1.0, 1.0, 0.0]);
/// ```
pub fn subbuffer<'a, T: Sample>(
    buffer: &'a mut AudioBuffer<T>,
    range: impl Into<SampleRange>,
    channels: Option<&[usize]>,
) -> Result<SubBuffer<'a, T>> {
    buffer.validate()?;

    let range = range.into().resolve(buffer.len());
    let channel_map = match channels {
        Some(selection) => {
            if let Some(&bad) = selection
                .iter()
                .find(|&&ch| ch >= buffer.number_of_channels())
            {
                return Err(BufferError::invalid(format!(
                    "channel {} out of range for a {}-channel buffer",
                    bad,
                    buffer.number_of_channels()
                )));
            }
            selection.to_vec()
        }
        None => (0..buffer.number_of_channels()).collect(),
    };

    Ok(SubBuffer {
        parent: buffer,
        start: range.start,
        end: range.end,
        channel_map,
    })
}

impl<'a, T: Sample> SubBuffer<'a, T> {
    /// Number of channels visible through the view
    pub fn number_of_channels(&self) -> usize {
        self.channel_map.len()
    }

    /// Number of samples per channel in the view
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the view spans no samples
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sample rate of the parent buffer
    pub fn sample_rate(&self) -> u32 {
        self.parent.sample_rate()
    }

    /// Offset of the view's first sample within the parent
    pub fn offset(&self) -> usize {
        self.start
    }

    /// Read one view channel
    ///
    /// # Panics
    /// Panics if `index` is not below [`number_of_channels`](Self::number_of_channels)
    pub fn channel(&self, index: usize) -> &[T] {
        &self.parent.channel(self.channel_map[index])[self.start..self.end]
    }

    /// Write one view channel; changes are visible in the parent
    ///
    /// # Panics
    /// Panics if `index` is not below [`number_of_channels`](Self::number_of_channels)
    pub fn channel_mut(&mut self, index: usize) -> &mut [T] {
        let (start, end) = (self.start, self.end);
        &mut self.parent.channel_mut(self.channel_map[index])[start..end]
    }

    /// Copy the visible samples into a new, independent buffer
    pub fn to_buffer(&self) -> Result<AudioBuffer<T>> {
        let channels = (0..self.number_of_channels())
            .map(|ch| self.channel(ch).to_vec())
            .collect();
        AudioBuffer::from_channels(channels, self.sample_rate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_buffer() -> AudioBuffer {
        AudioBuffer::from_channels(
            vec![vec![0.0, 1.0, 2.0, 3.0], vec![10.0, 11.0, 12.0, 13.0]],
            44100,
        )
        .unwrap()
    }

    #[test]
    fn test_view_shape() {
        let mut buffer = ramp_buffer();
        let view = subbuffer(&mut buffer, SampleRange::from_start(-3), None).unwrap();
        assert_eq!(view.number_of_channels(), 2);
        assert_eq!(view.len(), 3);
        assert_eq!(view.offset(), 1);
        assert_eq!(view.channel(1), &[11.0, 12.0, 13.0]);
    }

    #[test]
    fn test_view_writes_propagate() {
        let mut buffer = ramp_buffer();
        {
            let mut view = subbuffer(&mut buffer, SampleRange::new(1, 3), Some(&[1][..])).unwrap();
            assert_eq!(view.number_of_channels(), 1);
            view.channel_mut(0)[0] = -1.0;
        }
        assert_eq!(buffer.channel(1), &[10.0, -1.0, 12.0, 13.0]);
        assert_eq!(buffer.channel(0), &[0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_view_reorders_channels() {
        let mut buffer = ramp_buffer();
        let view = subbuffer(&mut buffer, .., Some(&[1, 0, 1][..])).unwrap();
        assert_eq!(view.number_of_channels(), 3);
        assert_eq!(view.channel(0)[0], 10.0);
        assert_eq!(view.channel(1)[0], 0.0);
        assert_eq!(view.channel(2)[0], 10.0);
    }

    #[test]
    fn test_view_rejects_bad_channel() {
        let mut buffer = ramp_buffer();
        let result = subbuffer(&mut buffer, .., Some(&[2][..]));
        assert!(matches!(result, Err(BufferError::InvalidArgument { .. })));
    }

    #[test]
    fn test_view_to_buffer_is_independent() {
        let mut buffer = ramp_buffer();
        let mut owned = subbuffer(&mut buffer, SampleRange::new(2, 4), None)
            .unwrap()
            .to_buffer()
            .unwrap();
        owned.channel_mut(0)[0] = 99.0;
        assert_eq!(owned.len(), 2);
        assert_eq!(buffer.channel(0)[2], 2.0);
    }
}
