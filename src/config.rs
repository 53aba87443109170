//! Construction defaults
//!
//! [`BufferConfig`] supplies the channel count and sample rate used by
//! [`create`](crate::create) when the caller leaves them out.

use serde::{Deserialize, Serialize};

use crate::error::{BufferError, Result};

/// Sample rate used when none is given (44.1kHz)
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Channel count used when none is given (stereo)
pub const DEFAULT_CHANNELS: usize = 2;

/// Defaults applied by the buffer factory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferConfig {
    /// Sample rate in Hz for buffers created without an explicit rate
    pub sample_rate: u32,
    /// Channel count for buffers created from a length or flat samples
    pub channels: usize,
}

impl Default for BufferConfig {
    fn default() -> Self {
        BufferConfig {
            sample_rate: DEFAULT_SAMPLE_RATE,
            channels: DEFAULT_CHANNELS,
        }
    }
}

impl BufferConfig {
    /// Create a config with the given sample rate and channel count
    pub fn new(sample_rate: u32, channels: usize) -> Self {
        BufferConfig {
            sample_rate,
            channels,
        }
    }

    /// CD quality: 44.1kHz stereo
    pub fn cd_quality() -> Self {
        BufferConfig::new(44100, 2)
    }

    /// Studio: 48kHz stereo
    pub fn studio() -> Self {
        BufferConfig::new(48000, 2)
    }

    /// Mono variant of this config
    pub fn mono(self) -> Self {
        BufferConfig {
            channels: 1,
            ..self
        }
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    /// * `Config` - if the document is not valid JSON for this struct
    /// * `InvalidArgument` - if the sample rate is zero
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BufferConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject a zero sample rate
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(BufferError::invalid("sample rate must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BufferConfig::default();
        assert_eq!(config.sample_rate, 44100);
        assert_eq!(config.channels, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        assert_eq!(BufferConfig::studio().sample_rate, 48000);
        assert_eq!(BufferConfig::cd_quality().mono().channels, 1);
    }

    #[test]
    fn test_from_json_partial() {
        let config = BufferConfig::from_json(r#"{ "sample_rate": 96000 }"#).unwrap();
        assert_eq!(config.sample_rate, 96000);
        assert_eq!(config.channels, DEFAULT_CHANNELS);
    }

    #[test]
    fn test_from_json_rejects_zero_rate() {
        let err = BufferConfig::from_json(r#"{ "sample_rate": 0 }"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_from_json_malformed() {
        let err = BufferConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, BufferError::Config(_)));
    }
}
