/// Canonical decoded-audio representation
use crate::error::{MorphError, Result};
use crate::types::conversion::InterpolationMethod;

/// Decoded PCM audio held as deinterleaved per-channel sample sequences.
///
/// Samples are signed integers at the source container's bit depth. Every
/// channel always holds the same number of samples; decode, resampling and
/// channel selection all preserve that invariant, and it is enforced at
/// construction. After construction the buffer can only change through
/// [`AudioData::apply_resample`] and [`AudioData::apply_channel_selection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioData {
    pub(crate) channel_count: usize,
    pub(crate) sample_rate: u32,
    pub(crate) bit_depth: u16,
    pub(crate) channels: Vec<Vec<i32>>,
}

impl AudioData {
    /// Create a buffer from deinterleaved channel data.
    ///
    /// # Errors
    /// Returns `InvalidBuffer` if `channels.len()` does not match
    /// `channel_count`, if any two channels differ in length, or if
    /// `channel_count`, `sample_rate` or `bit_depth` is zero.
    pub fn new(
        channel_count: usize,
        sample_rate: u32,
        bit_depth: u16,
        channels: Vec<Vec<i32>>,
    ) -> Result<Self> {
        if channel_count == 0 {
            return Err(MorphError::invalid_buffer("channel count must be positive"));
        }
        if sample_rate == 0 {
            return Err(MorphError::invalid_buffer("sample rate must be positive"));
        }
        if bit_depth == 0 {
            return Err(MorphError::invalid_buffer("bit depth must be positive"));
        }
        if channels.len() != channel_count {
            return Err(MorphError::invalid_buffer(format!(
                "expected {} channel(s), got {}",
                channel_count,
                channels.len()
            )));
        }
        let sample_count = channels[0].len();
        for (index, channel) in channels.iter().enumerate() {
            if channel.len() != sample_count {
                return Err(MorphError::invalid_buffer(format!(
                    "channel {} has {} sample(s), channel 0 has {}",
                    index,
                    channel.len(),
                    sample_count
                )));
            }
        }
        Ok(Self {
            channel_count,
            sample_rate,
            bit_depth,
            channels,
        })
    }

    /// Number of channels
    pub fn channel_count(&self) -> usize {
        self.channel_count
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Source precision in bits (informational; used to scale amplitude
    /// during format conversion, not to clamp storage)
    pub fn bit_depth(&self) -> u16 {
        self.bit_depth
    }

    /// Number of samples per channel
    pub fn sample_count(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    /// Duration in seconds, derived from sample count and rate
    pub fn duration_seconds(&self) -> f64 {
        self.sample_count() as f64 / f64::from(self.sample_rate)
    }

    /// Samples of a single channel
    ///
    /// # Panics
    /// Panics if `index >= channel_count`; use [`AudioData::channel_count`]
    /// to stay in range.
    pub fn channel(&self, index: usize) -> &[i32] {
        &self.channels[index]
    }

    /// All channels, deinterleaved
    pub fn channels(&self) -> &[Vec<i32>] {
        &self.channels
    }

    /// Project the buffer down to the given source channels, in order.
    ///
    /// Each output channel is a direct copy of the source channel at the
    /// corresponding index; no mixing or averaging happens. Duplicate
    /// indices are allowed (selecting channel 0 twice fabricates stereo
    /// from mono), and a single-element selection produces mono output.
    ///
    /// # Errors
    /// Returns `ChannelIndexOutOfRange` if any index is not a valid source
    /// channel, or `InvalidBuffer` for an empty selection. The buffer is
    /// left untouched on error.
    pub fn apply_channel_selection(&mut self, indices: &[usize]) -> Result<()> {
        if indices.is_empty() {
            return Err(MorphError::invalid_buffer("channel selection is empty"));
        }
        for &index in indices {
            if index >= self.channel_count {
                return Err(MorphError::ChannelIndexOutOfRange {
                    index,
                    channel_count: self.channel_count,
                });
            }
        }
        self.channels = indices
            .iter()
            .map(|&index| self.channels[index].clone())
            .collect();
        self.channel_count = indices.len();
        Ok(())
    }

    /// Convert the buffer to `target_rate` using the given interpolation
    /// method.
    ///
    /// A `target_rate` of zero or equal to the current rate is an exact
    /// no-op. Otherwise every channel is independently re-evaluated at
    /// `floor(sample_count * target_rate / sample_rate)` evenly spaced
    /// points, and interpolated values are truncated toward zero back to
    /// integer samples. Channel count never changes.
    ///
    /// # Errors
    /// Returns `InterpolationFailed` if a kernel produces a non-finite
    /// value; the buffer is left untouched on error.
    pub fn apply_resample(&mut self, target_rate: u32, method: InterpolationMethod) -> Result<()> {
        crate::resample::run(self, target_rate, method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stereo() -> AudioData {
        AudioData::new(2, 44_100, 16, vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap()
    }

    #[test]
    fn construction_populates_fields() {
        let audio = stereo();
        assert_eq!(audio.channel_count(), 2);
        assert_eq!(audio.sample_rate(), 44_100);
        assert_eq!(audio.bit_depth(), 16);
        assert_eq!(audio.sample_count(), 3);
    }

    #[test]
    fn construction_rejects_mismatched_channel_lengths() {
        let result = AudioData::new(2, 44_100, 16, vec![vec![1, 2, 3], vec![4, 5]]);
        assert!(matches!(result, Err(MorphError::InvalidBuffer(_))));
    }

    #[test]
    fn construction_rejects_channel_count_mismatch() {
        let result = AudioData::new(3, 44_100, 16, vec![vec![1], vec![2]]);
        assert!(matches!(result, Err(MorphError::InvalidBuffer(_))));
    }

    #[test]
    fn construction_rejects_zero_sample_rate() {
        let result = AudioData::new(1, 0, 16, vec![vec![1]]);
        assert!(matches!(result, Err(MorphError::InvalidBuffer(_))));
    }

    #[test]
    fn duration_is_derived() {
        let audio = AudioData::new(1, 44_100, 16, vec![vec![0; 44_100]]).unwrap();
        assert!((audio.duration_seconds() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn channel_selection_copies_source_channel() {
        let mut audio = stereo();
        audio.apply_channel_selection(&[1]).unwrap();
        assert_eq!(audio.channel_count(), 1);
        assert_eq!(audio.channel(0), &[4, 5, 6]);
    }

    #[test]
    fn channel_selection_allows_duplicates() {
        let mut audio = AudioData::new(1, 44_100, 16, vec![vec![7, 8]]).unwrap();
        audio.apply_channel_selection(&[0, 0]).unwrap();
        assert_eq!(audio.channel_count(), 2);
        assert_eq!(audio.channel(0), audio.channel(1));
    }

    #[test]
    fn channel_selection_reorders() {
        let mut audio = stereo();
        audio.apply_channel_selection(&[1, 0]).unwrap();
        assert_eq!(audio.channel(0), &[4, 5, 6]);
        assert_eq!(audio.channel(1), &[1, 2, 3]);
    }

    #[test]
    fn channel_selection_rejects_out_of_range() {
        let mut audio = stereo();
        let result = audio.apply_channel_selection(&[0, 2]);
        assert!(matches!(
            result,
            Err(MorphError::ChannelIndexOutOfRange {
                index: 2,
                channel_count: 2
            })
        ));
        // untouched on error
        assert_eq!(audio.channel_count(), 2);
        assert_eq!(audio.channel(0), &[1, 2, 3]);
    }

    #[test]
    fn channel_selection_rejects_empty_list() {
        let mut audio = stereo();
        assert!(matches!(
            audio.apply_channel_selection(&[]),
            Err(MorphError::InvalidBuffer(_))
        ));
    }
}
