//! Encode adapters: canonical audio to container bytes
//!
//! Every encoder materializes the complete output in memory. The transcode
//! pipeline writes the target file only after encoding succeeds, so no
//! failure path can leave a truncated file on disk.

mod aiff;
mod flac;
mod mp3;
mod wav;

pub use aiff::AiffEncoder;
pub use flac::FlacEncoder;
pub use mp3::Mp3Encoder;
pub use wav::WavEncoder;

use morph_core::AudioData;

/// Re-interleave the buffer's channels in channel-major frame order
/// (`L R L R ...` for stereo), the layout every container writer expects.
pub(crate) fn interleave(audio: &AudioData) -> Vec<i32> {
    let channel_count = audio.channel_count();
    let sample_count = audio.sample_count();
    let mut interleaved = Vec::with_capacity(sample_count * channel_count);
    for frame in 0..sample_count {
        for channel in 0..channel_count {
            interleaved.push(audio.channel(channel)[frame]);
        }
    }
    interleaved
}
