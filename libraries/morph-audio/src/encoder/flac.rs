/// FLAC encode adapter built on flacenc
use flacenc::component::BitRepr;
use flacenc::error::Verify;
use morph_core::{AudioData, AudioEncoder, MorphError, Result};

/// FLAC encoder using fixed 4096-sample blocks
///
/// FLAC frames carry their own block-size rules; chunking the sample
/// stream into compliant frames is handled here (by flacenc), not by the
/// buffer model. Mono and stereo only.
pub struct FlacEncoder;

impl AudioEncoder for FlacEncoder {
    fn encode(&self, audio: &AudioData) -> Result<Vec<u8>> {
        if audio.channel_count() > 2 {
            return Err(MorphError::UnsupportedChannelLayout {
                format: "flac",
                supported: "mono or stereo",
                requested: audio.channel_count(),
            });
        }

        let samples = super::interleave(audio);
        let config = flacenc::config::Encoder::default()
            .into_verified()
            .map_err(|_| MorphError::encode_failure("flac", "invalid encoder configuration"))?;
        let source = flacenc::source::MemSource::from_samples(
            &samples,
            audio.channel_count(),
            usize::from(audio.bit_depth()),
            audio.sample_rate() as usize,
        );
        let stream = flacenc::encode_with_fixed_block_size(&config, source, config.block_size)
            .map_err(|e| MorphError::encode_failure("flac", format!("{e:?}")))?;

        let mut sink = flacenc::bitsink::ByteSink::new();
        stream
            .write(&mut sink)
            .map_err(|e| MorphError::encode_failure("flac", format!("{e:?}")))?;
        Ok(sink.as_slice().to_vec())
    }
}
