/// MP3 encode adapter built on LAME
use morph_core::{AudioData, AudioEncoder, MorphError, Result};
use mp3lame_encoder::{Builder, FlushNoGap, InterleavedPcm, MonoPcm};

/// MP3 encoder (LAME, 192 kbps)
///
/// LAME consumes 16-bit PCM, so samples are rescaled from the buffer's bit
/// depth into the i16 domain first. Mono and stereo only.
pub struct Mp3Encoder;

impl AudioEncoder for Mp3Encoder {
    fn encode(&self, audio: &AudioData) -> Result<Vec<u8>> {
        let channel_count = audio.channel_count();
        if channel_count > 2 {
            return Err(MorphError::UnsupportedChannelLayout {
                format: "mp3",
                supported: "mono or stereo",
                requested: channel_count,
            });
        }

        let mut builder = Builder::new()
            .ok_or_else(|| MorphError::encode_failure("mp3", "failed to allocate LAME encoder"))?;
        builder
            .set_num_channels(channel_count as u8)
            .map_err(|e| MorphError::encode_failure("mp3", format!("{e:?}")))?;
        builder
            .set_sample_rate(audio.sample_rate())
            .map_err(|e| MorphError::encode_failure("mp3", format!("{e:?}")))?;
        builder
            .set_brate(mp3lame_encoder::Birtate::Kbps192)
            .map_err(|e| MorphError::encode_failure("mp3", format!("{e:?}")))?;
        builder
            .set_quality(mp3lame_encoder::Quality::Best)
            .map_err(|e| MorphError::encode_failure("mp3", format!("{e:?}")))?;
        let mut encoder = builder
            .build()
            .map_err(|e| MorphError::encode_failure("mp3", format!("{e:?}")))?;

        // Rescale to the i16 domain LAME expects
        let scale = f64::from(1_u32 << 15) / f64::from(1_u32 << (audio.bit_depth() - 1));
        let pcm: Vec<i16> = super::interleave(audio)
            .into_iter()
            .map(|sample| (f64::from(sample) * scale) as i16)
            .collect();

        let mut out = Vec::new();
        if channel_count == 1 {
            encoder
                .encode_to_vec(MonoPcm(&pcm), &mut out)
                .map_err(|e| MorphError::encode_failure("mp3", format!("{e:?}")))?;
        } else {
            encoder
                .encode_to_vec(InterleavedPcm(&pcm), &mut out)
                .map_err(|e| MorphError::encode_failure("mp3", format!("{e:?}")))?;
        }
        encoder
            .flush_to_vec::<FlushNoGap>(&mut out)
            .map_err(|e| MorphError::encode_failure("mp3", format!("{e:?}")))?;
        Ok(out)
    }
}
