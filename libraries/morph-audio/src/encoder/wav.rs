/// WAV encode adapter built on hound
use hound::{SampleFormat, WavSpec, WavWriter};
use morph_core::{AudioData, AudioEncoder, MorphError, Result};
use std::io::Cursor;

/// WAV encoder writing integer PCM at the buffer's bit depth
pub struct WavEncoder;

impl AudioEncoder for WavEncoder {
    fn encode(&self, audio: &AudioData) -> Result<Vec<u8>> {
        let spec = WavSpec {
            channels: audio.channel_count() as u16,
            sample_rate: audio.sample_rate(),
            bits_per_sample: audio.bit_depth(),
            sample_format: SampleFormat::Int,
        };

        let mut cursor = Cursor::new(Vec::new());
        let mut writer = WavWriter::new(&mut cursor, spec)
            .map_err(|e| MorphError::encode_failure("wav", e))?;
        for sample in super::interleave(audio) {
            writer
                .write_sample(sample)
                .map_err(|e| MorphError::encode_failure("wav", e))?;
        }
        writer
            .finalize()
            .map_err(|e| MorphError::encode_failure("wav", e))?;
        Ok(cursor.into_inner())
    }
}
