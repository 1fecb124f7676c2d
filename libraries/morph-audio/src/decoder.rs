/// Audio decode adapter built on Symphonia
use crate::format::Format;
use morph_core::{AudioData, AudioDecoder as AudioDecoderTrait, MorphError, Result};
use std::path::Path;
use symphonia::core::audio::{AudioBufferRef, Signal};
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Audio decoder using Symphonia
///
/// Supports WAV, AIFF, MP3, OGG Vorbis and FLAC. The container's
/// interleaved or planar PCM is deinterleaved into per-channel integer
/// sequences at the container's declared bit depth; codecs that only
/// expose float samples (MP3, Vorbis) are scaled into the integer domain
/// by `2^(bit_depth - 1)`.
pub struct SymphoniaDecoder;

impl SymphoniaDecoder {
    /// Create a new decoder
    pub fn new() -> Self {
        Self
    }
}

impl Default for SymphoniaDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioDecoderTrait for SymphoniaDecoder {
    fn decode(&mut self, path: &Path) -> Result<AudioData> {
        // Resolve the format first: an unsupported extension fails before
        // any file is touched.
        let format = Format::from_path(path)?;

        if !path.exists() {
            return Err(MorphError::FileNotFound(path.display().to_string()));
        }
        let file = std::fs::File::open(path)?;
        let mss = MediaSourceStream::new(Box::new(file), Default::default());

        // The extension is already validated, so it makes a reliable hint
        let mut hint = Hint::new();
        hint.with_extension(format.name());

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| MorphError::decode_failure(format.name(), format!("probe failed: {e}")))?;

        let mut reader = probed.format;
        let track = reader
            .default_track()
            .ok_or_else(|| MorphError::decode_failure(format.name(), "no audio tracks found"))?;

        let sample_rate = track.codec_params.sample_rate.unwrap_or(44_100);
        // MP3 and Vorbis do not declare a bit depth; treat their float
        // output as 16-bit.
        let bit_depth = track.codec_params.bits_per_sample.unwrap_or(16);
        let track_id = track.id;

        let mut decoder = symphonia::default::get_codecs()
            .make(&track.codec_params, &DecoderOptions::default())
            .map_err(|e| {
                MorphError::decode_failure(format.name(), format!("failed to create decoder: {e}"))
            })?;

        let mut channels: Vec<Vec<i32>> = Vec::new();
        loop {
            let packet = match reader.next_packet() {
                Ok(packet) => packet,
                Err(SymphoniaError::IoError(e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break;
                }
                Err(SymphoniaError::ResetRequired) => {
                    decoder.reset();
                    continue;
                }
                Err(e) => {
                    return Err(MorphError::decode_failure(
                        format.name(),
                        format!("error reading packet: {e}"),
                    ));
                }
            };
            if packet.track_id() != track_id {
                continue;
            }

            let decoded = decoder.decode(&packet).map_err(|e| {
                MorphError::decode_failure(format.name(), format!("decode error: {e}"))
            })?;
            append_planar(decoded, bit_depth, &mut channels, format)?;
        }

        if channels.is_empty() || channels[0].is_empty() {
            return Err(MorphError::decode_failure(
                format.name(),
                "no audio frames decoded",
            ));
        }
        AudioData::new(channels.len(), sample_rate, bit_depth as u16, channels)
    }

    fn supports_format(&self, path: &Path) -> bool {
        Format::from_path(path).is_ok()
    }
}

/// Append one decoded packet to the per-channel output, converting from
/// Symphonia's full-scale sample domain back to the container's declared
/// bit depth.
fn append_planar(
    decoded: AudioBufferRef,
    bit_depth: u32,
    channels: &mut Vec<Vec<i32>>,
    format: Format,
) -> Result<()> {
    let channel_count = decoded.spec().channels.count();
    if channels.is_empty() {
        channels.resize_with(channel_count, Vec::new);
    } else if channels.len() != channel_count {
        return Err(MorphError::decode_failure(
            format.name(),
            format!(
                "channel layout changed mid-stream ({} -> {})",
                channels.len(),
                channel_count
            ),
        ));
    }

    match decoded {
        AudioBufferRef::S8(buf) => {
            extend_planar(&buf, channels, |s| rescale_int(i32::from(s), 8, bit_depth));
        }
        AudioBufferRef::S16(buf) => {
            extend_planar(&buf, channels, |s| rescale_int(i32::from(s), 16, bit_depth));
        }
        AudioBufferRef::S24(buf) => {
            extend_planar(&buf, channels, |s| rescale_int(s.inner(), 24, bit_depth));
        }
        AudioBufferRef::S32(buf) => {
            extend_planar(&buf, channels, |s| rescale_int(s, 32, bit_depth));
        }
        AudioBufferRef::U8(buf) => {
            extend_planar(&buf, channels, |s| {
                rescale_int(i32::from(s) - 128, 8, bit_depth)
            });
        }
        AudioBufferRef::U16(buf) => {
            extend_planar(&buf, channels, |s| {
                rescale_int(i32::from(s) - 32_768, 16, bit_depth)
            });
        }
        AudioBufferRef::U24(buf) => {
            extend_planar(&buf, channels, |s| {
                rescale_int(s.inner() as i32 - 8_388_608, 24, bit_depth)
            });
        }
        AudioBufferRef::U32(buf) => {
            extend_planar(&buf, channels, |s| {
                rescale_int((i64::from(s) - 2_147_483_648) as i32, 32, bit_depth)
            });
        }
        AudioBufferRef::F32(buf) => {
            extend_planar(&buf, channels, |s| rescale_float(f64::from(s), bit_depth));
        }
        AudioBufferRef::F64(buf) => {
            extend_planar(&buf, channels, |s| rescale_float(s, bit_depth));
        }
    }
    Ok(())
}

fn extend_planar<T, F>(
    buf: &symphonia::core::audio::AudioBuffer<T>,
    channels: &mut [Vec<i32>],
    convert: F,
) where
    T: symphonia::core::sample::Sample + Copy,
    F: Fn(T) -> i32,
{
    for (index, out) in channels.iter_mut().enumerate() {
        out.extend(buf.chan(index).iter().copied().map(&convert));
    }
}

/// Shift a full-scale integer sample down to the declared bit depth
fn rescale_int(value: i32, container_bits: u32, bit_depth: u32) -> i32 {
    if container_bits > bit_depth {
        value >> (container_bits - bit_depth)
    } else {
        value
    }
}

/// Scale a float sample into the integer domain, truncating toward zero
fn rescale_float(value: f64, bit_depth: u32) -> i32 {
    (value * f64::from(1_u32 << (bit_depth - 1))) as i32
}
