//! Audiomorph Audio
//!
//! Codec adapters and the transcode pipeline for audiomorph.
//!
//! This crate provides:
//! - Audio decoding via Symphonia (WAV, AIFF, MP3, OGG Vorbis, FLAC) into
//!   the canonical [`morph_core::AudioData`] buffer
//! - Encode adapters for WAV (hound), AIFF, FLAC (flacenc) and MP3 (LAME)
//! - The [`transcode`] pipeline: decode, optional resample, optional
//!   channel selection, encode
//!
//! # Example
//!
//! ```rust,no_run
//! use morph_audio::{decode_file, transcode};
//! use morph_core::ConversionRequest;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Inspect a file
//! let audio = decode_file(Path::new("input.flac"))?;
//! println!("{} Hz, {} channel(s)", audio.sample_rate(), audio.channel_count());
//!
//! // Convert it to a 48 kHz mono WAV
//! let request = ConversionRequest::new(Some(48_000), Some("lanczos3"), None)?.with_mono();
//! transcode(Path::new("input.flac"), Path::new("output.wav"), &request)?;
//! # Ok(())
//! # }
//! ```

mod decoder;
mod encoder;
mod format;
mod transcode;

pub use decoder::SymphoniaDecoder;
pub use format::Format;
pub use transcode::{transcode, Stage, TranscodeError, TranscodeResult};

use morph_core::{AudioData, AudioDecoder, Result};
use std::path::Path;

/// Decode an audio file, dispatching on its extension
pub fn decode_file(path: &Path) -> Result<AudioData> {
    SymphoniaDecoder::new().decode(path)
}
