/// Transcode pipeline: decode -> resample -> channel select -> encode
use crate::decoder::SymphoniaDecoder;
use crate::format::Format;
use morph_core::{AudioDecoder, ConversionRequest, MorphError};
use std::fmt;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Pipeline stage that produced a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reading and decoding the input file
    Decode,
    /// Sample-rate conversion
    Resample,
    /// Channel selection
    Select,
    /// Encoding and writing the output file
    Encode,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Decode => "decode",
            Self::Resample => "resample",
            Self::Select => "select",
            Self::Encode => "encode",
        })
    }
}

/// A pipeline failure, carrying the stage that aborted the conversion
#[derive(Error, Debug)]
#[error("{stage} stage failed: {source}")]
pub struct TranscodeError {
    /// The stage that failed
    pub stage: Stage,
    /// The underlying error kind
    #[source]
    pub source: MorphError,
}

impl TranscodeError {
    fn new(stage: Stage, source: MorphError) -> Self {
        Self { stage, source }
    }
}

/// Result type alias using `TranscodeError`
pub type TranscodeResult<T> = std::result::Result<T, TranscodeError>;

/// Convert `input` into `output`, applying the request's optional resample
/// and channel selection along the way.
///
/// Stages run strictly in order: decode, resample, channel selection,
/// encode. Resampling always precedes selection because the request's
/// channel indices refer to the input file's channel numbering (and
/// resampling never changes the channel count). Any failure aborts the
/// remaining stages, and the output file is only written once the encoded
/// bytes are fully materialized, so a failed conversion never leaves a
/// partial file behind.
///
/// # Errors
/// Returns a [`TranscodeError`] naming the failing stage; the wrapped
/// [`MorphError`] distinguishes a bad input file from a bad conversion
/// request from a bad target.
pub fn transcode(
    input: &Path,
    output: &Path,
    request: &ConversionRequest,
) -> TranscodeResult<()> {
    // Resolve the target format and its encoder up front: an unsupported
    // or encoder-less target must fail before a potentially expensive
    // decode, and before any file is created.
    let target = Format::from_path(output).map_err(|e| TranscodeError::new(Stage::Encode, e))?;
    let encoder = target
        .encoder()
        .map_err(|e| TranscodeError::new(Stage::Encode, e))?;

    let mut decoder = SymphoniaDecoder::new();
    let mut audio = decoder
        .decode(input)
        .map_err(|e| TranscodeError::new(Stage::Decode, e))?;
    debug!(
        "decoded {}: {} channel(s), {} Hz, {} bit, {} sample(s)",
        input.display(),
        audio.channel_count(),
        audio.sample_rate(),
        audio.bit_depth(),
        audio.sample_count()
    );

    if let Some(target_rate) = request.target_sample_rate {
        audio
            .apply_resample(target_rate, request.method)
            .map_err(|e| TranscodeError::new(Stage::Resample, e))?;
        debug!(
            "resampled to {} Hz ({}) -> {} sample(s)",
            audio.sample_rate(),
            request.method,
            audio.sample_count()
        );
    }

    if let Some(indices) = &request.channel_selection {
        audio
            .apply_channel_selection(indices)
            .map_err(|e| TranscodeError::new(Stage::Select, e))?;
        debug!("selected channels {:?} -> {} channel(s)", indices, audio.channel_count());
    }

    let bytes = encoder
        .encode(&audio)
        .map_err(|e| TranscodeError::new(Stage::Encode, e))?;
    std::fs::write(output, bytes)
        .map_err(|e| TranscodeError::new(Stage::Encode, MorphError::Io(e)))?;
    info!(
        "wrote {} ({}, {} Hz, {} channel(s))",
        output.display(),
        target,
        audio.sample_rate(),
        audio.channel_count()
    );
    Ok(())
}
