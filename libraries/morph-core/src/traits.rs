/// Codec adapter traits
use crate::error::Result;
use crate::types::AudioData;
use std::path::Path;

/// Decode adapter: container bytes to canonical audio
///
/// Implementers read a container-specific layout, deinterleave the PCM into
/// per-channel sequences, and report channel count, sample rate and bit
/// depth exactly as the container declares them.
pub trait AudioDecoder: Send {
    /// Decode an audio file from the given path (loads the entire file)
    ///
    /// # Errors
    /// Returns an error if the format is unsupported or the file cannot be
    /// read or decoded.
    fn decode(&mut self, path: &Path) -> Result<AudioData>;

    /// Check if the decoder supports the given file format
    fn supports_format(&self, path: &Path) -> bool;
}

/// Encode adapter: canonical audio to container bytes
///
/// Encoders materialize the complete output in memory and return it; the
/// caller writes the target file only after encoding succeeds, so a failed
/// encode never leaves a truncated file behind. Format-specific structural
/// constraints (frame sizes, channel layout limits) are the encoder's local
/// policy, not the buffer's.
pub trait AudioEncoder: Send {
    /// Serialize the buffer into the target container
    ///
    /// # Errors
    /// Returns an error if the buffer's channel layout cannot be
    /// represented in the target format or the underlying codec fails.
    fn encode(&self, audio: &AudioData) -> Result<Vec<u8>>;
}
