/// Container format dispatch
use crate::encoder::{AiffEncoder, FlacEncoder, Mp3Encoder, WavEncoder};
use morph_core::{AudioEncoder, MorphError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Supported container formats, resolved once from the lowercased file
/// extension.
///
/// Every variant can be decoded; all but OGG can be encoded. An extension
/// outside this set fails with `UnsupportedFormat` before any I/O happens,
/// and asking for the OGG encoder fails with the distinct `NoEncoder` kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// RIFF WAVE
    Wav,
    /// AIFF (`.aif` / `.aiff`)
    Aiff,
    /// MPEG-1 Layer III
    Mp3,
    /// OGG Vorbis (decode only)
    Ogg,
    /// FLAC
    Flac,
}

impl Format {
    /// Resolve a format from a file path's extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| MorphError::UnsupportedFormat(path.display().to_string()))?;
        Self::from_extension(ext)
    }

    /// Resolve a format from an extension string (case-insensitive, with or
    /// without the leading dot)
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_lowercase().trim_start_matches('.') {
            "wav" => Ok(Self::Wav),
            "aif" | "aiff" => Ok(Self::Aiff),
            "mp3" => Ok(Self::Mp3),
            "ogg" => Ok(Self::Ogg),
            "flac" => Ok(Self::Flac),
            other => Err(MorphError::UnsupportedFormat(format!(".{other}"))),
        }
    }

    /// Canonical lowercase format name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Aiff => "aiff",
            Self::Mp3 => "mp3",
            Self::Ogg => "ogg",
            Self::Flac => "flac",
        }
    }

    /// The encode adapter for this format
    ///
    /// # Errors
    /// Returns `NoEncoder` for OGG: the container is recognized but no
    /// Vorbis encoder is available.
    pub fn encoder(&self) -> Result<Box<dyn AudioEncoder>> {
        match self {
            Self::Wav => Ok(Box::new(WavEncoder)),
            Self::Aiff => Ok(Box::new(AiffEncoder)),
            Self::Mp3 => Ok(Box::new(Mp3Encoder)),
            Self::Flac => Ok(Box::new(FlacEncoder)),
            Self::Ogg => Err(MorphError::NoEncoder("ogg".to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
