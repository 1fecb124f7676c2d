//! Audiomorph Core
//!
//! Canonical audio buffer model and its transformation pipeline.
//!
//! This crate provides:
//! - **`AudioData`**: decoded PCM as deinterleaved per-channel integer
//!   samples, with the equal-length channel invariant enforced
//! - **Channel selection**: pure projection onto an ordered set of source
//!   channels (mono output is "pick one channel", never a mixdown)
//! - **Resampling**: sample-rate conversion over pluggable interpolation
//!   kernels (linear, cubic spline, Hermite, Lanczos, B-spline, monotone
//!   cubic)
//! - **`ConversionRequest`**: the validated conversion parameters, built
//!   once and handed to the transcode pipeline by value
//! - **Adapter traits** and the unified [`MorphError`] type
//!
//! # Example
//!
//! ```rust
//! use morph_core::{AudioData, InterpolationMethod};
//!
//! # fn main() -> morph_core::Result<()> {
//! let mut audio = AudioData::new(2, 44_100, 16, vec![vec![0, 1, 2], vec![3, 4, 5]])?;
//! audio.apply_resample(48_000, InterpolationMethod::Linear)?;
//! audio.apply_channel_selection(&[1])?;
//! assert_eq!(audio.channel_count(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
mod resample;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{MorphError, Result};
pub use traits::{AudioDecoder, AudioEncoder};
pub use types::{AudioData, ConversionRequest, InterpolationMethod};
