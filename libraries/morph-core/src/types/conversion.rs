/// Conversion request types
use crate::error::{MorphError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Interpolation kernel used for sample-rate conversion.
///
/// The set is closed: a name outside it is rejected with
/// `UnknownInterpolationMethod` rather than silently falling back to
/// linear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationMethod {
    /// Two-point linear interpolation
    #[default]
    Linear,
    /// Natural cubic spline over the whole channel
    Cubic,
    /// 4-point, 3rd-order Hermite (Catmull-Rom tangents)
    Hermite,
    /// Lanczos windowed sinc, 2 lobes
    Lanczos2,
    /// Lanczos windowed sinc, 3 lobes
    Lanczos3,
    /// 4-point, 3rd-order uniform B-spline
    BSpline3,
    /// 6-point, 5th-order uniform B-spline
    BSpline5,
    /// Fritsch-Carlson monotone cubic
    Monotonic,
}

impl InterpolationMethod {
    /// Every supported method, in name order
    pub const ALL: [Self; 8] = [
        Self::Linear,
        Self::Cubic,
        Self::Hermite,
        Self::Lanczos2,
        Self::Lanczos3,
        Self::BSpline3,
        Self::BSpline5,
        Self::Monotonic,
    ];

    /// Resolve a method by name.
    ///
    /// # Errors
    /// Returns `UnknownInterpolationMethod` for any name outside the
    /// supported set.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "linear" => Ok(Self::Linear),
            "cubic" => Ok(Self::Cubic),
            "hermite" => Ok(Self::Hermite),
            "lanczos2" => Ok(Self::Lanczos2),
            "lanczos3" => Ok(Self::Lanczos3),
            "bspline3" => Ok(Self::BSpline3),
            "bspline5" => Ok(Self::BSpline5),
            "monotonic" => Ok(Self::Monotonic),
            other => Err(MorphError::UnknownInterpolationMethod(other.to_string())),
        }
    }

    /// The method's canonical name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Cubic => "cubic",
            Self::Hermite => "hermite",
            Self::Lanczos2 => "lanczos2",
            Self::Lanczos3 => "lanczos3",
            Self::BSpline3 => "bspline3",
            Self::BSpline5 => "bspline5",
            Self::Monotonic => "monotonic",
        }
    }
}

impl FromStr for InterpolationMethod {
    type Err = MorphError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validated conversion parameters, built once and passed by value into the
/// transcode pipeline.
///
/// All fields are optional in the sense that the default request is the
/// identity conversion: keep the sample rate, keep every channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Target sample rate in Hz; `None` (or a value equal to the source
    /// rate) means no resampling
    pub target_sample_rate: Option<u32>,
    /// Interpolation method used when resampling
    pub method: InterpolationMethod,
    /// Ordered source channel indices to keep; `None` keeps all channels
    pub channel_selection: Option<Vec<usize>>,
}

impl ConversionRequest {
    /// Build a request, validating the interpolation method name up front.
    ///
    /// # Errors
    /// Returns `UnknownInterpolationMethod` before any pipeline stage runs.
    pub fn new(
        target_sample_rate: Option<u32>,
        method_name: Option<&str>,
        channel_selection: Option<Vec<usize>>,
    ) -> Result<Self> {
        let method = match method_name {
            Some(name) => InterpolationMethod::from_name(name)?,
            None => InterpolationMethod::default(),
        };
        Ok(Self {
            target_sample_rate,
            method,
            channel_selection,
        })
    }

    /// Keep only the first channel (mono output)
    pub fn with_mono(mut self) -> Self {
        self.channel_selection = Some(vec![0]);
        self
    }

    /// True when the request changes nothing
    pub fn is_identity(&self) -> bool {
        self.target_sample_rate.is_none() && self.channel_selection.is_none()
    }
}
