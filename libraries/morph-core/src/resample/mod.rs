//! Sample-rate conversion over the canonical buffer
//!
//! Each channel is treated as a discretely-sampled signal over the domain
//! `[0, sample_count)` and re-evaluated with the requested interpolation
//! kernel at `floor(sample_count * target_rate / source_rate)` evenly
//! spaced query points. Interpolated values are truncated toward zero, not
//! rounded, when converted back to integer samples.

mod kernels;
mod spline;

use crate::error::{MorphError, Result};
use crate::types::{AudioData, InterpolationMethod};

/// Resample `audio` in place to `target_rate`.
///
/// A target of zero or the current rate is an identity operation. All
/// channels are converted with the same kernel; results are committed only
/// after every channel succeeds, so a failure can never leave channels at
/// mismatched lengths.
pub(crate) fn run(
    audio: &mut AudioData,
    target_rate: u32,
    method: InterpolationMethod,
) -> Result<()> {
    if target_rate == 0 || target_rate == audio.sample_rate {
        return Ok(());
    }
    let ratio = f64::from(target_rate) / f64::from(audio.sample_rate);
    let new_len = (audio.sample_count() as f64 * ratio).floor() as usize;

    let mut resampled = Vec::with_capacity(audio.channel_count);
    for channel in &audio.channels {
        resampled.push(resample_channel(channel, new_len, method)?);
    }
    audio.channels = resampled;
    audio.sample_rate = target_rate;
    Ok(())
}

fn resample_channel(
    samples: &[i32],
    new_len: usize,
    method: InterpolationMethod,
) -> Result<Vec<i32>> {
    if new_len == 0 {
        return Ok(Vec::new());
    }
    let src: Vec<f64> = samples.iter().map(|&s| f64::from(s)).collect();
    let step = src.len() as f64 / new_len as f64;

    let mut out = Vec::with_capacity(new_len);
    match method {
        InterpolationMethod::Cubic => {
            let fitted = spline::NaturalCubic::fit(&src);
            for j in 0..new_len {
                out.push(to_sample(fitted.eval(j as f64 * step))?);
            }
        }
        InterpolationMethod::Monotonic => {
            let fitted = spline::MonotonicCubic::fit(&src);
            for j in 0..new_len {
                out.push(to_sample(fitted.eval(j as f64 * step))?);
            }
        }
        _ => {
            for j in 0..new_len {
                let x = j as f64 * step;
                let value = match method {
                    InterpolationMethod::Linear => kernels::linear(&src, x),
                    InterpolationMethod::Hermite => kernels::hermite(&src, x),
                    InterpolationMethod::Lanczos2 => kernels::lanczos(&src, x, 2),
                    InterpolationMethod::Lanczos3 => kernels::lanczos(&src, x, 3),
                    InterpolationMethod::BSpline3 => kernels::bspline3(&src, x),
                    InterpolationMethod::BSpline5 => kernels::bspline5(&src, x),
                    InterpolationMethod::Cubic | InterpolationMethod::Monotonic => unreachable!(),
                };
                out.push(to_sample(value)?);
            }
        }
    }
    Ok(out)
}

/// Truncate toward zero back to an integer sample
fn to_sample(value: f64) -> Result<i32> {
    if !value.is_finite() {
        return Err(MorphError::interpolation_failed(format!(
            "kernel produced a non-finite value: {value}"
        )));
    }
    Ok(value as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mono(samples: Vec<i32>, sample_rate: u32) -> AudioData {
        AudioData::new(1, sample_rate, 16, vec![samples]).unwrap()
    }

    #[test]
    fn noop_when_target_equals_source() {
        for method in InterpolationMethod::ALL {
            let mut audio = mono(vec![0, 100, 200, 300, 400], 44_100);
            audio.apply_resample(44_100, method).unwrap();
            assert_eq!(audio.channel(0), &[0, 100, 200, 300, 400]);
            assert_eq!(audio.sample_rate(), 44_100);
        }
    }

    #[test]
    fn noop_when_target_is_zero() {
        let mut audio = mono(vec![1, 2, 3], 44_100);
        audio.apply_resample(0, InterpolationMethod::Linear).unwrap();
        assert_eq!(audio.channel(0), &[1, 2, 3]);
        assert_eq!(audio.sample_rate(), 44_100);
    }

    #[test]
    fn output_length_follows_floor_of_ratio() {
        for method in InterpolationMethod::ALL {
            let mut audio = mono((0..1000).collect(), 44_100);
            audio.apply_resample(48_000, method).unwrap();
            // floor(1000 * 48000 / 44100) = 1088
            assert_eq!(audio.sample_count(), 1088, "method {method}");
            assert_eq!(audio.sample_rate(), 48_000);
        }
    }

    #[test]
    fn five_sample_ramp_to_48k_keeps_length_and_endpoint() {
        // ratio 48000/44100 is roughly 1.088, so floor(5 * ratio) is
        // still 5 samples
        let mut audio = mono(vec![0, 100, 200, 300, 400], 44_100);
        audio
            .apply_resample(48_000, InterpolationMethod::Linear)
            .unwrap();
        assert_eq!(audio.sample_count(), 5);
        assert_eq!(audio.channel(0)[0], 0);
        assert_eq!(audio.sample_rate(), 48_000);
    }

    #[test]
    fn first_sample_is_preserved_by_interpolating_kernels() {
        for method in [
            InterpolationMethod::Linear,
            InterpolationMethod::Cubic,
            InterpolationMethod::Hermite,
            InterpolationMethod::Lanczos2,
            InterpolationMethod::Lanczos3,
            InterpolationMethod::Monotonic,
        ] {
            let mut audio = mono(vec![123, -500, 800, 41, 9], 44_100);
            audio.apply_resample(88_200, method).unwrap();
            assert_eq!(audio.channel(0)[0], 123, "method {method}");
        }
    }

    #[test]
    fn exact_doubling_keeps_original_samples_under_linear() {
        let mut audio = mono(vec![0, 10, 20, 30], 22_050);
        audio.apply_resample(44_100, InterpolationMethod::Linear).unwrap();
        assert_eq!(audio.sample_count(), 8);
        // every second output sample sits exactly on a source sample
        assert_eq!(audio.channel(0)[0], 0);
        assert_eq!(audio.channel(0)[2], 10);
        assert_eq!(audio.channel(0)[4], 20);
        assert_eq!(audio.channel(0)[6], 30);
        // odd positions are midpoints of the ramp
        assert_eq!(audio.channel(0)[1], 5);
    }

    #[test]
    fn downsampling_shrinks_by_floor() {
        let mut audio = mono((0..100).collect(), 48_000);
        audio.apply_resample(44_100, InterpolationMethod::Hermite).unwrap();
        // floor(100 * 44100 / 48000) = 91
        assert_eq!(audio.sample_count(), 91);
    }

    #[test]
    fn values_are_truncated_toward_zero() {
        // Linear midpoint of 0 and 1 is 0.5 and must truncate to 0; the
        // midpoint of 0 and -1 is -0.5 and must also truncate to 0.
        let mut up = mono(vec![0, 1], 10_000);
        up.apply_resample(20_000, InterpolationMethod::Linear).unwrap();
        assert_eq!(up.channel(0), &[0, 0, 1, 1]);

        let mut down = mono(vec![0, -1], 10_000);
        down.apply_resample(20_000, InterpolationMethod::Linear).unwrap();
        assert_eq!(down.channel(0), &[0, 0, -1, -1]);
    }

    #[test]
    fn channel_count_is_never_changed() {
        let mut audio =
            AudioData::new(3, 44_100, 16, vec![vec![1; 50], vec![2; 50], vec![3; 50]]).unwrap();
        audio.apply_resample(96_000, InterpolationMethod::BSpline5).unwrap();
        assert_eq!(audio.channel_count(), 3);
        let expected = (50.0_f64 * 96_000.0 / 44_100.0).floor() as usize;
        for channel in audio.channels() {
            assert_eq!(channel.len(), expected);
        }
    }

    #[test]
    fn resampling_twice_uses_the_new_rate() {
        let mut audio = mono((0..441).collect(), 44_100);
        audio.apply_resample(22_050, InterpolationMethod::Linear).unwrap();
        assert_eq!(audio.sample_count(), 220);
        audio.apply_resample(11_025, InterpolationMethod::Linear).unwrap();
        assert_eq!(audio.sample_count(), 110);
        assert_eq!(audio.sample_rate(), 11_025);
    }
}
