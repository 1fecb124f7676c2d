//! Local interpolation kernels
//!
//! Each kernel evaluates a channel, viewed as a discretely-sampled signal
//! over `[0, len)`, at an arbitrary fractional position. Sample lookups
//! past either edge clamp to the boundary sample.

use std::f64::consts::PI;

/// Sample lookup with edge clamping
fn at(samples: &[f64], index: isize) -> f64 {
    let last = samples.len() as isize - 1;
    samples[index.clamp(0, last) as usize]
}

/// Two-point linear interpolation
pub(super) fn linear(samples: &[f64], x: f64) -> f64 {
    let i = x.floor() as isize;
    let t = x - x.floor();
    let y0 = at(samples, i);
    let y1 = at(samples, i + 1);
    y0 + (y1 - y0) * t
}

/// 4-point, 3rd-order Hermite with Catmull-Rom tangents
pub(super) fn hermite(samples: &[f64], x: f64) -> f64 {
    let i = x.floor() as isize;
    let t = x - x.floor();
    let ym1 = at(samples, i - 1);
    let y0 = at(samples, i);
    let y1 = at(samples, i + 1);
    let y2 = at(samples, i + 2);
    let c1 = 0.5 * (y1 - ym1);
    let c2 = ym1 - 2.5 * y0 + 2.0 * y1 - 0.5 * y2;
    let c3 = 0.5 * (y2 - ym1) + 1.5 * (y0 - y1);
    ((c3 * t + c2) * t + c1) * t + y0
}

/// 4-point, 3rd-order uniform B-spline
pub(super) fn bspline3(samples: &[f64], x: f64) -> f64 {
    let i = x.floor() as isize;
    let t = x - x.floor();
    let ym1 = at(samples, i - 1);
    let y0 = at(samples, i);
    let y1 = at(samples, i + 1);
    let y2 = at(samples, i + 2);
    let ym1py1 = ym1 + y1;
    let c0 = ym1py1 / 6.0 + y0 * (2.0 / 3.0);
    let c1 = 0.5 * (y1 - ym1);
    let c2 = 0.5 * ym1py1 - y0;
    let c3 = 0.5 * (y0 - y1) + (y2 - ym1) / 6.0;
    ((c3 * t + c2) * t + c1) * t + c0
}

/// 6-point, 5th-order uniform B-spline
pub(super) fn bspline5(samples: &[f64], x: f64) -> f64 {
    let i = x.floor() as isize;
    let t = x - x.floor();
    let ym2 = at(samples, i - 2);
    let ym1 = at(samples, i - 1);
    let y0 = at(samples, i);
    let y1 = at(samples, i + 1);
    let y2 = at(samples, i + 2);
    let y3 = at(samples, i + 3);
    let ym2py2 = ym2 + y2;
    let ym1py1 = ym1 + y1;
    let y2mym2 = y2 - ym2;
    let y1mym1 = y1 - ym1;
    let c0 = ym2py2 / 120.0 + ym1py1 * (13.0 / 60.0) + y0 * (11.0 / 20.0);
    let c1 = y2mym2 / 24.0 + y1mym1 * (5.0 / 12.0);
    let c2 = ym2py2 / 12.0 + ym1py1 / 6.0 - 0.5 * y0;
    let c3 = y2mym2 / 12.0 - y1mym1 / 6.0;
    let c4 = ym2py2 / 24.0 - ym1py1 / 6.0 + 0.25 * y0;
    let c5 = (y3 - ym2) / 120.0 + (ym1 - y2) / 24.0 + (y1 - y0) / 12.0;
    (((((c5 * t + c4) * t + c3) * t + c2) * t + c1) * t) + c0
}

/// Lanczos windowed-sinc interpolation with `a` lobes
pub(super) fn lanczos(samples: &[f64], x: f64, a: isize) -> f64 {
    let i = x.floor() as isize;
    let mut acc = 0.0;
    for k in (i - a + 1)..=(i + a) {
        acc += at(samples, k) * lanczos_weight(x - k as f64, a as f64);
    }
    acc
}

fn lanczos_weight(t: f64, a: f64) -> f64 {
    if t == 0.0 {
        return 1.0;
    }
    if t.abs() >= a {
        return 0.0;
    }
    let pt = PI * t;
    a * pt.sin() * (pt / a).sin() / (pt * pt)
}
