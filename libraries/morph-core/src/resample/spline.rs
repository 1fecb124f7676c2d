//! Spline interpolators with per-channel precomputation
//!
//! Unlike the local kernels, these fit the whole channel once and are then
//! evaluated at every query position: the natural cubic spline solves a
//! tridiagonal system for its second derivatives, the monotone cubic
//! computes Fritsch-Carlson limited tangents.

/// Natural cubic spline over unit-spaced samples
pub(super) struct NaturalCubic {
    y: Vec<f64>,
    /// Second derivative at each sample; zero at both ends
    m: Vec<f64>,
}

impl NaturalCubic {
    pub(super) fn fit(samples: &[f64]) -> Self {
        let n = samples.len();
        let mut m = vec![0.0; n];
        if n > 2 {
            // Thomas algorithm on the interior unknowns; the sub- and
            // super-diagonals are all ones for unit spacing.
            let dim = n - 2;
            let mut diag = vec![4.0; dim];
            let mut rhs: Vec<f64> = (1..n - 1)
                .map(|i| 6.0 * (samples[i - 1] - 2.0 * samples[i] + samples[i + 1]))
                .collect();
            for i in 1..dim {
                let w = 1.0 / diag[i - 1];
                diag[i] -= w;
                rhs[i] -= w * rhs[i - 1];
            }
            m[dim] = rhs[dim - 1] / diag[dim - 1];
            for i in (0..dim - 1).rev() {
                m[i + 1] = (rhs[i] - m[i + 2]) / diag[i];
            }
        }
        Self {
            y: samples.to_vec(),
            m,
        }
    }

    pub(super) fn eval(&self, x: f64) -> f64 {
        let n = self.y.len();
        if n == 1 {
            return self.y[0];
        }
        let i = (x.floor().max(0.0) as usize).min(n - 2);
        let t = x - i as f64;
        let u = 1.0 - t;
        let (y0, y1) = (self.y[i], self.y[i + 1]);
        let (m0, m1) = (self.m[i], self.m[i + 1]);
        m0 * u * u * u / 6.0 + m1 * t * t * t / 6.0 + (y0 - m0 / 6.0) * u + (y1 - m1 / 6.0) * t
    }
}

/// Fritsch-Carlson monotone piecewise cubic
///
/// Tangents are limited so the interpolant never overshoots between two
/// samples; monotone input produces monotone output.
pub(super) struct MonotonicCubic {
    y: Vec<f64>,
    /// Limited tangent at each sample
    m: Vec<f64>,
}

impl MonotonicCubic {
    pub(super) fn fit(samples: &[f64]) -> Self {
        let n = samples.len();
        let mut m = vec![0.0; n];
        if n >= 2 {
            let d: Vec<f64> = (0..n - 1).map(|i| samples[i + 1] - samples[i]).collect();
            m[0] = d[0];
            m[n - 1] = d[n - 2];
            for i in 1..n - 1 {
                // flat tangent at local extrema
                m[i] = if d[i - 1] * d[i] <= 0.0 {
                    0.0
                } else {
                    0.5 * (d[i - 1] + d[i])
                };
            }
            for i in 0..n - 1 {
                if d[i] == 0.0 {
                    m[i] = 0.0;
                    m[i + 1] = 0.0;
                    continue;
                }
                let a = m[i] / d[i];
                let b = m[i + 1] / d[i];
                let s = a * a + b * b;
                if s > 9.0 {
                    let tau = 3.0 / s.sqrt();
                    m[i] = tau * a * d[i];
                    m[i + 1] = tau * b * d[i];
                }
            }
        }
        Self {
            y: samples.to_vec(),
            m,
        }
    }

    pub(super) fn eval(&self, x: f64) -> f64 {
        let n = self.y.len();
        if n == 1 {
            return self.y[0];
        }
        let i = (x.floor().max(0.0) as usize).min(n - 2);
        let t = x - i as f64;
        let t2 = t * t;
        let t3 = t2 * t;
        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;
        h00 * self.y[i] + h10 * self.m[i] + h01 * self.y[i + 1] + h11 * self.m[i + 1]
    }
}
