//! Miscellaneous tools.

use ndarray::{ self as nd, Ix1 };
use num_complex::Complex64 as C64;
use num_traits::{ Num, Zero };
use rustfft as fft;

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Num + Copy,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    let inner
        = y.iter().skip(1).take(n - 2).copied()
        .fold(A::zero(), A::add);
    (dx / two) * (y[0] + two * inner + y[n - 1])
}

/// Calculate the norm of a wavefunction.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_norm<S>(q: &nd::ArrayBase<S, Ix1>, dx: f64) -> f64
where S: nd::Data<Elem = C64>
{
    trapz(&q.mapv(|qk| qk.norm_sqr()), dx)
}

/// Compute the first `nterms` coefficients of the discrete sine transform of
/// `f` sampled over `N` evenly spaced points including both endpoints,
/// ```text
/// S[k] = Σ_{j=1}^{N-2} f[j] sin(π j k / (N - 1)),  k = 1, ..., nterms
/// ```
/// via a single FFT of the odd extension of `f`.
///
/// Endpoint values are ignored since the sine vanishes there, so `dx * S[k]`
/// is exactly the trapezoidal integral of `f(x) sin(kπx/L)`.
///
/// *Panics if `f` has length less than 2*.
pub fn sine_transform<S>(f: &nd::ArrayBase<S, Ix1>, nterms: usize)
    -> nd::Array1<C64>
where S: nd::Data<Elem = C64>
{
    let n: usize = f.len();
    let m = 2 * (n - 1);
    let mut g: Vec<C64> = Vec::with_capacity(m);
    g.push(C64::zero());
    g.extend(f.iter().skip(1).take(n - 2).copied());
    g.push(C64::zero());
    g.extend(f.iter().skip(1).take(n - 2).rev().map(|fk| -*fk));
    let mut plan: fft::FftPlanner<f64> = fft::FftPlanner::new();
    let fft_plan = plan.plan_fft_forward(m);
    fft_plan.process(g.as_mut_slice());
    // odd extension: G[k] = -2i S[k], and S is periodic in k with period m
    (1..=nterms)
        .map(|k| C64::i() * g[k % m] / 2.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use super::*;

    #[test]
    fn trapz_is_exact_for_lines() {
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 2.0, 11);
        let y = x.mapv(|xk| 3.0 * xk + 1.0);
        assert!((trapz(&y, 0.2) - 8.0).abs() < 1e-12);
    }

    #[test]
    fn norm_of_box_ground_state() {
        let n = 501;
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, n);
        let dx = x[1] - x[0];
        let q = x.mapv(|xk| C64::from(2.0_f64.sqrt() * (PI * xk).sin()));
        assert!((wf_norm(&q, dx) - 1.0).abs() < 1e-12);
        let p = x.mapv(|xk| C64::new(0.0, (2.0 * PI * xk).sin()));
        assert!((wf_norm(&p, dx) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn sine_transform_matches_direct_sum() {
        let n = 37;
        let f: nd::Array1<C64>
            = (0..n)
            .map(|j| C64::new((0.3 * j as f64).cos(), (0.1 * j as f64).sin()))
            .collect();
        let s = sine_transform(&f, 80);
        for (k, sk) in s.iter().enumerate() {
            let k = k + 1;
            let direct: C64
                = (1..n - 1)
                .map(|j| {
                    f[j] * (PI * (j * k) as f64 / (n - 1) as f64).sin()
                })
                .sum();
            assert!((sk - direct).norm() < 1e-10, "k = {k}");
        }
    }
}
