//! Cylindrical Bessel functions and their zeros
//!
//! The circular membrane oscillates at frequencies set by the positive
//! zeros μₘ of J₀. Consecutive zeros are about π apart and the m-th one
//! sits in ((m-1)π, mπ), so each is found by a bracketed Brent search.

use crate::error::{Result, SeriesError};
use spec_math::Bessel;
use std::f64::consts::PI;

/// Absolute tolerance for Bessel zeros
pub const ZERO_TOLERANCE: f64 = 1e-14;

/// Iteration cap for a single bracketed search
pub const MAX_ROOT_ITERATIONS: usize = 100;

/// Cylindrical Bessel function of the first kind, order 0
#[inline]
pub fn bessel_j0(x: f64) -> f64 {
    x.bessel_jv(0.0)
}

/// Cylindrical Bessel function of the first kind, order 1
#[inline]
pub fn bessel_j1(x: f64) -> f64 {
    x.bessel_jv(1.0)
}

/// Outcome of a bracketed root search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootResult {
    /// Best estimate of the root
    pub root: f64,
    /// Iterations used
    pub iterations: usize,
    /// Whether the bracket shrank below the tolerance
    pub converged: bool,
}

/// Brent's method on `[lower, upper]`
///
/// Combines bisection, secant and inverse quadratic interpolation; the
/// bracket always contains a sign change so the search cannot escape it.
///
/// Returns `None` when `f(lower)` and `f(upper)` have the same sign.
///
/// # Example
/// ```
/// use math_wave_series::special::brent_root;
///
/// let r = brent_root(|x| x * x - 2.0, 0.0, 2.0, 1e-14, 100).unwrap();
/// assert!(r.converged);
/// assert!((r.root - 2.0_f64.sqrt()).abs() < 1e-12);
/// ```
pub fn brent_root<F>(f: F, lower: f64, upper: f64, tol: f64, max_iter: usize) -> Option<RootResult>
where
    F: Fn(f64) -> f64,
{
    let mut a = lower;
    let mut b = upper;
    let mut fa = f(a);
    let mut fb = f(b);

    if fa == 0.0 {
        return Some(RootResult {
            root: a,
            iterations: 0,
            converged: true,
        });
    }
    if fb == 0.0 {
        return Some(RootResult {
            root: b,
            iterations: 0,
            converged: true,
        });
    }
    if fa.signum() == fb.signum() || fa.is_nan() || fb.is_nan() {
        return None;
    }

    let mut c = b;
    let mut fc = fb;
    let mut d = 0.0;
    let mut e = 0.0;

    for iteration in 1..=max_iter {
        if fb.signum() == fc.signum() {
            // Re-establish the bracket [b, c]
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol1 = 2.0 * f64::EPSILON * b.abs() + 0.5 * tol;
        let xm = 0.5 * (c - b);
        if xm.abs() <= tol1 || fb == 0.0 {
            return Some(RootResult {
                root: b,
                iterations: iteration,
                converged: true,
            });
        }

        if e.abs() >= tol1 && fa.abs() > fb.abs() {
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                // Secant step
                (2.0 * xm * s, 1.0 - s)
            } else {
                // Inverse quadratic interpolation
                let q = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * xm * q * (q - r) - (b - a) * (r - 1.0)),
                    (q - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };
            if p > 0.0 {
                q = -q;
            }
            p = p.abs();

            let min1 = 3.0 * xm * q - (tol1 * q).abs();
            let min2 = (e * q).abs();
            if 2.0 * p < min1.min(min2) {
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }

        a = b;
        fa = fb;
        if d.abs() > tol1 {
            b += d;
        } else {
            b += tol1.copysign(xm);
        }
        fb = f(b);
    }

    Some(RootResult {
        root: b,
        iterations: max_iter,
        converged: false,
    })
}

/// First `count` positive zeros of J₀
///
/// The n-th zero is searched in ((n-1)π, nπ). A bracket without a sign
/// change means that assumption broke down and is reported as
/// [`SeriesError::RootBracket`].
///
/// # Example
/// ```
/// use math_wave_series::special::bessel_j0_zeros;
///
/// let mu = bessel_j0_zeros(2).unwrap();
/// assert!((mu[0] - 2.404825557695773).abs() < 1e-10);
/// ```
pub fn bessel_j0_zeros(count: usize) -> Result<Vec<f64>> {
    bracketed_zeros(bessel_j0, count, MAX_ROOT_ITERATIONS)
}

/// First `count` zeros of `f`, the n-th searched in ((n-1)π, nπ)
fn bracketed_zeros<F>(f: F, count: usize, max_iter: usize) -> Result<Vec<f64>>
where
    F: Fn(f64) -> f64,
{
    if count == 0 {
        return Err(SeriesError::InvalidModeCount { order: count });
    }

    let mut zeros = Vec::with_capacity(count);
    for n in 1..=count {
        let lower = (n - 1) as f64 * PI;
        let upper = n as f64 * PI;

        let result = brent_root(&f, lower, upper, ZERO_TOLERANCE, max_iter).ok_or(
            SeriesError::RootBracket {
                index: n,
                lower,
                upper,
            },
        )?;

        if !result.converged {
            return Err(SeriesError::RootNotConverged {
                index: n,
                iterations: result.iterations,
            });
        }

        log::debug!(
            "zero #{} = {:.15} ({} iterations)",
            n,
            result.root,
            result.iterations
        );
        zeros.push(result.root);
    }

    Ok(zeros)
}
