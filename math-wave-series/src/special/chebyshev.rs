//! Chebyshev polynomials of the first kind
//!
//! Used by the aliasing illustrations: on `x = cos θ` every `T_n`
//! collapses to `cos(nθ)`, so sampling at the nodes of `T_n` cannot tell
//! `T_{2n-k}` from `-T_k`.

/// Compute Chebyshev polynomials T_n(x) for n = 0, 1, ..., order-1
///
/// Uses the three-term recurrence relation:
/// ```text
/// T_{n+1}(x) = 2x T_n(x) - T_{n-1}(x)
/// ```
///
/// Starting values:
/// ```text
/// T_0(x) = 1
/// T_1(x) = x
/// ```
///
/// # Example
/// ```
/// use math_wave_series::special::chebyshev_polynomials;
/// let t = chebyshev_polynomials(4, 0.5);
/// assert!((t[2] + 0.5).abs() < 1e-12);
/// ```
pub fn chebyshev_polynomials(order: usize, x: f64) -> Vec<f64> {
    let mut result = vec![0.0; order];
    if order == 0 {
        return result;
    }

    result[0] = 1.0;
    if order == 1 {
        return result;
    }

    result[1] = x;
    for n in 2..order {
        result[n] = 2.0 * x * result[n - 1] - result[n - 2];
    }

    result
}

/// Single Chebyshev polynomial Tₙ(x)
pub fn chebyshev_t(n: usize, x: f64) -> f64 {
    match n {
        0 => 1.0,
        1 => x,
        _ => {
            let (mut prev, mut curr) = (1.0, x);
            for _ in 2..=n {
                let next = 2.0 * x * curr - prev;
                prev = curr;
                curr = next;
            }
            curr
        }
    }
}

/// Roots of Tₙ on [-1, 1]: cos((2k-1)π / 2n) for k = 1..=n
pub fn chebyshev_nodes(n: usize) -> Vec<f64> {
    (1..=n)
        .map(|k| ((2 * k - 1) as f64 * std::f64::consts::PI / (2 * n) as f64).cos())
        .collect()
}
