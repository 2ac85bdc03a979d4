//! Trapezoidal quadrature on sampled data
//!
//! Modal coefficients are inner products of sampled initial data against
//! sampled eigenfunctions. The composite trapezoidal rule is exact for the
//! discrete sine transform on uniform grids, which is what makes a pure
//! sine mode project onto itself to machine precision.

use crate::error::{Result, SeriesError};
use ndarray::{ArrayView1, ArrayView2};

/// Composite trapezoidal rule ∫ y dx over a (possibly non-uniform) grid
///
/// # Example
///
/// ```rust
/// use math_wave_series::quadrature::trapezoid;
/// use ndarray::array;
///
/// let x = array![0.0, 1.0, 2.0];
/// let y = array![0.0, 1.0, 2.0];
/// assert_eq!(trapezoid(y.view(), x.view()).unwrap(), 2.0);
/// ```
pub fn trapezoid(y: ArrayView1<f64>, x: ArrayView1<f64>) -> Result<f64> {
    if y.len() != x.len() {
        return Err(SeriesError::malformed(format!(
            "trapezoid: {} samples for {} nodes",
            y.len(),
            x.len()
        )));
    }
    if x.len() < 2 {
        return Ok(0.0);
    }

    let sum = x
        .windows(2)
        .into_iter()
        .zip(y.windows(2))
        .map(|(xs, ys)| (xs[1] - xs[0]) * (ys[0] + ys[1]))
        .sum::<f64>();

    Ok(0.5 * sum)
}

/// Iterated trapezoidal rule ∬ f dx dy over a tensor grid
///
/// `values` is shaped `(y.len(), x.len())`, rows running along x.
pub fn trapezoid_2d(
    values: ArrayView2<f64>,
    x: ArrayView1<f64>,
    y: ArrayView1<f64>,
) -> Result<f64> {
    let (ny, nx) = values.dim();
    if ny != y.len() || nx != x.len() {
        return Err(SeriesError::malformed(format!(
            "trapezoid_2d: values are {ny}x{nx} but grid is {}x{}",
            y.len(),
            x.len()
        )));
    }

    let mut rows = Vec::with_capacity(ny);
    for row in values.rows() {
        rows.push(trapezoid(row, x)?);
    }
    trapezoid(ArrayView1::from(&rows[..]), y)
}
