//! Dirichlet eigenbases for separable wave problems
//!
//! Each basis knows its truncated mode set, how to evaluate a mode at a
//! point, the mode's angular frequency, and how to project sampled data
//! onto a mode (trapezoidal inner product divided by the mode's squared
//! norm). The [`SeriesEvaluator`](crate::SeriesEvaluator) is written
//! against the [`Eigenbasis`] trait only.
//!
//! ## Available Bases
//!
//! - **1D**: fixed string, `sin(kπx/L)`
//! - **2D**: rectangular membrane, `sin(nπx/a) sin(mπy/b)`
//! - **2D**: circular membrane (axisymmetric), `J₀(μₘρ/r)`

use crate::error::Result;
use crate::grid::Point;
use ndarray::ArrayView1;
use serde::Serialize;
use std::fmt::Debug;

mod circular;
mod rectangular;
mod sine;

pub use circular::*;
pub use rectangular::*;
pub use sine::*;

/// Orthogonal eigenbasis satisfying the boundary conditions of a domain
pub trait Eigenbasis {
    /// Mode label (an index, a pair of indices, or an index with its zero)
    type Mode: Copy + Debug + Serialize;

    /// Short geometry name used in output metadata
    fn name(&self) -> &'static str;

    /// Number of spatial dimensions (1 or 2)
    fn dimensions(&self) -> usize;

    /// Leading modes kept at truncation order `order` (must be >= 1)
    fn modes(&self, order: usize) -> Result<Vec<Self::Mode>>;

    /// Eigenfunction value at `point`
    fn eigenfunction(&self, mode: Self::Mode, point: &Point) -> f64;

    /// Temporal angular frequency ω of a mode
    fn frequency(&self, mode: Self::Mode) -> f64;

    /// Points at which initial data is sampled for projection
    fn quadrature_points(&self) -> Vec<Point>;

    /// Coefficient of `mode` in the expansion of data sampled on
    /// [`quadrature_points`](Self::quadrature_points)
    fn project(&self, samples: ArrayView1<f64>, mode: Self::Mode) -> Result<f64>;

    /// Whether `point` lies in the closed domain
    fn contains(&self, point: &Point) -> bool;
}

pub(crate) fn check_order(order: usize) -> Result<()> {
    if order == 0 {
        return Err(crate::SeriesError::InvalidModeCount { order });
    }
    Ok(())
}

pub(crate) fn check_samples(samples: usize, expected: usize) -> Result<()> {
    if samples != expected {
        return Err(crate::SeriesError::malformed(format!(
            "{samples} samples for {expected} quadrature points"
        )));
    }
    Ok(())
}
