//! Fixed string on [0, L]
//!
//! ```text
//! u_tt = a² u_xx,   u(0, t) = u(L, t) = 0
//! X_k(x) = sin(kπx/L),   ω_k = a k π / L
//! A_k = (2/L) ∫₀ᴸ φ(x) X_k(x) dx
//! ```

use super::{Eigenbasis, check_order, check_samples};
use crate::error::{Result, require_positive};
use crate::grid::{Grid1D, Point, line_points, within_interval};
use crate::quadrature::trapezoid;
use ndarray::{ArrayView1, Zip};
use std::f64::consts::PI;

/// Fourier sine basis of a string with both ends fixed
#[derive(Debug, Clone, PartialEq)]
pub struct SineBasis {
    length: f64,
    wave_speed: f64,
    quadrature: Grid1D,
}

impl SineBasis {
    /// String of length `length` with wave speed `wave_speed`
    ///
    /// `quadrature` must span `[0, length]`; its resolution bounds how
    /// well high modes are resolved.
    pub fn new(length: f64, wave_speed: f64, quadrature: Grid1D) -> Result<Self> {
        let length = require_positive("length", length)?;
        let wave_speed = require_positive("wave_speed", wave_speed)?;
        quadrature.require_span("x", 0.0, length)?;
        Ok(Self {
            length,
            wave_speed,
            quadrature,
        })
    }

    /// Same as [`new`](Self::new) with a uniform grid of `num_points`
    ///
    /// # Example
    ///
    /// ```rust
    /// use math_wave_series::SineBasis;
    /// use math_wave_series::basis::Eigenbasis;
    /// use std::f64::consts::PI;
    ///
    /// let basis = SineBasis::uniform(PI, 1.0, 1001).unwrap();
    /// assert!((basis.frequency(3) - 3.0).abs() < 1e-12);
    /// ```
    pub fn uniform(length: f64, wave_speed: f64, num_points: usize) -> Result<Self> {
        Self::new(length, wave_speed, Grid1D::uniform(0.0, length, num_points)?)
    }

    /// String length L
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Wave speed a
    pub fn wave_speed(&self) -> f64 {
        self.wave_speed
    }

    /// Quadrature grid
    pub fn quadrature(&self) -> &Grid1D {
        &self.quadrature
    }

    fn mode_shape(&self, k: usize, x: f64) -> f64 {
        (k as f64 * PI * x / self.length).sin()
    }
}

impl Eigenbasis for SineBasis {
    type Mode = usize;

    fn name(&self) -> &'static str {
        "fixed_string"
    }

    fn dimensions(&self) -> usize {
        1
    }

    fn modes(&self, order: usize) -> Result<Vec<usize>> {
        check_order(order)?;
        Ok((1..=order).collect())
    }

    fn eigenfunction(&self, k: usize, point: &Point) -> f64 {
        self.mode_shape(k, point.x)
    }

    fn frequency(&self, k: usize) -> f64 {
        self.wave_speed * k as f64 * PI / self.length
    }

    fn quadrature_points(&self) -> Vec<Point> {
        line_points(&self.quadrature)
    }

    fn project(&self, samples: ArrayView1<f64>, k: usize) -> Result<f64> {
        let x = self.quadrature.points();
        check_samples(samples.len(), x.len())?;

        let integrand = Zip::from(&samples)
            .and(x)
            .map_collect(|&f, &xi| f * self.mode_shape(k, xi));

        Ok(2.0 / self.length * trapezoid(integrand.view(), x.view())?)
    }

    fn contains(&self, point: &Point) -> bool {
        within_interval(point.x, 0.0, self.length)
    }
}
