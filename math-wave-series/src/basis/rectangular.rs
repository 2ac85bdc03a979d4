//! Rectangular membrane on [0, a] × [0, b]
//!
//! ```text
//! u_tt = c² Δu,   u = 0 on the boundary
//! φ_nm(x, y) = sin(nπx/a) sin(mπy/b)
//! λ_nm = π² (n²/a² + m²/b²),   ω_nm = c √λ_nm
//! A_nm = 4/(ab) ∬ φ(x, y) φ_nm(x, y) dx dy
//! ```

use super::{Eigenbasis, check_order, check_samples};
use crate::error::{Result, require_positive};
use crate::grid::{Grid1D, Point, meshgrid, within_interval};
use crate::quadrature::trapezoid_2d;
use ndarray::{Array1, Array2, ArrayView1};
use std::f64::consts::PI;

/// Double sine basis of a rectangle with clamped edges
#[derive(Debug, Clone, PartialEq)]
pub struct RectangularBasis {
    width: f64,
    height: f64,
    wave_speed: f64,
    x: Grid1D,
    y: Grid1D,
}

impl RectangularBasis {
    /// Rectangle with sides `width` (x) and `height` (y)
    ///
    /// `x` and `y` are the quadrature grids and must span their sides.
    pub fn new(width: f64, height: f64, wave_speed: f64, x: Grid1D, y: Grid1D) -> Result<Self> {
        let width = require_positive("width", width)?;
        let height = require_positive("height", height)?;
        let wave_speed = require_positive("wave_speed", wave_speed)?;
        x.require_span("x", 0.0, width)?;
        y.require_span("y", 0.0, height)?;
        Ok(Self {
            width,
            height,
            wave_speed,
            x,
            y,
        })
    }

    /// Uniform quadrature grids with `nx` and `ny` points
    pub fn uniform(width: f64, height: f64, wave_speed: f64, nx: usize, ny: usize) -> Result<Self> {
        Self::new(
            width,
            height,
            wave_speed,
            Grid1D::uniform(0.0, width, nx)?,
            Grid1D::uniform(0.0, height, ny)?,
        )
    }

    /// Side along x
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Side along y
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Eigenvalue λ_nm of the Dirichlet Laplacian
    pub fn eigenvalue(&self, (n, m): (usize, usize)) -> f64 {
        let (n, m) = (n as f64, m as f64);
        PI * PI * (n * n / (self.width * self.width) + m * m / (self.height * self.height))
    }

    fn axis_shape(&self, k: usize, grid: &Grid1D, side: f64) -> Array1<f64> {
        grid.points().mapv(|v| (k as f64 * PI * v / side).sin())
    }
}

impl Eigenbasis for RectangularBasis {
    type Mode = (usize, usize);

    fn name(&self) -> &'static str {
        "rectangular_membrane"
    }

    fn dimensions(&self) -> usize {
        2
    }

    /// All pairs (n, m) in 1..=order × 1..=order, n outer
    fn modes(&self, order: usize) -> Result<Vec<(usize, usize)>> {
        check_order(order)?;
        Ok((1..=order)
            .flat_map(|n| (1..=order).map(move |m| (n, m)))
            .collect())
    }

    fn eigenfunction(&self, (n, m): (usize, usize), point: &Point) -> f64 {
        (n as f64 * PI * point.x / self.width).sin() * (m as f64 * PI * point.y / self.height).sin()
    }

    fn frequency(&self, mode: (usize, usize)) -> f64 {
        self.wave_speed * self.eigenvalue(mode).sqrt()
    }

    fn quadrature_points(&self) -> Vec<Point> {
        meshgrid(&self.x, &self.y)
    }

    fn project(&self, samples: ArrayView1<f64>, (n, m): (usize, usize)) -> Result<f64> {
        let (nx, ny) = (self.x.len(), self.y.len());
        check_samples(samples.len(), nx * ny)?;

        let sx = self.axis_shape(n, &self.x, self.width);
        let sy = self.axis_shape(m, &self.y, self.height);
        let integrand =
            Array2::from_shape_fn((ny, nx), |(j, i)| samples[j * nx + i] * sx[i] * sy[j]);

        let integral = trapezoid_2d(
            integrand.view(),
            self.x.points().view(),
            self.y.points().view(),
        )?;
        Ok(4.0 / (self.width * self.height) * integral)
    }

    fn contains(&self, point: &Point) -> bool {
        within_interval(point.x, 0.0, self.width) && within_interval(point.y, 0.0, self.height)
    }
}
