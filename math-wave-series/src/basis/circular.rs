//! Circular membrane of radius r, axisymmetric modes
//!
//! ```text
//! u_tt = a² Δu,   u(r, θ, t) = 0
//! R_m(ρ) = J₀(μ_m ρ / r),   ω_m = a μ_m / r
//! A_m = 2 / (r² J₁(μ_m)²) ∫₀ʳ τ(ρ) J₀(μ_m ρ / r) ρ dρ
//! ```
//!
//! where μ_m is the m-th positive zero of J₀. The normalization follows
//! from ∫₀ʳ J₀(μ_m ρ/r)² ρ dρ = r² J₁(μ_m)² / 2. Initial data is assumed
//! radially symmetric and is sampled along θ = 0.

use super::{Eigenbasis, check_samples};
use crate::error::{Result, require_positive};
use crate::grid::{Grid1D, Point, SPAN_TOLERANCE, line_points};
use crate::quadrature::trapezoid;
use crate::special::{bessel_j0, bessel_j0_zeros, bessel_j1};
use ndarray::{ArrayView1, Zip};
use serde::{Deserialize, Serialize};

/// Axisymmetric mode: 1-based index and the J₀ zero it oscillates on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BesselMode {
    /// Mode index m (1-based)
    pub index: usize,
    /// μ_m, the m-th positive zero of J₀
    pub zero: f64,
}

/// Fourier–Bessel basis of a clamped disk
#[derive(Debug, Clone, PartialEq)]
pub struct CircularBasis {
    radius: f64,
    wave_speed: f64,
    rho: Grid1D,
}

impl CircularBasis {
    /// Disk of radius `radius`; `rho` is the radial quadrature grid on [0, radius]
    pub fn new(radius: f64, wave_speed: f64, rho: Grid1D) -> Result<Self> {
        let radius = require_positive("radius", radius)?;
        let wave_speed = require_positive("wave_speed", wave_speed)?;
        rho.require_span("rho", 0.0, radius)?;
        Ok(Self {
            radius,
            wave_speed,
            rho,
        })
    }

    /// Uniform radial grid with `num_points`
    pub fn uniform(radius: f64, wave_speed: f64, num_points: usize) -> Result<Self> {
        Self::new(radius, wave_speed, Grid1D::uniform(0.0, radius, num_points)?)
    }

    /// Disk radius r
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Radial quadrature grid
    pub fn radial_grid(&self) -> &Grid1D {
        &self.rho
    }

    fn radial_shape(&self, mode: BesselMode, rho: f64) -> f64 {
        bessel_j0(mode.zero * rho / self.radius)
    }
}

impl Eigenbasis for CircularBasis {
    type Mode = BesselMode;

    fn name(&self) -> &'static str {
        "circular_membrane"
    }

    fn dimensions(&self) -> usize {
        2
    }

    /// First `order` axisymmetric modes; fails if a J₀ zero cannot be bracketed
    fn modes(&self, order: usize) -> Result<Vec<BesselMode>> {
        let zeros = bessel_j0_zeros(order)?;
        Ok(zeros
            .into_iter()
            .enumerate()
            .map(|(i, zero)| BesselMode { index: i + 1, zero })
            .collect())
    }

    fn eigenfunction(&self, mode: BesselMode, point: &Point) -> f64 {
        self.radial_shape(mode, point.radius())
    }

    fn frequency(&self, mode: BesselMode) -> f64 {
        self.wave_speed * mode.zero / self.radius
    }

    fn quadrature_points(&self) -> Vec<Point> {
        line_points(&self.rho)
    }

    fn project(&self, samples: ArrayView1<f64>, mode: BesselMode) -> Result<f64> {
        let rho = self.rho.points();
        check_samples(samples.len(), rho.len())?;

        let integrand = Zip::from(&samples)
            .and(rho)
            .map_collect(|&f, &r| f * self.radial_shape(mode, r) * r);

        let j1 = bessel_j1(mode.zero);
        let norm = self.radius * self.radius * j1 * j1;
        Ok(2.0 * trapezoid(integrand.view(), rho.view())? / norm)
    }

    fn contains(&self, point: &Point) -> bool {
        point.radius() <= self.radius * (1.0 + SPAN_TOLERANCE)
    }
}
