//! Truncated modal superposition
//!
//! ```text
//! u(p, t) = Σ_k [A_k cos(ω_k t) + B_k sin(ω_k t)] X_k(p)
//! A_k = ⟨φ, X_k⟩ / ‖X_k‖²,   B_k = ⟨ψ, X_k⟩ / (ω_k ‖X_k‖²)
//! ```
//!
//! Coefficients depend only on the basis, the truncation order and the
//! initial data. They are computed once in [`SeriesEvaluator::new`] and
//! reused for every time sample.

use crate::basis::Eigenbasis;
use crate::error::{Result, SeriesError};
use crate::grid::Point;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

type Profile<'a> = Box<dyn Fn(&Point) -> f64 + 'a>;

/// Initial displacement φ and velocity ψ
///
/// A missing velocity is the identically zero function: every `B_k` is
/// then exactly zero and no frequency division happens.
pub struct InitialConditions<'a> {
    displacement: Profile<'a>,
    velocity: Option<Profile<'a>>,
}

impl<'a> InitialConditions<'a> {
    /// Released from rest with displacement `displacement`
    pub fn at_rest(displacement: impl Fn(&Point) -> f64 + 'a) -> Self {
        Self {
            displacement: Box::new(displacement),
            velocity: None,
        }
    }

    /// Displacement and velocity
    pub fn new(
        displacement: impl Fn(&Point) -> f64 + 'a,
        velocity: impl Fn(&Point) -> f64 + 'a,
    ) -> Self {
        Self {
            displacement: Box::new(displacement),
            velocity: Some(Box::new(velocity)),
        }
    }

    /// Flat and at rest
    pub fn zero() -> Self {
        Self::at_rest(|_| 0.0)
    }

    /// Replace the velocity profile
    pub fn with_velocity(mut self, velocity: impl Fn(&Point) -> f64 + 'a) -> Self {
        self.velocity = Some(Box::new(velocity));
        self
    }

    /// Initial displacement at `point`
    pub fn displacement(&self, point: &Point) -> f64 {
        (self.displacement)(point)
    }

    /// Initial velocity at `point`
    pub fn velocity(&self, point: &Point) -> f64 {
        self.velocity.as_ref().map_or(0.0, |v| v(point))
    }

    /// Whether a velocity profile was supplied
    pub fn has_velocity(&self) -> bool {
        self.velocity.is_some()
    }
}

impl std::fmt::Debug for InitialConditions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InitialConditions")
            .field("has_velocity", &self.has_velocity())
            .finish_non_exhaustive()
    }
}

/// Cosine and sine amplitudes of one mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModalCoefficient<M> {
    /// Mode label
    pub mode: M,
    /// Angular frequency ω
    pub frequency: f64,
    /// A: amplitude of cos(ωt), from the displacement
    pub displacement: f64,
    /// B: amplitude of sin(ωt), from the velocity
    pub velocity: f64,
}

impl<M> ModalCoefficient<M> {
    /// Temporal weight A cos(ωt) + B sin(ωt)
    #[inline]
    pub fn weight(&self, t: f64) -> f64 {
        let (s, c) = (self.frequency * t).sin_cos();
        self.displacement * c + self.velocity * s
    }
}

/// What to do with evaluation points outside the geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainPolicy {
    /// Evaluate the series wherever asked
    #[default]
    Unchecked,
    /// Fail with [`SeriesError::PointOutsideDomain`]
    Reject,
}

/// Eigenfunction-series solution of the wave equation
#[derive(Debug, Clone)]
pub struct SeriesEvaluator<B: Eigenbasis> {
    basis: B,
    coefficients: Vec<ModalCoefficient<B::Mode>>,
    policy: DomainPolicy,
}

impl<B: Eigenbasis> SeriesEvaluator<B> {
    /// Project `initial` onto the first `order` modes of `basis`
    ///
    /// # Example
    ///
    /// ```rust
    /// use math_wave_series::{InitialConditions, SeriesEvaluator, SineBasis};
    /// use math_wave_series::grid::Point;
    /// use std::f64::consts::PI;
    ///
    /// let basis = SineBasis::uniform(PI, 1.0, 1001).unwrap();
    /// let initial = InitialConditions::at_rest(|p: &Point| p.x.sin());
    /// let series = SeriesEvaluator::new(basis, 5, &initial).unwrap();
    ///
    /// // Fundamental mode: u = cos(t) sin(x)
    /// let u = series.value(&Point::new_1d(PI / 2.0), PI);
    /// assert!((u + 1.0).abs() < 1e-6);
    /// ```
    pub fn new(basis: B, order: usize, initial: &InitialConditions<'_>) -> Result<Self> {
        if order == 0 {
            return Err(SeriesError::InvalidModeCount { order });
        }

        let modes = basis.modes(order)?;
        let points = basis.quadrature_points();
        let phi = Array1::from_iter(points.iter().map(|p| initial.displacement(p)));
        let psi = initial
            .velocity
            .as_ref()
            .map(|v| Array1::from_iter(points.iter().map(|p| v(p))));

        let mut coefficients = Vec::with_capacity(modes.len());
        for mode in modes {
            let frequency = basis.frequency(mode);
            let displacement = basis.project(phi.view(), mode)?;
            let velocity = match &psi {
                Some(psi) if frequency > 0.0 => basis.project(psi.view(), mode)? / frequency,
                Some(_) => {
                    log::warn!("Skipping velocity term of mode {:?} (ω = {})", mode, frequency);
                    0.0
                }
                None => 0.0,
            };
            coefficients.push(ModalCoefficient {
                mode,
                frequency,
                displacement,
                velocity,
            });
        }

        log::info!(
            "{}: {} modes projected on {} quadrature points",
            basis.name(),
            coefficients.len(),
            points.len()
        );

        Ok(Self {
            basis,
            coefficients,
            policy: DomainPolicy::default(),
        })
    }

    /// Set the out-of-domain policy
    pub fn with_domain_policy(mut self, policy: DomainPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Active out-of-domain policy
    pub fn domain_policy(&self) -> DomainPolicy {
        self.policy
    }

    /// Underlying eigenbasis
    pub fn basis(&self) -> &B {
        &self.basis
    }

    /// Modal coefficients, in mode order
    pub fn coefficients(&self) -> &[ModalCoefficient<B::Mode>] {
        &self.coefficients
    }

    /// Number of retained modes
    pub fn mode_count(&self) -> usize {
        self.coefficients.len()
    }

    /// u(point, t), ignoring the domain policy
    pub fn value(&self, point: &Point, t: f64) -> f64 {
        self.coefficients
            .iter()
            .map(|c| c.weight(t) * self.basis.eigenfunction(c.mode, point))
            .sum()
    }

    /// u(·, t) at every point
    pub fn field(&self, points: &[Point], t: f64) -> Result<Array1<f64>> {
        let rows = self.field_series(points, &[t])?;
        Ok(rows.row(0).to_owned())
    }

    /// u at every (time, point) pair, shaped `(times.len(), points.len())`
    ///
    /// Eigenfunctions are tabulated once and reused for all times.
    pub fn field_series(&self, points: &[Point], times: &[f64]) -> Result<Array2<f64>> {
        self.check_points(points)?;
        if let Some(&t) = times.iter().find(|t| !t.is_finite()) {
            return Err(SeriesError::InvalidParameter {
                name: "time",
                value: t,
            });
        }

        let shapes = Array2::from_shape_fn((self.coefficients.len(), points.len()), |(k, i)| {
            self.basis.eigenfunction(self.coefficients[k].mode, &points[i])
        });
        let weights = Array2::from_shape_fn((times.len(), self.coefficients.len()), |(n, k)| {
            self.coefficients[k].weight(times[n])
        });

        log::debug!(
            "Evaluating {} modes at {} points x {} times",
            self.coefficients.len(),
            points.len(),
            times.len()
        );

        Ok(weights.dot(&shapes))
    }

    fn check_points(&self, points: &[Point]) -> Result<()> {
        if self.policy == DomainPolicy::Unchecked {
            return Ok(());
        }
        match points.iter().find(|p| !self.basis.contains(p)) {
            Some(p) => Err(SeriesError::PointOutsideDomain { x: p.x, y: p.y }),
            None => Ok(()),
        }
    }
}
