//! Eigenfunction-series solutions of the wave equation
//!
//! This crate evaluates truncated modal expansions of the wave equation
//! with Dirichlet boundaries, for use as illustrations of the Fourier
//! method and as reference solutions.
//!
//! # Features
//!
//! - **1D**: string fixed at both ends (Fourier sine series)
//! - **2D**: rectangular membrane (double sine series)
//! - **2D**: circular membrane (Fourier–Bessel series on J₀ zeros)
//! - **Special functions**: Bessel J₀/J₁, J₀ zeros, Chebyshev polynomials
//! - **Output**: JSON frame sets for an external plotting tool
//!
//! # Example
//!
//! ```rust
//! use math_wave_series::{InitialConditions, SeriesEvaluator, SineBasis};
//! use math_wave_series::grid::{Grid1D, Point, line_points};
//! use std::f64::consts::PI;
//!
//! let basis = SineBasis::uniform(PI, 1.0, 1001).unwrap();
//! let initial = InitialConditions::at_rest(|p: &Point| p.x.sin());
//! let series = SeriesEvaluator::new(basis, 10, &initial).unwrap();
//!
//! let points = line_points(&Grid1D::uniform(0.0, PI, 50).unwrap());
//! let frames = series.field_series(&points, &[0.0, 1.0, 2.0]).unwrap();
//! assert_eq!(frames.dim(), (3, 50));
//! ```

pub mod basis;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod grid;
pub mod output;
pub mod problem;
pub mod quadrature;
pub mod scenarios;
pub mod special;

// Re-export main types at crate root
pub use basis::{BesselMode, CircularBasis, Eigenbasis, RectangularBasis, SineBasis};
pub use config::{ProblemConfig, load_config};
pub use error::{Result, SeriesError};
pub use evaluator::{DomainPolicy, InitialConditions, ModalCoefficient, SeriesEvaluator};
pub use grid::Point;
pub use output::FrameSet;
pub use problem::solve;
