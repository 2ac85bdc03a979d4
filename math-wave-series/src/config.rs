//! JSON configuration for series problems
//!
//! A [`ProblemConfig`] carries everything a run needs: geometry and
//! physical constants, grid resolutions, truncation order, initial
//! profiles and time sampling. Nothing is read from globals.

use crate::error::{Result, SeriesError};
use crate::evaluator::DomainPolicy;
use crate::grid::{Point, linspace};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fs;
use std::path::Path;

/// Complete problem description loaded from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemConfig {
    /// Run name, copied into the output
    pub name: String,
    /// Geometry, physical constants and grids
    pub geometry: GeometryConfig,
    /// Truncation order N (per axis for rectangles)
    pub modes: usize,
    /// Initial displacement and velocity
    pub initial: InitialConfig,
    /// Time sampling
    pub time: TimeConfig,
    /// Handling of evaluation points outside the geometry
    #[serde(default)]
    pub domain_policy: DomainPolicy,
}

/// Geometry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeometryConfig {
    /// String fixed at both ends of [0, length]
    #[serde(rename = "string")]
    String {
        /// Length L
        length: f64,
        /// Wave speed a
        wave_speed: f64,
        /// Quadrature samples on [0, L]
        #[serde(default = "default_quadrature_points")]
        quadrature_points: usize,
        /// Evaluation samples on [0, L]
        #[serde(default = "default_evaluation_points")]
        evaluation_points: usize,
    },
    /// Clamped rectangle [0, width] × [0, height]
    #[serde(rename = "rectangle")]
    Rectangle {
        /// Side along x
        width: f64,
        /// Side along y
        height: f64,
        /// Wave speed c
        wave_speed: f64,
        /// Quadrature samples per axis
        #[serde(default = "default_quadrature_points")]
        quadrature_points: usize,
        /// Evaluation samples per axis
        #[serde(default = "default_evaluation_points")]
        evaluation_points: usize,
    },
    /// Clamped disk, axisymmetric modes
    #[serde(rename = "disk")]
    Disk {
        /// Radius r
        radius: f64,
        /// Wave speed a
        wave_speed: f64,
        /// Radial quadrature samples on [0, r]
        #[serde(default = "default_quadrature_points")]
        quadrature_points: usize,
        /// Radial evaluation samples
        #[serde(default = "default_evaluation_points")]
        radial_points: usize,
        /// Angular evaluation samples on [0, 2π]
        #[serde(default = "default_evaluation_points")]
        angular_points: usize,
    },
}

fn default_quadrature_points() -> usize {
    1001
}

fn default_evaluation_points() -> usize {
    51
}

impl GeometryConfig {
    /// Short name of the geometry
    pub fn kind(&self) -> &'static str {
        match self {
            GeometryConfig::String { .. } => "string",
            GeometryConfig::Rectangle { .. } => "rectangle",
            GeometryConfig::Disk { .. } => "disk",
        }
    }
}

/// Initial displacement and velocity profiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialConfig {
    /// Initial displacement φ
    pub displacement: ProfileConfig,
    /// Initial velocity ψ
    #[serde(default)]
    pub velocity: ProfileConfig,
}

/// Closed set of analytic initial profiles
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProfileConfig {
    /// Identically zero
    #[serde(rename = "zero")]
    #[default]
    Zero,
    /// sin(πx)³ on the open interval (start, end), zero elsewhere
    #[serde(rename = "sine_cubed_pulse")]
    SineCubedPulse {
        /// Left end of the pulse
        start: f64,
        /// Right end of the pulse
        end: f64,
    },
    /// amplitude · sin(k x)
    #[serde(rename = "sine")]
    Sine {
        /// Spatial wavenumber k
        wavenumber: f64,
        /// Amplitude
        #[serde(default = "default_amplitude")]
        amplitude: f64,
    },
    /// amplitude · sin(kx x) · sin(ky y)
    #[serde(rename = "product_sine")]
    ProductSine {
        /// Wavenumber along x
        kx: f64,
        /// Wavenumber along y
        ky: f64,
        /// Amplitude
        #[serde(default = "default_amplitude")]
        amplitude: f64,
    },
    /// ρ² sin(πρ)³, ρ the distance from the origin
    #[serde(rename = "radial_sine_cubed")]
    RadialSineCubed,
}

fn default_amplitude() -> f64 {
    1.0
}

impl ProfileConfig {
    /// Profile value at `point`
    pub fn evaluate(&self, point: &Point) -> f64 {
        match *self {
            ProfileConfig::Zero => 0.0,
            ProfileConfig::SineCubedPulse { start, end } => {
                if start < point.x && point.x < end {
                    (PI * point.x).sin().powi(3)
                } else {
                    0.0
                }
            }
            ProfileConfig::Sine {
                wavenumber,
                amplitude,
            } => amplitude * (wavenumber * point.x).sin(),
            ProfileConfig::ProductSine { kx, ky, amplitude } => {
                amplitude * (kx * point.x).sin() * (ky * point.y).sin()
            }
            ProfileConfig::RadialSineCubed => {
                let rho = point.radius();
                rho * rho * (PI * rho).sin().powi(3)
            }
        }
    }

    /// Whether the profile is identically zero
    pub fn is_zero(&self) -> bool {
        matches!(self, ProfileConfig::Zero)
    }
}

/// Time sampling: `samples` instants evenly spread over [0, t_max]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeConfig {
    /// Last time sample
    pub t_max: f64,
    /// Number of frames
    pub samples: usize,
}

impl TimeConfig {
    /// Generate the time samples
    pub fn generate_times(&self) -> Result<Vec<f64>> {
        match self.samples {
            0 => Err(SeriesError::Config("time.samples must be >= 1".into())),
            1 => Ok(vec![0.0]),
            n => Ok(linspace(0.0, self.t_max, n)?.to_vec()),
        }
    }
}

impl ProblemConfig {
    /// Parse from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ProblemConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the parts that do not need a basis to be built
    pub fn validate(&self) -> Result<()> {
        if self.modes == 0 {
            return Err(SeriesError::InvalidModeCount { order: self.modes });
        }
        if !self.time.t_max.is_finite() || self.time.t_max < 0.0 {
            return Err(SeriesError::InvalidParameter {
                name: "t_max",
                value: self.time.t_max,
            });
        }
        if self.time.samples == 0 {
            return Err(SeriesError::Config("time.samples must be >= 1".into()));
        }
        Ok(())
    }
}

/// Load configuration from a JSON file
pub fn load_config(path: impl AsRef<Path>) -> Result<ProblemConfig> {
    let json = fs::read_to_string(path)?;
    ProblemConfig::from_json_str(&json)
}

/// Save configuration to a JSON file
pub fn save_config(config: &ProblemConfig, path: impl AsRef<Path>) -> Result<()> {
    fs::write(path, config.to_json_string()?)?;
    Ok(())
}
