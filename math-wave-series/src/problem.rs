//! From configuration to frames
//!
//! [`solve`] builds the basis and initial conditions a
//! [`ProblemConfig`] describes, projects once, and evaluates every frame.
//! A renderer then owns all drawing state and simply walks the frames.

use crate::basis::{CircularBasis, Eigenbasis, RectangularBasis, SineBasis};
use crate::config::{GeometryConfig, InitialConfig, ProblemConfig};
use crate::error::Result;
use crate::evaluator::{InitialConditions, SeriesEvaluator};
use crate::grid::{Grid1D, Point, line_points, meshgrid, polar_grid};
use crate::output::FrameSet;
use std::f64::consts::PI;
use std::time::Instant;

/// Build initial conditions from configured profiles
pub fn initial_conditions(config: &InitialConfig) -> InitialConditions<'_> {
    let displacement = config.displacement;
    let initial = InitialConditions::at_rest(move |p: &Point| displacement.evaluate(p));
    if config.velocity.is_zero() {
        initial
    } else {
        let velocity = config.velocity;
        initial.with_velocity(move |p: &Point| velocity.evaluate(p))
    }
}

/// Evaluate the problem described by `config`
pub fn solve(config: &ProblemConfig) -> Result<FrameSet> {
    config.validate()?;
    let start = Instant::now();
    let initial = initial_conditions(&config.initial);
    let times = config.time.generate_times()?;

    let frames = match config.geometry {
        GeometryConfig::String {
            length,
            wave_speed,
            quadrature_points,
            evaluation_points,
        } => {
            let basis = SineBasis::uniform(length, wave_speed, quadrature_points)?;
            let positions = line_points(&Grid1D::uniform(0.0, length, evaluation_points)?);
            run(config, basis, &initial, positions, times)?.with_metadata(serde_json::json!({
                "length": length,
                "wave_speed": wave_speed,
                "quadrature_points": quadrature_points,
            }))
        }
        GeometryConfig::Rectangle {
            width,
            height,
            wave_speed,
            quadrature_points,
            evaluation_points,
        } => {
            let basis = RectangularBasis::uniform(
                width,
                height,
                wave_speed,
                quadrature_points,
                quadrature_points,
            )?;
            let positions = meshgrid(
                &Grid1D::uniform(0.0, width, evaluation_points)?,
                &Grid1D::uniform(0.0, height, evaluation_points)?,
            );
            run(config, basis, &initial, positions, times)?.with_metadata(serde_json::json!({
                "width": width,
                "height": height,
                "wave_speed": wave_speed,
                "quadrature_points": quadrature_points,
                "grid_shape": [evaluation_points, evaluation_points],
            }))
        }
        GeometryConfig::Disk {
            radius,
            wave_speed,
            quadrature_points,
            radial_points,
            angular_points,
        } => {
            let basis = CircularBasis::uniform(radius, wave_speed, quadrature_points)?;
            let positions = polar_grid(
                &Grid1D::uniform(0.0, radius, radial_points)?,
                &Grid1D::uniform(0.0, 2.0 * PI, angular_points)?,
            );
            run(config, basis, &initial, positions, times)?.with_metadata(serde_json::json!({
                "radius": radius,
                "wave_speed": wave_speed,
                "quadrature_points": quadrature_points,
                "grid_shape": [angular_points, radial_points],
            }))
        }
    };

    log::info!(
        "{}: {} frames x {} points in {:.1}ms",
        config.name,
        frames.len(),
        frames.positions.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(frames.with_metadata(serde_json::json!({
        "t_max": config.time.t_max,
        "initial": config.initial,
    })))
}

fn run<B: Eigenbasis>(
    config: &ProblemConfig,
    basis: B,
    initial: &InitialConditions<'_>,
    positions: Vec<Point>,
    times: Vec<f64>,
) -> Result<FrameSet> {
    let series = SeriesEvaluator::new(basis, config.modes, initial)?
        .with_domain_policy(config.domain_policy);
    FrameSet::evaluate(config.name.clone(), &series, positions, times)
}
