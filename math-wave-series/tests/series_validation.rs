//! Validation of series solutions against closed forms
//!
//! Covers the properties every expansion must have (zero data, time
//! reversal, clamped boundaries, determinism) and the preset scenarios
//! behind the figures.

use approx::assert_abs_diff_eq;
use math_wave_series::grid::{Grid1D, Point, line_points, meshgrid, polar_grid};
use math_wave_series::scenarios;
use math_wave_series::special::bessel_j0;
use math_wave_series::{
    CircularBasis, DomainPolicy, Eigenbasis, InitialConditions, RectangularBasis, SeriesEvaluator,
    SineBasis, solve,
};
use std::f64::consts::PI;

fn string_length() -> f64 {
    PI * 5.0_f64.sqrt()
}

/// sin(πx)³ on (1, 3), zero elsewhere
fn pluck(p: &Point) -> f64 {
    if 1.0 < p.x && p.x < 3.0 {
        (PI * p.x).sin().powi(3)
    } else {
        0.0
    }
}

fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

#[test]
fn test_zero_data_is_zero_everywhere() {
    let times = [0.0, 0.3, 5.0, -2.0];

    let string = SeriesEvaluator::new(
        SineBasis::uniform(2.0, 1.0, 201).unwrap(),
        30,
        &InitialConditions::zero(),
    )
    .unwrap();
    let points = line_points(&Grid1D::uniform(0.0, 2.0, 41).unwrap());
    assert!(string.field_series(&points, &times).unwrap().iter().all(|&u| u == 0.0));

    let membrane = SeriesEvaluator::new(
        RectangularBasis::uniform(1.0, 2.0, 1.0, 41, 41).unwrap(),
        6,
        &InitialConditions::new(|_| 0.0, |_| 0.0),
    )
    .unwrap();
    let grid = meshgrid(
        &Grid1D::uniform(0.0, 1.0, 9).unwrap(),
        &Grid1D::uniform(0.0, 2.0, 9).unwrap(),
    );
    assert!(membrane.field_series(&grid, &times).unwrap().iter().all(|&u| u == 0.0));

    let drum = SeriesEvaluator::new(
        CircularBasis::uniform(3.0, 0.5, 101).unwrap(),
        10,
        &InitialConditions::zero(),
    )
    .unwrap();
    let disk = polar_grid(
        &Grid1D::uniform(0.0, 3.0, 7).unwrap(),
        &Grid1D::uniform(0.0, 2.0 * PI, 7).unwrap(),
    );
    assert!(drum.field_series(&disk, &times).unwrap().iter().all(|&u| u == 0.0));
}

#[test]
fn test_pure_mode_orthogonality() {
    let l = string_length();
    let basis = SineBasis::uniform(l, 2.0 / 3.0, 1000).unwrap();
    let j = 7;
    let initial = InitialConditions::at_rest(move |p: &Point| (j as f64 * PI * p.x / l).sin());
    let series = SeriesEvaluator::new(basis, 40, &initial).unwrap();

    for c in series.coefficients() {
        let expected = if c.mode == j { 1.0 } else { 0.0 };
        assert_abs_diff_eq!(c.displacement, expected, epsilon = 1e-6);
        assert_eq!(c.velocity, 0.0);
    }
}

#[test]
fn test_time_reversal_without_velocity() {
    let l = string_length();
    let series = SeriesEvaluator::new(
        SineBasis::uniform(l, 2.0 / 3.0, 501).unwrap(),
        60,
        &InitialConditions::at_rest(pluck),
    )
    .unwrap();
    let points = line_points(&Grid1D::uniform(0.0, l, 37).unwrap());

    for t in [0.5, 3.0, 11.0, 29.5] {
        let forward = series.field(&points, t).unwrap();
        let backward = series.field(&points, -t).unwrap();
        assert!(max_abs_diff(forward.as_slice().unwrap(), backward.as_slice().unwrap()) < 1e-12);
    }
}

#[test]
fn test_velocity_breaks_time_reversal() {
    let series = SeriesEvaluator::new(
        SineBasis::uniform(PI, 1.0, 501).unwrap(),
        5,
        &InitialConditions::new(|_| 0.0, |p: &Point| p.x.sin()),
    )
    .unwrap();
    let p = Point::new_1d(PI / 2.0);
    // u = sin(t) sin(x) is odd in t
    assert_abs_diff_eq!(series.value(&p, 1.0), -series.value(&p, -1.0), epsilon = 1e-12);
    assert_abs_diff_eq!(series.value(&p, 1.0), 1.0_f64.sin(), epsilon = 1e-9);
}

#[test]
fn test_string_endpoints_stay_fixed() {
    let l = string_length();
    let series = SeriesEvaluator::new(
        SineBasis::uniform(l, 2.0 / 3.0, 1001).unwrap(),
        100,
        &InitialConditions::at_rest(pluck).with_velocity(|p: &Point| (p.x / 7.0).cos()),
    )
    .unwrap();

    for i in 0..50 {
        let t = i as f64 * 0.6;
        assert_abs_diff_eq!(series.value(&Point::new_1d(0.0), t), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(series.value(&Point::new_1d(l), t), 0.0, epsilon = 1e-10);
    }
}

#[test]
fn test_membrane_edges_stay_fixed() {
    let series = SeriesEvaluator::new(
        RectangularBasis::uniform(1.0, 2.0, PI, 60, 60).unwrap(),
        8,
        &InitialConditions::at_rest(|p: &Point| p.x * (1.0 - p.x) * p.y * (2.0 - p.y)),
    )
    .unwrap();

    let edges: Vec<Point> = (0..=10)
        .flat_map(|i| {
            let s = i as f64 / 10.0;
            [
                Point::new_2d(s, 0.0),
                Point::new_2d(s, 2.0),
                Point::new_2d(0.0, 2.0 * s),
                Point::new_2d(1.0, 2.0 * s),
            ]
        })
        .collect();

    let field = series.field_series(&edges, &[0.0, 0.7, 2.3]).unwrap();
    assert!(field.iter().all(|u| u.abs() < 1e-12));
}

#[test]
fn test_drum_rim_stays_fixed() {
    let frames = solve(&scenarios::circular_membrane()).unwrap();
    // Radial samples run fastest; the last one of each spoke is on the rim.
    let rim: Vec<usize> = (0..frames.positions.len()).filter(|i| i % 51 == 50).collect();
    assert_eq!(rim.len(), 51);

    for frame in &frames.frames {
        for &i in &rim {
            assert!(frame[i].abs() < 1e-9);
        }
    }
}

#[test]
fn test_presets_accepted_under_reject_policy() {
    for name in scenarios::SCENARIO_NAMES {
        let mut config = scenarios::by_name(name).unwrap();
        config.domain_policy = DomainPolicy::Reject;
        let strict = solve(&config).unwrap();
        config.domain_policy = DomainPolicy::Unchecked;
        let lenient = solve(&config).unwrap();
        assert_eq!(strict.frames, lenient.frames, "{name}");
    }
}

#[test]
fn test_reject_policy_on_disk_grid() {
    let drum = SeriesEvaluator::new(
        CircularBasis::uniform(3.0, 0.5, 51).unwrap(),
        5,
        &InitialConditions::zero(),
    )
    .unwrap()
    .with_domain_policy(DomainPolicy::Reject);

    let disk = polar_grid(
        &Grid1D::uniform(0.0, 3.0, 51).unwrap(),
        &Grid1D::uniform(0.0, 2.0 * PI, 51).unwrap(),
    );
    assert!(drum.field(&disk, 1.0).is_ok());

    let outside = [Point::from_polar(3.01, 0.5)];
    assert!(drum.field(&outside, 1.0).unwrap_err().is_domain_error());
}

#[test]
fn test_repeated_evaluation_is_identical() {
    let make = || {
        SeriesEvaluator::new(
            SineBasis::uniform(string_length(), 2.0 / 3.0, 101).unwrap(),
            100,
            &InitialConditions::at_rest(pluck),
        )
        .unwrap()
    };
    let points = line_points(&Grid1D::uniform(0.0, string_length(), 101).unwrap());
    let times = [0.0, 1.0, 17.0];

    let first = make().field_series(&points, &times).unwrap();
    let second = make().field_series(&points, &times).unwrap();
    assert_eq!(first, second);

    let series = make();
    assert_eq!(
        series.field_series(&points, &times).unwrap(),
        series.field_series(&points, &times).unwrap()
    );
}

#[test]
fn test_fixed_string_reproduces_pluck() {
    let frames = solve(&scenarios::fixed_string()).unwrap();
    assert_eq!(frames.len(), 31);
    assert_eq!(frames.positions.len(), 101);

    let expected: Vec<f64> = frames.positions.iter().map(pluck).collect();
    assert!(frames.linf_error(0, &expected) < 1e-9);

    // The pulse splits and reflects; nothing grows past the initial peak.
    assert!(frames.max_abs() < 1.05);
}

#[test]
fn test_rectangular_membrane_2_initial_shape() {
    let (a, b) = (1.0, 2.0);
    let basis = RectangularBasis::uniform(a, b, PI, 100, 100).unwrap();
    let prescribed =
        move |p: &Point| (PI / 2.0 + PI * p.x / a).cos() * (PI / 2.0 + PI * p.y / b).cos();
    let series = SeriesEvaluator::new(basis, 30, &InitialConditions::at_rest(prescribed)).unwrap();
    assert_eq!(series.mode_count(), 900);

    let grid = meshgrid(
        &Grid1D::uniform(0.0, a, 50).unwrap(),
        &Grid1D::uniform(0.0, b, 50).unwrap(),
    );
    let u0 = series.field(&grid, 0.0).unwrap();
    let expected: Vec<f64> = grid.iter().map(prescribed).collect();

    // Only the (1, 1) mode is excited; max residual is far below 1e-3.
    assert!(max_abs_diff(u0.as_slice().unwrap(), &expected) < 1e-3);

    let fundamental = series.coefficients()[0];
    assert_eq!(fundamental.mode, (1, 1));
    assert_abs_diff_eq!(fundamental.displacement, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(fundamental.frequency, PI * PI * 1.25_f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn test_rectangular_membrane_1_closed_form() {
    let config = scenarios::rectangular_membrane_1();
    let frames = solve(&config).unwrap();
    assert_eq!(frames.len(), 100);

    let closed_form = |p: &Point, t: f64| {
        (2.0_f64.sqrt() * t).cos() * p.x.sin() * p.y.sin()
            + (5.0 * t).sin() * (4.0 * p.x).sin() * (3.0 * p.y).sin() / 5.0
    };

    for (n, &t) in frames.times.iter().enumerate().step_by(9) {
        let expected: Vec<f64> = frames.positions.iter().map(|p| closed_form(p, t)).collect();
        assert!(frames.linf_error(n, &expected) < 1e-9, "frame {n} at t = {t}");
    }
}

#[test]
fn test_drum_pure_mode_oscillates() {
    let radius = 3.0;
    let speed = 0.5;
    let basis = CircularBasis::uniform(radius, speed, 2001).unwrap();
    let modes = basis.modes(3).unwrap();
    let target = modes[2];

    let shape = move |p: &Point| bessel_j0(target.zero * p.radius() / radius);
    let series = SeriesEvaluator::new(basis, 12, &InitialConditions::at_rest(shape)).unwrap();

    let omega = speed * target.zero / radius;
    let disk = polar_grid(
        &Grid1D::uniform(0.0, radius, 13).unwrap(),
        &Grid1D::uniform(0.0, 2.0 * PI, 5).unwrap(),
    );
    for t in [0.0, 1.0, 4.5] {
        let u = series.field(&disk, t).unwrap();
        for (p, value) in disk.iter().zip(u.iter()) {
            assert_abs_diff_eq!(*value, (omega * t).cos() * shape(p), epsilon = 1e-4);
        }
    }
}

#[test]
fn test_first_bessel_zeros() {
    let basis = CircularBasis::uniform(1.0, 1.0, 11).unwrap();
    let expected = [
        2.404825557695773,
        5.520078110286311,
        8.653727912911013,
        11.791534439014281,
        14.930917708487787,
    ];
    let modes = basis.modes(5).unwrap();
    for (mode, mu) in modes.iter().zip(expected) {
        assert_abs_diff_eq!(mode.zero, mu, epsilon = 1e-6);
    }
}

#[test]
fn test_invalid_mode_count() {
    let err = SeriesEvaluator::new(
        CircularBasis::uniform(1.0, 1.0, 11).unwrap(),
        0,
        &InitialConditions::zero(),
    )
    .unwrap_err();
    assert!(err.is_config_error());

    let mut config = scenarios::fixed_string();
    config.modes = 0;
    assert!(solve(&config).is_err());
}
