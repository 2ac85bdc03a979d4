//! Sample grids and evaluation points
//!
//! A [`Grid1D`] is the immutable, validated set of coordinates used both
//! for quadrature and for evaluation along one axis. 2D point sets are
//! built from two grids with [`meshgrid`] (rectangles) or [`polar_grid`]
//! (disks).

use crate::error::{Result, SeriesError};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Relative tolerance used when checking that a grid spans a domain
/// or that a point lies on it.
pub(crate) const SPAN_TOLERANCE: f64 = 1e-9;

/// Whether `value` lies in `[start, end]`, allowing rounding at the ends
pub(crate) fn within_interval(value: f64, start: f64, end: f64) -> bool {
    let slack = SPAN_TOLERANCE * (end - start).abs().max(1.0);
    start - slack <= value && value <= end + slack
}

/// Point in the plane (1D problems use `x` only)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point {
    /// x-coordinate
    pub x: f64,
    /// y-coordinate (0 for 1D)
    pub y: f64,
}

impl Point {
    /// Create 1D point
    pub fn new_1d(x: f64) -> Self {
        Self { x, y: 0.0 }
    }

    /// Create 2D point
    pub fn new_2d(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Polar coordinates (ρ, θ)
    pub fn from_polar(rho: f64, theta: f64) -> Self {
        Self::new_2d(rho * theta.cos(), rho * theta.sin())
    }

    /// Distance from origin
    pub fn radius(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Polar angle from the positive x-axis
    pub fn theta(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new_2d(0.0, 0.0)
    }
}

/// `num` evenly spaced samples over `[start, end]`, both ends included.
///
/// # Example
///
/// ```rust
/// use math_wave_series::grid::linspace;
///
/// let x = linspace(0.0, 1.0, 5).unwrap();
/// assert_eq!(x.to_vec(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, end: f64, num: usize) -> Result<Array1<f64>> {
    if num < 2 {
        return Err(SeriesError::malformed(format!(
            "need at least 2 samples, got {num}"
        )));
    }
    if !start.is_finite() || !end.is_finite() {
        return Err(SeriesError::malformed(format!(
            "non-finite interval [{start}, {end}]"
        )));
    }

    let step = (end - start) / (num - 1) as f64;
    let mut values = Array1::from_shape_fn(num, |i| start + i as f64 * step);
    // Pin the last sample so the grid ends exactly on `end`.
    values[num - 1] = end;
    Ok(values)
}

/// Validated, strictly increasing 1D sample grid
#[derive(Debug, Clone, PartialEq)]
pub struct Grid1D {
    points: Array1<f64>,
}

impl Grid1D {
    /// Uniform grid with `num` samples over `[start, end]`
    pub fn uniform(start: f64, end: f64, num: usize) -> Result<Self> {
        Self::from_array(linspace(start, end, num)?)
    }

    /// Grid from explicit sample coordinates
    pub fn from_points(points: Vec<f64>) -> Result<Self> {
        Self::from_array(Array1::from_vec(points))
    }

    fn from_array(points: Array1<f64>) -> Result<Self> {
        if points.len() < 2 {
            return Err(SeriesError::malformed(format!(
                "need at least 2 samples, got {}",
                points.len()
            )));
        }
        if let Some(bad) = points.iter().find(|v| !v.is_finite()) {
            return Err(SeriesError::malformed(format!("non-finite sample {bad}")));
        }
        if let Some(i) = (1..points.len()).find(|&i| points[i] <= points[i - 1]) {
            return Err(SeriesError::malformed(format!(
                "samples must be strictly increasing (index {i}: {} after {})",
                points[i],
                points[i - 1]
            )));
        }
        Ok(Self { points })
    }

    /// Sample coordinates
    pub fn points(&self) -> &Array1<f64> {
        &self.points
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a grid holds at least two samples
    pub fn is_empty(&self) -> bool {
        false
    }

    /// First sample
    pub fn start(&self) -> f64 {
        self.points[0]
    }

    /// Last sample
    pub fn end(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    /// Whether the grid starts at `start` and ends at `end`
    pub fn spans(&self, start: f64, end: f64) -> bool {
        let scale = (end - start).abs().max(1.0);
        (self.start() - start).abs() <= SPAN_TOLERANCE * scale
            && (self.end() - end).abs() <= SPAN_TOLERANCE * scale
    }

    /// Fail with `MalformedDomain` unless the grid spans `[start, end]`
    pub(crate) fn require_span(&self, axis: &str, start: f64, end: f64) -> Result<()> {
        if self.spans(start, end) {
            Ok(())
        } else {
            Err(SeriesError::malformed(format!(
                "{axis} grid covers [{}, {}] but the domain is [{start}, {end}]",
                self.start(),
                self.end()
            )))
        }
    }
}

/// Points along a 1D grid
pub fn line_points(grid: &Grid1D) -> Vec<Point> {
    grid.points().iter().map(|&x| Point::new_1d(x)).collect()
}

/// Tensor-product points, y outer and x inner
///
/// Matches the row-major layout of `meshgrid(x, y)`: the point at
/// `(row j, column i)` sits at index `j * x.len() + i`.
pub fn meshgrid(x: &Grid1D, y: &Grid1D) -> Vec<Point> {
    let mut points = Vec::with_capacity(x.len() * y.len());
    for &yj in y.points() {
        for &xi in x.points() {
            points.push(Point::new_2d(xi, yj));
        }
    }
    points
}

/// Disk sample points, angle outer and radius inner
pub fn polar_grid(rho: &Grid1D, phi: &Grid1D) -> Vec<Point> {
    let mut points = Vec::with_capacity(rho.len() * phi.len());
    for &p in phi.points() {
        for &r in rho.points() {
            points.push(Point::from_polar(r, p));
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_within_interval_tolerates_rounding() {
        let l = PI * 5.0_f64.sqrt();
        assert!(within_interval(l, 0.0, l));
        assert!(within_interval(l * (1.0 + f64::EPSILON), 0.0, l));
        assert!(within_interval(-1e-15, 0.0, l));
        assert!(!within_interval(l + 1e-6, 0.0, l));
        assert!(!within_interval(-1e-6, 0.0, l));
    }

    #[test]
    fn test_point_creation() {
        let p1d = Point::new_1d(1.0);
        assert_eq!(p1d.x, 1.0);
        assert_eq!(p1d.y, 0.0);

        let p2d = Point::from_polar(2.0, PI / 4.0);
        assert_abs_diff_eq!(p2d.radius(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p2d.theta(), PI / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_point_distance() {
        let p1 = Point::new_2d(1.0, 0.0);
        let p2 = Point::new_2d(4.0, 4.0);
        assert_abs_diff_eq!(p1.distance_to(&p2), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_linspace_endpoints() {
        let l = PI * 5.0_f64.sqrt();
        let x = linspace(0.0, l, 101).unwrap();
        assert_eq!(x.len(), 101);
        assert_eq!(x[0], 0.0);
        assert_eq!(x[100], l);
        assert_abs_diff_eq!(x[50], l / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_linspace_too_short() {
        assert!(linspace(0.0, 1.0, 1).is_err());
        assert!(linspace(0.0, f64::NAN, 10).is_err());
    }

    #[test]
    fn test_grid_rejects_non_increasing() {
        let err = Grid1D::from_points(vec![0.0, 1.0, 1.0, 2.0]).unwrap_err();
        assert!(err.is_domain_error());
        assert!(Grid1D::from_points(vec![0.0, f64::INFINITY]).is_err());
        assert!(Grid1D::from_points(vec![0.0]).is_err());
    }

    #[test]
    fn test_grid_span() {
        let grid = Grid1D::uniform(0.0, 2.0, 11).unwrap();
        assert!(grid.spans(0.0, 2.0));
        assert!(!grid.spans(0.0, 3.0));
        assert!(grid.require_span("x", 0.0, 3.0).is_err());
    }

    #[test]
    fn test_meshgrid_layout() {
        let x = Grid1D::from_points(vec![0.0, 1.0, 2.0]).unwrap();
        let y = Grid1D::from_points(vec![10.0, 20.0]).unwrap();
        let points = meshgrid(&x, &y);

        assert_eq!(points.len(), 6);
        assert_eq!(points[1], Point::new_2d(1.0, 10.0));
        assert_eq!(points[3], Point::new_2d(0.0, 20.0));
    }

    #[test]
    fn test_polar_grid_radii() {
        let rho = Grid1D::uniform(0.0, 3.0, 4).unwrap();
        let phi = Grid1D::uniform(0.0, 2.0 * PI, 5).unwrap();
        let points = polar_grid(&rho, &phi);

        assert_eq!(points.len(), 20);
        for (i, p) in points.iter().enumerate() {
            assert_abs_diff_eq!(p.radius(), rho.points()[i % 4], epsilon = 1e-12);
        }
    }
}
