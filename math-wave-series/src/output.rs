//! Animation frames handed to a plotting tool
//!
//! A [`FrameSet`] is the only artifact a run produces: positions, time
//! samples, one field per time and a JSON summary of the expansion. Figure
//! layout, color maps and export formats belong to whoever reads it.

use crate::basis::Eigenbasis;
use crate::error::Result;
use crate::evaluator::SeriesEvaluator;
use crate::grid::Point;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Field values at every (time, position) sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSet {
    /// Scenario name
    pub name: String,
    /// Dimensionality (1 or 2)
    pub dimensions: usize,
    /// Evaluation points
    pub positions: Vec<Point>,
    /// Time samples, one per frame
    pub times: Vec<f64>,
    /// `frames[n][i]` = u(positions[i], times[n])
    pub frames: Vec<Vec<f64>>,
    /// Modal coefficients and problem parameters
    pub metadata: serde_json::Value,
}

impl FrameSet {
    /// Evaluate `series` at `positions` for every time in `times`
    pub fn evaluate<B: Eigenbasis>(
        name: impl Into<String>,
        series: &SeriesEvaluator<B>,
        positions: Vec<Point>,
        times: Vec<f64>,
    ) -> Result<Self> {
        let field = series.field_series(&positions, &times)?;
        let frames = field.rows().into_iter().map(|row| row.to_vec()).collect();

        Ok(Self {
            name: name.into(),
            dimensions: series.basis().dimensions(),
            positions,
            times,
            frames,
            metadata: serde_json::json!({
                "geometry": series.basis().name(),
                "modes": series.mode_count(),
                "coefficients": series.coefficients(),
            }),
        })
    }

    /// Merge extra keys into the metadata object
    pub fn with_metadata(mut self, extra: serde_json::Value) -> Self {
        if let (Some(meta), serde_json::Value::Object(extra)) =
            (self.metadata.as_object_mut(), extra)
        {
            meta.extend(extra);
        }
        self
    }

    /// Number of frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether there are no frames
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Field at frame `index`
    pub fn frame(&self, index: usize) -> Option<&[f64]> {
        self.frames.get(index).map(Vec::as_slice)
    }

    /// Largest |u| over all frames (axis range for a renderer)
    pub fn max_abs(&self) -> f64 {
        self.frames
            .iter()
            .flatten()
            .fold(0.0, |acc: f64, u| acc.max(u.abs()))
    }

    /// L2 error of frame `index` against reference values
    pub fn l2_error(&self, index: usize, reference: &[f64]) -> f64 {
        let frame = &self.frames[index];
        assert_eq!(frame.len(), reference.len());

        frame
            .iter()
            .zip(reference.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }

    /// Max (L∞) error of frame `index` against reference values
    pub fn linf_error(&self, index: usize, reference: &[f64]) -> f64 {
        let frame = &self.frames[index];
        assert_eq!(frame.len(), reference.len());

        frame
            .iter()
            .zip(reference.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }

    /// Save as pretty-printed JSON
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from a JSON file
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
