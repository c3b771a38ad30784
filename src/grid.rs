//! Sampling grid
//!
//! Both axes are sampled evenly over a symmetric domain `[-extent, extent]`
//! and expanded into a pair of coordinate meshes of shape
//! `(y_samples, x_samples)`: the x coordinate varies along the columns and the
//! y coordinate along the rows.

use nalgebra::DMatrix;

use crate::{FieldError, Result, SimulationParameters};

/// `n` evenly spaced samples from `-extent` to `extent`, both included
///
/// A single sample sits at `-extent`; the middle sample of an odd count is
/// exactly zero.
pub fn linspace(extent: f64, n: usize) -> Result<Vec<f64>> {
    if !extent.is_finite() {
        return Err(FieldError::InvalidRange(format!(
            "the domain extent must be finite, got {}",
            extent
        )));
    }
    if n == 0 {
        return Err(FieldError::InvalidRange(
            "the number of samples must be positive".to_string(),
        ));
    }
    if n == 1 {
        return Ok(vec![-extent]);
    }
    let m = (n - 1) as f64;
    // the sample position as a ratio in [-1,1] keeps the axis symmetric
    Ok((0..n)
        .map(|i| extent * (((2 * i) as f64 - m) / m))
        .collect())
}

/// Sampling axes and the coordinate meshes derived from them
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    x_axis: Vec<f64>,
    y_axis: Vec<f64>,
    x_mesh: DMatrix<f64>,
    y_mesh: DMatrix<f64>,
}
impl Grid {
    /// Samples both axes and builds the meshes
    pub fn new(x_samples: usize, y_samples: usize, x_extent: f64, y_extent: f64) -> Result<Self> {
        let x_axis = linspace(x_extent, x_samples)?;
        let y_axis = linspace(y_extent, y_samples)?;
        let x_mesh = DMatrix::from_fn(y_samples, x_samples, |_, j| x_axis[j]);
        let y_mesh = DMatrix::from_fn(y_samples, x_samples, |i, _| y_axis[i]);
        log::debug!(
            "grid: {}x{} samples over [{},{}]x[{},{}]",
            x_samples,
            y_samples,
            -x_extent,
            x_extent,
            -y_extent,
            y_extent
        );
        Ok(Self {
            x_axis,
            y_axis,
            x_mesh,
            y_mesh,
        })
    }
    /// Builds the grid from the sampling parameters
    pub fn from_parameters(parameters: &SimulationParameters) -> Result<Self> {
        Self::new(
            parameters.x_samples,
            parameters.y_samples,
            parameters.x_extent,
            parameters.y_extent,
        )
    }
    pub fn x_axis(&self) -> &[f64] {
        &self.x_axis
    }
    pub fn y_axis(&self) -> &[f64] {
        &self.y_axis
    }
    /// The x coordinate mesh
    pub fn x_mesh(&self) -> &DMatrix<f64> {
        &self.x_mesh
    }
    /// The y coordinate mesh
    pub fn y_mesh(&self) -> &DMatrix<f64> {
        &self.y_mesh
    }
    /// The meshes shape: `(y_samples, x_samples)`
    pub fn shape(&self) -> (usize, usize) {
        self.x_mesh.shape()
    }
    /// The `(x_min, x_max)` range of the x axis
    pub fn x_range(&self) -> (f64, f64) {
        range(&self.x_axis)
    }
    /// The `(y_min, y_max)` range of the y axis
    pub fn y_range(&self) -> (f64, f64) {
        range(&self.y_axis)
    }
}

fn range(axis: &[f64]) -> (f64, f64) {
    (
        axis.iter().cloned().fold(f64::INFINITY, f64::min),
        axis.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_end_points() {
        for n in [2, 3, 10, 100, 101] {
            let axis = linspace(8., n).unwrap();
            assert_eq!(axis.len(), n);
            assert!((axis[0] + 8.).abs() < 1e-12);
            assert!((axis[n - 1] - 8.).abs() < 1e-12);
        }
    }

    #[test]
    fn axis_spacing() {
        let axis = linspace(1., 5).unwrap();
        let expected = [-1., -0.5, 0., 0.5, 1.];
        for (a, e) in axis.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-15);
        }
    }

    #[test]
    fn odd_count_hits_zero() {
        let axis = linspace(0.5, 101).unwrap();
        assert_eq!(axis[50], 0.);
        assert!(!linspace(0.5, 100).unwrap().contains(&0.));
    }

    #[test]
    fn single_sample() {
        assert_eq!(linspace(3., 1).unwrap(), vec![-3.]);
    }

    #[test]
    fn invalid_ranges() {
        assert!(matches!(linspace(1., 0), Err(FieldError::InvalidRange(_))));
        assert!(matches!(
            linspace(f64::NAN, 10),
            Err(FieldError::InvalidRange(_))
        ));
        assert!(Grid::new(10, 10, 1., f64::INFINITY).is_err());
    }

    #[test]
    fn zero_extent_is_degenerate() {
        let grid = Grid::new(4, 3, 0., 0.).unwrap();
        assert!(grid.x_mesh().iter().all(|&x| x == 0.));
        assert_eq!(grid.shape(), (3, 4));
    }

    #[test]
    fn mesh_orientation() {
        let grid = Grid::new(4, 3, 3., 1.).unwrap();
        assert_eq!(grid.shape(), (3, 4));
        assert_eq!(grid.y_mesh().shape(), (3, 4));
        for i in 0..3 {
            for j in 0..4 {
                assert_eq!(grid.x_mesh()[(i, j)], grid.x_axis()[j]);
                assert_eq!(grid.y_mesh()[(i, j)], grid.y_axis()[i]);
            }
        }
        assert_eq!(grid.x_range(), (-3., 3.));
        assert_eq!(grid.y_range(), (-1., 1.));
    }
}
