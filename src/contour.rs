//! Filled contour banding
//!
//! The finite range of a field is split into evenly spaced levels and every
//! cell is assigned to the band between two consecutive levels.

use crate::{FieldArray, FieldSummary};

#[derive(Debug, Clone, PartialEq)]
pub struct ContourLevels {
    levels: Vec<f64>,
}
impl ContourLevels {
    /// `n_bands` bands spanning the finite values of `field`
    pub fn new(field: &FieldArray, n_bands: usize) -> Self {
        let summary = FieldSummary::from(field);
        let (min, max) = if summary.min <= summary.max {
            (summary.min, summary.max)
        } else {
            (0f64, 0f64)
        };
        let n = n_bands.max(1);
        let levels = (0..=n)
            .map(|i| min + (max - min) * i as f64 / n as f64)
            .collect();
        Self { levels }
    }
    /// The band boundaries, from the smallest to the largest field value
    pub fn levels(&self) -> &[f64] {
        &self.levels
    }
    pub fn n_bands(&self) -> usize {
        self.levels.len() - 1
    }
    pub fn min(&self) -> f64 {
        self.levels[0]
    }
    pub fn max(&self) -> f64 {
        self.levels[self.n_bands()]
    }
    /// The index of the band `value` falls in, `None` for non-finite values
    pub fn band(&self, value: f64) -> Option<usize> {
        if !value.is_finite() {
            return None;
        }
        let n = self.n_bands();
        let span = self.max() - self.min();
        if span <= 0f64 {
            return Some(0);
        }
        let i = ((value - self.min()) / span * n as f64).floor();
        Some((i.max(0f64) as usize).min(n - 1))
    }
    /// The `(lower, upper)` boundaries of band `i`
    pub fn band_range(&self, i: usize) -> (f64, f64) {
        (self.levels[i], self.levels[i + 1])
    }
    /// The position of band `i` on a `[0,1]` color scale
    pub fn color_position(&self, i: usize) -> f64 {
        match self.n_bands() {
            1 => 0.5,
            n => i as f64 / (n - 1) as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels() {
        let field = FieldArray::from_row_slice(1, 3, &[-1., 0.5, 1.]);
        let contours = ContourLevels::new(&field, 4);
        assert_eq!(contours.levels(), &[-1., -0.5, 0., 0.5, 1.]);
        assert_eq!(contours.n_bands(), 4);
        assert_eq!(contours.band_range(1), (-0.5, 0.));
    }

    #[test]
    fn bands() {
        let field = FieldArray::from_row_slice(2, 2, &[-1., 0.25, 1., f64::INFINITY]);
        let contours = ContourLevels::new(&field, 4);
        assert_eq!(contours.band(-1.), Some(0));
        assert_eq!(contours.band(0.25), Some(2));
        assert_eq!(contours.band(1.), Some(3));
        assert_eq!(contours.band(f64::INFINITY), None);
        assert_eq!(contours.band(f64::NAN), None);
    }

    #[test]
    fn flat_field() {
        let field = FieldArray::zeros(3, 3);
        let contours = ContourLevels::new(&field, 8);
        assert_eq!(contours.band(0.), Some(0));
        let contours = ContourLevels::new(&FieldArray::from_element(2, 2, f64::NAN), 0);
        assert_eq!(contours.n_bands(), 1);
        assert_eq!((contours.min(), contours.max()), (0., 0.));
        assert_eq!(contours.color_position(0), 0.5);
    }
}
