//! Field evaluation
//!
//! Each model is a closed-form expression evaluated at every point of a
//! [Grid]; a fresh [FieldArray] of the grid shape is returned per call.

use std::fmt;

use nalgebra::DMatrix;

use crate::{
    dispersion::{Dispersion, XorDispersion},
    Grid, Result, SimulationParameters, WaveModel,
};

/// Field values, one per grid point, in the grid shape `(y_samples, x_samples)`
pub type FieldArray = DMatrix<f64>;

/// Wave vector component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Kx,
    Ky,
}
impl Component {
    pub fn of(&self, kx: f64, ky: f64) -> f64 {
        match self {
            Component::Kx => kx,
            Component::Ky => ky,
        }
    }
}
/// Wave number of the first interfering beam
pub const BEAM_1: Component = Component::Kx;
/// Wave number of the second interfering beam, currently the same as [BEAM_1]
pub const BEAM_2: Component = Component::Kx;

/// Field evaluator with a pluggable plane wave dispersion term
#[derive(Debug, Default, Clone)]
pub struct FieldEvaluator<D = XorDispersion> {
    dispersion: D,
}
impl FieldEvaluator {
    /// Evaluator with the [XorDispersion] term
    pub fn new() -> Self {
        Default::default()
    }
}
impl<D: Dispersion> FieldEvaluator<D> {
    /// Evaluator with a custom dispersion term
    pub fn with_dispersion(dispersion: D) -> Self {
        Self { dispersion }
    }
    /// Computes the `model` field over `grid`
    pub fn evaluate(
        &self,
        model: WaveModel,
        grid: &Grid,
        parameters: &SimulationParameters,
    ) -> Result<FieldArray> {
        parameters.validate()?;
        let a = parameters.amplitude;
        let (c, t) = (parameters.propagation_speed, parameters.time);
        let field = match model {
            WaveModel::Plane => {
                let (kx, ky) = parameters.wave_vector.pair(model)?;
                let delay = self.dispersion.term(kx, ky)? * c * t;
                grid.x_mesh()
                    .zip_map(grid.y_mesh(), |x, y| a * (kx * x + ky * y - delay).cos())
            }
            WaveModel::Spherical => {
                let k = parameters.wave_vector.scalar(model)?;
                let delay = k * c * t;
                // r = 0 yields a non-finite value: the point source singularity
                grid.x_mesh().zip_map(grid.y_mesh(), |x, y| {
                    let r2 = x * x + y * y;
                    a * (k * r2 - delay).cos() / r2.sqrt()
                })
            }
            WaveModel::Interference => {
                let (kx, ky) = parameters.wave_vector.pair(model)?;
                let (k1, k2) = (BEAM_1.of(kx, ky), BEAM_2.of(kx, ky));
                grid.x_mesh()
                    .map(|x| a * (k1 * x).cos().cos() * (k2 * x).sin().cos())
            }
        };
        log::info!(
            "{} field ({} x {}): {}",
            model,
            field.ncols(),
            field.nrows(),
            FieldSummary::from(&field)
        );
        Ok(field)
    }
    /// Computes the field of the model named `tag`
    ///
    /// An unrecognized tag yields a zero field of the grid shape.
    pub fn evaluate_tag(
        &self,
        tag: &str,
        grid: &Grid,
        parameters: &SimulationParameters,
    ) -> Result<FieldArray> {
        match WaveModel::from_tag(tag) {
            Ok(model) => self.evaluate(model, grid, parameters),
            Err(_) => {
                log::warn!("undefined wave model {:?}, returning a zero field", tag);
                let (rows, cols) = grid.shape();
                Ok(FieldArray::zeros(rows, cols))
            }
        }
    }
}

/// Field statistics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSummary {
    /// smallest finite value
    pub min: f64,
    /// largest finite value
    pub max: f64,
    /// number of non-finite values
    pub non_finite: usize,
}
impl From<&FieldArray> for FieldSummary {
    fn from(field: &FieldArray) -> Self {
        let (min, max, non_finite) =
            field
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY, 0), |(lo, hi, n), &v| {
                    if v.is_finite() {
                        (lo.min(v), hi.max(v), n)
                    } else {
                        (lo, hi, n + 1)
                    }
                });
        Self {
            min,
            max,
            non_finite,
        }
    }
}
impl fmt::Display for FieldSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:+.4e},{:+.4e}] ({} non-finite)",
            self.min, self.max, self.non_finite
        )
    }
}
