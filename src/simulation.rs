use crate::{
    dispersion::{Dispersion, XorDispersion},
    FieldArray, FieldError, FieldEvaluator, Grid, Result, SimulationParameters, WaveModel,
    WaveVector,
};

/// Grid reshaping parameters
///
/// Defaults: 100×100 samples, wave vector `1`, unset extents.
/// Both extents must be set before [OpticalSimulation::reconfigure] is called.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconfiguration {
    x_samples: usize,
    y_samples: usize,
    x_extent: Option<f64>,
    y_extent: Option<f64>,
    wave_vector: WaveVector,
}
impl Default for Reconfiguration {
    fn default() -> Self {
        Self {
            x_samples: 100,
            y_samples: 100,
            x_extent: None,
            y_extent: None,
            wave_vector: WaveVector::Scalar(1f64),
        }
    }
}
impl Reconfiguration {
    pub fn samples(self, x_samples: usize, y_samples: usize) -> Self {
        Self {
            x_samples,
            y_samples,
            ..self
        }
    }
    pub fn x_extent(self, x_extent: f64) -> Self {
        Self {
            x_extent: Some(x_extent),
            ..self
        }
    }
    pub fn y_extent(self, y_extent: f64) -> Self {
        Self {
            y_extent: Some(y_extent),
            ..self
        }
    }
    pub fn extents(self, x_extent: f64, y_extent: f64) -> Self {
        self.x_extent(x_extent).y_extent(y_extent)
    }
    pub fn wave_vector<K: Into<WaveVector>>(self, wave_vector: K) -> Self {
        Self {
            wave_vector: wave_vector.into(),
            ..self
        }
    }
}

/// Optical field simulation
///
/// Owns the [SimulationParameters] and the [Grid] derived from them; the grid
/// is rebuilt whenever the sampling parameters change.
pub struct OpticalSimulation<D = XorDispersion> {
    parameters: SimulationParameters,
    grid: Grid,
    evaluator: FieldEvaluator<D>,
}
impl OpticalSimulation {
    pub fn new(parameters: SimulationParameters) -> Result<Self> {
        Self::with_dispersion(parameters, XorDispersion)
    }
}
impl<D: Dispersion> OpticalSimulation<D> {
    /// Creates a simulation using a custom plane wave dispersion term
    pub fn with_dispersion(parameters: SimulationParameters, dispersion: D) -> Result<Self> {
        parameters.validate()?;
        let grid = Grid::from_parameters(&parameters)?;
        log::info!(
            "new simulation: A={}, c={}, t={}, k={}",
            parameters.amplitude,
            parameters.propagation_speed,
            parameters.time,
            parameters.wave_vector
        );
        Ok(Self {
            parameters,
            grid,
            evaluator: FieldEvaluator::with_dispersion(dispersion),
        })
    }
    pub fn parameters(&self) -> &SimulationParameters {
        &self.parameters
    }
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    /// Replaces the sampling parameters and the wave vector and rebuilds the grid
    ///
    /// The amplitude, propagation speed and time are left unchanged.
    /// On error the simulation is not modified.
    pub fn reconfigure(&mut self, reconfiguration: Reconfiguration) -> Result<()> {
        let Reconfiguration {
            x_samples,
            y_samples,
            x_extent,
            y_extent,
            wave_vector,
        } = reconfiguration;
        let x_extent =
            x_extent.ok_or_else(|| FieldError::InvalidRange("the x extent is unset".into()))?;
        let y_extent =
            y_extent.ok_or_else(|| FieldError::InvalidRange("the y extent is unset".into()))?;
        let parameters = SimulationParameters {
            x_samples,
            y_samples,
            x_extent,
            y_extent,
            wave_vector,
            ..self.parameters.clone()
        };
        let grid = Grid::from_parameters(&parameters)?;
        log::info!(
            "reconfigured: {}x{} samples, extents ({},{}), k={}",
            x_samples,
            y_samples,
            x_extent,
            y_extent,
            wave_vector
        );
        self.parameters = parameters;
        self.grid = grid;
        Ok(())
    }
    pub fn set_amplitude(&mut self, amplitude: f64) -> Result<()> {
        if !amplitude.is_finite() {
            return Err(FieldError::InvalidAmplitude(amplitude));
        }
        self.parameters.amplitude = amplitude;
        Ok(())
    }
    pub fn set_propagation_speed(&mut self, propagation_speed: f64) {
        self.parameters.propagation_speed = propagation_speed;
    }
    pub fn set_time(&mut self, time: f64) {
        self.parameters.time = time;
    }
    /// Computes the `model` field over the current grid
    pub fn wave(&self, model: WaveModel) -> Result<FieldArray> {
        self.evaluator.evaluate(model, &self.grid, &self.parameters)
    }
    /// Computes the field of the model named `tag`, see [FieldEvaluator::evaluate_tag]
    pub fn wave_tag(&self, tag: &str) -> Result<FieldArray> {
        self.evaluator.evaluate_tag(tag, &self.grid, &self.parameters)
    }
}
