use crate::{FieldError, Result, WaveVector};

/// Simulation parameters
///
/// Defaults: unit amplitude, speed and time, wave vector `(1,1)`,
/// 100×100 samples over `[-8,8]²`.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParameters {
    /// field amplitude A
    pub amplitude: f64,
    /// propagation speed c
    pub propagation_speed: f64,
    /// time t
    pub time: f64,
    pub wave_vector: WaveVector,
    /// number of samples along x
    pub x_samples: usize,
    /// number of samples along y
    pub y_samples: usize,
    /// half-width of the x domain
    pub x_extent: f64,
    /// half-width of the y domain
    pub y_extent: f64,
}
impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            amplitude: 1f64,
            propagation_speed: 1f64,
            time: 1f64,
            wave_vector: WaveVector::default(),
            x_samples: 100,
            y_samples: 100,
            x_extent: 8f64,
            y_extent: 8f64,
        }
    }
}
impl SimulationParameters {
    pub fn amplitude(self, amplitude: f64) -> Self {
        Self { amplitude, ..self }
    }
    pub fn propagation_speed(self, propagation_speed: f64) -> Self {
        Self {
            propagation_speed,
            ..self
        }
    }
    pub fn time(self, time: f64) -> Self {
        Self { time, ..self }
    }
    pub fn wave_vector<K: Into<WaveVector>>(self, wave_vector: K) -> Self {
        Self {
            wave_vector: wave_vector.into(),
            ..self
        }
    }
    /// Sets the number of samples along x and y
    pub fn samples(self, x_samples: usize, y_samples: usize) -> Self {
        Self {
            x_samples,
            y_samples,
            ..self
        }
    }
    /// Sets the half-widths of the x and y domains
    pub fn extents(self, x_extent: f64, y_extent: f64) -> Self {
        Self {
            x_extent,
            y_extent,
            ..self
        }
    }
    /// Checks the amplitude is finite
    pub fn validate(&self) -> Result<()> {
        if self.amplitude.is_finite() {
            Ok(())
        } else {
            Err(FieldError::InvalidAmplitude(self.amplitude))
        }
    }
    /// The `c t` product of the time dependent phase terms
    pub fn speed_time(&self) -> f64 {
        self.propagation_speed * self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = SimulationParameters::default();
        assert_eq!(p.amplitude, 1.);
        assert_eq!(p.speed_time(), 1.);
        assert_eq!(p.wave_vector, WaveVector::Pair(1., 1.));
        assert_eq!((p.x_samples, p.y_samples), (100, 100));
        assert_eq!((p.x_extent, p.y_extent), (8., 8.));
    }

    #[test]
    fn builder() {
        let p = SimulationParameters::default()
            .amplitude(2.)
            .propagation_speed(3.)
            .time(0.5)
            .wave_vector(4f64)
            .samples(10, 20)
            .extents(1., 2.);
        assert_eq!(p.speed_time(), 1.5);
        assert_eq!(p.wave_vector, WaveVector::Scalar(4.));
        assert_eq!((p.x_samples, p.y_samples), (10, 20));
        assert_eq!((p.x_extent, p.y_extent), (1., 2.));
    }

    #[test]
    fn non_finite_amplitude() {
        let p = SimulationParameters::default().amplitude(f64::NAN);
        assert!(matches!(p.validate(), Err(FieldError::InvalidAmplitude(_))));
    }
}
