/*!
# Optical fields

Scalar optical field maps of a plane wave, a spherical wave and a two-beam
interference over a 2D sampling grid.

## Key Components

- [`SimulationParameters`] - amplitude, propagation speed, time, wave vector and sampling
- [`Grid`] - evenly sampled axes and the coordinate meshes derived from them
- [`FieldEvaluator`] - closed-form field of a [`WaveModel`] at every grid point
- [`OpticalSimulation`] - parameters and grid kept in sync across reconfigurations

## Usage

```rust
use optical_fields::{OpticalSimulation, Reconfiguration, SimulationParameters, WaveModel};
use std::f64::consts::PI;

let mut sim = OpticalSimulation::new(SimulationParameters::default().extents(10., 10.))?;
let plane = sim.wave(WaveModel::Plane)?;
assert_eq!(plane.shape(), (100, 100));

sim.reconfigure(
    Reconfiguration::default()
        .extents(0.5, 0.5)
        .wave_vector(20. * PI),
)?;
let spherical = sim.wave(WaveModel::Spherical)?;
# Ok::<(), optical_fields::FieldError>(())
```

With the `plot` feature, [`plot::EqualPhasePlot`] renders a field as a filled
contour map.
*/

pub mod contour;
pub mod dispersion;
mod error;
pub mod field;
pub mod grid;
mod model;
mod parameters;
#[cfg(feature = "plot")]
pub mod plot;
mod simulation;
mod wave_vector;

pub use error::{FieldError, Result};
pub use field::{FieldArray, FieldEvaluator, FieldSummary};
pub use grid::Grid;
pub use model::WaveModel;
pub use parameters::SimulationParameters;
pub use simulation::{OpticalSimulation, Reconfiguration};
pub use wave_vector::WaveVector;
