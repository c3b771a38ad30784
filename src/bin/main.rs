//! Optical fields
//!
//! Plane wave, interference and spherical wave equal phase maps

use std::f64::consts::PI;

use optical_fields::{
    FieldArray, Grid, OpticalSimulation, Reconfiguration, SimulationParameters, WaveModel,
};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "optical-fields", about = "Basic optical field simulations")]
struct Opt {
    /// Directory the field maps are written to
    #[structopt(short, long, default_value = ".")]
    output: String,
    /// Number of filled contour bands
    #[structopt(short, long, default_value = "8")]
    levels: usize,
}

#[cfg(feature = "plot")]
fn show(opt: &Opt, model: WaveModel, grid: &Grid, field: &FieldArray) -> anyhow::Result<()> {
    let path = optical_fields::plot::EqualPhasePlot::default()
        .output_dir(&opt.output)
        .n_bands(opt.levels)
        .draw(model, grid, field)?;
    println!("{}: {}", model.title(), path.display());
    Ok(())
}
#[cfg(not(feature = "plot"))]
fn show(opt: &Opt, model: WaveModel, grid: &Grid, field: &FieldArray) -> anyhow::Result<()> {
    log::info!(
        "built without the `plot` feature, no map written to {:?}",
        opt.output
    );
    let (rows, cols) = grid.shape();
    let contours = optical_fields::contour::ContourLevels::new(field, opt.levels);
    println!(
        "{:<24}{}x{}: {}, {} bands of {:.4e}",
        model.title(),
        cols,
        rows,
        optical_fields::FieldSummary::from(field),
        contours.n_bands(),
        (contours.max() - contours.min()) / contours.n_bands() as f64
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt = Opt::from_args();

    let mut sim = OpticalSimulation::new(
        SimulationParameters::default()
            .amplitude(1.)
            .propagation_speed(1.)
            .time(1.)
            .wave_vector((1., 1.))
            .extents(10., 10.),
    )?;

    for model in [WaveModel::Plane, WaveModel::Interference] {
        let field = sim.wave(model)?;
        show(&opt, model, sim.grid(), &field)?;
    }

    sim.reconfigure(
        Reconfiguration::default()
            .samples(100, 100)
            .extents(0.5, 0.5)
            .wave_vector(20. * PI),
    )?;
    let field = sim.wave(WaveModel::Spherical)?;
    show(&opt, WaveModel::Spherical, sim.grid(), &field)?;

    Ok(())
}
