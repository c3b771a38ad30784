//! Equal phase maps
//!
//! Filled contour rendering of a field with a grey color map and an
//! amplitude color bar, written to `<Model>.png`.

use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::{contour::ContourLevels, FieldArray, FieldError, Grid, Result, WaveModel};

fn plot_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> FieldError {
    FieldError::Plot(Box::new(e))
}

/// Cell boundaries: half-way between samples, clamped to the axis end points
fn cell_edges(axis: &[f64]) -> Vec<f64> {
    let mut edges = Vec::with_capacity(axis.len() + 1);
    if let Some(first) = axis.first() {
        edges.push(*first);
    }
    edges.extend(axis.windows(2).map(|w| 0.5 * (w[0] + w[1])));
    if let Some(last) = axis.last() {
        edges.push(*last);
    }
    edges
}

/// Widens an empty range so it can be used as a chart axis
fn padded((lo, hi): (f64, f64)) -> (f64, f64) {
    if hi > lo {
        (lo, hi)
    } else {
        (lo - 0.5, hi + 0.5)
    }
}

fn grey(position: f64) -> RGBColor {
    let c = colorous::GREYS.eval_continuous(1f64 - position);
    RGBColor(c.r, c.g, c.b)
}

pub struct EqualPhasePlot {
    output_dir: PathBuf,
    size: (u32, u32),
    n_bands: usize,
}
impl Default for EqualPhasePlot {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            size: (768, 640),
            n_bands: 8,
        }
    }
}
impl EqualPhasePlot {
    pub fn output_dir<P: AsRef<Path>>(self, output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            ..self
        }
    }
    /// Image width and height in pixels
    pub fn size(self, width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            ..self
        }
    }
    /// Number of filled contour bands
    pub fn n_bands(self, n_bands: usize) -> Self {
        Self { n_bands, ..self }
    }
    /// Draws the `model` field map and returns the image path
    pub fn draw(&self, model: WaveModel, grid: &Grid, field: &FieldArray) -> Result<PathBuf> {
        let path = self.output_dir.join(format!("{}.png", model));
        let contours = ContourLevels::new(field, self.n_bands);

        let root = BitMapBackend::new(&path, self.size).into_drawing_area();
        root.fill(&WHITE).map_err(plot_error)?;
        let (map_area, bar_area) = root.split_horizontally((self.size.0 as i32 - 120).max(0));

        let (x_min, x_max) = padded(grid.x_range());
        let (y_min, y_max) = padded(grid.y_range());
        let mut chart = ChartBuilder::on(&map_area)
            .caption(model.title(), ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(plot_error)?;
        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc("xDirection")
            .y_desc("yDirection")
            .draw()
            .map_err(plot_error)?;

        let x_edges = cell_edges(grid.x_axis());
        let y_edges = cell_edges(grid.y_axis());
        let (rows, cols) = field.shape();
        chart
            .draw_series((0..rows).flat_map(|i| {
                let contours = &contours;
                let (x_edges, y_edges) = (&x_edges, &y_edges);
                (0..cols).filter_map(move |j| {
                    contours.band(field[(i, j)]).map(|band| {
                        Rectangle::new(
                            [(x_edges[j], y_edges[i]), (x_edges[j + 1], y_edges[i + 1])],
                            grey(contours.color_position(band)).filled(),
                        )
                    })
                })
            }))
            .map_err(plot_error)?;

        let (lo, hi) = padded((contours.min(), contours.max()));
        let mut bar = ChartBuilder::on(&bar_area)
            .margin(10)
            .margin_top(50)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(0f64..1f64, lo..hi)
            .map_err(plot_error)?;
        bar.configure_mesh()
            .disable_mesh()
            .disable_x_axis()
            .y_desc("Amplitude")
            .draw()
            .map_err(plot_error)?;
        bar.draw_series((0..contours.n_bands()).map(|band| {
            let (lower, upper) = contours.band_range(band);
            Rectangle::new(
                [(0f64, lower), (1f64, upper)],
                grey(contours.color_position(band)).filled(),
            )
        }))
        .map_err(plot_error)?;

        root.present().map_err(plot_error)?;
        log::info!("saved {:?}", path);
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges() {
        assert_eq!(cell_edges(&[-1., 0., 1.]), vec![-1., -0.5, 0.5, 1.]);
        assert_eq!(cell_edges(&[2.]), vec![2., 2.]);
        assert!(cell_edges(&[]).is_empty());
    }

    #[test]
    fn padding() {
        assert_eq!(padded((-1., 1.)), (-1., 1.));
        assert_eq!(padded((0., 0.)), (-0.5, 0.5));
    }

    #[test]
    fn grey_scale() {
        let black = grey(0.);
        let white = grey(1.);
        assert!(black.0 < white.0);
    }
}
