pub mod svg;
pub mod terminal;

use crate::visibility::polar_to_plot_xy;

/// Points on a circle of constant elevation, in plot coordinates.
pub fn elevation_ring(elevation_deg: f64, samples: usize) -> Vec<(f64, f64)> {
    let radius = 90.0 - elevation_deg;
    (0..=samples)
        .map(|i| {
            let theta = std::f64::consts::TAU * i as f64 / samples as f64;
            polar_to_plot_xy(theta, radius)
        })
        .collect()
}
