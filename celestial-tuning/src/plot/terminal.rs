use textplots::{Chart, Plot, Shape};

use crate::visibility::VisibleEntry;

use super::elevation_ring;

/// Braille polar map: zenith in the centre, north up, east right.
pub fn polar_map_terminal(entries: &[VisibleEntry], title: &str, threshold_deg: f64) -> String {
    if entries.is_empty() {
        return format!("{title}\n  (no pairs above {threshold_deg:.0} deg)\n");
    }
    let stars: Vec<(f32, f32)> = entries
        .iter()
        .map(|e| {
            let (x, y) = e.plot_xy();
            (x as f32, y as f32)
        })
        .collect();
    let ring = to_f32_points(&elevation_ring(threshold_deg, 72));
    let horizon = to_f32_points(&elevation_ring(0.0, 72));

    let horizon_shape = Shape::Lines(&horizon);
    let ring_shape = Shape::Lines(&ring);
    let star_shape = Shape::Points(&stars);

    let mut chart = Chart::new(120, 120, -90.0, 90.0);
    let rendered = chart
        .lineplot(&horizon_shape)
        .lineplot(&ring_shape)
        .lineplot(&star_shape);
    rendered.axis();
    rendered.figures();
    format!("{title}\n  N up, E right, ring at {threshold_deg:.0} deg\n{rendered}")
}

fn to_f32_points(points: &[(f64, f64)]) -> Vec<(f32, f32)> {
    points.iter().map(|&(x, y)| (x as f32, y as f32)).collect()
}
