use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

use crate::visibility::VisibleEntry;

use super::elevation_ring;

type PlotResult = std::result::Result<(), Box<dyn std::error::Error>>;
type PolarChart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

const LIMIT: f64 = 100.0;
const LABEL_RADIUS: f64 = 95.0;
/// Lowest elevation whose ring still fits inside the frame.
const LOWEST_RING_DEG: f64 = 90.0 - LIMIT;
const FRAME: RGBColor = RGBColor(204, 204, 204);
const SKY: RGBColor = RGBColor(0, 0, 77);
const MARKER_EDGE: RGBColor = RGBColor(0, 0, 77);

/// Polar sky map of the visible pairs, north up and azimuth clockwise, each
/// marker labelled with its selection index.
pub fn polar_map_svg(
    entries: &[VisibleEntry],
    path: &Path,
    title: &str,
    threshold_deg: f64,
) -> PlotResult {
    let root = SVGBackend::new(path, (800, 800)).into_drawing_area();
    root.fill(&FRAME)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(20)
        .build_cartesian_2d(-LIMIT..LIMIT, -LIMIT..LIMIT)?;
    chart.plotting_area().fill(&SKY)?;
    draw_grid(&mut chart, threshold_deg)?;
    draw_markers(&mut chart, entries)?;
    root.present()?;
    Ok(())
}

fn draw_grid<DB: DrawingBackend>(chart: &mut PolarChart<DB>, threshold_deg: f64) -> PlotResult
where
    DB::ErrorType: 'static,
{
    let grid = WHITE.mix(0.3).stroke_width(1);
    for el in (0..90).step_by(10) {
        chart.draw_series(std::iter::once(PathElement::new(
            elevation_ring(el as f64, 180),
            grid,
        )))?;
    }
    for spoke in (0..360).step_by(15) {
        let (x, y) = crate::visibility::polar_to_plot_xy((spoke as f64).to_radians(), 90.0);
        chart.draw_series(std::iter::once(PathElement::new(vec![(0.0, 0.0), (x, y)], grid)))?;
    }
    chart.draw_series(std::iter::once(PathElement::new(
        threshold_ring(threshold_deg),
        YELLOW.mix(0.5).stroke_width(1),
    )))?;

    let label = ("sans-serif", 18)
        .into_font()
        .color(&WHITE)
        .pos(Pos::new(HPos::Center, VPos::Center));
    for (text, az) in [("N", 0.0_f64), ("E", 90.0), ("S", 180.0), ("W", 270.0)] {
        let xy = crate::visibility::polar_to_plot_xy(az.to_radians(), LABEL_RADIUS);
        chart.draw_series(std::iter::once(Text::new(text, xy, label.clone())))?;
    }
    Ok(())
}

fn threshold_ring(threshold_deg: f64) -> Vec<(f64, f64)> {
    elevation_ring(threshold_deg.max(LOWEST_RING_DEG), 180)
}

fn draw_markers<DB: DrawingBackend>(chart: &mut PolarChart<DB>, entries: &[VisibleEntry]) -> PlotResult
where
    DB::ErrorType: 'static,
{
    let index_style = ("sans-serif", 12).into_font().color(&WHITE);
    for (i, entry) in entries.iter().enumerate() {
        let (x, y) = entry.plot_xy();
        let class = entry.brightness_class;
        let (r, g, b) = class.rgb();
        let fill = RGBColor((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8).mix(class.alpha());
        let radius = entry.marker_size / 4;
        chart.draw_series(std::iter::once(Circle::new((x, y), radius, fill.filled())))?;
        chart.draw_series(std::iter::once(Circle::new((x, y), radius, MARKER_EDGE.stroke_width(1))))?;
        chart.draw_series(std::iter::once(Text::new(
            format!("{}", i),
            (x + 2.0, y + 2.0),
            index_style.clone(),
        )))?;
    }
    Ok(())
}
