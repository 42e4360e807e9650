//! Elevation cut and plot-ready attributes for the polar map.
//!
//! The map is a polar projection with the zenith at the centre: radius is
//! zenith distance (`90 - el`) and theta is azimuth, drawn north-up and
//! clockwise.

use crate::catalog::StarPairRecord;
use crate::site::ObserverContext;
use crate::transform::{to_horizontal, HorizontalPosition};

pub const DEFAULT_ELEVATION_THRESHOLD_DEG: f64 = 30.0;

/// Marker style by acquisition-star magnitude.
///
/// Open intervals: `3 < m < 5.5` is bright, `5.5 < m < 7` is medium and
/// everything else is dim, so the exact boundaries 3, 5.5 and 7 land in
/// [`BrightnessClass::Dim`]. This looks like an artifact of strict
/// comparisons in the operator tool this map replaces; it is kept so the
/// maps match, not because dim is the right class for those magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrightnessClass {
    Bright,
    Medium,
    Dim,
}

impl BrightnessClass {
    pub fn from_vmag(m: f64) -> Self {
        if m > 3.0 && m < 5.5 {
            BrightnessClass::Bright
        } else if m > 5.5 && m < 7.0 {
            BrightnessClass::Medium
        } else {
            BrightnessClass::Dim
        }
    }

    pub fn marker_size(self) -> u32 {
        match self {
            BrightnessClass::Bright => 22,
            BrightnessClass::Medium => 18,
            BrightnessClass::Dim => 14,
        }
    }

    pub fn alpha(self) -> f64 {
        match self {
            BrightnessClass::Bright => 1.0,
            BrightnessClass::Medium => 0.95,
            BrightnessClass::Dim => 0.9,
        }
    }

    /// Yellow, fading slightly with the class.
    pub fn rgb(self) -> (f64, f64, f64) {
        match self {
            BrightnessClass::Bright => (1.0, 1.0, 0.0),
            BrightnessClass::Medium => (0.95, 0.95, 0.0),
            BrightnessClass::Dim => (0.9, 0.9, 0.0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BrightnessClass::Bright => "bright",
            BrightnessClass::Medium => "medium",
            BrightnessClass::Dim => "dim",
        }
    }
}

/// A pair above the elevation cut, ready to plot.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleEntry {
    pub record: StarPairRecord,
    pub position: HorizontalPosition,
    /// Azimuth, radians.
    pub theta: f64,
    /// Zenith distance, degrees.
    pub radius: f64,
    pub marker_size: u32,
    pub brightness_class: BrightnessClass,
}

impl VisibleEntry {
    fn new(record: StarPairRecord, position: HorizontalPosition) -> Self {
        let brightness_class = BrightnessClass::from_vmag(record.acq_vmag);
        Self {
            theta: position.azimuth_deg.to_radians(),
            radius: position.zenith_distance_deg(),
            marker_size: brightness_class.marker_size(),
            brightness_class,
            record,
            position,
        }
    }

    /// Cartesian plot position, north up (+y) and east right (+x).
    pub fn plot_xy(&self) -> (f64, f64) {
        polar_to_plot_xy(self.theta, self.radius)
    }
}

pub fn polar_to_plot_xy(theta: f64, radius: f64) -> (f64, f64) {
    (radius * libm::sin(theta), radius * libm::cos(theta))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityFilter {
    pub threshold_deg: f64,
}

impl Default for VisibilityFilter {
    fn default() -> Self {
        Self {
            threshold_deg: DEFAULT_ELEVATION_THRESHOLD_DEG,
        }
    }
}

impl VisibilityFilter {
    pub fn new(threshold_deg: f64) -> Self {
        Self { threshold_deg }
    }

    pub fn is_visible(&self, position: &HorizontalPosition) -> bool {
        position.elevation_deg > self.threshold_deg
    }

    /// Keep pairs strictly above the threshold, in input order.
    pub fn apply<I>(&self, positioned: I) -> Vec<VisibleEntry>
    where
        I: IntoIterator<Item = (StarPairRecord, HorizontalPosition)>,
    {
        positioned
            .into_iter()
            .filter(|(_, pos)| self.is_visible(pos))
            .map(|(rec, pos)| VisibleEntry::new(rec, pos))
            .collect()
    }

    /// Re-apply the cut to an already-built visible set.
    pub fn refilter(&self, entries: &[VisibleEntry]) -> Vec<VisibleEntry> {
        self.apply(entries.iter().map(|e| (e.record.clone(), e.position)))
    }
}

/// Transform every record and keep the visible ones.
///
/// Records whose transform is degenerate are logged and left out; the rest
/// of the catalog is unaffected.
pub fn visible_entries(
    records: &[StarPairRecord],
    ctx: &ObserverContext,
    filter: &VisibilityFilter,
) -> Vec<VisibleEntry> {
    let positioned = records.iter().filter_map(|rec| match to_horizontal(rec, ctx) {
        Ok(pos) => Some((rec.clone(), pos)),
        Err(e) => {
            log::warn!("skipping pair: {}", e);
            None
        }
    });
    let visible = filter.apply(positioned);
    log::debug!(
        "{} of {} pairs above {:.1} deg at LST {:.4}h",
        visible.len(),
        records.len(),
        filter.threshold_deg,
        ctx.lst_hours()
    );
    visible
}
