use std::fmt;

use crate::catalog::StarPairRecord;
use crate::error::{Error, Result};
use crate::visibility::{polar_to_plot_xy, VisibleEntry};

/// Guiding metadata for one picked pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PairSummary {
    /// Index into the visible sequence the pick was made against.
    pub index: usize,
    pub record: StarPairRecord,
    pub elevation_deg: f64,
    pub azimuth_deg: f64,
}

impl fmt::Display for PairSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.record;
        writeln!(f, " AcqCam star  ID: {}  Vmag: {:.1}", r.acq_id, r.acq_vmag)?;
        writeln!(f, " PWFS star    ID: {}  Vmag: {:.1}", r.guide_id, r.guide_vmag)?;
        writeln!(
            f,
            " Separation (arcmin): {:.2}  PA (degrees): {:.1}",
            r.separation_arcmin, r.position_angle_deg
        )?;
        write!(
            f,
            " El: {:.1}  Az: {:.1}",
            self.elevation_deg, self.azimuth_deg
        )
    }
}

/// Maps a pick on the plotted set back to its catalog pair.
pub struct SelectionResolver<'a> {
    entries: &'a [VisibleEntry],
}

impl<'a> SelectionResolver<'a> {
    pub fn new(entries: &'a [VisibleEntry]) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn resolve(&self, index: usize) -> Result<PairSummary> {
        let entry = self.entries.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })?;
        Ok(PairSummary {
            index,
            record: entry.record.clone(),
            elevation_deg: entry.position.elevation_deg,
            azimuth_deg: entry.position.azimuth_deg,
        })
    }

    /// Index of the marker nearest a picked sky position, measured in the
    /// plane of the polar map, if one lies within `tolerance_deg`.
    pub fn nearest(&self, azimuth_deg: f64, elevation_deg: f64, tolerance_deg: f64) -> Option<usize> {
        let (px, py) = polar_to_plot_xy(azimuth_deg.to_radians(), 90.0 - elevation_deg);
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let (x, y) = e.plot_xy();
                (i, libm::hypot(x - px, y - py))
            })
            .filter(|&(_, d)| d <= tolerance_deg)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::make_record;
    use crate::transform::HorizontalPosition;
    use crate::visibility::VisibilityFilter;

    fn entries() -> Vec<VisibleEntry> {
        let items = [
            ("A", 40.0, 0.0),
            ("B", 50.0, 90.0),
            ("C", 60.0, 180.0),
            ("D", 70.0, 270.0),
            ("E", 85.0, 45.0),
        ];
        VisibilityFilter::default().apply(items.iter().enumerate().map(|(i, &(id, el, az))| {
            let mut rec = make_record(id, i as f64, -30.0, 4.0 + i as f64);
            rec.separation_arcmin = 5.0 + i as f64;
            rec.position_angle_deg = 10.0 * i as f64;
            (
                rec,
                HorizontalPosition {
                    elevation_deg: el,
                    azimuth_deg: az,
                },
            )
        }))
    }

    #[test]
    fn resolve_returns_the_producing_record() {
        let es = entries();
        assert_eq!(es.len(), 5);
        let s = SelectionResolver::new(&es).resolve(2).unwrap();
        assert_eq!(s.index, 2);
        assert_eq!(s.record, es[2].record);
        assert_eq!(s.record.acq_id, "C");
        assert_eq!(s.record.separation_arcmin, 7.0);
        assert_eq!(s.record.position_angle_deg, 20.0);
    }

    #[test]
    fn resolve_out_of_range() {
        let es = entries();
        match SelectionResolver::new(&es).resolve(5) {
            Err(Error::IndexOutOfRange { index, len }) => {
                assert_eq!(index, 5);
                assert_eq!(len, 5);
            }
            other => panic!("expected IndexOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn resolve_on_empty_set() {
        let r = SelectionResolver::new(&[]);
        assert!(r.is_empty());
        assert!(r.resolve(0).is_err());
    }

    #[test]
    fn summary_text_layout() {
        let es = entries();
        let text = SelectionResolver::new(&es).resolve(1).unwrap().to_string();
        assert!(text.contains("AcqCam star  ID: B  Vmag: 5.0"));
        assert!(text.contains("PWFS star    ID: B-G  Vmag: 7.0"));
        assert!(text.contains("Separation (arcmin): 6.00  PA (degrees): 10.0"));
    }

    #[test]
    fn nearest_picks_closest_marker() {
        let es = entries();
        let r = SelectionResolver::new(&es);
        assert_eq!(r.nearest(91.0, 49.5, 3.0), Some(1));
        assert_eq!(r.nearest(180.0, 60.0, 3.0), Some(2));
    }

    #[test]
    fn nearest_near_zenith_ignores_azimuth() {
        // close to the centre of the map azimuth barely matters
        let es = entries();
        let r = SelectionResolver::new(&es);
        assert_eq!(r.nearest(60.0, 86.0, 3.0), Some(4));
    }

    #[test]
    fn nearest_outside_tolerance_is_none() {
        let es = entries();
        let r = SelectionResolver::new(&es);
        assert_eq!(r.nearest(135.0, 35.0, 3.0), None);
    }
}
