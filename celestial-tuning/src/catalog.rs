use crate::angle::Angle;

/// One acquisition/guide pair from the tuning catalog.
///
/// `ra`/`dec` locate the acquisition star (J2000). The guide star's own
/// coordinates are not carried; it is described by its offset from the
/// acquisition star.
#[derive(Debug, Clone, PartialEq)]
pub struct StarPairRecord {
    pub acq_id: String,
    pub guide_id: String,
    pub ra: Angle,
    pub dec: Angle,
    pub acq_vmag: f64,
    pub guide_vmag: f64,
    pub separation_arcmin: f64,
    pub position_angle_deg: f64,
}

impl StarPairRecord {
    pub fn ra_hours(&self) -> f64 {
        self.ra.hours()
    }

    pub fn dec_degrees(&self) -> f64 {
        self.dec.degrees()
    }
}

#[cfg(test)]
pub(crate) fn make_record(acq_id: &str, ra_hours: f64, dec_deg: f64, acq_vmag: f64) -> StarPairRecord {
    StarPairRecord {
        acq_id: acq_id.to_string(),
        guide_id: format!("{acq_id}-G"),
        ra: Angle::from_hours(ra_hours),
        dec: Angle::from_degrees(dec_deg),
        acq_vmag,
        guide_vmag: acq_vmag + 2.0,
        separation_arcmin: 6.25,
        position_angle_deg: 123.4,
    }
}
