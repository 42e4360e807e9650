//! Equatorial to horizontal conversion.
//!
//! ```text
//! HA  = LST - RA
//! el  = asin( sin(dec) sin(lat) + cos(dec) cos(lat) cos(HA) )
//! az' = acos( (sin(dec) - sin(el) sin(lat)) / (cos(el) cos(lat)) )
//! az  = 360 - az'   if sin(HA) > 0   (west of the meridian)
//!       az'         otherwise
//! ```
//!
//! Azimuth is measured from north through east. No precession, nutation or
//! refraction is applied; catalog J2000 positions are used as-is.

use crate::angle::Angle;
use crate::catalog::StarPairRecord;
use crate::error::{Error, Result};
use crate::site::ObserverContext;

/// Below this, `cos(el) * cos(lat)` is treated as zero: the object sits at the
/// zenith (to well under an arcsecond) or the observer is at a pole, and
/// azimuth is undefined.
pub const DEGENERATE_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalPosition {
    /// `[-90, 90]`
    pub elevation_deg: f64,
    /// `[0, 360)`, north = 0, east = 90
    pub azimuth_deg: f64,
}

impl HorizontalPosition {
    pub fn zenith_distance_deg(&self) -> f64 {
        90.0 - self.elevation_deg
    }
}

pub fn hour_angle(ra: Angle, ctx: &ObserverContext) -> Angle {
    ctx.lst() - ra
}

/// `None` when the geometry is degenerate (see [`DEGENERATE_EPSILON`]).
pub fn equatorial_to_horizontal(
    ra: Angle,
    dec: Angle,
    ctx: &ObserverContext,
) -> Option<HorizontalPosition> {
    let ha = hour_angle(ra, ctx);
    let lat = ctx.latitude();

    let sin_el = dec.sin() * lat.sin() + dec.cos() * lat.cos() * ha.cos();
    let el = libm::asin(sin_el.clamp(-1.0, 1.0));

    let denom = libm::cos(el) * lat.cos();
    if denom.abs() < DEGENERATE_EPSILON {
        return None;
    }
    let cos_az = (dec.sin() - libm::sin(el) * lat.sin()) / denom;
    let az_raw = libm::acos(cos_az.clamp(-1.0, 1.0));

    let az = if ha.sin() > 0.0 {
        Angle::from_radians(std::f64::consts::TAU - az_raw)
    } else {
        Angle::from_radians(az_raw)
    };

    Some(HorizontalPosition {
        elevation_deg: el.to_degrees(),
        azimuth_deg: az.normalized().degrees(),
    })
}

pub fn to_horizontal(record: &StarPairRecord, ctx: &ObserverContext) -> Result<HorizontalPosition> {
    equatorial_to_horizontal(record.ra, record.dec, ctx).ok_or_else(|| {
        Error::DegenerateGeometry {
            acq_id: record.acq_id.clone(),
        }
    })
}
