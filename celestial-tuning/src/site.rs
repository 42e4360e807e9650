use crate::angle::Angle;
use crate::error::{Error, Result};

/// Fixed geographic location of the telescope.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub name: String,
    pub latitude: Angle,
    pub longitude: Angle,
}

impl Site {
    pub fn new(name: impl Into<String>, latitude: Angle, longitude: Angle) -> Result<Self> {
        let lat = latitude.degrees();
        if !(-90.0..=90.0).contains(&lat) {
            return Err(Error::Config(format!("latitude out of range: {:.4}", lat)));
        }
        let lon = longitude.degrees();
        if !(-180.0..=180.0).contains(&lon) {
            return Err(Error::Config(format!("longitude out of range: {:.4}", lon)));
        }
        Ok(Self {
            name: name.into(),
            latitude,
            longitude,
        })
    }
}

/// Observer location plus the sidereal time the sky is evaluated at.
///
/// Built once from the site and a single LST reading and never mutated. A new
/// LST reading produces a new context. The LST is kept in hours exactly as
/// read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverContext {
    latitude: Angle,
    longitude: Angle,
    lst_hours: f64,
}

impl ObserverContext {
    pub fn new(latitude_deg: f64, longitude_deg: f64, lst_hours: f64) -> Self {
        Self {
            latitude: Angle::from_degrees(latitude_deg),
            longitude: Angle::from_degrees(longitude_deg),
            lst_hours,
        }
    }

    pub fn for_site(site: &Site, lst_hours: f64) -> Self {
        Self {
            latitude: site.latitude,
            longitude: site.longitude,
            lst_hours,
        }
    }

    pub fn latitude(&self) -> Angle {
        self.latitude
    }

    /// Identifies the site only; the horizontal transform works from LST.
    pub fn longitude(&self) -> Angle {
        self.longitude
    }

    pub fn lst(&self) -> Angle {
        Angle::from_hours(self.lst_hours)
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude.degrees()
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude.degrees()
    }

    pub fn lst_hours(&self) -> f64 {
        self.lst_hours
    }
}

const MS_PER_HOUR: u64 = 3_600_000;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;
const TENTHS_PER_DEG: u64 = 36_000;

/// `HHh MMm SS.SSSs`, wrapped into `[0, 24)` after rounding to the
/// millisecond.
pub fn format_hours(hours: f64) -> String {
    let ms = (hours.rem_euclid(24.0) * MS_PER_HOUR as f64).round() as u64 % MS_PER_DAY;
    let hh = ms / MS_PER_HOUR;
    let mm = ms % MS_PER_HOUR / 60_000;
    let ss = ms % 60_000;
    format!("{:02}h {:02}m {:02}.{:03}s", hh, mm, ss / 1000, ss % 1000)
}

/// `±DDd MM' SS.S"`, rounded to a tenth of an arcsecond.
pub fn format_dms(deg: f64) -> String {
    let sign = if deg < 0.0 { "-" } else { "+" };
    let tenths = (deg.abs() * TENTHS_PER_DEG as f64).round() as u64;
    let d = tenths / TENTHS_PER_DEG;
    let m = tenths % TENTHS_PER_DEG / 600;
    let s = tenths % 600;
    format!("{}{:02}d {:02}' {:02}.{}\"", sign, d, m, s / 10, s % 10)
}
