use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("degenerate geometry for pair {acq_id}: object at zenith or observer at pole")]
    DegenerateGeometry { acq_id: String },

    #[error("index {index} is not a plotted entry (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no plotted pair near az {azimuth_deg:.1} el {elevation_deg:.1}")]
    NoMarkerNear { azimuth_deg: f64, elevation_deg: f64 },

    #[error("config error: {0}")]
    Config(String),

    #[error("LST read failed: {0}")]
    Lst(String),

    #[error("no LST set - use LST command to set local sidereal time")]
    NoLst,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
