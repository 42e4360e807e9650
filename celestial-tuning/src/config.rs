//! Site configuration loaded from TOML.
//!
//! ```toml
//! name = "Gemini South"
//! latitude = "-30d14m26.700s"
//! longitude = "-70d44m12.096s"
//! elevation_threshold_deg = 30.0
//! pick_tolerance_deg = 3.0
//! lst_command = ["caget", "-t", "tcs:LST"]
//! ```
//!
//! Every key is optional; missing keys take the Gemini South defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::parser::parse_site_angle;
use crate::site::Site;
use crate::visibility::DEFAULT_ELEVATION_THRESHOLD_DEG;

pub const DEFAULT_SITE_NAME: &str = "Gemini South";
pub const DEFAULT_LATITUDE: &str = "-30d14m26.700s";
pub const DEFAULT_LONGITUDE: &str = "-70d44m12.096s";
pub const DEFAULT_PICK_TOLERANCE_DEG: f64 = 3.0;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_latitude")]
    pub latitude: String,
    #[serde(default = "default_longitude")]
    pub longitude: String,
    #[serde(default = "default_threshold")]
    pub elevation_threshold_deg: f64,
    #[serde(default = "default_pick_tolerance")]
    pub pick_tolerance_deg: f64,
    #[serde(default)]
    pub lst_command: Option<Vec<String>>,
}

fn default_name() -> String {
    DEFAULT_SITE_NAME.to_string()
}

fn default_latitude() -> String {
    DEFAULT_LATITUDE.to_string()
}

fn default_longitude() -> String {
    DEFAULT_LONGITUDE.to_string()
}

fn default_threshold() -> f64 {
    DEFAULT_ELEVATION_THRESHOLD_DEG
}

fn default_pick_tolerance() -> f64 {
    DEFAULT_PICK_TOLERANCE_DEG
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            elevation_threshold_deg: default_threshold(),
            pick_tolerance_deg: default_pick_tolerance(),
            lst_command: None,
        }
    }
}

impl SiteConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let cfg: SiteConfig =
            toml::from_str(text).map_err(|e| Error::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    /// Explicit path must exist; otherwise the per-user file is used if
    /// present, falling back to the built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => {
                log::info!("loading site config from {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn site(&self) -> Result<Site> {
        let latitude = parse_site_angle(&self.latitude)
            .map_err(|e| Error::Config(format!("latitude: {}", e)))?;
        let longitude = parse_site_angle(&self.longitude)
            .map_err(|e| Error::Config(format!("longitude: {}", e)))?;
        Site::new(self.name.clone(), latitude, longitude)
    }

    fn validate(&self) -> Result<()> {
        if !(-90.0..90.0).contains(&self.elevation_threshold_deg) {
            return Err(Error::Config(format!(
                "elevation_threshold_deg must be in [-90, 90), got {}",
                self.elevation_threshold_deg
            )));
        }
        if self.pick_tolerance_deg <= 0.0 || !self.pick_tolerance_deg.is_finite() {
            return Err(Error::Config(format!(
                "pick_tolerance_deg must be positive, got {}",
                self.pick_tolerance_deg
            )));
        }
        if let Some(cmd) = &self.lst_command {
            if cmd.is_empty() {
                return Err(Error::Config("lst_command must not be empty".into()));
            }
        }
        self.site().map(|_| ())
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".celestial_tuning.toml"))
}
