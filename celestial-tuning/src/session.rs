use std::path::{Path, PathBuf};

use crate::catalog::StarPairRecord;
use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::lst::{CommandLst, LstSource};
use crate::parser::parse_catalog;
use crate::selection::{PairSummary, SelectionResolver};
use crate::site::{ObserverContext, Site};
use crate::visibility::{visible_entries, VisibilityFilter, VisibleEntry};

pub struct Session {
    pub site: Site,
    pub context: Option<ObserverContext>,
    pub catalog: Vec<StarPairRecord>,
    pub catalog_path: Option<PathBuf>,
    pub filter: VisibilityFilter,
    pub pick_tolerance_deg: f64,
    pub lst_command: Option<Vec<String>>,
    pub last_pick: Option<PairSummary>,
    visible: Vec<VisibleEntry>,
}

impl Session {
    pub fn new(site: Site) -> Self {
        Self {
            site,
            context: None,
            catalog: Vec::new(),
            catalog_path: None,
            filter: VisibilityFilter::default(),
            pick_tolerance_deg: crate::config::DEFAULT_PICK_TOLERANCE_DEG,
            lst_command: None,
            last_pick: None,
            visible: Vec::new(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        let mut session = Self::new(config.site()?);
        session.filter = VisibilityFilter::new(config.elevation_threshold_deg);
        session.pick_tolerance_deg = config.pick_tolerance_deg;
        session.lst_command = config.lst_command.clone();
        Ok(session)
    }

    /// Replaces the catalog only if the whole file parses.
    pub fn load_catalog_file(&mut self, path: &Path) -> Result<usize> {
        let content = std::fs::read_to_string(path)?;
        let records = parse_catalog(&content)?;
        log::info!("loaded {} pairs from {}", records.len(), path.display());
        self.catalog_path = Some(path.to_path_buf());
        Ok(self.set_catalog(records))
    }

    pub fn set_catalog(&mut self, records: Vec<StarPairRecord>) -> usize {
        self.catalog = records;
        self.rebuild();
        self.catalog.len()
    }

    pub fn set_lst(&mut self, lst_hours: f64) {
        self.context = Some(ObserverContext::for_site(&self.site, lst_hours));
        self.rebuild();
    }

    pub fn read_lst_from(&mut self, source: &dyn LstSource) -> Result<f64> {
        let hours = source.read_lst()?;
        self.set_lst(hours);
        Ok(hours)
    }

    /// Re-read LST from the configured control-system command.
    pub fn refresh_lst(&mut self) -> Result<f64> {
        let argv = self
            .lst_command
            .clone()
            .ok_or_else(|| Error::Lst("no lst_command configured".into()))?;
        self.read_lst_from(&CommandLst::new(argv)?)
    }

    pub fn set_threshold(&mut self, threshold_deg: f64) -> Result<()> {
        if !(-90.0..90.0).contains(&threshold_deg) {
            return Err(Error::Parse(format!(
                "threshold must be in [-90, 90), got {}",
                threshold_deg
            )));
        }
        self.filter = VisibilityFilter::new(threshold_deg);
        self.rebuild();
        Ok(())
    }

    pub fn current_lst(&self) -> Result<f64> {
        self.context.map(|c| c.lst_hours()).ok_or(Error::NoLst)
    }

    pub fn visible(&self) -> &[VisibleEntry] {
        &self.visible
    }

    pub fn resolver(&self) -> SelectionResolver<'_> {
        SelectionResolver::new(&self.visible)
    }

    pub fn pick(&mut self, index: usize) -> Result<&PairSummary> {
        let summary = self.resolver().resolve(index)?;
        let stored = self.last_pick.insert(summary);
        Ok(&*stored)
    }

    pub fn pick_position(&mut self, azimuth_deg: f64, elevation_deg: f64) -> Result<&PairSummary> {
        let index = self
            .resolver()
            .nearest(azimuth_deg, elevation_deg, self.pick_tolerance_deg)
            .ok_or(Error::NoMarkerNear {
                azimuth_deg,
                elevation_deg,
            })?;
        self.pick(index)
    }

    /// Indices handed out before this call may no longer refer to the
    /// same pair.
    fn rebuild(&mut self) {
        self.visible = match &self.context {
            Some(ctx) => visible_entries(&self.catalog, ctx, &self.filter),
            None => Vec::new(),
        };
    }
}
