use super::{Command, CommandOutput};
use crate::error::Result;
use crate::session::Session;
use crate::site::{format_dms, format_hours};

pub struct Show;

impl Command for Show {
    fn name(&self) -> &str {
        "SHOW"
    }
    fn description(&self) -> &str {
        "Display session state"
    }

    fn execute(&self, session: &mut Session, _args: &[&str]) -> Result<CommandOutput> {
        let lst_str = session
            .current_lst()
            .map(format_hours)
            .unwrap_or_else(|_| "not set".to_string());
        let catalog_str = match &session.catalog_path {
            Some(path) => format!("{} pairs ({})", session.catalog.len(), path.display()),
            None => format!("{} pairs", session.catalog.len()),
        };
        let pick_str = session
            .last_pick
            .as_ref()
            .map(|p| format!("[{}] {}", p.index, p.record.acq_id))
            .unwrap_or_else(|| "none".to_string());
        let lst_source = match &session.lst_command {
            Some(argv) => argv.join(" "),
            None => "manual".to_string(),
        };

        let output = format!(
            "Site: {}\nLatitude: {}\nLongitude: {}\nLST: {}\nLST source: {}\nCatalog: {}\nThreshold: {:.1} deg\nPlotted: {}\nLast pick: {}",
            session.site.name,
            format_dms(session.site.latitude.degrees()),
            format_dms(session.site.longitude.degrees()),
            lst_str,
            lst_source,
            catalog_str,
            session.filter.threshold_deg,
            session.visible().len(),
            pick_str,
        );
        Ok(CommandOutput::Text(output))
    }
}
