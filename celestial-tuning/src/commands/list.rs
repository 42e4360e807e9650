use super::{Command, CommandOutput};
use crate::error::Result;
use crate::session::Session;

pub struct List;

impl Command for List {
    fn name(&self) -> &str {
        "LIST"
    }
    fn description(&self) -> &str {
        "List plotted pairs"
    }

    fn execute(&self, session: &mut Session, _args: &[&str]) -> Result<CommandOutput> {
        session.current_lst()?;
        let visible = session.visible();
        if visible.is_empty() {
            return Ok(CommandOutput::Text(format!(
                "No pairs above {:.1} deg",
                session.filter.threshold_deg
            )));
        }
        let headers = ["#", "AcqCam", "PWFS", "El", "Az", "Vmag", "Class"]
            .iter()
            .map(|h| h.to_string())
            .collect();
        let rows = visible
            .iter()
            .enumerate()
            .map(|(i, e)| {
                vec![
                    i.to_string(),
                    e.record.acq_id.clone(),
                    e.record.guide_id.clone(),
                    format!("{:.1}", e.position.elevation_deg),
                    format!("{:.1}", e.position.azimuth_deg),
                    format!("{:.1}", e.record.acq_vmag),
                    e.brightness_class.label().to_string(),
                ]
            })
            .collect();
        Ok(CommandOutput::Table { headers, rows })
    }
}
