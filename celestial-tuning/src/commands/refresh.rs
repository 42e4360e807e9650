use super::lst::format_lst;
use super::{Command, CommandOutput};
use crate::error::Result;
use crate::session::Session;

pub struct Refresh;

impl Command for Refresh {
    fn name(&self) -> &str {
        "REFRESH"
    }
    fn description(&self) -> &str {
        "Re-read LST from the control system"
    }

    fn execute(&self, session: &mut Session, _args: &[&str]) -> Result<CommandOutput> {
        let hours = session.refresh_lst()?;
        Ok(CommandOutput::Text(format!(
            "{}, {} pairs above {:.1} deg",
            format_lst(hours),
            session.visible().len(),
            session.filter.threshold_deg
        )))
    }
}
