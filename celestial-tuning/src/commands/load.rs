use std::path::Path;

use super::{Command, CommandOutput};
use crate::error::{Error, Result};
use crate::session::Session;

pub struct Load;

impl Command for Load {
    fn name(&self) -> &str {
        "LOAD"
    }
    fn description(&self) -> &str {
        "Load a tuning-pair catalog"
    }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        let path = args
            .first()
            .ok_or_else(|| Error::Parse("LOAD requires a filename".to_string()))?;
        let count = session.load_catalog_file(Path::new(path))?;
        let mut msg = format!("Loaded {} pairs from {}", count, path);
        if session.context.is_some() {
            msg += &format!(", {} above {:.1} deg", session.visible().len(), session.filter.threshold_deg);
        }
        Ok(CommandOutput::Text(msg))
    }
}
