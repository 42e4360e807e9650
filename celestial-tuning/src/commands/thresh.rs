use super::{Command, CommandOutput};
use crate::error::{Error, Result};
use crate::session::Session;

pub struct Thresh;

impl Command for Thresh {
    fn name(&self) -> &str {
        "THRESH"
    }
    fn description(&self) -> &str {
        "Set or show the elevation cut"
    }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        if let Some(arg) = args.first() {
            let deg: f64 = arg
                .parse()
                .map_err(|_| Error::Parse(format!("invalid threshold: {}", arg)))?;
            session.set_threshold(deg)?;
        }
        Ok(CommandOutput::Text(format!(
            "Elevation threshold: {:.1} deg ({} pairs plotted)",
            session.filter.threshold_deg,
            session.visible().len()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_session;

    #[test]
    fn show_default() {
        let mut session = test_session();
        match Thresh.execute(&mut session, &[]).unwrap() {
            CommandOutput::Text(s) => assert_eq!(s, "Elevation threshold: 30.0 deg (2 pairs plotted)"),
            _ => panic!("expected Text output"),
        }
    }

    #[test]
    fn raising_threshold_shrinks_set() {
        let mut session = test_session();
        Thresh.execute(&mut session, &["84"]).unwrap();
        assert_eq!(session.visible().len(), 1);
        assert_eq!(session.visible()[0].record.acq_id, "HIGH1");
    }

    #[test]
    fn reject_invalid() {
        let mut session = test_session();
        assert!(Thresh.execute(&mut session, &["high"]).is_err());
        assert!(Thresh.execute(&mut session, &["95"]).is_err());
        assert_eq!(session.filter.threshold_deg, 30.0);
    }
}
