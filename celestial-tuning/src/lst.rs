//! Local sidereal time sources.
//!
//! The control system owns the clock; this crate only reads it once per
//! pipeline run.

use std::process::Command;

use crate::error::{Error, Result};
use crate::parser::parse_lst_text;

pub trait LstSource {
    fn describe(&self) -> String;
    /// Current LST in hours, `[0, 24)`.
    fn read_lst(&self) -> Result<f64>;
}

/// An LST given up front, e.g. on the command line.
#[derive(Debug, Clone, Copy)]
pub struct FixedLst(pub f64);

impl LstSource for FixedLst {
    fn describe(&self) -> String {
        format!("fixed {:.6}h", self.0)
    }

    fn read_lst(&self) -> Result<f64> {
        if !(0.0..24.0).contains(&self.0) {
            return Err(Error::Lst(format!("LST must be in [0, 24), got {}", self.0)));
        }
        Ok(self.0)
    }
}

/// Runs an external command whose stdout is the LST as `HH:MM:SS.s`,
/// such as a channel-access read of the telescope control system.
#[derive(Debug, Clone)]
pub struct CommandLst {
    argv: Vec<String>,
}

impl CommandLst {
    pub fn new(argv: Vec<String>) -> Result<Self> {
        if argv.is_empty() {
            return Err(Error::Lst("empty LST command".into()));
        }
        Ok(Self { argv })
    }
}

impl LstSource for CommandLst {
    fn describe(&self) -> String {
        self.argv.join(" ")
    }

    fn read_lst(&self) -> Result<f64> {
        let output = Command::new(&self.argv[0])
            .args(&self.argv[1..])
            .output()
            .map_err(|e| Error::Lst(format!("{}: {}", self.argv[0], e)))?;
        if !output.status.success() {
            return Err(Error::Lst(format!(
                "{} exited with {}: {}",
                self.describe(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        let text = String::from_utf8_lossy(&output.stdout);
        let hours = parse_lst_text(text.trim()).map_err(|e| Error::Lst(e.to_string()))?;
        log::info!("LST {:.6}h from `{}`", hours, self.describe());
        Ok(hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_returns_value() {
        assert_eq!(FixedLst(10.0).read_lst().unwrap(), 10.0);
    }

    #[test]
    fn fixed_rejects_out_of_range() {
        assert!(matches!(FixedLst(24.0).read_lst(), Err(Error::Lst(_))));
    }

    #[test]
    fn empty_command_rejected() {
        assert!(CommandLst::new(vec![]).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn command_output_parsed() {
        let src = CommandLst::new(vec!["echo".into(), "10:30:00.0".into()]).unwrap();
        assert_eq!(src.read_lst().unwrap(), 10.5);
    }

    #[cfg(unix)]
    #[test]
    fn command_garbage_output_is_lst_error() {
        let src = CommandLst::new(vec!["echo".into(), "not-a-time".into()]).unwrap();
        assert!(matches!(src.read_lst(), Err(Error::Lst(_))));
    }

    #[cfg(unix)]
    #[test]
    fn command_failure_is_lst_error() {
        let src = CommandLst::new(vec!["false".into()]).unwrap();
        assert!(matches!(src.read_lst(), Err(Error::Lst(_))));
    }

    #[test]
    fn missing_binary_is_lst_error() {
        let src = CommandLst::new(vec!["/nonexistent/caget".into()]).unwrap();
        assert!(matches!(src.read_lst(), Err(Error::Lst(_))));
    }
}
