use crate::error::{Error, Result};
use crate::session::Session;
use super::{Command, CommandOutput};

const RULE: &str = "__________________________________________________________________________";

pub struct Pick;

impl Command for Pick {
    fn name(&self) -> &str { "PICK" }
    fn description(&self) -> &str { "Show guiding data for a plotted pair" }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        let picked = match args.len() {
            1 => {
                let index: usize = args[0]
                    .parse()
                    .map_err(|_| Error::Parse(format!("invalid index: {}", args[0])))?;
                session.pick(index)
            }
            2 => {
                let az = parse_deg(args[0], "azimuth")?;
                let el = parse_deg(args[1], "elevation")?;
                session.pick_position(az, el)
            }
            _ => {
                return Err(Error::Parse(
                    "PICK expects an index (PICK 3) or a position (PICK <az> <el>)".into(),
                ))
            }
        };
        match picked {
            Ok(summary) => Ok(CommandOutput::Text(format!(
                "{RULE}\n [{}]\n{}\n{RULE}",
                summary.index, summary
            ))),
            Err(e @ (Error::IndexOutOfRange { .. } | Error::NoMarkerNear { .. })) => {
                log::debug!("pick ignored: {}", e);
                Ok(CommandOutput::Text(format!("Nothing picked: {}", e)))
            }
            Err(e) => Err(e),
        }
    }
}

fn parse_deg(s: &str, field: &str) -> Result<f64> {
    s.parse::<f64>()
        .map_err(|_| Error::Parse(format!("invalid {}: {}", field, s)))
}
