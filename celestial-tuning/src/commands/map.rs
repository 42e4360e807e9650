use std::path::Path;

use crate::error::{Error, Result};
use crate::session::Session;
use crate::site::format_hours;

use super::{Command, CommandOutput};

pub struct Map;

impl Command for Map {
    fn name(&self) -> &str {
        "MAP"
    }

    fn description(&self) -> &str {
        "Polar sky map of the plotted pairs"
    }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        let lst = session.current_lst()?;
        let title = format!("{} - LST {}", session.site.name, format_hours(lst));
        let threshold = session.filter.threshold_deg;
        if let Some(path) = args.first() {
            write_svg(session, Path::new(path), &title, threshold)
        } else {
            let text = crate::plot::terminal::polar_map_terminal(session.visible(), &title, threshold);
            Ok(CommandOutput::Text(text))
        }
    }
}

fn write_svg(session: &Session, path: &Path, title: &str, threshold: f64) -> Result<CommandOutput> {
    crate::plot::svg::polar_map_svg(session.visible(), path, title, threshold)
        .map_err(|e| Error::Io(std::io::Error::other(e.to_string())))?;
    Ok(CommandOutput::Text(format!(
        "Written to {} ({} pairs)",
        path.display(),
        session.visible().len()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_session;

    #[test]
    fn terminal_map_has_title() {
        let mut session = test_session();
        match Map.execute(&mut session, &[]).unwrap() {
            CommandOutput::Text(s) => {
                assert!(s.starts_with("Gemini South - LST 10h 00m 00.000s"));
                assert!(s.contains("ring at 30 deg"));
            }
            _ => panic!("expected Text output"),
        }
    }

    #[test]
    fn svg_map_written() {
        let mut session = test_session();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tuning.svg");
        let arg = path.to_str().unwrap().to_string();
        match Map.execute(&mut session, &[&arg]).unwrap() {
            CommandOutput::Text(s) => assert!(s.ends_with("(2 pairs)")),
            _ => panic!("expected Text output"),
        }
        assert!(path.exists());
    }

    #[test]
    fn map_needs_lst() {
        let mut session = Session::new(crate::config::SiteConfig::default().site().unwrap());
        assert!(Map.execute(&mut session, &[]).is_err());
    }
}
