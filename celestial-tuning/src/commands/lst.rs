use crate::error::Result;
use crate::parser::parse_lst_args;
use crate::session::Session;
use crate::site::format_hours;
use super::{Command, CommandOutput};

pub struct Lst;

impl Command for Lst {
    fn name(&self) -> &str { "LST" }
    fn description(&self) -> &str { "Set or show local sidereal time" }

    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        if args.is_empty() {
            return Ok(CommandOutput::Text(match session.current_lst() {
                Ok(lst) => format_lst(lst),
                Err(_) => "No LST set".to_string(),
            }));
        }
        let hours = parse_lst_args(args)?;
        session.set_lst(hours);
        Ok(CommandOutput::Text(format!(
            "{}, {} pairs above {:.1} deg",
            format_lst(hours),
            session.visible().len(),
            session.filter.threshold_deg
        )))
    }
}

pub(crate) fn format_lst(hours: f64) -> String {
    format!("LST = {}", format_hours(hours))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    fn fresh() -> Session {
        Session::new(SiteConfig::default().site().unwrap())
    }

    fn text(out: CommandOutput) -> String {
        match out {
            CommandOutput::Text(s) => s,
            _ => panic!("expected Text output"),
        }
    }

    #[test]
    fn show_when_no_lst_set() {
        let mut session = fresh();
        assert_eq!(text(Lst.execute(&mut session, &[]).unwrap()), "No LST set");
    }

    #[test]
    fn set_decimal_hours() {
        let mut session = fresh();
        Lst.execute(&mut session, &["14.5"]).unwrap();
        assert_eq!(session.current_lst().unwrap(), 14.5);
    }

    #[test]
    fn set_hms_words_and_colons() {
        let mut session = fresh();
        Lst.execute(&mut session, &["14", "30", "00"]).unwrap();
        assert_eq!(session.current_lst().unwrap(), 14.5);
        Lst.execute(&mut session, &["02:15:00"]).unwrap();
        assert_eq!(session.current_lst().unwrap(), 2.25);
    }

    #[test]
    fn show_after_set() {
        let mut session = fresh();
        Lst.execute(&mut session, &["14", "30", "00"]).unwrap();
        let s = text(Lst.execute(&mut session, &[]).unwrap());
        assert!(s.starts_with("LST = 14h 30m"));
    }

    #[test]
    fn new_lst_rebuilds_visible_set() {
        let mut session = crate::commands::test_session();
        assert_eq!(session.visible().len(), 2);
        let s = text(Lst.execute(&mut session, &["16"]).unwrap());
        assert!(s.ends_with("0 pairs above 30.0 deg"));
        assert!(session.visible().is_empty());
    }

    #[test]
    fn reject_bad_input() {
        let mut session = fresh();
        assert!(Lst.execute(&mut session, &["25.0"]).is_err());
        assert!(Lst.execute(&mut session, &["abc"]).is_err());
        assert!(Lst.execute(&mut session, &["14", "30"]).is_err());
        assert!(session.current_lst().is_err());
    }
}
