use super::{Command, CommandOutput};
use crate::error::Result;
use crate::session::Session;

pub struct Help;

impl Command for Help {
    fn name(&self) -> &str {
        "HELP"
    }
    fn description(&self) -> &str {
        "Show available commands"
    }

    fn execute(&self, _session: &mut Session, args: &[&str]) -> Result<CommandOutput> {
        if let Some(cmd) = args.first() {
            Ok(CommandOutput::Text(command_help(cmd)))
        } else {
            Ok(CommandOutput::Text(general_help()))
        }
    }
}

fn command_help(cmd: &str) -> String {
    match cmd.to_uppercase().as_str() {
        "LOAD" => "LOAD <file>\n  Load a pair catalog (two lines per pair: acquisition star, then guide star)".into(),
        "LIST" => "LIST\n  Table of plotted pairs with their selection index".into(),
        "MAP" => "MAP [file.svg]\n  Polar sky map, zenith centre, north up\n  No args = terminal, with file = SVG output".into(),
        "PICK" => "PICK <n> | PICK <az> <el>\n  Show guiding data for plotted pair n,\n  or for the marker nearest a sky position (degrees)".into(),
        "LST" => "LST [h m s | decimal_hours | HH:MM:SS]\n  Show/set local sidereal time".into(),
        "REFRESH" => "REFRESH\n  Re-read LST from the configured lst_command".into(),
        "THRESH" => "THRESH [deg]\n  Show/set the elevation cut (default 30)".into(),
        "SHOW" => "SHOW\n  Display session state".into(),
        "HELP" => "HELP [command]\n  Show help for a command".into(),
        "QUIT" => "QUIT\n  Exit the program".into(),
        _ => format!("Unknown command: {}", cmd),
    }
}

fn general_help() -> String {
    "\
Commands:
  LOAD <file>        Load pair catalog
  LIST               List plotted pairs
  MAP [file]         Polar sky map
  PICK <n>           Guiding data for a pair
  PICK <az> <el>     Pick nearest marker

  LST [time]         Set/show local sidereal time
  REFRESH            Re-read LST from control system
  THRESH [deg]       Set/show elevation cut

  SHOW               Display session state
  HELP [cmd]         Show help
  QUIT               Exit

Type HELP <command> for details."
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_session;

    #[test]
    fn general_lists_commands() {
        let mut session = test_session();
        match Help.execute(&mut session, &[]).unwrap() {
            CommandOutput::Text(s) => {
                for cmd in ["LOAD", "LIST", "MAP", "PICK", "LST", "REFRESH", "THRESH", "SHOW"] {
                    assert!(s.contains(cmd), "missing {}", cmd);
                }
            }
            _ => panic!("expected Text output"),
        }
    }

    #[test]
    fn per_command_help() {
        let mut session = test_session();
        match Help.execute(&mut session, &["pick"]).unwrap() {
            CommandOutput::Text(s) => assert!(s.starts_with("PICK <n>")),
            _ => panic!("expected Text output"),
        }
        match Help.execute(&mut session, &["bogus"]).unwrap() {
            CommandOutput::Text(s) => assert_eq!(s, "Unknown command: bogus"),
            _ => panic!("expected Text output"),
        }
    }
}
