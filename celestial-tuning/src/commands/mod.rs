pub mod help;
pub mod list;
pub mod load;
pub mod lst;
pub mod map;
pub mod pick;
pub mod refresh;
pub mod show;
pub mod thresh;

use crate::error::Result;
use crate::session::Session;

pub enum CommandOutput {
    Text(String),
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    None,
}

pub trait Command {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn execute(&self, session: &mut Session, args: &[&str]) -> Result<CommandOutput>;
}

pub fn dispatch(session: &mut Session, input: &str) -> Result<CommandOutput> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.is_empty() {
        return Ok(CommandOutput::None);
    }
    let cmd_name = parts[0].to_uppercase();
    let args = &parts[1..];
    match cmd_name.as_str() {
        "HELP" => help::Help.execute(session, args),
        "LIST" => list::List.execute(session, args),
        "LOAD" => load::Load.execute(session, args),
        "LST" => lst::Lst.execute(session, args),
        "MAP" => map::Map.execute(session, args),
        "PICK" => pick::Pick.execute(session, args),
        "QUIT" => Ok(CommandOutput::Text("Use Ctrl-D to exit".to_string())),
        "REFRESH" => refresh::Refresh.execute(session, args),
        "SHOW" => show::Show.execute(session, args),
        "THRESH" => thresh::Thresh.execute(session, args),
        _ => Err(crate::error::Error::Parse(format!(
            "unknown command: {}",
            parts[0]
        ))),
    }
}

#[cfg(test)]
pub(crate) fn test_session() -> Session {
    use crate::catalog::make_record;
    let mut session = Session::new(crate::config::SiteConfig::default().site().unwrap());
    session.set_catalog(vec![
        make_record("HIGH1", 10.2, -35.0, 4.0),
        make_record("LOW", 22.0, 10.0, 4.0),
        make_record("HIGH2", 9.7, -25.0, 6.0),
    ]);
    session.set_lst(10.0);
    session
}
