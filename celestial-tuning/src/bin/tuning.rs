use anyhow::Context;
use celestial_tuning::commands::{self, CommandOutput};
use celestial_tuning::config::SiteConfig;
use celestial_tuning::lst::FixedLst;
use celestial_tuning::parser::parse_lst_text;
use celestial_tuning::session::Session;
use celestial_tuning::site::format_hours;
use clap::Parser;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Editor, Helper};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "tuning")]
#[command(about = "Pick tuning star pairs above the elevation cut")]
struct Cli {
    /// Pair catalog to load at startup
    catalog: Option<PathBuf>,

    /// Site config (default ~/.celestial_tuning.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Local sidereal time, decimal hours or HH:MM:SS (default: lst_command)
    #[arg(long)]
    lst: Option<String>,

    /// Elevation cut in degrees
    #[arg(long)]
    threshold: Option<f64>,

    /// Write the polar map to this SVG file
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Print guiding data for this plotted pair
    #[arg(long)]
    pick: Option<usize>,

    /// Print the list and exit instead of starting the prompt
    #[arg(long)]
    no_prompt: bool,
}

const COMMANDS: &[&str] = &[
    "LOAD", "LIST", "MAP", "PICK", "LST", "REFRESH", "THRESH", "SHOW", "HELP", "QUIT",
];

fn history_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".celestial_tuning_history")
}

struct TuningHelper;

fn split_path_prefix(partial: &str) -> (&Path, &str) {
    if partial.is_empty() {
        return (Path::new("."), "");
    }
    let path = Path::new(partial);
    if partial.ends_with(std::path::is_separator) {
        return (path, "");
    }
    match (path.parent(), path.file_name()) {
        (Some(p), Some(f)) => {
            let dir = if p.as_os_str().is_empty() { Path::new(".") } else { p };
            (dir, f.to_str().unwrap_or(""))
        }
        _ => (Path::new("."), partial),
    }
}

fn complete_path(partial: &str) -> Vec<Pair> {
    let (dir, prefix) = split_path_prefix(partial);
    let Ok(entries) = fs::read_dir(dir) else {
        return vec![];
    };
    let base = match partial.rfind(std::path::is_separator) {
        Some(i) => partial[..=i].to_string(),
        None => String::new(),
    };
    entries
        .filter_map(|e| e.ok())
        .filter_map(|e| {
            let name = e.file_name().into_string().ok()?;
            if !name.starts_with(prefix) {
                return None;
            }
            let suffix = if e.path().is_dir() { std::path::MAIN_SEPARATOR_STR } else { "" };
            Some(Pair {
                display: format!("{}{}", name, suffix),
                replacement: format!("{}{}{}", base, name, suffix),
            })
        })
        .collect()
}

impl Completer for TuningHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let up_to = &line[..pos];
        let words: Vec<&str> = up_to.split_whitespace().collect();
        let start = up_to.rfind(char::is_whitespace).map_or(0, |i| i + 1);

        if words.is_empty() || (words.len() == 1 && !up_to.ends_with(' ')) {
            let prefix = words.first().map_or("", |s| *s).to_uppercase();
            let matches = COMMANDS
                .iter()
                .filter(|c| c.starts_with(&prefix))
                .map(|c| Pair { display: c.to_string(), replacement: c.to_string() })
                .collect();
            return Ok((start, matches));
        }
        if matches!(words[0].to_uppercase().as_str(), "LOAD" | "MAP") {
            let partial = if up_to.ends_with(' ') { "" } else { words.last().copied().unwrap_or("") };
            return Ok((start, complete_path(partial)));
        }
        Ok((pos, vec![]))
    }
}

impl Hinter for TuningHelper {
    type Hint = String;
}
impl Highlighter for TuningHelper {}
impl Validator for TuningHelper {}
impl Helper for TuningHelper {}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = SiteConfig::resolve(cli.config.as_deref())?;
    let mut session = Session::from_config(&config)?;
    if let Some(threshold) = cli.threshold {
        session.set_threshold(threshold)?;
    }
    if let Some(text) = &cli.lst {
        let hours = parse_lst_text(text)?;
        session.read_lst_from(&FixedLst(hours))?;
    } else if session.lst_command.is_some() {
        session.refresh_lst().context("reading LST from lst_command")?;
    } else {
        log::warn!("no LST source configured; set one with --lst or LST");
    }
    if let Some(path) = &cli.catalog {
        session
            .load_catalog_file(path)
            .with_context(|| format!("loading catalog {}", path.display()))?;
    }

    println!("TUNING STARS MAP  {}  (celestial-tuning v{})", session.site.name, env!("CARGO_PKG_VERSION"));
    if let Ok(lst) = session.current_lst() {
        println!("LST {}", format_hours(lst));
    }

    if let Some(path) = &cli.svg {
        run(&mut session, &format!("MAP {}", path.display()))?;
    }
    if cli.no_prompt {
        run(&mut session, "LIST")?;
        if let Some(index) = cli.pick {
            run(&mut session, &format!("PICK {}", index))?;
        }
        return Ok(());
    }
    if let Some(index) = cli.pick {
        run(&mut session, &format!("PICK {}", index))?;
    }
    repl(&mut session);
    Ok(())
}

fn run(session: &mut Session, line: &str) -> anyhow::Result<()> {
    let output = commands::dispatch(session, line)?;
    print_output(output);
    Ok(())
}

fn repl(session: &mut Session) {
    println!("Type HELP for commands, Ctrl-D to exit\n");

    let mut rl = match Editor::with_config(
        rustyline::Config::builder()
            .auto_add_history(true)
            .build(),
    ) {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Failed to initialize editor: {}", e);
            return;
        }
    };
    rl.set_helper(Some(TuningHelper));

    let history = history_path();
    let _ = rl.load_history(&history);

    loop {
        match rl.readline("tuning> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line.eq_ignore_ascii_case("QUIT") {
                    println!("Bye!");
                    break;
                }
                match commands::dispatch(session, line) {
                    Ok(output) => print_output(output),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("Bye!");
                break;
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                break;
            }
        }
    }

    let _ = rl.save_history(&history);
}

fn print_output(output: CommandOutput) {
    match output {
        CommandOutput::Text(s) => println!("{}", s),
        CommandOutput::Table { headers, rows } => print_table(&headers, &rows),
        CommandOutput::None => {}
    }
}

fn print_table(headers: &[String], rows: &[Vec<String>]) {
    let widths: Vec<usize> = (0..headers.len())
        .map(|i| {
            let hw = headers[i].len();
            let rw = rows
                .iter()
                .map(|r| r.get(i).map_or(0, |s| s.len()))
                .max()
                .unwrap_or(0);
            hw.max(rw)
        })
        .collect();

    for (i, h) in headers.iter().enumerate() {
        print!("{:>width$}  ", h, width = widths[i]);
    }
    println!();

    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            print!("{:>width$}  ", cell, width = widths[i]);
        }
        println!();
    }
}
