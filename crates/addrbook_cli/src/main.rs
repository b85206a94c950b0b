//! Interactive address book shell.
//!
//! # Responsibility
//! - Parse process arguments and start file logging.
//! - Run the read-dispatch-render loop over stdin until exit or end of input.

mod render;

use addrbook_core::{
    core_version, default_log_level, init_logging, Language, LoopControl, Session, SessionConfig,
};
use clap::Parser;
use log::warn;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "addrbook")]
#[command(about = "Address book and notes assistant", version)]
struct Cli {
    /// Directory holding addressbook.json, notes.json and settings.json
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,
    /// Log level (trace|debug|info|warn|error)
    #[arg(long)]
    log_level: Option<String>,
    /// Log directory (defaults to <data-dir>/logs)
    #[arg(long)]
    log_dir: Option<PathBuf>,
    /// Skip the startup banner and command list
    #[arg(long)]
    no_banner: bool,
}

fn main() {
    let cli = Cli::parse();
    let data_dir = absolute(&cli.data_dir);
    let log_dir = cli
        .log_dir
        .as_deref()
        .map(absolute)
        .unwrap_or_else(|| data_dir.join("logs"));
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    if let Err(err) = init_logging(level, &log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }

    let (mut session, notices) = Session::open(&SessionConfig::in_dir(&data_dir));
    render::print_notices(&notices, session.language());

    if !cli.no_banner {
        println!("Welcome to the assistant bot! (addrbook {})", core_version());
        let help = session.handle_line("help");
        render::print_notices(&help.notices, session.language());
    }

    run_loop(&mut session);
}

fn run_loop(session: &mut Session<'_>) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        prompt(session.language());
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(err)) => {
                eprintln!("failed to read input: {err}");
                break;
            }
            None => break,
        };

        let dispatched = session.handle_line(&line);
        render::print_notices(&dispatched.notices, session.language());
        if dispatched.control == LoopControl::Stop {
            return;
        }
    }

    let notices = session.shutdown();
    render::print_notices(&notices, session.language());
}

fn prompt(language: Language) {
    if let Err(err) = write_prompt(&mut io::stdout(), language) {
        warn!("event=prompt_write module=cli status=error reason={err}");
    }
}

fn write_prompt(out: &mut impl Write, language: Language) -> io::Result<()> {
    let text = match language {
        Language::En => "Enter a command: ",
        Language::Uk => "Введіть команду: ",
    };
    out.write_all(text.as_bytes())?;
    out.flush()
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
