use std::env;
use std::error::Error;
use std::io;
use std::path::Path;

pub mod error;
pub mod formatting;
pub mod note;
pub mod paths;
pub mod render;
pub mod search;
pub mod session;
pub mod shell;
pub mod todo;

mod shared {
    pub mod layout;
}

pub use error::StoreError;
pub use search::{SearchHit, SearchOutcome};
pub use session::{Mode, Saved, Session};

use formatting::FormatContext;
use paths::{notes_dir, parse_day};

pub fn entry() -> Result<(), Box<dyn Error>> {
    let mut args: Vec<String> = env::args().skip(1).collect();
    let cmd = if args.is_empty() {
        "shell".to_string()
    } else {
        args.remove(0)
    };
    let ctx = FormatContext::from_env();

    match cmd.as_str() {
        "shell" => run_shell(&notes_dir()?, &ctx)?,
        "add" => add_note(args, &notes_dir()?)?,
        "todo" | "todos" => todo_cmd(args, &notes_dir()?)?,
        "search" => search_cmd(args, &notes_dir()?, &ctx)?,
        "today" => today_cmd(args, &notes_dir()?)?,
        "path" => println!("{}", notes_dir()?.display()),
        "help" | "-h" | "--help" => print_help(),
        other => {
            eprintln!("Unknown command: {other}");
            print_help();
        }
    }

    Ok(())
}

fn print_help() {
    println!(
        "\
Note and To-do Taker
Usage:
  nt [shell]                      Interactive editor (Return saves, :t toggles notes/todos)
  nt add \"note text\"              Append a timestamped entry to today's note file
  nt todo                         Show the to-do list
  nt todo set \"text\"              Replace the to-do list
  nt todo clear                   Empty the to-do list
  nt search <term> [-l|--lines]   Case-insensitive search across every note file
  nt today [MM-DD-YY]             Print today's (or the given day's) note file
  nt path                         Show the notes directory
  nt help                         Show this message

Environment:
  NOTETAKER_DIR                   Override notes directory (default: ~/Notes)
  NO_COLOR                        Disable colored output
"
    );
}

fn run_shell(dir: &Path, ctx: &FormatContext) -> Result<(), Box<dyn Error>> {
    let mut session = Session::new(dir);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    shell::run_shell(&mut session, stdin.lock(), &mut stdout, ctx)?;
    Ok(())
}

fn add_note(args: Vec<String>, dir: &Path) -> Result<(), Box<dyn Error>> {
    if args.is_empty() {
        return Err("Provide the note text, e.g. `nt add \"text\"`".into());
    }
    let session = Session::new(dir);
    let saved = session.save_content(true, &args.join(" "))?;
    println!("Saved content successfully. ({})", saved.path.display());
    Ok(())
}

fn todo_cmd(args: Vec<String>, dir: &Path) -> Result<(), Box<dyn Error>> {
    let session = Session::new(dir);
    let mut iter = args.into_iter();
    match iter.next().as_deref() {
        None => {
            let todos = session.load_todos();
            if todos.trim().is_empty() {
                println!("No to-dos yet. Try `nt todo set \"text\"`.");
            } else {
                println!("{todos}");
            }
        }
        Some("set") => {
            let text = iter.collect::<Vec<_>>().join(" ");
            if text.trim().is_empty() {
                return Err("Provide the to-do text, or use `nt todo clear`".into());
            }
            session.save_content(false, &text)?;
            println!("Saved content successfully.");
        }
        Some("clear") => {
            session.save_content(false, "")?;
            println!("Cleared to-dos.");
        }
        Some(other) => {
            return Err(format!("Unknown todo action: {other}").into());
        }
    }
    Ok(())
}

fn search_cmd(
    args: Vec<String>,
    dir: &Path,
    ctx: &FormatContext,
) -> Result<(), Box<dyn Error>> {
    let mut show_lines = false;
    let mut words: Vec<String> = Vec::new();
    for arg in args {
        match arg.as_str() {
            "-l" | "--lines" => show_lines = true,
            _ => words.push(arg),
        }
    }
    let term = words.join(" ");
    let session = Session::new(dir);
    let Some(outcome) = session.search(&term) else {
        println!("Nothing to search for.");
        return Ok(());
    };
    let width = shared::layout::terminal_columns();
    println!(
        "{}",
        render::render_search(&outcome, &term, show_lines, width, ctx)
    );
    Ok(())
}

fn today_cmd(args: Vec<String>, dir: &Path) -> Result<(), Box<dyn Error>> {
    let date = match args.first() {
        Some(raw) => parse_day(raw)
            .ok_or_else(|| format!("Expected a date like MM-DD-YY, got {raw}"))?,
        None => Session::new(dir).now().date(),
    };
    match note::read_daily(dir, date)? {
        Some(raw) => print!("{raw}"),
        None => println!(
            "No notes for {} yet.",
            date.format(paths::DATE_FMT)
        ),
    }
    Ok(())
}
