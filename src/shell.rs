//! Line-oriented stand-in for the editor window. Return saves, a trailing
//! backslash continues the entry, and `:` commands mirror the key map.

use crate::formatting::FormatContext;
use crate::render::render_search;
use crate::session::{Mode, Session};
use crate::shared::layout::terminal_columns;
use std::io::{self, BufRead, Write};

pub const KEYBINDS: &str = "Keys: Return save | \\ at end of line: new line | :s save | :t toggle mode | :f <term> search | :show | :clear | :q quit";

#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Line(&'a str),
    Continue(&'a str),
    Save,
    Toggle,
    Search(&'a str),
    Show,
    Clear,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_input(raw: &str) -> Input<'_> {
    let line = raw.trim_end_matches(['\r', '\n']);
    let Some(cmd) = line.strip_prefix(':') else {
        return match line.strip_suffix('\\') {
            Some(rest) => Input::Continue(rest),
            None => Input::Line(line),
        };
    };
    let (name, arg) = match cmd.split_once(' ') {
        Some((name, arg)) => (name, arg),
        None => (cmd, ""),
    };
    match name {
        "s" | "save" => Input::Save,
        "t" | "toggle" => Input::Toggle,
        "f" | "search" => Input::Search(arg),
        "show" => Input::Show,
        "clear" => Input::Clear,
        "h" | "help" => Input::Help,
        "q" | "quit" => Input::Quit,
        _ => Input::Unknown(name),
    }
}

fn save<W: Write>(
    session: &mut Session,
    out: &mut W,
    ctx: &FormatContext,
) -> io::Result<()> {
    match session.save_current() {
        Ok(_) => writeln!(out, "Saved content successfully."),
        Err(e) => {
            let msg = format!("Error: {e} ({})", e.path().display());
            writeln!(out, "{}", ctx.format_error(&msg))
        }
    }
}

/// Drive `session` from `input` until EOF or `:q`.
pub fn run_shell<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
    ctx: &FormatContext,
) -> io::Result<()> {
    writeln!(out, "{KEYBINDS}")?;
    let width = terminal_columns();
    let mut lines = input.lines();
    loop {
        write!(out, "{}> ", session.mode())?;
        out.flush()?;
        let Some(raw) = lines.next() else { break };
        let raw = raw?;
        match parse_input(&raw) {
            Input::Line(text) => {
                session.push_line(text);
                save(session, out, ctx)?;
            }
            Input::Continue(text) => session.push_line(text),
            Input::Save => save(session, out, ctx)?,
            Input::Toggle => {
                let mode = session.toggle_mode();
                writeln!(out, "{}", ctx.format_header(&format!("[{mode}]")))?;
                if mode == Mode::Todos && !session.buffer().is_empty() {
                    writeln!(out, "{}", session.buffer())?;
                }
            }
            Input::Search(term) => {
                if let Some(outcome) = session.search(term) {
                    let text = render_search(&outcome, term, false, width, ctx);
                    writeln!(out, "{text}")?;
                }
            }
            Input::Show => writeln!(out, "{}", session.buffer())?,
            Input::Clear => session.clear_buffer(),
            Input::Help => writeln!(out, "{KEYBINDS}")?,
            Input::Quit => break,
            Input::Unknown(name) => {
                writeln!(out, "{}", ctx.format_error(&format!("Unknown command: :{name}")))?
            }
        }
    }
    writeln!(out)?;
    Ok(())
}
