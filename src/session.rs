use crate::error::StoreError;
use crate::note::append_note;
use crate::search::{SearchOutcome, search};
use crate::todo::{load_todos, save_todos};
use chrono::{Local, NaiveDateTime};
use std::fmt;
use std::path::PathBuf;

/// Which store a save targets and which buffer is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Notes,
    Todos,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Notes => Mode::Todos,
            Mode::Todos => Mode::Notes,
        }
    }

    pub fn is_notes(self) -> bool {
        self == Mode::Notes
    }

    pub fn from_is_notes(is_notes: bool) -> Self {
        if is_notes { Mode::Notes } else { Mode::Todos }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Notes => write!(f, "notes"),
            Mode::Todos => write!(f, "todos"),
        }
    }
}

/// Result of a successful save: the store written and the file touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Saved {
    pub mode: Mode,
    pub path: PathBuf,
}

/// Controller owning the mode flag and both editing buffers. Front ends
/// drive it; it never prints except to report a failed to-do load.
pub struct Session {
    dir: PathBuf,
    mode: Mode,
    notes_buffer: String,
    todo_buffer: String,
    clock: fn() -> NaiveDateTime,
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl Session {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            mode: Mode::Notes,
            notes_buffer: String::new(),
            todo_buffer: String::new(),
            clock: local_now,
        }
    }

    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn now(&self) -> NaiveDateTime {
        (self.clock)()
    }

    /// Flip the mode. Entering Todos reloads the list from disk into the
    /// to-do buffer; the notes buffer is left as it was.
    pub fn toggle_mode(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        if self.mode == Mode::Todos {
            self.todo_buffer = self.load_todos();
        }
        self.mode
    }

    /// To-do text for display. A read failure is reported and degrades to
    /// an empty list.
    pub fn load_todos(&self) -> String {
        match load_todos(&self.dir) {
            Ok(raw) => raw.strip_suffix('\n').unwrap_or(&raw).to_string(),
            Err(e) => {
                eprintln!("Error: {e}");
                String::new()
            }
        }
    }

    pub fn buffer(&self) -> &str {
        match self.mode {
            Mode::Notes => &self.notes_buffer,
            Mode::Todos => &self.todo_buffer,
        }
    }

    fn buffer_mut(&mut self) -> &mut String {
        match self.mode {
            Mode::Notes => &mut self.notes_buffer,
            Mode::Todos => &mut self.todo_buffer,
        }
    }

    pub fn set_buffer(&mut self, text: &str) {
        *self.buffer_mut() = text.to_string();
    }

    /// Add a line to the visible buffer.
    pub fn push_line(&mut self, text: &str) {
        let buf = self.buffer_mut();
        if !buf.is_empty() {
            buf.push('\n');
        }
        buf.push_str(text);
    }

    pub fn clear_buffer(&mut self) {
        self.buffer_mut().clear();
    }

    /// Save the visible buffer to the store picked by the mode. A note
    /// save clears the notes buffer; a failure leaves both buffers alone.
    pub fn save_current(&mut self) -> Result<Saved, StoreError> {
        let text = self.buffer().to_string();
        let saved = self.save_content(self.mode.is_notes(), &text)?;
        if saved.mode == Mode::Notes {
            self.notes_buffer.clear();
        }
        Ok(saved)
    }

    /// Save `text` without touching any buffer.
    pub fn save_content(
        &self,
        mode_is_notes: bool,
        text: &str,
    ) -> Result<Saved, StoreError> {
        let mode = Mode::from_is_notes(mode_is_notes);
        let path = match mode {
            Mode::Notes => append_note(&self.dir, text, self.now())?,
            Mode::Todos => save_todos(&self.dir, text)?,
        };
        Ok(Saved { mode, path })
    }

    /// `None` for an empty term: nothing to look for. Whitespace is a
    /// term like any other.
    pub fn search(&self, term: &str) -> Option<SearchOutcome> {
        if term.is_empty() {
            return None;
        }
        Some(search(&self.dir, term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::header;
    use crate::paths::{daily_note_path, todo_path};
    use chrono::NaiveDate;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn morning() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap()
    }

    fn session(dir: &Path) -> Session {
        Session::new(dir).with_clock(morning)
    }

    #[test]
    fn starts_in_notes_and_toggles() {
        let tmp = tempdir().unwrap();
        let mut s = session(tmp.path());
        assert_eq!(s.mode(), Mode::Notes);
        assert_eq!(s.toggle_mode(), Mode::Todos);
        assert_eq!(s.toggle_mode(), Mode::Notes);
        assert_eq!(Mode::Todos.to_string(), "todos");
    }

    #[test]
    fn note_save_appends_and_clears_buffer() {
        let tmp = tempdir().unwrap();
        let mut s = session(tmp.path());
        s.push_line("buy milk");
        let saved = s.save_current().unwrap();
        assert_eq!(saved.mode, Mode::Notes);
        assert_eq!(saved.path, daily_note_path(tmp.path(), morning().date()));
        assert_eq!(s.buffer(), "");

        let raw = fs::read_to_string(&saved.path).unwrap();
        assert_eq!(raw, format!("{}[09:15] buy milk\n", header(morning().date())));
    }

    #[test]
    fn multiline_buffer_is_one_entry() {
        let tmp = tempdir().unwrap();
        let mut s = session(tmp.path());
        s.push_line("first");
        s.push_line("second");
        let saved = s.save_current().unwrap();
        let raw = fs::read_to_string(saved.path).unwrap();
        assert!(raw.ends_with("[09:15] first\nsecond\n"));
        assert_eq!(raw.matches("[09:15]").count(), 1);
    }

    #[test]
    fn entering_todos_reloads_from_disk() {
        let tmp = tempdir().unwrap();
        fs::write(todo_path(tmp.path()), "- eggs\n").unwrap();
        let mut s = session(tmp.path());
        s.push_line("draft note");
        s.toggle_mode();
        assert_eq!(s.buffer(), "- eggs");

        fs::write(todo_path(tmp.path()), "- bread\n").unwrap();
        s.toggle_mode();
        assert_eq!(s.buffer(), "draft note");
        s.toggle_mode();
        assert_eq!(s.buffer(), "- bread");
    }

    #[test]
    fn todo_save_overwrites_and_keeps_buffer() {
        let tmp = tempdir().unwrap();
        let mut s = session(tmp.path());
        s.toggle_mode();
        s.set_buffer("- one\n- two\n");
        s.save_current().unwrap();
        assert_eq!(s.buffer(), "- one\n- two\n");
        assert_eq!(
            fs::read_to_string(todo_path(tmp.path())).unwrap(),
            "- one\n- two\n"
        );
        assert_eq!(s.load_todos(), "- one\n- two");
    }

    #[test]
    fn boundary_save_round_trips_todos() {
        let tmp = tempdir().unwrap();
        let s = session(tmp.path());
        s.save_content(false, "  call the bank \n").unwrap();
        assert_eq!(s.load_todos(), "call the bank");
    }

    #[test]
    fn failed_save_keeps_buffer() {
        let tmp = tempdir().unwrap();
        let blocker = tmp.path().join("file");
        fs::write(&blocker, "").unwrap();
        let mut s = session(&blocker.join("Notes"));
        s.push_line("precious");
        let err = s.save_current().unwrap_err();
        assert!(err.to_string().starts_with("Could not save"));
        assert_eq!(s.buffer(), "precious");
    }

    #[test]
    fn load_todos_without_directory_is_empty() {
        let tmp = tempdir().unwrap();
        let s = session(&tmp.path().join("absent"));
        assert_eq!(s.load_todos(), "");
        assert!(!tmp.path().join("absent").exists());
    }

    #[test]
    fn unreadable_todos_degrade_to_empty() {
        let tmp = tempdir().unwrap();
        fs::create_dir(todo_path(tmp.path())).unwrap();
        let mut s = session(tmp.path());
        assert_eq!(s.load_todos(), "");
        s.toggle_mode();
        assert_eq!(s.buffer(), "");
    }

    #[test]
    fn blank_search_is_a_no_op() {
        let tmp = tempdir().unwrap();
        let s = session(tmp.path());
        assert!(s.search("").is_none());
    }

    #[test]
    fn whitespace_search_matches_spaces() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("a.txt"), "[09:15] buy milk\n").unwrap();
        let s = session(tmp.path());
        assert_eq!(s.search(" ").map(|o| o.match_count()), Some(1));
    }

    #[test]
    fn search_sees_saved_notes() {
        let tmp = tempdir().unwrap();
        let mut s = session(tmp.path());
        s.push_line("buy milk");
        s.save_current().unwrap();
        let outcome = s.search("MILK").unwrap();
        assert_eq!(outcome.match_count(), 1);
        assert_eq!(outcome.hits()[0].timestamp, "[09:15]");
        assert_eq!(s.search("xyzzy"), Some(SearchOutcome::NotFound));
    }
}
