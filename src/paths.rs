use chrono::NaiveDate;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DATE_FMT: &str = "%m-%d-%y";
pub const TODO_FILE: &str = "todo.txt";
const ARCHIVE_EXT: &str = "txt";

pub fn notes_dir() -> io::Result<PathBuf> {
    if let Ok(dir) = std::env::var("NOTETAKER_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").map_err(|_| {
        io::Error::other("HOME not set; set NOTETAKER_DIR explicitly")
    })?;
    Ok(PathBuf::from(home).join("Notes"))
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// `MM-DD-YY.txt` for the given calendar day.
pub fn daily_file_name(date: NaiveDate) -> String {
    format!("{}.{ARCHIVE_EXT}", date.format(DATE_FMT))
}

pub fn daily_note_path(dir: &Path, date: NaiveDate) -> PathBuf {
    dir.join(daily_file_name(date))
}

pub fn todo_path(dir: &Path) -> PathBuf {
    dir.join(TODO_FILE)
}

pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FMT).ok()
}

/// Every `*.txt` directly under `dir` (symlinks followed), sorted by file
/// name. A missing directory is an empty archive.
pub fn list_archive_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if path.is_file()
            && path.extension().and_then(|s| s.to_str()) == Some(ARCHIVE_EXT)
        {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
