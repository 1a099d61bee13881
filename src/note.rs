use crate::error::StoreError;
use crate::paths::{DATE_FMT, daily_note_path, ensure_dir};
use chrono::{NaiveDate, NaiveDateTime};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const ENTRY_TIME_FMT: &str = "[%H:%M] ";

const RULE: &str = "------------------------------------------------";

// Steve the unicorn. Existing archives carry these exact bytes.
const ART: &str = r#"
                                /
                           ,.. /
                         ,'   ';
              ,,.__    _,' /';  .
             :','  ~~~~    '. '~'
            :' (   )         )::,
            '; '~~~~~~~~~~~~ .;'
    "#;

/// Decorative block written once at the top of each daily file.
pub fn header(date: NaiveDate) -> String {
    format!(
        "{RULE}\n{ART}\n{RULE}\n              Notes for {}\n{RULE}\n",
        date.format(DATE_FMT)
    )
}

/// `[HH:MM] <content>` with the content trimmed; always newline terminated.
pub fn format_entry(content: &str, now: NaiveDateTime) -> String {
    format!("{}{}\n", now.format(ENTRY_TIME_FMT), content.trim())
}

/// Append one entry to the daily file for `now`, writing the header first
/// when the file does not exist yet. Returns the file written.
pub fn append_note(
    dir: &Path,
    content: &str,
    now: NaiveDateTime,
) -> Result<PathBuf, StoreError> {
    let path = daily_note_path(dir, now.date());
    write_entry(dir, &path, content, now)
        .map_err(|e| StoreError::save(&path, e))?;
    Ok(path)
}

fn write_entry(
    dir: &Path,
    path: &Path,
    content: &str,
    now: NaiveDateTime,
) -> io::Result<()> {
    ensure_dir(dir)?;
    if !path.exists() {
        fs::write(path, header(now.date()))?;
    }
    let mut file = OpenOptions::new().append(true).open(path)?;
    file.write_all(format_entry(content, now).as_bytes())
}

/// Raw contents of one day's file, `None` when nothing was saved that day.
pub fn read_daily(dir: &Path, date: NaiveDate) -> io::Result<Option<String>> {
    let path = daily_note_path(dir, date);
    match fs::read_to_string(&path) {
        Ok(raw) => Ok(Some(raw)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}
