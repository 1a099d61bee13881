//! Full-archive keyword search. Every call re-reads every `*.txt` in the
//! note directory; there is no index or cache.

use crate::paths::list_archive_files;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One line of the archive with the token that stands in for its time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveLine {
    pub file: PathBuf,
    pub timestamp: String,
    pub line: String,
}

pub type SearchHit = ArchiveLine;

/// `Found in <file> at <stamp>`, shared by plain and painted output.
pub fn format_detail(file: &str, timestamp: &str) -> String {
    format!("Found in {file} at {timestamp}")
}

impl ArchiveLine {
    pub fn detail(&self) -> String {
        format_detail(&self.file.display().to_string(), &self.timestamp)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Vec<SearchHit>),
    NotFound,
}

impl SearchOutcome {
    pub fn match_count(&self) -> usize {
        match self {
            SearchOutcome::Found(hits) => hits.len(),
            SearchOutcome::NotFound => 0,
        }
    }

    pub fn hits(&self) -> &[SearchHit] {
        match self {
            SearchOutcome::Found(hits) => hits,
            SearchOutcome::NotFound => &[],
        }
    }

    pub fn details(&self) -> Vec<String> {
        self.hits().iter().map(SearchHit::detail).collect()
    }

    pub fn summary(&self, term: &str) -> String {
        match self {
            SearchOutcome::Found(hits) => {
                format!("Found '{term}' {} times.", hits.len())
            }
            SearchOutcome::NotFound => format!("'{term}' not found."),
        }
    }
}

/// Everything before the first whitespace character. Lines that do not
/// open with a `[HH:MM]` stamp yield whatever happens to be there (header
/// art, a bare word, or nothing at all).
pub fn extract_timestamp(line: &str) -> &str {
    line.split(char::is_whitespace).next().unwrap_or_default()
}

/// Read every archive file line by line. Files that cannot be read are
/// skipped with a warning and the scan carries on.
pub fn aggregate_notes(dir: &Path) -> Vec<ArchiveLine> {
    let files = match list_archive_files(dir) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Skipping {}: {e}", dir.display());
            return Vec::new();
        }
    };
    scan_files(files, |path| fs::read(path))
}

fn scan_files(
    files: Vec<PathBuf>,
    read: impl Fn(&Path) -> io::Result<Vec<u8>>,
) -> Vec<ArchiveLine> {
    let mut lines = Vec::new();
    for file in files {
        let raw = match read(&file) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                eprintln!("Skipping {}: {e}", file.display());
                continue;
            }
        };
        for line in raw.lines() {
            lines.push(ArchiveLine {
                file: file.clone(),
                timestamp: extract_timestamp(line).to_string(),
                line: line.trim_end().to_string(),
            });
        }
    }
    lines
}

/// Case-insensitive substring search across the whole archive, in file
/// name order and then line order.
pub fn search(dir: &Path, term: &str) -> SearchOutcome {
    let needle = term.to_lowercase();
    let hits: Vec<SearchHit> = aggregate_notes(dir)
        .into_iter()
        .filter(|l| l.line.to_lowercase().contains(&needle))
        .collect();
    if hits.is_empty() {
        SearchOutcome::NotFound
    } else {
        SearchOutcome::Found(hits)
    }
}
