use crate::error::StoreError;
use crate::paths::{ensure_dir, todo_path};
use std::fs;
use std::path::{Path, PathBuf};

/// Full contents of `todo.txt`, or an empty string when there is none yet.
pub fn load_todos(dir: &Path) -> Result<String, StoreError> {
    let path = todo_path(dir);
    if !path.exists() {
        return Ok(String::new());
    }
    fs::read_to_string(&path).map_err(|e| StoreError::load(path, e))
}

/// Replace `todo.txt` with the trimmed content plus one newline. Last
/// writer wins; there is no temp-file swap.
pub fn save_todos(dir: &Path, content: &str) -> Result<PathBuf, StoreError> {
    let path = todo_path(dir);
    ensure_dir(dir).map_err(|e| StoreError::save(&path, e))?;
    let mut body = content.trim().to_string();
    body.push('\n');
    fs::write(&path, body).map_err(|e| StoreError::save(&path, e))?;
    Ok(path)
}
