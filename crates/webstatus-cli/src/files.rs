//! Feature file discovery.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Expand the command-line paths into feature files. Directories contribute
/// their `*.json` entries (not recursively), sorted by name.
pub fn collect(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        let metadata =
            std::fs::metadata(path).with_context(|| format!("cannot access {}", path.display()))?;
        if !metadata.is_dir() {
            files.push(path.clone());
            continue;
        }
        let mut entries = Vec::new();
        for entry in
            std::fs::read_dir(path).with_context(|| format!("cannot list {}", path.display()))?
        {
            let entry_path = entry
                .with_context(|| format!("cannot list {}", path.display()))?
                .path();
            if entry_path.is_file() && entry_path.extension().is_some_and(|ext| ext == "json") {
                entries.push(entry_path);
            }
        }
        entries.sort();
        files.extend(entries);
    }
    Ok(files)
}

/// Feature id: the file name up to its first dot.
pub fn feature_id(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    name.split('.').next().unwrap_or_default().to_string()
}
