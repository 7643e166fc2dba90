//! Writing the rendered tree to a text file.

use std::error::Error;
use std::path::{Path, PathBuf};

/// File name used when none is configured.
pub const DEFAULT_TREE_FILE: &str = "tree.txt";

/// Write `tree_str` to `filename`, or to [`DEFAULT_TREE_FILE`] when None.
///
/// # Returns
/// * `Ok(PathBuf)` - The path written
/// * `Err` - If the file cannot be written
pub fn save_tree(tree_str: &str, filename: Option<&Path>) -> Result<PathBuf, Box<dyn Error>> {
    let path = filename
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TREE_FILE));

    std::fs::write(&path, tree_str)
        .map_err(|e| format!("Error writing tree file {}: {e}", path.display()))?;
    log::info!("Tree written to {} ({} bytes)", path.display(), tree_str.len());
    Ok(path)
}

/// Timestamped file name, e.g. `tree_2024-05-01_134501.txt`.
pub fn timestamped_tree_file() -> PathBuf {
    let now = chrono::Local::now();
    PathBuf::from(format!("tree_{}.txt", now.format("%Y-%m-%d_%H%M%S")))
}
