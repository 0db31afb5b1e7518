use std::path::Path;

use tokio::fs;
use tracing::info;

use crate::wiki::WikiError;

/// Sentinel file marking a directory as a wikimage-managed wiki
pub const WIKI_MARKER: &str = ".wikimage";

const GITIGNORE: &str = "# wikimage identifier\n.wikimage\n";

/// Initialize a wikimage-managed wiki in an existing directory
///
/// Writes the sentinel marker and a `.gitignore` that keeps the marker out
/// of version control. Re-initializing an already initialized wiki is a
/// no-op apart from rewriting both files.
pub async fn init_wiki(dir: &Path) -> Result<(), WikiError> {
    fs::write(dir.join(WIKI_MARKER), "").await?;
    fs::write(dir.join(".gitignore"), GITIGNORE).await?;

    info!("Initialized wiki at {}", dir.display());
    Ok(())
}

/// Create a new directory and initialize it as a wiki
///
/// Fails if the directory already exists.
pub async fn new_wiki(dir: &Path) -> Result<(), WikiError> {
    fs::create_dir(dir).await?;
    init_wiki(dir).await
}

/// Whether the directory carries the wiki sentinel marker
pub fn is_wiki(dir: &Path) -> bool {
    dir.join(WIKI_MARKER).is_file()
}
