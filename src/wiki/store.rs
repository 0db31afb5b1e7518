use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::wiki::edit::{apply_edits, validate_edits, Edit};
use crate::wiki::{init, WikiError};

/// Store over a directory tree of markdown pages
///
/// Pages are identified by filename stem; lookup searches the whole tree so
/// pages may be organized into subdirectories. New pages are always created
/// at the wiki root.
#[derive(Debug, Clone)]
pub struct WikiStore {
    root: PathBuf,
}

impl WikiStore {
    /// Open an existing wiki
    ///
    /// Fails unless the directory carries the `.wikimage` sentinel marker.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, WikiError> {
        let root = root.into();
        if !init::is_wiki(&root) {
            return Err(WikiError::NotAWiki(root.display().to_string()));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every markdown page file under the root, in directory order
    pub(crate) fn page_files(&self) -> Vec<PathBuf> {
        WalkDir::new(&self.root)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                entry.file_type().is_file()
                    && entry.path().extension().is_some_and(|ext| ext == "md")
            })
            .map(|entry| entry.into_path())
            .collect()
    }

    /// Find the file backing a page by its stem, searching the whole tree
    pub fn page_path(&self, name: &str) -> Result<PathBuf, WikiError> {
        self.page_files()
            .into_iter()
            .find(|path| path.file_stem().is_some_and(|stem| stem == name))
            .ok_or_else(|| WikiError::PageNotFound(name.to_string()))
    }

    pub fn page_exists(&self, name: &str) -> bool {
        self.page_path(name).is_ok()
    }

    /// Sorted stems of every page in the wiki
    pub fn list_pages(&self) -> Vec<String> {
        let mut pages: Vec<String> = self
            .page_files()
            .into_iter()
            .filter_map(|path| {
                path.file_stem()
                    .map(|stem| stem.to_string_lossy().to_string())
            })
            .collect();
        pages.sort();
        pages
    }

    /// Create a new page at the wiki root
    ///
    /// Fails if a page with that stem exists anywhere in the tree, so two
    /// pages can never share a name.
    pub async fn create_page(&self, name: &str, content: &str) -> Result<(), WikiError> {
        validate_name(name)?;

        if self.page_exists(name) {
            return Err(WikiError::PageExists(name.to_string()));
        }

        let path = self.root.join(name).with_extension("md");
        fs::write(&path, content).await?;

        info!("Created page '{}' at {}", name, path.display());
        Ok(())
    }

    pub async fn delete_page(&self, name: &str) -> Result<(), WikiError> {
        let path = self.page_path(name)?;
        fs::remove_file(&path).await?;

        info!("Deleted page '{}' at {}", name, path.display());
        Ok(())
    }

    /// Raw page content
    pub async fn read_page(&self, name: &str) -> Result<String, WikiError> {
        let path = self.page_path(name)?;
        Ok(fs::read_to_string(&path).await?)
    }

    /// Page content with 0-based line numbers, the form the agent edits
    /// against
    pub async fn view_page(&self, name: &str) -> Result<String, WikiError> {
        let content = self.read_page(name).await?;
        Ok(number_lines(&content))
    }

    /// Apply a batch of line-range edits and return the numbered view of the
    /// result
    pub async fn edit_page(&self, name: &str, edits: &[Edit]) -> Result<String, WikiError> {
        let path = self.page_path(name)?;
        let content = fs::read_to_string(&path).await?;

        let mut lines: Vec<String> = content.split('\n').map(str::to_string).collect();

        validate_edits(edits, lines.len())?;
        apply_edits(&mut lines, edits);

        fs::write(&path, lines.join("\n")).await?;

        debug!("Applied {} edit(s) to page '{}'", edits.len(), name);
        self.view_page(name).await
    }
}

fn validate_name(name: &str) -> Result<(), WikiError> {
    if name.is_empty() {
        return Err(WikiError::InvalidName {
            name: name.to_string(),
            reason: "page names may not be empty".to_string(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(WikiError::InvalidName {
            name: name.to_string(),
            reason: "page names may not include slashes".to_string(),
        });
    }
    Ok(())
}

/// Prepend 0-based line numbers, right-aligned to the widest number
fn number_lines(content: &str) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let num_digits = lines.len().to_string().len();

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{i:>num_digits$}: {line}"))
        .collect::<Vec<String>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn test_wiki() -> (TempDir, WikiStore) {
        let temp_dir = TempDir::new().unwrap();
        init::init_wiki(temp_dir.path()).await.unwrap();
        let store = WikiStore::open(temp_dir.path()).unwrap();
        (temp_dir, store)
    }

    #[tokio::test]
    async fn test_open_requires_marker() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            WikiStore::open(temp_dir.path()),
            Err(WikiError::NotAWiki(_))
        ));
    }

    #[tokio::test]
    async fn test_create_then_view_round_trip() {
        let (_dir, store) = test_wiki().await;

        store.create_page("Home", "# Home\n\nwelcome").await.unwrap();

        let view = store.view_page("Home").await.unwrap();
        assert_eq!(view, "0: # Home\n1: \n2: welcome");
    }

    #[tokio::test]
    async fn test_duplicate_create_rejected() {
        let (_dir, store) = test_wiki().await;

        store.create_page("Home", "a").await.unwrap();
        let err = store.create_page("Home", "b").await.unwrap_err();
        assert!(matches!(err, WikiError::PageExists(name) if name == "Home"));
    }

    #[tokio::test]
    async fn test_invalid_names_rejected() {
        let (_dir, store) = test_wiki().await;

        assert!(matches!(
            store.create_page("", "x").await,
            Err(WikiError::InvalidName { .. })
        ));
        assert!(matches!(
            store.create_page("a/b", "x").await,
            Err(WikiError::InvalidName { .. })
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_page_rejected() {
        let (_dir, store) = test_wiki().await;

        let err = store.delete_page("Ghost").await.unwrap_err();
        assert!(matches!(err, WikiError::PageNotFound(name) if name == "Ghost"));
    }

    #[tokio::test]
    async fn test_delete_removes_page() {
        let (_dir, store) = test_wiki().await;

        store.create_page("Home", "x").await.unwrap();
        store.delete_page("Home").await.unwrap();
        assert!(!store.page_exists("Home"));
    }

    #[tokio::test]
    async fn test_lookup_finds_nested_pages() {
        let (dir, store) = test_wiki().await;

        let sub = dir.path().join("characters");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("Luffy.md"), "# Luffy").unwrap();

        assert!(store.page_exists("Luffy"));
        assert_eq!(store.read_page("Luffy").await.unwrap(), "# Luffy");
    }

    #[tokio::test]
    async fn test_duplicate_check_covers_subdirectories() {
        let (dir, store) = test_wiki().await;

        let sub = dir.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("Nested.md"), "x").unwrap();

        assert!(matches!(
            store.create_page("Nested", "y").await,
            Err(WikiError::PageExists(_))
        ));
    }

    #[tokio::test]
    async fn test_list_pages_sorted() {
        let (_dir, store) = test_wiki().await;

        store.create_page("Zoro", "").await.unwrap();
        store.create_page("Ace", "").await.unwrap();
        store.create_page("Nami", "").await.unwrap();

        assert_eq!(store.list_pages(), vec!["Ace", "Nami", "Zoro"]);
    }

    #[tokio::test]
    async fn test_edit_then_view_reflects_replacement() {
        let (_dir, store) = test_wiki().await;

        store.create_page("Home", "a\nb\nc").await.unwrap();

        let view = store
            .edit_page("Home", &[Edit::new(1, 2, "B")])
            .await
            .unwrap();
        assert_eq!(view, "0: a\n1: B\n2: c");
        assert_eq!(store.read_page("Home").await.unwrap(), "a\nB\nc");
    }

    #[tokio::test]
    async fn test_edit_rejection_leaves_page_untouched() {
        let (_dir, store) = test_wiki().await;

        store.create_page("Home", "a\nb").await.unwrap();

        let result = store.edit_page("Home", &[Edit::new(0, 99, "x")]).await;
        assert!(matches!(result, Err(WikiError::EditOutOfBounds { .. })));
        assert_eq!(store.read_page("Home").await.unwrap(), "a\nb");
    }

    #[tokio::test]
    async fn test_multiple_edits_apply_against_original_indices() {
        let (_dir, store) = test_wiki().await;

        store.create_page("Home", "0\n1\n2\n3\n4").await.unwrap();

        store
            .edit_page(
                "Home",
                &[Edit::new(0, 1, "zero"), Edit::new(4, 5, "four")],
            )
            .await
            .unwrap();
        assert_eq!(
            store.read_page("Home").await.unwrap(),
            "zero\n1\n2\n3\nfour"
        );
    }

    #[tokio::test]
    async fn test_line_number_width_pads_to_widest() {
        let (_dir, store) = test_wiki().await;

        let content = (0..11).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        store.create_page("Long", &content).await.unwrap();

        let view = store.view_page("Long").await.unwrap();
        assert!(view.starts_with(" 0: 0\n 1: 1"));
        assert!(view.ends_with("10: 10"));
    }
}
