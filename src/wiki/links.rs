use std::collections::BTreeSet;

use tokio::fs;
use tracing::warn;

use crate::wiki::{WikiError, WikiStore};

const LINK_OPEN: &str = "[[";
const LINK_CLOSE: &str = "]]";

impl WikiStore {
    /// Pages that the given page links to
    ///
    /// Linear scan for `[[...]]` pairs. Targets spanning a line break and
    /// targets naming a non-existent page are dropped with a warning. The
    /// result is deduplicated and sorted.
    pub async fn outgoing_links(&self, name: &str) -> Result<Vec<String>, WikiError> {
        let text = self.read_page(name).await?;

        let mut links = BTreeSet::new();
        let mut cursor = 0;
        while let Some(open) = text[cursor..].find(LINK_OPEN) {
            let target_start = cursor + open + LINK_OPEN.len();
            let Some(close) = text[target_start..].find(LINK_CLOSE) else {
                break;
            };
            let target = &text[target_start..target_start + close];
            cursor = target_start + close + LINK_CLOSE.len();

            if target.contains('\n') {
                warn!("Page '{}' contains a link that spans multiple lines: {}", name, target);
                continue;
            }
            if !self.page_exists(target) {
                warn!("Page '{}' contains a link to a non-existent page: {}", name, target);
                continue;
            }

            links.insert(target.to_string());
        }

        Ok(links.into_iter().collect())
    }

    /// Pages that link to the given page
    ///
    /// Full-corpus scan for the literal substring `[[Name]]`.
    pub async fn incoming_links(&self, name: &str) -> Result<Vec<String>, WikiError> {
        let needle = format!("{LINK_OPEN}{name}{LINK_CLOSE}");

        let mut incoming = BTreeSet::new();
        for path in self.page_files() {
            let Some(stem) = path.file_stem() else {
                continue;
            };
            let text = fs::read_to_string(&path).await?;
            if text.contains(&needle) {
                incoming.insert(stem.to_string_lossy().to_string());
            }
        }

        Ok(incoming.into_iter().collect())
    }
}
