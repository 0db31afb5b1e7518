pub mod create_page;
pub mod delete_page;
pub mod edit_page;
/// Wiki tools - the operations an agent uses to manage pages
///
/// One file per tool. General notes the tools' descriptions convey to the
/// agent: all wiki content is valid markdown, `[[Page Name]]` links to other
/// pages, edits are specified with 0-based line numbers (start inclusive,
/// end exclusive), and a page should be viewed before it is edited.
pub mod links;
pub mod list_pages;
pub mod view_page;

use std::sync::Arc;

use crate::tools::{ToolError, ToolRegistry};

pub use self::create_page::CreatePageTool;
pub use self::delete_page::DeletePageTool;
pub use self::edit_page::EditPageTool;
pub use self::links::{IncomingLinksTool, OutgoingLinksTool};
pub use self::list_pages::ListPagesTool;
pub use self::view_page::ViewPageTool;

/// Register the full wiki tool set
pub async fn register_wiki_tools(registry: &ToolRegistry) -> Result<(), ToolError> {
    registry.register_tool(Arc::new(CreatePageTool)).await?;
    registry.register_tool(Arc::new(DeletePageTool)).await?;
    registry.register_tool(Arc::new(ViewPageTool)).await?;
    registry.register_tool(Arc::new(EditPageTool)).await?;
    registry.register_tool(Arc::new(ListPagesTool)).await?;
    registry.register_tool(Arc::new(OutgoingLinksTool)).await?;
    registry.register_tool(Arc::new(IncomingLinksTool)).await?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    use tempfile::TempDir;

    use crate::tools::ExecutionContext;
    use crate::wiki::{init, WikiStore};

    /// Fresh initialized wiki plus an execution context rooted in it
    pub async fn wiki_context() -> (TempDir, ExecutionContext) {
        let temp_dir = TempDir::new().unwrap();
        init::init_wiki(temp_dir.path()).await.unwrap();
        let store = WikiStore::open(temp_dir.path()).unwrap();
        (temp_dir, ExecutionContext::new(store))
    }
}
