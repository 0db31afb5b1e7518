use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::info;

use crate::tools::{
    AgentTool, Content, ExecutionContext, Permission, ToolError, ToolResult, ToolResultBuilder,
};

/// Delete a wiki page
pub struct DeletePageTool;

#[async_trait]
impl AgentTool for DeletePageTool {
    fn name(&self) -> &str {
        "delete_page"
    }

    fn description(&self) -> &str {
        "Delete a wiki page. Fails if the page does not exist."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "The name of the page to delete"
                }
            },
            "required": ["name"]
        })
    }

    fn required_permissions(&self) -> Vec<Permission> {
        vec![Permission::FileWrite]
    }

    async fn execute(
        &self,
        params: Value,
        context: &mut ExecutionContext,
    ) -> Result<ToolResult, ToolError> {
        let name = params["name"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidParams("Missing 'name' parameter".to_string()))?;

        context.store.delete_page(name).await?;

        info!("Agent deleted page '{}'", name);

        Ok(ToolResult::success().with_content(Content::Text {
            text: format!("Deleted page '{}'", name),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::wiki::testing::wiki_context;

    #[tokio::test]
    async fn test_delete_page() {
        let (_dir, mut context) = wiki_context().await;
        context.store.create_page("Gone", "x").await.unwrap();

        let tool = DeletePageTool;
        let result = tool
            .execute(json!({ "name": "Gone" }), &mut context)
            .await
            .unwrap();
        assert!(result.success);
        assert!(!context.store.page_exists("Gone"));
    }

    #[tokio::test]
    async fn test_delete_missing_page_fails() {
        let (_dir, mut context) = wiki_context().await;

        let tool = DeletePageTool;
        let err = tool
            .execute(json!({ "name": "Ghost" }), &mut context)
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
    }
}
