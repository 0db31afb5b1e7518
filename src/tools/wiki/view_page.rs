use async_trait::async_trait;
use serde_json::{json, Value};

use crate::tools::{
    AgentTool, Content, ExecutionContext, Permission, ToolError, ToolResult, ToolResultBuilder,
};

/// View the content of a page with line numbers
pub struct ViewPageTool;

#[async_trait]
impl AgentTool for ViewPageTool {
    fn name(&self) -> &str {
        "view_page"
    }

    fn description(&self) -> &str {
        "View the content of a page with 0-based line numbers. Always view a page before editing it."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "The name of the page to view"
                }
            },
            "required": ["name"]
        })
    }

    fn required_permissions(&self) -> Vec<Permission> {
        vec![Permission::FileRead]
    }

    async fn execute(
        &self,
        params: Value,
        context: &mut ExecutionContext,
    ) -> Result<ToolResult, ToolError> {
        let name = params["name"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidParams("Missing 'name' parameter".to_string()))?;

        let view = context.store.view_page(name).await?;

        Ok(ToolResult::success().with_content(Content::Text { text: view }))
    }
}
