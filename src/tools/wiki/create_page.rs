use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::info;

use crate::tools::{
    AgentTool, Content, ExecutionContext, Permission, ToolError, ToolResult, ToolResultBuilder,
};

/// Create a new wiki page
pub struct CreatePageTool;

#[async_trait]
impl AgentTool for CreatePageTool {
    fn name(&self) -> &str {
        "create_page"
    }

    fn description(&self) -> &str {
        "Create a new wiki page with the given content. Fails if a page with that name already exists."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "The name of the new page. May not include slashes."
                },
                "content": {
                    "type": "string",
                    "description": "The content of the new page. Should be valid markdown."
                }
            },
            "required": ["name", "content"]
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
        let content = params["content"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidParams("Missing 'content' parameter".to_string()))?;

        context.store.create_page(name, content).await?;

        info!("Agent created page '{}'", name);

        Ok(ToolResult::success().with_content(Content::Text {
            text: format!("Created page '{}'", name),
        }))
    }
}
