use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::info;

use crate::tools::{
    AgentTool, Content, ExecutionContext, Permission, ToolError, ToolResult, ToolResultBuilder,
};
use crate::wiki::Edit;

/// Edit a wiki page with line-range replacements
pub struct EditPageTool;

#[async_trait]
impl AgentTool for EditPageTool {
    fn name(&self) -> &str {
        "edit_page"
    }

    fn description(&self) -> &str {
        "Edit a wiki page with a list of line-range edits. Line numbers are 0-based; start is \
         inclusive and end is exclusive. To insert without deleting, use start=end. To delete \
         without inserting, use content=\"\". Edits may not overlap. Returns the page after the \
         edits have been made."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "The name of the page to edit"
                },
                "edits": {
                    "type": "array",
                    "description": "The edits to make to the page",
                    "items": {
                        "type": "object",
                        "properties": {
                            "start": {
                                "type": "integer",
                                "minimum": 0,
                                "description": "First line of the range (inclusive)"
                            },
                            "end": {
                                "type": "integer",
                                "minimum": 0,
                                "description": "Line after the last line of the range (exclusive)"
                            },
                            "content": {
                                "type": "string",
                                "description": "Replacement text for the range"
                            }
                        },
                        "required": ["start", "end", "content"]
                    }
                }
            },
            "required": ["name", "edits"]
        })
    }

    fn required_permissions(&self) -> Vec<Permission> {
        vec![Permission::FileRead, Permission::FileWrite]
    }

    async fn execute(
        &self,
        params: Value,
        context: &mut ExecutionContext,
    ) -> Result<ToolResult, ToolError> {
        let name = params["name"]
            .as_str()
            .ok_or_else(|| ToolError::InvalidParams("Missing 'name' parameter".to_string()))?;
        let edits: Vec<Edit> = serde_json::from_value(params["edits"].clone())
            .map_err(|e| ToolError::InvalidParams(format!("Invalid 'edits' parameter: {}", e)))?;

        let view = context.store.edit_page(name, &edits).await?;

        info!("Agent applied {} edit(s) to page '{}'", edits.len(), name);

        Ok(ToolResult::success().with_content(Content::Text { text: view }))
    }
}
