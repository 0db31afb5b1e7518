use async_trait::async_trait;
use serde_json::{json, Value};

use crate::tools::{
    AgentTool, Content, ExecutionContext, Permission, ToolError, ToolResult, ToolResultBuilder,
};

/// List all pages in the wiki
pub struct ListPagesTool;

#[async_trait]
impl AgentTool for ListPagesTool {
    fn name(&self) -> &str {
        "list_pages"
    }

    fn description(&self) -> &str {
        "Display a sorted list of all pages in the wiki"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    fn required_permissions(&self) -> Vec<Permission> {
        vec![Permission::FileRead]
    }

    async fn execute(
        &self,
        _params: Value,
        context: &mut ExecutionContext,
    ) -> Result<ToolResult, ToolError> {
        let pages = context.store.list_pages();

        Ok(ToolResult::success().with_content(Content::Data {
            data: json!(pages),
        }))
    }
}
