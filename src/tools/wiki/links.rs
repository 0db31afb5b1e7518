use async_trait::async_trait;
use serde_json::{json, Value};

use crate::tools::{
    AgentTool, Content, ExecutionContext, Permission, ToolError, ToolResult, ToolResultBuilder,
};

fn page_name_schema(description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "name": {
                "type": "string",
                "description": description
            }
        },
        "required": ["name"]
    })
}

/// List the pages a given page links to
pub struct OutgoingLinksTool;

#[async_trait]
impl AgentTool for OutgoingLinksTool {
    fn name(&self) -> &str {
        "outgoing_links"
    }

    fn description(&self) -> &str {
        "Get a list of all pages that the given page links to via [[Page Name]] references"
    }

    fn input_schema(&self) -> Value {
        page_name_schema("The name of the page to get links from")
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

        let links = context.store.outgoing_links(name).await?;

        Ok(ToolResult::success().with_content(Content::Data {
            data: json!(links),
        }))
    }
}

/// List the pages that link to a given page
pub struct IncomingLinksTool;

#[async_trait]
impl AgentTool for IncomingLinksTool {
    fn name(&self) -> &str {
        "incoming_links"
    }

    fn description(&self) -> &str {
        "Get a list of all pages that link to the given page via [[Page Name]] references"
    }

    fn input_schema(&self) -> Value {
        page_name_schema("The name of the page to get incoming links to")
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

        let links = context.store.incoming_links(name).await?;

        Ok(ToolResult::success().with_content(Content::Data {
            data: json!(links),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::wiki::testing::wiki_context;

    #[tokio::test]
    async fn test_outgoing_links() {
        let (_dir, mut context) = wiki_context().await;
        context.store.create_page("Target", "").await.unwrap();
        context
            .store
            .create_page("Source", "see [[Target]] and [[Missing]]")
            .await
            .unwrap();

        let tool = OutgoingLinksTool;
        let result = tool
            .execute(json!({ "name": "Source" }), &mut context)
            .await
            .unwrap();

        assert!(matches!(&result.content[0], Content::Data { data } if *data == json!(["Target"])));
    }

    #[tokio::test]
    async fn test_incoming_links() {
        let (_dir, mut context) = wiki_context().await;
        context.store.create_page("Target", "").await.unwrap();
        context
            .store
            .create_page("Source", "see [[Target]]")
            .await
            .unwrap();

        let tool = IncomingLinksTool;
        let result = tool
            .execute(json!({ "name": "Target" }), &mut context)
            .await
            .unwrap();

        assert!(matches!(&result.content[0], Content::Data { data } if *data == json!(["Source"])));
    }

    #[tokio::test]
    async fn test_links_of_missing_page_fails() {
        let (_dir, mut context) = wiki_context().await;

        let tool = OutgoingLinksTool;
        let err = tool
            .execute(json!({ "name": "Ghost" }), &mut context)
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
    }
}
