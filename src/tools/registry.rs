use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::tools::{AgentTool, ExecutionContext, ToolError, ToolResult};

/// Tool registry for managing and executing agent tools
///
/// The external agent framework discovers tools through [`list_tools`] and
/// dispatches calls through [`execute_tool`]. Parameters are validated
/// against each tool's JSON Schema before execution.
///
/// [`list_tools`]: ToolRegistry::list_tools
/// [`execute_tool`]: ToolRegistry::execute_tool
#[derive(Clone, Default)]
pub struct ToolRegistry {
    /// Registered tools indexed by name
    tools: Arc<RwLock<HashMap<String, Arc<dyn AgentTool>>>>,
}

/// Tool information for agent framework discovery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new tool
    pub async fn register_tool(&self, tool: Arc<dyn AgentTool>) -> Result<(), ToolError> {
        let name = tool.name().to_string();

        if name.is_empty() {
            return Err(ToolError::Validation(
                "Tool name cannot be empty".to_string(),
            ));
        }
        if !tool.input_schema().is_object() {
            return Err(ToolError::Validation(
                "Tool input schema must be a JSON object".to_string(),
            ));
        }

        let mut tools = self.tools.write().await;
        if tools.contains_key(&name) {
            return Err(ToolError::Validation(format!(
                "Tool '{}' is already registered",
                name
            )));
        }
        tools.insert(name.clone(), tool);

        info!("Registered tool: {}", name);
        Ok(())
    }

    /// List all available tools, sorted by name
    pub async fn list_tools(&self) -> Vec<ToolInfo> {
        let tools = self.tools.read().await;

        let mut infos: Vec<ToolInfo> = tools
            .values()
            .map(|tool| ToolInfo {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                input_schema: tool.input_schema(),
            })
            .collect();
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        infos
    }

    /// Execute a tool with given parameters and context
    pub async fn execute_tool(
        &self,
        name: &str,
        params: Value,
        context: &mut ExecutionContext,
    ) -> Result<ToolResult, ToolError> {
        let tool = {
            let tools = self.tools.read().await;
            tools
                .get(name)
                .cloned()
                .ok_or_else(|| ToolError::NotFound(name.to_string()))?
        };

        // Check permissions
        for permission in tool.required_permissions() {
            if !context.permissions.granted_permissions.contains(&permission) {
                return Err(ToolError::PermissionDenied(format!(
                    "Missing required permission: {:?}",
                    permission
                )));
            }
        }

        // Validate parameters against the tool's schema
        validate_params(&tool.input_schema(), &params)?;

        debug!("Executing tool: {}", name);
        tool.execute(params, context).await
    }
}

/// Validate parameters against a JSON Schema
fn validate_params(schema: &Value, params: &Value) -> Result<(), ToolError> {
    let compiled = jsonschema::JSONSchema::compile(schema)
        .map_err(|e| ToolError::Validation(format!("Invalid tool schema: {}", e)))?;

    if let Err(errors) = compiled.validate(params) {
        let messages: Vec<String> = errors.map(|e| e.to_string()).collect();
        return Err(ToolError::InvalidParams(messages.join("; ")));
    }

    Ok(())
}
