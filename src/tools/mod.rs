/// Agent tool layer - registration, validation, execution and result
/// handling
///
/// This module is the surface an external LLM agent framework calls into:
/// each wiki operation is a named tool with a JSON Schema for its
/// parameters, and the registry dispatches framework tool calls to the
/// store.
pub mod registry;
pub mod wiki;

// Re-export core tool types
pub use self::registry::{ToolInfo, ToolRegistry};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

use crate::wiki::{WikiError, WikiStore};

/// Core trait that all agent tools must implement
#[async_trait]
pub trait AgentTool: Send + Sync {
    /// Get the tool name (unique identifier)
    fn name(&self) -> &str;

    /// Get the tool description shown to the agent
    fn description(&self) -> &str;

    /// Get the JSON schema for input parameters
    fn input_schema(&self) -> Value;

    /// Execute the tool with given parameters and context
    async fn execute(
        &self,
        params: Value,
        context: &mut ExecutionContext,
    ) -> Result<ToolResult, ToolError>;

    /// Get required permissions for this tool
    fn required_permissions(&self) -> Vec<Permission> {
        vec![]
    }
}

/// Tool execution context
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    /// The wiki the tools operate on
    pub store: WikiStore,

    /// Security permissions for this session
    pub permissions: SessionPermissions,
}

impl ExecutionContext {
    pub fn new(store: WikiStore) -> Self {
        Self {
            store,
            permissions: SessionPermissions::default(),
        }
    }
}

/// Tool execution result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Whether the tool execution was successful
    pub success: bool,

    /// Content returned by the tool
    pub content: Vec<Content>,
}

/// Content types that tools can return
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Content {
    /// Plain text content
    #[serde(rename = "text")]
    Text { text: String },

    /// Structured data content
    #[serde(rename = "data")]
    Data { data: Value },

    /// Error content
    #[serde(rename = "error")]
    Error { error: String },
}

/// Tool error types
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("File system error: {0}")]
    FileSystem(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<WikiError> for ToolError {
    fn from(error: WikiError) -> Self {
        match error {
            WikiError::PageNotFound(_) => ToolError::NotFound(error.to_string()),
            WikiError::InvalidName { .. }
            | WikiError::EditOutOfBounds { .. }
            | WikiError::EditReversed { .. }
            | WikiError::EditsOverlap { .. } => ToolError::InvalidParams(error.to_string()),
            WikiError::Io(_) => ToolError::FileSystem(error.to_string()),
            WikiError::PageExists(_) | WikiError::NotAWiki(_) => {
                ToolError::ExecutionFailed(error.to_string())
            }
        }
    }
}

/// Permission types for tool access control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    /// Read pages from the wiki
    FileRead,
    /// Create, modify or delete pages
    FileWrite,
}

/// Session permissions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionPermissions {
    pub granted_permissions: HashSet<Permission>,
}

impl Default for SessionPermissions {
    fn default() -> Self {
        let mut permissions = HashSet::new();
        permissions.insert(Permission::FileRead);
        permissions.insert(Permission::FileWrite);

        Self {
            granted_permissions: permissions,
        }
    }
}

impl SessionPermissions {
    /// Permissions for a session that may only read the wiki
    pub fn read_only() -> Self {
        let mut permissions = HashSet::new();
        permissions.insert(Permission::FileRead);

        Self {
            granted_permissions: permissions,
        }
    }
}

/// Helper trait for creating tool results
pub trait ToolResultBuilder {
    fn success() -> ToolResult;
    fn failure(error: impl Into<String>) -> ToolResult;
    fn with_content(self, content: Content) -> ToolResult;
}

impl ToolResultBuilder for ToolResult {
    fn success() -> ToolResult {
        ToolResult {
            success: true,
            content: vec![],
        }
    }

    fn failure(error: impl Into<String>) -> ToolResult {
        ToolResult {
            success: false,
            content: vec![Content::Error {
                error: error.into(),
            }],
        }
    }

    fn with_content(mut self, content: Content) -> ToolResult {
        self.content.push(content);
        self
    }
}
