//! Model Context Protocol server exposing the `courseRecommender` tool.

mod course_recommender;
mod http;

pub use course_recommender::{recommendation_text, TOOL_DESCRIPTION, TOOL_NAME};
pub use http::mcp_router;

use rmcp::{
    handler::server::ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Implementation, InitializeRequestParam,
        InitializeResult, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo, Tool, ToolsCapability,
    },
    service::{RequestContext, RoleServer},
    transport::stdio,
    ErrorData as McpError, ServiceExt,
};
use tracing::{debug, info};

/// Stateless handler; every session gets a clone.
#[derive(Debug, Clone)]
pub struct CourseRecommenderServer {
    verbose_logs: bool,
}

impl Default for CourseRecommenderServer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl CourseRecommenderServer {
    pub fn new(verbose_logs: bool) -> Self {
        Self { verbose_logs }
    }

    pub fn verbose_logs(&self) -> bool {
        self.verbose_logs
    }

    /// Tools advertised by `tools/list`.
    pub fn tools(&self) -> Vec<Tool> {
        vec![Tool {
            name: TOOL_NAME.into(),
            title: Some("Course Recommender".into()),
            description: Some(TOOL_DESCRIPTION.into()),
            input_schema: course_recommender::input_schema(),
            icons: None,
            annotations: None,
            output_schema: None,
            meta: None,
        }]
    }

    /// Route a tool call by name.
    pub fn dispatch(&self, request: CallToolRequestParam) -> Result<CallToolResult, McpError> {
        match request.name.as_ref() {
            TOOL_NAME => self.handle_course_recommender(request),
            _ => Err(McpError {
                code: rmcp::model::ErrorCode::METHOD_NOT_FOUND,
                message: format!("Unknown tool: {}", request.name).into(),
                data: None,
            }),
        }
    }

    pub fn handle_course_recommender(
        &self,
        request: CallToolRequestParam,
    ) -> Result<CallToolResult, McpError> {
        let level = course_recommender::parse_arguments(request.arguments)?;

        if self.verbose_logs {
            info!(tool = TOOL_NAME, experience_level = %level, "tool call");
        } else {
            debug!(tool = TOOL_NAME, experience_level = %level, "tool call");
        }

        Ok(course_recommender::respond(level))
    }
}

impl ServerHandler for CourseRecommenderServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                title: Some("Course Advisor".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                website_url: None,
                icons: None,
            },
            ..Default::default()
        }
    }

    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, McpError> {
        let mut info = self.get_info();
        info.protocol_version = request.protocol_version.clone();
        Ok(info)
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        debug!("tools/list requested");
        Ok(ListToolsResult {
            tools: self.tools(),
            ..Default::default()
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch(request)
    }
}

/// Failure to start or run an MCP transport.
#[derive(Debug, thiserror::Error)]
pub enum McpServeError {
    #[error("failed to initialize MCP session: {0}")]
    Initialize(String),
    #[error("MCP session task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Serve one MCP session over stdin/stdout until the client disconnects.
pub async fn serve_stdio(server: CourseRecommenderServer) -> Result<(), McpServeError> {
    let service = server
        .serve(stdio())
        .await
        .map_err(|err| McpServeError::Initialize(err.to_string()))?;

    info!("MCP stdio session ready");
    let reason = service.waiting().await?;
    info!(?reason, "MCP stdio session closed");
    Ok(())
}
