use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager,
    tower::{StreamableHttpServerConfig, StreamableHttpService},
};
use tower_http::timeout::TimeoutLayer;
use tracing::{info, warn};

use super::CourseRecommenderServer;
use crate::config::McpConfig;

const SSE_KEEP_ALIVE: Duration = Duration::from_secs(15);

fn streamable_service(
    server: &CourseRecommenderServer,
    sessions: Arc<LocalSessionManager>,
) -> StreamableHttpService<CourseRecommenderServer, LocalSessionManager> {
    let factory = server.clone();
    StreamableHttpService::new(
        move || Ok(factory.clone()),
        sessions,
        StreamableHttpServerConfig {
            stateful_mode: true,
            sse_keep_alive: Some(SSE_KEEP_ALIVE),
            ..Default::default()
        },
    )
}

/// Router serving the MCP endpoints at both configured paths.
///
/// Both mounts share one in-process session store, and every request is bounded
/// by `max_duration_secs`.
pub fn mcp_router(server: CourseRecommenderServer, config: &McpConfig) -> Router {
    if let Some(url) = &config.session_store_url {
        warn!(
            session_store = %url,
            "external MCP session store is not supported; sessions stay in process"
        );
    }

    let sessions = Arc::new(LocalSessionManager::default());
    let mut router = Router::new().nest_service(
        &config.streamable_http_path,
        streamable_service(&server, sessions.clone()),
    );
    if config.sse_path != config.streamable_http_path {
        router = router.nest_service(&config.sse_path, streamable_service(&server, sessions));
    }

    info!(
        streamable_http = %config.streamable_http_path,
        sse = %config.sse_path,
        max_duration_secs = config.max_duration_secs,
        verbose_logs = server.verbose_logs(),
        "MCP endpoints mounted"
    );

    router.layer(TimeoutLayer::new(config.max_duration()))
}
