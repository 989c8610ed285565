use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState};
use crate::routes::with_recommendation_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use course_advisor::config::AppConfig;
use course_advisor::error::AppError;
use course_advisor::mcp::{mcp_router, serve_stdio, CourseRecommenderServer};
use course_advisor::recommendations::{EngineConfig, RecommendationService};
use course_advisor::telemetry::{self, LogOutput};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry, LogOutput::Stdout)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = load_catalog(config.site.catalog_path.as_deref())?;
    let recommendation_service = Arc::new(RecommendationService::new(
        Arc::new(catalog),
        EngineConfig::default(),
    ));
    let tool_server = CourseRecommenderServer::new(config.mcp.verbose_logs);

    let app = with_recommendation_routes(recommendation_service, &config.site.brand)
        .merge(mcp_router(tool_server, &config.mcp))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, brand = %config.site.brand, "course advisor ready");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Serve the tool over stdin/stdout. Logs go to stderr so the protocol stream stays clean.
pub(crate) async fn run_stdio() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, LogOutput::Stderr)?;

    serve_stdio(CourseRecommenderServer::new(config.mcp.verbose_logs)).await?;
    Ok(())
}
