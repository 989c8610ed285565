use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub site: SiteConfig,
    pub mcp: McpConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let brand = env::var("APP_BRAND").unwrap_or_else(|_| DEFAULT_BRAND.to_string());
        let catalog_path = non_empty_var("COURSE_CATALOG_PATH").map(PathBuf::from);

        let streamable_http_path = endpoint_path("MCP_STREAMABLE_PATH", "/mcp")?;
        let sse_path = endpoint_path("MCP_SSE_PATH", "/sse")?;
        if sse_path != streamable_http_path
            && (nested_under(&sse_path, &streamable_http_path)
                || nested_under(&streamable_http_path, &sse_path))
        {
            return Err(ConfigError::OverlappingEndpointPaths {
                streamable_http: streamable_http_path,
                sse: sse_path,
            });
        }
        let max_duration_secs = env::var("MCP_MAX_DURATION_SECS")
            .unwrap_or_else(|_| "60".to_string())
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidMaxDuration)?;
        let verbose_logs = parse_flag(
            "MCP_VERBOSE_LOGS",
            &env::var("MCP_VERBOSE_LOGS").unwrap_or_else(|_| "true".to_string()),
        )?;
        let session_store_url = non_empty_var("REDIS_URL");

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            site: SiteConfig {
                brand,
                catalog_path,
            },
            mcp: McpConfig {
                streamable_http_path,
                sse_path,
                max_duration_secs,
                verbose_logs,
                session_store_url,
            },
        })
    }
}

/// Brand used when `APP_BRAND` is unset.
pub const DEFAULT_BRAND: &str = "00lar Corp";

/// First path segments owned by the web app and the operational endpoints.
const RESERVED_SEGMENTS: [&str; 5] = ["api", "recommendations", "health", "ready", "metrics"];

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn endpoint_path(key: &'static str, default: &str) -> Result<String, ConfigError> {
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    let path = raw.trim().trim_end_matches('/');
    let Some(rest) = path.strip_prefix('/').filter(|rest| !rest.is_empty()) else {
        return Err(ConfigError::InvalidEndpointPath {
            key,
            value: raw.clone(),
        });
    };
    let first_segment = rest.split('/').next().unwrap_or_default();
    let path = path.to_string();
    if RESERVED_SEGMENTS.contains(&first_segment) {
        return Err(ConfigError::ReservedEndpointPath { key, value: path });
    }
    Ok(path)
}

fn nested_under(path: &str, parent: &str) -> bool {
    path.strip_prefix(parent)
        .is_some_and(|rest| rest.starts_with('/'))
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: raw.to_string(),
        }),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Presentation settings for the profile form and results pages.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub brand: String,
    /// Optional CSV catalog replacing the built-in course table.
    pub catalog_path: Option<PathBuf>,
}

/// Endpoints and limits for the course recommender tool server.
#[derive(Debug, Clone)]
pub struct McpConfig {
    pub streamable_http_path: String,
    pub sse_path: String,
    pub max_duration_secs: u64,
    pub verbose_logs: bool,
    /// Accepted for deployments that share session state; sessions stay in process.
    pub session_store_url: Option<String>,
}

impl McpConfig {
    pub fn max_duration(&self) -> Duration {
        Duration::from_secs(self.max_duration_secs)
    }
}

impl Default for McpConfig {
    fn default() -> Self {
        Self {
            streamable_http_path: "/mcp".to_string(),
            sse_path: "/sse".to_string(),
            max_duration_secs: 60,
            verbose_logs: true,
            session_store_url: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidMaxDuration,
    InvalidEndpointPath { key: &'static str, value: String },
    ReservedEndpointPath { key: &'static str, value: String },
    OverlappingEndpointPaths { streamable_http: String, sse: String },
    InvalidFlag { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidMaxDuration => {
                write!(f, "MCP_MAX_DURATION_SECS must be a whole number of seconds")
            }
            ConfigError::InvalidEndpointPath { key, value } => {
                write!(f, "{key} must be an absolute path such as /mcp (found '{value}')")
            }
            ConfigError::ReservedEndpointPath { key, value } => {
                write!(f, "{key} '{value}' collides with a route served by the app")
            }
            ConfigError::OverlappingEndpointPaths {
                streamable_http,
                sse,
            } => write!(
                f,
                "MCP_STREAMABLE_PATH '{streamable_http}' and MCP_SSE_PATH '{sse}' must not nest inside each other"
            ),
            ConfigError::InvalidFlag { key, value } => {
                write!(f, "{key} must be true or false (found '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}
