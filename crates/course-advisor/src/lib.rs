pub mod config;
pub mod error;
pub mod mcp;
pub mod recommendations;
pub mod telemetry;
