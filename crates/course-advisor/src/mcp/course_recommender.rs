use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, JsonObject};
use rmcp::ErrorData as McpError;
use serde_json::{json, Value};

use crate::recommendations::{ExperienceLevel, Tier};

pub const TOOL_NAME: &str = "courseRecommender";
pub const TOOL_DESCRIPTION: &str = "Give a course recommendation based on experience level";

const LEVEL_ARGUMENT: &str = "experienceLevel";

pub(super) fn input_schema() -> Arc<JsonObject> {
    let levels: Vec<&str> = ExperienceLevel::ALL.iter().map(|level| level.alias()).collect();
    let schema = json!({
        "type": "object",
        "properties": {
            LEVEL_ARGUMENT: { "type": "string", "enum": levels }
        },
        "required": [LEVEL_ARGUMENT]
    });
    Arc::new(schema.as_object().cloned().unwrap_or_default())
}

/// Only the lowercase English names listed in the schema are accepted here.
pub(super) fn parse_arguments(arguments: Option<JsonObject>) -> Result<ExperienceLevel, McpError> {
    let arguments = arguments.unwrap_or_default();
    let raw = match arguments.get(LEVEL_ARGUMENT) {
        Some(Value::String(raw)) => raw,
        Some(other) => {
            return Err(McpError::invalid_params(
                format!("{LEVEL_ARGUMENT} must be a string, got {other}"),
                None,
            ))
        }
        None => {
            return Err(McpError::invalid_params(
                format!("missing required argument {LEVEL_ARGUMENT}"),
                None,
            ))
        }
    };

    ExperienceLevel::ALL
        .iter()
        .copied()
        .find(|level| level.alias() == raw.as_str())
        .ok_or_else(|| {
            McpError::invalid_params(
                format!("{LEVEL_ARGUMENT} must be beginner, intermediate or advanced, got '{raw}'"),
                Some(json!({ "argument": LEVEL_ARGUMENT, "value": raw })),
            )
        })
}

/// Sentence returned to the client for `level`.
pub fn recommendation_text(level: ExperienceLevel) -> String {
    let course = match level {
        ExperienceLevel::Beginner => "Professional Javascript",
        ExperienceLevel::Intermediate | ExperienceLevel::Advanced => "Professional React & Next.js",
    };
    format!("I recommend you take the {course} course.")
}

pub(super) fn respond(level: ExperienceLevel) -> CallToolResult {
    CallToolResult::success(vec![Content::text(recommendation_text(level))])
}
