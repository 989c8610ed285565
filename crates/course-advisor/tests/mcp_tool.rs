use course_advisor::config::McpConfig;
use course_advisor::mcp::{
    mcp_router, recommendation_text, CourseRecommenderServer, TOOL_DESCRIPTION, TOOL_NAME,
};
use course_advisor::recommendations::ExperienceLevel;
use rmcp::model::{CallToolRequestParam, ErrorCode, RawContent};
use rmcp::ServerHandler;
use serde_json::json;

fn call(level: &str) -> CallToolRequestParam {
    CallToolRequestParam {
        name: TOOL_NAME.into(),
        arguments: json!({ "experienceLevel": level }).as_object().cloned(),
    }
}

#[test]
fn tool_answers_match_the_published_sentences() {
    let server = CourseRecommenderServer::new(false);
    let cases = [
        ("beginner", "I recommend you take the Professional Javascript course."),
        (
            "intermediate",
            "I recommend you take the Professional React & Next.js course.",
        ),
        (
            "advanced",
            "I recommend you take the Professional React & Next.js course.",
        ),
    ];

    for (level, expected) in cases {
        let result = server.dispatch(call(level)).expect("tool call succeeds");
        assert_ne!(result.is_error, Some(true));
        let content = result.content.first().expect("text block");
        match &content.raw {
            RawContent::Text(text) => assert_eq!(text.text, expected),
            other => panic!("unexpected content {other:?}"),
        }
    }
}

#[test]
fn recommendation_text_covers_every_level() {
    assert!(recommendation_text(ExperienceLevel::Beginner).contains("Professional Javascript"));
    assert_eq!(
        recommendation_text(ExperienceLevel::Intermediate),
        recommendation_text(ExperienceLevel::Advanced)
    );
}

#[test]
fn casing_and_spanish_labels_are_not_part_of_the_tool_contract() {
    let server = CourseRecommenderServer::default();
    for level in ["Beginner", "ADVANCED", "Intermedio", ""] {
        let err = server.dispatch(call(level)).expect_err("outside the enum");
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS, "{level}");
    }
}

#[test]
fn server_info_advertises_tools() {
    let server = CourseRecommenderServer::default();
    let info = server.get_info();
    assert_eq!(info.server_info.name, "course-advisor");
    assert!(info.capabilities.tools.is_some());

    let tools = server.tools();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].name, TOOL_NAME);
    assert_eq!(tools[0].description.as_deref(), Some(TOOL_DESCRIPTION));
}

#[test]
fn router_builds_for_custom_paths() {
    let config = McpConfig {
        streamable_http_path: "/rpc".to_string(),
        sse_path: "/rpc".to_string(),
        max_duration_secs: 5,
        verbose_logs: false,
        session_store_url: Some("redis://localhost:6379".to_string()),
    };

    // Identical paths are mounted once.
    let _router = mcp_router(CourseRecommenderServer::new(config.verbose_logs), &config);
}
