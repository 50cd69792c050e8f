use super::*;

// =============================================================
// Request payload
// =============================================================

#[test]
fn request_body_matches_wire_shape() {
    let history = vec![
        HistoryEntry {
            role: "user".to_owned(),
            content: "hi".to_owned(),
        },
        HistoryEntry {
            role: "assistant".to_owned(),
            content: "hello!".to_owned(),
        },
    ];
    let request = build_request("what next?", &history);
    let raw = serde_json::to_value(&request).unwrap();

    assert_eq!(raw["message"], "what next?");
    assert_eq!(raw["userId"], USER_ID);
    assert_eq!(raw["history"][0]["role"], "user");
    assert_eq!(raw["history"][1]["content"], "hello!");
}

#[test]
fn request_user_id_is_camel_cased_on_the_wire() {
    let request = build_request("x", &[]);
    let raw = serde_json::to_string(&request).unwrap();
    assert!(raw.contains(r#""userId":"sarrabousnina""#));
    assert!(!raw.contains("user_id"));
}

// =============================================================
// Reply parsing
// =============================================================

#[test]
fn parse_reply_with_full_metadata() {
    let reply = parse_reply(
        r#"{
            "response": "I built 6 projects",
            "suggestions": ["Tell me about TimeForge"],
            "action": "scrollToProjects",
            "source": {"label": "GitHub", "url": "https://github.com/sarrabousnina"}
        }"#,
    )
    .unwrap();

    assert_eq!(reply.response, "I built 6 projects");
    assert_eq!(reply.suggestions, vec!["Tell me about TimeForge"]);
    assert_eq!(reply.action.as_deref(), Some("scrollToProjects"));
    assert_eq!(reply.source.unwrap().label.as_deref(), Some("GitHub"));
}

#[test]
fn parse_reply_defaults_optional_fields() {
    let reply = parse_reply(r#"{"response": "hi"}"#).unwrap();
    assert!(reply.suggestions.is_empty());
    assert!(reply.action.is_none());
    assert!(reply.source.is_none());
}

#[test]
fn parse_reply_without_response_field_is_malformed() {
    let err = parse_reply(r#"{"error": "Message is required"}"#).unwrap_err();
    assert!(matches!(err, AskError::MalformedReply));
}

#[test]
fn parse_reply_rejects_invalid_json() {
    assert!(matches!(
        parse_reply("not json"),
        Err(AskError::MalformedReply)
    ));
}

// =============================================================
// Error display
// =============================================================

#[test]
fn status_error_carries_http_code() {
    assert_eq!(AskError::Status(500).to_string(), "assistant returned status 500");
}

#[test]
fn timeout_error_names_the_budget() {
    assert_eq!(
        AskError::TimedOut.to_string(),
        "assistant did not reply within 20s"
    );
}
