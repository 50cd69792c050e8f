use super::*;

fn reply(text: &str) -> AssistantReply {
    AssistantReply {
        response: text.to_owned(),
        suggestions: Vec::new(),
        action: None,
        source: None,
    }
}

// =============================================================
// begin_exchange
// =============================================================

#[test]
fn empty_input_is_a_no_op() {
    let mut chat = ChatState::default();
    assert!(chat.begin_exchange("").is_none());
    assert!(chat.begin_exchange("   \n\t").is_none());
    assert!(chat.messages.is_empty());
}

#[test]
fn begin_exchange_appends_user_and_thinking_messages() {
    let mut chat = ChatState::default();
    let history = chat.begin_exchange("  Hello there  ").unwrap();

    assert_eq!(chat.messages.len(), 2);
    assert_eq!(chat.messages[0].sender, Sender::User);
    assert_eq!(chat.messages[0].text, "Hello there");
    assert!(chat.messages[1].is_thinking);
    assert_eq!(chat.messages[1].sender, Sender::Bot);

    // History carries the new user message but not the placeholder.
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].role, "user");
    assert_eq!(history[0].content, "Hello there");
}

#[test]
fn begin_exchange_rejects_overlapping_sends() {
    let mut chat = ChatState::default();
    assert!(chat.begin_exchange("first").is_some());
    assert!(chat.begin_exchange("second").is_none());
    assert_eq!(chat.messages.len(), 2);
}

#[test]
fn at_most_one_thinking_message_exists() {
    let mut chat = ChatState::default();
    chat.begin_exchange("one");
    chat.settle_success(reply("reply one"));
    chat.begin_exchange("two");

    let thinking = chat.messages.iter().filter(|m| m.is_thinking).count();
    assert_eq!(thinking, 1);
}

// =============================================================
// settlement
// =============================================================

#[test]
fn settle_success_replaces_thinking_with_reply() {
    let mut chat = ChatState::default();
    chat.begin_exchange("hello");
    chat.settle_success(AssistantReply {
        response: "Hi! I'm Sarra's assistant.".to_owned(),
        suggestions: vec!["Tell me about inspireAI".to_owned()],
        action: None,
        source: None,
    });

    assert_eq!(chat.messages.len(), 2);
    let last = chat.messages.last().unwrap();
    assert_eq!(last.sender, Sender::Bot);
    assert_eq!(last.text, "Hi! I'm Sarra's assistant.");
    assert_eq!(last.suggestions, vec!["Tell me about inspireAI"]);
    assert!(!chat.pending());
}

#[test]
fn settle_failure_appends_apology_without_metadata() {
    let mut chat = ChatState::default();
    chat.begin_exchange("hello");
    chat.settle_failure("Sorry, I failed to respond.");

    assert_eq!(chat.messages.len(), 2);
    let last = chat.messages.last().unwrap();
    assert_eq!(last.text, "Sorry, I failed to respond.");
    assert_eq!(last.sender, Sender::Bot);
    assert!(last.suggestions.is_empty());
    assert!(last.action.is_none());
    assert!(last.source.is_none());
    assert!(!chat.messages.iter().any(|m| m.is_thinking));
}

#[test]
fn exactly_one_terminal_bot_message_per_exchange() {
    let mut chat = ChatState::default();
    chat.begin_exchange("hello");
    chat.settle_success(reply("hi"));

    let users = chat.messages.iter().filter(|m| m.sender == Sender::User).count();
    let bots = chat
        .messages
        .iter()
        .filter(|m| m.sender == Sender::Bot && !m.is_thinking)
        .count();
    assert_eq!(users, 1);
    assert_eq!(bots, 1);
}

#[test]
fn unknown_action_is_dropped() {
    let mut chat = ChatState::default();
    chat.begin_exchange("hello");
    let action = chat.settle_success(AssistantReply {
        action: Some("doABarrelRoll".to_owned()),
        ..reply("ok")
    });
    assert!(action.is_none());
    assert!(chat.messages.last().unwrap().action.is_none());
}

#[test]
fn reply_source_is_carried_onto_the_message() {
    let mut chat = ChatState::default();
    chat.begin_exchange("hello");
    chat.settle_success(AssistantReply {
        source: Some(ReplySource {
            label: Some("GitHub".to_owned()),
            url: Some("https://github.com/sarrabousnina".to_owned()),
        }),
        ..reply("see my repos")
    });
    let source = chat.messages.last().unwrap().source.clone().unwrap();
    assert_eq!(source.label.as_deref(), Some("GitHub"));
}

// =============================================================
// history projection
// =============================================================

#[test]
fn history_projects_roles_in_insertion_order() {
    let mut chat = ChatState::default();
    chat.begin_exchange("question one");
    chat.settle_success(reply("answer one"));
    chat.begin_exchange("question two");

    let history = chat.history();
    let roles: Vec<&str> = history.iter().map(|h| h.role.as_str()).collect();
    assert_eq!(roles, vec!["user", "assistant", "user"]);
    assert_eq!(history[2].content, "question two");
}

// =============================================================
// thinking labels
// =============================================================

#[test]
fn thinking_label_matches_topics() {
    assert_eq!(
        thinking_label("What certifications do you hold?"),
        "Checking my certifications..."
    );
    assert_eq!(
        thinking_label("show me your GitHub"),
        "Looking through my projects..."
    );
    assert_eq!(
        thinking_label("Where did you intern?"),
        "Revisiting my experience..."
    );
    assert_eq!(
        thinking_label("what tech do you know"),
        "Taking stock of my skills..."
    );
    assert_eq!(
        thinking_label("any hackathon wins?"),
        "Dusting off my awards..."
    );
    assert_eq!(
        thinking_label("tell me about your club work"),
        "Gathering my community work..."
    );
}

#[test]
fn thinking_label_defaults_when_no_topic_matches() {
    assert_eq!(thinking_label("hello!"), "Thinking...");
}

// =============================================================
// end-to-end scenarios
// =============================================================

#[test]
fn projects_question_flows_to_action_carrying_reply() {
    let mut chat = ChatState::default();
    chat.begin_exchange("Tell me about your projects");

    let placeholder = chat.messages.last().unwrap();
    assert!(placeholder.is_thinking);
    assert!(placeholder.text.to_lowercase().contains("project"));

    let action = chat.settle_success(AssistantReply {
        action: Some("scrollToProjects".to_owned()),
        ..reply("I built 6 projects")
    });
    assert_eq!(action, Some(crate::util::scroll::ScrollTarget::Projects));

    let last = chat.messages.last().unwrap();
    assert_eq!(last.text, "I built 6 projects");
    assert_eq!(last.sender, Sender::Bot);
    assert_eq!(last.action, Some(crate::util::scroll::ScrollTarget::Projects));
}

#[test]
fn transport_failure_leaves_no_thinking_message_behind() {
    let mut chat = ChatState::default();
    chat.begin_exchange("Tell me about your projects");
    chat.settle_failure("Sorry, I failed to respond.");

    assert!(!chat.messages.iter().any(|m| m.is_thinking));
    assert_eq!(chat.messages.last().unwrap().text, "Sorry, I failed to respond.");
}
