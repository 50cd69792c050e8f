//! Conversation state for the floating assistant widget.
//!
//! DESIGN
//! ======
//! The message list is append-only and mutated only through the
//! exchange lifecycle below: `begin_exchange` pushes the user message
//! plus a transient "thinking" placeholder, and exactly one of
//! `settle_success`/`settle_failure` replaces that placeholder with the
//! terminal bot message. At most one thinking placeholder exists at any
//! time; overlapping sends are rejected while one is outstanding.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

use crate::net::assistant::AssistantReply;
use crate::util::scroll::ScrollTarget;

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// Optional attribution metadata carried on an assistant reply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ReplySource {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// History entry projected from the message list and sent verbatim to
/// the assistant service, which is stateless between calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub role: String,
    pub content: String,
}

/// A single widget message.
#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub suggestions: Vec<String>,
    pub is_thinking: bool,
    pub source: Option<ReplySource>,
    pub action: Option<ScrollTarget>,
}

impl ChatMessage {
    fn new(text: String, sender: Sender) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text,
            sender,
            suggestions: Vec::new(),
            is_thinking: false,
            source: None,
            action: None,
        }
    }

    fn user(text: &str) -> Self {
        Self::new(text.to_owned(), Sender::User)
    }

    fn thinking(label: &str) -> Self {
        Self {
            is_thinking: true,
            ..Self::new(label.to_owned(), Sender::Bot)
        }
    }

    fn bot(reply: AssistantReply) -> Self {
        let action = reply.action.as_deref().and_then(|raw| {
            let parsed = ScrollTarget::from_action(raw);
            if parsed.is_none() {
                log::debug!("ignoring unknown assistant action {raw:?}");
            }
            parsed
        });
        Self {
            suggestions: reply.suggestions,
            source: reply.source,
            action,
            ..Self::new(reply.response, Sender::Bot)
        }
    }

    fn role(&self) -> &'static str {
        match self.sender {
            Sender::User => "user",
            Sender::Bot => "assistant",
        }
    }
}

/// Ordered conversation state for one widget instance.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
}

impl ChatState {
    /// Start an exchange for `text`. Whitespace-only input and input
    /// while a reply is outstanding are no-ops returning `None`.
    ///
    /// On success the user message and a thinking placeholder are
    /// appended, and the history to send (including the new user
    /// message, excluding the placeholder) is returned.
    pub fn begin_exchange(&mut self, text: &str) -> Option<Vec<HistoryEntry>> {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.pending() {
            return None;
        }
        self.messages.push(ChatMessage::user(trimmed));
        let history = self.history();
        self.messages.push(ChatMessage::thinking(thinking_label(trimmed)));
        Some(history)
    }

    /// Replace the thinking placeholder with the real reply. Returns the
    /// parsed navigation action, if the reply carried a recognized one.
    pub fn settle_success(&mut self, reply: AssistantReply) -> Option<ScrollTarget> {
        self.remove_trailing_thinking();
        let message = ChatMessage::bot(reply);
        let action = message.action;
        self.messages.push(message);
        action
    }

    /// Replace the thinking placeholder with a failure bubble carrying
    /// no metadata.
    pub fn settle_failure(&mut self, text: impl Into<String>) {
        self.remove_trailing_thinking();
        self.messages.push(ChatMessage::new(text.into(), Sender::Bot));
    }

    /// Whether a reply is outstanding (a thinking placeholder exists).
    pub fn pending(&self) -> bool {
        self.messages.iter().any(|message| message.is_thinking)
    }

    /// Project the settled messages to `{role, content}` pairs.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.messages
            .iter()
            .filter(|message| !message.is_thinking)
            .map(|message| HistoryEntry {
                role: message.role().to_owned(),
                content: message.text.clone(),
            })
            .collect()
    }

    fn remove_trailing_thinking(&mut self) {
        if self.messages.last().is_some_and(|message| message.is_thinking) {
            self.messages.pop();
        }
    }
}

/// Keyword sets deriving a topical thinking label from the user's input.
const TOPIC_LABELS: &[(&[&str], &str)] = &[
    (&["certif"], "Checking my certifications..."),
    (
        &["project", "portfolio", "built", "github"],
        "Looking through my projects...",
    ),
    (
        &["experience", "intern", "work", "job"],
        "Revisiting my experience...",
    ),
    (
        &["skill", "stack", "tech", "language"],
        "Taking stock of my skills...",
    ),
    (
        &["award", "prize", "hackathon", "won"],
        "Dusting off my awards...",
    ),
    (
        &["community", "volunteer", "club", "mentor"],
        "Gathering my community work...",
    ),
];

/// Short label shown while the assistant is replying, matched against
/// the lowercased input; generic when no topic matches.
pub fn thinking_label(input: &str) -> &'static str {
    let lowered = input.to_lowercase();
    for (keywords, label) in TOPIC_LABELS {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return label;
        }
    }
    "Thinking..."
}
