//! One-shot HTTP client for the hosted assistant service.
//!
//! Client-side (hydrate): real POST via `gloo-net`, raced against a
//! fixed deadline. Server-side (SSR): stub returning a transport error
//! since the endpoint is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Exactly one attempt per call, no retry. Every failure mode collapses
//! into [`AskError`] at this boundary; the widget converts it to a
//! single apologetic bubble and never sees a panic or a hung future.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::chat::{HistoryEntry, ReplySource};

/// Fixed assistant endpoint for the deployed portfolio.
pub const ENDPOINT: &str = "https://sarra-chatbot-api.vercel.app/api/chat";

/// Static identity of the portfolio owner; the service is not a real
/// multi-user system.
pub const USER_ID: &str = "sarrabousnina";

/// Budget for one outstanding request before the call is abandoned.
pub const TIMEOUT_MS: u32 = 20_000;

/// Failure modes of a single `ask` call.
#[derive(Debug, Error)]
pub enum AskError {
    #[error("assistant request failed: {0}")]
    Transport(String),
    #[error("assistant returned status {0}")]
    Status(u16),
    #[error("assistant reply was malformed")]
    MalformedReply,
    #[error("assistant did not reply within {}s", TIMEOUT_MS / 1000)]
    TimedOut,
}

/// Request body sent to the assistant service.
#[derive(Debug, Serialize)]
pub struct AskRequest<'a> {
    pub message: &'a str,
    #[serde(rename = "userId")]
    pub user_id: &'a str,
    pub history: &'a [HistoryEntry],
}

/// Successful reply body. A body without `response` is a failure even
/// under a 2xx status.
#[derive(Clone, Debug, Deserialize)]
pub struct AssistantReply {
    pub response: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub source: Option<ReplySource>,
}

#[cfg(any(test, feature = "hydrate"))]
fn build_request<'a>(message: &'a str, history: &'a [HistoryEntry]) -> AskRequest<'a> {
    AskRequest {
        message,
        user_id: USER_ID,
        history,
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_reply(raw: &str) -> Result<AssistantReply, AskError> {
    serde_json::from_str(raw).map_err(|_| AskError::MalformedReply)
}

/// Send one message with the accumulated history and parse the reply.
///
/// # Errors
///
/// Returns [`AskError`] on transport failure, non-2xx status, malformed
/// reply body, or when the deadline elapses first.
pub async fn ask(message: &str, history: &[HistoryEntry]) -> Result<AssistantReply, AskError> {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{Either, select};
        use gloo_timers::future::TimeoutFuture;

        let request = gloo_net::http::Request::post(ENDPOINT)
            .json(&build_request(message, history))
            .map_err(|e| AskError::Transport(e.to_string()))?;

        let fetch = std::pin::pin!(request.send());
        let deadline = std::pin::pin!(TimeoutFuture::new(TIMEOUT_MS));
        let response = match select(fetch, deadline).await {
            Either::Left((result, _)) => result.map_err(|e| AskError::Transport(e.to_string()))?,
            Either::Right(_) => return Err(AskError::TimedOut),
        };

        if !response.ok() {
            return Err(AskError::Status(response.status()));
        }
        let raw = response
            .text()
            .await
            .map_err(|e| AskError::Transport(e.to_string()))?;
        parse_reply(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (message, history);
        Err(AskError::Transport("not available on server".to_owned()))
    }
}
