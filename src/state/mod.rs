//! Shared application state provided via Leptos context.
//!
//! ARCHITECTURE
//! ============
//! State modules are plain structs wrapped in `RwSignal` at the app
//! root. Transition logic lives on the structs themselves so it can be
//! unit tested without a browser; components only read signals and call
//! these methods.

pub mod chat;
pub mod locale;
pub mod translations;
pub mod ui;
pub mod widget;
