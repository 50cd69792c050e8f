//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the assistant widget while
//! reading/writing shared state from Leptos context providers. Section
//! components carry the DOM ids the navigation dispatcher scrolls to.

pub mod about;
pub mod certifications;
pub mod chatbot;
pub mod community;
pub mod contact;
pub mod education;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod language_switcher;
pub mod navigation;
pub mod prizes;
pub mod projects;
pub mod skills;
pub mod theme_toggle;
