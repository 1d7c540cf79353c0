//! Sail-plan advice generation for Helmcast
//!
//! Deterministic prompt assembly plus the chat-completion client that turns
//! a wind summary into natural-language sailing advice.

pub mod client;
pub mod error;
pub mod prompt;
pub mod types;

pub use client::{CompletionClient, FALLBACK_ADVICE};
pub use error::AdvisorError;
pub use prompt::sail_plan_prompt;
