//! OpenAI provider implementation
//!
//! Drives the chat-completions endpoint to draft post text.

pub mod client;
pub mod completion;
pub mod types;

pub use client::OpenAiClient;
pub use completion::OpenAiDraftProvider;
