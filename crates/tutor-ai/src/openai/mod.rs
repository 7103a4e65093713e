//! OpenAI-compatible chat-completions gateway.
//!
//! Posts the full message log to `<api_base>/chat/completions` and returns
//! the first choice's text. Transient failures are retried a bounded number
//! of times.

mod api;
mod client;
mod config;


pub use client::OpenAiGateway;
pub use config::OpenAiConfig;
