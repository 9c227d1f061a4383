//! Language assistant integration
//!
//! Provides:
//! - Chat completion client for OpenAI-compatible services
//! - Bakery business assistant answering advice and supplier questions

mod assistant;
mod client;

pub use assistant::{Assistant, BusinessAssistant, SYSTEM_PROMPT};
pub use client::{ChatMessage, HttpChatClient, LLMClient};
