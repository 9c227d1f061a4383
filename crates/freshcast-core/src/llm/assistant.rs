//! Bakery business assistant

use super::{ChatMessage, HttpChatClient, LLMClient};
use crate::config::AssistantConfig;
use crate::error::{FreshCastError, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// System prompt framing the assistant's role
pub const SYSTEM_PROMPT: &str = "You are FreshCast Assistant, a supply chain and business expert for small bakeries.

Your role:
- Provide practical advice for bakery operations
- Suggest suppliers and cost optimization strategies
- Answer questions about ingredient storage, quality, and substitutions
- Give actionable recommendations based on industry practice

Keep responses:
- Concise (2-3 paragraphs max)
- Actionable with specific recommendations
- Cost-conscious (this is a small business)
- Professional but friendly

If asked about forecasts or inventory numbers, remind the user that the forecasting engine handles those questions.";

/// Free-text question answering
#[async_trait]
pub trait Assistant: Send + Sync {
    /// Answer a question, optionally grounded in extra context.
    ///
    /// Fails with `AssistantUnavailable` when no credential is configured and
    /// `AssistantError` when the provider call fails.
    async fn query(&self, question: &str, context: Option<&str>) -> Result<String>;

    /// Whether a backing service is configured
    fn is_configured(&self) -> bool;
}

/// Assistant backed by a chat completion service
pub struct BusinessAssistant {
    client: Option<Arc<dyn LLMClient>>,
}

impl BusinessAssistant {
    /// Create from LLM client
    pub fn new(client: Arc<dyn LLMClient>) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Assistant with no backing service; every call fails with
    /// `AssistantUnavailable`
    pub fn unconfigured() -> Self {
        Self { client: None }
    }

    /// Create from configuration. A missing API key yields an unconfigured
    /// assistant rather than an error.
    pub fn from_config(config: &AssistantConfig) -> Result<Self> {
        if config.api_key.is_none() {
            tracing::warn!("No assistant API key configured; advice questions will be unavailable");
            return Ok(Self::unconfigured());
        }
        let client = HttpChatClient::new(config.clone())?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Sourcing advice for a raw material
    pub async fn supplier_recommendations(
        &self,
        material: &str,
        location: &str,
        budget: &str,
    ) -> Result<String> {
        let question = format!(
            "I need to buy {} for my small bakery.
Location: {}
Budget level: {}

Please recommend:
1. Types of suppliers to consider (wholesale, retail, online)
2. Tips for getting the best price
3. Quality considerations
4. Bulk buying advice",
            material, location, budget
        );
        self.query(&question, None).await
    }

    /// General business advice
    pub async fn business_advice(&self, question: &str) -> Result<String> {
        self.query(question, None).await
    }
}

#[async_trait]
impl Assistant for BusinessAssistant {
    async fn query(&self, question: &str, context: Option<&str>) -> Result<String> {
        let client = self
            .client
            .as_ref()
            .ok_or(FreshCastError::AssistantUnavailable)?;

        let mut messages = vec![ChatMessage::system(SYSTEM_PROMPT)];
        if let Some(context) = context.filter(|c| !c.trim().is_empty()) {
            messages.push(ChatMessage::system(format!("Current context: {}", context)));
        }
        messages.push(ChatMessage::user(question));

        client
            .chat_completion(messages)
            .await
            .map_err(|e| match e {
                FreshCastError::AssistantError(_) => e,
                other => FreshCastError::AssistantError(other.to_string()),
            })
    }

    fn is_configured(&self) -> bool {
        self.client.is_some()
    }
}
