use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::{json, Value};

/// One chat message in an OpenAI-compatible completion request.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// A single non-streaming chat completion returning the first text choice.
#[async_trait]
pub trait ChatCompletions: Send + Sync {
    async fn complete(
        &self,
        model: &str,
        messages: &[Message],
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String>;
}

/// How the direct-API tier reaches a chat endpoint.
pub enum ChatCapability {
    /// Build an HTTP client from the resolved config once a credential is known.
    Default,
    /// Caller-supplied transport.
    Custom(Arc<dyn ChatCompletions>),
    /// No transport wired in; the API tier degrades to heuristics.
    Absent,
}

pub struct HttpChatClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HttpChatClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl ChatCompletions for HttpChatClient {
    async fn complete(
        &self,
        model: &str,
        messages: &[Message],
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "model": model,
                "messages": messages,
                "temperature": temperature,
                "max_tokens": max_tokens,
            }))
            .send()
            .await?;
        let status = resp.status();
        let body = resp.json::<Value>().await?;
        if !status.is_success() {
            anyhow::bail!("HTTP {}: {}", status.as_u16(), body);
        }

        body["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| anyhow!("completion response has no message content"))
    }
}
