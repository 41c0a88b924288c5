use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::{Result, VellumError};
use crate::domain::{Article, EditAction};
use crate::generator::Generator;

#[derive(Serialize)]
struct TopicRequest<'a> {
    topic: &'a str,
}

#[derive(Serialize)]
struct EditRequest<'a> {
    content: &'a str,
    action: EditAction,
}

#[derive(Deserialize)]
struct ContentResponse {
    content: String,
}

/// reqwest-backed [`Generator`] speaking the backend's JSON protocol.
pub struct HttpGenerator {
    client: Client,
    base_url: String,
}

impl HttpGenerator {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .user_agent("vellum/0.1.0")
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-2xx response into an error carrying the body text, which
    /// is the service's human-readable failure message.
    async fn failure_message(response: Response, fallback: &str) -> String {
        let text = response.text().await.unwrap_or_default();
        if text.is_empty() {
            fallback.to_string()
        } else {
            text
        }
    }
}

#[async_trait]
impl Generator for HttpGenerator {
    async fn random_tips(&self) -> Result<Vec<Article>> {
        let url = self.endpoint("/api/articles/generate-tips");
        debug!(%url, "requesting random tips");
        let response = self.client.post(&url).send().await?;

        if !response.status().is_success() {
            let message = Self::failure_message(response, "Failed to generate tips").await;
            return Err(VellumError::Generation(message));
        }
        Ok(response.json().await?)
    }

    async fn from_topic(&self, topic: &str) -> Result<Vec<Article>> {
        let url = self.endpoint("/api/articles/from-topic");
        debug!(%url, topic, "requesting topic article");
        let response = self
            .client
            .post(&url)
            .json(&TopicRequest { topic })
            .send()
            .await?;

        if !response.status().is_success() {
            let message = Self::failure_message(response, "Failed to generate article").await;
            return Err(VellumError::Generation(message));
        }
        Ok(response.json().await?)
    }

    async fn edit_content(&self, content: &str, action: EditAction) -> Result<String> {
        let url = self.endpoint("/api/articles/edit");
        debug!(%url, ?action, "requesting content edit");
        let response = self
            .client
            .post(&url)
            .json(&EditRequest { content, action })
            .send()
            .await?;

        if !response.status().is_success() {
            let message = Self::failure_message(response, "Failed to edit article").await;
            return Err(VellumError::Edit(message));
        }
        let body: ContentResponse = response.json().await?;
        Ok(body.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_normalized() {
        let generator = HttpGenerator::new("http://localhost:8000/", Duration::from_secs(1));
        assert_eq!(
            generator.endpoint("/api/articles/edit"),
            "http://localhost:8000/api/articles/edit"
        );
    }

    #[test]
    fn test_edit_request_wire_shape() {
        let body = serde_json::to_value(EditRequest {
            content: "text",
            action: EditAction::FixGrammar,
        })
        .unwrap();
        assert_eq!(body["content"], "text");
        assert_eq!(body["action"], "FIX_GRAMMAR");
    }

    #[test]
    fn test_topic_request_wire_shape() {
        let body = serde_json::to_value(TopicRequest { topic: "traits" }).unwrap();
        assert_eq!(body["topic"], "traits");
    }
}
