pub mod http;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::{Article, EditAction};

/// The content-generation service boundary.
///
/// Implementations return whole batches of articles or a revised content
/// string; transport concerns (endpoints, serialization) stay behind this
/// trait so the state machine and CLI can be exercised against a stub.
#[async_trait]
pub trait Generator {
    /// Generate a batch of random programming tips.
    async fn random_tips(&self) -> Result<Vec<Article>>;

    /// Generate one or more articles about the given topic.
    async fn from_topic(&self, topic: &str) -> Result<Vec<Article>>;

    /// Apply an AI edit action to article content, returning the revision.
    async fn edit_content(&self, content: &str, action: EditAction) -> Result<String>;
}
