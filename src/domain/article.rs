use serde::{Deserialize, Serialize};

/// A generated article as returned by the generation service.
///
/// The `id` is opaque and unique within a batch; it is assigned by the
/// service, never locally. Edits replace `content` wholesale and leave the
/// other fields untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
}

impl Article {
    /// File name used when exporting this article as markdown.
    ///
    /// Every character of the title that is not ASCII alphanumeric becomes a
    /// single underscore, the result is lowercased and `.md` is appended.
    pub fn export_filename(&self) -> String {
        let slug: String = self
            .title
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        format!("{}.md", slug.to_lowercase())
    }
}

/// AI edit actions the edit endpoint understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EditAction {
    Summarize,
    Expand,
    Rephrase,
    FixGrammar,
}

impl EditAction {
    pub fn label(self) -> &'static str {
        match self {
            EditAction::Summarize => "Summarize",
            EditAction::Expand => "Expand",
            EditAction::Rephrase => "Rephrase",
            EditAction::FixGrammar => "Fix Grammar",
        }
    }
}
