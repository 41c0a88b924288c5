//! Export actions for a single article: save to a markdown file, copy the
//! raw content to the system clipboard.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::app::{Result, VellumError};
use crate::domain::Article;

/// Write the article's raw content as UTF-8 to `dir`, named from the title
/// via [`Article::export_filename`]. Returns the path written.
pub fn save_markdown(article: &Article, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(article.export_filename());
    fs::write(&path, article.content.as_bytes())?;
    debug!(path = %path.display(), "saved article");
    Ok(path)
}

/// Place the raw content string on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| VellumError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| VellumError::Clipboard(e.to_string()))?;
    Ok(())
}
