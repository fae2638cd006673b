use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Post entity - a single blog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub likes: u64,
}

impl Post {
    /// Create a post from already validated input.
    pub fn new(id: u64, draft: PostDraft) -> Self {
        Self {
            id,
            author: draft.author,
            title: draft.title,
            content: draft.content,
            likes: 0,
        }
    }

    /// Replace the editable fields. An absent author keeps the current one.
    pub fn apply(&mut self, draft: PostDraft) {
        self.title = draft.title;
        self.content = draft.content;
        if draft.author.is_some() {
            self.author = draft.author;
        }
    }

    pub fn like(&mut self) {
        self.likes = self.likes.saturating_add(1);
    }
}

/// Submitted post fields, trimmed and checked for presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: Option<String>,
}

impl PostDraft {
    /// Trim the submitted fields and check that title and content are present.
    ///
    /// Both checks always run, so a form missing both fields reports both.
    /// A blank author is treated as no author.
    pub fn parse(
        title: &str,
        content: &str,
        author: Option<&str>,
    ) -> Result<Self, Vec<ValidationError>> {
        validate(title, content)?;

        let author = author
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(String::from);

        Ok(Self {
            title: title.trim().to_string(),
            content: content.trim().to_string(),
            author,
        })
    }
}

/// Check that title and content are non-empty after trimming.
pub fn validate(title: &str, content: &str) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if title.trim().is_empty() {
        errors.push(ValidationError::MissingTitle);
    }
    if content.trim().is_empty() {
        errors.push(ValidationError::MissingContent);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
