// Forum models
// Discussions and replies held in memory by the forum store.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForumCategory {
    Academic,
    Career,
    StudyGroups,
    Other,
}

impl ForumCategory {
    pub const ALL: [ForumCategory; 4] = [
        ForumCategory::Academic,
        ForumCategory::Career,
        ForumCategory::StudyGroups,
        ForumCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Academic => "Academic",
            Self::Career => "Career",
            Self::StudyGroups => "Study Groups",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub posted_at: DateTime<Local>,
    pub likes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discussion {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub author: String,
    pub category: ForumCategory,
    pub content: String,
    pub posted_at: DateTime<Local>,
    pub likes: u32,
    pub replies: Vec<Reply>,
}

impl Discussion {
    /// One-line preview of the opening post.
    pub fn preview(&self) -> String {
        const PREVIEW_CHARS: usize = 80;
        if self.content.chars().count() <= PREVIEW_CHARS {
            return self.content.clone();
        }
        let cut: String = self.content.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", cut.trim_end())
    }
}

/// Derive a URL-ish slug from a discussion title.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_dash = true;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basic() {
        assert_eq!(
            slugify("Tips for University Applications"),
            "tips-for-university-applications"
        );
    }

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(slugify("Study Group -- IB Physics!"), "study-group-ib-physics");
        assert_eq!(slugify("  hello  "), "hello");
    }

    #[test]
    fn preview_truncates_long_content() {
        let discussion = Discussion {
            id: 1,
            slug: "x".into(),
            title: "x".into(),
            author: "a".into(),
            category: ForumCategory::Other,
            content: "word ".repeat(40),
            posted_at: Local::now(),
            likes: 0,
            replies: Vec::new(),
        };
        let preview = discussion.preview();
        assert!(preview.ends_with("..."));
        assert!(preview.chars().count() <= 83);
    }
}
