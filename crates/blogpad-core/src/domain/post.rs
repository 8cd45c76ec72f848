use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Post entity - a single blog entry.
///
/// Serialized as `{id, title, author, date, content, media}` with `date` as
/// `YYYY-MM-DD` and `media` as `{type, url}` or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub date: NaiveDate,
    pub content: String,
    pub media: Option<Media>,
}

impl Post {
    /// Create a post from a draft with an assigned id and creation date.
    pub fn new(id: u64, date: NaiveDate, draft: PostDraft) -> Self {
        Self {
            id,
            title: draft.title,
            author: draft.author,
            date,
            content: draft.content,
            media: draft.media,
        }
    }

    /// Overwrite everything except `id` and `date`.
    pub fn apply(&mut self, draft: PostDraft) {
        self.title = draft.title;
        self.author = draft.author;
        self.content = draft.content;
        self.media = draft.media;
    }

    /// Case-insensitive substring match over title, author and content.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        [&self.title, &self.author, &self.content]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// The user-editable fields of a post.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostDraft {
    pub title: String,
    pub author: String,
    pub content: String,
    pub media: Option<Media>,
}

impl PostDraft {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            content: content.into(),
            media: None,
        }
    }

    pub fn with_media(mut self, media: Media) -> Self {
        self.media = Some(media);
        self
    }
}

/// Optional attachment shown with a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
}

impl Media {
    pub fn image(url: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Image,
            url: url.into(),
        }
    }

    pub fn video(url: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Video,
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "image" => Ok(MediaKind::Image),
            "video" => Ok(MediaKind::Video),
            other => Err(format!("unknown media type `{other}` (expected image or video)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        Post::new(
            7,
            NaiveDate::from_ymd_opt(2025, 5, 22).unwrap(),
            PostDraft::new("The Power of CSS Flexbox", "Bob Johnson", "Layouts")
                .with_media(Media::image("https://example.com/a.png")),
        )
    }

    #[test]
    fn test_serializes_to_storage_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["date"], "2025-05-22");
        assert_eq!(json["media"]["type"], "image");
        assert_eq!(json["media"]["url"], "https://example.com/a.png");
    }

    #[test]
    fn test_missing_media_serializes_as_null() {
        let mut post = sample();
        post.media = None;
        let json = serde_json::to_value(post).unwrap();
        assert!(json["media"].is_null());
    }

    #[test]
    fn test_apply_keeps_id_and_date() {
        let mut post = sample();
        post.apply(PostDraft::new("New", "Someone", "Else"));
        assert_eq!(post.id, 7);
        assert_eq!(post.date, NaiveDate::from_ymd_opt(2025, 5, 22).unwrap());
        assert_eq!(post.title, "New");
        assert_eq!(post.media, None);
    }

    #[test]
    fn test_matches_any_text_field() {
        let post = sample();
        assert!(post.matches("flex"));
        assert!(post.matches("johnson"));
        assert!(post.matches("layout"));
        assert!(!post.matches("grid"));
    }

    #[test]
    fn test_media_kind_parse() {
        assert_eq!("Video".parse::<MediaKind>(), Ok(MediaKind::Video));
        assert!("audio".parse::<MediaKind>().is_err());
    }
}
