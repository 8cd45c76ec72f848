//! Post list display items.

use serde::{Deserialize, Serialize};

pub const READ_MORE_LABEL: &str = "Read More";
pub const SHOW_LESS_LABEL: &str = "Show Less";

/// Top-level page sections; exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Posts,
    Editor,
    About,
}

/// The displayed post list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ListView {
    /// Placeholder shown instead of a list when there is nothing to show.
    Empty { message: String },
    Cards { cards: Vec<PostCard> },
}

impl ListView {
    pub fn cards(&self) -> &[PostCard] {
        match self {
            ListView::Empty { .. } => &[],
            ListView::Cards { cards } => cards,
        }
    }

    pub fn card_mut(&mut self, post_id: u64) -> Option<&mut PostCard> {
        match self {
            ListView::Empty { .. } => None,
            ListView::Cards { cards } => cards.iter_mut().find(|c| c.post_id == post_id),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }
}

impl Default for ListView {
    fn default() -> Self {
        ListView::Cards { cards: Vec::new() }
    }
}

/// One post as it appears in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostCard {
    pub post_id: u64,
    pub title: String,
    pub byline: Byline,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaView>,
    pub content: ContentView,
    pub actions: Vec<CardAction>,
}

impl PostCard {
    /// Flip between excerpt and full content. Returns `false` when the card
    /// has no toggle.
    pub fn toggle_read_more(&mut self) -> bool {
        self.content.toggle()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Byline {
    pub author: String,
    /// `YYYY-MM-DD`
    pub date: String,
}

impl std::fmt::Display for Byline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "By {} on {}", self.author, self.date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MediaView {
    Image { src: String, alt: String },
    Video { src: String, mime: String },
}

/// Post body with an optional collapsed excerpt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentView {
    full: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    excerpt: Option<String>,
    expanded: bool,
}

impl ContentView {
    /// Content short enough to show as-is.
    pub fn complete(full: impl Into<String>) -> Self {
        Self {
            full: full.into(),
            excerpt: None,
            expanded: false,
        }
    }

    /// Content shown collapsed to `excerpt` until toggled.
    pub fn truncated(full: impl Into<String>, excerpt: impl Into<String>) -> Self {
        Self {
            full: full.into(),
            excerpt: Some(excerpt.into()),
            expanded: false,
        }
    }

    /// The text currently on screen.
    pub fn text(&self) -> &str {
        match &self.excerpt {
            Some(excerpt) if !self.expanded => excerpt,
            _ => &self.full,
        }
    }

    pub fn is_truncated(&self) -> bool {
        self.excerpt.is_some()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Label of the toggle control, if there is one.
    pub fn toggle_label(&self) -> Option<&'static str> {
        self.excerpt.as_ref().map(|_| {
            if self.expanded {
                SHOW_LESS_LABEL
            } else {
                READ_MORE_LABEL
            }
        })
    }

    pub fn toggle(&mut self) -> bool {
        if self.excerpt.is_none() {
            return false;
        }
        self.expanded = !self.expanded;
        true
    }
}

/// Per-card actions offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "id", rename_all = "lowercase")]
pub enum CardAction {
    Edit(u64),
    Delete(u64),
}

impl CardAction {
    pub fn label(&self) -> &'static str {
        match self {
            CardAction::Edit(_) => "Edit",
            CardAction::Delete(_) => "Delete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_switches_text_and_label() {
        let mut content = ContentView::truncated("full body text", "full...");
        assert_eq!(content.text(), "full...");
        assert_eq!(content.toggle_label(), Some(READ_MORE_LABEL));

        assert!(content.toggle());
        assert_eq!(content.text(), "full body text");
        assert_eq!(content.toggle_label(), Some(SHOW_LESS_LABEL));

        assert!(content.toggle());
        assert_eq!(content.text(), "full...");
        assert_eq!(content.toggle_label(), Some(READ_MORE_LABEL));
    }

    #[test]
    fn test_complete_content_has_no_toggle() {
        let mut content = ContentView::complete("short");
        assert!(!content.toggle());
        assert_eq!(content.text(), "short");
        assert_eq!(content.toggle_label(), None);
    }

    #[test]
    fn test_card_lookup_on_empty_list() {
        let mut list = ListView::Empty {
            message: "nothing".to_string(),
        };
        assert!(list.is_empty());
        assert!(list.card_mut(1).is_none());
    }

    #[test]
    fn test_list_serializes_with_kind_tag() {
        let list = ListView::Empty {
            message: "none".to_string(),
        };
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["kind"], "empty");
        assert_eq!(json["message"], "none");
    }
}
