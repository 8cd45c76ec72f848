//! Editor form display state.

use serde::{Deserialize, Serialize};

/// Everything the front end needs to draw the post editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormView {
    /// "Create New Post" or "Edit Post".
    pub heading: String,
    /// "Publish Post" or "Save Changes".
    pub submit_label: String,
    /// The cancel control is only offered while editing.
    pub show_cancel: bool,
    pub title: String,
    pub author: String,
    pub content: String,
    /// `image`, `video`, or `None` when no media type is selected.
    pub media_kind: Option<String>,
    pub media_url: String,
}
