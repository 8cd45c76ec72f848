//! Post editor form: field state, validation and create/update dispatch.

use blogpad_shared::FormView;

use crate::domain::{Media, MediaKind, Post, PostDraft};
use crate::error::{FormError, ValidationError};
use crate::store::PostStore;

/// Raw editor input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub title: String,
    pub author: String,
    pub content: String,
    pub media_kind: Option<MediaKind>,
    pub media_url: String,
}

impl FormFields {
    /// Fields pre-filled from an existing post.
    pub fn from_post(post: &Post) -> Self {
        let (media_kind, media_url) = match &post.media {
            Some(media) => (Some(media.kind), media.url.clone()),
            None => (None, String::new()),
        };
        Self {
            title: post.title.clone(),
            author: post.author.clone(),
            content: post.content.clone(),
            media_kind,
            media_url,
        }
    }

    /// Trim and check the input.
    pub fn validate(&self) -> Result<PostDraft, ValidationError> {
        let title = self.title.trim();
        let author = self.author.trim();
        let content = self.content.trim();

        let missing: Vec<&'static str> = [("title", title), ("author", author), ("content", content)]
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError { missing });
        }

        let url = self.media_url.trim();
        let media = match self.media_kind {
            Some(kind) if !url.is_empty() => Some(Media {
                kind,
                url: url.to_string(),
            }),
            _ => None,
        };

        Ok(PostDraft {
            title: title.to_string(),
            author: author.to_string(),
            content: content.to_string(),
            media,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Creating,
    Editing(u64),
}

/// Tracks whether a submit creates a post or updates one.
#[derive(Debug, Default)]
pub struct FormController {
    mode: FormMode,
    fields: FormFields,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FormFields {
        &mut self.fields
    }

    pub fn set_fields(&mut self, fields: FormFields) {
        self.fields = fields;
    }

    /// Load `id` into the form. Returns `false` and changes nothing if the
    /// post doesn't exist.
    pub fn begin_edit(&mut self, store: &PostStore, id: u64) -> bool {
        let Some(post) = store.find_by_id(id) else {
            tracing::debug!(post_id = id, "Edit requested for missing post");
            return false;
        };
        self.fields = FormFields::from_post(post);
        self.mode = FormMode::Editing(id);
        true
    }

    /// Validate and save the current fields.
    ///
    /// Validation failures leave the form and the store untouched. On success
    /// the form is cleared back to creating mode. `Ok(None)` means the post
    /// being edited has disappeared; nothing was written.
    pub async fn submit(&mut self, store: &mut PostStore) -> Result<Option<Post>, FormError> {
        let draft = self.fields.validate()?;

        let saved = match self.mode {
            FormMode::Creating => Some(store.create(draft).await?),
            FormMode::Editing(id) => {
                if store.update(id, draft).await? {
                    store.find_by_id(id).cloned()
                } else {
                    None
                }
            }
        };

        self.reset();
        Ok(saved)
    }

    /// Drop any in-progress edit.
    pub fn cancel(&mut self) {
        if let FormMode::Editing(id) = self.mode {
            tracing::debug!(post_id = id, "Edit cancelled");
        }
        self.reset();
    }

    /// Clear the fields and return to creating mode.
    pub fn reset(&mut self) {
        self.mode = FormMode::Creating;
        self.fields = FormFields::default();
    }

    pub fn view(&self) -> FormView {
        let (heading, submit_label, show_cancel) = match self.mode {
            FormMode::Creating => ("Create New Post", "Publish Post", false),
            FormMode::Editing(_) => ("Edit Post", "Save Changes", true),
        };
        FormView {
            heading: heading.to_string(),
            submit_label: submit_label.to_string(),
            show_cancel,
            title: self.fields.title.clone(),
            author: self.fields.author.clone(),
            content: self.fields.content.clone(),
            media_kind: self.fields.media_kind.map(|k| k.as_str().to_string()),
            media_url: self.fields.media_url.clone(),
        }
    }
}
