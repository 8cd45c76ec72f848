//! Blog controller - the user action surface.
//!
//! Every action runs to completion (store mutation, write, redraw) before the
//! front end feeds the next one.

use blogpad_shared::{ListView, Notice, Section};

use crate::archive::PostArchive;
use crate::error::{FormError, StoreError};
use crate::form::{FormController, FormFields};
use crate::ports::Surface;
use crate::store::PostStore;
use crate::view;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this post?";

/// The key that triggered a search-box update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey {
    Enter,
    /// Backspace or Delete.
    Erase,
    Other,
}

/// Owns the store and form and keeps the surface in sync with them.
pub struct Blog<S: Surface> {
    store: PostStore,
    form: FormController,
    surface: S,
    displayed: ListView,
    section: Section,
    search: String,
}

impl<S: Surface> Blog<S> {
    /// Load (or seed) the collection and show the full post list.
    pub async fn start(archive: PostArchive, surface: S) -> Result<Self, StoreError> {
        let mut store = PostStore::new(archive);
        store.initialize().await?;
        Ok(Self::with_store(store, surface))
    }

    /// Wrap an already initialized store.
    pub fn with_store(store: PostStore, surface: S) -> Self {
        let mut blog = Self {
            store,
            form: FormController::new(),
            surface,
            displayed: ListView::default(),
            section: Section::Posts,
            search: String::new(),
        };
        blog.render_all();
        blog.show(Section::Posts);
        blog
    }

    pub fn store(&self) -> &PostStore {
        &self.store
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    /// Edit the form fields in place and redraw the editor.
    pub fn edit_fields(&mut self, edit: impl FnOnce(&mut FormFields)) {
        edit(self.form.fields_mut());
        self.surface.show_form(&self.form.view());
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn displayed(&self) -> &ListView {
        &self.displayed
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn search_input(&self) -> &str {
        &self.search
    }

    pub fn go_home(&mut self) {
        self.show(Section::Posts);
        self.render_all();
        self.search.clear();
    }

    pub fn go_new_post(&mut self) {
        self.form.reset();
        self.surface.show_form(&self.form.view());
        self.show(Section::Editor);
    }

    pub fn go_about(&mut self) {
        self.show(Section::About);
    }

    /// Open the editor for `id`. Unknown ids are ignored.
    pub fn edit(&mut self, id: u64) {
        if self.form.begin_edit(&self.store, id) {
            self.surface.show_form(&self.form.view());
            self.show(Section::Editor);
        }
    }

    /// Delete `id` after the user confirms.
    pub async fn delete(&mut self, id: u64) {
        if !self.surface.confirm(DELETE_PROMPT).await {
            tracing::debug!(post_id = id, "Delete declined");
            return;
        }
        if let Err(e) = self.store.delete(id).await {
            self.report(&e);
        }
        self.render_all();
    }

    /// Expand or collapse the displayed card for `id`.
    pub fn toggle_read_more(&mut self, id: u64) {
        let toggled = self
            .displayed
            .card_mut(id)
            .is_some_and(|card| card.toggle_read_more());
        if toggled {
            self.surface.show_posts(&self.displayed);
        }
    }

    /// Show only the posts matching `term`.
    pub fn search(&mut self, term: &str) {
        self.search = term.to_string();
        let matches = self.store.filter(term);
        self.render(view::render(&matches));
    }

    /// React to a key press in the search box holding `value`.
    pub fn search_key(&mut self, value: &str, key: SearchKey) {
        self.search = value.to_string();
        match key {
            SearchKey::Enter => self.search(value),
            SearchKey::Erase => {}
            SearchKey::Other if value.is_empty() => self.render_all(),
            SearchKey::Other => {}
        }
    }

    /// Replace the form fields with `fields` and submit them.
    pub async fn submit(&mut self, fields: FormFields) {
        self.form.set_fields(fields);
        self.submit_form().await;
    }

    /// Submit whatever is currently in the form.
    pub async fn submit_form(&mut self) {
        match self.form.submit(&mut self.store).await {
            Ok(saved) => {
                if saved.is_none() {
                    tracing::debug!("Edited post no longer exists");
                }
                self.render_all();
                self.surface.show_form(&self.form.view());
                self.show(Section::Posts);
            }
            Err(FormError::Validation(e)) => {
                tracing::debug!(missing = ?e.missing, "Post rejected");
                self.surface.notify(&Notice::warning(e.to_string()));
            }
            Err(FormError::Store(e)) => {
                self.report(&e);
                self.render_all();
            }
        }
    }

    pub fn cancel(&mut self) {
        self.form.cancel();
        self.surface.show_form(&self.form.view());
        self.show(Section::Posts);
    }

    fn render_all(&mut self) {
        self.render(view::render(self.store.posts()));
    }

    fn render(&mut self, list: ListView) {
        self.displayed = list;
        self.surface.show_posts(&self.displayed);
    }

    fn show(&mut self, section: Section) {
        self.section = section;
        self.surface.show_section(section);
    }

    fn report(&mut self, error: &StoreError) {
        tracing::error!(error = %error, "Failed to save posts");
        self.surface
            .notify(&Notice::error(format!("Your changes could not be saved: {error}")));
    }
}
