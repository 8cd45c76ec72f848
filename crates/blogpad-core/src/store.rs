//! In-memory post collection, persisted on every mutation.

use chrono::{NaiveDate, Utc};

use crate::archive::PostArchive;
use crate::domain::{Post, PostDraft};
use crate::error::StoreError;
use crate::seed;

fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Owns the post collection. Newest posts come first.
pub struct PostStore {
    posts: Vec<Post>,
    archive: PostArchive,
    today: fn() -> NaiveDate,
}

impl PostStore {
    /// An empty store. Nothing is loaded until [`PostStore::initialize`].
    pub fn new(archive: PostArchive) -> Self {
        Self {
            posts: Vec::new(),
            archive,
            today: utc_today,
        }
    }

    /// Override the clock used to date new posts.
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Load the stored collection, seeding example posts if there is none.
    pub async fn initialize(&mut self) -> Result<(), StoreError> {
        match self.archive.load().await {
            Some(posts) => {
                tracing::info!(count = posts.len(), "Posts loaded");
                self.posts = posts;
            }
            None => {
                self.posts = seed::example_posts();
                tracing::info!(count = self.posts.len(), "No stored posts, seeding examples");
                self.persist().await?;
            }
        }
        Ok(())
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Add a new post at the front of the collection.
    pub async fn create(&mut self, draft: PostDraft) -> Result<Post, StoreError> {
        let id = self.next_id()?;
        let post = Post::new(id, (self.today)(), draft);
        self.posts.insert(0, post.clone());
        tracing::info!(post_id = id, "Post created");
        self.persist().await?;
        Ok(post)
    }

    /// Replace everything but `id` and `date`. Returns `false` without
    /// writing when no post has that id.
    pub async fn update(&mut self, id: u64, draft: PostDraft) -> Result<bool, StoreError> {
        let Some(post) = self.posts.iter_mut().find(|p| p.id == id) else {
            tracing::debug!(post_id = id, "Update skipped, post not found");
            return Ok(false);
        };
        post.apply(draft);
        tracing::info!(post_id = id, "Post updated");
        self.persist().await?;
        Ok(true)
    }

    /// Remove the post with `id` if present. The collection is written either
    /// way. Returns whether a post was removed.
    pub async fn delete(&mut self, id: u64) -> Result<bool, StoreError> {
        let before = self.posts.len();
        self.posts.retain(|p| p.id != id);
        let removed = self.posts.len() < before;
        if removed {
            tracing::info!(post_id = id, "Post deleted");
        }
        self.persist().await?;
        Ok(removed)
    }

    /// Posts whose title, author or content contain `query`, ignoring case.
    /// A blank query matches everything.
    pub fn filter(&self, query: &str) -> Vec<Post> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.posts.clone();
        }
        self.posts
            .iter()
            .filter(|p| p.matches(&needle))
            .cloned()
            .collect()
    }

    fn next_id(&self) -> Result<u64, StoreError> {
        match self.posts.iter().map(|p| p.id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or(StoreError::IdsExhausted),
        }
    }

    async fn persist(&self) -> Result<(), StoreError> {
        self.archive.save(&self.posts).await
    }
}
