//! Turns posts into display items.

use blogpad_shared::{Byline, CardAction, ContentView, ListView, MediaView, PostCard};

use crate::domain::{Media, MediaKind, Post};

/// Characters shown before a long post is collapsed.
pub const EXCERPT_CHARS: usize = 250;

pub const EMPTY_MESSAGE: &str = "No posts found. Why not create one?";

const VIDEO_MIME: &str = "video/mp4";

/// Build the whole displayed list for `posts`, in the given order.
pub fn render(posts: &[Post]) -> ListView {
    if posts.is_empty() {
        return ListView::Empty {
            message: EMPTY_MESSAGE.to_string(),
        };
    }
    ListView::Cards {
        cards: posts.iter().map(card).collect(),
    }
}

pub fn card(post: &Post) -> PostCard {
    PostCard {
        post_id: post.id,
        title: post.title.clone(),
        byline: Byline {
            author: post.author.clone(),
            date: post.date.format("%Y-%m-%d").to_string(),
        },
        media: post.media.as_ref().and_then(|m| media(m, &post.title)),
        content: content(&post.content),
        actions: vec![CardAction::Edit(post.id), CardAction::Delete(post.id)],
    }
}

fn media(media: &Media, title: &str) -> Option<MediaView> {
    if media.url.is_empty() {
        return None;
    }
    Some(match media.kind {
        MediaKind::Image => MediaView::Image {
            src: media.url.clone(),
            alt: title.to_string(),
        },
        MediaKind::Video => MediaView::Video {
            src: media.url.clone(),
            mime: VIDEO_MIME.to_string(),
        },
    })
}

/// Long content collapses to an excerpt plus an ellipsis.
pub fn content(text: &str) -> ContentView {
    match text.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => ContentView::truncated(text, format!("{}...", &text[..cut])),
        None => ContentView::complete(text),
    }
}
