//! # Blogpad Shared
//!
//! Display items exchanged between the blog controller and whatever front end
//! binds it. Nothing here knows about storage or the post collection; the
//! types only describe what should be on screen.

pub mod form;
pub mod notice;
pub mod view;

pub use form::FormView;
pub use notice::{Notice, NoticeLevel};
pub use view::{
    Byline, CardAction, ContentView, ListView, MediaView, PostCard, READ_MORE_LABEL,
    SHOW_LESS_LABEL, Section,
};
