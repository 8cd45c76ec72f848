//! Line-oriented terminal front end.
//!
//! The controller reports what changed; the terminal keeps the latest list
//! and form and redraws the visible section once per command.

use std::fmt::Write as _;
use std::io::{self, Write as _};

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use blogpad_core::ports::Surface;
use blogpad_shared::{FormView, ListView, MediaView, Notice, NoticeLevel, PostCard, Section};

const ABOUT: &str = "Blogpad keeps a small blog on this machine. Posts are saved after every \
change and are loaded again next time you start it. Type `help` for commands.";

pub struct Terminal {
    input: Lines<BufReader<Stdin>>,
    section: Section,
    list: ListView,
    form: Option<FormView>,
    dirty: bool,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            input: BufReader::new(tokio::io::stdin()).lines(),
            section: Section::Posts,
            list: ListView::default(),
            form: None,
            dirty: true,
        }
    }

    /// Prompt and read the next line. `None` at end of input.
    pub async fn read_line(&mut self) -> io::Result<Option<String>> {
        print!("> ");
        io::stdout().flush()?;
        self.input.next_line().await
    }

    /// Redraw the visible section if anything changed since the last draw.
    pub fn present(&mut self) {
        if !self.dirty {
            return;
        }
        self.dirty = false;
        let screen = match self.section {
            Section::Posts => format_list(&self.list),
            Section::Editor => self.form.as_ref().map(format_form).unwrap_or_default(),
            Section::About => format!("== About ==\n{ABOUT}\n"),
        };
        println!("{screen}");
    }

    pub fn print(&mut self, text: &str) {
        println!("{text}");
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Surface for Terminal {
    fn show_section(&mut self, section: Section) {
        self.section = section;
        self.dirty = true;
    }

    fn show_posts(&mut self, list: &ListView) {
        self.list = list.clone();
        self.dirty |= self.section == Section::Posts;
    }

    fn show_form(&mut self, form: &FormView) {
        self.form = Some(form.clone());
        self.dirty |= self.section == Section::Editor;
    }

    fn notify(&mut self, notice: &Notice) {
        let tag = match notice.level {
            NoticeLevel::Warning => "!",
            NoticeLevel::Error => "error",
        };
        println!("[{tag}] {}", notice.message);
    }

    async fn confirm(&mut self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        match self.input.next_line().await {
            Ok(Some(answer)) => is_yes(&answer),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read confirmation");
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn format_list(list: &ListView) -> String {
    match list {
        ListView::Empty { message } => format!("== Posts ==\n{message}\n"),
        ListView::Cards { cards } => {
            let mut out = String::from("== Posts ==\n");
            for card in cards {
                out.push_str(&format_card(card));
            }
            out
        }
    }
}

fn format_card(card: &PostCard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n[{}] {}", card.post_id, card.title);
    let _ = writeln!(out, "    {}", card.byline);
    match &card.media {
        Some(MediaView::Image { src, alt }) => {
            let _ = writeln!(out, "    [image: {alt}] {src}");
        }
        Some(MediaView::Video { src, mime }) => {
            let _ = writeln!(out, "    [video ({mime})] {src}");
        }
        None => {}
    }
    let _ = writeln!(out, "    {}", card.content.text());

    let mut actions: Vec<String> = card
        .actions
        .iter()
        .map(|a| format!("{} `{} {}`", a.label(), a.label().to_lowercase(), card.post_id))
        .collect();
    if let Some(label) = card.content.toggle_label() {
        actions.insert(0, format!("{label} `more {}`", card.post_id));
    }
    let _ = writeln!(out, "    {}", actions.join(" | "));
    out
}

fn format_form(form: &FormView) -> String {
    let mut out = format!("== {} ==\n", form.heading);
    let _ = writeln!(out, "  title:      {}", form.title);
    let _ = writeln!(out, "  author:     {}", form.author);
    let _ = writeln!(out, "  content:    {}", form.content);
    let _ = writeln!(
        out,
        "  media-kind: {}",
        form.media_kind.as_deref().unwrap_or("(none)")
    );
    let _ = writeln!(out, "  media-url:  {}", form.media_url);
    let mut actions = vec![format!("{} `submit`", form.submit_label)];
    if form.show_cancel {
        actions.push("Cancel `cancel`".to_string());
    }
    let _ = writeln!(out, "  {}", actions.join(" | "));
    out
}

#[cfg(test)]
mod tests {
    use blogpad_shared::{Byline, CardAction, ContentView};

    use super::*;

    fn card(content: ContentView) -> PostCard {
        PostCard {
            post_id: 2,
            title: "Flexbox".to_string(),
            byline: Byline {
                author: "Bob Johnson".to_string(),
                date: "2025-05-22".to_string(),
            },
            media: Some(MediaView::Image {
                src: "https://example.com/f.png".to_string(),
                alt: "Flexbox".to_string(),
            }),
            content,
            actions: vec![CardAction::Edit(2), CardAction::Delete(2)],
        }
    }

    #[test]
    fn test_card_shows_toggle_only_when_truncated() {
        let long = format_card(&card(ContentView::truncated("full", "fu...")));
        assert!(long.contains("fu..."));
        assert!(long.contains("Read More `more 2`"));
        assert!(long.contains("Edit `edit 2` | Delete `delete 2`"));
        assert!(long.contains("By Bob Johnson on 2025-05-22"));

        let short = format_card(&card(ContentView::complete("full")));
        assert!(!short.contains("Read More"));
    }

    #[test]
    fn test_empty_list_shows_placeholder() {
        let out = format_list(&ListView::Empty {
            message: "No posts found. Why not create one?".to_string(),
        });
        assert!(out.contains("No posts found"));
    }

    #[test]
    fn test_form_cancel_only_when_editing() {
        let mut form = FormView {
            heading: "Create New Post".to_string(),
            submit_label: "Publish Post".to_string(),
            show_cancel: false,
            title: String::new(),
            author: String::new(),
            content: String::new(),
            media_kind: None,
            media_url: String::new(),
        };
        assert!(!format_form(&form).contains("cancel"));
        form.show_cancel = true;
        assert!(format_form(&form).contains("Cancel `cancel`"));
    }

    #[test]
    fn test_confirmation_answers() {
        assert!(is_yes("y"));
        assert!(is_yes(" YES\n"));
        assert!(!is_yes(""));
        assert!(!is_yes("no"));
    }
}
