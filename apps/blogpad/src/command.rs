//! REPL commands and their mapping onto blog actions.

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};

use blogpad_core::domain::MediaKind;
use blogpad_core::ports::Surface;
use blogpad_core::{Blog, SearchKey};
use blogpad_shared::Notice;

use crate::terminal::Terminal;

/// One line of user input.
#[derive(Debug, Parser)]
#[command(
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show every post and clear the search.
    #[command(alias = "ls")]
    Home,
    /// Start a new post.
    New,
    /// About this blog.
    About,
    /// Load a post into the editor.
    Edit { id: u64 },
    /// Delete a post (asks first).
    #[command(alias = "rm")]
    Delete { id: u64 },
    /// Toggle Read More / Show Less on a post.
    More { id: u64 },
    /// Filter posts by title, author or content. No term shows everything.
    Search {
        #[arg(default_value = "", allow_hyphen_values = true)]
        term: String,
    },
    /// Fill in an editor field.
    Set {
        #[arg(value_enum)]
        field: Field,
        #[arg(default_value = "", allow_hyphen_values = true)]
        value: String,
    },
    /// Publish the post in the editor.
    Submit,
    /// Discard the editor and go back to the list.
    Cancel,
    /// List commands.
    Help,
    /// Leave Blogpad.
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Field {
    Title,
    Author,
    Content,
    MediaKind,
    MediaUrl,
}

/// Parse a line. Blank lines yield `None`.
///
/// The text after `set <field>` and after `search` is passed through as one
/// argument, so its inner whitespace survives.
pub fn parse(line: &str) -> Result<Option<Command>, clap::Error> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (name, rest) = split_word(line);
    let mut args = vec![name];
    match name {
        "set" => {
            let (field, value) = split_word(rest);
            args.extend([field, value].into_iter().filter(|s| !s.is_empty()));
        }
        "search" if !rest.is_empty() => args.push(rest),
        _ => args.extend(rest.split_whitespace()),
    }
    Line::try_parse_from(args).map(|line| Some(line.command))
}

/// First word of `s` and the remainder with its leading whitespace removed.
fn split_word(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (s, ""),
    }
}

pub fn help() -> String {
    Line::command()
        .help_template("Commands:\n{subcommands}")
        .render_help()
        .to_string()
}

/// Run `command` against the blog. `Quit` is handled by the caller.
pub async fn dispatch(blog: &mut Blog<Terminal>, command: Command) {
    match command {
        Command::Home => blog.go_home(),
        Command::New => blog.go_new_post(),
        Command::About => blog.go_about(),
        Command::Edit { id } => blog.edit(id),
        Command::Delete { id } => blog.delete(id).await,
        Command::More { id } => blog.toggle_read_more(id),
        Command::Search { term } => {
            let key = if term.is_empty() {
                SearchKey::Other
            } else {
                SearchKey::Enter
            };
            blog.search_key(&term, key);
        }
        Command::Set { field, value } => set_field(blog, field, value),
        Command::Submit => blog.submit_form().await,
        Command::Cancel => blog.cancel(),
        Command::Help => blog.surface_mut().print(&help()),
        Command::Quit => {}
    }
}

fn set_field(blog: &mut Blog<Terminal>, field: Field, value: String) {
    if field == Field::MediaKind && !value.is_empty() {
        if let Err(e) = value.parse::<MediaKind>() {
            blog.surface_mut().notify(&Notice::warning(e));
            return;
        }
    }
    blog.edit_fields(|fields| match field {
        Field::Title => fields.title = value,
        Field::Author => fields.author = value,
        Field::Content => fields.content = value,
        Field::MediaKind => fields.media_kind = value.parse().ok(),
        Field::MediaUrl => fields.media_url = value,
    });
}
