use async_trait::async_trait;
use blogpad_shared::{FormView, ListView, Notice, Section};

/// Whatever puts the blog on screen.
///
/// The controller calls these after every action; implementations only draw
/// and never reach back into the store.
#[async_trait]
pub trait Surface: Send {
    /// Make `section` the visible one.
    fn show_section(&mut self, section: Section);

    /// Replace the whole displayed post list.
    fn show_posts(&mut self, list: &ListView);

    /// Redraw the editor form.
    fn show_form(&mut self, form: &FormView);

    /// Show a blocking notice.
    fn notify(&mut self, notice: &Notice);

    /// Ask a yes/no question. `false` means the user declined.
    async fn confirm(&mut self, prompt: &str) -> bool;
}
