//! Text rendering of the directory screen, plus the terminal-side
//! `Notifier` and `Prompter`.

use async_trait::async_trait;
use roster_core::{DirectoryApi, KeyValueStore};
use roster_state::{Confirmation, LoadState, Notice, Notifier, Prompt, Prompter, ViewController};
use std::io::Write;
use tokio::io::{AsyncBufRead, Lines};
use tracing::warn;

/// Render the current screen as text
pub fn render<A, S, N>(view: &ViewController<A, S, N>) -> String
where
    A: DirectoryApi,
    S: KeyValueStore,
    N: Notifier,
{
    if view.state() == LoadState::Loading {
        return "Loading users...\n".to_string();
    }

    let mode = if view.show_favorites_only() {
        "favorites only"
    } else {
        "all users"
    };

    let mut out = String::new();
    let mut shown = 0;
    for user in view.visible_users() {
        let marker = if view.is_favorite(user.id) { '*' } else { ' ' };
        out.push_str(&format!(
            " {} {:>4}  {} <{}>\n",
            marker, user.id, user.name, user.email
        ));
        shown += 1;
    }

    if shown == 0 {
        out.push_str(if view.show_favorites_only() {
            "  No favorites yet. Use f <id> to mark one.\n"
        } else {
            "  No users.\n"
        });
    }

    format!(
        "== Users: {} shown, {} favorites [{}] ==\n{}",
        shown,
        view.favorites().len(),
        mode,
        out
    )
}

/// Prints notices to stdout as they arrive
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, notice: Notice) {
        println!("{}", notice);
    }
}

/// Asks for confirmation on stdout and reads the answer from `lines`.
///
/// Only an explicit yes confirms; anything else, including end of input,
/// cancels.
pub struct LinePrompter<'a, R> {
    lines: &'a mut Lines<R>,
}

impl<'a, R> LinePrompter<'a, R> {
    pub fn new(lines: &'a mut Lines<R>) -> Self {
        Self { lines }
    }
}

#[async_trait]
impl<'a, R> Prompter for LinePrompter<'a, R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn confirm(&mut self, prompt: &Prompt) -> Confirmation {
        print!(
            "{}: {} [{} = y / {} = n] ",
            prompt.title, prompt.message, prompt.confirm_label, prompt.cancel_label
        );
        let _ = std::io::stdout().flush();

        match self.lines.next_line().await {
            Ok(Some(answer)) => parse_answer(&answer),
            Ok(None) => Confirmation::Cancel,
            Err(e) => {
                warn!(error = %e, "Failed to read confirmation");
                Confirmation::Cancel
            }
        }
    }
}

fn parse_answer(answer: &str) -> Confirmation {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Confirmation::Confirm,
        _ => Confirmation::Cancel,
    }
}
