//! Conversation history command.
//!
//! Renders the four history view states: loading indicator, error, empty
//! state, or the populated list with previews, timestamps, tags, and full
//! transcripts.

use anyhow::Result;
use chrono::Local;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use parley_core::history::{ConversationDisplay, HistoryController, HistoryState};
use parley_core::store::SessionStore;
use parley_types::chat::{Conversation, MessageRole};

use crate::state::AppState;

/// Fetch and display past conversations, most recent first.
pub async fn show(state: &AppState, json: bool) -> Result<()> {
    let identity_id = state
        .store()
        .get()
        .await?
        .map(|session| session.identity_id);

    let (mut history, redirect) =
        HistoryController::activate(state.backend(), identity_id, state.redirect_delay());

    // Auth guard: surface the error now, redirect to the entry point after
    // the fixed delay.
    if let Some(mut timer) = redirect {
        if let HistoryState::Error(reason) = history.state() {
            eprintln!("\n  {} {reason}", style("✗").red().bold());
        }
        timer.wait().await;
        eprintln!(
            "  Sign in with: {}\n",
            style("parley login --file <knowledge-base.csv>").yellow()
        );
        std::process::exit(1);
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .expect("static spinner template"),
    );
    spinner.set_message("Loading chat history...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));

    history.load().await;
    spinner.finish_and_clear();

    match history.state() {
        HistoryState::Loading => unreachable!("load() always leaves the loading state"),
        HistoryState::Error(reason) => {
            eprintln!("\n  {} {reason}", style("✗").red().bold());
            std::process::exit(1);
        }
        HistoryState::Empty => {
            if json {
                println!("[]");
                return Ok(());
            }
            println!();
            println!("  {} No conversations yet.", style("i").blue().bold());
            println!("  Your past conversations will appear here once you start chatting.");
            println!();
        }
        HistoryState::Loaded(conversations) => {
            if json {
                println!("{}", serde_json::to_string_pretty(conversations)?);
                return Ok(());
            }
            render_list(conversations);
        }
    }
    Ok(())
}

fn render_list(conversations: &[Conversation]) {
    println!();
    println!("  {}", style("Your Conversation History").bold());

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Preview").fg(Color::White),
        Cell::new("Created").fg(Color::White),
        Cell::new("Messages").fg(Color::White),
        Cell::new("Tags").fg(Color::White),
    ]);

    for convo in conversations {
        table.add_row(vec![
            Cell::new(truncate(convo.preview(), 48)),
            Cell::new(
                convo
                    .created_at
                    .with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M")
                    .to_string(),
            ),
            Cell::new(convo.messages.len().to_string()),
            Cell::new(convo.display_tags().join(", ")),
        ]);
    }
    println!("{table}");

    // Full transcripts beneath the summary table.
    for convo in conversations {
        println!();
        println!(
            "  {} {}",
            style("▸").cyan(),
            style(truncate(convo.preview(), 64)).bold()
        );
        for message in &convo.messages {
            let label = match message.role {
                MessageRole::User => style("You      >").green().bold(),
                MessageRole::Assistant => style("Assistant>").magenta().bold(),
            };
            println!("    {label} {}", message.content);
        }
        println!(
            "    {} {}",
            style("Tags:").dim(),
            convo.display_tags().join(", ")
        );
    }
    println!();
}

/// Truncate a preview to one display line.
fn truncate(text: &str, max_chars: usize) -> String {
    let line = text.lines().next().unwrap_or("");
    if line.chars().count() <= max_chars {
        line.to_string()
    } else {
        let cut: String = line.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_long_text_adds_ellipsis() {
        let out = truncate("a very long preview that keeps going", 10);
        assert_eq!(out.chars().count(), 10);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn test_truncate_takes_first_line_only() {
        assert_eq!(truncate("first\nsecond", 20), "first");
    }
}
