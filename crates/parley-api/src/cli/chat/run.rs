//! Main chat loop orchestration.
//!
//! Reads the stored session, activates the message controller (with its
//! auth guard), then runs the input loop: compose a message, send it with a
//! progress spinner, and print the assistant's turn -- real reply or
//! synthesized failure entry, the transcript always keeps the user's turn.

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use parley_core::chat::MessageController;
use parley_core::store::SessionStore;
use parley_types::chat::ChatMessage;

use crate::state::AppState;

use super::compose::Composer;
use super::input::{ChatInput, InputEvent};

/// Run the interactive chat view.
pub async fn run(state: &AppState) -> Result<()> {
    let session = state.store().get().await?;
    let session_token = session.as_ref().map(|s| s.token.clone());

    let (mut chat, redirect) =
        MessageController::activate(state.backend(), session, state.redirect_delay());

    // Auth guard: no session means an immediate error and a delayed
    // redirect to the entry point.
    if let Some(mut timer) = redirect {
        if let Some(reason) = chat.error() {
            eprintln!("\n  {} {reason}", style("✗").red().bold());
        }
        timer.wait().await;
        eprintln!(
            "  Sign in with: {}\n",
            style("parley login --file <knowledge-base.csv>").yellow()
        );
        std::process::exit(1);
    }

    print_banner(session_token.as_deref());

    let prompt = format!("  {} ", style("You >").green().bold());
    let continuation = format!("  {} ", style("... >").dim());
    let (mut input, _writer) = ChatInput::new(prompt.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;
    let mut composer = Composer::new();

    loop {
        let event = input.read_line().await;
        match event {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!(
                    "\n  {}",
                    style("Press Ctrl+D to exit, or keep chatting.").dim()
                );
                continue;
            }
            InputEvent::Line(line) => {
                let Some(message) = composer.push_line(&line) else {
                    // Still composing a multi-line message.
                    input.update_prompt(&continuation);
                    continue;
                };
                input.update_prompt(&prompt);

                let spinner = ProgressBar::new_spinner();
                spinner.set_style(
                    ProgressStyle::default_spinner()
                        .template("{spinner:.cyan} {msg}")
                        .expect("static spinner template"),
                );
                spinner.set_message("Processing...");
                spinner.enable_steady_tick(std::time::Duration::from_millis(80));

                let sent = chat.send_message(&message).await;
                spinner.finish_and_clear();

                if !sent {
                    // Precondition no-op: nothing was appended, nothing sent.
                    continue;
                }
                if let Some(reply) = chat.transcript().last() {
                    print_assistant_turn(reply);
                }
            }
        }
    }

    Ok(())
}

fn print_banner(session_token: Option<&str>) {
    println!();
    println!(
        "  {}",
        style("Multi-Agent Conversational Assistant").bold()
    );
    if let Some(token) = session_token {
        println!("  {} {}", style("session").dim(), style(token).dim());
    }
    println!(
        "  {}",
        style("Ask anything related to your CSV. End a line with \\ for a newline.").dim()
    );
    println!();
}

fn print_assistant_turn(message: &ChatMessage) {
    println!(
        "  {} {}",
        style("Assistant>").magenta().bold(),
        message.content
    );
    println!();
}
