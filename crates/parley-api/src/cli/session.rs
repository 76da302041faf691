//! Session commands: whoami and logout.

use anyhow::Result;
use console::style;

use parley_core::store::SessionStore;

use crate::state::AppState;

/// Show the stored session, if any. Reads the store only; the session
/// token is a correlation key, not proof of authorization, so this makes
/// no network call.
pub async fn whoami(state: &AppState, json: bool) -> Result<()> {
    let session = state.store().get().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&session)?);
        return Ok(());
    }

    match session {
        Some(session) => {
            println!();
            println!(
                "  {} Signed in as identity {}",
                style("✓").green().bold(),
                style(&session.identity_id).cyan()
            );
            println!("  Session token: {}", style(&session.token).dim());
            println!();
        }
        None => {
            println!();
            println!(
                "  {} No session. Sign in with: {}",
                style("i").blue().bold(),
                style("parley login --file <knowledge-base.csv>").yellow()
            );
            println!();
        }
    }
    Ok(())
}

/// Clear the stored session.
pub async fn logout(state: &AppState) -> Result<()> {
    state.store().clear().await?;
    println!();
    println!("  {} Session cleared.", style("✓").green().bold());
    println!();
    Ok(())
}
