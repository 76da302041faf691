//! Sign-up and login commands.
//!
//! Prompts for credentials with dialoguer, reads the knowledge-base file,
//! and drives the auth controller. Error text from the controller is
//! printed verbatim; there is no retry.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Input, Password};
use secrecy::SecretString;

use parley_core::auth::AuthController;
use parley_types::identity::{KnowledgeFile, SignInForm, SignUpForm};

use crate::state::AppState;

/// Create a new account. Sign-in stays a separate step, matching the
/// backend's contract (no file upload here).
pub async fn signup(state: &AppState) -> Result<()> {
    let name: String = Input::new().with_prompt("Name").interact_text()?;
    let email: String = Input::new().with_prompt("Email address").interact_text()?;
    let company: String = Input::new()
        .with_prompt("Company (optional)")
        .allow_empty(true)
        .interact_text()?;
    let password = Password::new().with_prompt("Password").interact()?;

    let form = SignUpForm {
        email,
        name,
        company: (!company.is_empty()).then_some(company),
        password: SecretString::from(password),
    };

    let mut auth = AuthController::new(state.backend(), state.store());
    match auth.sign_up(&form).await {
        Ok(()) => {
            println!();
            println!(
                "  {} Account created! You can now sign in with: {}",
                style("✓").green().bold(),
                style("parley login --file <knowledge-base.csv>").yellow()
            );
            println!();
            Ok(())
        }
        Err(err) => {
            eprintln!("\n  {} {err}", style("✗").red().bold());
            std::process::exit(1);
        }
    }
}

/// Sign in, upload the knowledge base, and establish the session.
pub async fn login(state: &AppState, file: &Path) -> Result<()> {
    let email: String = Input::new().with_prompt("Email address").interact_text()?;
    let password = Password::new().with_prompt("Password").interact()?;

    let knowledge_file = read_knowledge_file(file).await?;

    let form = SignInForm {
        email,
        password: SecretString::from(password),
        file: Some(knowledge_file),
    };

    let mut auth = AuthController::new(state.backend(), state.store());
    match auth.sign_in(&form).await {
        Ok(identity) => {
            println!();
            println!(
                "  {} Welcome back, {}! Knowledge base updated.",
                style("✓").green().bold(),
                style(identity.greeting_name()).cyan()
            );
            println!(
                "  Start chatting with: {}",
                style("parley chat").yellow()
            );
            println!();
            Ok(())
        }
        Err(err) => {
            eprintln!("\n  {} {err}", style("✗").red().bold());
            std::process::exit(1);
        }
    }
}

/// Read the knowledge-base file into memory, keeping its original name for
/// the multipart upload.
async fn read_knowledge_file(path: &Path) -> Result<KnowledgeFile> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read knowledge base '{}'", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "knowledge_base.csv".to_string());
    Ok(KnowledgeFile { file_name, bytes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_knowledge_file_keeps_name_and_bytes() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("faq.csv");
        tokio::fs::write(&path, b"question,answer\n").await.unwrap();

        let file = read_knowledge_file(&path).await.unwrap();
        assert_eq!(file.file_name, "faq.csv");
        assert_eq!(file.bytes, b"question,answer\n");
    }

    #[tokio::test]
    async fn test_read_knowledge_file_missing_is_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope.csv");
        assert!(read_knowledge_file(&missing).await.is_err());
    }
}
