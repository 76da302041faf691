//! CLI command definitions and dispatch for the `parley` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod auth;
pub mod chat;
pub mod history;
pub mod session;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Chat with your knowledge-base assistant.
#[derive(Parser)]
#[command(name = "parley", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new account (no file upload; sign in separately afterwards).
    Signup,

    /// Sign in and upload your CSV knowledge base.
    Login {
        /// Path to the knowledge-base CSV file (required).
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Start an interactive chat with the assistant.
    Chat,

    /// Review past conversations, most recent first.
    History,

    /// Show the current session, if any.
    Whoami,

    /// Clear the stored session.
    Logout,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}
