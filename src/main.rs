//! hello-prompt CLI
//!
//! Ask for the user's name, then greet them. Enter confirms, a second
//! Enter leaves; Esc or Ctrl+C leave at any time.

use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hello_prompt::tui::run::run;
use hello_prompt::tui::theme::Theme;

#[derive(Parser)]
#[command(name = "hello-prompt")]
#[command(about = "Ask for your name and say hello")]
#[command(version)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    // Diagnostics go to stderr so they never mix with the frame on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let theme = Theme::default();

    match run(&theme) {
        Ok(app) => {
            info!(confirmed = app.screen.is_confirmed(), "exiting");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
