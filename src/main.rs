//! Profile Deck - a terminal UI for back-office user profile administration
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use clap::Parser;
use tracing::info;

use pdeck_core::SessionContext;

/// Profile Deck - a terminal UI for back-office user profile administration
#[derive(Parser, Debug)]
#[command(name = "pdeck")]
#[command(about = "View and edit a user's profile record from the terminal", long_about = None)]
struct Args {
    /// Back-office user id of the profile being administered
    #[arg(long, value_name = "ID")]
    user: Option<String>,

    /// Profile service base URL (overrides config and PDECK_API_URL)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Run with a read-only compliance-officer session
    #[arg(long)]
    officer: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    pdeck_core::logging::init()?;

    let args = Args::parse();

    let mut settings = pdeck_app::config::load_settings()?;
    if let Some(url) = args.api_url {
        settings.api.base_url = url;
    }

    let mut session = SessionContext::new(
        settings.session.user_id.clone(),
        settings.session.officer,
    );
    if let Some(user) = args.user {
        session.user_id = user;
    }
    if args.officer {
        session.officer = true;
    }

    info!(
        "starting for user {} (officer: {})",
        session.user_id, session.officer
    );
    pdeck_tui::run(settings, session).await?;
    Ok(())
}
