//! Main TUI runner - entry point and event loop
//!
//! Contains the core application lifecycle:
//! - `run`: entry point taking loaded settings and the session context
//! - `run_loop`: main event loop processing terminal events and messages
//! - `dispatch_action`: executes update actions as background tasks

use std::process::Command;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use pdeck_api::ProfileClient;
use pdeck_app::handler::{update, UpdateAction};
use pdeck_app::message::Message;
use pdeck_app::state::AppState;
use pdeck_core::{Result, SessionContext};

use crate::{event, render, terminal};

/// Run the TUI application
pub async fn run(settings: pdeck_app::config::Settings, session: SessionContext) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let client = ProfileClient::new(
        &settings.api.base_url,
        settings.api.timeout_ms,
        settings.api.session_cookie.as_deref(),
    )?;

    // Initialize terminal
    let mut term = ratatui::init();

    let mut state = AppState::with_settings(session, settings);

    // Unified message channel (network task results, etc.)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Shutdown signal: responses landing after teardown are dropped
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // Mount-time profile read
    dispatch_action(
        UpdateAction::FetchProfile,
        &client,
        &msg_tx,
        &shutdown_rx,
    );

    let result = run_loop(&mut term, &mut state, msg_rx, &client, &msg_tx, &shutdown_rx);

    // Signal background tasks that the view is gone
    let _ = shutdown_tx.send(true);

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    client: &ProfileClient,
    msg_tx: &mpsc::Sender<Message>,
    shutdown_rx: &watch::Receiver<bool>,
) -> Result<()> {
    while !state.should_quit() {
        // Process messages from background tasks (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, client, msg_tx, shutdown_rx);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, client, msg_tx, shutdown_rx);
        }
    }

    Ok(())
}

/// Run a message and its follow-ups through update(), dispatching actions.
fn process_message(
    state: &mut AppState,
    message: Message,
    client: &ProfileClient,
    msg_tx: &mpsc::Sender<Message>,
    shutdown_rx: &watch::Receiver<bool>,
) {
    let mut queue = vec![message];
    while let Some(msg) = queue.pop() {
        let result = update(state, msg);
        if let Some(follow_up) = result.message {
            queue.push(follow_up);
        }
        if let Some(action) = result.action {
            dispatch_action(action, client, msg_tx, shutdown_rx);
        }
    }
}

/// Execute an update action. Network calls run as spawned tasks that send
/// their outcome back as messages; navigation is fire-and-forget.
fn dispatch_action(
    action: UpdateAction,
    client: &ProfileClient,
    msg_tx: &mpsc::Sender<Message>,
    shutdown_rx: &watch::Receiver<bool>,
) {
    match action {
        UpdateAction::FetchProfile => {
            let client = client.clone();
            let tx = msg_tx.clone();
            let shutdown = shutdown_rx.clone();
            tokio::spawn(async move {
                let msg = match client.fetch_profile().await {
                    Ok(profile) => Message::ProfileFetched(Box::new(profile)),
                    Err(e) => Message::ProfileFetchFailed {
                        error: e.to_string(),
                    },
                };
                if *shutdown.borrow() {
                    debug!("dropping profile read result after teardown");
                    return;
                }
                let _ = tx.send(msg).await;
            });
        }

        UpdateAction::SaveProfile(profile) => {
            let client = client.clone();
            let tx = msg_tx.clone();
            let shutdown = shutdown_rx.clone();
            tokio::spawn(async move {
                let msg = match client.save_profile(&profile).await {
                    Ok(saved) => Message::SaveCompleted(Box::new(saved)),
                    Err(e) => Message::SaveFailed {
                        error: e.to_string(),
                    },
                };
                if *shutdown.borrow() {
                    debug!("dropping save result after teardown");
                    return;
                }
                let _ = tx.send(msg).await;
            });
        }

        UpdateAction::OpenKycRoute { url } => {
            info!("opening KYC route: {url}");
            if let Err(e) = open_browser(&url) {
                warn!("failed to open browser: {e}");
            }
        }
    }
}

/// Open a URL with the platform-default browser. The child is spawned and
/// not waited on, so the TUI keeps running.
fn open_browser(url: &str) -> std::io::Result<()> {
    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(url).spawn()?;
        Ok(())
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(url).spawn()?;
        Ok(())
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd").args(["/C", "start", "", url]).spawn()?;
        Ok(())
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = url;
        Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no browser opener available for this platform",
        ))
    }
}
