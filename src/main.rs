// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Music Streaming TUI.
//!
//! A terminal-based music streaming client over a compiled-in catalog.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background playback worker.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, UI rendering and all
//!   application state.
//! * A **Playback Worker** drives the media backend and reports progress back
//!   as events.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels.

mod commander;
mod components;
mod config;
mod events;
mod logging;
mod model;
mod player;
mod render;
mod route;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::{error, info, warn};

use crate::{
    commander::Commander,
    components::{HomeView, LibraryView, PlaylistView, SearchView, SidebarView},
    config::AppConfig,
    events::{AppEvent, Focus, process_events},
    model::catalog::Catalog,
    player::{AudioPlayer, PlaybackBackend, coordinator::Coordinator},
    route::Route,
    theme::Theme,
};

/// Application state.
pub(crate) struct App {
    pub(crate) config: AppConfig,

    pub(crate) theme: Theme,
    pub(crate) route: Route,
    pub(crate) focus: Focus,

    pub(crate) event_tx: Sender<AppEvent>,
    pub(crate) event_rx: Receiver<AppEvent>,

    pub(crate) catalog: Catalog,
    pub(crate) coordinator: Coordinator<Box<dyn PlaybackBackend>>,

    pub(crate) sidebar_view: SidebarView,
    pub(crate) home_view: HomeView,
    pub(crate) search_view: SearchView,
    pub(crate) library_view: LibraryView,
    pub(crate) playlist_view: PlaylistView,

    pub(crate) commander: Commander,

    /// Shown in the command line until the next key press.
    pub(crate) status: Option<String>,
}

impl App {
    /// Create a new instance of application state, starting the configured
    /// playback worker.
    pub(crate) fn new(config: AppConfig) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let catalog = Catalog::builtin().context("Failed to load catalog")?;

        let audio_player =
            AudioPlayer::new(config.backend, event_tx.clone()).context("Failed to start audio player")?;

        Ok(Self::with_backend(config, catalog, Box::new(audio_player), event_tx, event_rx))
    }

    pub(crate) fn with_backend(
        config: AppConfig,
        catalog: Catalog,
        backend: Box<dyn PlaybackBackend>,
        event_tx: Sender<AppEvent>,
        event_rx: Receiver<AppEvent>,
    ) -> Self {
        let coordinator = Coordinator::new(backend, catalog.library_tracks().to_vec(), config.volume);
        let library_view = LibraryView::new(&catalog);

        Self {
            config,
            theme: Theme::default(),
            route: Route::Home,
            focus: Focus::Content,
            event_tx,
            event_rx,
            catalog,
            coordinator,
            sidebar_view: SidebarView::new(),
            home_view: HomeView::new(),
            search_view: SearchView::new(),
            library_view,
            playlist_view: PlaylistView::new(),
            commander: Commander::new(),
            status: None,
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts logging, initializes the application
/// state, manages the terminal lifecycle, and returns an error if any part of
/// the execution fails.
fn main() -> Result<()> {
    let (config, config_error) = config::load_config();

    let _log_guard = logging::init_logging(&config.log_filter)?;

    if let Some(e) = config_error {
        warn!(error = %e, "Failed to load configuration, using defaults");
    }

    info!(backend = ?config.backend, volume = config.volume, "Starting");

    let mut app = App::new(config).context("Failed to initalise application")?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        error!(error = %e, "Application error");
    }

    app.config.volume = app.coordinator.state().volume;
    if let Err(e) = config::save_config(&app.config) {
        warn!(error = %e, "Failed to save configuration");
    }

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex);
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is designed to be "best-effort" and does not return a result,
/// as it is typically called during cleanup or panic handling.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// This function spawns two long-running background threads:
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// The playback worker was already started by [`App::new`]. After spawning
/// the threads, it hands control to [`process_events`] to manage the UI and
/// state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::Builder::new()
        .name("keys".to_string())
        .spawn(move || {
            loop {
                if let Ok(Event::Key(key)) = event::read() {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
            }
        })
        .context("Failed to spawn key reader")?;

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::Builder::new()
        .name("tick".to_string())
        .spawn(move || {
            while tx_tick.send(AppEvent::Tick).is_ok() {
                thread::sleep(Duration::from_millis(250));
            }
        })
        .context("Failed to spawn tick thread")?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
