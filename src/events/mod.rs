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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging user input (keyboard), playback worker notifications and the UI
//! rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel, from the key reader, the tick thread and the
//!    playback worker.
//! 2. **Process**: [`dispatch`] updates the [`App`] state. Views only ever
//!    send intents; this is the one place the playback coordinator is driven.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

mod handlers;
mod key_handlers;
use handlers::*;

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::{Result, anyhow};
use crossterm::event::{Event, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    components::ViewContext,
    model::Track,
    player::{LoadGeneration, PlayerEvent},
    render::draw,
    route::Route,
};

/// Which pane receives keys first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Sidebar,
    Content,
}

impl Focus {
    pub(crate) fn toggle(self) -> Self {
        match self {
            Focus::Sidebar => Focus::Content,
            Focus::Content => Focus::Sidebar,
        }
    }
}

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Tick,

    Navigate(Route),

    PlayTrack(Track),
    PlayTrackById(String),
    PlayPlaylist(String),
    TogglePause,
    Next,
    Previous,
    /// Relative seek in seconds.
    SeekBy(i64),
    SeekTo(u64),
    ChangeVolume(i16),
    SetVolume(u8),
    ToggleLike,
    ToggleShuffle,
    CycleRepeat,

    CreatePlaylist(String),

    /// A worker notification for the source loaded as `generation`.
    Player {
        generation: LoadGeneration,
        event: PlayerEvent,
    },

    ExitApplication,

    Error(String),
    #[cfg_attr(not(feature = "mpv"), allow(dead_code))]
    FatalError(String),
}

/// Implemented by views that react to terminal input.
pub(crate) trait AppEventProcessor {
    /// Handles `event`, returning `true` if the view consumed it.
    fn process_event(&mut self, event: &Event, ctx: ViewContext<'_>, event_tx: &Sender<AppEvent>) -> Result<bool>;
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if !dispatch(app, event)? {
            break;
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies one event to the application state.
///
/// Returns `Ok(false)` when the application should exit.
pub(crate) fn dispatch(app: &mut App, event: AppEvent) -> Result<bool> {
    match event {
        AppEvent::ExitApplication => return Ok(false),
        AppEvent::FatalError(message) => return Err(anyhow!(message)),

        AppEvent::Key(key) => key_handlers::process_key_event(app, key)?,
        AppEvent::Tick => handle_tick(app),
        AppEvent::Navigate(route) => handle_navigate(app, route),
        AppEvent::PlayTrack(track) => handle_play_track(app, track),
        AppEvent::PlayTrackById(id) => handle_play_track_by_id(app, &id),
        AppEvent::PlayPlaylist(id) => handle_play_playlist(app, &id),
        AppEvent::TogglePause => handle_toggle_pause(app),
        AppEvent::Next => handle_next(app),
        AppEvent::Previous => handle_previous(app),
        AppEvent::SeekBy(delta) => handle_seek_by(app, delta),
        AppEvent::SeekTo(position) => handle_seek_to(app, position),
        AppEvent::ChangeVolume(delta) => handle_change_volume(app, delta),
        AppEvent::SetVolume(level) => handle_set_volume(app, level),
        AppEvent::ToggleLike => handle_toggle_like(app),
        AppEvent::ToggleShuffle => handle_toggle_shuffle(app),
        AppEvent::CycleRepeat => handle_cycle_repeat(app),
        AppEvent::CreatePlaylist(name) => handle_create_playlist(app, &name),
        AppEvent::Player { generation, event } => handle_player_event(app, generation, event),
        AppEvent::Error(message) => handle_error(app, message),
    }

    Ok(true)
}

/// Applies a relative seek, keeping the result within `[0, duration]`.
pub(crate) fn clamp_seek(position: u64, delta: i64, duration: u64) -> u64 {
    position.saturating_add_signed(delta).min(duration)
}

/// Applies a relative volume change, keeping the result within `[0, 100]`.
pub(crate) fn adjust_volume(level: u8, delta: i16) -> u8 {
    (i16::from(level) + delta).clamp(0, 100) as u8
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::{
        config::AppConfig,
        model::catalog::Catalog,
        player::{PlayerState, RepeatMode, coordinator::tests::RecordingBackend},
    };

    pub(crate) fn app() -> App {
        let (event_tx, event_rx) = mpsc::channel();
        App::with_backend(
            AppConfig::default(),
            Catalog::builtin().unwrap(),
            Box::new(RecordingBackend::default()),
            event_tx,
            event_rx,
        )
    }

    /// Dispatches every queued event, returning `false` if the app asked to
    /// exit.
    pub(crate) fn pump(app: &mut App) -> bool {
        while let Ok(event) = app.event_rx.try_recv() {
            if !dispatch(app, event).unwrap() {
                return false;
            }
        }
        true
    }

    pub(crate) fn press(app: &mut App, code: KeyCode) -> bool {
        dispatch(app, AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
        pump(app)
    }

    #[test]
    fn seek_is_clamped_to_track() {
        assert_eq!(clamp_seek(10, -20, 200), 0);
        assert_eq!(clamp_seek(190, 20, 200), 200);
        assert_eq!(clamp_seek(50, 5, 200), 55);
    }

    #[test]
    fn volume_is_clamped() {
        assert_eq!(adjust_volume(3, -5), 0);
        assert_eq!(adjust_volume(98, 5), 100);
        assert_eq!(adjust_volume(75, 1), 76);
    }

    #[test]
    fn focus_toggles() {
        assert_eq!(Focus::Content.toggle(), Focus::Sidebar);
        assert_eq!(Focus::Sidebar.toggle(), Focus::Content);
    }

    #[test]
    fn quit_key_stops_the_loop() {
        let mut app = app();

        assert!(!press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn fatal_error_ends_dispatch_with_error() {
        let mut app = app();

        assert!(dispatch(&mut app, AppEvent::FatalError("worker died".to_string())).is_err());
    }

    #[test]
    fn transport_keys_drive_the_coordinator() {
        let mut app = app();

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.coordinator.state().player_state(), PlayerState::Playing);

        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.coordinator.state().current.as_ref().map(|t| t.id.as_str()), Some("2"));

        press(&mut app, KeyCode::Char('['));
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.coordinator.state().current.as_ref().map(|t| t.id.as_str()), Some("8"));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.coordinator.state().repeat, RepeatMode::All);

        press(&mut app, KeyCode::Char('z'));
        assert!(app.coordinator.state().shuffle);
    }

    #[test]
    fn seek_and_volume_keys_use_configured_steps() {
        let mut app = app();

        press(&mut app, KeyCode::Char('>'));
        assert_eq!(app.coordinator.state().position, 20);
        press(&mut app, KeyCode::Char(','));
        assert_eq!(app.coordinator.state().position, 15);
        press(&mut app, KeyCode::Char('<'));
        assert_eq!(app.coordinator.state().position, 0);

        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.coordinator.state().volume, 80);
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.coordinator.state().volume, 79);
    }

    #[test]
    fn player_events_reach_the_coordinator() {
        let mut app = app();
        app.coordinator.toggle_play_pause();
        let generation = app.coordinator.generation();

        dispatch(&mut app, AppEvent::Player { generation, event: PlayerEvent::TimeUpdate(42) }).unwrap();
        assert_eq!(app.coordinator.state().position, 42);

        dispatch(&mut app, AppEvent::Player { generation, event: PlayerEvent::Ended }).unwrap();
        assert_eq!(app.coordinator.state().current.as_ref().map(|t| t.id.as_str()), Some("2"));
        assert_eq!(app.coordinator.state().position, 0);
    }
}
