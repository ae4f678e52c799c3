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

//! Command-line input logic and state management.
//!
//! This module implements the `:` command line: a text input component that
//! is parsed into an application event when a command is submitted.

use std::sync::mpsc::Sender;

use crossterm::event::{Event, KeyCode};
use tracing::debug;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{events::AppEvent, route::Route};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Returns `true` if the command line consumed the event.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.input.reset();
                self.active = false;
            }

            KeyCode::Enter => {
                if let Some(command) = parse_command(self.input.value()) {
                    debug!(command = self.input.value(), "Running command");
                    // A closed channel means the loop is already shutting down.
                    let _ = event_tx.send(command);
                }
                self.input.reset();
                self.active = false;
            }

            _ => {
                self.input.handle_event(event);
            }
        }

        true
    }
}

/// Parses a submitted command line. An empty line, or `new` without a name,
/// yields `None`.
pub(crate) fn parse_command(buffer: &str) -> Option<AppEvent> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let event = match parts.as_slice() {
        [] => return None,

        ["q"] => AppEvent::ExitApplication,

        ["go", path] => AppEvent::Navigate(Route::parse(path)),
        ["play", playlist_id] => AppEvent::PlayPlaylist(playlist_id.to_string()),
        ["track", track_id] => AppEvent::PlayTrackById(track_id.to_string()),
        ["new"] => return None,
        ["new", name @ ..] => AppEvent::CreatePlaylist(name.join(" ")),

        ["vol", level] => match level.parse::<u8>() {
            Ok(level) if level <= 100 => AppEvent::SetVolume(level),
            _ => AppEvent::Error(format!("Invalid volume: {level}")),
        },
        ["seek", position] => match position.parse::<u64>() {
            Ok(position) => AppEvent::SeekTo(position),
            Err(_) => AppEvent::Error(format!("Invalid position: {position}")),
        },

        ["next"] => AppEvent::Next,
        ["prev"] => AppEvent::Previous,
        ["pause"] => AppEvent::TogglePause,
        ["shuffle"] => AppEvent::ToggleShuffle,
        ["repeat"] => AppEvent::CycleRepeat,
        ["like"] => AppEvent::ToggleLike,

        [cmd, ..] => AppEvent::Error(format!("Unknown command: {cmd}")),
    };

    Some(event)
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn parses_navigation_and_playlist_commands() {
        assert!(matches!(
            parse_command("go /playlist/liked"),
            Some(AppEvent::Navigate(Route::Playlist(id))) if id == "liked"
        ));
        assert!(matches!(parse_command("go /nowhere"), Some(AppEvent::Navigate(Route::NotFound(_)))));
        assert!(matches!(parse_command("play chill"), Some(AppEvent::PlayPlaylist(id)) if id == "chill"));
        assert!(matches!(parse_command("track 7"), Some(AppEvent::PlayTrackById(id)) if id == "7"));
        assert!(matches!(parse_command("new  Road   Trip "), Some(AppEvent::CreatePlaylist(name)) if name == "Road Trip"));
    }

    #[test]
    fn new_without_name_is_ignored() {
        assert!(parse_command("new").is_none());
        assert!(parse_command("  new   ").is_none());
    }

    #[test]
    fn parses_transport_commands() {
        assert!(matches!(parse_command("vol 40"), Some(AppEvent::SetVolume(40))));
        assert!(matches!(parse_command("seek 90"), Some(AppEvent::SeekTo(90))));
        assert!(matches!(parse_command("next"), Some(AppEvent::Next)));
        assert!(matches!(parse_command("prev"), Some(AppEvent::Previous)));
        assert!(matches!(parse_command("pause"), Some(AppEvent::TogglePause)));
        assert!(matches!(parse_command("q"), Some(AppEvent::ExitApplication)));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_command("   ").is_none());
        assert!(matches!(parse_command("vol 101"), Some(AppEvent::Error(_))));
        assert!(matches!(parse_command("seek soon"), Some(AppEvent::Error(_))));
        assert!(matches!(parse_command("dance now"), Some(AppEvent::Error(msg)) if msg == "Unknown command: dance"));
    }

    #[test]
    fn colon_activates_and_enter_submits() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        assert!(!commander.handle_event(&key(KeyCode::Char('n')), &tx));
        assert!(commander.handle_event(&key(KeyCode::Char(':')), &tx));
        assert!(commander.active());

        for c in "next".chars() {
            assert!(commander.handle_event(&key(KeyCode::Char(c)), &tx));
        }
        assert!(commander.handle_event(&key(KeyCode::Enter), &tx));

        assert!(!commander.active());
        assert!(commander.input.value().is_empty());
        assert!(matches!(rx.try_recv(), Ok(AppEvent::Next)));
    }

    #[test]
    fn escape_cancels() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        commander.handle_event(&key(KeyCode::Char(':')), &tx);
        commander.handle_event(&key(KeyCode::Char('q')), &tx);
        assert!(commander.handle_event(&key(KeyCode::Esc), &tx));

        assert!(!commander.active());
        assert!(rx.try_recv().is_err());
    }
}
