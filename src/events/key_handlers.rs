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

//! Keyboard routing.
//!
//! A key press is offered, in order, to the command line, to the create
//! playlist dialog (which is modal), and to the focused pane. Whatever none of
//! those consume falls through to the global bindings.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};

use crate::{
    App,
    components::ViewContext,
    events::{AppEvent, AppEventProcessor, Focus},
    route::Route,
};

/// Maps keyboard input to application actions and playback intents.
///
/// # Errors
///
/// Returns an error if an intent cannot be sent on the event channel.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    app.status = None;

    let event = Event::Key(key);
    if app.commander.handle_event(&event, &app.event_tx) {
        return Ok(());
    }

    if app.sidebar_view.is_dialog_open() {
        app.sidebar_view.process_dialog_event(&event);
        return Ok(());
    }

    let ctx = ViewContext {
        catalog: &app.catalog,
        playback: app.coordinator.state(),
    };

    let consumed = match app.focus {
        Focus::Sidebar => app.sidebar_view.process_event(&event, ctx, &app.event_tx)?,
        Focus::Content => match &app.route {
            Route::Home => app.home_view.process_event(&event, ctx, &app.event_tx)?,
            Route::Search => app.search_view.process_event(&event, ctx, &app.event_tx)?,
            Route::Library => app.library_view.process_event(&event, ctx, &app.event_tx)?,
            Route::Playlist(_) => app.playlist_view.process_event(&event, ctx, &app.event_tx)?,
            Route::NotFound(_) => false,
        },
    };

    if consumed {
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let fine_seek = app.config.fine_seek_step as i64;
    let seek = app.config.seek_step as i64;
    let fine_volume = i16::from(app.config.fine_volume_step);
    let volume = i16::from(app.config.volume_step);

    let event = match key.code {
        KeyCode::Char('q') => AppEvent::ExitApplication,

        KeyCode::Tab | KeyCode::BackTab => {
            app.focus = app.focus.toggle();
            return Ok(());
        }

        KeyCode::Char('1') => AppEvent::Navigate(Route::Home),
        KeyCode::Char('2') => AppEvent::Navigate(Route::Search),
        KeyCode::Char('3') => AppEvent::Navigate(Route::Library),

        KeyCode::Char(' ') => AppEvent::TogglePause,
        KeyCode::Char(']') => AppEvent::Next,
        KeyCode::Char('[') => AppEvent::Previous,

        KeyCode::Char(',') => AppEvent::SeekBy(-fine_seek),
        KeyCode::Char('.') => AppEvent::SeekBy(fine_seek),
        KeyCode::Char('<') => AppEvent::SeekBy(-seek),
        KeyCode::Char('>') => AppEvent::SeekBy(seek),

        KeyCode::Char('-') => AppEvent::ChangeVolume(-fine_volume),
        KeyCode::Char('=') => AppEvent::ChangeVolume(fine_volume),
        KeyCode::Char('_') => AppEvent::ChangeVolume(-volume),
        KeyCode::Char('+') => AppEvent::ChangeVolume(volume),

        KeyCode::Char('r') => AppEvent::CycleRepeat,
        KeyCode::Char('z') => AppEvent::ToggleShuffle,
        KeyCode::Char('f') => AppEvent::ToggleLike,

        _ => return Ok(()),
    };

    app.event_tx.send(event)?;
    Ok(())
}
