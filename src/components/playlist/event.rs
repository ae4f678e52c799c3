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

//! Event routing for the playlist view.
//!
//! Delegates navigation to the track table and turns activation into a
//! play-track intent.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{
    components::{PlaylistView, TrackTableAction, ViewContext},
    events::{AppEvent, AppEventProcessor},
};

impl AppEventProcessor for PlaylistView {
    fn process_event(&mut self, event: &Event, ctx: ViewContext<'_>, event_tx: &Sender<AppEvent>) -> Result<bool> {
        if let Some(action) = self.track_table.process_event(event) {
            if let TrackTableAction::Activate(track) = action {
                event_tx.send(AppEvent::PlayTrack(track))?;
            }
            return Ok(true);
        }

        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        match key_event.code {
            KeyCode::Char(' ') => event_tx.send(AppEvent::TogglePause)?,
            KeyCode::Char('L') => self.liked = !self.liked,
            KeyCode::Char('p') => {
                let playlist = self.playlist(ctx.catalog);
                event_tx.send(AppEvent::PlayPlaylist(playlist.id.clone()))?;
            }
            _ => return Ok(false),
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::{channel, char_key, fixture, key};

    #[test]
    fn enter_plays_selected_track_only() {
        let (catalog, coordinator) = fixture();
        let ctx = ViewContext { catalog: &catalog, playback: coordinator.state() };
        let (tx, rx) = channel();
        let mut view = PlaylistView::new();
        view.open("workout", &catalog);

        view.process_event(&key(KeyCode::Down), ctx, &tx).unwrap();
        view.process_event(&key(KeyCode::Enter), ctx, &tx).unwrap();

        match rx.try_recv() {
            Ok(AppEvent::PlayTrack(track)) => assert_eq!(track.id, "5"),
            other => panic!("unexpected event {other:?}"),
        }
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn space_toggles_playback_and_l_toggles_heart() {
        let (catalog, coordinator) = fixture();
        let ctx = ViewContext { catalog: &catalog, playback: coordinator.state() };
        let (tx, rx) = channel();
        let mut view = PlaylistView::new();
        view.open("liked", &catalog);

        view.process_event(&char_key(' '), ctx, &tx).unwrap();
        assert!(matches!(rx.try_recv(), Ok(AppEvent::TogglePause)));

        assert!(!view.is_liked());
        view.process_event(&char_key('L'), ctx, &tx).unwrap();
        assert!(view.is_liked());

        view.open("recent", &catalog);
        assert!(!view.is_liked());
    }

    #[test]
    fn p_plays_whole_playlist() {
        let (catalog, coordinator) = fixture();
        let ctx = ViewContext { catalog: &catalog, playback: coordinator.state() };
        let (tx, rx) = channel();
        let mut view = PlaylistView::new();
        view.open("indie-mix", &catalog);

        view.process_event(&char_key('p'), ctx, &tx).unwrap();

        match rx.try_recv() {
            Ok(AppEvent::PlayPlaylist(id)) => assert_eq!(id, "indie-mix"),
            other => panic!("unexpected event {other:?}"),
        }
    }
}
