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

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tracing::debug;
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::{LibraryView, ViewContext, step_selection},
    events::{AppEvent, AppEventProcessor},
    model::search::LibraryEntry,
};

impl AppEventProcessor for LibraryView {
    fn process_event(&mut self, event: &Event, ctx: ViewContext<'_>, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if self.editing {
            match key_event.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Down => self.editing = false,
                _ => {
                    if self.input.handle_event(event).is_some() {
                        self.selected = Some(0);
                    }
                }
            }
            return Ok(true);
        }

        let len = self.entries(ctx.catalog).len();

        match key_event.code {
            KeyCode::Char('/') | KeyCode::Char('i') => self.editing = true,

            KeyCode::Char('t') => {
                self.filter = self.filter.next();
                self.selected = Some(0);
            }

            KeyCode::Char('j') | KeyCode::Down => self.selected = step_selection(self.selected, len, true),
            KeyCode::Char('k') | KeyCode::Up => self.selected = step_selection(self.selected, len, false),

            KeyCode::Enter => match self.selected_entry(ctx.catalog).inspect(|e| debug!(entry = e.id(), "Opening")) {
                Some(LibraryEntry::Playlist(playlist)) => {
                    event_tx.send(AppEvent::PlayPlaylist(playlist.id.clone()))?;
                }
                Some(LibraryEntry::Artist(artist)) => {
                    if let Some(track) = ctx.catalog.artist_top_tracks(&artist.id).and_then(|t| t.first()) {
                        event_tx.send(AppEvent::PlayTrack(track.clone()))?;
                    }
                }
                Some(LibraryEntry::Album(album)) => {
                    if let Some(track) = ctx.catalog.album_tracks(&album.id).and_then(|t| t.first()) {
                        event_tx.send(AppEvent::PlayTrack(track.clone()))?;
                    }
                }
                _ => {}
            },

            KeyCode::Char('f') => match self.selected_entry(ctx.catalog) {
                Some(LibraryEntry::Podcast(podcast)) => {
                    self.toggle_follow(podcast);
                    debug!(podcast_id = %podcast.id, following = self.is_following(podcast), "Toggled follow");
                }
                _ => return Ok(false),
            },

            _ => return Ok(false),
        }

        Ok(true)
    }
}
