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

use crate::{
    components::{HomeView, ViewContext, step_selection},
    events::{AppEvent, AppEventProcessor},
    route::Route,
};

impl AppEventProcessor for HomeView {
    fn process_event(&mut self, event: &Event, ctx: ViewContext<'_>, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        let len = Self::entries(ctx.catalog).len();

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.selected = step_selection(self.selected, len, true),
            KeyCode::Char('k') | KeyCode::Up => self.selected = step_selection(self.selected, len, false),

            KeyCode::Enter => {
                if let Some(playlist) = self.selected_playlist(ctx.catalog) {
                    event_tx.send(AppEvent::Navigate(Route::Playlist(playlist.id.clone())))?;
                }
            }

            KeyCode::Char('p') => {
                if let Some(playlist) = self.selected_playlist(ctx.catalog) {
                    event_tx.send(AppEvent::PlayPlaylist(playlist.id.clone()))?;
                }
            }

            _ => return Ok(false),
        }

        Ok(true)
    }
}
