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
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    components::{SidebarView, ViewContext, step_selection},
    events::{AppEvent, AppEventProcessor},
};

impl SidebarView {
    /// Handles a key while the create dialog is open. The dialog is modal, so
    /// every key is consumed.
    pub(crate) fn process_dialog_event(&mut self, event: &Event) {
        let Some(input) = self.dialog.as_mut() else {
            return;
        };

        let Event::Key(key_event) = event else {
            return;
        };

        match key_event.code {
            KeyCode::Esc => self.dialog = None,
            KeyCode::Enter => {
                let name = input.value().to_string();
                if self.create_playlist(&name) {
                    self.dialog = None;
                }
            }
            _ => {
                input.handle_event(event);
            }
        }
    }

    pub(crate) fn dialog_input(&self) -> Option<&Input> {
        self.dialog.as_ref()
    }
}

impl AppEventProcessor for SidebarView {
    fn process_event(&mut self, event: &Event, _ctx: ViewContext<'_>, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.selected = step_selection(self.selected, self.len(), true),
            KeyCode::Char('k') | KeyCode::Up => self.selected = step_selection(self.selected, self.len(), false),

            KeyCode::Enter => {
                if let Some(route) = self.selected.and_then(|i| self.route_at(i)) {
                    event_tx.send(AppEvent::Navigate(route))?;
                }
            }

            KeyCode::Char('c') => self.dialog = Some(Input::default()),

            _ => return Ok(false),
        }

        Ok(true)
    }
}
