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

//! Input handling for the track table.
//!
//! Maps raw terminal keyboard events to table navigation and row activation.

use crossterm::event::{Event, KeyCode};

use crate::components::{TrackTable, TrackTableAction};

impl TrackTable {
    /// Returns `None` for keys the table does not use.
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<TrackTableAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.goto_next(),
            KeyCode::Char('k') | KeyCode::Up => self.goto_previous(),
            KeyCode::Char('g') | KeyCode::Home => self.goto_first(),
            KeyCode::Char('G') | KeyCode::End => self.goto_last(),

            KeyCode::Enter => {
                return self.selected_track().cloned().map(TrackTableAction::Activate);
            }

            _ => return None,
        }

        Some(TrackTableAction::Moved)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::model::catalog::Catalog;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn enter_activates_selected_track() {
        let catalog = Catalog::builtin().unwrap();
        let mut table = TrackTable::new();
        table.set_tracks(catalog.playlist_tracks("recent").unwrap().to_vec());

        assert!(matches!(table.process_event(&key(KeyCode::Down)), Some(TrackTableAction::Moved)));

        match table.process_event(&key(KeyCode::Enter)) {
            Some(TrackTableAction::Activate(track)) => assert_eq!(track.id, "4"),
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn unrelated_keys_are_not_consumed() {
        let mut table = TrackTable::new();

        assert!(table.process_event(&key(KeyCode::Char('q'))).is_none());
        assert!(table.process_event(&key(KeyCode::Enter)).is_none());
    }
}
