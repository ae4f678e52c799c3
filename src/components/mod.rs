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

//! Screen components.
//!
//! Each view keeps its own UI state (cursor, filter text, view-local flags),
//! reads the catalog and the playback state through a [`ViewContext`], and
//! turns key presses into [`AppEvent`](crate::events::AppEvent) intents. Views
//! never mutate playback state themselves.

mod home;
mod library;
mod playlist;
mod search;
mod sidebar;
mod track_table;

pub(crate) use home::HomeView;
pub(crate) use library::LibraryView;
pub(crate) use playlist::PlaylistView;
pub(crate) use search::SearchView;
pub(crate) use sidebar::SidebarView;
pub(crate) use track_table::{TrackTable, TrackTableAction};

use crate::{model::catalog::Catalog, player::coordinator::PlaybackState};

/// Read-only state handed to views while handling input and drawing.
#[derive(Clone, Copy)]
pub(crate) struct ViewContext<'a> {
    pub(crate) catalog: &'a Catalog,
    pub(crate) playback: &'a PlaybackState,
}

/// Moves a list cursor one step, wrapping at either end.
pub(crate) fn step_selection(selected: Option<usize>, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let i = match (selected, forward) {
        (None, _) => 0,
        (Some(i), true) if i + 1 >= len => 0,
        (Some(i), true) => i + 1,
        (Some(0), false) => len - 1,
        (Some(i), false) => (i - 1).min(len - 1),
    };

    Some(i)
}

#[cfg(test)]
pub(crate) mod testing {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
    use std::sync::mpsc::{self, Receiver, Sender};

    use crate::{
        events::AppEvent,
        model::catalog::Catalog,
        player::coordinator::{Coordinator, tests::RecordingBackend},
    };

    pub(crate) fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    pub(crate) fn char_key(c: char) -> Event {
        key(KeyCode::Char(c))
    }

    pub(crate) fn channel() -> (Sender<AppEvent>, Receiver<AppEvent>) {
        mpsc::channel()
    }

    pub(crate) fn fixture() -> (Catalog, Coordinator<RecordingBackend>) {
        let catalog = Catalog::builtin().unwrap();
        let coordinator = Coordinator::new(RecordingBackend::default(), catalog.library_tracks().to_vec(), 75);
        (catalog, coordinator)
    }
}
