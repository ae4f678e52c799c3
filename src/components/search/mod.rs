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

//! Track search.
//!
//! A text input over the library tracks. While the query is blank the view
//! shows the genre tiles and featured playlists instead of results.

mod event;
mod render;

use tui_input::Input;

use crate::{
    components::TrackTable,
    model::{catalog::Catalog, search::search_tracks},
};

pub(crate) struct SearchView {
    pub(crate) input: Input,
    editing: bool,
    results: TrackTable,
    featured_selected: Option<usize>,
}

impl SearchView {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
            editing: false,
            results: TrackTable::new(),
            featured_selected: Some(0),
        }
    }

    /// Called when the screen is entered; typing goes straight to the input.
    pub(crate) fn activate(&mut self) {
        self.editing = true;
    }

    #[cfg(test)]
    pub(crate) fn is_editing(&self) -> bool {
        self.editing
    }

    pub(crate) fn query(&self) -> &str {
        self.input.value()
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.query().trim().is_empty()
    }

    fn refresh(&mut self, catalog: &Catalog) {
        let tracks = search_tracks(catalog.library_tracks(), self.input.value())
            .into_iter()
            .cloned()
            .collect();
        self.results.set_tracks(tracks);
    }
}
