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

//! Library browser.
//!
//! Lists playlists, artists, albums and podcasts, narrowed by a text filter and
//! a kind tag. Podcast follow flags start from the catalog and then live here
//! for the rest of the session.

mod event;
mod render;

use std::collections::HashMap;

use tui_input::Input;

use crate::model::{
    Podcast,
    catalog::Catalog,
    search::{LibraryEntry, LibraryFilter, library_entries},
};

pub(crate) struct LibraryView {
    pub(crate) input: Input,
    editing: bool,
    filter: LibraryFilter,
    selected: Option<usize>,
    following: HashMap<String, bool>,
}

impl LibraryView {
    pub(crate) fn new(catalog: &Catalog) -> Self {
        Self {
            input: Input::default(),
            editing: false,
            filter: LibraryFilter::default(),
            selected: Some(0),
            following: catalog
                .podcasts()
                .iter()
                .map(|p| (p.id.clone(), p.is_following))
                .collect(),
        }
    }

    #[cfg(test)]
    pub(crate) fn is_editing(&self) -> bool {
        self.editing
    }

    #[cfg(test)]
    pub(crate) fn filter(&self) -> LibraryFilter {
        self.filter
    }

    pub(crate) fn is_following(&self, podcast: &Podcast) -> bool {
        self.following.get(&podcast.id).copied().unwrap_or(podcast.is_following)
    }

    fn toggle_follow(&mut self, podcast: &Podcast) {
        let following = !self.is_following(podcast);
        self.following.insert(podcast.id.clone(), following);
    }

    fn entries<'a>(&self, catalog: &'a Catalog) -> Vec<LibraryEntry<'a>> {
        library_entries(catalog, self.input.value().trim(), self.filter)
    }

    fn selected_entry<'a>(&self, catalog: &'a Catalog) -> Option<LibraryEntry<'a>> {
        self.selected.and_then(|i| self.entries(catalog).get(i).copied())
    }

    /// True when a non-blank query matched nothing.
    fn has_no_results(&self, entries: &[LibraryEntry<'_>]) -> bool {
        entries.is_empty() && !self.input.value().trim().is_empty()
    }
}
