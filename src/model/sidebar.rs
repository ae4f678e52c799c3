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

//! Sidebar navigation state.
//!
//! Holds the session-local list of playlist stubs shown in the sidebar,
//! including those created by the user. Nothing here is persisted.

use chrono::Utc;

use crate::{model::PlaylistStub, route::Route};

/// A fixed navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NavItem {
    pub(crate) name: &'static str,
    pub(crate) route: Route,
}

pub(crate) fn navigation() -> Vec<NavItem> {
    vec![
        NavItem { name: "Home", route: Route::Home },
        NavItem { name: "Search", route: Route::Search },
        NavItem { name: "Your Library", route: Route::Library },
        NavItem { name: "Liked Songs", route: Route::Playlist("liked".to_string()) },
    ]
}

const INITIAL_PLAYLISTS: [(&str, &str); 7] = [
    ("Liked Songs", "liked"),
    ("Recently Played", "recent"),
    ("Made For You", "discover"),
    ("Discover Weekly", "discover"),
    ("My Playlist #1", "playlist1"),
    ("Chill Vibes", "chill"),
    ("Workout Mix", "workout"),
];

#[derive(Debug, Clone)]
pub(crate) struct Sidebar {
    playlists: Vec<PlaylistStub>,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::new()
    }
}

impl Sidebar {
    pub(crate) fn new() -> Self {
        Self {
            playlists: INITIAL_PLAYLISTS
                .iter()
                .map(|(name, id)| PlaylistStub {
                    id: id.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    pub(crate) fn playlists(&self) -> &[PlaylistStub] {
        &self.playlists
    }

    /// Appends a new playlist stub named after the trimmed input.
    ///
    /// Returns `None`, leaving the list untouched, when the trimmed name is
    /// empty. Identifiers are time based and not checked for collisions.
    pub(crate) fn create_playlist(&mut self, name: &str) -> Option<&PlaylistStub> {
        self.create_playlist_at(name, Utc::now().timestamp_millis())
    }

    fn create_playlist_at(&mut self, name: &str, millis: i64) -> Option<&PlaylistStub> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        self.playlists.push(PlaylistStub {
            id: format!("playlist-{millis}"),
            name: name.to_string(),
        });

        self.playlists.last()
    }
}
