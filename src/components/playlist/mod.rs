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

//! Playlist detail screen.
//!
//! Shows one playlist's header and track table. Unknown ids resolve to the
//! built-in default playlist rather than an error.

mod event;
mod render;

use crate::{
    components::TrackTable,
    model::{Playlist, catalog::Catalog},
};

pub(crate) struct PlaylistView {
    playlist_id: String,
    pub(crate) track_table: TrackTable,
    liked: bool,
}

impl PlaylistView {
    pub(crate) fn new() -> Self {
        Self {
            playlist_id: String::new(),
            track_table: TrackTable::new(),
            liked: false,
        }
    }

    /// Shows the playlist with the given id, resetting the cursor and the
    /// view-local heart.
    pub(crate) fn open(&mut self, playlist_id: &str, catalog: &Catalog) {
        let playlist = catalog.playlist_or_default(playlist_id);

        self.playlist_id = playlist_id.to_string();
        self.track_table.set_tracks(playlist.tracks.clone());
        self.liked = false;
    }

    pub(crate) fn playlist<'a>(&self, catalog: &'a Catalog) -> &'a Playlist {
        catalog.playlist_or_default(&self.playlist_id)
    }

    pub(crate) fn is_liked(&self) -> bool {
        self.liked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::DEFAULT_PLAYLIST_ID;

    #[test]
    fn open_loads_playlist_tracks() {
        let catalog = Catalog::builtin().unwrap();
        let mut view = PlaylistView::new();

        view.open("chill", &catalog);

        assert_eq!(view.playlist(&catalog).name, "Chill Vibes");
        assert_eq!(view.track_table.tracks(), catalog.playlist_tracks("chill").unwrap());
    }

    #[test]
    fn unknown_id_shows_default_playlist() {
        let catalog = Catalog::builtin().unwrap();
        let mut view = PlaylistView::new();

        view.open("playlist-1700000000000", &catalog);

        assert_eq!(view.playlist(&catalog).id, DEFAULT_PLAYLIST_ID);
        assert_eq!(view.track_table.tracks().len(), 8);
    }
}
