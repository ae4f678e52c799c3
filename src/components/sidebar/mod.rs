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

//! Sidebar navigation and the create-playlist dialog.

mod event;
mod render;

use tracing::info;
use tui_input::Input;

use crate::{
    model::sidebar::{NavItem, Sidebar, navigation},
    route::Route,
};

pub(crate) struct SidebarView {
    sidebar: Sidebar,
    nav: Vec<NavItem>,
    selected: Option<usize>,
    dialog: Option<Input>,
}

impl SidebarView {
    pub(crate) fn new() -> Self {
        Self {
            sidebar: Sidebar::new(),
            nav: navigation(),
            selected: Some(0),
            dialog: None,
        }
    }

    pub(crate) fn is_dialog_open(&self) -> bool {
        self.dialog.is_some()
    }

    #[cfg(test)]
    pub(crate) fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    /// Creates a playlist stub, returning whether the name was accepted.
    pub(crate) fn create_playlist(&mut self, name: &str) -> bool {
        match self.sidebar.create_playlist(name) {
            Some(stub) => {
                info!(playlist_id = %stub.id, name = %stub.name, "Created playlist");
                true
            }
            None => false,
        }
    }

    fn len(&self) -> usize {
        self.nav.len() + self.sidebar.playlists().len()
    }

    fn route_at(&self, index: usize) -> Option<Route> {
        match self.nav.get(index) {
            Some(item) => Some(item.route.clone()),
            None => self
                .sidebar
                .playlists()
                .get(index - self.nav.len())
                .map(|stub| Route::Playlist(stub.id.clone())),
        }
    }
}
