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

//! Home feed.
//!
//! A time-of-day greeting followed by three playlist sections. The cursor runs
//! over all sections as one list.

mod event;
mod render;

use crate::model::{Playlist, catalog::Catalog};

const QUICK_ACCESS_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HomeSection {
    QuickAccess,
    MadeForYou,
    RecentlyPlayed,
}

impl HomeSection {
    pub(crate) const ALL: [HomeSection; 3] = [
        HomeSection::QuickAccess,
        HomeSection::MadeForYou,
        HomeSection::RecentlyPlayed,
    ];

    pub(crate) fn title(self) -> &'static str {
        match self {
            HomeSection::QuickAccess => "Quick access",
            HomeSection::MadeForYou => "Made for you",
            HomeSection::RecentlyPlayed => "Recently played",
        }
    }

    pub(crate) fn playlists(self, catalog: &Catalog) -> &[Playlist] {
        match self {
            HomeSection::QuickAccess => {
                let playlists = catalog.playlists();
                &playlists[..playlists.len().min(QUICK_ACCESS_LEN)]
            }
            HomeSection::MadeForYou => catalog.playlists(),
            HomeSection::RecentlyPlayed => catalog.featured_playlists(),
        }
    }
}

/// Greeting for the given local hour (`0..24`).
pub(crate) fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

pub(crate) struct HomeView {
    selected: Option<usize>,
}

impl HomeView {
    pub(crate) fn new() -> Self {
        Self { selected: Some(0) }
    }

    fn entries(catalog: &Catalog) -> Vec<(HomeSection, &Playlist)> {
        HomeSection::ALL
            .iter()
            .flat_map(|&section| section.playlists(catalog).iter().map(move |p| (section, p)))
            .collect()
    }

    fn selected_playlist<'a>(&self, catalog: &'a Catalog) -> Option<&'a Playlist> {
        self.selected
            .and_then(|i| Self::entries(catalog).get(i).map(|(_, p)| *p))
    }
}
