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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, such as
//! Tracks, Playlists, Artists, Albums and Podcasts, representing the static
//! catalog the rest of the application browses and plays.
//!
//! Every record is immutable once the [`catalog::Catalog`] has been built;
//! the only session-local mutable state (user playlist stubs, podcast follow
//! flags) is owned by the component that created it.

pub(crate) mod catalog;
pub(crate) mod queue;
pub(crate) mod search;
pub(crate) mod seed;
pub(crate) mod sidebar;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Track {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) album: String,
    /// Duration in seconds.
    pub(crate) duration: u64,
    pub(crate) cover: String,
    pub(crate) audio_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Playlist {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) cover: String,
    pub(crate) tracks: Vec<Track>,
}

impl Playlist {
    /// Total running time of all tracks, in seconds.
    pub(crate) fn total_duration(&self) -> u64 {
        self.tracks.iter().map(|t| t.duration).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Artist {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) image: String,
    pub(crate) followers: u64,
    pub(crate) monthly_listeners: u64,
    pub(crate) top_tracks: Vec<Track>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Album {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) year: u16,
    pub(crate) genre: String,
    pub(crate) cover: String,
    pub(crate) tracks: Vec<Track>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Podcast {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) host: String,
    pub(crate) description: String,
    pub(crate) cover: String,
    pub(crate) episodes: u32,
    pub(crate) category: String,
    pub(crate) is_following: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Genre {
    pub(crate) name: String,
}

/// A sidebar entry linking to `/playlist/:id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlaylistStub {
    pub(crate) id: String,
    pub(crate) name: String,
}
