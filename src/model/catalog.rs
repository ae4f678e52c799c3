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

//! Static media catalog.
//!
//! The catalog is built once from a [`Seed`], resolving every track reference
//! into an owned [`Track`] so that playlists, albums and artists carry their
//! tracks by value. After construction the catalog is read-only.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::model::{
    Album, Artist, Genre, Playlist, Podcast, Track,
    seed::{self, PlaylistRecord, Seed, TrackRecord},
};

pub(crate) const DEFAULT_PLAYLIST_ID: &str = "default";

const DEFAULT_PLAYLIST_COVER: &str =
    "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=300&h=300&fit=crop";

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CatalogError {
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("{owner} references unknown track {track_id}")]
    UnknownTrack { owner: String, track_id: String },

    #[error("invalid track {id}: {reason}")]
    InvalidTrack { id: String, reason: &'static str },
}

#[derive(Debug)]
pub(crate) struct Catalog {
    tracks: Vec<Track>,
    library_track_count: usize,
    playlists: Vec<Playlist>,
    featured_playlists: Vec<Playlist>,
    artists: Vec<Artist>,
    albums: Vec<Album>,
    podcasts: Vec<Podcast>,
    genres: Vec<Genre>,
    default_playlist: Playlist,
}

impl Catalog {
    /// Builds the catalog from the compiled-in seed data.
    pub(crate) fn builtin() -> Result<Self, CatalogError> {
        Self::from_seed(seed::builtin())
    }

    /// Validates a seed and resolves its cross references.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if any entity kind contains a duplicate id,
    /// if a record references a track that does not exist, or if a track has
    /// no duration or no audio source.
    pub(crate) fn from_seed(seed: Seed) -> Result<Self, CatalogError> {
        let library_track_count = seed.library_tracks.len();

        let tracks = seed
            .library_tracks
            .iter()
            .chain(seed.extra_tracks.iter())
            .map(to_track)
            .collect::<Result<Vec<_>, _>>()?;

        ensure_unique("track", tracks.iter().map(|t| t.id.as_str()))?;

        let index: HashMap<&str, &Track> = tracks.iter().map(|t| (t.id.as_str(), t)).collect();

        let resolve = |owner: &str, ids: &[&'static str]| -> Result<Vec<Track>, CatalogError> {
            ids.iter()
                .map(|id| {
                    index.get(id).map(|t| (*t).clone()).ok_or_else(|| CatalogError::UnknownTrack {
                        owner: owner.to_string(),
                        track_id: id.to_string(),
                    })
                })
                .collect()
        };

        let to_playlist = |record: &PlaylistRecord| -> Result<Playlist, CatalogError> {
            Ok(Playlist {
                id: record.id.to_string(),
                name: record.name.to_string(),
                description: record.description.to_string(),
                cover: record.cover.to_string(),
                tracks: resolve(&format!("playlist {}", record.id), &record.tracks)?,
            })
        };

        let playlists = seed.playlists.iter().map(&to_playlist).collect::<Result<Vec<_>, _>>()?;
        let featured_playlists = seed
            .featured_playlists
            .iter()
            .map(&to_playlist)
            .collect::<Result<Vec<_>, _>>()?;

        ensure_unique(
            "playlist",
            playlists
                .iter()
                .chain(featured_playlists.iter())
                .map(|p| p.id.as_str())
                .chain(std::iter::once(DEFAULT_PLAYLIST_ID)),
        )?;

        let artists = seed
            .artists
            .iter()
            .map(|record| -> Result<Artist, CatalogError> {
                Ok(Artist {
                    id: record.id.to_string(),
                    name: record.name.to_string(),
                    description: record.description.to_string(),
                    image: record.image.to_string(),
                    followers: record.followers,
                    monthly_listeners: record.monthly_listeners,
                    top_tracks: resolve(&format!("artist {}", record.id), &record.top_tracks)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        ensure_unique("artist", artists.iter().map(|a| a.id.as_str()))?;

        let albums = seed
            .albums
            .iter()
            .map(|record| -> Result<Album, CatalogError> {
                Ok(Album {
                    id: record.id.to_string(),
                    title: record.title.to_string(),
                    artist: record.artist.to_string(),
                    year: record.year,
                    genre: record.genre.to_string(),
                    cover: record.cover.to_string(),
                    tracks: resolve(&format!("album {}", record.id), &record.tracks)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        ensure_unique("album", albums.iter().map(|a| a.id.as_str()))?;

        let podcasts: Vec<Podcast> = seed
            .podcasts
            .iter()
            .map(|record| Podcast {
                id: record.id.to_string(),
                title: record.title.to_string(),
                host: record.host.to_string(),
                description: record.description.to_string(),
                cover: record.cover.to_string(),
                episodes: record.episodes,
                category: record.category.to_string(),
                is_following: record.is_following,
            })
            .collect();
        ensure_unique("podcast", podcasts.iter().map(|p| p.id.as_str()))?;

        let genres = seed
            .genres
            .iter()
            .map(|name| Genre { name: name.to_string() })
            .collect();

        let default_playlist = Playlist {
            id: DEFAULT_PLAYLIST_ID.to_string(),
            name: "My Playlist".to_string(),
            description: "A collection of great songs".to_string(),
            cover: DEFAULT_PLAYLIST_COVER.to_string(),
            tracks: tracks[..library_track_count].to_vec(),
        };

        Ok(Self {
            tracks,
            library_track_count,
            playlists,
            featured_playlists,
            artists,
            albums,
            podcasts,
            genres,
            default_playlist,
        })
    }

    pub(crate) fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// The tracks that make up the default play queue.
    pub(crate) fn library_tracks(&self) -> &[Track] {
        &self.tracks[..self.library_track_count]
    }

    pub(crate) fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub(crate) fn featured_playlists(&self) -> &[Playlist] {
        &self.featured_playlists
    }

    pub(crate) fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub(crate) fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub(crate) fn podcasts(&self) -> &[Podcast] {
        &self.podcasts
    }

    pub(crate) fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub(crate) fn track(&self, id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Looks up a playlist, user playlists first and then featured ones. The
    /// reserved default id resolves to the built-in default playlist.
    pub(crate) fn playlist(&self, id: &str) -> Option<&Playlist> {
        self.playlists
            .iter()
            .chain(self.featured_playlists.iter())
            .chain(std::iter::once(&self.default_playlist))
            .find(|p| p.id == id)
    }

    pub(crate) fn artist(&self, id: &str) -> Option<&Artist> {
        self.artists.iter().find(|a| a.id == id)
    }

    pub(crate) fn album(&self, id: &str) -> Option<&Album> {
        self.albums.iter().find(|a| a.id == id)
    }

    #[cfg(test)]
    pub(crate) fn podcast(&self, id: &str) -> Option<&Podcast> {
        self.podcasts.iter().find(|p| p.id == id)
    }

    pub(crate) fn playlist_tracks(&self, id: &str) -> Option<&[Track]> {
        self.playlist(id).map(|p| p.tracks.as_slice())
    }

    pub(crate) fn album_tracks(&self, id: &str) -> Option<&[Track]> {
        self.album(id).map(|a| a.tracks.as_slice())
    }

    pub(crate) fn artist_top_tracks(&self, id: &str) -> Option<&[Track]> {
        self.artist(id).map(|a| a.top_tracks.as_slice())
    }

    /// Looks up a playlist, substituting the built-in default playlist for an
    /// unknown id.
    pub(crate) fn playlist_or_default(&self, id: &str) -> &Playlist {
        self.playlist(id).unwrap_or(&self.default_playlist)
    }
}

fn to_track(record: &TrackRecord) -> Result<Track, CatalogError> {
    if record.duration == 0 {
        return Err(CatalogError::InvalidTrack {
            id: record.id.to_string(),
            reason: "zero duration",
        });
    }

    if record.audio_url.trim().is_empty() {
        return Err(CatalogError::InvalidTrack {
            id: record.id.to_string(),
            reason: "missing audio source",
        });
    }

    Ok(Track {
        id: record.id.to_string(),
        title: record.title.to_string(),
        artist: record.artist.to_string(),
        album: record.album.to_string(),
        duration: record.duration,
        cover: record.cover.to_string(),
        audio_url: record.audio_url.clone(),
    })
}

fn ensure_unique<'a>(kind: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId { kind, id: id.to_string() });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed::TrackRecord;

    fn record(id: &'static str, duration: u64) -> TrackRecord {
        TrackRecord {
            id,
            title: "Title",
            artist: "Artist",
            album: "Album",
            duration,
            cover: "cover",
            audio_url: format!("https://example.com/{id}.mp3"),
        }
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();

        assert_eq!(catalog.tracks().len(), 16);
        assert_eq!(catalog.library_tracks().len(), 8);
        assert_eq!(catalog.playlists().len(), 4);
        assert_eq!(catalog.featured_playlists().len(), 4);
        assert_eq!(catalog.artists().len(), 6);
        assert_eq!(catalog.albums().len(), 6);
        assert_eq!(catalog.podcasts().len(), 6);
        assert_eq!(catalog.genres().len(), 8);
    }

    #[test]
    fn liked_playlist_holds_first_four_library_tracks() {
        let catalog = Catalog::builtin().unwrap();
        let liked = catalog.playlist_tracks("liked").unwrap();

        assert_eq!(liked, &catalog.library_tracks()[0..4]);
    }

    #[test]
    fn featured_playlists_are_found_by_id() {
        let catalog = Catalog::builtin().unwrap();
        let workout = catalog.playlist("workout").unwrap();

        assert_eq!(workout.name, "Workout Beats");
        let ids: Vec<&str> = workout.tracks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["4", "5", "11", "13"]);
    }

    #[test]
    fn unknown_playlist_falls_back_to_default() {
        let catalog = Catalog::builtin().unwrap();

        assert!(catalog.playlist("playlist1").is_none());

        let fallback = catalog.playlist_or_default("playlist1");
        assert_eq!(fallback.id, DEFAULT_PLAYLIST_ID);
        assert_eq!(fallback.name, "My Playlist");
        assert_eq!(fallback.tracks, catalog.library_tracks());
        assert_eq!(catalog.playlist(DEFAULT_PLAYLIST_ID), Some(fallback));
    }

    #[test]
    fn composition_lookups() {
        let catalog = Catalog::builtin().unwrap();

        let sour: Vec<&str> = catalog
            .album_tracks("sour")
            .unwrap()
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(sour, ["Good 4 U", "drivers license"]);

        let adele = catalog.artist_top_tracks("adele").unwrap();
        assert_eq!(adele.len(), 2);
        assert_eq!(adele[1].title, "Hello");

        assert!(catalog.album_tracks("missing").is_none());
        assert!(catalog.track("99").is_none());
        assert_eq!(catalog.podcast("serial").unwrap().episodes, 50);
    }

    #[test]
    fn rejects_duplicate_track_ids() {
        let seed = Seed {
            library_tracks: vec![record("1", 100), record("1", 120)],
            ..Seed::default()
        };

        assert_eq!(
            Catalog::from_seed(seed).unwrap_err(),
            CatalogError::DuplicateId { kind: "track", id: "1".to_string() }
        );
    }

    #[test]
    fn rejects_unknown_track_reference() {
        let seed = Seed {
            library_tracks: vec![record("1", 100)],
            playlists: vec![PlaylistRecord {
                id: "p",
                name: "P",
                description: "",
                cover: "",
                tracks: vec!["1", "2"],
            }],
            ..Seed::default()
        };

        assert_eq!(
            Catalog::from_seed(seed).unwrap_err(),
            CatalogError::UnknownTrack { owner: "playlist p".to_string(), track_id: "2".to_string() }
        );
    }

    #[test]
    fn rejects_zero_duration_track() {
        let seed = Seed {
            library_tracks: vec![record("1", 0)],
            ..Seed::default()
        };

        assert!(matches!(
            Catalog::from_seed(seed),
            Err(CatalogError::InvalidTrack { reason: "zero duration", .. })
        ));
    }

    #[test]
    fn rejects_playlist_shadowing_default_id() {
        let seed = Seed {
            library_tracks: vec![record("1", 100)],
            featured_playlists: vec![PlaylistRecord {
                id: DEFAULT_PLAYLIST_ID,
                name: "Shadow",
                description: "",
                cover: "",
                tracks: vec!["1"],
            }],
            ..Seed::default()
        };

        assert!(matches!(
            Catalog::from_seed(seed),
            Err(CatalogError::DuplicateId { kind: "playlist", .. })
        ));
    }
}
