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

//! Catalog search and library filtering.
//!
//! All matching is a case-insensitive substring test over one or more text
//! fields. Results keep catalog order; there is no ranking.

use crate::model::{Album, Artist, Playlist, Podcast, Track, catalog::Catalog};

/// The filter tags shown above the library listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum LibraryFilter {
    #[default]
    All,
    Playlists,
    Artists,
    Albums,
    Podcasts,
}

impl LibraryFilter {
    pub(crate) const ALL: [LibraryFilter; 5] = [
        LibraryFilter::All,
        LibraryFilter::Playlists,
        LibraryFilter::Artists,
        LibraryFilter::Albums,
        LibraryFilter::Podcasts,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            LibraryFilter::All => "All",
            LibraryFilter::Playlists => "Playlists",
            LibraryFilter::Artists => "Artists",
            LibraryFilter::Albums => "Albums",
            LibraryFilter::Podcasts => "Podcasts",
        }
    }

    pub(crate) fn next(self) -> Self {
        match self {
            LibraryFilter::All => LibraryFilter::Playlists,
            LibraryFilter::Playlists => LibraryFilter::Artists,
            LibraryFilter::Artists => LibraryFilter::Albums,
            LibraryFilter::Albums => LibraryFilter::Podcasts,
            LibraryFilter::Podcasts => LibraryFilter::All,
        }
    }

    fn shows(self, kind: LibraryFilter) -> bool {
        self == LibraryFilter::All || self == kind
    }
}

/// One row of the library listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LibraryEntry<'a> {
    Playlist(&'a Playlist),
    Artist(&'a Artist),
    Album(&'a Album),
    Podcast(&'a Podcast),
}

impl<'a> LibraryEntry<'a> {
    pub(crate) fn id(&self) -> &'a str {
        match *self {
            LibraryEntry::Playlist(p) => &p.id,
            LibraryEntry::Artist(a) => &a.id,
            LibraryEntry::Album(a) => &a.id,
            LibraryEntry::Podcast(p) => &p.id,
        }
    }
}

/// Case-insensitive substring test; an empty needle matches everything.
pub(crate) fn matches(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Tracks whose title, artist or album contains the query.
///
/// A blank query yields no results rather than the whole catalog.
pub(crate) fn search_tracks<'a>(tracks: &'a [Track], query: &str) -> Vec<&'a Track> {
    if query.trim().is_empty() {
        return vec![];
    }

    tracks
        .iter()
        .filter(|t| matches(&t.title, query) || matches(&t.artist, query) || matches(&t.album, query))
        .collect()
}

/// Filters the library by text and tag, listing playlists, artists, albums
/// and podcasts in that order.
pub(crate) fn library_entries<'a>(
    catalog: &'a Catalog,
    query: &str,
    filter: LibraryFilter,
) -> Vec<LibraryEntry<'a>> {
    let mut entries = Vec::new();

    if filter.shows(LibraryFilter::Playlists) {
        entries.extend(
            catalog
                .playlists()
                .iter()
                .filter(|p| matches(&p.name, query))
                .map(LibraryEntry::Playlist),
        );
    }

    if filter.shows(LibraryFilter::Artists) {
        entries.extend(
            catalog
                .artists()
                .iter()
                .filter(|a| matches(&a.name, query))
                .map(LibraryEntry::Artist),
        );
    }

    if filter.shows(LibraryFilter::Albums) {
        entries.extend(
            catalog
                .albums()
                .iter()
                .filter(|a| matches(&a.title, query) || matches(&a.artist, query))
                .map(LibraryEntry::Album),
        );
    }

    if filter.shows(LibraryFilter::Podcasts) {
        entries.extend(
            catalog
                .podcasts()
                .iter()
                .filter(|p| matches(&p.title, query) || matches(&p.host, query))
                .map(LibraryEntry::Podcast),
        );
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn search_by_artist_is_case_insensitive() {
        let catalog = catalog();
        let results = search_tracks(catalog.library_tracks(), "rodrigo");

        let expected: Vec<&Track> = catalog
            .library_tracks()
            .iter()
            .filter(|t| t.artist.to_lowercase().contains("rodrigo"))
            .collect();

        assert_eq!(results, expected);
        let titles: Vec<&str> = results.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Good 4 U", "drivers license"]);
    }

    #[test]
    fn search_matches_title_and_album() {
        let catalog = catalog();

        let by_title = search_tracks(catalog.library_tracks(), "LIGHTS");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, "1");

        let by_album = search_tracks(catalog.library_tracks(), "dreamland");
        let ids: Vec<&str> = by_album.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["6"]);
    }

    #[test]
    fn blank_search_has_no_results() {
        let catalog = catalog();

        assert!(search_tracks(catalog.library_tracks(), "").is_empty());
        assert!(search_tracks(catalog.library_tracks(), "   ").is_empty());
    }

    #[test]
    fn unfiltered_library_lists_everything_in_kind_order() {
        let catalog = catalog();
        let entries = library_entries(&catalog, "", LibraryFilter::All);

        assert_eq!(entries.len(), 4 + 6 + 6 + 6);
        assert!(matches!(entries[0], LibraryEntry::Playlist(_)));
        assert!(matches!(entries[4], LibraryEntry::Artist(_)));
        assert!(matches!(entries[10], LibraryEntry::Album(_)));
        assert!(matches!(entries[16], LibraryEntry::Podcast(_)));
    }

    #[test]
    fn library_filter_tag_restricts_kind() {
        let catalog = catalog();
        let entries = library_entries(&catalog, "", LibraryFilter::Podcasts);

        assert_eq!(entries.len(), 6);
        assert!(entries.iter().all(|e| matches!(e, LibraryEntry::Podcast(_))));
    }

    #[test]
    fn library_text_matches_album_artist_and_podcast_host() {
        let catalog = catalog();

        let adele: Vec<&str> = library_entries(&catalog, "adele", LibraryFilter::All)
            .iter()
            .map(|e| e.id())
            .collect();
        assert_eq!(adele, ["adele", "25"]);

        let hosts: Vec<&str> = library_entries(&catalog, "sean hayes", LibraryFilter::Podcasts)
            .iter()
            .map(|e| e.id())
            .collect();
        assert_eq!(hosts, ["smartless"]);
    }

    #[test]
    fn library_without_matches_is_empty() {
        let catalog = catalog();

        assert!(library_entries(&catalog, "zzz", LibraryFilter::All).is_empty());
    }

    #[test]
    fn filter_tags_cycle() {
        let mut filter = LibraryFilter::default();
        for expected in LibraryFilter::ALL.iter().skip(1) {
            filter = filter.next();
            assert_eq!(filter, *expected);
        }
        assert_eq!(filter.next(), LibraryFilter::All);
    }
}
