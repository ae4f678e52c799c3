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

//! Screen routing.
//!
//! Screens are addressed by path, `/playlist/:id` being the only parameterised
//! route. Anything unrecognised lands on [`Route::NotFound`].

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Route {
    Home,
    Search,
    Library,
    Playlist(String),
    NotFound(String),
}

impl Route {
    pub(crate) fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalised = match trimmed.trim_end_matches('/') {
            "" => "/",
            p => p,
        };

        match normalised {
            "/" => Route::Home,
            "/search" => Route::Search,
            "/library" => Route::Library,
            p => match p.strip_prefix("/playlist/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Route::Playlist(id.to_string()),
                _ => Route::NotFound(trimmed.to_string()),
            },
        }
    }

    pub(crate) fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Search => "/search".to_string(),
            Route::Library => "/library".to_string(),
            Route::Playlist(id) => format!("/playlist/{id}"),
            Route::NotFound(path) => path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_static_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/search"), Route::Search);
        assert_eq!(Route::parse("/library/"), Route::Library);
    }

    #[test]
    fn parses_playlist_route() {
        assert_eq!(Route::parse("/playlist/liked"), Route::Playlist("liked".to_string()));
        assert_eq!(
            Route::parse("/playlist/playlist-1700000000000"),
            Route::Playlist("playlist-1700000000000".to_string())
        );
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::parse("/nope"), Route::NotFound("/nope".to_string()));
        assert_eq!(Route::parse("/playlist/"), Route::NotFound("/playlist/".to_string()));
        assert_eq!(Route::parse("/playlist/a/b"), Route::NotFound("/playlist/a/b".to_string()));
    }

    #[test]
    fn path_round_trips() {
        for route in [
            Route::Home,
            Route::Search,
            Route::Library,
            Route::Playlist("chill".to_string()),
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }
}
