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

use tracing::{debug, info, warn};

use crate::{
    App,
    events::{Focus, adjust_volume, clamp_seek},
    model::Track,
    player::{LoadGeneration, PlayerEvent},
    route::Route,
};

pub(super) fn handle_tick(_app: &mut App) {}

pub(super) fn handle_navigate(app: &mut App, route: Route) {
    info!(path = %route.path(), "Navigating");

    match &route {
        Route::Playlist(id) => app.playlist_view.open(id, &app.catalog),
        Route::Search => app.search_view.activate(),
        _ => {}
    }

    app.route = route;
    app.focus = Focus::Content;
}

pub(super) fn handle_play_track(app: &mut App, track: Track) {
    app.coordinator.play_track(track);
}

pub(super) fn handle_play_track_by_id(app: &mut App, track_id: &str) {
    match app.catalog.track(track_id) {
        Some(track) => app.coordinator.play_track(track.clone()),
        None => debug!(track_id, "Ignoring play request for unknown track"),
    }
}

pub(super) fn handle_play_playlist(app: &mut App, playlist_id: &str) {
    if !app.coordinator.play_playlist(&app.catalog, playlist_id) {
        debug!(playlist_id, "Nothing to play");
    }
}

pub(super) fn handle_toggle_pause(app: &mut App) {
    app.coordinator.toggle_play_pause();
}

pub(super) fn handle_next(app: &mut App) {
    app.coordinator.next();
}

pub(super) fn handle_previous(app: &mut App) {
    app.coordinator.previous();
}

pub(super) fn handle_seek_by(app: &mut App, delta: i64) {
    let state = app.coordinator.state();
    let Some(duration) = state.current.as_ref().map(|t| t.duration) else {
        return;
    };

    let target = clamp_seek(state.position, delta, duration);
    app.coordinator.seek(target);
}

pub(super) fn handle_seek_to(app: &mut App, position: u64) {
    let Some(duration) = app.coordinator.state().current.as_ref().map(|t| t.duration) else {
        return;
    };

    app.coordinator.seek(position.min(duration));
}

pub(super) fn handle_change_volume(app: &mut App, delta: i16) {
    let level = adjust_volume(app.coordinator.state().volume, delta);
    app.coordinator.set_volume(level);
}

pub(super) fn handle_set_volume(app: &mut App, level: u8) {
    app.coordinator.set_volume(level);
}

pub(super) fn handle_toggle_like(app: &mut App) {
    app.coordinator.toggle_like();
}

pub(super) fn handle_toggle_shuffle(app: &mut App) {
    app.coordinator.toggle_shuffle();
}

pub(super) fn handle_cycle_repeat(app: &mut App) {
    app.coordinator.cycle_repeat();
}

pub(super) fn handle_create_playlist(app: &mut App, name: &str) {
    app.sidebar_view.create_playlist(name);
}

pub(super) fn handle_player_event(app: &mut App, generation: LoadGeneration, event: PlayerEvent) {
    match event {
        PlayerEvent::TimeUpdate(position) => app.coordinator.time_updated(generation, position),
        PlayerEvent::Ended => app.coordinator.track_ended(generation),
        PlayerEvent::Error(message) => warn!(%message, "Playback error"),
    }
}

pub(super) fn handle_error(app: &mut App, message: String) {
    warn!(%message, "Application error");
    app.status = Some(message);
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;

    use crate::{
        events::{
            AppEvent, Focus, dispatch,
            tests::{app, press},
        },
        player::{PlayerEvent, RepeatMode},
        route::Route,
    };

    fn current_id(app: &crate::App) -> Option<&str> {
        app.coordinator.state().current.as_ref().map(|t| t.id.as_str())
    }

    #[test]
    fn navigate_opens_playlist_and_focuses_content() {
        let mut app = app();
        app.focus = Focus::Sidebar;

        dispatch(&mut app, AppEvent::Navigate(Route::Playlist("chill".to_string()))).unwrap();

        assert_eq!(app.route, Route::Playlist("chill".to_string()));
        assert_eq!(app.focus, Focus::Content);
        assert_eq!(app.playlist_view.playlist(&app.catalog).name, "Chill Vibes");
    }

    #[test]
    fn number_keys_switch_screens() {
        let mut app = app();

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.route, Route::Library);

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.route, Route::Search);
        assert!(app.search_view.is_editing());

        // Keys now type into the search box instead of switching screens.
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.route, Route::Search);
        assert_eq!(app.search_view.query(), "1");

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.route, Route::Home);
    }

    #[test]
    fn playing_a_playlist_from_home() {
        let mut app = app();

        press(&mut app, KeyCode::Char('p'));

        let state = app.coordinator.state();
        assert!(state.is_playing);
        assert_eq!(state.queue.len(), 4);
        assert_eq!(state.current.as_ref(), Some(&app.catalog.library_tracks()[0]));
    }

    #[test]
    fn notifications_for_a_replaced_track_are_dropped() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        let first_load = app.coordinator.generation();

        press(&mut app, KeyCode::Char(']'));
        assert_eq!(current_id(&app), Some("2"));

        dispatch(&mut app, AppEvent::Player { generation: first_load, event: PlayerEvent::TimeUpdate(200) }).unwrap();
        dispatch(&mut app, AppEvent::Player { generation: first_load, event: PlayerEvent::Ended }).unwrap();

        assert_eq!(current_id(&app), Some("2"));
        assert_eq!(app.coordinator.state().position, 0);
        assert!(app.coordinator.state().is_playing);
    }

    #[test]
    fn repeat_one_ignores_end_of_replaced_track() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.coordinator.state().repeat, RepeatMode::One);
        let first_load = app.coordinator.generation();

        press(&mut app, KeyCode::Char(']'));
        press(&mut app, KeyCode::Char('.'));
        dispatch(&mut app, AppEvent::Player { generation: first_load, event: PlayerEvent::Ended }).unwrap();

        assert_eq!(current_id(&app), Some("2"));
        assert_eq!(app.coordinator.state().position, 5);
    }

    #[test]
    fn play_on_fallback_playlist_plays_what_is_shown() {
        let mut app = app();
        dispatch(&mut app, AppEvent::Navigate(Route::Playlist("playlist1".to_string()))).unwrap();
        let shown = app.playlist_view.track_table.tracks().to_vec();

        press(&mut app, KeyCode::Char('p'));

        let state = app.coordinator.state();
        assert!(state.is_playing);
        assert_eq!(state.queue.tracks(), shown.as_slice());
        assert_eq!(state.current.as_ref(), shown.first());
    }

    #[test]
    fn play_track_by_id_looks_up_catalog() {
        let mut app = app();

        dispatch(&mut app, AppEvent::PlayTrackById("12".to_string())).unwrap();
        assert_eq!(app.coordinator.state().current.as_ref().map(|t| t.title.as_str()), Some("Perfect"));
        assert!(app.coordinator.state().is_playing);

        dispatch(&mut app, AppEvent::PlayTrackById("99".to_string())).unwrap();
        assert!(app.status.is_none());
        assert_eq!(app.coordinator.state().current.as_ref().map(|t| t.id.as_str()), Some("12"));
    }

    #[test]
    fn seek_to_is_clamped_to_duration() {
        let mut app = app();

        dispatch(&mut app, AppEvent::SeekTo(10_000)).unwrap();

        assert_eq!(app.coordinator.state().position, 200);
    }

    #[test]
    fn sidebar_dialog_captures_keys() {
        let mut app = app();

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Sidebar);

        press(&mut app, KeyCode::Char('c'));
        assert!(app.sidebar_view.is_dialog_open());

        for c in "Mix q".chars() {
            assert!(press(&mut app, KeyCode::Char(c)));
        }
        press(&mut app, KeyCode::Enter);

        assert!(!app.sidebar_view.is_dialog_open());
        assert_eq!(app.sidebar_view.sidebar().playlists().last().map(|p| p.name.as_str()), Some("Mix q"));
    }

    #[test]
    fn errors_are_shown_in_status_line() {
        let mut app = app();

        dispatch(&mut app, AppEvent::Error("Unknown command: foo".to_string())).unwrap();
        assert_eq!(app.status.as_deref(), Some("Unknown command: foo"));

        press(&mut app, KeyCode::Char('j'));
        assert!(app.status.is_none());
    }
}
