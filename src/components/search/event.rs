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

//! Event routing for the search view.
//!
//! While editing, every key goes to the query input. Otherwise keys drive the
//! results table, or the featured playlist tiles when the query is blank.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::{SearchView, TrackTableAction, ViewContext, step_selection},
    events::{AppEvent, AppEventProcessor},
};

impl AppEventProcessor for SearchView {
    fn process_event(&mut self, event: &Event, ctx: ViewContext<'_>, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if self.editing {
            match key_event.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Down => self.editing = false,
                _ => {
                    if self.input.handle_event(event).is_some() {
                        self.refresh(ctx.catalog);
                    }
                }
            }
            return Ok(true);
        }

        if matches!(key_event.code, KeyCode::Char('/') | KeyCode::Char('i')) {
            self.editing = true;
            return Ok(true);
        }

        if self.is_blank() {
            let len = ctx.catalog.featured_playlists().len();
            match key_event.code {
                KeyCode::Char('j') | KeyCode::Down => {
                    self.featured_selected = step_selection(self.featured_selected, len, true)
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.featured_selected = step_selection(self.featured_selected, len, false)
                }
                // Featured tiles on this screen start the first catalog track.
                KeyCode::Enter => {
                    if let (Some(_), Some(track)) = (self.featured_selected, ctx.catalog.tracks().first()) {
                        event_tx.send(AppEvent::PlayTrack(track.clone()))?;
                    }
                }
                _ => return Ok(false),
            }
            return Ok(true);
        }

        match self.results.process_event(event) {
            Some(TrackTableAction::Activate(track)) => event_tx.send(AppEvent::PlayTrack(track))?,
            Some(TrackTableAction::Moved) => {}
            None => return Ok(false),
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::{channel, char_key, fixture, key};

    fn type_query(view: &mut SearchView, ctx: ViewContext<'_>, tx: &Sender<AppEvent>, text: &str) {
        view.activate();
        for c in text.chars() {
            assert!(view.process_event(&char_key(c), ctx, tx).unwrap());
        }
        view.process_event(&key(KeyCode::Enter), ctx, tx).unwrap();
    }

    #[test]
    fn typing_filters_results() {
        let (catalog, coordinator) = fixture();
        let ctx = ViewContext { catalog: &catalog, playback: coordinator.state() };
        let (tx, rx) = channel();
        let mut view = SearchView::new();

        type_query(&mut view, ctx, &tx, "rodrigo");

        assert!(!view.is_editing());
        let ids: Vec<&str> = view.results.tracks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["4", "8"]);
        // Keystrokes went to the input and nowhere else.
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn tracks_outside_the_library_are_not_found() {
        let (catalog, coordinator) = fixture();
        let ctx = ViewContext { catalog: &catalog, playback: coordinator.state() };
        let (tx, _rx) = channel();
        let mut view = SearchView::new();

        type_query(&mut view, ctx, &tx, "ed sheeran");

        assert!(!view.is_blank());
        assert!(view.results.tracks().is_empty());
    }

    #[test]
    fn enter_plays_selected_result() {
        let (catalog, coordinator) = fixture();
        let ctx = ViewContext { catalog: &catalog, playback: coordinator.state() };
        let (tx, rx) = channel();
        let mut view = SearchView::new();

        type_query(&mut view, ctx, &tx, "justin");
        view.process_event(&key(KeyCode::Char('j')), ctx, &tx).unwrap();
        view.process_event(&key(KeyCode::Enter), ctx, &tx).unwrap();

        match rx.try_recv() {
            Ok(AppEvent::PlayTrack(track)) => assert_eq!(track.title, "Peaches"),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn featured_tile_plays_first_catalog_track() {
        let (catalog, coordinator) = fixture();
        let ctx = ViewContext { catalog: &catalog, playback: coordinator.state() };
        let (tx, rx) = channel();
        let mut view = SearchView::new();

        view.process_event(&key(KeyCode::Down), ctx, &tx).unwrap();
        view.process_event(&key(KeyCode::Enter), ctx, &tx).unwrap();

        match rx.try_recv() {
            Ok(AppEvent::PlayTrack(track)) => assert_eq!(track.id, "1"),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn slash_starts_editing_and_global_keys_fall_through() {
        let (catalog, coordinator) = fixture();
        let ctx = ViewContext { catalog: &catalog, playback: coordinator.state() };
        let (tx, _rx) = channel();
        let mut view = SearchView::new();

        assert!(!view.process_event(&char_key('q'), ctx, &tx).unwrap());
        assert!(view.process_event(&char_key('/'), ctx, &tx).unwrap());
        assert!(view.is_editing());
        assert!(view.process_event(&char_key('q'), ctx, &tx).unwrap());
        assert_eq!(view.query(), "q");
    }
}
