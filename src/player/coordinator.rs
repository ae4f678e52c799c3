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

//! Playback coordination.
//!
//! The [`Coordinator`] owns the [`PlaybackState`] (current track, play/pause,
//! queue, position, volume and the like/shuffle/repeat flags) and is the only
//! place that state is mutated. Each intent updates the state and then issues
//! the matching requests to the [`PlaybackBackend`]:
//!
//! * a change of current track reloads the source, and keeps playing if the
//!   state says we are playing;
//! * a change of play/pause alone starts or stops playback and never reloads.
//!
//! Backend failures are logged and never rolled back, so the state may report
//! playing while nothing is audible.
//!
//! Every load gets a fresh [`LoadGeneration`]. Worker notifications tagged
//! with an older generation belong to a source that has since been replaced
//! and are dropped, so the latest load always wins.

use tracing::{debug, info, warn};

use crate::{
    model::{Track, catalog::Catalog, queue::Queue},
    player::{LoadGeneration, PlaybackBackend, PlayerError, PlayerState, RepeatMode, volume_ratio},
};

#[derive(Debug, Clone)]
pub(crate) struct PlaybackState {
    pub(crate) current: Option<Track>,
    pub(crate) is_playing: bool,
    pub(crate) queue: Queue,
    /// Playback position in seconds.
    pub(crate) position: u64,
    /// Output level, `0..=100`.
    pub(crate) volume: u8,
    pub(crate) liked: bool,
    pub(crate) shuffle: bool,
    pub(crate) repeat: RepeatMode,
}

impl PlaybackState {
    pub(crate) fn player_state(&self) -> PlayerState {
        match (&self.current, self.is_playing) {
            (None, _) => PlayerState::Idle,
            (Some(_), false) => PlayerState::Paused,
            (Some(_), true) => PlayerState::Playing,
        }
    }

    pub(crate) fn is_current(&self, track_id: &str) -> bool {
        self.current.as_ref().is_some_and(|t| t.id == track_id)
    }
}

pub(crate) struct Coordinator<B: PlaybackBackend> {
    state: PlaybackState,
    backend: B,
    generation: LoadGeneration,
}

impl<B: PlaybackBackend> Coordinator<B> {
    /// Creates a paused coordinator whose queue is `tracks`, with the first
    /// track loaded into the backend.
    pub(crate) fn new(backend: B, tracks: Vec<Track>, volume: u8) -> Self {
        let current = tracks.first().cloned();
        let volume = volume.min(100);

        let mut coordinator = Self {
            state: PlaybackState {
                current,
                is_playing: false,
                queue: Queue::new(tracks),
                position: 0,
                volume,
                liked: false,
                shuffle: false,
                repeat: RepeatMode::Off,
            },
            backend,
            generation: 0,
        };

        if let Some(track) = coordinator.state.current.clone() {
            coordinator.load(&track);
        }
        coordinator.request("set_volume", |b| b.set_volume(volume_ratio(volume)));

        coordinator
    }

    pub(crate) fn state(&self) -> &PlaybackState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }

    #[cfg(test)]
    pub(crate) fn generation(&self) -> LoadGeneration {
        self.generation
    }

    /// Makes `track` current and starts playing it; the queue is unchanged.
    ///
    /// Selecting the track that is already current does not reload it.
    pub(crate) fn play_track(&mut self, track: Track) {
        debug!(track_id = %track.id, "Play track requested");

        let was_playing = self.state.is_playing;
        let changed = !self.state.is_current(&track.id);

        self.state.is_playing = true;

        if changed {
            self.switch_to(track);
        } else if !was_playing {
            self.request("play", |b| b.play());
        }
    }

    /// Replaces the queue with a playlist's tracks and plays the first one.
    ///
    /// Returns `false`, changing nothing, if the playlist is unknown or empty.
    pub(crate) fn play_playlist(&mut self, catalog: &Catalog, playlist_id: &str) -> bool {
        let Some(tracks) = catalog.playlist_tracks(playlist_id).filter(|t| !t.is_empty()) else {
            debug!(playlist_id, "Ignoring play request for unknown or empty playlist");
            return false;
        };

        let first = tracks[0].clone();

        self.state.queue.replace(tracks.to_vec());
        if self.state.shuffle {
            self.state.queue.shuffle(Some(&first.id));
        }

        info!(playlist_id, tracks = tracks.len(), "Playing playlist");

        self.play_track(first);
        true
    }

    pub(crate) fn toggle_play_pause(&mut self) {
        if self.state.current.is_none() {
            return;
        }

        self.state.is_playing = !self.state.is_playing;
        debug!(is_playing = self.state.is_playing, "Toggled playback");

        if self.state.is_playing {
            self.request("play", |b| b.play());
        } else {
            self.request("pause", |b| b.pause());
        }
    }

    /// Advances circularly through the queue; repeat mode is not consulted.
    pub(crate) fn next(&mut self) {
        let current = self.state.current.as_ref().map(|t| t.id.as_str());
        if let Some(track) = self.state.queue.next_after(current).cloned() {
            self.switch_to(track);
        }
    }

    /// Steps back circularly through the queue.
    pub(crate) fn previous(&mut self) {
        let current = self.state.current.as_ref().map(|t| t.id.as_str());
        if let Some(track) = self.state.queue.previous_before(current).cloned() {
            self.switch_to(track);
        }
    }

    /// Handles the backend's natural end-of-track notification.
    pub(crate) fn track_ended(&mut self, generation: LoadGeneration) {
        if self.is_stale(generation) {
            debug!(generation, current = self.generation, "Dropping end of replaced track");
            return;
        }

        if self.state.repeat == RepeatMode::One && self.state.current.is_some() {
            debug!("Repeating current track");
            self.state.position = 0;
            self.state.is_playing = true;
            self.request("seek", |b| b.seek(0));
            self.request("play", |b| b.play());
        } else {
            self.next();
        }
    }

    pub(crate) fn time_updated(&mut self, generation: LoadGeneration, position: u64) {
        if self.is_stale(generation) {
            return;
        }
        self.state.position = position;
    }

    /// Moves the playback position. The caller keeps `position` within the
    /// current track's duration.
    pub(crate) fn seek(&mut self, position: u64) {
        self.state.position = position;
        self.request("seek", |b| b.seek(position));
    }

    /// Sets the output level; levels above 100 saturate.
    pub(crate) fn set_volume(&mut self, level: u8) {
        let level = level.min(100);
        self.state.volume = level;
        self.request("set_volume", |b| b.set_volume(volume_ratio(level)));
    }

    pub(crate) fn toggle_like(&mut self) {
        self.state.liked = !self.state.liked;
    }

    /// Toggles shuffle, reordering the queue around the current track or
    /// restoring its original order.
    pub(crate) fn toggle_shuffle(&mut self) {
        self.state.shuffle = !self.state.shuffle;

        if self.state.shuffle {
            let current = self.state.current.as_ref().map(|t| t.id.as_str());
            self.state.queue.shuffle(current);
        } else {
            self.state.queue.unshuffle();
        }

        info!(shuffle = self.state.shuffle, "Shuffle toggled");
    }

    pub(crate) fn cycle_repeat(&mut self) {
        self.state.repeat = self.state.repeat.cycle();
        info!(repeat = ?self.state.repeat, "Repeat mode changed");
    }

    // Makes `track` current, reloading the source even if it is the same
    // track, and resumes playback if the state says we are playing.
    fn switch_to(&mut self, track: Track) {
        info!(track_id = %track.id, title = %track.title, "Now playing");

        self.state.position = 0;
        self.load(&track);
        self.state.current = Some(track);

        if self.state.is_playing {
            self.request("play", |b| b.play());
        }
    }

    fn load(&mut self, track: &Track) {
        self.generation += 1;
        let generation = self.generation;
        self.request("load", |b| b.load(track, generation));
    }

    fn is_stale(&self, generation: LoadGeneration) -> bool {
        generation != self.generation
    }

    fn request(&mut self, operation: &'static str, f: impl FnOnce(&mut B) -> Result<(), PlayerError>) {
        if let Err(e) = f(&mut self.backend) {
            warn!(operation, error = %e, "Playback backend request failed");
        }
    }
}
