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

//! Clock-driven playback worker.
//!
//! Simulates a media element without producing any sound: a loaded source
//! "plays" by advancing a clock against the track's duration, reporting
//! progress and the natural end of the track exactly as a real backend would.
//!
//! Notifications are tagged with the generation of the load the clock was
//! running when they were raised. Time that passes before a `Load` is applied
//! is still reported against the old source, so the coordinator can discard it.

use std::{
    sync::mpsc::{Receiver, RecvTimeoutError, Sender},
    thread,
    time::{Duration, Instant},
};

use tracing::{debug, trace};

use crate::{
    events::AppEvent,
    player::{AudioPlayerCommand, LoadGeneration, PlayerEvent},
};

const TICK: Duration = Duration::from_millis(250);

/// Pure playback clock, advanced explicitly by elapsed wall time.
#[derive(Debug, Default)]
pub(super) struct PlaybackClock {
    generation: LoadGeneration,
    loaded: bool,
    playing: bool,
    duration: u64,
    elapsed: Duration,
    last_reported: Option<u64>,
}

impl PlaybackClock {
    pub(super) fn apply(&mut self, command: AudioPlayerCommand) {
        match command {
            AudioPlayerCommand::Load { url, duration, generation } => {
                debug!(%url, duration, generation, "Loading source");
                self.generation = generation;
                self.loaded = true;
                self.playing = false;
                self.duration = duration;
                self.elapsed = Duration::ZERO;
                self.last_reported = None;
            }
            AudioPlayerCommand::Play => self.playing = self.loaded,
            AudioPlayerCommand::Pause => self.playing = false,
            AudioPlayerCommand::Seek(position) => {
                self.elapsed = Duration::from_secs(position.min(self.duration));
                self.last_reported = None;
            }
            AudioPlayerCommand::SetVolume(_) => {}
        }
    }

    pub(super) fn generation(&self) -> LoadGeneration {
        self.generation
    }

    /// Advances the clock, returning the notifications it produced.
    pub(super) fn advance(&mut self, delta: Duration) -> Vec<PlayerEvent> {
        let mut events = Vec::new();
        if !self.playing {
            return events;
        }

        let end = Duration::from_secs(self.duration);
        self.elapsed = (self.elapsed + delta).min(end);

        let seconds = self.elapsed.as_secs();
        if self.last_reported != Some(seconds) {
            self.last_reported = Some(seconds);
            events.push(PlayerEvent::TimeUpdate(seconds));
        }

        if self.elapsed >= end {
            self.playing = false;
            events.push(PlayerEvent::Ended);
        }

        events
    }
}

/// Spawns the silent worker thread.
///
/// The worker exits when either channel is closed.
pub(super) fn spawn_player_worker(command_rx: Receiver<AudioPlayerCommand>, event_tx: Sender<AppEvent>) {
    thread::spawn(move || {
        let mut clock = PlaybackClock::default();
        let mut last = Instant::now();

        loop {
            let command = match command_rx.recv_timeout(TICK) {
                Ok(command) => Some(command),
                Err(RecvTimeoutError::Timeout) => None,
                Err(RecvTimeoutError::Disconnected) => return,
            };

            // Time spent before the command counts against the old state.
            let now = Instant::now();
            if !report(&mut clock, now - last, &event_tx) {
                return;
            }
            last = now;

            if let Some(command) = command {
                trace!(?command, "Player command");
                clock.apply(command);
            }
        }
    });
}

/// Advances `clock` and forwards what it raised, returning `false` once the
/// event channel has closed.
fn report(clock: &mut PlaybackClock, delta: Duration, event_tx: &Sender<AppEvent>) -> bool {
    let generation = clock.generation();
    clock
        .advance(delta)
        .into_iter()
        .all(|event| event_tx.send(AppEvent::Player { generation, event }).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(url: &str, duration: u64, generation: LoadGeneration) -> AudioPlayerCommand {
        AudioPlayerCommand::Load { url: url.to_string(), duration, generation }
    }

    fn loaded(duration: u64) -> PlaybackClock {
        let mut clock = PlaybackClock::default();
        clock.apply(load("https://example.com/a.mp3", duration, 1));
        clock
    }

    #[test]
    fn paused_clock_does_not_advance() {
        let mut clock = loaded(10);

        assert!(clock.advance(Duration::from_secs(3)).is_empty());
    }

    #[test]
    fn reports_whole_seconds_once() {
        let mut clock = loaded(10);
        clock.apply(AudioPlayerCommand::Play);

        assert_eq!(clock.advance(Duration::from_millis(250)), [PlayerEvent::TimeUpdate(0)]);
        assert!(clock.advance(Duration::from_millis(250)).is_empty());
        assert_eq!(clock.advance(Duration::from_millis(600)), [PlayerEvent::TimeUpdate(1)]);
    }

    #[test]
    fn reaching_duration_ends_playback() {
        let mut clock = loaded(2);
        clock.apply(AudioPlayerCommand::Play);

        assert_eq!(
            clock.advance(Duration::from_secs(5)),
            [PlayerEvent::TimeUpdate(2), PlayerEvent::Ended]
        );
        assert!(clock.advance(Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn seek_moves_clock_and_clamps() {
        let mut clock = loaded(100);
        clock.apply(AudioPlayerCommand::Play);

        clock.apply(AudioPlayerCommand::Seek(40));
        assert_eq!(clock.advance(Duration::from_millis(100)), [PlayerEvent::TimeUpdate(40)]);

        clock.apply(AudioPlayerCommand::Seek(500));
        assert_eq!(
            clock.advance(Duration::ZERO),
            [PlayerEvent::TimeUpdate(100), PlayerEvent::Ended]
        );
    }

    #[test]
    fn play_without_source_is_ignored() {
        let mut clock = PlaybackClock::default();
        clock.apply(AudioPlayerCommand::Play);

        assert!(clock.advance(Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn reload_resets_position() {
        let mut clock = loaded(100);
        clock.apply(AudioPlayerCommand::Play);
        clock.advance(Duration::from_secs(30));

        clock.apply(load("https://example.com/b.mp3", 50, 2));
        clock.apply(AudioPlayerCommand::Play);

        assert_eq!(clock.generation(), 2);
        assert_eq!(clock.advance(Duration::from_millis(10)), [PlayerEvent::TimeUpdate(0)]);
    }

    #[test]
    fn time_before_a_load_is_reported_against_the_old_source() {
        let (event_tx, event_rx) = std::sync::mpsc::channel();
        let mut clock = loaded(2);
        clock.apply(AudioPlayerCommand::Play);
        clock.advance(Duration::from_millis(1900));

        assert!(report(&mut clock, Duration::from_millis(200), &event_tx));
        clock.apply(load("https://example.com/b.mp3", 50, 2));

        let tags: Vec<(LoadGeneration, PlayerEvent)> = event_rx
            .try_iter()
            .map(|e| match e {
                AppEvent::Player { generation, event } => (generation, event),
                other => panic!("unexpected event {other:?}"),
            })
            .collect();
        assert_eq!(tags, [(1, PlayerEvent::TimeUpdate(2)), (1, PlayerEvent::Ended)]);
        assert_eq!(clock.generation(), 2);
    }

    #[test]
    fn worker_reports_over_channel() {
        let (command_tx, command_rx) = std::sync::mpsc::channel();
        let (event_tx, event_rx) = std::sync::mpsc::channel();
        spawn_player_worker(command_rx, event_tx);

        command_tx.send(load("x", 1, 7)).unwrap();
        command_tx.send(AudioPlayerCommand::Play).unwrap();

        let mut saw_end = false;
        while let Ok(event) = event_rx.recv_timeout(Duration::from_secs(5)) {
            if matches!(event, AppEvent::Player { generation: 7, event: PlayerEvent::Ended }) {
                saw_end = true;
                break;
            }
        }
        assert!(saw_end);
    }
}
