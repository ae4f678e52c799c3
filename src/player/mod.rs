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

//! Audio playback control and state management.
//!
//! This module provides the [`PlaybackBackend`] abstraction the playback
//! [`coordinator`] drives, and the high-level [`AudioPlayer`] handle used by
//! the application. The handle does not touch audio itself; it forwards
//! commands to a background worker thread so that media operations never block
//! the main application thread.
//!
//! Two workers exist: a clock-driven [`silent`] worker that simulates playback
//! without producing sound, and (with the `mpv` feature) a libmpv worker that
//! streams the track's audio source.

pub(crate) mod coordinator;
#[cfg(feature = "mpv")]
mod mpv;
mod silent;

use std::sync::mpsc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{events::AppEvent, model::Track};

/// Playback status as shown by the playback bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PlayerState {
    Idle,
    Paused,
    Playing,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum RepeatMode {
    #[default]
    Off,
    All,
    One,
}

impl RepeatMode {
    pub(crate) fn cycle(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
        }
    }
}

/// Which worker backs the [`AudioPlayer`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum BackendKind {
    #[default]
    Silent,
    Mpv,
}

/// Numbers each load request. Worker notifications carry the generation of
/// the load they belong to, so ones raised for a replaced source can be told
/// apart from those of the current one.
pub(crate) type LoadGeneration = u64;

/// Notifications raised by a playback worker.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PlayerEvent {
    /// Playback position, in whole seconds.
    TimeUpdate(u64),
    /// The current source played through to its natural end.
    Ended,
    #[cfg_attr(not(feature = "mpv"), allow(dead_code))]
    Error(String),
}

#[derive(Debug, Error)]
pub(crate) enum PlayerError {
    #[error("playback worker is not running")]
    WorkerGone,

    #[error("media backend error: {0}")]
    Backend(String),

    #[error("backend {0:?} is not available in this build")]
    Unavailable(BackendKind),
}

impl<T> From<mpsc::SendError<T>> for PlayerError {
    fn from(_: mpsc::SendError<T>) -> Self {
        PlayerError::WorkerGone
    }
}

/// The minimal media primitive the coordinator depends on.
///
/// Requests are fire-and-forget: an `Ok` only means the request was accepted,
/// and asynchronous progress or failures come back as [`PlayerEvent`]s.
pub(crate) trait PlaybackBackend {
    /// Replaces the source with `track`. Notifications for it are tagged with
    /// `generation`.
    fn load(&mut self, track: &Track, generation: LoadGeneration) -> Result<(), PlayerError>;
    fn play(&mut self) -> Result<(), PlayerError>;
    fn pause(&mut self) -> Result<(), PlayerError>;
    fn seek(&mut self, position: u64) -> Result<(), PlayerError>;
    /// Sets the output level, `0.0` being silent and `1.0` full volume.
    fn set_volume(&mut self, level: f64) -> Result<(), PlayerError>;
}

impl<B: PlaybackBackend + ?Sized> PlaybackBackend for Box<B> {
    fn load(&mut self, track: &Track, generation: LoadGeneration) -> Result<(), PlayerError> {
        (**self).load(track, generation)
    }

    fn play(&mut self) -> Result<(), PlayerError> {
        (**self).play()
    }

    fn pause(&mut self) -> Result<(), PlayerError> {
        (**self).pause()
    }

    fn seek(&mut self, position: u64) -> Result<(), PlayerError> {
        (**self).seek(position)
    }

    fn set_volume(&mut self, level: f64) -> Result<(), PlayerError> {
        (**self).set_volume(level)
    }
}

/// Maps a UI volume level in `0..=100` onto the backend's `0.0..=1.0` range.
///
/// Levels above 100 saturate.
pub(crate) fn volume_ratio(level: u8) -> f64 {
    f64::from(level.min(100)) / 100.0
}

#[derive(Debug)]
pub(crate) enum AudioPlayerCommand {
    Load {
        url: String,
        duration: u64,
        generation: LoadGeneration,
    },
    Play,
    Pause,
    Seek(u64),
    SetVolume(f64),
}

/// A handle to the audio playback worker.
///
/// This struct acts as a command proxy; it does not perform audio processing
/// itself but instead sends instructions to a background worker thread.
pub(crate) struct AudioPlayer {
    /// Channel for sending commands to the background worker thread.
    command_tx: mpsc::Sender<AudioPlayerCommand>,
}

impl AudioPlayer {
    /// Spawns the requested worker thread and returns a new player handle.
    ///
    /// # Arguments
    ///
    /// * `kind` - Which worker to spawn.
    /// * `event_tx` - A channel to send [`PlayerEvent`]s back to the main
    ///   event loop.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::Unavailable`] if the requested backend was not
    /// compiled in.
    pub(crate) fn new(kind: BackendKind, event_tx: mpsc::Sender<AppEvent>) -> Result<Self, PlayerError> {
        let (command_tx, command_rx) = mpsc::channel::<AudioPlayerCommand>();

        match kind {
            BackendKind::Silent => silent::spawn_player_worker(command_rx, event_tx),
            #[cfg(feature = "mpv")]
            BackendKind::Mpv => mpv::spawn_player_worker(command_rx, event_tx),
            #[cfg(not(feature = "mpv"))]
            BackendKind::Mpv => return Err(PlayerError::Unavailable(kind)),
        }

        Ok(Self { command_tx })
    }
}

impl PlaybackBackend for AudioPlayer {
    fn load(&mut self, track: &Track, generation: LoadGeneration) -> Result<(), PlayerError> {
        self.command_tx.send(AudioPlayerCommand::Load {
            url: track.audio_url.clone(),
            duration: track.duration,
            generation,
        })?;
        Ok(())
    }

    fn play(&mut self) -> Result<(), PlayerError> {
        self.command_tx.send(AudioPlayerCommand::Play)?;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), PlayerError> {
        self.command_tx.send(AudioPlayerCommand::Pause)?;
        Ok(())
    }

    fn seek(&mut self, position: u64) -> Result<(), PlayerError> {
        self.command_tx.send(AudioPlayerCommand::Seek(position))?;
        Ok(())
    }

    fn set_volume(&mut self, level: f64) -> Result<(), PlayerError> {
        self.command_tx.send(AudioPlayerCommand::SetVolume(level))?;
        Ok(())
    }
}
