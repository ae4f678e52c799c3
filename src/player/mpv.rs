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

//! MPV-backed playback worker.
//!
//! Streams each track's audio source through `libmpv`. The worker owns the
//! MPV context on a dedicated thread, applies [`AudioPlayerCommand`]s as they
//! arrive and translates observed property changes back into
//! [`PlayerEvent`]s.
//!
//! A command that MPV rejects (a bad URL, a seek before anything loaded) is
//! reported as [`PlayerEvent::Error`] and the worker carries on; only a failure
//! to create the MPV context itself is fatal.
//!
//! Notifications carry the generation of the latest `Load`. Between a `Load`
//! and MPV's `StartFile` for it, progress and end-of-file events still belong
//! to the replaced source and are not forwarded.

use anyhow::{Context, Result};
use mpv::Format;
use std::{
    sync::mpsc::{Receiver, Sender, TryRecvError},
    thread,
};
use tracing::{debug, warn};

use crate::{
    events::AppEvent,
    player::{AudioPlayerCommand, LoadGeneration, PlayerEvent},
};

/// What the worker knows about the source MPV is playing.
#[derive(Debug, Default)]
struct SourceState {
    generation: LoadGeneration,
    started: bool,
    last_second: Option<u64>,
}

impl SourceState {
    fn loading(&mut self, generation: LoadGeneration) {
        self.generation = generation;
        self.started = false;
        self.last_second = None;
    }

    fn translate(&mut self, mpv_event: &mpv::Event<'_>) -> Option<PlayerEvent> {
        match *mpv_event {
            mpv::Event::StartFile => {
                self.started = true;
                None
            }
            _ if !self.started => None,
            mpv::Event::PropertyChange { name: "time-pos", change: Format::Double(seconds), .. }
                if seconds >= 0.0 =>
            {
                let second = seconds as u64;
                if self.last_second == Some(second) {
                    None
                } else {
                    self.last_second = Some(second);
                    Some(PlayerEvent::TimeUpdate(second))
                }
            }
            mpv::Event::EndFile(Ok(mpv::EndFileReason::MPV_END_FILE_REASON_EOF)) => {
                self.last_second = None;
                Some(PlayerEvent::Ended)
            }
            _ => None,
        }
    }
}

pub(super) fn spawn_player_worker(command_rx: Receiver<AudioPlayerCommand>, event_tx: Sender<AppEvent>) {
    let error_tx = event_tx.clone();

    thread::spawn(move || {
        if let Err(e) = audio_player_worker(command_rx, event_tx) {
            let _ = error_tx.send(AppEvent::FatalError(format!("MPV worker failure: {e:?}")));
        }
    });
}

fn audio_player_worker(command_rx: Receiver<AudioPlayerCommand>, event_tx: Sender<AppEvent>) -> Result<()> {
    let mut handler = (|| {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
        builder
            .set_option("vo", "null")
            .context("Failed to set no video output")?;
        builder.build().context("Failed to build MPV handler")
    })()?;

    handler
        .observe_property::<f64>("time-pos", 0)
        .context("Failed to observe time-pos")?;

    let mut source = SourceState::default();

    loop {
        if !process_commands(&mut handler, &mut source, &command_rx, &event_tx) {
            debug!("Command channel closed, stopping MPV worker");
            return Ok(());
        }
        process_mpv_events(&mut handler, &mut source, &event_tx)?;
    }
}

/// Drains and executes all pending commands, returning `false` once the
/// command channel has closed.
fn process_commands(
    handler: &mut mpv::MpvHandler,
    source: &mut SourceState,
    command_rx: &Receiver<AudioPlayerCommand>,
    event_tx: &Sender<AppEvent>,
) -> bool {
    loop {
        let command = match command_rx.try_recv() {
            Ok(command) => command,
            Err(TryRecvError::Empty) => return true,
            Err(TryRecvError::Disconnected) => return false,
        };

        let result = match &command {
            AudioPlayerCommand::Load { url, generation, .. } => {
                source.loading(*generation);
                handler
                    .set_property("pause", true)
                    .and_then(|_| handler.command(&["loadfile", url.as_str(), "replace"]))
            }
            AudioPlayerCommand::Play => handler.set_property("pause", false),
            AudioPlayerCommand::Pause => handler.set_property("pause", true),
            AudioPlayerCommand::Seek(position) => {
                handler.command(&["seek", &position.to_string(), "absolute"])
            }
            AudioPlayerCommand::SetVolume(level) => handler.set_property("volume", level * 100.0),
        };

        if let Err(e) = result {
            warn!(?command, error = ?e, "MPV rejected command");
            let _ = event_tx.send(AppEvent::Player {
                generation: source.generation,
                event: PlayerEvent::Error(format!("{e:?}")),
            });
        }
    }
}

/// Polls for MPV events, waiting up to 50ms, and forwards progress and
/// end-of-track notifications.
fn process_mpv_events(
    handler: &mut mpv::MpvHandler,
    source: &mut SourceState,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    let Some(mpv_event) = handler.wait_event(0.05) else {
        return Ok(());
    };

    if let Some(event) = source.translate(&mpv_event) {
        event_tx
            .send(AppEvent::Player { generation: source.generation, event })
            .context("Failed to send player event")?;
    }

    Ok(())
}
