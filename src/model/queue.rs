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

//! Play queue management.
//!
//! This module provides state for the play queue, the ordered list of tracks
//! eligible for next/previous navigation. Navigation is circular and resolves
//! the current position by track identifier, so a track that appears more than
//! once resolves to its first occurrence.

use rand::{rng, seq::SliceRandom};

use crate::model::Track;

#[derive(Debug, Clone, Default)]
pub(crate) struct Queue {
    tracks: Vec<Track>,
    // Play order to restore when shuffle is switched off.
    unshuffled: Option<Vec<Track>>,
}

impl Queue {
    pub(crate) fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            unshuffled: None,
        }
    }

    /// Replaces the queue contents, discarding any saved unshuffled order.
    pub(crate) fn replace(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
        self.unshuffled = None;
    }

    #[cfg(test)]
    pub(crate) fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub(crate) fn len(&self) -> usize {
        self.tracks.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    #[cfg(test)]
    pub(crate) fn is_shuffled(&self) -> bool {
        self.unshuffled.is_some()
    }

    /// Position of the first track with the given id.
    pub(crate) fn position_of(&self, track_id: &str) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == track_id)
    }

    /// The track after `current`, wrapping past the end.
    ///
    /// A `current` track that is not in the queue is treated as sitting before
    /// the first element.
    pub(crate) fn next_after(&self, current: Option<&str>) -> Option<&Track> {
        let len = self.tracks.len();
        if len == 0 {
            return None;
        }

        let i = match current.and_then(|id| self.position_of(id)) {
            Some(i) => (i + 1) % len,
            None => 0,
        };

        self.tracks.get(i)
    }

    /// The track before `current`, wrapping before the start.
    ///
    /// A `current` track that is not in the queue is treated as sitting after
    /// the last element.
    pub(crate) fn previous_before(&self, current: Option<&str>) -> Option<&Track> {
        let len = self.tracks.len();
        if len == 0 {
            return None;
        }

        let i = match current.and_then(|id| self.position_of(id)) {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };

        self.tracks.get(i)
    }

    /// Randomises the play order, keeping `current` (if queued) at the front.
    pub(crate) fn shuffle(&mut self, current: Option<&str>) {
        if self.unshuffled.is_none() {
            self.unshuffled = Some(self.tracks.clone());
        }

        let head = current
            .and_then(|id| self.position_of(id))
            .map(|i| self.tracks.remove(i));

        self.tracks.shuffle(&mut rng());

        if let Some(track) = head {
            self.tracks.insert(0, track);
        }
    }

    /// Restores the order saved by the first [`Queue::shuffle`].
    pub(crate) fn unshuffle(&mut self) {
        if let Some(tracks) = self.unshuffled.take() {
            self.tracks = tracks;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str) -> Track {
        Track {
            id: id.to_string(),
            title: format!("Track {id}"),
            artist: "Artist".to_string(),
            album: "Album".to_string(),
            duration: 180,
            cover: String::new(),
            audio_url: format!("https://example.com/{id}.mp3"),
        }
    }

    fn queue(ids: &[&str]) -> Queue {
        Queue::new(ids.iter().map(|id| track(id)).collect())
    }

    fn ids(queue: &Queue) -> Vec<&str> {
        queue.tracks().iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn next_wraps_to_first() {
        let q = queue(&["a", "b", "c", "d"]);

        assert_eq!(q.next_after(Some("b")).unwrap().id, "c");
        assert_eq!(q.next_after(Some("d")).unwrap().id, "a");
    }

    #[test]
    fn previous_wraps_to_last() {
        let q = queue(&["a", "b", "c", "d"]);

        assert_eq!(q.previous_before(Some("c")).unwrap().id, "b");
        assert_eq!(q.previous_before(Some("a")).unwrap().id, "d");
    }

    #[test]
    fn unknown_current_track() {
        let q = queue(&["a", "b", "c"]);

        assert_eq!(q.next_after(Some("z")).unwrap().id, "a");
        assert_eq!(q.previous_before(Some("z")).unwrap().id, "c");
        assert_eq!(q.next_after(None).unwrap().id, "a");
    }

    #[test]
    fn empty_queue_has_no_neighbours() {
        let q = Queue::default();

        assert!(q.is_empty());
        assert!(q.next_after(Some("a")).is_none());
        assert!(q.previous_before(Some("a")).is_none());
    }

    #[test]
    fn duplicate_ids_resolve_to_first_occurrence() {
        let q = queue(&["a", "b", "a", "c"]);

        assert_eq!(q.position_of("a"), Some(0));
        // From the second "a" we still step relative to the first one.
        assert_eq!(q.next_after(Some("a")).unwrap().id, "b");
    }

    #[test]
    fn shuffle_keeps_current_first_and_is_a_permutation() {
        let mut q = queue(&["a", "b", "c", "d", "e", "f"]);

        q.shuffle(Some("c"));

        assert!(q.is_shuffled());
        assert_eq!(q.get(0).unwrap().id, "c");

        let mut shuffled = ids(&q);
        shuffled.sort();
        assert_eq!(shuffled, ["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn unshuffle_restores_original_order() {
        let mut q = queue(&["a", "b", "c", "d"]);

        q.shuffle(Some("b"));
        q.shuffle(Some("d"));
        q.unshuffle();

        assert!(!q.is_shuffled());
        assert_eq!(ids(&q), ["a", "b", "c", "d"]);
    }

    #[test]
    fn replace_discards_saved_order() {
        let mut q = queue(&["a", "b"]);

        q.shuffle(None);
        q.replace(vec![track("x"), track("y")]);
        q.unshuffle();

        assert_eq!(ids(&q), ["x", "y"]);
    }
}
