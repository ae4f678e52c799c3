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

//! UI rendering logic for the track table.
//!
//! Handles column layout, cursor highlighting and the "now playing" marker.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Cell, Row, Table},
};

use crate::{
    components::TrackTable,
    player::coordinator::PlaybackState,
    render::icons::{ICON_PAUSE, ICON_PLAY},
    theme::Theme,
    util::format::format_time,
};

impl TrackTable {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, playback: &PlaybackState, theme: &Theme) {
        let rows = self.tracks.iter().enumerate().map(|(i, item)| {
            let is_current = playback.is_current(&item.id);

            let marker = match (is_current, playback.is_playing) {
                (true, true) => ICON_PLAY.to_string(),
                (true, false) => ICON_PAUSE.to_string(),
                _ => format!("{}", i + 1),
            };

            let title_style = if is_current {
                Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.table_track_fg)
            };

            Row::new(vec![
                Cell::from(
                    Line::from(marker)
                        .style(Style::default().fg(theme.table_track_number_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(""),
                Cell::from(Line::from(item.title.as_str()).style(title_style)),
                Cell::from(Line::from(item.artist.as_str()).style(Style::default().fg(theme.table_artist_fg))),
                Cell::from(Line::from(item.album.as_str()).style(Style::default().fg(theme.table_album_fg))),
                Cell::from(
                    Line::from(format_time(item.duration))
                        .style(Style::default().fg(theme.table_time_fg))
                        .alignment(Alignment::Right),
                ),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Percentage(40),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Length(6),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(Line::from("#").alignment(Alignment::Right)),
                Cell::from(""),
                Cell::from("Title"),
                Cell::from("Artist"),
                Cell::from("Album"),
                Cell::from(Line::from("Time").alignment(Alignment::Right)),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.muted_fg))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.highlight_colour))
        .block(Block::default());

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}
