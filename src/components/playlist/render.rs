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

//! UI rendering logic for the playlist view.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::{PlaylistView, ViewContext},
    render::icons::{ICON_HEART, ICON_HEART_OUTLINE},
    theme::Theme,
    util::format::format_total_time,
};

impl PlaylistView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, ctx: ViewContext<'_>, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(area);

        let playlist = self.playlist(ctx.catalog);

        let heart = if self.is_liked() {
            Span::styled(ICON_HEART, Style::default().fg(theme.accent_colour))
        } else {
            Span::styled(ICON_HEART_OUTLINE, Style::default().fg(theme.muted_fg))
        };

        let header = Paragraph::new(vec![
            Line::from(Span::styled("PLAYLIST", Style::default().fg(theme.muted_fg))),
            Line::from(vec![
                Span::styled(
                    playlist.name.as_str(),
                    Style::default().fg(theme.heading_fg).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                heart,
            ]),
            Line::from(Span::styled(playlist.description.as_str(), Style::default().fg(theme.muted_fg))),
            Line::from(Span::styled(
                format!(
                    "{} songs, {}",
                    playlist.tracks.len(),
                    format_total_time(playlist.total_duration())
                ),
                Style::default().fg(theme.table_track_fg),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border_colour))
                .padding(Padding::horizontal(1)),
        );

        f.render_widget(header, chunks[0]);
        self.track_table.draw(f, chunks[1], ctx.playback, theme);
    }
}
