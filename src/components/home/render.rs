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

use chrono::{Local, Timelike};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph},
};

use crate::{
    components::{HomeView, ViewContext, home::HomeSection, home::greeting},
    theme::Theme,
};

impl HomeView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, ctx: ViewContext<'_>, theme: &Theme, focused: bool) {
        let heights: Vec<u16> = HomeSection::ALL
            .iter()
            .map(|s| s.playlists(ctx.catalog).len() as u16 + 2)
            .collect();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(heights[0]),
                Constraint::Length(heights[1]),
                Constraint::Min(0),
            ])
            .split(area);

        let header = Paragraph::new(Line::from(Span::styled(
            greeting(Local::now().hour()),
            Style::default().fg(theme.heading_fg).add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().padding(Padding::horizontal(1)));
        f.render_widget(header, chunks[0]);

        // The cursor indexes the flattened sections; map it back per section.
        let mut offset = 0;
        for (section, chunk) in HomeSection::ALL.iter().zip(chunks.iter().skip(1)) {
            let playlists = section.playlists(ctx.catalog);

            let items: Vec<ListItem> = playlists
                .iter()
                .map(|p| {
                    ListItem::new(Line::from(vec![
                        Span::styled(p.name.as_str(), Style::default().fg(theme.table_track_fg)),
                        Span::styled(format!("  {}", p.description), Style::default().fg(theme.muted_fg)),
                    ]))
                })
                .collect();

            let mut state = ListState::default();
            if focused {
                state.select(
                    self.selected
                        .filter(|&i| i >= offset && i < offset + playlists.len())
                        .map(|i| i - offset),
                );
            }

            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::TOP)
                        .border_style(Style::default().fg(theme.border_colour))
                        .title(Span::styled(
                            section.title(),
                            Style::default().fg(theme.heading_fg).add_modifier(Modifier::BOLD),
                        ))
                        .padding(Padding::horizontal(1)),
                )
                .highlight_style(Style::default().bg(theme.highlight_colour))
                .highlight_symbol("> ");

            f.render_stateful_widget(list, *chunk, &mut state);
            offset += playlists.len();
        }
    }
}
