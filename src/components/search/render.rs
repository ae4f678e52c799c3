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

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::{
    components::{SearchView, ViewContext},
    theme::Theme,
};

impl SearchView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, ctx: ViewContext<'_>, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let border_colour = if self.editing {
            theme.focus_border_colour
        } else {
            theme.border_colour
        };

        let input_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .title(" What do you want to listen to? ");
        let input_area = input_block.inner(chunks[0]);

        f.render_widget(Paragraph::new(self.input.value()).block(input_block), chunks[0]);

        if self.editing {
            f.set_cursor_position((input_area.x + self.input.cursor() as u16, input_area.y));
        }

        if self.is_blank() {
            self.draw_browse(f, chunks[1], ctx, theme);
        } else if self.results.tracks().is_empty() {
            let message = Paragraph::new(Line::from(Span::styled(
                format!("No results found for \"{}\"", self.query().trim()),
                Style::default().fg(theme.muted_fg),
            )))
            .block(Block::default().padding(Padding::uniform(1)));
            f.render_widget(message, chunks[1]);
        } else {
            self.results.draw(f, chunks[1], ctx.playback, theme);
        }
    }

    fn draw_browse(&mut self, f: &mut Frame, area: Rect, ctx: ViewContext<'_>, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(area);

        let heading = |title: &'static str| {
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.border_colour))
                .title(Span::styled(
                    title,
                    Style::default().fg(theme.heading_fg).add_modifier(Modifier::BOLD),
                ))
                .padding(Padding::horizontal(1))
        };

        let genres: Vec<Span> = ctx
            .catalog
            .genres()
            .iter()
            .flat_map(|g| {
                [
                    Span::styled(format!(" {} ", g.name), Style::default().fg(theme.table_track_fg).bg(theme.highlight_colour)),
                    Span::raw(" "),
                ]
            })
            .collect();

        f.render_widget(
            Paragraph::new(Line::from(genres))
                .wrap(Wrap { trim: false })
                .block(heading("Browse all")),
            chunks[0],
        );

        let items: Vec<ListItem> = ctx
            .catalog
            .featured_playlists()
            .iter()
            .map(|p| {
                ListItem::new(Line::from(vec![
                    Span::styled(p.name.as_str(), Style::default().fg(theme.table_track_fg)),
                    Span::styled(format!("  {}", p.description), Style::default().fg(theme.muted_fg)),
                ]))
            })
            .collect();

        let mut state = ListState::default();
        if !self.editing {
            state.select(self.featured_selected);
        }

        let list = List::new(items)
            .block(heading("Featured playlists"))
            .highlight_style(Style::default().bg(theme.highlight_colour))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, chunks[1], &mut state);
    }
}
