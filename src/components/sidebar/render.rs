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
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph},
};

use crate::{components::SidebarView, route::Route, theme::Theme};

impl SidebarView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme, current: &Route, focused: bool) {
        let border_colour = if focused {
            theme.focus_border_colour
        } else {
            theme.border_colour
        };

        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(border_colour))
            .style(Style::default().bg(theme.sidebar_colour))
            .padding(Padding::new(1, 1, 1, 0));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let entry_style = |route: &Route| {
            if route == current {
                Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.muted_fg)
            }
        };

        let mut items: Vec<ListItem> = self
            .nav
            .iter()
            .map(|item| ListItem::new(Span::styled(item.name, entry_style(&item.route))))
            .collect();

        items.extend(self.sidebar.playlists().iter().map(|stub| {
            let route = Route::Playlist(stub.id.clone());
            ListItem::new(Span::styled(stub.name.clone(), entry_style(&route)))
        }));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let mut state = ListState::default();
        if focused {
            state.select(self.selected);
        }

        let list = List::new(items)
            .highlight_style(Style::default().bg(theme.highlight_colour))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, chunks[0], &mut state);

        f.render_widget(
            Paragraph::new(Span::styled("c  Create playlist", Style::default().fg(theme.muted_fg))),
            chunks[1],
        );
    }

    /// Draws the create-playlist dialog centred over `area`, if open.
    pub(crate) fn draw_dialog(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let Some(input) = self.dialog_input() else {
            return;
        };

        let [row] = Layout::vertical([Constraint::Length(5)]).flex(Flex::Center).areas(area);
        let [popup] = Layout::horizontal([Constraint::Length(44)]).flex(Flex::Center).areas(row);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.focus_border_colour))
            .style(Style::default().bg(theme.highlight_colour))
            .title(" Create playlist ")
            .padding(Padding::horizontal(1));
        let inner = block.inner(popup);

        f.render_widget(Clear, popup);
        f.render_widget(
            Paragraph::new(vec![
                Line::from(input.value()),
                Line::from(""),
                Line::from(Span::styled("Enter to create, Esc to cancel", Style::default().fg(theme.muted_fg))),
            ])
            .block(block),
            popup,
        );

        f.set_cursor_position((inner.x + input.cursor() as u16, inner.y));
    }
}
