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
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph},
};

use crate::{
    components::{LibraryView, ViewContext},
    model::search::{LibraryEntry, LibraryFilter},
    theme::Theme,
    util::format::format_number,
};

impl LibraryView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, ctx: ViewContext<'_>, theme: &Theme, focused: bool) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        let border_colour = if self.editing {
            theme.focus_border_colour
        } else {
            theme.border_colour
        };

        let input_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .title(" Search in Your Library ");
        let input_area = input_block.inner(chunks[0]);
        f.render_widget(Paragraph::new(self.input.value()).block(input_block), chunks[0]);

        if self.editing {
            f.set_cursor_position((input_area.x + self.input.cursor() as u16, input_area.y));
        }

        let tags: Vec<Span> = LibraryFilter::ALL
            .iter()
            .flat_map(|&tag| {
                let style = if tag == self.filter {
                    Style::default().fg(theme.background_colour).bg(theme.heading_fg)
                } else {
                    Style::default().fg(theme.heading_fg).bg(theme.highlight_colour)
                };
                [Span::styled(format!(" {} ", tag.label()), style), Span::raw(" ")]
            })
            .collect();
        f.render_widget(
            Paragraph::new(Line::from(tags)).block(Block::default().padding(Padding::horizontal(1))),
            chunks[1],
        );

        let entries = self.entries(ctx.catalog);

        if self.has_no_results(&entries) {
            let message = Paragraph::new(vec![
                Line::from(Span::styled("No results", Style::default().fg(theme.heading_fg).add_modifier(Modifier::BOLD))),
                Line::from(Span::styled("Try a different search term", Style::default().fg(theme.muted_fg))),
            ])
            .block(Block::default().padding(Padding::uniform(1)));
            f.render_widget(message, chunks[2]);
            return;
        }

        let items: Vec<ListItem> = entries.iter().map(|entry| self.entry_line(entry, theme)).collect();

        let mut state = ListState::default();
        if focused && !self.editing {
            state.select(self.selected.map(|i| i.min(entries.len().saturating_sub(1))));
        }

        let list = List::new(items)
            .block(Block::default().padding(Padding::new(1, 1, 1, 0)))
            .highlight_style(Style::default().bg(theme.highlight_colour))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, chunks[2], &mut state);
    }

    fn entry_line(&self, entry: &LibraryEntry<'_>, theme: &Theme) -> ListItem<'static> {
        let (kind, name, detail) = match entry {
            LibraryEntry::Playlist(p) => ("Playlist", p.name.clone(), format!("{} songs", p.tracks.len())),
            LibraryEntry::Artist(a) => ("Artist", a.name.clone(), format!("{} followers", format_number(a.followers))),
            LibraryEntry::Album(a) => ("Album", a.title.clone(), format!("{} · {}", a.artist, a.year)),
            LibraryEntry::Podcast(p) => {
                let following = if self.is_following(p) { "Following" } else { "Follow" };
                ("Podcast", p.title.clone(), format!("{} · {} episodes · {following}", p.host, p.episodes))
            }
        };

        ListItem::new(Line::from(vec![
            Span::styled(format!("{kind:<9}"), Style::default().fg(theme.muted_fg)),
            Span::styled(name, Style::default().fg(theme.table_track_fg)),
            Span::styled(format!("  {detail}"), Style::default().fg(theme.muted_fg)),
        ]))
    }
}
