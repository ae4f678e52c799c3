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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called on every
//! terminal tick or state change to provide a reactive user interface.

mod commander;
pub(crate) mod icons;
mod player;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Padding, Paragraph},
};

use crate::{
    App,
    components::ViewContext,
    events::Focus,
    render::{commander::draw_commander, player::draw_player},
    route::Route,
    theme::Theme,
};

const SIDEBAR_WIDTH: u16 = 28;

/// Renders the user interface to the terminal frame.
///
/// The screen is split into the sidebar and the routed content view, with
/// the playback bar and the command line along the bottom. The create
/// playlist dialog, when open, is drawn over everything else.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the UI
///   to reflect changes and update internal view state (like list scroll
///   positions).
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(Block::default().style(Style::default().bg(app.theme.background_colour)), area);

    // Outer layout: main, player, command line
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(7), Constraint::Length(1)])
        .split(area);

    // Main layout: sidebar, content
    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(outer[0]);

    let content_focused = app.focus == Focus::Content;

    app.sidebar_view
        .draw(f, main[0], &app.theme, &app.route, app.focus == Focus::Sidebar);

    let ctx = ViewContext {
        catalog: &app.catalog,
        playback: app.coordinator.state(),
    };

    match &app.route {
        Route::Home => app.home_view.draw(f, main[1], ctx, &app.theme, content_focused),
        Route::Search => app.search_view.draw(f, main[1], ctx, &app.theme),
        Route::Library => app.library_view.draw(f, main[1], ctx, &app.theme, content_focused),
        Route::Playlist(_) => app.playlist_view.draw(f, main[1], ctx, &app.theme),
        Route::NotFound(path) => draw_not_found(f, main[1], path, &app.theme),
    }

    draw_player(f, outer[1], app);

    draw_commander(f, outer[2], app);

    app.sidebar_view.draw_dialog(f, area, &app.theme);
}

fn draw_not_found(f: &mut Frame, area: Rect, path: &str, theme: &Theme) {
    let block = Block::default().padding(Padding::top(area.height / 3));

    let text = vec![
        Line::styled("404", Style::default().fg(theme.heading_fg).add_modifier(Modifier::BOLD)),
        Line::styled(format!("Nothing lives at {path}"), Style::default().fg(theme.muted_fg)),
        Line::from(""),
        Line::styled("Press 1 to go home", Style::default().fg(theme.muted_fg)),
    ];

    f.render_widget(Paragraph::new(text).alignment(Alignment::Center).block(block), area);
}
