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

//! Render the music player interface.
//!
//! This module renders the visual representation of the current track, the
//! transport controls, the playback modes, and the progress and volume bars.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    player::{PlayerState, RepeatMode, coordinator::PlaybackState, volume_ratio},
    render::icons::{
        ICON_HEART, ICON_HEART_OUTLINE, ICON_MUTED, ICON_NEXT, ICON_PAUSE, ICON_PLAY, ICON_PREV, ICON_REPEAT,
        ICON_REPEAT_ONE, ICON_SHUFFLE, ICON_VOLUME,
    },
    theme::Theme,
    util,
};

/// Renders the main player widget including track info and controls.
pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let state = app.coordinator.state();

    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .split(chunks[0]);

    let duration = state.current.as_ref().map_or(0, |t| t.duration);

    if let Some(track) = &state.current {
        let icon = match state.player_state() {
            PlayerState::Playing => ICON_PLAY,
            _ => ICON_PAUSE,
        };

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let track_line = Line::from(vec![
            Span::styled(format!(" {icon} "), bold).fg(Color::White),
            Span::styled(&track.title, bold).fg(theme.accent_colour),
            Span::raw(" from "),
            Span::styled(&track.album, bold).fg(theme.accent_colour),
            Span::raw(" by "),
            Span::styled(&track.artist, bold).fg(theme.accent_colour),
            Span::raw("  "),
            like_span(state, theme),
        ]);
        f.render_widget(Paragraph::new(track_line), info_chunks[0]);

        let time = state.position.min(duration);
        let remaining = duration.saturating_sub(time);

        let time_line = Line::from(vec![
            Span::styled(util::format::format_time(time), bold).fg(theme.accent_colour),
            Span::styled(" / ", bold).fg(Color::White),
            Span::styled(util::format::format_time(duration), bold).fg(theme.accent_colour),
            Span::styled(" (-", bold).fg(Color::White),
            Span::styled(util::format::format_time(remaining), bold).fg(theme.accent_colour),
            Span::styled(")", bold).fg(Color::White),
        ]);

        f.render_widget(Paragraph::new(time_line).alignment(Alignment::Right), info_chunks[1]);
    } else {
        f.render_widget(
            Paragraph::new(Span::styled(" Nothing playing", Style::default().fg(theme.muted_fg))),
            info_chunks[0],
        );
    }

    let control_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(26)])
        .split(chunks[2]);

    f.render_widget(Paragraph::new(controls_line(state, theme)), control_chunks[0]);

    let volume_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(5)])
        .split(control_chunks[1]);

    let volume_icon = if state.volume == 0 { ICON_MUTED } else { ICON_VOLUME };
    f.render_widget(Paragraph::new(volume_icon).fg(Color::White), volume_layout[0]);

    let volume_gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent_colour).bg(theme.gauge_track_colour))
        .ratio(volume_ratio(state.volume))
        .label("")
        .use_unicode(true);
    f.render_widget(volume_gauge, volume_layout[1]);

    let volume_label = Paragraph::new(format!(" {}%", state.volume))
        .alignment(Alignment::Right)
        .fg(Color::White);
    f.render_widget(volume_label, volume_layout[2]);

    let progress = if duration == 0 {
        0.0
    } else {
        (state.position as f64 / duration as f64).clamp(0.0, 1.0)
    };

    let position_gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent_colour).bg(theme.gauge_track_colour))
        .ratio(progress)
        .label("")
        .use_unicode(true);

    f.render_widget(position_gauge, chunks[4]);
}

fn like_span(state: &PlaybackState, theme: &Theme) -> Span<'static> {
    if state.liked {
        Span::styled(ICON_HEART, Style::default().fg(theme.accent_colour))
    } else {
        Span::styled(ICON_HEART_OUTLINE, Style::default().fg(theme.muted_fg))
    }
}

fn controls_line(state: &PlaybackState, theme: &Theme) -> Line<'static> {
    let mode_style = |on: bool| {
        if on {
            Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted_fg)
        }
    };

    let play_pause = if state.is_playing { ICON_PAUSE } else { ICON_PLAY };
    let repeat = match state.repeat {
        RepeatMode::One => ICON_REPEAT_ONE,
        _ => ICON_REPEAT,
    };

    let white = Style::default().fg(Color::White);

    let mut spans = vec![
        Span::styled(format!(" {ICON_SHUFFLE}"), mode_style(state.shuffle)),
        Span::styled(format!("   {ICON_PREV}"), white),
        Span::styled(format!("   {play_pause}"), white.add_modifier(Modifier::BOLD)),
        Span::styled(format!("   {ICON_NEXT}"), white),
        Span::styled(format!("   {repeat}"), mode_style(state.repeat != RepeatMode::Off)),
    ];

    if let Some(label) = queue_label(state) {
        spans.push(Span::styled(format!("   {label}"), Style::default().fg(theme.muted_fg)));
    }

    Line::from(spans)
}

/// Queue position of the current track, e.g. `3/8`, or `-/8` when it is not
/// queued.
fn queue_label(state: &PlaybackState) -> Option<String> {
    let len = state.queue.len();
    if len == 0 {
        return None;
    }

    let position = state
        .current
        .as_ref()
        .and_then(|t| state.queue.position_of(&t.id))
        .map_or_else(|| "-".to_string(), |i| (i + 1).to_string());

    Some(format!("{position}/{len}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::fixture;

    #[test]
    fn queue_label_tracks_current_position() {
        let (catalog, mut coordinator) = fixture();
        assert_eq!(queue_label(coordinator.state()).as_deref(), Some("1/8"));

        coordinator.previous();
        assert_eq!(queue_label(coordinator.state()).as_deref(), Some("8/8"));

        coordinator.play_track(catalog.tracks()[12].clone());
        assert_eq!(queue_label(coordinator.state()).as_deref(), Some("-/8"));
    }
}
