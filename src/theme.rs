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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) sidebar_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) focus_border_colour: Color,
    pub(crate) gauge_track_colour: Color,
    pub(crate) commander_colour: Color,
    pub(crate) highlight_colour: Color,
    pub(crate) heading_fg: Color,
    pub(crate) muted_fg: Color,
    pub(crate) error_fg: Color,

    pub(crate) table_time_fg: Color,
    pub(crate) table_artist_fg: Color,
    pub(crate) table_album_fg: Color,
    pub(crate) table_track_number_fg: Color,
    pub(crate) table_track_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(18, 18, 18),
            sidebar_colour: Color::Rgb(0, 0, 0),
            accent_colour: Color::Rgb(30, 215, 96),
            border_colour: Color::Rgb(64, 64, 64),
            focus_border_colour: Color::Rgb(30, 215, 96),
            gauge_track_colour: Color::Rgb(40, 40, 40),
            commander_colour: Color::Rgb(255, 255, 255),
            highlight_colour: Color::Rgb(42, 42, 42),
            heading_fg: Color::Rgb(255, 255, 255),
            muted_fg: Color::Rgb(179, 179, 179),
            error_fg: Color::Rgb(233, 20, 41),

            table_time_fg: Color::Rgb(179, 179, 179),
            table_artist_fg: Color::Rgb(179, 179, 179),
            table_album_fg: Color::Rgb(140, 140, 140),
            table_track_number_fg: Color::Rgb(140, 140, 140),
            table_track_fg: Color::Rgb(255, 255, 255),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string, used to set the terminal emulator's background via escape
    /// sequences.
    ///
    /// Returns `None` for anything but a [`Color::Rgb`] colour.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{r:02x}{g:02x}{b:02x}")),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_to_hex() {
        assert_eq!(Theme::to_hex(Color::Rgb(30, 215, 96)).as_deref(), Some("#1ed760"));
        assert_eq!(Theme::to_hex(Color::Blue), None);
    }
}
