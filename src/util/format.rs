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

/// Formats a duration in seconds as `M:SS`, the way track lengths and the
/// playback position are shown.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_time(65), "1:05");
/// assert_eq!(format_time(3600), "60:00");
/// ```
pub(crate) fn format_time(total_seconds: u64) -> String {
    let mins = total_seconds / 60;
    let secs = total_seconds % 60;
    format!("{mins}:{secs:02}")
}

/// Formats a playlist's total length as `H hr M min`, or `M min` when under an
/// hour. Seconds are truncated.
pub(crate) fn format_total_time(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let mins = (total_seconds % 3600) / 60;

    if hours > 0 {
        format!("{hours} hr {mins} min")
    } else {
        format!("{mins} min")
    }
}

/// Abbreviates follower and listener counts: `1.2M`, `25K`, or the plain number
/// below a thousand. Thousands round to the nearest whole `K`.
pub(crate) fn format_number(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{}K", (n + 500) / 1_000)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_is_minutes_and_padded_seconds() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(200), "3:20");
        assert_eq!(format_time(3600), "60:00");
    }

    #[test]
    fn total_time_switches_to_hours() {
        assert_eq!(format_total_time(59), "0 min");
        assert_eq!(format_total_time(812), "13 min");
        assert_eq!(format_total_time(3600), "1 hr 0 min");
        assert_eq!(format_total_time(3 * 3600 + 25 * 60 + 59), "3 hr 25 min");
    }

    #[test]
    fn numbers_are_abbreviated() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_000), "1K");
        assert_eq!(format_number(25_400), "25K");
        assert_eq!(format_number(25_500), "26K");
        assert_eq!(format_number(25_600), "26K");
        assert_eq!(format_number(1_200_000), "1.2M");
        assert_eq!(format_number(83_000_000), "83.0M");
    }
}
