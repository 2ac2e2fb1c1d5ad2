//! Layout helpers: the bounded list height and centered popups.

use crate::error::{PaginationError, PaginationResult};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Smallest list that still fits a border and the pager line
pub const MIN_LIST_HEIGHT: u16 = 3;

/// Height limit for a paginated list, either relative or in terminal lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMaxHeight", into = "String")]
pub enum MaxHeight {
    /// Percentage of the available height (1..=100)
    Percent(u16),

    /// Absolute number of lines
    Lines(u16),
}

impl Default for MaxHeight {
    fn default() -> Self {
        MaxHeight::Percent(100)
    }
}

impl MaxHeight {
    /// Height to use when `available` lines are offered.
    ///
    /// Never below [`MIN_LIST_HEIGHT`] unless fewer lines are available.
    pub fn resolve(self, available: u16) -> u16 {
        let wanted = match self {
            MaxHeight::Percent(percent) => {
                (u32::from(available) * u32::from(percent) / 100) as u16
            }
            MaxHeight::Lines(lines) => lines,
        };
        wanted.max(MIN_LIST_HEIGHT).min(available)
    }

    /// Top-aligned part of `area` honoring the limit
    pub fn bound(self, area: Rect) -> Rect {
        Rect {
            height: self.resolve(area.height),
            ..area
        }
    }
}

impl FromStr for MaxHeight {
    type Err = PaginationError;

    fn from_str(s: &str) -> PaginationResult<Self> {
        let s = s.trim();
        let invalid = || PaginationError::InvalidMaxHeight(s.to_string());

        if let Some(percent) = s.strip_suffix('%') {
            let percent: u16 = percent.trim().parse().map_err(|_| invalid())?;
            if !(1..=100).contains(&percent) {
                return Err(invalid());
            }
            return Ok(MaxHeight::Percent(percent));
        }

        let lines: u16 = s.parse().map_err(|_| invalid())?;
        if lines == 0 {
            return Err(invalid());
        }
        Ok(MaxHeight::Lines(lines))
    }
}

impl fmt::Display for MaxHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxHeight::Percent(percent) => write!(f, "{}%", percent),
            MaxHeight::Lines(lines) => write!(f, "{}", lines),
        }
    }
}

impl From<MaxHeight> for String {
    fn from(height: MaxHeight) -> Self {
        height.to_string()
    }
}

/// Config files may give the height as `"80%"`, `"25"` or `25`
#[derive(Deserialize)]
#[serde(untagged)]
enum RawMaxHeight {
    Lines(u16),
    Text(String),
}

impl TryFrom<RawMaxHeight> for MaxHeight {
    type Error = PaginationError;

    fn try_from(raw: RawMaxHeight) -> PaginationResult<Self> {
        match raw {
            RawMaxHeight::Lines(0) => Err(PaginationError::InvalidMaxHeight("0".to_string())),
            RawMaxHeight::Lines(lines) => Ok(MaxHeight::Lines(lines)),
            RawMaxHeight::Text(text) => text.parse(),
        }
    }
}

/// Create a centered rectangle with percentage of the parent area
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_max_height() {
        assert_eq!("100%".parse::<MaxHeight>(), Ok(MaxHeight::Percent(100)));
        assert_eq!(" 50 % ".parse::<MaxHeight>(), Ok(MaxHeight::Percent(50)));
        assert_eq!("25".parse::<MaxHeight>(), Ok(MaxHeight::Lines(25)));
        assert!("0".parse::<MaxHeight>().is_err());
        assert!("0%".parse::<MaxHeight>().is_err());
        assert!("150%".parse::<MaxHeight>().is_err());
        assert!("tall".parse::<MaxHeight>().is_err());
    }

    #[test]
    fn test_resolve() {
        assert_eq!(MaxHeight::default().resolve(40), 40);
        assert_eq!(MaxHeight::Percent(50).resolve(41), 20);
        assert_eq!(MaxHeight::Lines(10).resolve(40), 10);
        assert_eq!(MaxHeight::Lines(100).resolve(40), 40);
    }

    #[test]
    fn test_resolve_keeps_room_for_the_pager() {
        assert_eq!(MaxHeight::Percent(1).resolve(20), MIN_LIST_HEIGHT);
        assert_eq!(MaxHeight::Percent(10).resolve(24), MIN_LIST_HEIGHT);
        assert_eq!(MaxHeight::Lines(1).resolve(24), MIN_LIST_HEIGHT);
        assert_eq!(MaxHeight::Percent(1).resolve(2), 2);
        assert_eq!(MaxHeight::Percent(1).resolve(0), 0);
    }

    #[test]
    fn test_bound_keeps_origin() {
        let area = Rect::new(2, 3, 50, 20);
        assert_eq!(MaxHeight::Lines(8).bound(area), Rect::new(2, 3, 50, 8));
    }

    #[test]
    fn test_serde_accepts_strings_and_numbers() {
        let h: MaxHeight = serde_json::from_str("\"80%\"").unwrap();
        assert_eq!(h, MaxHeight::Percent(80));
        let h: MaxHeight = serde_json::from_str("12").unwrap();
        assert_eq!(h, MaxHeight::Lines(12));
        assert!(serde_json::from_str::<MaxHeight>("0").is_err());
        assert_eq!(
            serde_json::to_string(&MaxHeight::Percent(80)).unwrap(),
            "\"80%\""
        );
    }
}
