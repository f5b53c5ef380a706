//! # Scroller Bar Component
//!
//! Bottom bar with the previous/next buttons, the up/down paging buttons and
//! the status message. Previous/next mirror the selected page's adjacency; a
//! disabled button is dimmed and ignores clicks. Up/down only appear on pages
//! that show the vertical arrow.
//!
//! ```text
//!  ◀ Prev  ▲  ▼   Saved at 12:00:05                          Next ▶
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::core::navigation::Chrome;
use crate::tui::component::Component;

const PREV_LABEL: &str = " ◀ Prev ";
const NEXT_LABEL: &str = " Next ▶ ";
const UP_LABEL: &str = " ▲ ";
const DOWN_LABEL: &str = " ▼ ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollerButton {
    Prev,
    Next,
    Up,
    Down,
}

pub struct ScrollerBar<'a> {
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub vertical_arrow: bool,
    pub status: &'a str,
}

impl<'a> ScrollerBar<'a> {
    pub fn new(chrome: &Chrome, status: &'a str) -> Self {
        Self {
            prev_enabled: chrome.scroll_left_enabled,
            next_enabled: chrome.scroll_right_enabled,
            vertical_arrow: chrome.vertical_arrow_visible,
            status,
        }
    }

    /// Enabled button under `column`, if any.
    pub fn hit_test(&self, area: Rect, column: u16) -> Option<ScrollerButton> {
        let rel = column.checked_sub(area.x)?;
        if rel >= area.width {
            return None;
        }
        let prev_width = PREV_LABEL.width() as u16;
        let next_width = NEXT_LABEL.width() as u16;
        if self.prev_enabled && rel < prev_width {
            return Some(ScrollerButton::Prev);
        }
        if self.next_enabled && rel >= area.width.saturating_sub(next_width) {
            return Some(ScrollerButton::Next);
        }
        if self.vertical_arrow && rel >= prev_width {
            let up_end = prev_width + UP_LABEL.width() as u16;
            let down_end = up_end + DOWN_LABEL.width() as u16;
            if down_end + next_width > area.width {
                return None;
            }
            if rel < up_end {
                return Some(ScrollerButton::Up);
            }
            if rel < down_end {
                return Some(ScrollerButton::Down);
            }
        }
        None
    }

    fn button_style(enabled: bool) -> Style {
        if enabled {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }
}

impl Component for ScrollerBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let prev_width = PREV_LABEL.width() as u16;
        let next_width = NEXT_LABEL.width() as u16;

        let mut middle_width = area.width.saturating_sub(prev_width + next_width) as usize;

        let mut spans = vec![Span::styled(PREV_LABEL, Self::button_style(self.prev_enabled))];
        let arrows_width = UP_LABEL.width() + DOWN_LABEL.width();
        if self.vertical_arrow && arrows_width <= middle_width {
            spans.push(Span::styled(UP_LABEL, Self::button_style(true)));
            spans.push(Span::styled(DOWN_LABEL, Self::button_style(true)));
            middle_width -= arrows_width;
        }

        let status = format!("  {}", self.status);
        let status: String = status.chars().take(middle_width).collect();
        let padding = middle_width.saturating_sub(status.width());

        spans.push(Span::styled(status, Style::default().fg(Color::Gray)));
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(NEXT_LABEL, Self::button_style(self.next_enabled)));
        frame.render_widget(Line::from(spans), area);
    }
}
