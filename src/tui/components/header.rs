//! # Header Component
//!
//! Top bar listing every titled page. The selected page is drawn reversed.
//! Clicking an item enters that page, so the item positions are computed once
//! and shared between rendering and hit testing.
//!
//! ```text
//!  Nucleus │  Communities   Nucleus   Souls   Spaces
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::core::navigation::HeaderItem;
use crate::tui::component::Component;

const BRAND: &str = " Nucleus │ ";
const GAP: u16 = 1;

pub struct Header<'a> {
    pub items: Vec<HeaderItem<'a>>,
}

impl<'a> Header<'a> {
    pub fn new(items: impl IntoIterator<Item = HeaderItem<'a>>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// `(x, width)` of each item relative to the bar's left edge.
    fn item_ranges(&self) -> Vec<(u16, u16)> {
        let mut x = BRAND.width() as u16;
        self.items
            .iter()
            .map(|item| {
                let width = item.title.width() as u16 + 2;
                let range = (x, width);
                x = x.saturating_add(width + GAP);
                range
            })
            .collect()
    }

    /// Page id under `column`, if any.
    pub fn hit_test(&self, area: Rect, column: u16) -> Option<&'a str> {
        let rel = column.checked_sub(area.x)?;
        self.item_ranges()
            .into_iter()
            .zip(&self.items)
            .find(|((x, width), _)| rel >= *x && rel < x + width)
            .map(|(_, item)| item.page_id)
    }
}

impl Component for Header<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            BRAND,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )];
        for item in &self.items {
            let style = if item.selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {} ", item.title), style));
            spans.push(Span::raw(" ".repeat(GAP as usize)));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
