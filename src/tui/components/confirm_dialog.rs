//! # Confirmation Dialog
//!
//! Centered overlay for a pending `ModalRequest`. While it is open every key
//! goes here: `y`/Enter confirms, `n`/Esc cancels, anything else is ignored.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::core::transition::{ConfirmOutcome, ModalKind, ModalRequest};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const MAX_WIDTH: u16 = 56;
const HEIGHT: u16 = 7;

pub struct ConfirmDialog<'a> {
    request: &'a ModalRequest,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(request: &'a ModalRequest) -> Self {
        Self { request }
    }
}

impl EventHandler for ConfirmDialog<'_> {
    type Event = ConfirmOutcome;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ConfirmOutcome> {
        match (self.request.kind, event) {
            (ModalKind::YesCancel, TuiEvent::InputChar('y' | 'Y') | TuiEvent::Submit) => {
                Some(ConfirmOutcome::Confirm)
            }
            (ModalKind::YesCancel, TuiEvent::InputChar('n' | 'N') | TuiEvent::Escape) => {
                Some(ConfirmOutcome::Cancel)
            }
            _ => None,
        }
    }
}

impl Component for ConfirmDialog<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(MAX_WIDTH, HEIGHT, area);
        frame.render_widget(Clear, overlay);

        let help = match self.request.kind {
            ModalKind::YesCancel => " y Yes  n Cancel ",
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Confirm ")
            .title_bottom(Line::from(help).centered())
            .padding(Padding::new(2, 2, 1, 0));

        let body = Paragraph::new(self.request.message)
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(body, overlay);
    }
}

/// A `width` x `height` rect centered in `outer`, shrunk to fit.
fn centered_rect(width: u16, height: u16, outer: Rect) -> Rect {
    let width = width.min(outer.width);
    let height = height.min(outer.height);
    Rect::new(
        outer.x + (outer.width - width) / 2,
        outer.y + (outer.height - height) / 2,
        width,
        height,
    )
}
