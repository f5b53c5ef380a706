//! UI seams: components (header, scroller bar, dialog) and pages.
//!
//! Components receive data via props (struct fields) and render to a `Frame`
//! within a given `Rect`. Pages additionally take part in navigation through
//! the core `Page` trait and read world data through a `DataContext`. A page
//! draws into a `Buffer` of its own full size, which the strip then clips.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::core::action::Action;
use crate::core::navigation::DataContext;
use crate::core::page::Page;
use crate::tui::event::TuiEvent;

/// A reusable UI component.
///
/// `render` takes `&mut self` so a component can keep presentation caches,
/// like ratatui's `StatefulWidget`.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}

/// What a page did with an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageResponse {
    /// Not for this page; the app-wide key bindings get a chance.
    Ignored,
    Consumed,
    /// Consumed, and these actions should run in order.
    Actions(Vec<Action>),
}

/// A page the terminal front end can draw.
pub trait TuiPage: Page {
    fn draw(&mut self, area: Rect, buf: &mut Buffer, ctx: &DataContext<'_>);

    /// Only called while this page is selected and no dialog is open.
    fn handle_event(&mut self, _event: &TuiEvent, _ctx: &DataContext<'_>) -> PageResponse {
        PageResponse::Ignored
    }
}
