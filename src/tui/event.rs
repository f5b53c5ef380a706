use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::io;
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // App-wide (passed to core::update)
    Quit, // Ctrl+Q or Ctrl+C
    Save, // Ctrl+S
    Resize(u16, u16),

    // Navigation keys
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,

    // Page-local editing
    InputChar(char),
    Backspace,
    Delete,
    Tab,
    Submit,
    Escape,

    // Mouse (column, row)
    MouseDown(u16, u16),
    MouseUp(u16, u16),
    /// Horizontal wheel; drifts the page container.
    ScrollLeft,
    ScrollRight,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(translate(event::read()?))
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Map a raw crossterm event. Events the app has no use for become `None`.
pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse),
        Event::Resize(width, height) => Some(TuiEvent::Resize(width, height)),
        _ => None,
    }
}

fn translate_key(key: KeyEvent) -> Option<TuiEvent> {
    // Some terminals also report releases; only presses count.
    if key.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key.code, key.modifiers);
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('q' | 'c')) => Some(TuiEvent::Quit),
        (KeyModifiers::CONTROL, KeyCode::Char('s')) => Some(TuiEvent::Save),
        (KeyModifiers::CONTROL, _) => None,
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        (_, KeyCode::Left) => Some(TuiEvent::Left),
        (_, KeyCode::Right) => Some(TuiEvent::Right),
        (_, KeyCode::Up) => Some(TuiEvent::Up),
        (_, KeyCode::Down) => Some(TuiEvent::Down),
        (_, KeyCode::PageUp) => Some(TuiEvent::PageUp),
        (_, KeyCode::PageDown) => Some(TuiEvent::PageDown),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Delete) => Some(TuiEvent::Delete),
        (_, KeyCode::Tab) => Some(TuiEvent::Tab),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        _ => None,
    }
}

fn translate_mouse(mouse: MouseEvent) -> Option<TuiEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            Some(TuiEvent::MouseDown(mouse.column, mouse.row))
        }
        MouseEventKind::Up(MouseButton::Left) => Some(TuiEvent::MouseUp(mouse.column, mouse.row)),
        MouseEventKind::ScrollLeft => Some(TuiEvent::ScrollLeft),
        MouseEventKind::ScrollRight => Some(TuiEvent::ScrollRight),
        _ => None,
    }
}
