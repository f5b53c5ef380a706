//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the page strip
//! and its chrome, and translates terminal events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! ```text
//! Ctrl+Q / Ctrl+S / resize      → always handled
//! dialog open                   → ConfirmDialog only
//! mouse press/release           → SwipeTracker → swipe or click hit test
//! anything else                 → selected page, then the global keys
//! ```
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps until the next input event or the
//! next timer (layout reset, periodic save) and only redraws when one of
//! those changed something.

pub mod component;
pub mod components;
pub mod event;
pub mod pages;
pub mod swipe;
pub mod ui;

use log::{debug, info, warn};
use ratatui::layout::Rect;
use std::io::{self, stdout};
use std::time::Instant;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::data::World;
use crate::core::persistence::{FileStore, MemoryStore, Persistence, SlotStore};
use crate::core::state::App;
use crate::tui::component::{EventHandler, PageResponse, TuiPage};
use crate::tui::components::ConfirmDialog;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::swipe::{Gesture, SwipeTracker};

pub type TuiApp = App<dyn TuiPage>;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub swipe: SwipeTracker,
    /// Terminal area of the last frame, for hit testing.
    pub screen: Rect,
}

impl TuiState {
    pub fn new(swipe_threshold: u16) -> Self {
        Self {
            swipe: SwipeTracker::new(swipe_threshold),
            screen: Rect::default(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

fn open_store(config: &ResolvedConfig) -> io::Result<Box<dyn SlotStore>> {
    if config.ephemeral {
        info!("Ephemeral run, nothing is saved");
        return Ok(Box::new(MemoryStore::new()));
    }
    Ok(Box::new(FileStore::open(&config.data_dir)?))
}

/// Route one terminal event. Returns the effect the loop must carry out.
pub fn dispatch(app: &mut TuiApp, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::Quit => return update(app, Action::Quit),
        TuiEvent::Save => return update(app, Action::Save),
        TuiEvent::Resize(width, height) => {
            tui.screen = Rect::new(0, 0, width, height);
            return update(
                app,
                Action::Resize {
                    width,
                    height: ui::body_height(height),
                },
            );
        }
        _ => {}
    }

    // An open dialog swallows everything else.
    if let Some(pending) = app.nav.pending_confirmation() {
        let outcome = ConfirmDialog::new(&pending.request).handle_event(&event);
        return match outcome {
            Some(outcome) => update(app, Action::Resolve(outcome)),
            None => Effect::None,
        };
    }

    match event {
        TuiEvent::MouseDown(column, row) => {
            tui.swipe.press(column, row);
            return Effect::None;
        }
        TuiEvent::MouseUp(column, row) => {
            return match tui.swipe.release(column, row) {
                Some(Gesture::Swipe(direction)) => update(app, Action::Swipe(direction)),
                Some(Gesture::Click(column, row)) => {
                    match ui::hit_test(tui.screen, app, column, row) {
                        Some(action) => update(app, action),
                        None => Effect::None,
                    }
                }
                None => Effect::None,
            };
        }
        TuiEvent::ScrollLeft => {
            app.nav.scroller_mut().drift_container(-1, 0);
            return Effect::None;
        }
        TuiEvent::ScrollRight => {
            app.nav.scroller_mut().drift_container(1, 0);
            return Effect::None;
        }
        _ => {}
    }

    match page_response(app, &event) {
        PageResponse::Consumed => return Effect::None,
        PageResponse::Actions(actions) => {
            let mut effect = Effect::None;
            for action in actions {
                let next = update(app, action);
                if next != Effect::None {
                    effect = next;
                }
            }
            return effect;
        }
        PageResponse::Ignored => {}
    }

    let action = match event {
        TuiEvent::Left => Action::PrevPage,
        TuiEvent::Right => Action::NextPage,
        TuiEvent::Up | TuiEvent::PageUp => Action::PageUp,
        TuiEvent::Down | TuiEvent::PageDown => Action::PageDown,
        _ => return Effect::None,
    };
    update(app, action)
}

fn page_response(app: &mut TuiApp, event: &TuiEvent) -> PageResponse {
    let Some(index) = app
        .nav
        .state()
        .selected_page_id
        .as_deref()
        .and_then(|id| app.nav.page_index(id))
    else {
        return PageResponse::Ignored;
    };
    let (pages, ctx) = app.nav.parts_mut();
    pages[index].page_mut().handle_event(event, &ctx)
}

fn save(app: &mut TuiApp) {
    if app.save_now() {
        info!("Saved on request");
    }
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let now = Instant::now();
    let persistence = Persistence::new(open_store(&config)?, config.save_interval, now);
    let mut app = App::new(pages::all(), Box::new(World::new()), persistence, &config, now)
        .map_err(io::Error::other)?;
    let mut tui = TuiState::new(config.swipe_threshold);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Mouse capture unavailable: {}", e);
            None
        }
    };

    let size = terminal.size()?;
    dispatch(&mut app, &mut tui, TuiEvent::Resize(size.width, size.height));

    let mut needs_redraw = true; // Force first frame
    let result = loop {
        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &mut app)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let timeout = app.next_deadline(Instant::now());
        let mut events = Vec::new();
        match poll_event_timeout(timeout) {
            Ok(Some(first)) => events.push(first),
            Ok(None) => {}
            Err(e) => break Err(e),
        }
        // Drain everything already queued before the next draw
        while !events.is_empty() {
            match poll_event_immediate() {
                Ok(Some(event)) => events.push(event),
                Ok(None) => break,
                Err(e) => {
                    warn!("Dropping input after read error: {}", e);
                    break;
                }
            }
        }

        let mut should_quit = false;
        for event in events {
            needs_redraw = true;
            debug!("Event: {:?}", event);
            match dispatch(&mut app, &mut tui, event) {
                Effect::Quit => should_quit = true,
                Effect::Save => save(&mut app),
                Effect::None => {}
            }
        }
        if should_quit {
            break Ok(());
        }

        if app.tick(Instant::now()) {
            needs_redraw = true;
        }
    };

    app.shutdown();
    ratatui::restore();
    result
}
