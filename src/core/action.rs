//! # Actions
//!
//! Everything that can happen in Nucleus becomes an `Action`.
//! User clicks a header item? That's `Action::EnterPage(id)`.
//! Terminal resized? That's `Action::Resize { width, height }`.
//!
//! The `update()` function applies an action to the app state and returns an
//! `Effect` for the adapter to carry out. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::navigation::{Denial, SwipeDirection, Transition};
use crate::core::page::Page;
use crate::core::state::App;
use crate::core::transition::ConfirmOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Header item clicked, or a page asked to go somewhere.
    EnterPage(String),
    PrevPage,
    NextPage,
    PageUp,
    PageDown,
    Swipe(SwipeDirection),
    Resize { width: u16, height: u16 },
    /// Answer to the open confirmation dialog.
    Resolve(ConfirmOutcome),
    SelectNucleus(String),
    Save,
    Quit,
}

/// Work the adapter has to do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Save,
    Quit,
}

fn describe(transition: &Transition) -> Option<String> {
    match transition {
        Transition::Completed => None,
        Transition::Pending => Some("Waiting for confirmation".to_string()),
        Transition::Denied(Denial::LeaveVetoed(id)) => Some(format!("Can't leave {id} yet")),
        Transition::Denied(Denial::UnknownPage(id)) => Some(format!("No page named {id}")),
        Transition::Denied(_) => None,
    }
}

pub fn update<P: ?Sized + Page>(app: &mut App<P>, action: Action) -> Effect {
    debug!("update: {:?}", action);
    let transition = match action {
        Action::EnterPage(id) => Some(app.nav.enter_by_id(&id, false)),
        Action::PrevPage => app.nav.prev(false),
        Action::NextPage => app.nav.next(false),
        Action::PageUp => {
            app.nav.page_up();
            None
        }
        Action::PageDown => {
            app.nav.page_down();
            None
        }
        Action::Swipe(direction) => app.nav.swipe(direction),
        Action::Resize { width, height } => {
            app.nav.resize(width, height);
            None
        }
        Action::Resolve(outcome) => Some(app.nav.resolve_confirmation(outcome)),
        Action::SelectNucleus(id) => {
            if app.nav.set_current_nucleus_id(&id) {
                app.status_message = String::new();
            }
            None
        }
        Action::Save => return Effect::Save,
        Action::Quit => return Effect::Quit,
    };

    if let Some(transition) = transition {
        match describe(&transition) {
            Some(message) => app.status_message = message,
            None if transition.is_completed() => app.status_message.clear(),
            None => {}
        }
    }
    Effect::None
}
