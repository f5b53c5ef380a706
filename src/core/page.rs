//! # Page Contract
//!
//! Everything the navigation controller needs to know about a page.
//! Concrete pages live in the front end (`tui::pages`); the controller only
//! ever sees `dyn Page` (or a trait that extends it).
//!
//! Every hook has a default so simple pages only implement identity.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::layout::ViewHandle;
use crate::core::wizard::{DraftItem, DraftKind};

/// Classification of a page. Transition rules are keyed by the old and new type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    /// Landing pages outside the wizard (community overview).
    Intro,
    /// Steps of the new-nucleus wizard.
    Assistant,
    /// Regular content pages for a committed nucleus.
    Page,
}

impl PageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageType::Intro => "intro",
            PageType::Assistant => "assistant",
            PageType::Page => "page",
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A page's declared neighbour in one direction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PageLink {
    /// Use the adjacent page in registration order.
    #[default]
    Derived,
    /// Jump to a specific page id.
    To(String),
    /// No neighbour, even if one exists in registration order.
    None,
}

/// A unit of navigable content.
pub trait Page {
    fn id(&self) -> &str;

    fn page_type(&self) -> PageType;

    /// Header label. Pages without a title get no header item.
    fn title(&self) -> Option<&str> {
        None
    }

    fn show_header(&self) -> bool {
        true
    }

    fn show_vertical_arrow(&self) -> bool {
        false
    }

    fn prev_page(&self) -> PageLink {
        PageLink::Derived
    }

    fn next_page(&self) -> PageLink {
        PageLink::Derived
    }

    /// Called once at registration. `None` means the page occupies no space
    /// in the scroller.
    fn render(&mut self) -> Option<ViewHandle> {
        Some(ViewHandle::viewport())
    }

    fn on_enter(&mut self) {}

    /// Returning `false` vetoes leaving the page.
    fn on_leave(&mut self) -> bool {
        true
    }

    fn on_resize(&mut self) {}

    fn page_up(&mut self) {}

    fn page_down(&mut self) {}

    fn is_swippable(&self) -> bool {
        true
    }

    /// Which committed collection this page's drafts feed, if it is a wizard step.
    fn draft_kind(&self) -> Option<DraftKind> {
        None
    }

    fn draft_items(&self) -> Vec<DraftItem> {
        Vec::new()
    }

    fn clear_draft_items(&mut self) {}
}
