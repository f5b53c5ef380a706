//! # Navigation Controller
//!
//! Owns the ordered page list and decides which page is selected. Every input
//! source (header clicks, scroller buttons, swipes, keys) ends up in
//! `enter_by_id`, which runs the checks in a fixed order:
//!
//! ```text
//! enter(target, force)
//!   ├── unknown target                  → Denied(UnknownPage)
//!   ├── type rule = ConfirmDiscard      → park PendingConfirmation, Pending
//!   ├── current page vetoes leave       → Denied(LeaveVetoed) unless force
//!   ├── type rule effects               (commit / reset wizard drafts)
//!   └── select target                   → Completed
//!        recenter scroller, on_enter(), header marker, chrome
//! ```
//!
//! Nothing is mutated before the last veto has passed, so a denied call
//! leaves the controller exactly as it was.
//!
//! Invariant once a page has been entered: exactly one entry is selected and
//! `current_type` is that entry's type.

use log::{debug, info, warn};
use std::collections::HashSet;
use thiserror::Error;

use crate::core::data::DataStore;
use crate::core::layout::PageScroller;
use crate::core::page::{Page, PageLink, PageType};
use crate::core::transition::{
    ConfirmOutcome, DISCARD_NUCLEUS, PendingConfirmation, TypeChange, TypeRule, rule_for,
};
use crate::core::wizard::{DraftItem, DraftKind, commit_drafts};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("no pages registered")]
    NoPages,
    #[error("duplicate page id: {0}")]
    DuplicatePage(String),
}

/// A registered page plus everything the controller derived from it.
pub struct PageEntry<P: ?Sized> {
    pub id: String,
    pub page_type: PageType,
    pub title: Option<String>,
    pub prev_page_id: Option<String>,
    pub next_page_id: Option<String>,
    pub show_header: bool,
    pub show_vertical_arrow: bool,
    selected: bool,
    page: Box<P>,
}

impl<P: ?Sized> PageEntry<P> {
    /// Whether this page carries the header "selected" marker.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub selected_page_id: Option<String>,
    pub current_type: Option<PageType>,
}

/// Visibility and enabled flags for the controls around the pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chrome {
    pub scroll_left_enabled: bool,
    pub scroll_right_enabled: bool,
    pub header_visible: bool,
    pub vertical_arrow_visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderItem<'a> {
    pub page_id: &'a str,
    pub title: &'a str,
    pub selected: bool,
}

/// Why an `enter` did not happen. None of these are errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Denial {
    UnknownPage(String),
    IndexOutOfRange(usize),
    LeaveVetoed(String),
    Cancelled,
    NothingPending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Completed,
    /// A confirmation dialog is open; see `pending_confirmation()`.
    Pending,
    Denied(Denial),
}

impl Transition {
    pub fn is_completed(&self) -> bool {
        matches!(self, Transition::Completed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Read-only view of the data pages need while drawing or handling input.
pub struct DataContext<'a> {
    pub data: &'a dyn DataStore,
    pub current_nucleus_id: Option<&'a str>,
}

pub struct NavigationController<P: ?Sized + Page = dyn Page> {
    pages: Vec<PageEntry<P>>,
    state: NavigationState,
    chrome: Chrome,
    scroller: PageScroller,
    data: Box<dyn DataStore>,
    pending: Option<PendingConfirmation>,
    current_nucleus_id: Option<String>,
}

fn resolve_link(
    link: PageLink,
    neighbour: Option<&str>,
    known: &HashSet<String>,
    page_id: &str,
) -> Option<String> {
    match link {
        PageLink::Derived => neighbour.map(str::to_string),
        PageLink::To(target) if known.contains(&target) => Some(target),
        PageLink::To(target) => {
            warn!("Page {page_id} links to unknown page {target}; link dropped");
            None
        }
        PageLink::None => None,
    }
}

impl<P: ?Sized + Page> NavigationController<P> {
    /// Register `pages` in order. Each page is rendered once and placed on
    /// the scroller strip; adjacency is derived unless a page overrides it.
    /// The first page never gets a previous link, the last never a next link.
    pub fn new(pages: Vec<Box<P>>, data: Box<dyn DataStore>) -> Result<Self, NavigationError> {
        if pages.is_empty() {
            return Err(NavigationError::NoPages);
        }

        let mut known = HashSet::new();
        let mut scroller = PageScroller::new();
        let mut entries = Vec::with_capacity(pages.len());

        for mut page in pages {
            let id = page.id().to_string();
            if !known.insert(id.clone()) {
                return Err(NavigationError::DuplicatePage(id));
            }
            if let Some(view) = page.render() {
                scroller.insert(&id, view);
            }
            entries.push(PageEntry {
                page_type: page.page_type(),
                title: page.title().filter(|t| !t.is_empty()).map(str::to_string),
                prev_page_id: None,
                next_page_id: None,
                show_header: page.show_header(),
                show_vertical_arrow: page.show_vertical_arrow(),
                selected: false,
                id,
                page,
            });
        }

        let ids: Vec<String> = entries.iter().map(|e| e.id.clone()).collect();
        let last = entries.len() - 1;
        for (i, entry) in entries.iter_mut().enumerate() {
            if i > 0 {
                let link = entry.page.prev_page();
                entry.prev_page_id = resolve_link(link, Some(&ids[i - 1]), &known, &entry.id);
            }
            if i < last {
                let link = entry.page.next_page();
                entry.next_page_id = resolve_link(link, Some(&ids[i + 1]), &known, &entry.id);
            }
        }

        info!("Registered {} pages", entries.len());

        Ok(Self {
            pages: entries,
            state: NavigationState::default(),
            chrome: Chrome::default(),
            scroller,
            data,
            pending: None,
            current_nucleus_id: None,
        })
    }

    pub fn pages(&self) -> &[PageEntry<P>] {
        &self.pages
    }

    pub fn page(&self, id: &str) -> Option<&PageEntry<P>> {
        self.pages.iter().find(|e| e.id == id)
    }

    pub fn page_index(&self, id: &str) -> Option<usize> {
        self.pages.iter().position(|e| e.id == id)
    }

    pub fn selected_entry(&self) -> Option<&PageEntry<P>> {
        let id = self.state.selected_page_id.as_deref()?;
        self.page(id)
    }

    pub fn selected_entry_mut(&mut self) -> Option<&mut PageEntry<P>> {
        let index = self.page_index(self.state.selected_page_id.as_deref()?)?;
        self.pages.get_mut(index)
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn chrome(&self) -> &Chrome {
        &self.chrome
    }

    /// Header items for every titled page, in registration order.
    pub fn headers(&self) -> impl Iterator<Item = HeaderItem<'_>> {
        self.pages.iter().filter_map(|e| {
            e.title.as_deref().map(|title| HeaderItem {
                page_id: &e.id,
                title,
                selected: e.selected,
            })
        })
    }

    pub fn scroller(&self) -> &PageScroller {
        &self.scroller
    }

    pub fn scroller_mut(&mut self) -> &mut PageScroller {
        &mut self.scroller
    }

    pub fn data(&self) -> &dyn DataStore {
        self.data.as_ref()
    }

    pub fn data_mut(&mut self) -> &mut dyn DataStore {
        self.data.as_mut()
    }

    pub fn pending_confirmation(&self) -> Option<&PendingConfirmation> {
        self.pending.as_ref()
    }

    pub fn current_nucleus_id(&self) -> Option<&str> {
        self.current_nucleus_id.as_deref()
    }

    /// Switch the nucleus context. Ids the data store does not know are ignored.
    pub fn set_current_nucleus_id(&mut self, id: &str) -> bool {
        if self.data.nucleus(id).is_none() {
            debug!("Ignoring unknown nucleus {id}");
            return false;
        }
        self.current_nucleus_id = Some(id.to_string());
        true
    }

    /// Mutable pages alongside read-only data, for drawing and page input.
    pub fn parts_mut(&mut self) -> (&mut [PageEntry<P>], DataContext<'_>) {
        (
            &mut self.pages,
            DataContext {
                data: self.data.as_ref(),
                current_nucleus_id: self.current_nucleus_id.as_deref(),
            },
        )
    }

    pub fn enter_by_index(&mut self, index: usize, force: bool) -> Transition {
        let Some(id) = self.pages.get(index).map(|e| e.id.clone()) else {
            return Transition::Denied(Denial::IndexOutOfRange(index));
        };
        self.enter_by_id(&id, force)
    }

    pub fn enter_by_id(&mut self, id: &str, force: bool) -> Transition {
        let Some(index) = self.page_index(id) else {
            debug!("enter: unknown page {id}");
            return Transition::Denied(Denial::UnknownPage(id.to_string()));
        };

        let target_type = self.pages[index].page_type;
        let rule = TypeChange::between(self.state.current_type, target_type)
            .map(|change| rule_for(change, force));

        if rule == Some(TypeRule::ConfirmDiscard) {
            info!("Leaving the wizard for {id} needs confirmation");
            self.pending = Some(PendingConfirmation {
                request: DISCARD_NUCLEUS,
                target: id.to_string(),
                origin: self.state.selected_page_id.clone(),
            });
            return Transition::Pending;
        }

        if let Some(current) = self.state.selected_page_id.clone()
            && !self.leave(&current)
        {
            if !force {
                debug!("enter {id}: {current} vetoed leaving");
                return Transition::Denied(Denial::LeaveVetoed(current));
            }
            debug!("enter {id}: forcing past {current}'s leave veto");
        }

        match rule {
            Some(TypeRule::CommitWizard) => self.commit_wizard(),
            Some(TypeRule::ResetWizard) => self.clear_drafts(),
            _ => {}
        }

        self.state.current_type = Some(target_type);
        self.state.selected_page_id = Some(id.to_string());
        self.scroller.center_on(id);

        for entry in &mut self.pages {
            entry.selected = false;
        }
        let entry = &mut self.pages[index];
        entry.page.on_enter();
        entry.selected = true;

        self.chrome = Chrome {
            scroll_left_enabled: entry.prev_page_id.is_some(),
            scroll_right_enabled: entry.next_page_id.is_some(),
            header_visible: entry.show_header,
            vertical_arrow_visible: entry.show_vertical_arrow,
        };

        debug!("Entered {id} (type {target_type}, force={force})");
        Transition::Completed
    }

    /// Ask the page whether it may be left. On success its header marker is cleared.
    fn leave(&mut self, id: &str) -> bool {
        let Some(index) = self.page_index(id) else {
            return true;
        };
        let entry = &mut self.pages[index];
        if !entry.page.on_leave() {
            return false;
        }
        entry.selected = false;
        true
    }

    /// Answer the open confirmation. Confirming discards the wizard drafts
    /// and force-navigates to the previous page of the page the dialog was
    /// opened from. Without such a page the requested target is entered.
    pub fn resolve_confirmation(&mut self, outcome: ConfirmOutcome) -> Transition {
        let Some(pending) = self.pending.take() else {
            return Transition::Denied(Denial::NothingPending);
        };
        match outcome {
            ConfirmOutcome::Confirm => {
                let destination = pending
                    .origin
                    .as_deref()
                    .and_then(|origin| self.page(origin))
                    .and_then(|entry| entry.prev_page_id.clone())
                    .unwrap_or(pending.target);
                info!("Discarding wizard drafts, continuing to {destination}");
                self.clear_drafts();
                self.enter_by_id(&destination, true)
            }
            ConfirmOutcome::Cancel => {
                debug!("Confirmation for {} cancelled", pending.target);
                Transition::Denied(Denial::Cancelled)
            }
        }
    }

    /// `None` when the selected page has no previous page.
    pub fn prev(&mut self, force: bool) -> Option<Transition> {
        let target = self.selected_entry()?.prev_page_id.clone()?;
        Some(self.enter_by_id(&target, force))
    }

    /// `None` when the selected page has no next page.
    pub fn next(&mut self, force: bool) -> Option<Transition> {
        let target = self.selected_entry()?.next_page_id.clone()?;
        Some(self.enter_by_id(&target, force))
    }

    pub fn page_up(&mut self) {
        if let Some(entry) = self.selected_entry_mut() {
            entry.page.page_up();
        }
    }

    pub fn page_down(&mut self) {
        if let Some(entry) = self.selected_entry_mut() {
            entry.page.page_down();
        }
    }

    /// Swiping left moves to the next page, right to the previous one.
    /// Pages that are not swippable swallow the gesture.
    pub fn swipe(&mut self, direction: SwipeDirection) -> Option<Transition> {
        if !self.selected_entry()?.page.is_swippable() {
            return None;
        }
        match direction {
            SwipeDirection::Left => self.next(false),
            SwipeDirection::Right => self.prev(false),
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.scroller.set_viewport(width, height);
        let Some(id) = self.state.selected_page_id.clone() else {
            return;
        };
        self.scroller.center_on(&id);
        if let Some(entry) = self.selected_entry_mut() {
            entry.page.on_resize();
        }
    }

    fn collect_drafts(&self) -> (Vec<DraftItem>, Vec<DraftItem>) {
        let mut souls = Vec::new();
        let mut spaces = Vec::new();
        for entry in &self.pages {
            match entry.page.draft_kind() {
                Some(DraftKind::Souls) => souls.extend(entry.page.draft_items()),
                Some(DraftKind::Spaces) => spaces.extend(entry.page.draft_items()),
                None => {}
            }
        }
        (souls, spaces)
    }

    fn commit_wizard(&mut self) {
        let (souls, spaces) = self.collect_drafts();
        match commit_drafts(self.data.as_mut(), &souls, &spaces) {
            Ok(summary) => self.current_nucleus_id = Some(summary.nucleus_id),
            Err(e) => warn!("Wizard commit failed: {e}"),
        }
    }

    fn clear_drafts(&mut self) {
        for entry in &mut self.pages {
            if entry.page.draft_kind().is_some() {
                entry.page.clear_draft_items();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::World;
    use crate::core::layout::ViewHandle;
    use crate::test_support::{MockPage, Recorder, controller, wizard_pages};

    fn selected_count(nav: &NavigationController) -> usize {
        nav.pages().iter().filter(|e| e.is_selected()).count()
    }

    fn assert_invariant(nav: &NavigationController) {
        assert_eq!(selected_count(nav), 1);
        let selected = nav.selected_entry().unwrap();
        assert!(selected.is_selected());
        assert_eq!(nav.state().current_type, Some(selected.page_type));
    }

    fn drafts_of(recorder: &Recorder, id: &str) -> Vec<DraftItem> {
        recorder.borrow().drafts.get(id).cloned().unwrap_or_default()
    }

    #[test]
    fn test_register_empty_fails() {
        let result = NavigationController::<dyn Page>::new(Vec::new(), Box::new(World::new()));
        assert!(matches!(result, Err(NavigationError::NoPages)));
    }

    #[test]
    fn test_register_duplicate_fails() {
        let recorder = Recorder::default();
        let pages: Vec<Box<dyn Page>> = vec![
            Box::new(MockPage::new("a", PageType::Page, &recorder)),
            Box::new(MockPage::new("a", PageType::Intro, &recorder)),
        ];
        let result = NavigationController::new(pages, Box::new(World::new()));
        assert_eq!(result.err(), Some(NavigationError::DuplicatePage("a".to_string())));
    }

    #[test]
    fn test_adjacency_follows_registration_order() {
        let recorder = Recorder::default();
        let nav = controller(vec![
            MockPage::new("a", PageType::Intro, &recorder),
            MockPage::new("b", PageType::Page, &recorder),
            MockPage::new("c", PageType::Page, &recorder),
        ]);

        let links: Vec<_> = nav
            .pages()
            .iter()
            .map(|e| (e.prev_page_id.as_deref(), e.next_page_id.as_deref()))
            .collect();
        assert_eq!(
            links,
            vec![(None, Some("b")), (Some("a"), Some("c")), (Some("b"), None)]
        );
        assert!(nav.state().selected_page_id.is_none());
        assert_eq!(selected_count(&nav), 0);
    }

    #[test]
    fn test_link_overrides() {
        let recorder = Recorder::default();
        let nav = controller(vec![
            MockPage::new("a", PageType::Intro, &recorder).prev_link(PageLink::To("c".into())),
            MockPage::new("b", PageType::Page, &recorder).next_link(PageLink::None),
            MockPage::new("c", PageType::Page, &recorder)
                .prev_link(PageLink::To("a".into()))
                .next_link(PageLink::To("a".into())),
            MockPage::new("d", PageType::Page, &recorder).prev_link(PageLink::To("ghost".into())),
        ]);

        // First page never has a previous page, even when it declares one.
        assert_eq!(nav.page("a").unwrap().prev_page_id, None);
        assert_eq!(nav.page("b").unwrap().next_page_id, None);
        assert_eq!(nav.page("c").unwrap().prev_page_id.as_deref(), Some("a"));
        assert_eq!(nav.page("c").unwrap().next_page_id.as_deref(), Some("a"));
        assert_eq!(nav.page("d").unwrap().prev_page_id, None);
    }

    #[test]
    fn test_enter_selects_exactly_one_page() {
        let recorder = Recorder::default();
        let mut nav = controller(vec![
            MockPage::new("a", PageType::Intro, &recorder),
            MockPage::new("b", PageType::Page, &recorder),
        ]);

        assert_eq!(nav.enter_by_id("a", false), Transition::Completed);
        assert_invariant(&nav);
        assert_eq!(nav.enter_by_id("b", false), Transition::Completed);
        assert_invariant(&nav);
        assert_eq!(nav.state().selected_page_id.as_deref(), Some("b"));
        assert_eq!(nav.state().current_type, Some(PageType::Page));

        let headers: Vec<_> = nav.headers().filter(|h| h.selected).map(|h| h.page_id).collect();
        assert_eq!(headers, vec!["b"]);
    }

    #[test]
    fn test_enter_by_index() {
        let recorder = Recorder::default();
        let mut nav = controller(vec![
            MockPage::new("a", PageType::Intro, &recorder),
            MockPage::new("b", PageType::Page, &recorder),
        ]);
        assert!(nav.enter_by_index(1, false).is_completed());
        assert_eq!(nav.state().selected_page_id.as_deref(), Some("b"));
        assert_eq!(
            nav.enter_by_index(7, false),
            Transition::Denied(Denial::IndexOutOfRange(7))
        );
        assert_eq!(nav.state().selected_page_id.as_deref(), Some("b"));
    }

    #[test]
    fn test_unknown_page_is_a_no_op() {
        let recorder = Recorder::default();
        let mut nav = controller(vec![MockPage::new("a", PageType::Intro, &recorder)]);
        nav.enter_by_id("a", false);
        let before = nav.state().clone();

        assert_eq!(
            nav.enter_by_id("zzz", true),
            Transition::Denied(Denial::UnknownPage("zzz".into()))
        );
        assert_eq!(nav.state(), &before);
        assert_invariant(&nav);
    }

    #[test]
    fn test_hooks_run_leave_then_enter() {
        let recorder = Recorder::default();
        let mut nav = controller(vec![
            MockPage::new("a", PageType::Intro, &recorder),
            MockPage::new("b", PageType::Page, &recorder),
        ]);
        nav.enter_by_id("a", false);
        nav.enter_by_id("b", false);
        assert_eq!(recorder.borrow().log, vec!["enter:a", "leave:a", "enter:b"]);
    }

    #[test]
    fn test_leave_veto_blocks_unless_forced() {
        let recorder = Recorder::default();
        let mut nav = controller(vec![
            MockPage::new("a", PageType::Page, &recorder),
            MockPage::new("b", PageType::Page, &recorder),
        ]);
        nav.enter_by_id("a", false);
        recorder.borrow_mut().vetoes.insert("a".into());

        assert_eq!(
            nav.enter_by_id("b", false),
            Transition::Denied(Denial::LeaveVetoed("a".into()))
        );
        assert_eq!(nav.state().selected_page_id.as_deref(), Some("a"));
        assert!(nav.page("a").unwrap().is_selected());
        assert_invariant(&nav);

        assert!(nav.enter_by_id("b", true).is_completed());
        assert_eq!(nav.state().selected_page_id.as_deref(), Some("b"));
        assert!(!nav.page("a").unwrap().is_selected());
        assert_invariant(&nav);
    }

    #[test]
    fn test_chrome_tracks_selected_page() {
        let recorder = Recorder::default();
        let mut nav = controller(vec![
            MockPage::new("a", PageType::Intro, &recorder).hide_header(),
            MockPage::new("b", PageType::Page, &recorder).with_arrow(),
            MockPage::new("c", PageType::Page, &recorder),
        ]);

        nav.enter_by_id("a", false);
        assert_eq!(
            nav.chrome(),
            &Chrome {
                scroll_left_enabled: false,
                scroll_right_enabled: true,
                header_visible: false,
                vertical_arrow_visible: false,
            }
        );

        nav.enter_by_id("b", false);
        assert_eq!(
            nav.chrome(),
            &Chrome {
                scroll_left_enabled: true,
                scroll_right_enabled: true,
                header_visible: true,
                vertical_arrow_visible: true,
            }
        );

        nav.enter_by_id("c", false);
        assert!(!nav.chrome().scroll_right_enabled);
        assert!(!nav.chrome().vertical_arrow_visible);
    }

    #[test]
    fn test_prev_on_first_page_is_a_no_op() {
        let recorder = Recorder::default();
        let mut nav = controller(vec![
            MockPage::new("a", PageType::Intro, &recorder),
            MockPage::new("b", PageType::Page, &recorder),
        ]);
        nav.enter_by_id("a", false);

        assert_eq!(nav.prev(false), None);
        assert_eq!(nav.state().selected_page_id.as_deref(), Some("a"));
        assert!(!nav.chrome().scroll_left_enabled);

        assert_eq!(nav.next(false), Some(Transition::Completed));
        assert_eq!(nav.next(false), None);
        assert_eq!(nav.prev(false), Some(Transition::Completed));
        assert_eq!(nav.state().selected_page_id.as_deref(), Some("a"));
    }

    #[test]
    fn test_prev_without_selection_is_a_no_op() {
        let recorder = Recorder::default();
        let mut nav = controller(vec![MockPage::new("a", PageType::Intro, &recorder)]);
        assert_eq!(nav.prev(false), None);
        assert_eq!(nav.next(false), None);
        assert_eq!(nav.swipe(SwipeDirection::Left), None);
    }

    #[test]
    fn test_entering_wizard_clears_drafts() {
        let recorder = Recorder::default();
        let mut nav = controller(wizard_pages(&recorder));
        recorder
            .borrow_mut()
            .drafts
            .insert("assistant-souls".into(), vec![DraftItem::new("stale", "x")]);
        recorder
            .borrow_mut()
            .drafts
            .insert("assistant-spaces".into(), vec![DraftItem::new("old", "y")]);

        nav.enter_by_id("communities", false);
        assert!(nav.enter_by_id("assistant-souls", false).is_completed());

        assert!(drafts_of(&recorder, "assistant-souls").is_empty());
        assert!(drafts_of(&recorder, "assistant-spaces").is_empty());
    }

    #[test]
    fn test_wizard_commit_skips_unnamed_rows() {
        let recorder = Recorder::default();
        let mut nav = controller(wizard_pages(&recorder));
        nav.enter_by_id("assistant-souls", false);
        recorder.borrow_mut().drafts.insert(
            "assistant-souls".into(),
            vec![DraftItem::new("Aria", "x"), DraftItem::new("", "y")],
        );
        recorder
            .borrow_mut()
            .drafts
            .insert("assistant-spaces".into(), vec![DraftItem::new("Harbor", "city")]);

        nav.enter_by_id("assistant-spaces", false);
        assert!(nav.data().nuclei().is_empty());

        assert!(nav.enter_by_id("nucleus", false).is_completed());
        assert_eq!(nav.data().nuclei().len(), 1);

        let nucleus = &nav.data().nuclei()[0];
        assert_eq!(nav.current_nucleus_id(), Some(nucleus.id.as_str()));
        assert_eq!(nucleus.name, "");
        assert_eq!(nucleus.souls.len(), 1);
        assert_eq!(nucleus.souls[0].name, "Aria");
        assert_eq!(nucleus.spaces.len(), 1);
        assert_eq!(nucleus.spaces[0].kind, "city");
    }

    #[test]
    fn test_leave_veto_prevents_commit() {
        let recorder = Recorder::default();
        let mut nav = controller(wizard_pages(&recorder));
        nav.enter_by_id("assistant-spaces", false);
        recorder
            .borrow_mut()
            .drafts
            .insert("assistant-souls".into(), vec![DraftItem::new("Aria", "x")]);
        recorder.borrow_mut().vetoes.insert("assistant-spaces".into());

        assert!(!nav.enter_by_id("nucleus", false).is_completed());
        assert!(nav.data().nuclei().is_empty());
        assert_eq!(nav.state().current_type, Some(PageType::Assistant));
    }

    #[test]
    fn test_leaving_wizard_backwards_waits_for_confirmation() {
        let recorder = Recorder::default();
        let mut nav = controller(wizard_pages(&recorder));
        nav.enter_by_id("communities", false);
        nav.enter_by_id("assistant-souls", false);
        recorder
            .borrow_mut()
            .drafts
            .insert("assistant-souls".into(), vec![DraftItem::new("Aria", "x")]);
        let state_before = nav.state().clone();
        let chrome_before = nav.chrome().clone();

        assert_eq!(nav.prev(false), Some(Transition::Pending));
        let pending = nav.pending_confirmation().unwrap();
        assert_eq!(pending.target, "communities");
        assert_eq!(pending.request, DISCARD_NUCLEUS);
        assert_eq!(nav.state(), &state_before);
        assert!(nav.page("assistant-souls").unwrap().is_selected());
        assert!(!recorder.borrow().log.contains(&"leave:assistant-souls".to_string()));

        assert_eq!(
            nav.resolve_confirmation(ConfirmOutcome::Cancel),
            Transition::Denied(Denial::Cancelled)
        );
        assert!(nav.pending_confirmation().is_none());
        assert_eq!(nav.state(), &state_before);
        assert_eq!(nav.chrome(), &chrome_before);
        assert_eq!(drafts_of(&recorder, "assistant-souls").len(), 1);
        assert_invariant(&nav);
    }

    #[test]
    fn test_confirm_discards_drafts_and_navigates() {
        let recorder = Recorder::default();
        let mut nav = controller(vec![
            MockPage::new("A", PageType::Intro, &recorder),
            MockPage::new("B", PageType::Assistant, &recorder).wizard(DraftKind::Souls),
            MockPage::new("C", PageType::Page, &recorder),
        ]);
        nav.enter_by_id("B", false);
        recorder
            .borrow_mut()
            .drafts
            .insert("B".into(), vec![DraftItem::new("Aria", "x")]);

        assert_eq!(nav.enter_by_id("A", false), Transition::Pending);
        assert_eq!(nav.state().selected_page_id.as_deref(), Some("B"));

        assert_eq!(
            nav.resolve_confirmation(ConfirmOutcome::Confirm),
            Transition::Completed
        );
        assert_eq!(nav.state().selected_page_id.as_deref(), Some("A"));
        assert_eq!(nav.state().current_type, Some(PageType::Intro));
        assert!(drafts_of(&recorder, "B").is_empty());
        assert!(nav.data().nuclei().is_empty());
        assert_invariant(&nav);
    }

    #[test]
    fn test_confirm_from_second_step_goes_to_its_previous_page() {
        let recorder = Recorder::default();
        let mut nav = controller(wizard_pages(&recorder));
        nav.enter_by_id("assistant-spaces", false);
        recorder
            .borrow_mut()
            .drafts
            .insert("assistant-spaces".into(), vec![DraftItem::new("Harbor", "city")]);

        assert_eq!(nav.enter_by_id("communities", false), Transition::Pending);
        let pending = nav.pending_confirmation().unwrap();
        assert_eq!(pending.origin.as_deref(), Some("assistant-spaces"));

        assert!(nav.resolve_confirmation(ConfirmOutcome::Confirm).is_completed());
        assert_eq!(nav.state().selected_page_id.as_deref(), Some("assistant-souls"));
        assert_eq!(nav.state().current_type, Some(PageType::Assistant));
        assert!(drafts_of(&recorder, "assistant-spaces").is_empty());
        assert!(nav.data().nuclei().is_empty());
        assert_invariant(&nav);
    }

    #[test]
    fn test_confirm_without_previous_page_enters_target() {
        let recorder = Recorder::default();
        let mut nav = controller(vec![
            MockPage::new("B", PageType::Assistant, &recorder).wizard(DraftKind::Souls),
            MockPage::new("A", PageType::Intro, &recorder),
        ]);
        nav.enter_by_id("B", false);

        assert_eq!(nav.enter_by_id("A", false), Transition::Pending);
        assert!(nav.resolve_confirmation(ConfirmOutcome::Confirm).is_completed());
        assert_eq!(nav.state().selected_page_id.as_deref(), Some("A"));
        assert_invariant(&nav);
    }

    #[test]
    fn test_forced_exit_from_wizard_skips_confirmation() {
        let recorder = Recorder::default();
        let mut nav = controller(wizard_pages(&recorder));
        nav.enter_by_id("assistant-souls", false);
        assert!(nav.enter_by_id("communities", true).is_completed());
        assert!(nav.pending_confirmation().is_none());
        assert!(nav.data().nuclei().is_empty());
    }

    #[test]
    fn test_resolve_without_pending() {
        let recorder = Recorder::default();
        let mut nav = controller(vec![MockPage::new("a", PageType::Intro, &recorder)]);
        assert_eq!(
            nav.resolve_confirmation(ConfirmOutcome::Confirm),
            Transition::Denied(Denial::NothingPending)
        );
    }

    #[test]
    fn test_vertical_paging_delegates_to_selected_page() {
        let recorder = Recorder::default();
        let mut nav = controller(vec![
            MockPage::new("a", PageType::Intro, &recorder),
            MockPage::new("b", PageType::Page, &recorder),
        ]);
        nav.page_up();
        assert!(recorder.borrow().log.is_empty());

        nav.enter_by_id("b", false);
        nav.page_up();
        nav.page_down();
        assert_eq!(recorder.borrow().log, vec!["enter:b", "up:b", "down:b"]);
        assert_eq!(nav.state().selected_page_id.as_deref(), Some("b"));
    }

    #[test]
    fn test_swipe_respects_swippable() {
        let recorder = Recorder::default();
        let mut nav = controller(vec![
            MockPage::new("a", PageType::Page, &recorder),
            MockPage::new("b", PageType::Page, &recorder),
            MockPage::new("c", PageType::Page, &recorder),
        ]);
        nav.enter_by_id("b", false);

        assert_eq!(nav.swipe(SwipeDirection::Left), Some(Transition::Completed));
        assert_eq!(nav.state().selected_page_id.as_deref(), Some("c"));
        assert_eq!(nav.swipe(SwipeDirection::Right), Some(Transition::Completed));
        assert_eq!(nav.state().selected_page_id.as_deref(), Some("b"));

        recorder.borrow_mut().unswippable.insert("b".into());
        assert_eq!(nav.swipe(SwipeDirection::Left), None);
        assert_eq!(nav.state().selected_page_id.as_deref(), Some("b"));
    }

    #[test]
    fn test_enter_and_resize_recenter_scroller() {
        let recorder = Recorder::default();
        let mut nav = controller(vec![
            MockPage::new("a", PageType::Page, &recorder),
            MockPage::new("b", PageType::Page, &recorder).view(ViewHandle::cells(20)),
            MockPage::new("c", PageType::Page, &recorder).view(ViewHandle::cells(20)),
        ]);
        nav.resize(80, 24);
        assert!(recorder.borrow().log.is_empty());

        nav.enter_by_id("c", false);
        // c starts at 80 + 20
        assert_eq!(nav.scroller().offset(), -100 + 40 - 10);

        nav.scroller_mut().drift_container(4, 0);
        nav.resize(40, 24);
        assert_eq!(nav.scroller().offset(), -60 + 20 - 10);
        assert_eq!(nav.scroller().container_scroll(), (0, 0));
        assert_eq!(recorder.borrow().log.last().map(String::as_str), Some("resize:c"));
    }

    #[test]
    fn test_headers_only_for_titled_pages() {
        let recorder = Recorder::default();
        let nav = controller(vec![
            MockPage::new("a", PageType::Intro, &recorder),
            MockPage::new("b", PageType::Assistant, &recorder).untitled(),
            MockPage::new("c", PageType::Page, &recorder),
        ]);
        let ids: Vec<_> = nav.headers().map(|h| h.page_id).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_set_current_nucleus_requires_known_id() {
        let recorder = Recorder::default();
        let mut nav = controller(vec![MockPage::new("a", PageType::Intro, &recorder)]);
        assert!(!nav.set_current_nucleus_id("missing"));
        let id = nav.data_mut().new_nucleus().id.clone();
        assert!(nav.set_current_nucleus_id(&id));
        assert_eq!(nav.current_nucleus_id(), Some(id.as_str()));
    }
}
