//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use log::LevelFilter;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::core::config::ResolvedConfig;
use crate::core::data::World;
use crate::core::layout::ViewHandle;
use crate::core::navigation::NavigationController;
use crate::core::page::{Page, PageLink, PageType};
use crate::core::persistence::{MemoryStore, Persistence};
use crate::core::state::App;
use crate::core::wizard::{DraftItem, DraftKind};
use crate::tui::{TuiApp, pages, ui};

/// What the mock pages saw, plus knobs tests flip after registration.
#[derive(Default)]
pub struct RecorderState {
    /// Hook calls as `"<hook>:<page id>"`.
    pub log: Vec<String>,
    /// Pages whose `on_leave` returns `false`.
    pub vetoes: HashSet<String>,
    /// Draft rows per wizard page id.
    pub drafts: HashMap<String, Vec<DraftItem>>,
    pub unswippable: HashSet<String>,
}

#[derive(Clone, Default)]
pub struct Recorder(Rc<RefCell<RecorderState>>);

impl Recorder {
    pub fn borrow(&self) -> std::cell::Ref<'_, RecorderState> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, RecorderState> {
        self.0.borrow_mut()
    }
}

/// A page that records its hooks into a shared `Recorder`.
pub struct MockPage {
    id: String,
    page_type: PageType,
    title: Option<String>,
    show_header: bool,
    show_vertical_arrow: bool,
    prev: PageLink,
    next: PageLink,
    view: Option<ViewHandle>,
    draft_kind: Option<DraftKind>,
    recorder: Recorder,
}

impl MockPage {
    /// Titled with its id, header shown, full-width view.
    pub fn new(id: &str, page_type: PageType, recorder: &Recorder) -> Self {
        Self {
            id: id.to_string(),
            page_type,
            title: Some(id.to_string()),
            show_header: true,
            show_vertical_arrow: false,
            prev: PageLink::Derived,
            next: PageLink::Derived,
            view: Some(ViewHandle::viewport()),
            draft_kind: None,
            recorder: recorder.clone(),
        }
    }

    pub fn untitled(mut self) -> Self {
        self.title = None;
        self
    }

    pub fn hide_header(mut self) -> Self {
        self.show_header = false;
        self
    }

    pub fn with_arrow(mut self) -> Self {
        self.show_vertical_arrow = true;
        self
    }

    pub fn prev_link(mut self, link: PageLink) -> Self {
        self.prev = link;
        self
    }

    pub fn next_link(mut self, link: PageLink) -> Self {
        self.next = link;
        self
    }

    pub fn view(mut self, view: ViewHandle) -> Self {
        self.view = Some(view);
        self
    }

    pub fn wizard(mut self, kind: DraftKind) -> Self {
        self.draft_kind = Some(kind);
        self
    }

    fn record(&self, hook: &str) {
        self.recorder.borrow_mut().log.push(format!("{hook}:{}", self.id));
    }
}

impl Page for MockPage {
    fn id(&self) -> &str {
        &self.id
    }

    fn page_type(&self) -> PageType {
        self.page_type
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn show_header(&self) -> bool {
        self.show_header
    }

    fn show_vertical_arrow(&self) -> bool {
        self.show_vertical_arrow
    }

    fn prev_page(&self) -> PageLink {
        self.prev.clone()
    }

    fn next_page(&self) -> PageLink {
        self.next.clone()
    }

    fn render(&mut self) -> Option<ViewHandle> {
        self.view
    }

    fn on_enter(&mut self) {
        self.record("enter");
    }

    fn on_leave(&mut self) -> bool {
        self.record("leave");
        !self.recorder.borrow().vetoes.contains(&self.id)
    }

    fn on_resize(&mut self) {
        self.record("resize");
    }

    fn page_up(&mut self) {
        self.record("up");
    }

    fn page_down(&mut self) {
        self.record("down");
    }

    fn is_swippable(&self) -> bool {
        !self.recorder.borrow().unswippable.contains(&self.id)
    }

    fn draft_kind(&self) -> Option<DraftKind> {
        self.draft_kind
    }

    fn draft_items(&self) -> Vec<DraftItem> {
        self.recorder.borrow().drafts.get(&self.id).cloned().unwrap_or_default()
    }

    fn clear_draft_items(&mut self) {
        self.recorder.borrow_mut().drafts.insert(self.id.clone(), Vec::new());
    }
}

/// A controller over mock pages with an empty in-memory world.
pub fn controller(pages: Vec<MockPage>) -> NavigationController {
    let pages = pages
        .into_iter()
        .map(|p| Box::new(p) as Box<dyn Page>)
        .collect();
    NavigationController::new(pages, Box::new(World::new())).unwrap()
}

/// The app's page order with mock pages: intro, two wizard steps, a content page.
pub fn wizard_pages(recorder: &Recorder) -> Vec<MockPage> {
    vec![
        MockPage::new("communities", PageType::Intro, recorder),
        MockPage::new("assistant-souls", PageType::Assistant, recorder)
            .untitled()
            .wizard(DraftKind::Souls),
        MockPage::new("assistant-spaces", PageType::Assistant, recorder)
            .untitled()
            .wizard(DraftKind::Spaces),
        MockPage::new("nucleus", PageType::Page, recorder),
    ]
}

/// Config with default timings and nothing on disk.
pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        start_page: None,
        data_dir: PathBuf::from("unused"),
        ephemeral: true,
        log_level: LevelFilter::Off,
        save_interval: Duration::from_secs(5),
        layout_reset_interval: Duration::from_millis(100),
        swipe_threshold: 8,
    }
}

/// An app over mock pages, loading from `store`.
pub fn test_app(pages: Vec<MockPage>, store: MemoryStore) -> App {
    let config = test_config();
    let now = Instant::now();
    let pages = pages
        .into_iter()
        .map(|p| Box::new(p) as Box<dyn Page>)
        .collect();
    let persistence = Persistence::new(Box::new(store), config.save_interval, now);
    App::new(pages, Box::new(World::new()), persistence, &config, now).unwrap()
}

/// The shipped pages over an empty in-memory world, sized to an 80x24 terminal.
pub fn tui_app() -> TuiApp {
    let config = test_config();
    let now = Instant::now();
    let persistence = Persistence::new(Box::new(MemoryStore::new()), config.save_interval, now);
    let mut app = App::new(pages::all(), Box::new(World::new()), persistence, &config, now).unwrap();
    app.nav.resize(80, ui::body_height(24));
    app
}
