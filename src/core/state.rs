//! # Application State
//!
//! Core business state for Nucleus. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── nav: NavigationController     // pages, selection, wizard commit, data
//! ├── persistence: Persistence      // load at startup, save every interval
//! ├── layout_reset: Interval        // snaps the page container back to origin
//! └── status_message: String        // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs,
//! plus `tick()` for the timers.

use log::{info, warn};
use std::time::{Duration, Instant};

use crate::core::config::ResolvedConfig;
use crate::core::data::DataStore;
use crate::core::navigation::{NavigationController, NavigationError};
use crate::core::page::Page;
use crate::core::persistence::Persistence;
use crate::core::timer::Interval;

fn saved_message() -> String {
    format!("Saved at {}", chrono::Local::now().format("%H:%M:%S"))
}

pub struct App<P: ?Sized + Page = dyn Page> {
    pub nav: NavigationController<P>,
    pub persistence: Persistence,
    layout_reset: Interval,
    pub status_message: String,
}

impl<P: ?Sized + Page> App<P> {
    /// Register pages, load stored data, and enter the start page.
    ///
    /// An unknown `start_page` falls back to the first registered page. The
    /// current nucleus starts as the first stored one.
    pub fn new(
        pages: Vec<Box<P>>,
        data: Box<dyn DataStore>,
        mut persistence: Persistence,
        config: &ResolvedConfig,
        now: Instant,
    ) -> Result<Self, NavigationError> {
        let mut nav = NavigationController::new(pages, data)?;
        persistence.load(nav.data_mut());

        let start = config
            .start_page
            .as_deref()
            .and_then(|id| {
                let index = nav.page_index(id);
                if index.is_none() {
                    warn!("Start page {id} is not registered, using the first page");
                }
                index
            })
            .unwrap_or(0);
        if !nav.enter_by_index(start, true).is_completed() {
            warn!("Could not enter start page #{start}");
        }

        if let Some(first) = nav.data().nuclei().first().map(|n| n.id.clone()) {
            nav.set_current_nucleus_id(&first);
        }

        info!(
            "App ready on {}",
            nav.state().selected_page_id.as_deref().unwrap_or("-")
        );

        Ok(Self {
            nav,
            persistence,
            layout_reset: Interval::new(config.layout_reset_interval, now),
            status_message: String::from("Welcome to Nucleus!"),
        })
    }

    /// Fire due timers. Returns `true` when something visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if self.layout_reset.poll(now) && self.nav.scroller().container_scroll() != (0, 0) {
            self.nav.scroller_mut().reset_container_scroll();
            changed = true;
        }
        if self.persistence.tick(now, self.nav.data()) {
            self.status_message = saved_message();
            changed = true;
        }
        changed
    }

    /// Save right away, outside the interval (Ctrl+S).
    pub fn save_now(&mut self) -> bool {
        let saved = self.persistence.save(self.nav.data());
        self.status_message = if saved {
            saved_message()
        } else {
            String::from("Save failed, see nucleus.log")
        };
        saved
    }

    /// How long the event loop may sleep before a timer is due.
    pub fn next_deadline(&self, now: Instant) -> Duration {
        self.layout_reset
            .time_until(now)
            .min(self.persistence.time_until_save(now))
    }

    /// Final save before the process exits.
    pub fn shutdown(&mut self) {
        if self.persistence.save(self.nav.data()) {
            info!("Saved on exit");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::page::PageType;
    use crate::core::persistence::{DATA_SLOT, MemoryStore};
    use crate::test_support::{Recorder, test_app, test_config, wizard_pages};
    use std::time::{Duration, Instant};

    use super::*;
    use crate::core::data::World;

    #[test]
    fn test_app_new_defaults() {
        let recorder = Recorder::default();
        let app = test_app(wizard_pages(&recorder), MemoryStore::new());
        assert_eq!(app.status_message, "Welcome to Nucleus!");
        assert_eq!(app.nav.state().selected_page_id.as_deref(), Some("communities"));
        assert_eq!(app.nav.state().current_type, Some(PageType::Intro));
        assert!(app.nav.current_nucleus_id().is_none());
    }

    #[test]
    fn test_app_restores_data_and_current_nucleus() {
        let mut world = World::new();
        let first = world.new_nucleus().id.clone();
        world.new_nucleus();
        let saved = world.export().unwrap();

        let recorder = Recorder::default();
        let app = test_app(wizard_pages(&recorder), MemoryStore::new().with_slot(DATA_SLOT, &saved));
        assert_eq!(app.nav.data().nuclei().len(), 2);
        assert_eq!(app.nav.current_nucleus_id(), Some(first.as_str()));
    }

    #[test]
    fn test_app_start_page_from_config() {
        let recorder = Recorder::default();
        let mut config = test_config();
        config.start_page = Some("nucleus".to_string());
        let pages = wizard_pages(&recorder)
            .into_iter()
            .map(|p| Box::new(p) as Box<dyn Page>)
            .collect();
        let persistence = Persistence::new(Box::new(MemoryStore::new()), config.save_interval, Instant::now());
        let app = App::new(pages, Box::new(World::new()), persistence, &config, Instant::now()).unwrap();
        assert_eq!(app.nav.state().selected_page_id.as_deref(), Some("nucleus"));

        config.start_page = Some("nowhere".to_string());
        let pages = wizard_pages(&recorder)
            .into_iter()
            .map(|p| Box::new(p) as Box<dyn Page>)
            .collect();
        let persistence = Persistence::new(Box::new(MemoryStore::new()), config.save_interval, Instant::now());
        let app = App::new(pages, Box::new(World::new()), persistence, &config, Instant::now()).unwrap();
        assert_eq!(app.nav.state().selected_page_id.as_deref(), Some("communities"));
    }

    #[test]
    fn test_tick_resets_layout_and_saves() {
        let recorder = Recorder::default();
        let mut app = test_app(wizard_pages(&recorder), MemoryStore::new());
        let start = Instant::now();

        app.nav.scroller_mut().drift_container(3, 1);
        assert!(app.tick(start + Duration::from_millis(150)));
        assert_eq!(app.nav.scroller().container_scroll(), (0, 0));

        assert!(app.tick(start + Duration::from_secs(6)));
        assert_eq!(app.persistence.saves(), 1);
        assert!(app.status_message.starts_with("Saved at"));
    }

    #[test]
    fn test_save_now_reports_in_status() {
        let recorder = Recorder::default();
        let mut app = test_app(wizard_pages(&recorder), MemoryStore::new());
        app.nav.data_mut().new_nucleus();

        assert!(app.save_now());
        assert_eq!(app.persistence.saves(), 1);
        assert!(app.status_message.starts_with("Saved at"));
        let stored = app.persistence.store().read(DATA_SLOT).unwrap().unwrap();
        assert!(stored.contains("\"version\":1"));
    }

    #[test]
    fn test_next_deadline_is_the_earliest_timer() {
        let recorder = Recorder::default();
        let app = test_app(wizard_pages(&recorder), MemoryStore::new());
        assert!(app.next_deadline(Instant::now()) <= Duration::from_millis(100));
    }
}
