//! # Core Application Logic
//!
//! Page navigation, the nucleus wizard, and the data it produces.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Pages + navigation   │
//!                    │  • Wizard commit        │
//!                    │  • Data + persistence   │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │   Tests    │
//!             │  Adapter   │          │ (mock      │
//!             │ (ratatui)  │          │  pages)    │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`page`]: The `Page` trait every navigable page implements
//! - [`navigation`]: Registry, adjacency, and the transition state machine
//! - [`transition`]: Rules keyed by the old and new page type
//! - [`wizard`]: Draft rows and the commit into a new nucleus
//! - [`data`]: Nuclei, souls, spaces, and the `DataStore` trait
//! - [`layout`]: The horizontal page strip and its centering
//! - [`persistence`]: Slot storage, periodic save
//! - [`timer`]: Polled intervals driving save and layout reset
//! - [`config`]: `~/.nucleus/config.toml`, env vars, CLI flags
//! - [`state`]: The `App` struct tying it together
//! - [`action`]: The `Action` enum and `update()`

pub mod action;
pub mod config;
pub mod data;
pub mod layout;
pub mod navigation;
pub mod page;
pub mod persistence;
pub mod state;
pub mod timer;
pub mod transition;
pub mod wizard;
