//! # TUI Components
//!
//! The chrome around the pages.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Built each frame from core state, so they can never drift from it:
//! - `Header`: titled pages, click to enter
//! - `ScrollerBar`: previous/next buttons, vertical arrow, status message
//!
//! ### Event-Driven Components
//!
//! - `ConfirmDialog`: answers a pending `ModalRequest`
//!
//! Props are explicit so components stay testable with `TestBackend`:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! ScrollerBar::new(app.nav.chrome(), &app.status_message).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! scroller_bar.render(frame, area); // reads from global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── header.rs          (Top bar with page titles)
//! ├── scroller_bar.rs    (Bottom bar with prev/next)
//! └── confirm_dialog.rs  (Yes/Cancel overlay)
//! ```

pub mod confirm_dialog;
pub mod header;
pub mod scroller_bar;

pub use confirm_dialog::ConfirmDialog;
pub use header::Header;
pub use scroller_bar::{ScrollerBar, ScrollerButton};
