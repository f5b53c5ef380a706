//! # Pages
//!
//! Registration order is navigation order:
//!
//! ```text
//! communities → assistant-souls → assistant-spaces → nucleus → souls → spaces
//!   (intro)       (assistant)       (assistant)      (page)   (page)  (page)
//! ```
//!
//! `nucleus` links back to `communities` instead of into the wizard.

mod communities;
mod draft_step;
mod entities;
mod nucleus;

pub use communities::CommunitiesPage;
pub use draft_step::DraftStepPage;
pub use entities::{EntityKind, EntityListPage};
pub use nucleus::NucleusPage;

use crate::core::wizard::DraftKind;
use crate::tui::component::TuiPage;

pub const COMMUNITIES: &str = "communities";
pub const SOULS_STEP: &str = "assistant-souls";
pub const SPACES_STEP: &str = "assistant-spaces";
pub const NUCLEUS: &str = "nucleus";

pub fn all() -> Vec<Box<dyn TuiPage>> {
    vec![
        Box::new(CommunitiesPage::new()),
        Box::new(DraftStepPage::new(
            SOULS_STEP,
            "New nucleus · step 1 of 2 · Who lives here?",
            DraftKind::Souls,
        )),
        Box::new(DraftStepPage::new(
            SPACES_STEP,
            "New nucleus · step 2 of 2 · Where do they live?",
            DraftKind::Spaces,
        )),
        Box::new(NucleusPage),
        Box::new(EntityListPage::new("souls", "Souls", EntityKind::Souls)),
        Box::new(EntityListPage::new("spaces", "Spaces", EntityKind::Spaces)),
    ]
}
