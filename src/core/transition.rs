//! # Type Transitions
//!
//! Rules that fire when navigation crosses from one page type to another.
//!
//! | old → new                   | rule           |
//! |-----------------------------|----------------|
//! | assistant → intro, unforced | ConfirmDiscard |
//! | assistant → page            | CommitWizard   |
//! | anything → assistant        | ResetWizard    |
//! | otherwise                   | Plain          |
//!
//! `from` is `None` before the first page is entered.

use crate::core::page::PageType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeChange {
    pub from: Option<PageType>,
    pub to: PageType,
}

impl TypeChange {
    /// `None` when both sides have the same type (no rule applies).
    pub fn between(from: Option<PageType>, to: PageType) -> Option<Self> {
        (from != Some(to)).then_some(Self { from, to })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeRule {
    /// Ask before abandoning the wizard.
    ConfirmDiscard,
    /// Promote the wizard drafts into a new nucleus.
    CommitWizard,
    /// Start the wizard from empty draft lists.
    ResetWizard,
    Plain,
}

pub fn rule_for(change: TypeChange, force: bool) -> TypeRule {
    use PageType::*;
    match (change.from, change.to) {
        (Some(Assistant), Intro) if !force => TypeRule::ConfirmDiscard,
        (Some(Assistant), Page) => TypeRule::CommitWizard,
        (_, Assistant) => TypeRule::ResetWizard,
        _ => TypeRule::Plain,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    YesCancel,
}

/// A confirmation the front end must show and resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalRequest {
    pub kind: ModalKind,
    /// Localization key; `message` is the fallback text.
    pub message_key: &'static str,
    pub message: &'static str,
}

pub const DISCARD_NUCLEUS: ModalRequest = ModalRequest {
    kind: ModalKind::YesCancel,
    message_key: "app.cancelNucleusCreationConfirmation",
    message: "Are you sure you want to cancel the creation of the new nucleus?",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Confirm,
    Cancel,
}

/// A navigation parked until the user answers a `ModalRequest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirmation {
    pub request: ModalRequest,
    /// Page the user asked for.
    pub target: String,
    /// Page that was selected when the dialog opened. Confirming goes to its
    /// previous page with `force`, or to `target` when it has none.
    pub origin: Option<String>,
}
