//! # Dialog State Machine
//!
//! The dashboard's dialog modes as a single enum instead of independent
//! open/closed booleans, so illegal combinations (both dialogs open at once)
//! are unrepresentable. The editing target travels inside the `EditOpen`
//! variant and therefore cannot outlive the edit dialog.

use crate::model::ProductId;

/// The mode the create/edit dialog is currently in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogState {
    /// No dialog open; list view only.
    #[default]
    Idle,
    /// The create dialog is open over an empty form buffer.
    CreateOpen,
    /// The edit dialog is open for the product with this id.
    EditOpen(ProductId),
}

impl DialogState {
    pub fn is_idle(&self) -> bool {
        matches!(self, DialogState::Idle)
    }
}
