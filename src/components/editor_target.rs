//! Edit Modal State
//!
//! Hidden/visible state of the edit modal and the item it targets.

use item_client::Item;

/// Item being edited: its id and the creation timestamp to resubmit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditTarget {
    pub id: u32,
    pub date_added: String,
}

/// Edit modal state machine
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditModalState {
    #[default]
    Hidden,
    Visible(EditTarget),
}

impl EditModalState {
    /// Show the modal for item `id` with its freshly fetched record
    ///
    /// The target keeps the requested id; only `date_added` comes from the
    /// record.
    pub fn open(id: u32, item: &Item) -> Self {
        EditModalState::Visible(EditTarget {
            id,
            date_added: item.date_added.clone(),
        })
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, EditModalState::Visible(_))
    }

    /// Active target, if the modal is open
    pub fn target(&self) -> Option<&EditTarget> {
        match self {
            EditModalState::Visible(target) => Some(target),
            EditModalState::Hidden => None,
        }
    }

    /// CSS `display` value for the modal and overlay
    pub fn display(&self) -> &'static str {
        if self.is_visible() {
            "block"
        } else {
            "none"
        }
    }
}
