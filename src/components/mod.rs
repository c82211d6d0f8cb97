//! UI Components
//!
//! Leptos components for the card list and the two forms.

mod item_card;
mod item_list;
mod new_item_form;
mod edit_modal;
mod editor_target;

pub use item_card::ItemCard;
pub use item_list::ItemList;
pub use new_item_form::NewItemForm;
pub use edit_modal::{open_editor, EditForm, EditModal};
pub use editor_target::EditModalState;
