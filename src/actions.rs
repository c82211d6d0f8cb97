//! UI Actions
//!
//! State transitions behind the buttons, kept free of DOM access so they run
//! against any repository. Components wire these to node refs and the store.

use item_client::{ItemFields, ItemRepository, ItemsClient, Refresh};

use crate::cards::CardAction;
use crate::components::EditModalState;

/// Run a card button
///
/// Delete is carried out here. Edit needs the modal elements, so its id is
/// handed back for the caller to open the editor.
pub async fn run_card_action<R, F>(client: &ItemsClient<R, F>, action: CardAction) -> Option<u32>
where
    R: ItemRepository,
    F: Refresh,
{
    match action {
        CardAction::Delete(id) => {
            client.remove(id).await;
            None
        }
        CardAction::Edit(id) => Some(id),
    }
}

/// Fetch item `id` for editing
///
/// Returns the visible modal state and the values to put in its inputs.
/// A failed fetch is logged and yields `None`.
pub async fn load_editor<R, F>(client: &ItemsClient<R, F>, id: u32) -> Option<(EditModalState, ItemFields)>
where
    R: ItemRepository,
    F: Refresh,
{
    match client.get_by_id(id).await {
        Ok(item) => Some((EditModalState::open(id, &item), item.fields())),
        Err(e) => {
            log::error!("Error fetching item: {}", e);
            None
        }
    }
}

/// Submit the modal's fields for the item it targets
///
/// Issues a single update. Success hides the modal; a failure is logged and
/// the modal stays as it was. A hidden modal submits nothing.
pub async fn save_edit<R, F>(client: &ItemsClient<R, F>, state: &EditModalState, fields: ItemFields) -> EditModalState
where
    R: ItemRepository,
    F: Refresh,
{
    let Some(target) = state.target() else {
        return state.clone();
    };

    match client.update(target.id, fields, target.date_added.clone()).await {
        Ok(_) => EditModalState::Hidden,
        Err(e) => {
            log::error!("Error editing item: {}", e);
            state.clone()
        }
    }
}

/// Close the modal without touching the collection
pub fn cancel_edit() -> EditModalState {
    EditModalState::Hidden
}

/// Take the create form's values, leaving it blank
pub fn take_entry(form: &mut ItemFields) -> ItemFields {
    std::mem::take(form)
}
