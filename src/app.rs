//! Item Cards App
//!
//! Main application component: create form, card list and edit modal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use item_client::ApiConfig;
use crate::actions::run_card_action;
use crate::cards::CardAction;
use crate::components::{open_editor, EditForm, EditModal, ItemList, NewItemForm};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(signal(0u32), config);
    let edit_form = EditForm::new();

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load items on mount and whenever a mutation bumps the trigger
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        log::debug!("[APP] Loading items, trigger={}", trigger);
        spawn_local(async move {
            match ctx.client().list_all().await {
                Ok(loaded) => {
                    log::debug!("[APP] Loaded {} items", loaded.len());
                    *store.items().write() = loaded;
                }
                // Previous cards stay on screen
                Err(e) => log::error!("Error fetching data: {}", e),
            }
        });
    });

    let on_action = Callback::new(move |action: CardAction| {
        spawn_local(async move {
            if let Some(id) = run_card_action(&ctx.client(), action).await {
                open_editor(ctx, store, edit_form, id);
            }
        });
    });

    view! {
        <main class="main-content">
            <h1>"Items"</h1>

            <NewItemForm />

            <ItemList on_action=on_action />
        </main>

        <EditModal form=edit_form />
    }
}
