//! Item List Component
//!
//! Renders the latest fetch result as cards. The whole list is rebuilt on
//! every change; cards are not keyed or diffed.

use chrono::Utc;
use leptos::prelude::*;

use crate::cards::{build_cards, CardAction};
use crate::components::ItemCard;
use crate::store::{use_app_store, AppStateStoreFields};

/// Card list bound to `AppState::items`
#[component]
pub fn ItemList(on_action: Callback<CardAction>) -> impl IntoView {
    let store = use_app_store();

    let cards = move || {
        let now = Utc::now();
        store.items().with(|items| build_cards(items, now))
    };

    view! {
        <ul id="js-list" class="card-list">
            {move || cards()
                .into_iter()
                .map(|card| view! { <ItemCard card=card on_action=on_action /> })
                .collect_view()}
        </ul>
    }
}
