//! Item Card Component
//!
//! Individual item in the card list.

use leptos::prelude::*;

use crate::cards::{Card, CardAction};

/// A single card with its Edit/Delete buttons
#[component]
pub fn ItemCard(
    card: Card,
    on_action: Callback<CardAction>,
) -> impl IntoView {
    let Card { id, title, img_link, description, author, posted, actions } = card;

    view! {
        <li class="card" data-id=id.to_string()>
            <h2>{title}</h2>
            <img class="card-img" src=img_link alt="" />
            <p>{description}</p>
            <p class="card-bottom">
                "Posted by " <strong style="font-weight: bold;">{author}</strong> ", " {posted}
            </p>
            <div class="buttons">
                {actions.into_iter().map(|action| view! {
                    <button
                        class=action.class()
                        data-id=action.id().to_string()
                        on:click=move |_| on_action.run(action)
                    >
                        {action.label()}
                    </button>
                }).collect_view()}
            </div>
        </li>
    }
}
