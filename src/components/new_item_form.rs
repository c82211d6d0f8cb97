//! New Item Form Component
//!
//! Four inputs and an Add button for creating items.

use leptos::prelude::*;
use leptos::task::spawn_local;

use item_client::ItemFields;
use crate::actions::take_entry;
use crate::context::use_app_context;

/// Form for creating new items
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();

    let (form, set_form) = signal(ItemFields::default());

    let add_entry = move |_| {
        // Values go out verbatim, no trimming or validation. The form is
        // cleared whether or not the create succeeds.
        let Some(fields) = set_form.try_update(take_entry) else {
            return;
        };

        spawn_local(async move {
            let _ = ctx.client().create(fields).await;
        });
    };

    view! {
        <section class="new-item-form">
            <input
                id="title"
                type="text"
                placeholder="Title"
                prop:value=move || form.with(|f| f.title.clone())
                on:input=move |ev| set_form.update(|f| f.title = event_target_value(&ev))
            />
            <textarea
                id="description"
                placeholder="Description"
                prop:value=move || form.with(|f| f.description.clone())
                on:input=move |ev| set_form.update(|f| f.description = event_target_value(&ev))
            ></textarea>
            <input
                id="author"
                type="text"
                placeholder="Author"
                prop:value=move || form.with(|f| f.author.clone())
                on:input=move |ev| set_form.update(|f| f.author = event_target_value(&ev))
            />
            <input
                id="imgLink"
                type="text"
                placeholder="Image link"
                prop:value=move || form.with(|f| f.img_link.clone())
                on:input=move |ev| set_form.update(|f| f.img_link = event_target_value(&ev))
            />
            <button id="addEntry" type="button" class="button" on:click=add_entry>
                "Add"
            </button>
        </section>
    }
}
