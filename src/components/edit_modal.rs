//! Edit Modal Component
//!
//! Modal dialog for editing an existing item. Inputs are uncontrolled and
//! reached through node refs; Save and Cancel are bound once and read the
//! active target from `AppState::modal`.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use item_client::ItemFields;
use crate::actions::{cancel_edit, load_editor, save_edit};
use crate::context::{use_app_context, AppContext};
use crate::store::{use_app_store, AppStateStoreFields, AppStore};

/// Node refs of the modal elements
#[derive(Clone, Copy)]
pub struct EditForm {
    modal: NodeRef<html::Div>,
    overlay: NodeRef<html::Div>,
    title: NodeRef<html::Input>,
    description: NodeRef<html::Textarea>,
    author: NodeRef<html::Input>,
    img_link: NodeRef<html::Input>,
}

/// Mounted input elements of the modal
struct EditInputs {
    title: HtmlInputElement,
    description: HtmlTextAreaElement,
    author: HtmlInputElement,
    img_link: HtmlInputElement,
}

impl EditForm {
    pub fn new() -> Self {
        Self {
            modal: NodeRef::new(),
            overlay: NodeRef::new(),
            title: NodeRef::new(),
            description: NodeRef::new(),
            author: NodeRef::new(),
            img_link: NodeRef::new(),
        }
    }

    /// All inputs, or None if any modal element is not mounted
    fn inputs(&self) -> Option<EditInputs> {
        self.modal.get_untracked()?;
        self.overlay.get_untracked()?;
        Some(EditInputs {
            title: self.title.get_untracked()?,
            description: self.description.get_untracked()?,
            author: self.author.get_untracked()?,
            img_link: self.img_link.get_untracked()?,
        })
    }
}

impl EditInputs {
    fn fill(&self, fields: &ItemFields) {
        self.title.set_value(&fields.title);
        self.description.set_value(&fields.description);
        self.author.set_value(&fields.author);
        self.img_link.set_value(&fields.img_link);
    }

    fn read(&self) -> ItemFields {
        ItemFields {
            title: self.title.value(),
            description: self.description.value(),
            author: self.author.value(),
            img_link: self.img_link.value(),
        }
    }
}

/// Open the modal for item `id`
///
/// Aborts with a logged error if the modal is not mounted. A failed fetch
/// is logged and leaves the modal hidden.
pub fn open_editor(ctx: AppContext, store: AppStore, form: EditForm, id: u32) {
    let Some(inputs) = form.inputs() else {
        log::error!("One or more modal elements not found.");
        return;
    };

    spawn_local(async move {
        if let Some((state, fields)) = load_editor(&ctx.client(), id).await {
            inputs.fill(&fields);
            *store.modal().write() = state;
        }
    });
}

/// Edit modal with backdrop overlay
#[component]
pub fn EditModal(form: EditForm) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let display = move || store.modal().with(|modal| modal.display());

    let save = move |_| {
        let state = store.modal().with_untracked(|modal| modal.clone());
        if !state.is_visible() {
            return;
        }
        let Some(inputs) = form.inputs() else {
            log::error!("One or more modal elements not found.");
            return;
        };
        let fields = inputs.read();

        spawn_local(async move {
            let next = save_edit(&ctx.client(), &state, fields).await;
            if next != state {
                *store.modal().write() = next;
            }
        });
    };

    let cancel = move |_| {
        *store.modal().write() = cancel_edit();
    };

    view! {
        <div id="overlay" class="overlay" node_ref=form.overlay style:display=display></div>
        <div
            id="editModal"
            class="modal"
            node_ref=form.modal
            style:display=display
            data-item-id=move || store.modal().with(|modal| modal.target().map(|t| t.id.to_string()))
        >
            <h2>"Edit item"</h2>
            <input id="editTitle" type="text" placeholder="Title" node_ref=form.title />
            <textarea id="editDescription" placeholder="Description" node_ref=form.description></textarea>
            <input id="editAuthor" type="text" placeholder="Author" node_ref=form.author />
            <input id="editImg" type="text" placeholder="Image link" node_ref=form.img_link />
            <div class="buttons">
                <button id="saveEdit" type="button" class="button yellow" on:click=save>"Save"</button>
                <button id="cancelEdit" type="button" class="button red" on:click=cancel>"Cancel"</button>
            </div>
        </div>
    }
}
