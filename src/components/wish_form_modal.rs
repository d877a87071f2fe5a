//! Wish Form Modal Component
//!
//! Create/edit dialog. Field values live in the UI store so the root can
//! turn them into a submission.

use leptos::prelude::*;
use wishlist_core::{Priority, WishForm};

use super::modal::Modal;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn WishFormModal(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ui = use_ui_store();

    let is_open = Signal::derive(move || ui.show_form().get());
    let is_editing = Signal::derive(move || ui.editing().with(Option::is_some));
    let title = Signal::derive(move || {
        if is_editing.get() {
            "Update Wish".to_string()
        } else {
            "Create New Wish".to_string()
        }
    });

    let field = move |read: fn(&WishForm) -> String| move || ui.form().with(|f| read(f));
    let edit = move |apply: fn(&mut WishForm, String)| {
        move |ev: web_sys::Event| {
            let value = event_target_value(&ev);
            ui.form().update(|f| apply(f, value));
        }
    };

    let submit_label = move || match (is_editing.get(), loading.get()) {
        (true, true) => "Updating...",
        (true, false) => "Update",
        (false, true) => "Creating...",
        (false, false) => "Create",
    };

    view! {
        <Modal is_open=is_open on_close=on_close title=title>
            <form
                class="wish-form"
                on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.run(());
                }
            >
                <label class="form-field">
                    <span>"Image URL"</span>
                    <input
                        type="url"
                        required
                        placeholder="https://example.com/image.jpg"
                        prop:value=field(|f| f.image_url.clone())
                        on:input=edit(|f, v| f.image_url = v)
                    />
                </label>

                <label class="form-field">
                    <span>"Title"</span>
                    <input
                        type="text"
                        required
                        placeholder="What do you wish for?"
                        prop:value=field(|f| f.title.clone())
                        on:input=edit(|f, v| f.title = v)
                    />
                </label>

                <label class="form-field">
                    <span>"Description"</span>
                    <textarea
                        rows="3"
                        required
                        placeholder="Tell us more about it"
                        prop:value=field(|f| f.description.clone())
                        on:input=edit(|f, v| f.description = v)
                    ></textarea>
                </label>

                <div class="form-row">
                    <label class="form-field">
                        <span>"Price"</span>
                        <input
                            type="number"
                            min="0"
                            step="0.01"
                            required
                            prop:value=field(|f| f.price.clone())
                            on:input=edit(|f, v| f.price = v)
                        />
                    </label>

                    <label class="form-field">
                        <span>"Priority"</span>
                        <select
                            prop:value=field(|f| f.priority.as_str().to_string())
                            on:change=edit(|f, v| f.priority = Priority::from_str(&v))
                        >
                            {Priority::ALL.iter().map(|p| view! {
                                <option value=p.as_str()>{p.option_label()}</option>
                            }).collect_view()}
                        </select>
                    </label>
                </div>

                <Show when=move || is_editing.get()>
                    <label class="form-check">
                        <input
                            type="checkbox"
                            prop:checked=move || ui.form().with(|f| f.completed)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                ui.form().update(|f| f.completed = checked);
                            }
                        />
                        <span>"Completed"</span>
                    </label>
                </Show>

                <div class="form-actions">
                    <button type="button" class="btn btn-secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                        {submit_label}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
