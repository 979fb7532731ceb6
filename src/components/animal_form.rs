//! New Animal Form Component
//!
//! Collects a draft and hands it to the controller. The card only shows up
//! once the store has assigned an id.

use leptos::html;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::NewAnimal;

/// Form for creating new animals
#[component]
pub fn AnimalForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let form_ref: NodeRef<html::Form> = NodeRef::new();
    let name_ref: NodeRef<html::Input> = NodeRef::new();
    let image_ref: NodeRef<html::Input> = NodeRef::new();
    let description_ref: NodeRef<html::Input> = NodeRef::new();

    let input_value = |node: NodeRef<html::Input>| node.get().map(|input| input.value()).unwrap_or_default();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = NewAnimal::new(
            input_value(name_ref),
            input_value(image_ref),
            input_value(description_ref),
        );
        ctx.create(draft);

        // Cleared right away, not on success. The draft this submits is
        // checked in `models` and `api::http` tests; the reset itself is DOM-only.
        if let Some(form) = form_ref.get() {
            form.reset();
        }
    };

    view! {
        <form id="animal-form" node_ref=form_ref on:submit=on_submit>
            <label for="name">"Name"</label>
            <input type="text" id="name" name="name" node_ref=name_ref />
            <label for="image_url">"Image URL"</label>
            <input type="text" id="image_url" name="image_url" node_ref=image_ref />
            <label for="description">"Description"</label>
            <input type="text" id="description" name="description" node_ref=description_ref />
            <input type="submit" value="Add Animal" />
        </form>
    }
}
