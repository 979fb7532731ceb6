//! Animal Card Component
//!
//! One entry of the animal list. Controls carry a `data-action` tag and the
//! card carries its key, so the list handles clicks by delegation.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::view::Card;

#[component]
pub fn AnimalCard(card: Card) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let key = card.key;
    let Card { animal, .. } = card;
    let id = animal.id.to_string();
    let name = animal.name;
    let alt = name.clone();

    // Only the counter follows the store; the rest is rendered once
    let donations = move || {
        store
            .cards()
            .with(|list| list.get(key).map(|card| card.animal.donations))
            .unwrap_or_default()
    };

    view! {
        <li class="card" data-id=id data-key=key.get().to_string()>
            <div class="image">
                <img src=animal.image_url alt=alt />
                <button class="button delete-button" data-action="delete">"X"</button>
            </div>
            <div class="content">
                <h4>{name}</h4>
                <div class="donations">
                    "$"<span class="donation-count">{donations}</span>" Donated"
                </div>
                <p class="description">{animal.description}</p>
            </div>
            <button class="button donate-button" data-action="donate">
                {format!("Donate ${}", ctx.donation_step)}
            </button>
        </li>
    }
}
