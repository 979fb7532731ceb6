//! Animal List Component
//!
//! The card container. A single click handler on the list dispatches on the
//! clicked control's `data-action` tag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::AnimalCard;
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::view::CardKey;

/// Interactive controls on a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Delete,
    Donate,
}

impl CardAction {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "delete" => Some(CardAction::Delete),
            "donate" => Some(CardAction::Donate),
            _ => None,
        }
    }
}

/// Pair a control's `data-action` with its card's `data-key`
fn resolve_control(action_tag: &str, card_key: Option<&str>) -> Option<(CardAction, CardKey)> {
    let action = CardAction::from_tag(action_tag)?;
    let key = CardKey::parse(card_key?)?;
    Some((action, key))
}

/// Resolve a click to (action, card) if it hit a tagged control inside a card
fn clicked_control(ev: &web_sys::MouseEvent) -> Option<(CardAction, CardKey)> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let action_tag = target.get_attribute("data-action")?;
    let card = target.closest(".card").ok()?;
    let card_key = card.and_then(|card| card.get_attribute("data-key"));
    resolve_control(&action_tag, card_key.as_deref())
}

#[component]
pub fn AnimalList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let on_click = move |ev: web_sys::MouseEvent| {
        match clicked_control(&ev) {
            Some((CardAction::Delete, key)) => ctx.delete(key),
            Some((CardAction::Donate, key)) => ctx.donate(key),
            None => {}
        }
    };

    view! {
        <ul id="animal-list" on:click=on_click>
            <For
                each=move || store.cards().with(|list| list.cards().to_vec())
                key=|card| card.key
                children=move |card| view! { <AnimalCard card=card /> }
            />
        </ul>
    }
}
