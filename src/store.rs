//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Animal;
use crate::view::{CardKey, CardList, CardView};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Cards currently on screen
    pub cards: CardList,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Render Surface
// ========================

impl CardView for AppStore {
    fn render_card(&self, animal: Animal) -> CardKey {
        self.cards().write().render_card(animal)
    }

    fn remove_card(&self, key: CardKey) -> Option<Animal> {
        self.cards().write().remove_card(key).map(|card| card.animal)
    }

    fn update_donation_count(&self, key: CardKey, value: u32) -> bool {
        self.cards().write().update_donation_count(key, value)
    }

    fn card(&self, key: CardKey) -> Option<Animal> {
        self.cards()
            .read_untracked()
            .get(key)
            .map(|card| card.animal.clone())
    }

    fn render_all(&self, animals: Vec<Animal>) -> Vec<CardKey> {
        // One write guard, one notification
        self.cards().write().render_all(animals)
    }
}
