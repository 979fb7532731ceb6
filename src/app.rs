//! Animal Shelter App
//!
//! Wires the store client, the card store and the controller together, then
//! renders the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpStore;
use crate::components::{AnimalForm, AnimalList, DarkModeToggle};
use crate::config::ShelterConfig;
use crate::context::AppContext;
use crate::store::{AppState, AppStore};
use crate::sync::SyncController;

#[component]
pub fn App() -> impl IntoView {
    let config = ShelterConfig::from_build_env();
    tracing::info!(api_base = %config.api_base, "starting shelter client");

    let store: AppStore = Store::new(AppState::default());
    provide_context(store);

    let controller = SyncController::new(HttpStore::new(&config), store, &config);
    let ctx = AppContext::new(controller, config.donation_step);
    provide_context(ctx);

    // Nothing survives a reload: start from a full fetch
    ctx.load();

    view! {
        <header class="app-header">
            <h1>"Animal Shelter"</h1>
            <DarkModeToggle />
        </header>
        <main class="main-content">
            <AnimalForm />
            <AnimalList />
        </main>
    }
}
