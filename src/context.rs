//! Application Context
//!
//! Shared handle to the sync controller, provided via Leptos Context API.
//! Each action is spawned onto the browser event loop; failures are already
//! logged by the controller, so results are dropped here.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpStore;
use crate::models::NewAnimal;
use crate::store::AppStore;
use crate::sync::SyncController;
use crate::view::CardKey;

pub type ShelterController = SyncController<HttpStore, AppStore>;

#[derive(Clone, Copy)]
pub struct AppContext {
    /// Controller lives in local storage: its store client is not `Send`
    controller: StoredValue<ShelterController, LocalStorage>,
    /// Amount one donate click adds, for labels
    pub donation_step: u32,
}

impl AppContext {
    pub fn new(controller: ShelterController, donation_step: u32) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
            donation_step,
        }
    }

    fn controller(&self) -> ShelterController {
        self.controller.get_value()
    }

    /// Rebuild the list from a full fetch
    pub fn load(&self) {
        let controller = self.controller();
        spawn_local(async move {
            let _ = controller.load().await;
        });
    }

    pub fn create(&self, draft: NewAnimal) {
        let controller = self.controller();
        spawn_local(async move {
            let _ = controller.create(draft).await;
        });
    }

    pub fn delete(&self, card: CardKey) {
        // Card is gone before this returns
        let request = self.controller().delete(card);
        spawn_local(async move {
            let _ = request.await;
        });
    }

    pub fn donate(&self, card: CardKey) {
        let request = self.controller().donate(card);
        spawn_local(async move {
            let _ = request.await;
        });
    }
}
