//! Render Synchronization
//!
//! Decides, per action, whether the view changes before or after the store
//! answers:
//!
//! - load:   fetch everything, then render it
//! - create: pessimistic, the card appears once the store has assigned an id
//! - delete: optimistic, the card disappears at once and the request is fired
//!   without waiting
//! - donate: pessimistic on the visible value, the counter only ever shows a
//!   total the store has confirmed
//!
//! `delete` and `donate` do their synchronous part when called and hand back
//! a future for the network part, so callers observe the view before any
//! response arrives.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use futures::future::{AbortHandle, AbortRegistration, Abortable};
use tracing::{debug, error, warn};

use crate::api::AnimalStore;
use crate::config::ShelterConfig;
use crate::error::ApiResult;
use crate::models::NewAnimal;
use crate::view::{CardKey, CardView};

/// In-flight donation requests, keyed by the card they were started from
#[derive(Default)]
struct PendingDonations {
    next_token: u64,
    by_card: HashMap<CardKey, Vec<(u64, AbortHandle)>>,
}

impl PendingDonations {
    fn register(&mut self, card: CardKey) -> (u64, AbortRegistration) {
        let token = self.next_token;
        self.next_token += 1;
        let (handle, registration) = AbortHandle::new_pair();
        self.by_card.entry(card).or_default().push((token, handle));
        (token, registration)
    }

    fn finish(&mut self, card: CardKey, token: u64) {
        if let Some(entries) = self.by_card.get_mut(&card) {
            entries.retain(|(t, _)| *t != token);
            if entries.is_empty() {
                self.by_card.remove(&card);
            }
        }
    }

    /// Abort every pending donation started from `card`, returning how many there were
    fn cancel(&mut self, card: CardKey) -> usize {
        let entries = self.by_card.remove(&card).unwrap_or_default();
        for (_, handle) in &entries {
            handle.abort();
        }
        entries.len()
    }

    #[cfg(test)]
    fn count(&self, card: CardKey) -> usize {
        self.by_card.get(&card).map_or(0, Vec::len)
    }
}

/// Owns the store client and the render surface
pub struct SyncController<S, V> {
    store: Rc<S>,
    view: V,
    donation_step: u32,
    pending: Rc<RefCell<PendingDonations>>,
}

impl<S, V: Clone> Clone for SyncController<S, V> {
    fn clone(&self) -> Self {
        Self {
            store: Rc::clone(&self.store),
            view: self.view.clone(),
            donation_step: self.donation_step,
            pending: Rc::clone(&self.pending),
        }
    }
}

impl<S, V> SyncController<S, V>
where
    S: AnimalStore + 'static,
    V: CardView + 'static,
{
    pub fn new(store: S, view: V, config: &ShelterConfig) -> Self {
        Self {
            store: Rc::new(store),
            view,
            donation_step: config.donation_step,
            pending: Rc::default(),
        }
    }

    #[cfg(test)]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Number of donation requests started from `card` still waiting on the store
    #[cfg(test)]
    pub fn pending_donations(&self, card: CardKey) -> usize {
        self.pending.borrow().count(card)
    }

    /// Fetch the whole collection and render it in order
    pub async fn load(&self) -> ApiResult<Vec<CardKey>> {
        let animals = self.store.list_all().await.inspect_err(|e| {
            error!(error = %e, "failed to load animals");
        })?;
        debug!(count = animals.len(), "loaded animals");
        Ok(self.view.render_all(animals))
    }

    /// Persist a draft and render it once the store has assigned an id.
    /// On failure nothing is rendered.
    pub async fn create(&self, draft: NewAnimal) -> ApiResult<CardKey> {
        let animal = self.store.create(&draft).await.inspect_err(|e| {
            error!(error = %e, name = %draft.name, "failed to create animal");
        })?;
        debug!(id = %animal.id, "created animal");
        Ok(self.view.render_card(animal))
    }

    /// Remove the card now, then ask the store to delete the record.
    ///
    /// The card stays removed whatever the store answers. Pending donations
    /// started from this card are aborted; other cards showing the same
    /// record keep theirs.
    pub fn delete(&self, card: CardKey) -> impl Future<Output = ApiResult<()>> + 'static {
        let removed = self.view.remove_card(card);
        let aborted = self.pending.borrow_mut().cancel(card);
        if aborted > 0 {
            debug!(card = card.get(), aborted, "aborted pending donations");
        }
        let store = Rc::clone(&self.store);

        async move {
            let Some(animal) = removed else {
                warn!(card = card.get(), "delete on a detached card");
                return Ok(());
            };
            let confirmation = store.delete(&animal.id).await.inspect_err(|e| {
                error!(error = %e, id = %animal.id, "failed to delete animal");
            })?;
            debug!(id = %animal.id, %confirmation, "deleted animal");
            Ok(())
        }
    }

    /// Send `shown + step` as the new total and show it once confirmed.
    ///
    /// The base is read from the card when this is called, so two quick
    /// clicks both start from the same value. The counter is written from
    /// the store's response; the last response to land wins. Resolves to
    /// `None` if the card was already detached or the request was aborted.
    pub fn donate(&self, card: CardKey) -> impl Future<Output = ApiResult<Option<u32>>> + 'static {
        let request = self.view.card(card).map(|animal| {
            let total = animal.donations.saturating_add(self.donation_step);
            let (token, registration) = self.pending.borrow_mut().register(card);
            (animal.id, total, token, registration)
        });
        let store = Rc::clone(&self.store);
        let view = self.view.clone();
        let pending = Rc::clone(&self.pending);

        async move {
            let Some((id, total, token, registration)) = request else {
                warn!(card = card.get(), "donate on a detached card");
                return Ok(None);
            };
            let outcome = Abortable::new(store.update_donations(&id, total), registration).await;
            pending.borrow_mut().finish(card, token);

            let Ok(result) = outcome else {
                debug!(%id, total, "donation aborted");
                return Ok(None);
            };
            let updated = result.inspect_err(|e| {
                error!(error = %e, %id, total, "failed to update donations");
            })?;
            if !view.update_donation_count(card, updated.donations) {
                warn!(%id, "donation confirmed for a detached card");
            }
            debug!(%id, donations = updated.donations, "donation confirmed");
            Ok(Some(updated.donations))
        }
    }
}
