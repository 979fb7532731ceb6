//! Remote Store Client
//!
//! Bindings to the `/animals` collection, organized behind a trait so the
//! sync controller can be driven by any backend.

mod http;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Animal, AnimalId, NewAnimal};

pub use http::HttpStore;

/// CRUD access to the remote animal collection
///
/// Futures are `?Send`: everything runs on the browser's single event loop.
/// Calls are independent of each other. Nothing is queued, deduplicated or
/// retried, and concurrent calls for the same id race.
#[async_trait(?Send)]
pub trait AnimalStore {
    /// Full ordered contents of the collection
    async fn list_all(&self) -> ApiResult<Vec<Animal>>;

    /// Persist a draft; the returned record carries the assigned id
    async fn create(&self, draft: &NewAnimal) -> ApiResult<Animal>;

    /// Remove a record; the confirmation payload has no fixed shape
    async fn delete(&self, id: &AnimalId) -> ApiResult<serde_json::Value>;

    /// Replace the donation total with `new_total`
    async fn update_donations(&self, id: &AnimalId, new_total: u32) -> ApiResult<Animal>;
}
