//! List-state synchronization with the backend's `foods` collection
//!
//! Every change runs in two steps: [`perform`] sends the request and waits for
//! the server, then [`apply`] reconciles the [`FoodStore`] with the answer.
//! The split lets the dashboard run requests on spawned tasks while a single
//! owner applies the results.

pub mod error;
pub use error::SyncError;

use crate::api::FoodApi;
use crate::events::{EventSender, Operation};
use crate::food::{Food, FoodDraft, FoodId};
use crate::network::NetworkClient;
use crate::store::FoodStore;

/// A change to send to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Fetch the whole collection.
    Load,
    /// Create a record from a draft.
    Create(FoodDraft),
    /// Replace a record with an already merged version; see [`prepare_update`].
    Update(Food),
    /// Delete a record.
    Delete(FoodId),
}

impl Request {
    pub fn operation(&self) -> Operation {
        match self {
            Request::Load => Operation::Load,
            Request::Create(_) => Operation::Create,
            Request::Update(_) => Operation::Update,
            Request::Delete(_) => Operation::Delete,
        }
    }

    /// Message shown while the request is in flight.
    pub fn describe(&self) -> String {
        match self {
            Request::Load => "Loading foods...".to_string(),
            Request::Create(draft) => format!("Creating '{}'...", draft.name),
            Request::Update(food) => format!("Updating #{} '{}'...", food.id, food.name),
            Request::Delete(id) => format!("Deleting #{}...", id),
        }
    }
}

/// The server's answer to a [`Request`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Loaded(Vec<Food>),
    Created(Food),
    /// The server's version of the record sent under `id`.
    Updated { id: FoodId, food: Food },
    Deleted(FoodId),
}

impl Completion {
    pub fn describe(&self) -> String {
        match self {
            Completion::Loaded(foods) => format!("Loaded {} foods", foods.len()),
            Completion::Created(food) => format!("Created #{} '{}'", food.id, food.name),
            Completion::Updated { id, food } => format!("Updated #{} '{}'", id, food.name),
            Completion::Deleted(id) => format!("Deleted #{}", id),
        }
    }
}

/// Builds the update payload for the record being edited.
///
/// The record must still be in the list; otherwise nothing is sent and
/// `NotFound` is returned.
pub fn prepare_update(
    store: &FoodStore,
    editing: &Food,
    draft: &FoodDraft,
) -> Result<Food, SyncError> {
    let index = store
        .position(editing.id)
        .ok_or(SyncError::NotFound(editing.id))?;
    let current = store.get_at(index).ok_or(SyncError::NotFound(editing.id))?;
    Ok(current.merged_with(draft))
}

/// Sends a request and waits for the server's answer.
///
/// Only [`Request::Load`] is retried.
pub async fn perform(
    api: &dyn FoodApi,
    request: Request,
    events: &EventSender,
) -> Result<Completion, SyncError> {
    match request {
        Request::Load => NetworkClient::for_list_fetching()
            .fetch_foods(api, events)
            .await
            .map(Completion::Loaded)
            .map_err(|e| SyncError::from_api(e, None)),
        Request::Create(draft) => api
            .create_food(&draft)
            .await
            .map(Completion::Created)
            .map_err(|e| SyncError::from_api(e, None)),
        Request::Update(food) => {
            let id = food.id;
            api.update_food(&food)
                .await
                .map(|food| Completion::Updated { id, food })
                .map_err(|e| SyncError::from_api(e, Some(id)))
        }
        Request::Delete(id) => api
            .delete_food(id)
            .await
            .map(|()| Completion::Deleted(id))
            .map_err(|e| SyncError::from_api(e, Some(id))),
    }
}

/// Reconciles the store with a server answer.
///
/// An update replaces the row it was sent for, whatever id the server echoes.
/// If that row left the list while the request was in flight the update is
/// discarded with `NotFound`. Deleting an id that is already gone succeeds.
pub fn apply(store: &mut FoodStore, completion: Completion) -> Result<(), SyncError> {
    match completion {
        Completion::Loaded(foods) => store.replace_all(foods),
        Completion::Created(food) => store.append(food),
        Completion::Updated { id, food } => {
            store
                .replace(Food { id, ..food })
                .ok_or(SyncError::NotFound(id))?;
        }
        Completion::Deleted(id) => {
            store.remove(id);
        }
    }
    Ok(())
}
