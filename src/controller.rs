//! Sequential owner of the food list
//!
//! Runs one request at a time against the backend and reconciles the list
//! after each answer. Used by the one-shot commands.

use crate::api::FoodApi;
use crate::events::{Event, EventSender, EventType, Operation};
use crate::food::{Food, FoodDraft, FoodId};
use crate::logging::LogLevel;
use crate::network::ErrorHandler;
use crate::store::FoodStore;
use crate::sync::{self, Request, SyncError};
use std::sync::Arc;

pub struct FoodController {
    api: Arc<dyn FoodApi>,
    store: FoodStore,
    events: EventSender,
    error_handler: ErrorHandler,
}

impl FoodController {
    pub fn new(api: Arc<dyn FoodApi>, events: EventSender) -> Self {
        Self {
            api,
            store: FoodStore::new(),
            events,
            error_handler: ErrorHandler::new(),
        }
    }

    pub fn store(&self) -> &FoodStore {
        &self.store
    }

    pub fn foods(&self) -> &[Food] {
        self.store.foods()
    }

    /// Replaces the list with the server's collection.
    pub async fn load(&mut self) -> Result<(), SyncError> {
        self.dispatch(Request::Load).await
    }

    /// Creates a record and appends the server's version of it.
    pub async fn add_food(&mut self, draft: FoodDraft) -> Result<(), SyncError> {
        self.dispatch(Request::Create(draft)).await
    }

    /// Merges the draft into `editing` and replaces it with the server's answer.
    pub async fn update_food(
        &mut self,
        editing: &Food,
        draft: &FoodDraft,
    ) -> Result<(), SyncError> {
        let merged = match sync::prepare_update(&self.store, editing, draft) {
            Ok(merged) => merged,
            Err(e) => {
                self.report_error(Operation::Update, &e).await;
                return Err(e);
            }
        };
        self.dispatch(Request::Update(merged)).await
    }

    /// Deletes a record and drops it from the list.
    pub async fn delete_food(&mut self, id: FoodId) -> Result<(), SyncError> {
        self.dispatch(Request::Delete(id)).await
    }

    async fn dispatch(&mut self, request: Request) -> Result<(), SyncError> {
        let operation = request.operation();
        self.events
            .send(operation, request.describe(), EventType::Refresh, LogLevel::Info)
            .await;

        let outcome = match sync::perform(self.api.as_ref(), request, &self.events).await {
            Ok(completion) => {
                let message = completion.describe();
                sync::apply(&mut self.store, completion).map(|()| message)
            }
            Err(e) => Err(e),
        };

        match outcome {
            Ok(message) => {
                self.events
                    .send_event(Event::success(operation, message))
                    .await;
                Ok(())
            }
            Err(e) => {
                self.report_error(operation, &e).await;
                Err(e)
            }
        }
    }

    async fn report_error(&self, operation: Operation, error: &SyncError) {
        let level = self.error_handler.classify_sync_error(error);
        self.events
            .send_event(Event::error(operation, error.to_string(), level))
            .await;
    }
}
