use crate::api::error::ApiError;
use crate::food::{Food, FoodDraft, FoodId};

pub(crate) mod client;
pub use client::FoodApiClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// The `foods` collection resource of the backend.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait FoodApi: Send + Sync {
    /// Base URL requests are sent to.
    fn base_url(&self) -> String;

    /// Fetches the whole collection, in server order.
    async fn list_foods(&self) -> Result<Vec<Food>, ApiError>;

    /// Creates a record from a draft and returns it with its server-assigned fields.
    async fn create_food(&self, draft: &FoodDraft) -> Result<Food, ApiError>;

    /// Replaces the record with `food.id` by `food`.
    async fn update_food(&self, food: &Food) -> Result<Food, ApiError>;

    /// Deletes the record with the given id.
    async fn delete_food(&self, id: FoodId) -> Result<(), ApiError>;
}
