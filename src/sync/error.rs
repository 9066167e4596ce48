//! Failures reported when a change cannot be reconciled with the backend

use crate::api::error::ApiError;
use crate::food::FoodId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    /// The request never got a usable answer: connection, timeout or decoding.
    #[error("Network failure: {0}")]
    NetworkFailure(ApiError),

    /// The server answered with a non-success status.
    #[error("Server rejected the request ({status}): {message}")]
    ServerRejected { status: u16, message: String },

    /// The record is unknown locally or on the server.
    #[error("Food #{0} not found")]
    NotFound(FoodId),
}

impl SyncError {
    /// Maps a transport error, treating 404 as `NotFound` when the request targeted a record.
    pub fn from_api(error: ApiError, id: Option<FoodId>) -> Self {
        match (error, id) {
            (ApiError::Http { status: 404, .. }, Some(id)) => SyncError::NotFound(id),
            (ApiError::Http { status, message, .. }, _) => {
                SyncError::ServerRejected { status, message }
            }
            (other, _) => SyncError::NetworkFailure(other),
        }
    }
}
