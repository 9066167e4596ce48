//! Foods API Client
//!
//! A JSON client for the backend's `foods` collection resource.

use crate::api::FoodApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::network;
use crate::food::{CreateFoodRequest, Food, FoodDraft, FoodId};
use log::debug;
use reqwest::{Client, ClientBuilder, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

// Build timestamp in milliseconds since epoch
const BUILD_TIMESTAMP: &str = env!("BUILD_TIMESTAMP", "Build timestamp not available");

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("foodboard/", env!("CARGO_PKG_VERSION"));

const FOODS_ENDPOINT: &str = "foods";

#[derive(Debug, Clone)]
pub struct FoodApiClient {
    client: Client,
    base_url: String,
}

impl FoodApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(network::CONNECT_TIMEOUT_SECS))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn food_endpoint(id: FoodId) -> String {
        format!("{}/{}", FOODS_ENDPOINT, id)
    }

    fn with_headers(request: RequestBuilder) -> RequestBuilder {
        request
            .header("User-Agent", USER_AGENT)
            .header("X-Build-Timestamp", BUILD_TIMESTAMP)
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
        serde_json::from_slice(bytes).map_err(ApiError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = Self::with_headers(request).send().await?;
        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }

    async fn send_no_response(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let response = Self::with_headers(request).send().await?;
        Self::handle_response_status(response).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl FoodApi for FoodApiClient {
    fn base_url(&self) -> String {
        self.base_url.clone()
    }

    async fn list_foods(&self) -> Result<Vec<Food>, ApiError> {
        let url = self.build_url(FOODS_ENDPOINT);
        debug!("GET {}", url);
        self.send_json(self.client.get(&url)).await
    }

    async fn create_food(&self, draft: &FoodDraft) -> Result<Food, ApiError> {
        let url = self.build_url(FOODS_ENDPOINT);
        debug!("POST {} ({})", url, draft.name);
        let body = CreateFoodRequest { food: draft };
        self.send_json(self.client.post(&url).json(&body)).await
    }

    async fn update_food(&self, food: &Food) -> Result<Food, ApiError> {
        let url = self.build_url(&Self::food_endpoint(food.id));
        debug!("PUT {}", url);
        self.send_json(self.client.put(&url).json(food)).await
    }

    async fn delete_food(&self, id: FoodId) -> Result<(), ApiError> {
        let url = self.build_url(&Self::food_endpoint(id));
        debug!("DELETE {}", url);
        self.send_no_response(self.client.delete(&url)).await
    }
}

#[cfg(test)]
/// These are ignored by default since they require a backend on localhost.
mod live_api_tests {
    use crate::api::FoodApi;
    use crate::environment::Environment;
    use crate::food::FoodDraft;
    use std::time::Duration;

    fn client() -> super::FoodApiClient {
        super::FoodApiClient::new(Environment::Local.api_url(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    #[ignore] // This test requires a running backend.
    /// Should list the collection.
    async fn test_list_foods() {
        match client().list_foods().await {
            Ok(foods) => println!("Got {} foods", foods.len()),
            Err(e) => panic!("Failed to list foods: {}", e),
        }
    }

    #[tokio::test]
    #[ignore] // This test requires a running backend.
    /// Should create and then delete a record.
    async fn test_create_then_delete() {
        let client = client();
        let draft = FoodDraft {
            name: "Live test plate".to_string(),
            image: "https://example.com/plate.png".to_string(),
            price: "1.00".to_string(),
            description: "Created by the live test".to_string(),
        };
        let created = client.create_food(&draft).await.unwrap();
        assert_eq!(created.name, draft.name);
        client.delete_food(created.id).await.unwrap();
    }
}
