//! Client for the external foods REST API. The API is an opaque
//! collaborator; everything the app persists goes through here.

use std::env;
use std::time::Duration;

use dto::food::{CreateFoodDto, FoodDto, UpdateFoodDto};
use reqwest::{Client, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FoodsApiError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("foods API returned {status}: {body}")]
    Api { status: u16, body: String },
}

#[derive(Clone, Debug)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        UpstreamConfig {
            base_url: "http://localhost:8080/api/v1".to_string(),
            timeout_secs: 10,
        }
    }
}

impl UpstreamConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        UpstreamConfig {
            base_url: env::var("FOOD_API_URL").unwrap_or(defaults.base_url),
            timeout_secs: env::var("FOOD_API_TIMEOUT")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }
}

/// Shared HTTP client for `/api/v1/foods`. Success is determined by HTTP-OK
/// status alone; response bodies beyond the list are decoded but not
/// otherwise validated.
#[derive(Clone, Debug)]
pub struct FoodsApi {
    client: Client,
    base_url: String,
}

impl FoodsApi {
    pub fn new(config: &UpstreamConfig) -> Result<Self, FoodsApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(FoodsApi {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn list(&self, search: Option<&str>) -> Result<Vec<FoodDto>, FoodsApiError> {
        let mut request = self.client.get(self.endpoint_url("foods"));
        if let Some(term) = search {
            request = request.query(&[("name", term)]);
        }
        let response = ok_checked(request.send().await?).await?;
        Ok(response.json().await?)
    }

    pub async fn create(&self, food: &CreateFoodDto) -> Result<FoodDto, FoodsApiError> {
        let response = self
            .client
            .post(self.endpoint_url("foods"))
            .header("Content-Type", "application/json")
            .json(food)
            .send()
            .await?;
        Ok(ok_checked(response).await?.json().await?)
    }

    pub async fn update(&self, id: &str, patch: &UpdateFoodDto) -> Result<FoodDto, FoodsApiError> {
        let response = self
            .client
            .put(self.endpoint_url(&format!("foods/{id}")))
            .header("Content-Type", "application/json")
            .json(patch)
            .send()
            .await?;
        Ok(ok_checked(response).await?.json().await?)
    }

    pub async fn delete(&self, id: &str) -> Result<(), FoodsApiError> {
        let response = self
            .client
            .delete(self.endpoint_url(&format!("foods/{id}")))
            .send()
            .await?;
        ok_checked(response).await?;
        Ok(())
    }
}

async fn ok_checked(response: Response) -> Result<Response, FoodsApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(FoodsApiError::Api {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod test {
    use crate::upstream::*;

    #[test]
    fn endpoint_url_joins_without_double_slash() {
        let api = FoodsApi::new(&UpstreamConfig {
            base_url: "http://localhost:8080/api/v1/".to_string(),
            timeout_secs: 10,
        })
        .unwrap();
        assert_eq!(
            api.endpoint_url("foods"),
            "http://localhost:8080/api/v1/foods"
        );
        assert_eq!(
            api.endpoint_url("/foods/abc"),
            "http://localhost:8080/api/v1/foods/abc"
        );
    }

    #[test]
    fn config_defaults_apply_without_env() {
        let config = UpstreamConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080/api/v1");
        assert_eq!(config.timeout_secs, 10);
    }
}
