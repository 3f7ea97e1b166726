//! HTTP Collection Client
//!
//! reqwest-backed implementation of [`CollectionClient`] against one
//! catalog endpoint: GET on the collection, POST to create, PUT/DELETE on
//! `endpoint/{id}`.

use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};

use crate::domain::CatalogRecord;

use super::traits::{ApiError, ApiResult, CollectionClient};

/// One catalog endpoint spoken over HTTP
pub struct HttpCollection<T> {
    client: Client,
    endpoint: String,
    _record: PhantomData<fn() -> T>,
}

impl<T: CatalogRecord> HttpCollection<T> {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            _record: PhantomData,
        }
    }

    /// Collection URL this client talks to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn record_url(&self, id: u32) -> String {
        format!("{}/{}", self.endpoint, id)
    }
}

fn transport_error(err: reqwest::Error) -> ApiError {
    if let Some(status) = err.status() {
        return ApiError::Status(status.as_u16());
    }
    if err.is_decode() {
        return ApiError::Decode(err.to_string());
    }
    ApiError::Connection
}

/// Reject non-success replies, and 204s: an empty body where one was
/// expected surfaces as its status so the recovery policy can weigh in.
fn checked(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status == StatusCode::NO_CONTENT || !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    Ok(response)
}

/// Drain and discard the reply body, still surfacing undecodable ones.
async fn consumed(response: Response) -> ApiResult<()> {
    response
        .json::<serde_json::Value>()
        .await
        .map(|_| ())
        .map_err(|err| ApiError::Decode(err.to_string()))
}

#[async_trait]
impl<T: CatalogRecord> CollectionClient<T> for HttpCollection<T> {
    async fn list(&self) -> ApiResult<Vec<T>> {
        log::debug!("GET {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(transport_error)?;
        checked(response)?
            .json::<Vec<T>>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn create(&self, draft: &T::Draft) -> ApiResult<()> {
        log::debug!("POST {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(draft)
            .send()
            .await
            .map_err(transport_error)?;
        consumed(checked(response)?).await
    }

    async fn update(&self, id: u32, draft: &T::Draft) -> ApiResult<()> {
        let url = self.record_url(id);
        log::debug!("PUT {url}");
        let response = self
            .client
            .put(&url)
            .json(draft)
            .send()
            .await
            .map_err(transport_error)?;
        consumed(checked(response)?).await
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        let url = self.record_url(id);
        log::debug!("DELETE {url}");
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(transport_error)?;
        consumed(checked(response)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Area;

    #[test]
    fn test_record_url_joins_id() {
        let client = HttpCollection::<Area>::new(
            Client::new(),
            "http://148.226.168.138/supa/api/SUPACatAreas/",
        );
        assert_eq!(client.endpoint(), "http://148.226.168.138/supa/api/SUPACatAreas");
        assert_eq!(
            client.record_url(12),
            "http://148.226.168.138/supa/api/SUPACatAreas/12"
        );
    }
}
