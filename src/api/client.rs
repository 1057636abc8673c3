use reqwest::Client as HttpClient;
use serde_json::json;
use url::Url;

use crate::api::error::ApiError;
use crate::api::models::{Contact, ContactId, ContactPayload};

const COLLECTION_PATH: &str = "api/contacts";

#[derive(Debug, Clone)]
pub struct ApiClient {
    pub http: HttpClient,
    base: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_http(HttpClient::new(), base_url)
    }

    pub fn with_http(http: HttpClient, base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            http,
            base: Self::base(base_url)?,
        })
    }

    // Url::join drops the last path segment unless the base ends with a slash.
    fn base(base_url: &str) -> Result<Url, url::ParseError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        Url::parse(&format!("{}/", trimmed))
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base.join(path.trim_start_matches('/'))?)
    }

    fn check(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            Err(ApiError::Status(resp.status()))
        }
    }

    /// Fetch the whole contact collection, in the order the backend returns it.
    pub async fn list_contacts(&self) -> Result<Vec<Contact>, ApiError> {
        let endpoint = self.endpoint(COLLECTION_PATH)?;
        log::debug!("GET {endpoint}");
        let resp = Self::check(self.http.get(endpoint).send().await?)?;
        Ok(resp.json::<Vec<Contact>>().await?)
    }

    pub async fn create_contact(&self, payload: &ContactPayload) -> Result<Contact, ApiError> {
        let endpoint = self.endpoint(&format!("{COLLECTION_PATH}/"))?;
        log::debug!("POST {endpoint}");
        let resp = Self::check(self.http.post(endpoint).json(payload).send().await?)?;
        Ok(resp.json::<Contact>().await?)
    }

    /// `path` is the entry's action path, e.g. `api/contacts/7`.
    pub async fn update_contact(&self, path: &str, payload: &ContactPayload) -> Result<Contact, ApiError> {
        let endpoint = self.endpoint(path)?;
        log::debug!("PUT {endpoint}");
        let resp = Self::check(self.http.put(endpoint).json(payload).send().await?)?;
        Ok(resp.json::<Contact>().await?)
    }

    /// Only the status matters; any response body is ignored.
    pub async fn delete_contact(&self, path: &str, id: ContactId) -> Result<(), ApiError> {
        let endpoint = self.endpoint(path)?;
        log::debug!("DELETE {endpoint}");
        let body = json!({ "id": id });
        Self::check(self.http.delete(endpoint).json(&body).send().await?)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
