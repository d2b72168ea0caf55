//! HTTP client for a hosted JSON document-store API.
//!
//! Wire contract: `POST /v1/{collection}` inserts and echoes the stored
//! record, `GET /v1/{collection}/{id}` and `GET /v1/{collection}?order_by=`
//! read, `PATCH` merges, `DELETE` deletes, and
//! `POST /v1/{collection}/{id}/toggle` runs the transactional boolean
//! negation server-side. The store owns transactions and consistency; this
//! client only maps transport and API failures onto the core error taxonomy.

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::record::{Fields, Record, RecordId};
use crate::store::RemoteStore;
use crate::util::compact_text;

/// [`RemoteStore`] implementation backed by the hosted document-store API.
#[derive(Debug, Clone)]
pub struct HttpStore {
    endpoint: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl HttpStore {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = normalize_endpoint(endpoint.into())?;
        let client = reqwest::Client::builder()
            .build()
            .map_err(|error| Error::InvalidInput(format!("failed to build HTTP client: {error}")))?;
        Ok(Self {
            endpoint,
            token: None,
            client,
        })
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Build a store from a resolved [`StoreConfig`].
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        let store = Self::new(config.require_endpoint()?)?;
        Ok(match &config.token {
            Some(token) => store.with_token(token.clone()),
            None => store,
        })
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/v1/{}", self.endpoint, urlencoding::encode(collection))
    }

    fn document_url(&self, collection: &str, id: &RecordId) -> String {
        format!(
            "{}/{}",
            self.collection_url(collection),
            urlencoding::encode(id.as_str())
        )
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

impl RemoteStore for HttpStore {
    async fn insert(&self, collection: &str, fields: Fields) -> Result<Record> {
        let response = self
            .authorized(self.client.post(self.collection_url(collection)))
            .json(&fields)
            .send()
            .await
            .map_err(write_error)?;

        if !response.status().is_success() {
            return Err(Error::Persistence(api_error_message(response).await));
        }
        response
            .json::<Record>()
            .await
            .map_err(|error| Error::Persistence(format!("invalid insert response: {error}")))
    }

    async fn get(&self, collection: &str, id: &RecordId) -> Result<Option<Fields>> {
        let response = self
            .authorized(self.client.get(self.document_url(collection, id)))
            .send()
            .await
            .map_err(read_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Error::Fetch(api_error_message(response).await));
        }
        let record = response
            .json::<Record>()
            .await
            .map_err(|error| Error::Fetch(format!("invalid document response: {error}")))?;
        Ok(Some(record.fields))
    }

    async fn get_all(&self, collection: &str, order_by: Option<&str>) -> Result<Vec<Record>> {
        let mut request = self.client.get(self.collection_url(collection));
        if let Some(field) = order_by {
            request = request.query(&[("order_by", field)]);
        }
        let response = self.authorized(request).send().await.map_err(read_error)?;

        if !response.status().is_success() {
            return Err(Error::Fetch(api_error_message(response).await));
        }
        response
            .json::<Vec<Record>>()
            .await
            .map_err(|error| Error::Fetch(format!("invalid collection response: {error}")))
    }

    async fn merge(&self, collection: &str, id: &RecordId, partial: Fields) -> Result<()> {
        let response = self
            .authorized(self.client.patch(self.document_url(collection, id)))
            .json(&partial)
            .send()
            .await
            .map_err(write_error)?;

        if !response.status().is_success() {
            return Err(Error::Persistence(api_error_message(response).await));
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &RecordId) -> Result<()> {
        let response = self
            .authorized(self.client.delete(self.document_url(collection, id)))
            .send()
            .await
            .map_err(write_error)?;

        if !response.status().is_success() {
            return Err(Error::Persistence(api_error_message(response).await));
        }
        Ok(())
    }

    async fn toggle_flag(&self, collection: &str, id: &RecordId, field: &str) -> Result<bool> {
        let url = format!("{}/toggle", self.document_url(collection, id));
        let response = self
            .authorized(self.client.post(url))
            .json(&json!({ "field": field }))
            .send()
            .await
            .map_err(write_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND || status == StatusCode::PRECONDITION_FAILED {
            return Err(Error::PreconditionFailed(api_error_message(response).await));
        }
        if !status.is_success() {
            return Err(Error::Persistence(api_error_message(response).await));
        }
        let payload = response
            .json::<ToggleResponse>()
            .await
            .map_err(|error| Error::Persistence(format!("invalid toggle response: {error}")))?;
        Ok(payload.value)
    }
}

#[derive(Debug, Deserialize)]
struct ToggleResponse {
    value: bool,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
    message: Option<String>,
}

fn read_error(error: reqwest::Error) -> Error {
    Error::Fetch(error.to_string())
}

fn write_error(error: reqwest::Error) -> Error {
    Error::Persistence(error.to_string())
}

async fn api_error_message(response: reqwest::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    parse_api_error(status, &body)
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = payload.message.or(payload.error) {
            return format!("{} ({})", message.trim(), status.as_u16());
        }
    }

    let trimmed = compact_text(body);
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", trimmed, status.as_u16())
    }
}

fn normalize_endpoint(raw: String) -> Result<String> {
    let endpoint = raw.trim();
    if endpoint.is_empty() {
        return Err(Error::InvalidInput(
            "store endpoint must not be empty".to_string(),
        ));
    }
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        Ok(endpoint.trim_end_matches('/').to_string())
    } else {
        Err(Error::InvalidInput(
            "store endpoint must include http:// or https://".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalize_endpoint_rejects_invalid_values() {
        assert!(normalize_endpoint(String::new()).is_err());
        assert!(normalize_endpoint("api.example.com".to_string()).is_err());
    }

    #[test]
    fn normalize_endpoint_strips_trailing_slash() {
        assert_eq!(
            normalize_endpoint("https://store.example.com/".to_string()).unwrap(),
            "https://store.example.com"
        );
    }

    #[test]
    fn urls_encode_collection_and_id() {
        let store = HttpStore::new("https://store.example.com").unwrap();
        assert_eq!(
            store.collection_url("todo"),
            "https://store.example.com/v1/todo"
        );
        let id: RecordId = "a b".parse().unwrap();
        assert_eq!(
            store.document_url("events", &id),
            "https://store.example.com/v1/events/a%20b"
        );
    }

    #[test]
    fn parse_api_error_prefers_structured_message() {
        let message = parse_api_error(
            StatusCode::BAD_REQUEST,
            r#"{"message": "missing field 'todo'"}"#,
        );
        assert_eq!(message, "missing field 'todo' (400)");
    }

    #[test]
    fn parse_api_error_falls_back_to_body_then_status() {
        assert_eq!(
            parse_api_error(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            "boom (500)"
        );
        assert_eq!(
            parse_api_error(StatusCode::INTERNAL_SERVER_ERROR, ""),
            "HTTP 500"
        );
    }
}
