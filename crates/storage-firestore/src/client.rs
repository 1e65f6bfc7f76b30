//! Thin Firestore REST client.
//!
//! Wraps the `projects/{project}/databases/(default)/documents` endpoints
//! the repositories need: single-document get/patch/delete, collection
//! listing with pagination, and atomic multi-write commits. API-key
//! authentication only; the store's security rules do the gating.

use reqwest::{Response, StatusCode};
use serde_json::{json, Value};

use crate::errors::StorageError;

const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";

/// Environment variable naming the Firestore project id.
pub const ENV_PROJECT: &str = "TRIPDECK_FIRESTORE_PROJECT";
/// Environment variable holding the Firestore web API key.
pub const ENV_API_KEY: &str = "TRIPDECK_FIRESTORE_API_KEY";

/// Connection settings for one Firestore project.
#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    pub project_id: String,
    pub api_key: String,
}

impl FirestoreConfig {
    pub fn new(project_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        FirestoreConfig {
            project_id: project_id.into(),
            api_key: api_key.into(),
        }
    }

    /// Read the configuration from the environment. Fails fast on a
    /// missing key rather than issuing requests that can only 403.
    pub fn from_env() -> Result<Self, StorageError> {
        let project_id = require_env(ENV_PROJECT)?;
        let api_key = require_env(ENV_API_KEY)?;
        Ok(FirestoreConfig {
            project_id,
            api_key,
        })
    }

    /// Fully qualified resource name for a document path like
    /// `trips/abc123`.
    pub fn document_name(&self, path: &str) -> String {
        format!(
            "projects/{}/databases/(default)/documents/{}",
            self.project_id, path
        )
    }

    fn documents_root(&self) -> String {
        format!(
            "{FIRESTORE_BASE_URL}/projects/{}/databases/(default)/documents",
            self.project_id
        )
    }
}

fn require_env(key: &str) -> Result<String, StorageError> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(StorageError::MissingEnv(key.to_string())),
    }
}

/// HTTP client for the Firestore REST API.
pub struct FirestoreClient {
    http: reqwest::Client,
    config: FirestoreConfig,
}

impl FirestoreClient {
    pub fn new(config: FirestoreConfig) -> Self {
        FirestoreClient {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn document_name(&self, path: &str) -> String {
        self.config.document_name(path)
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}?key={}",
            self.config.documents_root(),
            path,
            self.config.api_key
        )
    }

    /// Fetch one document. `Ok(None)` when it does not exist.
    pub async fn get_document(&self, path: &str) -> Result<Option<Value>, StorageError> {
        let response = self.http.get(self.url(path)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = check_status(response).await?;
        Ok(Some(response.json().await?))
    }

    /// List every document in a collection, following pagination.
    pub async fn list_documents(&self, collection_path: &str) -> Result<Vec<Value>, StorageError> {
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut url = self.url(collection_path);
            if let Some(token) = &page_token {
                url.push_str("&pageToken=");
                url.push_str(&urlencoding::encode(token));
            }

            let response = check_status(self.http.get(url).send().await?).await?;
            let body: Value = response.json().await?;

            if let Some(page) = body.get("documents").and_then(Value::as_array) {
                documents.extend(page.iter().cloned());
            }

            match body.get("nextPageToken").and_then(Value::as_str) {
                Some(token) if !token.is_empty() => page_token = Some(token.to_string()),
                _ => return Ok(documents),
            }
        }
    }

    /// Merge-write the given fields into a document. Only the fields
    /// named in `mask` are touched; the document is created when absent.
    pub async fn patch_document(
        &self,
        path: &str,
        fields: Value,
        mask: &[&str],
    ) -> Result<(), StorageError> {
        let mut url = self.url(path);
        for field in mask {
            url.push_str("&updateMask.fieldPaths=");
            url.push_str(&urlencoding::encode(field));
        }

        let body = json!({ "fields": fields });
        check_status(self.http.patch(url).json(&body).send().await?).await?;
        Ok(())
    }

    pub async fn delete_document(&self, path: &str) -> Result<(), StorageError> {
        check_status(self.http.delete(self.url(path)).send().await?).await?;
        Ok(())
    }

    /// Apply a set of writes atomically: all land or none do.
    pub async fn commit(&self, writes: Vec<Value>) -> Result<(), StorageError> {
        let url = format!(
            "{}:commit?key={}",
            self.config.documents_root(),
            self.config.api_key
        );
        let body = json!({ "writes": writes });
        check_status(self.http.post(url).json(&body).send().await?).await?;
        Ok(())
    }
}

async fn check_status(response: Response) -> Result<Response, StorageError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let raw = response.text().await.unwrap_or_default();
    // Error payloads look like {"error": {"message": "...", ...}}.
    let message = serde_json::from_str::<Value>(&raw)
        .ok()
        .and_then(|body| {
            body.get("error")
                .and_then(|err| err.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or(raw);

    Err(StorageError::Api {
        status: status.as_u16(),
        message,
    })
}
