//! HTTP client for the Obsidian Local REST API plugin

use super::{NoteFormat, PatchOperation, Period, SearchHit, TargetType, VaultClient};
use crate::config::VaultSettings;
use crate::error::{ObsidianError, Result};
use async_trait::async_trait;
use base64::Engine;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Certificate, Client, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use std::time::Duration;

const MARKDOWN: &str = "text/markdown";
const JSON_LOGIC: &str = "application/vnd.olrapi.jsonlogic+json";
const DATAVIEW_DQL: &str = "application/vnd.olrapi.dataview.dql+txt";
const NOTE_JSON: &str = "application/vnd.olrapi.note+json";

#[derive(Deserialize)]
struct FileListing {
    files: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiErrorBody {
    error_code: Option<i64>,
    message: Option<String>,
}

/// [`VaultClient`] backed by the Local REST API
#[derive(Debug, Clone)]
pub struct ObsidianRestClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ObsidianRestClient {
    /// Build a client for the configured endpoint.
    ///
    /// When a certificate is configured it is added as a trust root; otherwise
    /// certificate verification is turned off, since the plugin serves a
    /// self-signed certificate by default.
    pub fn new(settings: &VaultSettings) -> Result<Self> {
        let timeout = Duration::from_secs(settings.timeout_secs);
        let mut builder = Client::builder().timeout(timeout).connect_timeout(timeout);

        builder = match load_certificate(settings)? {
            Some(cert) => builder.add_root_certificate(cert),
            None => builder.danger_accept_invalid_certs(true),
        };

        let client = builder
            .build()
            .map_err(|e| ObsidianError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: settings.base_url(),
            api_key: settings.api_key.clone(),
        })
    }

    /// Root URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
            .bearer_auth(&self.api_key)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = api_error(status, &body);
        tracing::debug!("Vault request failed: {}", error);
        Err(error)
    }
}

/// Turn a non-2xx response into [`ObsidianError::Api`], preferring the
/// `{errorCode, message}` body the plugin sends.
fn api_error(status: StatusCode, body: &str) -> ObsidianError {
    let fallback_code = i64::from(status.as_u16());
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => ObsidianError::Api {
            code: parsed.error_code.unwrap_or(fallback_code),
            message: parsed
                .message
                .unwrap_or_else(|| "<unknown error>".to_string()),
        },
        Err(_) => {
            let message = match body.trim() {
                "" => status
                    .canonical_reason()
                    .unwrap_or("<unknown error>")
                    .to_string(),
                text => text.to_string(),
            };
            ObsidianError::Api {
                code: fallback_code,
                message,
            }
        }
    }
}

fn load_certificate(settings: &VaultSettings) -> Result<Option<Certificate>> {
    let pem = if let Some(path) = &settings.cert_path {
        std::fs::read(path).map_err(|e| {
            ObsidianError::Config(format!(
                "Failed to read certificate {}: {e}",
                path.display()
            ))
        })?
    } else if let Some(encoded) = &settings.cert_base64 {
        base64::engine::general_purpose::STANDARD
            .decode(encoded.trim())
            .map_err(|e| ObsidianError::Config(format!("Invalid base64 certificate: {e}")))?
    } else {
        return Ok(None);
    };

    Certificate::from_pem(&pem)
        .map(Some)
        .map_err(|e| ObsidianError::Config(format!("Invalid PEM certificate: {e}")))
}

fn recent_changes_query(limit: u32, days: u32) -> String {
    [
        "TABLE file.mtime".to_string(),
        format!("WHERE file.mtime >= date(today) - dur({days} days)"),
        "SORT file.mtime DESC".to_string(),
        format!("LIMIT {limit}"),
    ]
    .join("\n")
}

#[async_trait]
impl VaultClient for ObsidianRestClient {
    async fn list_files_in_vault(&self) -> Result<Vec<String>> {
        let response = self.send(self.request(Method::GET, "/vault/")).await?;
        Ok(response.json::<FileListing>().await?.files)
    }

    async fn list_files_in_dir(&self, dirpath: &str) -> Result<Vec<String>> {
        let response = self
            .send(self.request(Method::GET, &format!("/vault/{dirpath}/")))
            .await?;
        Ok(response.json::<FileListing>().await?.files)
    }

    async fn get_file_contents(&self, filepath: &str) -> Result<String> {
        let response = self
            .send(self.request(Method::GET, &format!("/vault/{filepath}")))
            .await?;
        Ok(response.text().await?)
    }

    async fn search(&self, query: &str, context_length: u32) -> Result<Vec<SearchHit>> {
        let request = self.request(Method::POST, "/search/simple/").query(&[
            ("query", query.to_string()),
            ("contextLength", context_length.to_string()),
        ]);
        Ok(self.send(request).await?.json().await?)
    }

    async fn search_json(&self, query: &serde_json::Value) -> Result<serde_json::Value> {
        let request = self
            .request(Method::POST, "/search/")
            .header(CONTENT_TYPE, JSON_LOGIC)
            .body(serde_json::to_vec(query)?);
        Ok(self.send(request).await?.json().await?)
    }

    async fn append_content(&self, filepath: &str, content: &str) -> Result<()> {
        let request = self
            .request(Method::POST, &format!("/vault/{filepath}"))
            .header(CONTENT_TYPE, MARKDOWN)
            .body(content.to_string());
        self.send(request).await?;
        Ok(())
    }

    async fn patch_content(
        &self,
        filepath: &str,
        operation: PatchOperation,
        target_type: TargetType,
        target: &str,
        content: &str,
    ) -> Result<()> {
        let request = self
            .request(Method::PATCH, &format!("/vault/{filepath}"))
            .header(CONTENT_TYPE, MARKDOWN)
            .header("Operation", operation.as_str())
            .header("Target-Type", target_type.as_str())
            .header("Target", urlencoding::encode(target).into_owned())
            .body(content.to_string());
        self.send(request).await?;
        Ok(())
    }

    async fn put_content(&self, filepath: &str, content: &str) -> Result<()> {
        let request = self
            .request(Method::PUT, &format!("/vault/{filepath}"))
            .header(CONTENT_TYPE, MARKDOWN)
            .body(content.to_string());
        self.send(request).await?;
        Ok(())
    }

    async fn delete_file(&self, filepath: &str) -> Result<()> {
        self.send(self.request(Method::DELETE, &format!("/vault/{filepath}")))
            .await?;
        Ok(())
    }

    async fn get_periodic_note(&self, period: Period, format: NoteFormat) -> Result<String> {
        let mut request = self.request(Method::GET, &format!("/periodic/{period}/"));
        if format == NoteFormat::Metadata {
            request = request.header(ACCEPT, NOTE_JSON);
        }
        Ok(self.send(request).await?.text().await?)
    }

    async fn get_recent_periodic_notes(
        &self,
        period: Period,
        limit: u32,
        include_content: bool,
    ) -> Result<serde_json::Value> {
        let request = self
            .request(Method::GET, &format!("/periodic/{period}/recent"))
            .query(&[
                ("limit", limit.to_string()),
                ("includeContent", include_content.to_string()),
            ]);
        Ok(self.send(request).await?.json().await?)
    }

    async fn get_recent_changes(&self, limit: u32, days: u32) -> Result<serde_json::Value> {
        let request = self
            .request(Method::POST, "/search/")
            .header(CONTENT_TYPE, DATAVIEW_DQL)
            .body(recent_changes_query(limit, days));
        Ok(self.send(request).await?.json().await?)
    }
}
