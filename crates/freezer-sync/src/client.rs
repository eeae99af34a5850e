//! HTTP client for the remote file store (Google Drive v3 file API).

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Result, SyncError};
use crate::multipart;
use crate::session::DriveSession;

/// Well-known name of the inventory document.
pub const FILE_NAME: &str = "freezerItems.json";

/// Remote store base URL.
const DRIVE_API_URL: &str = "https://www.googleapis.com";

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Metadata of a file in the remote store.
#[derive(Debug, Clone, Deserialize)]
pub struct DriveFile {
    pub id: String,
    pub name: String,
    #[serde(rename = "mimeType", default)]
    pub mime_type: String,
}

#[derive(Debug, Deserialize)]
struct FileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

/// Authenticated client against the remote file store.
#[derive(Debug, Clone)]
pub struct DriveClient {
    client: reqwest::Client,
    session: DriveSession,
    base_url: String,
}

impl DriveClient {
    /// Creates a client for the given session.
    pub fn new(session: DriveSession) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| SyncError::Transport(format!("failed to create HTTP client: {err}")))?;

        Ok(Self {
            client,
            session,
            base_url: DRIVE_API_URL.to_string(),
        })
    }

    /// Overrides the API base URL (tests and alternative endpoints).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Looks up a file by exact name.
    ///
    /// Zero matches is success with `None`. More than one match is an
    /// anomaly the store should not produce; the first file returned
    /// wins and the rest are logged, never merged.
    pub async fn find_file(&self, name: &str) -> Result<Option<DriveFile>> {
        let url = format!("{}/drive/v3/files", self.base_url);
        debug!(name, "looking up remote document");

        let response = self
            .client
            .get(&url)
            .query(&[("q", format!("name=\"{name}\""))])
            .header(AUTHORIZATION, self.session.authorization())
            .send()
            .await?;
        let response = Self::expect_success(response).await?;

        let list: FileList = response.json().await?;
        if list.files.len() > 1 {
            warn!(
                name,
                matches = list.files.len(),
                "multiple remote documents match the well-known name; using the first"
            );
        }
        Ok(list.files.into_iter().next())
    }

    /// Downloads a file's content by id.
    pub async fn download(&self, file_id: &str) -> Result<String> {
        let url = format!("{}/drive/v3/files/{file_id}", self.base_url);
        debug!(file_id, "downloading remote document");

        let response = self
            .client
            .get(&url)
            .query(&[("alt", "media")])
            .header(AUTHORIZATION, self.session.authorization())
            .send()
            .await?;
        let response = Self::expect_success(response).await?;

        Ok(response.text().await?)
    }

    /// Creates a new file from a prebuilt multipart body.
    pub async fn create(&self, body: String) -> Result<()> {
        let url = format!("{}/upload/drive/v3/files", self.base_url);
        debug!("creating remote document");

        let response = self
            .client
            .post(&url)
            .query(&[("uploadType", "multipart")])
            .header(AUTHORIZATION, self.session.authorization())
            .header(reqwest::header::CONTENT_TYPE, multipart::content_type())
            .body(body)
            .send()
            .await?;
        Self::expect_success(response).await?;
        Ok(())
    }

    /// Overwrites an existing file's content in place.
    pub async fn update(&self, file_id: &str, body: String) -> Result<()> {
        let url = format!("{}/upload/drive/v3/files/{file_id}", self.base_url);
        debug!(file_id, "updating remote document");

        let response = self
            .client
            .patch(&url)
            .query(&[("uploadType", "multipart")])
            .header(AUTHORIZATION, self.session.authorization())
            .header(reqwest::header::CONTENT_TYPE, multipart::content_type())
            .body(body)
            .send()
            .await?;
        Self::expect_success(response).await?;
        Ok(())
    }

    /// Maps a non-success status to [`SyncError::Status`].
    ///
    /// Keeps hard failures distinct from "no file found", which is an
    /// ordinary empty lookup result.
    async fn expect_success(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SyncError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = DriveClient::new(DriveSession::bearer("token"));
        assert!(client.is_ok());
    }

    #[test]
    fn test_base_url_override() {
        let client = DriveClient::new(DriveSession::bearer("token"))
            .unwrap()
            .with_base_url("http://127.0.0.1:9999");
        assert_eq!(client.base_url, "http://127.0.0.1:9999");
    }
}
