//! HTTP access to the `workspaceurl.md` resource of a repository instance.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::{debug, warn};

use super::error::{WorkspaceError, WorkspaceResult};
use super::{WorkspaceResponse, WorkspaceService};

pub const WORKSPACE_URL_RESOURCE: &str = "/workspaceurl.md";

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Joins the backend base URL, the instance path and the resource name.
///
/// A trailing slash on `backend_base_url` is dropped and a leading slash is
/// added to `instance_path` when missing.
pub fn resource_url(backend_base_url: &str, instance_path: &str) -> String {
    let base = backend_base_url.trim_end_matches('/');
    let path = instance_path.trim_end_matches('/');
    if path.is_empty() || path.starts_with('/') {
        format!("{base}{path}{WORKSPACE_URL_RESOURCE}")
    } else {
        format!("{base}/{path}{WORKSPACE_URL_RESOURCE}")
    }
}

#[derive(Debug, Clone)]
pub struct WorkspaceClient {
    client: Client,
    url: String,
}

impl WorkspaceClient {
    pub fn new(backend_base_url: &str, instance_path: &str) -> WorkspaceResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| WorkspaceError::Client(e.to_string()))?;
        Ok(Self::with_client(client, backend_base_url, instance_path))
    }

    pub fn with_client(client: Client, backend_base_url: &str, instance_path: &str) -> Self {
        Self {
            client,
            url: resource_url(backend_base_url, instance_path),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn network_error(&self, e: reqwest::Error) -> WorkspaceError {
        WorkspaceError::Network {
            url: self.url.clone(),
            message: e.to_string(),
        }
    }

    async fn status_error(&self, response: reqwest::Response) -> WorkspaceError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        warn!(url = %self.url, %status, "workspace url request rejected");
        WorkspaceError::Status {
            url: self.url.clone(),
            status: status.as_u16(),
            body,
        }
    }
}

impl WorkspaceService for WorkspaceClient {
    async fn fetch_url(&self) -> WorkspaceResult<String> {
        debug!(url = %self.url, "fetching workspace url");

        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "text/plain")
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        if !response.status().is_success() {
            return Err(self.status_error(response).await);
        }

        response.text().await.map_err(|e| WorkspaceError::Body {
            url: self.url.clone(),
            message: e.to_string(),
        })
    }

    async fn save_url(&self, workspace_url: &str) -> WorkspaceResult<WorkspaceResponse> {
        debug!(url = %self.url, "saving workspace url");

        let response = self
            .client
            .put(&self.url)
            .header(CONTENT_TYPE, "text/plain")
            .body(workspace_url.to_owned())
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        if !response.status().is_success() {
            return Err(self.status_error(response).await);
        }

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| WorkspaceError::Body {
            url: self.url.clone(),
            message: e.to_string(),
        })?;
        Ok(WorkspaceResponse { status, body })
    }
}
