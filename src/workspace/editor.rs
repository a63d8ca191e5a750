use tracing::{info, warn};

use super::WorkspaceService;

pub const SAVE_SUCCESS_MESSAGE: &str = "Successfully saved ExternalUrl";

/// User-facing outcome of a save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

/// State of the external workspace URL form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceEditor {
    pub loading: bool,
    pub external_url: String,
    pub initial_external_url: String,
    pub external_url_available: bool,
}

impl Default for WorkspaceEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkspaceEditor {
    pub fn new() -> Self {
        Self {
            loading: true,
            external_url: String::new(),
            initial_external_url: String::new(),
            external_url_available: true,
        }
    }

    pub async fn load<S: WorkspaceService>(&mut self, service: &S) {
        match service.fetch_url().await {
            Ok(url) => {
                self.external_url = url.clone();
                self.initial_external_url = url;
            }
            Err(e) => {
                info!("No external workspace url available: {e}");
                self.external_url_available = false;
            }
        }
        self.loading = false;
    }

    pub fn set_external_url(&mut self, url: impl Into<String>) {
        self.external_url = url.into();
    }

    pub fn is_modified(&self) -> bool {
        self.external_url != self.initial_external_url
    }

    pub async fn save<S: WorkspaceService>(&mut self, service: &S) -> Notification {
        match service.save_url(&self.external_url).await {
            Ok(_) => {
                self.initial_external_url = self.external_url.clone();
                self.external_url_available = true;
                Notification::Success(SAVE_SUCCESS_MESSAGE.to_string())
            }
            Err(e) => {
                warn!("Saving external workspace url failed: {e}");
                self.loading = false;
                Notification::Error(e.to_string())
            }
        }
    }
}
