//! External workspace URL of a repository instance.
//!
//! [`WorkspaceService`] is the fetch/store seam; [`WorkspaceClient`] talks
//! HTTP and [`WorkspaceEditor`] drives the edit form on top of any service.

use std::future::Future;

pub mod client;
pub mod editor;
pub mod error;


pub use client::{WORKSPACE_URL_RESOURCE, WorkspaceClient, resource_url};
pub use editor::{Notification, SAVE_SUCCESS_MESSAGE, WorkspaceEditor};
pub use error::{WorkspaceError, WorkspaceResult};

/// Status and body of a successful store request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceResponse {
    pub status: u16,
    pub body: String,
}

pub trait WorkspaceService {
    /// Reads the stored URL. Fails when the resource is absent.
    fn fetch_url(&self) -> impl Future<Output = WorkspaceResult<String>> + Send;

    fn save_url(
        &self,
        workspace_url: &str,
    ) -> impl Future<Output = WorkspaceResult<WorkspaceResponse>> + Send;
}
