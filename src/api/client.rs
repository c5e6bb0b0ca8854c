//! Backend API client

use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::warn;

use crate::api::error::ApiError;
use crate::project::{Project, ProjectVersion};

/// Header carrying the claim token for delete requests
const TOKEN_HEADER: &str = "Docport-Api-Key";

/// Response from the project listing endpoint
#[derive(Debug, Deserialize)]
struct ProjectsResponse {
    projects: Vec<Project>,
}

/// Response from the claim endpoint
#[derive(Debug, Deserialize)]
struct ClaimResponse {
    token: String,
}

/// Error payload returned by the backend on non-success responses
#[derive(Debug, Deserialize)]
struct MessageResponse {
    message: String,
}

/// Client for the portal backend API
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a new ApiClient for a backend base URL
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            client: reqwest::Client::builder()
                .user_agent("docport")
                .build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates an ApiClient from portal configuration
    pub fn from_config(config: &crate::config::PortalConfig) -> Result<Self, ApiError> {
        Self::new(&config.base_url)
    }

    /// Extract the server's message from a non-success response, falling
    /// back to the status line when the payload is not the expected JSON.
    async fn server_message(response: reqwest::Response) -> String {
        let status = response.status();
        match response.json::<MessageResponse>().await {
            Ok(payload) => payload.message,
            Err(_) => format!("Unexpected status: {}", status),
        }
    }

    /// Fetch all projects, optionally including hidden versions.
    ///
    /// Read failures degrade to an empty list with a logged diagnostic; the
    /// portal renders an empty listing instead of an error page.
    pub async fn get_projects(&self, include_hidden: bool) -> Vec<Project> {
        let url = format!(
            "{}/api/projects?include_hidden={}",
            self.base_url, include_hidden
        );

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Failed to fetch projects: {}", e);
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            warn!(
                "Project listing failed: {}",
                Self::server_message(response).await
            );
            return Vec::new();
        }

        match response.json::<ProjectsResponse>().await {
            Ok(payload) => payload.projects,
            Err(e) => {
                warn!("Failed to parse project listing: {}", e);
                Vec::new()
            }
        }
    }

    /// Fetch all versions of one project, hidden entries included.
    ///
    /// Same degrade-to-empty policy as [`ApiClient::get_projects`].
    pub async fn get_versions(&self, project: &str) -> Vec<ProjectVersion> {
        let url = format!(
            "{}/api/projects/{}?include_hidden=true",
            self.base_url, project
        );

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Failed to fetch versions of {}: {}", project, e);
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            warn!(
                "Version listing for {} failed: {}",
                project,
                Self::server_message(response).await
            );
            return Vec::new();
        }

        match response.json::<Project>().await {
            Ok(payload) => payload.versions,
            Err(e) => {
                warn!("Failed to parse versions of {}: {}", project, e);
                Vec::new()
            }
        }
    }

    /// Upload a documentation archive for one project version.
    ///
    /// A 401 means the version already exists on the server.
    pub async fn upload(
        &self,
        project: &str,
        version: &str,
        file_name: &str,
        content: Vec<u8>,
    ) -> Result<(), ApiError> {
        let url = format!("{}/api/{}/{}", self.base_url, project, version);
        let form = Form::new().part("file", Part::bytes(content).file_name(file_name.to_string()));

        let response = self.client.post(&url).multipart(form).send().await?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED => Err(ApiError::Conflict),
            StatusCode::GATEWAY_TIMEOUT => Err(ApiError::UpstreamUnavailable),
            _ => Err(ApiError::ServerRejected(Self::server_message(response).await)),
        }
    }

    /// Claim a project, returning the token required for later deletes
    pub async fn claim(&self, project: &str) -> Result<String, ApiError> {
        let url = format!("{}/api/{}/claim", self.base_url, project);

        let response = self.client.get(&url).send().await?;

        match response.status() {
            status if status.is_success() => {
                let payload = response.json::<ClaimResponse>().await?;
                Ok(payload.token)
            }
            StatusCode::GATEWAY_TIMEOUT => Err(ApiError::UpstreamUnavailable),
            _ => Err(ApiError::ServerRejected(Self::server_message(response).await)),
        }
    }

    /// Delete one project version, authenticated by a claim token.
    ///
    /// A 401 means the token does not match the project's claim.
    pub async fn delete(
        &self,
        project: &str,
        version: &str,
        token: &str,
    ) -> Result<(), ApiError> {
        let url = format!("{}/api/{}/{}", self.base_url, project, version);

        let response = self
            .client
            .delete(&url)
            .header(TOKEN_HEADER, token)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
            StatusCode::GATEWAY_TIMEOUT => Err(ApiError::UpstreamUnavailable),
            _ => Err(ApiError::ServerRejected(Self::server_message(response).await)),
        }
    }
}
