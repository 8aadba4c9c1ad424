//! HTTP client wrapper - fetches projects and maps outcomes to responses

use std::time::Instant;

use crate::config::Config;
use crate::error::FetchError;
use crate::messages::NetworkResponse;
use crate::models::{Category, Project, ProjectsPayload};

/// `GET <api_url>?category=<id>` and decode the project list
pub async fn fetch_projects(
    client: &reqwest::Client,
    config: &Config,
    category: Category,
) -> Result<Vec<Project>, FetchError> {
    let resp = client
        .get(&config.api_url)
        .query(&[("category", category.id())])
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = resp.text().await?;
    let payload: ProjectsPayload = serde_json::from_str(&body)?;
    Ok(payload.into_projects())
}

/// Execute a fetch and wrap the outcome for the App layer
pub async fn execute_fetch(
    client: &reqwest::Client,
    config: &Config,
    request_id: u64,
    category: Category,
) -> NetworkResponse {
    let start = Instant::now();
    let result = fetch_projects(client, config, category).await;
    let time_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(projects) => NetworkResponse::Projects {
            id: request_id,
            category,
            projects,
            time_ms,
        },
        Err(error) => NetworkResponse::Failed {
            id: request_id,
            category,
            error,
            time_ms,
        },
    }
}

/// Create an HTTP client with the configured timeout
pub fn create_client(config: &Config) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
