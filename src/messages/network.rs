//! Network messages - communication between App and Network layers

use crate::error::FetchError;
use crate::models::{Category, Project};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkCommand {
    /// Fetch the projects of one category
    FetchProjects {
        id: u64,
        category: Category,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// 2xx with a well-formed payload
    Projects {
        id: u64,
        category: Category,
        projects: Vec<Project>,
        time_ms: u64,
    },
    /// Anything else
    Failed {
        id: u64,
        category: Category,
        error: FetchError,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Projects { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
        }
    }

    /// Category the originating request was issued for
    pub fn category(&self) -> Category {
        match self {
            NetworkResponse::Projects { category, .. } => *category,
            NetworkResponse::Failed { category, .. } => *category,
        }
    }

    pub fn time_ms(&self) -> u64 {
        match self {
            NetworkResponse::Projects { time_ms, .. } => *time_ms,
            NetworkResponse::Failed { time_ms, .. } => *time_ms,
        }
    }
}
