//! App state - pure data structure with no I/O logic

use crate::error::FetchError;
use crate::messages::RenderState;
use crate::models::{Category, Project};

/// Phase of the most recent fetch
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestStatus {
    /// Nothing requested yet
    #[default]
    Initial,
    Loading,
    /// Projects of the latest completed fetch, in received order
    Success(Vec<Project>),
    Failure(FetchError),
}

impl RequestStatus {
    pub fn projects(&self) -> &[Project] {
        match self {
            RequestStatus::Success(projects) => projects,
            _ => &[],
        }
    }
}

/// Main application state - pure data, no I/O
pub struct AppState {
    // Filter
    pub category: Category,

    // Fetch lifecycle
    pub status: RequestStatus,
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,
    pub last_time_ms: Option<u64>,

    // Success view
    pub selected_project: usize,

    // Popups
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            category: Category::default(),
            status: RequestStatus::Initial,
            next_request_id: 1,
            pending_request_id: None,
            last_time_ms: None,
            selected_project: 0,
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            category: self.category,
            status: self.status.clone(),
            selected_project: self.selected_project,
            last_time_ms: self.last_time_ms,
            show_help: self.show_help,
        }
    }
}
