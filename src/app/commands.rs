//! Command handlers - business logic for processing UI events

use crate::app::state::{AppState, RequestStatus};
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::Category;

impl AppState {
    // ========================
    // Fetch lifecycle
    // ========================

    /// Initial fetch for the default category
    pub fn on_mount(&mut self) -> NetworkCommand {
        self.fetch_projects()
    }

    /// Enter Loading and build the fetch for the current category.
    ///
    /// The returned command carries its own id; only the response with the
    /// latest id is applied.
    pub fn fetch_projects(&mut self) -> NetworkCommand {
        let id = self.next_id();
        self.pending_request_id = Some(id);
        self.status = RequestStatus::Loading;
        tracing::info!(id, category = self.category.id(), "Fetching projects");
        NetworkCommand::FetchProjects {
            id,
            category: self.category,
        }
    }

    /// Switch filter and refetch; `None` when the category is already selected
    pub fn change_category(&mut self, category: Category) -> Option<NetworkCommand> {
        if category == self.category {
            return None;
        }
        self.category = category;
        Some(self.fetch_projects())
    }

    pub fn next_category(&mut self) -> Option<NetworkCommand> {
        self.change_category(self.category.next())
    }

    pub fn prev_category(&mut self) -> Option<NetworkCommand> {
        self.change_category(self.category.prev())
    }

    /// Refetch the current category; only available from the failure view
    pub fn retry(&mut self) -> Option<NetworkCommand> {
        match self.status {
            RequestStatus::Failure(_) => Some(self.fetch_projects()),
            _ => None,
        }
    }

    // ========================
    // Success view
    // ========================

    pub fn next_project(&mut self) {
        let len = self.status.projects().len();
        if len > 0 {
            self.selected_project = (self.selected_project + 1) % len;
        }
    }

    pub fn prev_project(&mut self) {
        let len = self.status.projects().len();
        if len > 0 {
            self.selected_project = self.selected_project.checked_sub(1).unwrap_or(len - 1);
        }
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Network responses
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        let response_id = response.id();
        if self.pending_request_id != Some(response_id) {
            tracing::debug!(
                id = response_id,
                pending = ?self.pending_request_id,
                category = response.category().id(),
                "Discarding stale projects response"
            );
            return;
        }

        self.pending_request_id = None;
        self.last_time_ms = Some(response.time_ms());

        match response {
            NetworkResponse::Projects { id, projects, .. } => {
                tracing::info!(id, count = projects.len(), "Projects loaded");
                self.selected_project = 0;
                self.status = RequestStatus::Success(projects);
            }
            NetworkResponse::Failed { id, error, .. } => {
                tracing::warn!(id, %error, "Projects fetch failed");
                self.status = RequestStatus::Failure(error);
            }
        }
    }
}
