//! Render state - data structure sent from App layer to UI for rendering

use crate::app::state::RequestStatus;
use crate::models::Category;

/// Complete state needed by the UI to render.
///
/// Built fresh after every transition and replaced as a whole on the UI side.
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    pub category: Category,
    pub status: RequestStatus,

    // Success view
    pub selected_project: usize,

    // Status bar
    pub last_time_ms: Option<u64>,

    // Popups
    pub show_help: bool,
}

impl RenderState {
    pub fn is_failure(&self) -> bool {
        matches!(self.status, RequestStatus::Failure(_))
    }
}
