//! Application constants
//!
//! Centralized location for endpoints, asset URLs and fixed view texts.

/// Projects endpoint, queried with `?category=<id>`
pub const PROJECTS_API_URL: &str = "https://apis.ccbp.in/ps/projects";

/// Website logo shown in the header
pub const LOGO_IMAGE_URL: &str =
    "https://assets.ccbp.in/frontend/react-js/projects-showcase/website-logo-img.png";

/// Illustration shown in the failure view
pub const FAILURE_IMAGE_URL: &str =
    "https://assets.ccbp.in/frontend/react-js/projects-showcase/failure-img.png";

pub const LOGO_ALT: &str = "website logo";
pub const FAILURE_ALT: &str = "failure view";
pub const FAILURE_TITLE: &str = "Oops! Something Went Wrong";
pub const FAILURE_DESCRIPTION: &str = "We cannot seem to find the page you are looking for.";
pub const RETRY_LABEL: &str = "Retry";

/// Request timeout in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Log file written next to the working directory (stdout belongs to the TUI)
pub const LOG_FILE_NAME: &str = "projects-showcase.log";

/// Application name
pub const APP_NAME: &str = "Projects Showcase";
