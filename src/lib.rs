//! # Projects Showcase
//!
//! A terminal portfolio browser: fetches projects from the projects API,
//! filtered by category, and shows them as a list of cards.
//!
//! ## Views
//! - Loading spinner while a fetch is in flight
//! - Project cards on success
//! - Failure view with retry
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState, RequestStatus};
pub use config::Config;
pub use error::FetchError;
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{Category, Project};
pub use network::NetworkActor;
