//! egui frontend for the orb viewer
//!
//! Window lifecycle, the per-frame loop, and the debug UI around the
//! renderer.

pub mod app;
pub mod panels;
pub mod state;

// Re-exports for convenience
pub use app::ViewerApp;
pub use state::{AppAction, AppState, SharedViewportState, ViewportState};
