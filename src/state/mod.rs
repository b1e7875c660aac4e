//! UI state machine (pure).
//!
//! All state transitions are plain functions and methods testable without a
//! terminal. Side effects come back as [`Effect`] values for the shell.

pub mod app_state;
pub mod detail;
pub mod filter_modal;
pub mod grid;
pub mod search_input;
pub mod session;
pub mod toast;

// Re-export for convenience
pub use app_state::{AppState, Effect, Focus};
pub use detail::{DetailState, DetailStatus};
pub use filter_modal::{FilterCommand, FilterModal};
pub use grid::{GridGeometry, GridState};
pub use search_input::SearchInput;
pub use session::{FetchRequest, ResponseDisposition, ScrollMetrics, Session};
pub use toast::{Toast, Toasts};
