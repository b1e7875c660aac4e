//! Domain model types (pure).
//!
//! All types in this module are plain data without I/O.

pub mod catalog;
pub mod error;
pub mod hit;
pub mod key_action;
pub mod request;
pub mod result_set;

// Re-export for convenience
pub use catalog::{Category, FilterKey, FilterSet, UnknownCategory};
pub use error::{AppError, FetchError, PlatformError};
pub use hit::{Hit, Orientation};
pub use key_action::KeyAction;
pub use request::{ParamValue, RequestParams};
pub use result_set::{MergeMode, ResultSet};
