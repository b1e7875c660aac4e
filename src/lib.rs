//! Pixels
//!
//! Terminal browser for searching, filtering, downloading and sharing
//! Pixabay stock images.
//!
//! Pure core / impure shell: `model`, `layout` and `state` are plain data
//! and transitions; `api`, `platform`, `worker` and `view` do the I/O.

pub mod api;
pub mod config;
pub mod layout;
pub mod logging;
pub mod model;
pub mod platform;
pub mod state;
pub mod view;
pub mod worker;
