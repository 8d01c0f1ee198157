//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds what the song panel
//! shows plus transient status messages.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
