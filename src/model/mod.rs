//! Domain model types (pure).
//!
//! The frozen line store, the error taxonomy, and the key actions the
//! interaction loop understands.

pub mod error;
pub mod key_action;
pub mod line_store;

// Re-export for convenience
pub use error::{AppError, InputError};
pub use key_action::KeyAction;
pub use line_store::{IngestOptions, Line, LineStore};
