//! Reusable UI components
//!
//! Common building blocks for the workbench screen.

pub mod dialog;
pub mod empty_state;
pub mod message;

pub use dialog::{Dialog, DialogKind};
pub use empty_state::*;
pub use message::*;
