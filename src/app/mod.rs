//! Application module
//!
//! The terminal workbench, split into:
//! - `host`: the [`Host`](crate::host::Host) implementation
//! - `state`: App struct and event plumbing
//! - `input`: Key event handling
//! - `render`: UI rendering

mod host;
mod input;
mod render;
mod state;

pub use host::TerminalHost;
pub use state::{App, InputMode};
