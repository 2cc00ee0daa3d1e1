//! savelog - save-triggered changelog recorder
//!
//! Every time a document is saved, the user is asked what changed and the
//! answer is appended to `<document>_changelog.txt` next to it. A viewer
//! lets the user read and hand-edit that log.
//!
//! This library provides:
//! - [`changelog`]: Log path derivation, entry format and file access
//! - [`host`]: The seam to the application that owns the documents
//! - [`plugin`]: Lifecycle wiring, commit prompt, log viewer, command dispatch
//! - [`app`]: A terminal workbench host that watches document files
//! - [`ui`]: Terminal components and HTML rendering of dialogs

pub mod app;
pub mod changelog;
pub mod config;
pub mod host;
pub mod keys;
pub mod logging;
pub mod model;
pub mod plugin;
pub mod ui;

pub use config::Config;
