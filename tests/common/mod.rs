//! Common test utilities for integration and scenario tests.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod workspace;

pub use workspace::{TestWorkspace, UNSET_IDENTITY_VAR, block_count, ctrl_s, key, type_text};
