//! One-time plugin initialization

use std::sync::atomic::{AtomicBool, Ordering};

/// Process-wide guard for plugin installation
pub static PLUGIN_GUARD: InitGuard = InitGuard::new();

/// Initialization state of a guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitState {
    Uninitialized,
    Initialized,
}

/// Moves from `Uninitialized` to `Initialized` exactly once
#[derive(Debug)]
pub struct InitGuard {
    initialized: AtomicBool,
}

impl Default for InitGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl InitGuard {
    pub const fn new() -> Self {
        Self {
            initialized: AtomicBool::new(false),
        }
    }

    /// Claim initialization; returns `false` if it already happened
    pub fn try_initialize(&self) -> bool {
        self.initialized
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn state(&self) -> InitState {
        if self.initialized.load(Ordering::Acquire) {
            InitState::Initialized
        } else {
            InitState::Uninitialized
        }
    }
}
