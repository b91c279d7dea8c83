//! Liveness flag shared between a session and whoever can tear it down.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cloneable handle: every clone sees the same flag.
///
/// Async continuations check [`Liveness::is_live`] before applying a result;
/// once torn down, late results are dropped.
#[derive(Debug, Clone)]
pub struct Liveness {
    live: Arc<AtomicBool>,
}

impl Liveness {
    pub fn new() -> Self {
        Self {
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    /// Mark the owner as gone. Irreversible.
    pub fn tear_down(&self) {
        self.live.store(false, Ordering::Release);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let liveness = Liveness::new();
        let handle = liveness.clone();
        assert!(liveness.is_live());

        handle.tear_down();
        assert!(!liveness.is_live());
    }
}
