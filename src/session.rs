//! Per-conversion render session.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Hands out identifiers for hoisted SVG definitions (gradients, markers,
/// clip paths). Identifiers are unique within one session and never reused.
#[derive(Debug, Default)]
pub struct RenderSession {
    counter: AtomicUsize,
}

impl RenderSession {
    /// Create a session whose counter starts at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Next raw counter value.
    pub fn next_id(&self) -> usize {
        self.counter.fetch_add(1, Ordering::Relaxed)
    }

    /// Next identifier with the given prefix, e.g. `grad3`.
    pub fn unique(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.next_id())
    }
}
