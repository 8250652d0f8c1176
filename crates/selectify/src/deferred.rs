//! Actions postponed until the host's next layout pass.

/// Work queued during event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Return focus to the input after a pointer commit
    RefocusInput,
    /// Highlight the given index once the panel is populated
    InitialHighlight(usize),
}

/// FIFO of deferred actions.
#[derive(Debug, Clone, Default)]
pub struct DeferredQueue {
    pending: Vec<DeferredAction>,
}

impl DeferredQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an action.
    pub fn push(&mut self, action: DeferredAction) {
        self.pending.push(action);
    }

    /// Whether nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of queued actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Remove and return all queued actions in order.
    pub fn drain(&mut self) -> Vec<DeferredAction> {
        std::mem::take(&mut self.pending)
    }
}
