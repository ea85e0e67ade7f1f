//! Bounded undo/redo history over whole-state snapshots.

/// Maximum number of undo entries kept by default.
///
/// Raster snapshots are heavy compared to vector documents, so the cap
/// is deliberately small.
pub const DEFAULT_UNDO_CAP: usize = 20;

/// A bounded stack of prior-state snapshots.
///
/// Entries are snapshots taken *before* a mutation: the owning surface
/// pushes the pre-change state when a change commits, and popping
/// restores it. The stack never holds more than `cap` entries; the
/// oldest entry is discarded first.
#[derive(Debug, Clone)]
pub struct History<T> {
    undo: Vec<T>,
    redo: Vec<T>,
    cap: usize,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new(DEFAULT_UNDO_CAP)
    }
}

impl<T> History<T> {
    /// Create a history bounded to `cap` entries (minimum 1).
    pub fn new(cap: usize) -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            cap: cap.max(1),
        }
    }

    /// Record a pre-change snapshot.
    ///
    /// Evicts the oldest entry beyond the cap and clears the redo stack,
    /// since the timeline has diverged.
    pub fn push(&mut self, snapshot: T) {
        self.undo.push(snapshot);
        self.redo.clear();
        if self.undo.len() > self.cap {
            self.undo.remove(0);
        }
    }

    /// Pop the most recent snapshot, filing `current` away for redo.
    ///
    /// Returns `None` (and leaves `current` untouched conceptually) when
    /// there is nothing to undo.
    pub fn undo(&mut self, current: T) -> Option<T> {
        let snapshot = self.undo.pop()?;
        self.redo.push(current);
        Some(snapshot)
    }

    /// Reverse the most recent undo.
    pub fn redo(&mut self, current: T) -> Option<T> {
        let snapshot = self.redo.pop()?;
        self.undo.push(current);
        Some(snapshot)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of undo entries currently held.
    pub fn len(&self) -> usize {
        self.undo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo.is_empty()
    }

    /// The configured cap.
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
