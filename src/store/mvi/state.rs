//! Snapshot trait.

/// Application state as handed to readers.
///
/// Readers always get an owned copy, so a snapshot never changes under
/// them; equality lets a caller tell whether an action had any effect.
pub trait StateSnapshot: Clone + PartialEq + Default + Send + Sync + 'static {}
