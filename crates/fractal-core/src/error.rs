use thiserror::Error;

/// Activation errors. Both leave the system exactly as it was before the
/// failed call: deactivated, with nothing allocated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FractalError {
    /// A level's node array, matrix array, or instance buffer could not be
    /// created. Allocation is all-or-nothing across every level.
    #[error("failed to allocate level {level} storage ({count} nodes)")]
    Allocation { level: usize, count: usize },

    /// Requested tree depth outside the supported 1..=8 range.
    #[error("depth {depth} outside supported range 1..=8")]
    InvalidDepth { depth: usize },
}
