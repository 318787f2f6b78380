#![forbid(unsafe_code)]

//! Maquette unified error model.
//!
//! # Design Principles
//!
//! 1. **Result everywhere** — no panics in the gesture paths.
//! 2. **Domain-specific errors** — each subsystem raises its own typed
//!    error; this module wraps them so an embedder can match on what matters
//!    and let the rest propagate.
//! 3. **Explicit recovery** — every variant maps to a [`RecoveryAction`]:
//!    internal-consistency violations shut the session down, refused
//!    operations are reported and dropped.

use std::fmt;

pub use maquette_visualizer::error::VisualizerError;
pub use maquette_workbench::error::WorkbenchError;

/// Top-level error type for Maquette embedders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Visualizer gesture-path failure.
    Visualizer(VisualizerError),
    /// Workbench shell failure.
    Workbench(WorkbenchError),
}

/// Standard result type for Maquette APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// What the embedder should do when an error surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryAction {
    /// Internal consistency is broken; tear the session down.
    Shutdown,
    /// Refuse the operation, report it, and continue.
    RejectOperation,
}

impl Error {
    /// Determine the recovery action for this error.
    #[must_use]
    pub fn recovery(&self) -> RecoveryAction {
        match self {
            // A gesture from a row whose bound data is the wrong kind means
            // the view and its projection disagree. Nothing downstream can
            // be trusted.
            Self::Visualizer(err) if err.is_contract_violation() => RecoveryAction::Shutdown,
            Self::Visualizer(_) => RecoveryAction::RejectOperation,

            // Opening a view before any layout is attached is a programming
            // error in the embedder's startup sequence.
            Self::Workbench(WorkbenchError::NoLayoutAttached) => RecoveryAction::Shutdown,
            // A stale view id just refuses the close.
            Self::Workbench(WorkbenchError::UnknownView { .. }) => RecoveryAction::RejectOperation,
        }
    }

    /// Error type label for tracing and metric counters.
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Visualizer(_) => "visualizer",
            Self::Workbench(_) => "workbench",
        }
    }

    /// Whether the error is recoverable (does not require shutdown).
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        self.recovery() != RecoveryAction::Shutdown
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Visualizer(err) => write!(f, "{err}"),
            Self::Workbench(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Visualizer(err) => Some(err),
            Self::Workbench(err) => Some(err),
        }
    }
}

impl From<VisualizerError> for Error {
    fn from(err: VisualizerError) -> Self {
        Self::Visualizer(err)
    }
}

impl From<WorkbenchError> for Error {
    fn from(err: WorkbenchError) -> Self {
        Self::Workbench(err)
    }
}

impl fmt::Display for RecoveryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shutdown => write!(f, "shutdown"),
            Self::RejectOperation => write!(f, "reject_operation"),
        }
    }
}
