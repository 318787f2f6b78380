//! Workbench error model.

use crate::shell::ViewId;
use std::fmt;

/// Errors raised by shell operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkbenchError {
    /// A view operation requires a docking layout and none is attached.
    NoLayoutAttached,
    /// The view id does not name an open view.
    UnknownView {
        view: ViewId,
    },
}

impl fmt::Display for WorkbenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLayoutAttached => write!(f, "no workbench layout attached"),
            Self::UnknownView { view } => write!(f, "unknown view {}", view.raw()),
        }
    }
}

impl std::error::Error for WorkbenchError {}
