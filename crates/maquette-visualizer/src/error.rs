//! Visualizer error model.
//!
//! Both variants are internal-consistency violations: a gesture arrived from
//! a row whose bound data does not match what the gesture requires. They are
//! fatal by contract and must never be silently swallowed.

use std::fmt;

/// Errors raised by the visualizer's gesture paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisualizerError {
    /// A toggle gesture targeted a node that is not present in the flat view.
    ToggleTargetMissing {
        /// Label of the node the gesture was bound to.
        label: String,
    },
    /// A property-row toggle arrived from a row that is not a property row.
    NotAPropertyRow {
        /// Label of the offending row.
        label: String,
    },
}

impl VisualizerError {
    /// Whether this error is an internal-consistency (contract) violation.
    ///
    /// All current variants are; the method exists so callers can route
    /// contract violations to an unrecoverable path without matching on
    /// every variant.
    #[must_use]
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::ToggleTargetMissing { .. } | Self::NotAPropertyRow { .. }
        )
    }
}

impl fmt::Display for VisualizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToggleTargetMissing { label } => {
                write!(f, "toggle target '{label}' is not in the flat view")
            }
            Self::NotAPropertyRow { label } => {
                write!(
                    f,
                    "property toggle arrived from row '{label}', which is not a property row"
                )
            }
        }
    }
}

impl std::error::Error for VisualizerError {}
