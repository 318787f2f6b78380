#![forbid(unsafe_code)]

//! Workbench shell.
//!
//! The shell coordinates pad and view-content collections, tracks which
//! window/view/content is active, and delegates actual docking to a
//! pluggable [`WorkbenchLayout`] collaborator. Window placement round-trips
//! through a serde memento.
//!
//! Like the rest of Maquette, the shell is bound to the owning UI thread;
//! the embedder forwards docking-framework activity changes into
//! [`Workbench::layout_activity_changed`] on that thread.

pub mod error;
pub mod memento;
pub mod pads;
pub mod shell;

pub use error::WorkbenchError;
pub use memento::{WindowMemento, WindowPlacement, WindowState};
pub use pads::{PadDescriptor, PadId};
pub use shell::{ActiveContent, ViewEvent, ViewId, ViewRecord, WindowId, Workbench, WorkbenchLayout};
