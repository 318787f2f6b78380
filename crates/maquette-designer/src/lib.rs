#![forbid(unsafe_code)]

//! WYSIWYG designer core.
//!
//! Four margin handles adorn the edges of an element positioned inside a
//! grid-like container. A gesture on a handle (or on the stub standing in
//! for a hidden handle) re-resolves the element's margin, explicit size,
//! and alignment so the dragged edge follows the container's grid lines.
//! Handle visibility encodes the per-axis anchoring state: a visible handle
//! marks a margin the user may still drag, a hidden one an edge that has
//! been pinned.
//!
//! Handles are only created when the prerequisites hold (the parent is
//! grid-like and the element carries no rotation/skew); the gesture path
//! assumes they do and never re-validates.

pub mod element;
pub mod extension;
pub mod grid;
pub mod handle;
pub mod resolver;

pub use element::{DesignElement, ElementStore, GridPlacement};
pub use extension::{GestureSource, MarginHandleSet};
pub use grid::{GridDefinition, GridProvider, line_offset};
pub use handle::{HandleMask, HandleOrientation, MarginHandle};
pub use resolver::{AxisAlignment, AxisInput, AxisResolution, EdgeSide, resolve_axis};
