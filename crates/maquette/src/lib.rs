#![forbid(unsafe_code)]

//! Maquette public facade crate.
//!
//! Re-exports the common surface of the member crates and offers a
//! lightweight prelude. The unified error model lives in [`error`].

pub mod error;

// --- Core re-exports -------------------------------------------------------

pub use maquette_core::geometry::{Axis, HAlign, Point, Rect, Size, Thickness, VAlign};
pub use maquette_core::observer::{ObserverList, Subscription};

// --- Visualizer re-exports -------------------------------------------------

pub use maquette_visualizer::content::{ContentNode, ContentTree, NodeId, RowPayload};
pub use maquette_visualizer::edge::{EdgeId, EdgeTable, GraphEdge};
pub use maquette_visualizer::flatten::{FlatView, ToggleOutcome};
pub use maquette_visualizer::metrics::{DisplayMetrics, MetricsConfig};
pub use maquette_visualizer::view::{GraphNodeView, RowEvent};

// --- Designer re-exports ---------------------------------------------------

pub use maquette_designer::element::{DesignElement, ElementStore, GridPlacement};
pub use maquette_designer::extension::{GestureSource, MarginHandleSet};
pub use maquette_designer::grid::{GridDefinition, GridProvider};
pub use maquette_designer::handle::{HandleMask, HandleOrientation, MarginHandle};

// --- Workbench re-exports --------------------------------------------------

pub use maquette_workbench::memento::{WindowMemento, WindowPlacement, WindowState};
pub use maquette_workbench::pads::{PadDescriptor, PadId};
pub use maquette_workbench::shell::{
    ActiveContent, ViewEvent, ViewId, ViewRecord, WindowId, Workbench, WorkbenchLayout,
};

// --- Errors ----------------------------------------------------------------

pub use error::{Error, RecoveryAction, Result};

// --- Module aliases --------------------------------------------------------

pub use maquette_core as core;
pub use maquette_designer as designer;
pub use maquette_visualizer as visualizer;
pub use maquette_workbench as workbench;

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ContentNode, ContentTree, DesignElement, ElementStore, Error, FlatView, GraphNodeView,
        GridDefinition, GridPlacement, GridProvider, HAlign, HandleOrientation, MarginHandleSet,
        Rect, Result, Thickness, VAlign, Workbench, WorkbenchLayout,
    };
}
