#![forbid(unsafe_code)]

//! Object-graph visualizer core.
//!
//! A debugger's object-graph node is displayed as a flat list of rows
//! projected from a content tree: expanding a row splices its subtree into
//! the list in place, collapsing removes exactly the rows the subtree
//! occupied. [`GraphNodeView`] coordinates the tree, the flat projection,
//! display metrics, and the outward event surfaces.
//!
//! All types are bound to the owning UI thread; see the crate-level notes in
//! `maquette-core`.

pub mod content;
pub mod edge;
pub mod error;
pub mod flatten;
pub mod metrics;
pub mod view;

pub use content::{ContentNode, ContentTree, NodeId, RowPayload};
#[cfg(feature = "state-persistence")]
pub use content::ExpansionSnapshot;
pub use edge::{EdgeId, EdgeTable, GraphEdge};
pub use error::VisualizerError;
pub use flatten::{FlatView, ToggleOutcome, flatten_expanded, subtree_size};
pub use metrics::{DisplayMetrics, MetricsConfig};
pub use view::{GraphNodeView, RowEvent};
