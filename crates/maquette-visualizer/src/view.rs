//! Graph-node view coordinator.
//!
//! Owns the content tree, its flat projection, the edge table, and the
//! outward event surfaces. Every mutation runs synchronously inside the
//! gesture handler that caused it and leaves the projection invariant
//! intact.

use crate::content::{ContentTree, NodeId};
use crate::edge::{EDGE_STROKE_HIGHLIGHTED, EDGE_STROKE_NORMAL, EdgeTable};
use crate::error::VisualizerError;
use crate::flatten::{FlatView, ToggleOutcome};
use crate::metrics::{DisplayMetrics, MetricsConfig};
use maquette_core::observer::{ObserverList, Subscription};
#[cfg(feature = "tracing")]
use web_time::Instant;

/// Event payload for row expand/collapse notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowEvent {
    /// The row that toggled.
    pub node: NodeId,
    /// Display name of the row at the time of the toggle.
    pub label: String,
}

/// The visualizer control's core: tree, projection, metrics, events.
#[derive(Debug)]
pub struct GraphNodeView {
    tree: ContentTree,
    flat: FlatView,
    edges: EdgeTable,
    config: MetricsConfig,
    metrics: DisplayMetrics,
    node_expanded: ObserverList<RowEvent>,
    node_collapsed: ObserverList<RowEvent>,
    property_expanded: ObserverList<RowEvent>,
    property_collapsed: ObserverList<RowEvent>,
}

impl GraphNodeView {
    /// Create a view over the given tree and edge table.
    #[must_use]
    pub fn new(tree: ContentTree, edges: EdgeTable) -> Self {
        Self::with_config(tree, edges, MetricsConfig::default())
    }

    /// Create a view with explicit metric inputs.
    #[must_use]
    pub fn with_config(tree: ContentTree, edges: EdgeTable, config: MetricsConfig) -> Self {
        #[cfg(feature = "tracing")]
        let start = Instant::now();

        let flat = FlatView::initialize(&tree);
        let metrics = Self::measure(&tree, &flat, &config);

        #[cfg(feature = "tracing")]
        {
            let duration_us = start.elapsed().as_micros() as u64;
            tracing::debug!(
                message = "visualizer.initialize",
                node_count = tree.node_count(),
                rows = flat.len(),
                duration_us
            );
        }

        Self {
            tree,
            flat,
            edges,
            config,
            metrics,
            node_expanded: ObserverList::new(),
            node_collapsed: ObserverList::new(),
            property_expanded: ObserverList::new(),
            property_collapsed: ObserverList::new(),
        }
    }

    /// The displayed tree.
    #[must_use]
    pub fn tree(&self) -> &ContentTree {
        &self.tree
    }

    /// The current flat projection.
    #[must_use]
    pub fn rows(&self) -> &[NodeId] {
        self.flat.items()
    }

    /// The edge table.
    #[must_use]
    pub fn edges(&self) -> &EdgeTable {
        &self.edges
    }

    /// Metrics for the current projection.
    #[must_use]
    pub fn metrics(&self) -> &DisplayMetrics {
        &self.metrics
    }

    /// Register for nested-row expansion notifications.
    pub fn on_node_expanded(&mut self, f: impl FnMut(&RowEvent) + 'static) -> Subscription {
        self.node_expanded.subscribe(f)
    }

    /// Register for nested-row collapse notifications.
    pub fn on_node_collapsed(&mut self, f: impl FnMut(&RowEvent) + 'static) -> Subscription {
        self.node_collapsed.subscribe(f)
    }

    /// Register for property-row expansion notifications.
    pub fn on_property_expanded(&mut self, f: impl FnMut(&RowEvent) + 'static) -> Subscription {
        self.property_expanded.subscribe(f)
    }

    /// Register for property-row collapse notifications.
    pub fn on_property_collapsed(&mut self, f: impl FnMut(&RowEvent) + 'static) -> Subscription {
        self.property_collapsed.subscribe(f)
    }

    /// Toggle a nested row's subtree in the projection.
    ///
    /// Emits node-expanded or node-collapsed and recomputes display metrics.
    pub fn toggle_nested(&mut self, node: NodeId) -> Result<ToggleOutcome, VisualizerError> {
        let outcome = self.flat.toggle(&mut self.tree, node)?;
        let event = RowEvent {
            node,
            label: self.tree.name(node).to_owned(),
        };

        #[cfg(feature = "tracing")]
        {
            let action = match outcome {
                ToggleOutcome::Expanded { .. } => "expand",
                ToggleOutcome::Collapsed { .. } => "collapse",
            };
            tracing::debug!(
                message = "visualizer.toggle",
                action,
                label = event.label.as_str(),
                rows = self.flat.len()
            );
        }

        match outcome {
            ToggleOutcome::Expanded { .. } => self.node_expanded.notify(&event),
            ToggleOutcome::Collapsed { .. } => self.node_collapsed.notify(&event),
        }

        self.recalculate_metrics();
        Ok(outcome)
    }

    /// Toggle a property row's single-row expansion state.
    ///
    /// The projection does not change; only the row's own flag flips. A
    /// gesture bound to a non-property row is a contract violation.
    pub fn toggle_property(&mut self, node: NodeId) -> Result<bool, VisualizerError> {
        let Some(expanded) = self.tree.toggle_property(node) else {
            return Err(VisualizerError::NotAPropertyRow {
                label: self.tree.name(node).to_owned(),
            });
        };

        let event = RowEvent {
            node,
            label: self.tree.name(node).to_owned(),
        };
        if expanded {
            self.property_expanded.notify(&event);
        } else {
            self.property_collapsed.notify(&event);
        }
        Ok(expanded)
    }

    /// Hover entered a row: highlight its edge, if it has one.
    pub fn hover_enter(&mut self, node: NodeId) {
        if let Some(edge) = self.tree.edge(node) {
            self.edges.set_stroke_thickness(edge, EDGE_STROKE_HIGHLIGHTED);
        }
    }

    /// Hover left a row: restore its edge's resting stroke.
    pub fn hover_leave(&mut self, node: NodeId) {
        if let Some(edge) = self.tree.edge(node) {
            self.edges.set_stroke_thickness(edge, EDGE_STROKE_NORMAL);
        }
    }

    /// Recompute display metrics from the current projection.
    pub fn recalculate_metrics(&mut self) {
        self.metrics = Self::measure(&self.tree, &self.flat, &self.config);
    }

    fn measure(tree: &ContentTree, flat: &FlatView, config: &MetricsConfig) -> DisplayMetrics {
        DisplayMetrics::measure(flat.items().iter().map(|&id| tree.name(id)), config)
    }
}
