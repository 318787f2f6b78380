//! Flat projection of a content tree.
//!
//! The flat view is the expand-aware pre-order traversal of the tree,
//! maintained incrementally: toggling a row splices its subtree in or out of
//! the list without rebuilding the projection.
//!
//! Invariant: after every operation, [`FlatView::items`] equals the pre-order
//! traversal that descends into a node only when it is expanded, and a node
//! together with its materialized descendants occupies a contiguous run.

use crate::content::{ContentTree, NodeId};
use crate::error::VisualizerError;

/// Append the expand-aware pre-order run of `node` to `out`.
pub fn flatten_expanded(tree: &ContentTree, node: NodeId, out: &mut Vec<NodeId>) {
    out.push(node);
    if tree.is_expanded(node) {
        for &child in tree.children(node) {
            flatten_expanded(tree, child, out);
        }
    }
}

/// Number of flat-view rows `node` and its materialized descendants occupy.
///
/// A leaf occupies one row. The node's own expansion flag is not consulted;
/// only the children's flags decide how deep the count recurses.
#[must_use]
pub fn subtree_size(tree: &ContentTree, node: NodeId) -> usize {
    let mut size = 1;
    for &child in tree.children(node) {
        size += if tree.is_expanded(child) {
            subtree_size(tree, child)
        } else {
            1
        };
    }
    size
}

/// Result of a [`FlatView::toggle`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The node transitioned collapsed→expanded.
    Expanded {
        /// Rows spliced in after the node.
        inserted: usize,
    },
    /// The node transitioned expanded→collapsed.
    Collapsed {
        /// Rows removed after the node.
        removed: usize,
    },
}

/// The flat row projection of one content tree.
#[derive(Debug, Clone, Default)]
pub struct FlatView {
    items: Vec<NodeId>,
}

impl FlatView {
    /// Build the initial projection of the tree under its current expansion
    /// state.
    #[must_use]
    pub fn initialize(tree: &ContentTree) -> Self {
        let mut items = Vec::new();
        flatten_expanded(tree, tree.root(), &mut items);
        Self { items }
    }

    /// The projected rows, in display order.
    #[must_use]
    pub fn items(&self) -> &[NodeId] {
        &self.items
    }

    /// Number of visible rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the projection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of a node in the projection.
    #[must_use]
    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.items.iter().position(|&item| item == node)
    }

    /// Flip a node's expansion state and splice the projection accordingly.
    ///
    /// Expanding inserts each direct child's visible run immediately after
    /// the node, recursively honoring every descendant's own expansion flag.
    /// Collapsing removes the `subtree_size(node) - 1` rows following the
    /// node. Toggling a leaf flips the flag and changes zero rows.
    ///
    /// A node that is not currently projected is a contract violation.
    pub fn toggle(
        &mut self,
        tree: &mut ContentTree,
        node: NodeId,
    ) -> Result<ToggleOutcome, VisualizerError> {
        let index = self
            .index_of(node)
            .ok_or_else(|| VisualizerError::ToggleTargetMissing {
                label: tree.name(node).to_owned(),
            })?;

        if tree.is_expanded(node) {
            let removed = subtree_size(tree, node) - 1;
            tree.set_expanded(node, false);
            self.items.drain(index + 1..index + 1 + removed);
            Ok(ToggleOutcome::Collapsed { removed })
        } else {
            tree.set_expanded(node, true);
            let mut run = Vec::new();
            for &child in tree.children(node) {
                flatten_expanded(tree, child, &mut run);
            }
            let inserted = run.len();
            self.items.splice(index + 1..index + 1, run);
            Ok(ToggleOutcome::Expanded { inserted })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentNode;

    fn names(tree: &ContentTree, view: &FlatView) -> Vec<String> {
        view.items()
            .iter()
            .map(|&id| tree.name(id).to_owned())
            .collect()
    }

    /// `A(expanded) -> [B(leaf), C(expanded) -> [D(leaf)]]`
    fn scenario_tree() -> ContentTree {
        ContentTree::from_root(
            ContentNode::new("A")
                .with_expanded(true)
                .child(ContentNode::new("B"))
                .child(
                    ContentNode::new("C")
                        .with_expanded(true)
                        .child(ContentNode::new("D")),
                ),
        )
    }

    #[test]
    fn initialize_is_expand_aware_preorder() {
        let tree = scenario_tree();
        let view = FlatView::initialize(&tree);
        assert_eq!(names(&tree, &view), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn initialize_respects_collapsed_root() {
        let tree = ContentTree::from_root(
            ContentNode::new("root").child(ContentNode::new("hidden")),
        );
        let view = FlatView::initialize(&tree);
        assert_eq!(names(&tree, &view), vec!["root"]);
    }

    #[test]
    fn collapse_removes_exactly_the_materialized_descendants() {
        let mut tree = scenario_tree();
        let mut view = FlatView::initialize(&tree);
        let root = tree.root();
        let c = tree.children(root)[1];

        let outcome = view.toggle(&mut tree, c).expect("C is projected");
        assert_eq!(outcome, ToggleOutcome::Collapsed { removed: 1 });
        assert_eq!(names(&tree, &view), vec!["A", "B", "C"]);

        let outcome = view.toggle(&mut tree, root).expect("A is projected");
        assert_eq!(outcome, ToggleOutcome::Collapsed { removed: 2 });
        assert_eq!(names(&tree, &view), vec!["A"]);
    }

    #[test]
    fn collapse_root_removes_nested_run_in_one_step() {
        let mut tree = scenario_tree();
        let mut view = FlatView::initialize(&tree);
        let root = tree.root();

        let outcome = view.toggle(&mut tree, root).expect("root is projected");
        assert_eq!(outcome, ToggleOutcome::Collapsed { removed: 3 });
        assert_eq!(names(&tree, &view), vec!["A"]);
    }

    #[test]
    fn expand_restores_nested_expansion_state() {
        let mut tree = scenario_tree();
        let mut view = FlatView::initialize(&tree);
        let root = tree.root();

        // Collapse everything, then re-expand the root: C kept its own
        // expanded flag, so D must come back with it.
        view.toggle(&mut tree, root).expect("collapse root");
        let outcome = view.toggle(&mut tree, root).expect("expand root");
        assert_eq!(outcome, ToggleOutcome::Expanded { inserted: 3 });
        assert_eq!(names(&tree, &view), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn toggle_twice_round_trips() {
        let mut tree = scenario_tree();
        let mut view = FlatView::initialize(&tree);
        let c = tree.children(tree.root())[1];

        let before = view.items().to_vec();
        view.toggle(&mut tree, c).expect("first toggle");
        view.toggle(&mut tree, c).expect("second toggle");
        assert_eq!(view.items(), &before[..]);
    }

    #[test]
    fn leaf_toggle_flips_state_and_changes_no_rows() {
        let mut tree = scenario_tree();
        let mut view = FlatView::initialize(&tree);
        let b = tree.children(tree.root())[0];

        assert!(!tree.is_expanded(b));
        let outcome = view.toggle(&mut tree, b).expect("B is projected");
        assert_eq!(outcome, ToggleOutcome::Expanded { inserted: 0 });
        assert!(tree.is_expanded(b));
        assert_eq!(view.len(), 4);
    }

    #[test]
    fn toggling_an_unprojected_node_is_a_contract_violation() {
        let mut tree = scenario_tree();
        let mut view = FlatView::initialize(&tree);
        let root = tree.root();
        let c = tree.children(root)[1];
        let d = tree.children(c)[0];

        view.toggle(&mut tree, c).expect("collapse C");
        let err = view.toggle(&mut tree, d).expect_err("D is no longer projected");
        assert_eq!(err, VisualizerError::ToggleTargetMissing { label: "D".into() });
        assert!(err.is_contract_violation());
    }

    #[test]
    fn subtree_size_laws() {
        let tree = scenario_tree();
        let root = tree.root();
        let b = tree.children(root)[0];
        let c = tree.children(root)[1];
        let d = tree.children(c)[0];

        assert_eq!(subtree_size(&tree, b), 1);
        assert_eq!(subtree_size(&tree, d), 1);
        assert_eq!(subtree_size(&tree, c), 2);
        assert_eq!(subtree_size(&tree, root), 4);
    }

    #[test]
    fn subtree_size_counts_unexpanded_children_as_one() {
        let tree = ContentTree::from_root(
            ContentNode::new("root")
                .with_expanded(true)
                .child(
                    ContentNode::new("closed")
                        .child(ContentNode::new("x"))
                        .child(ContentNode::new("y")),
                )
                .child(ContentNode::new("leaf")),
        );
        // "closed" is collapsed: its grandchildren are not materialized.
        assert_eq!(subtree_size(&tree, tree.root()), 3);
    }

    #[test]
    fn flatten_length_matches_reachable_count() {
        let tree = ContentTree::from_root(
            ContentNode::new("r")
                .with_expanded(true)
                .child(
                    ContentNode::new("a")
                        .with_expanded(true)
                        .child(ContentNode::new("a1"))
                        .child(ContentNode::new("a2").child(ContentNode::new("hidden"))),
                )
                .child(ContentNode::new("b").child(ContentNode::new("also hidden"))),
        );
        let view = FlatView::initialize(&tree);
        // r, a, a1, a2, b; the two "hidden" nodes sit under collapsed parents.
        assert_eq!(view.len(), 5);
        assert_eq!(view.len(), subtree_size(&tree, tree.root()));
    }
}
