//! Content tree displayed by a graph node view.
//!
//! The tree is supplied by the debugger's content model; this crate only
//! reads the structure and flips expansion flags, it never invents nodes.
//! Nodes are interned into an arena so the flat projection can refer to them
//! by stable id.

use crate::edge::EdgeId;
use std::collections::BTreeSet;

/// Identifies a node within one [`ContentTree`].
///
/// Ids are only meaningful for the tree that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

/// What a row represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowPayload {
    /// A nested object row; expanding it materializes its children.
    Nested,
    /// A leaf property row with its own single-row expansion state.
    Property {
        /// Whether the property's value is currently expanded in place.
        expanded: bool,
        /// Edge to highlight while the row is hovered.
        edge: Option<EdgeId>,
    },
}

/// Builder for one node of the content tree.
///
/// # Example
///
/// ```
/// use maquette_visualizer::content::{ContentNode, ContentTree};
///
/// let tree = ContentTree::from_root(
///     ContentNode::new("this").with_expanded(true)
///         .child(ContentNode::property("Count"))
///         .child(ContentNode::new("Items")),
/// );
/// assert_eq!(tree.name(tree.root()), "this");
/// ```
#[derive(Debug, Clone)]
pub struct ContentNode {
    name: String,
    expanded: bool,
    payload: RowPayload,
    children: Vec<ContentNode>,
}

impl ContentNode {
    /// Create a nested node. Nodes start collapsed.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expanded: false,
            payload: RowPayload::Nested,
            children: Vec::new(),
        }
    }

    /// Create a leaf property row.
    #[must_use]
    pub fn property(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expanded: false,
            payload: RowPayload::Property {
                expanded: false,
                edge: None,
            },
            children: Vec::new(),
        }
    }

    /// Set the initial expansion state.
    #[must_use]
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Associate a graph edge with this property row.
    ///
    /// Has no effect on nested rows.
    #[must_use]
    pub fn with_edge(mut self, id: EdgeId) -> Self {
        if let RowPayload::Property { edge, .. } = &mut self.payload {
            *edge = Some(id);
        }
        self
    }

    /// Add a child node.
    #[must_use]
    pub fn child(mut self, node: ContentNode) -> Self {
        self.children.push(node);
        self
    }

    /// Set children from a vec.
    #[must_use]
    pub fn with_children(mut self, nodes: Vec<ContentNode>) -> Self {
        self.children = nodes;
        self
    }
}

#[derive(Debug, Clone)]
struct Slot {
    name: String,
    expanded: bool,
    payload: RowPayload,
    children: Vec<NodeId>,
}

/// Arena-backed content tree.
#[derive(Debug, Clone)]
pub struct ContentTree {
    slots: Vec<Slot>,
    root: NodeId,
}

impl ContentTree {
    /// Intern a built tree into an arena.
    #[must_use]
    pub fn from_root(root: ContentNode) -> Self {
        let mut tree = Self {
            slots: Vec::new(),
            root: NodeId(0),
        };
        let root_id = tree.intern(root);
        tree.root = root_id;
        tree
    }

    fn intern(&mut self, node: ContentNode) -> NodeId {
        let id = NodeId(self.slots.len() as u32);
        self.slots.push(Slot {
            name: node.name,
            expanded: node.expanded,
            payload: node.payload,
            children: Vec::with_capacity(node.children.len()),
        });
        for child in node.children {
            let child_id = self.intern(child);
            self.slots[id.0 as usize].children.push(child_id);
        }
        id
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Total number of nodes in the tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.slots.len()
    }

    /// Display name of a node.
    #[must_use]
    pub fn name(&self, id: NodeId) -> &str {
        &self.slots[id.0 as usize].name
    }

    /// Ordered children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.slots[id.0 as usize].children
    }

    /// Whether a node's subtree is currently expanded.
    #[must_use]
    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.slots[id.0 as usize].expanded
    }

    /// Set a node's subtree expansion flag.
    pub fn set_expanded(&mut self, id: NodeId, expanded: bool) {
        self.slots[id.0 as usize].expanded = expanded;
    }

    /// The row payload of a node.
    #[must_use]
    pub fn payload(&self, id: NodeId) -> &RowPayload {
        &self.slots[id.0 as usize].payload
    }

    /// Whether the node is a leaf property row.
    #[must_use]
    pub fn is_property(&self, id: NodeId) -> bool {
        matches!(self.payload(id), RowPayload::Property { .. })
    }

    /// A property row's own expansion state, if the node is one.
    #[must_use]
    pub fn property_expanded(&self, id: NodeId) -> Option<bool> {
        match self.payload(id) {
            RowPayload::Property { expanded, .. } => Some(*expanded),
            RowPayload::Nested => None,
        }
    }

    /// Flip a property row's expansion state.
    ///
    /// Returns the new state, or `None` if the node is not a property row.
    pub fn toggle_property(&mut self, id: NodeId) -> Option<bool> {
        match &mut self.slots[id.0 as usize].payload {
            RowPayload::Property { expanded, .. } => {
                *expanded = !*expanded;
                Some(*expanded)
            }
            RowPayload::Nested => None,
        }
    }

    /// The edge associated with a property row, if any.
    #[must_use]
    pub fn edge(&self, id: NodeId) -> Option<EdgeId> {
        match self.payload(id) {
            RowPayload::Property { edge, .. } => *edge,
            RowPayload::Nested => None,
        }
    }

    /// Collect the name paths of all expanded nodes with children.
    ///
    /// Paths are `/`-joined names from the root; used to persist expansion
    /// state across display sessions.
    #[must_use]
    pub fn collect_expanded(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        self.collect_expanded_from(self.root, "", &mut out);
        out
    }

    fn collect_expanded_from(&self, id: NodeId, prefix: &str, out: &mut BTreeSet<String>) {
        let path = if prefix.is_empty() {
            self.name(id).to_owned()
        } else {
            format!("{}/{}", prefix, self.name(id))
        };

        if self.is_expanded(id) && !self.children(id).is_empty() {
            out.insert(path.clone());
        }

        for &child in self.children(id) {
            self.collect_expanded_from(child, &path, out);
        }
    }

    /// Apply expansion state from a set of name paths.
    ///
    /// Every node with children becomes expanded exactly when its path is in
    /// the set. Callers must rebuild any flat projection afterwards.
    pub fn apply_expanded(&mut self, expanded_paths: &BTreeSet<String>) {
        self.apply_expanded_from(self.root, "", expanded_paths);
    }

    fn apply_expanded_from(&mut self, id: NodeId, prefix: &str, expanded_paths: &BTreeSet<String>) {
        let path = if prefix.is_empty() {
            self.name(id).to_owned()
        } else {
            format!("{}/{}", prefix, self.name(id))
        };

        if !self.children(id).is_empty() {
            self.set_expanded(id, expanded_paths.contains(&path));
        }

        for child in self.children(id).to_vec() {
            self.apply_expanded_from(child, &path, expanded_paths);
        }
    }
}

/// Persisted expansion state of one content tree.
#[cfg(feature = "state-persistence")]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExpansionSnapshot {
    /// `/`-joined name paths of expanded nodes.
    pub expanded: BTreeSet<String>,
}

#[cfg(feature = "state-persistence")]
impl ExpansionSnapshot {
    /// Capture the tree's current expansion state.
    #[must_use]
    pub fn capture(tree: &ContentTree) -> Self {
        Self {
            expanded: tree.collect_expanded(),
        }
    }

    /// Apply this snapshot to a tree.
    pub fn apply(&self, tree: &mut ContentTree) {
        tree.apply_expanded(&self.expanded);
    }
}
