//! Petri-net graph storage.

use pdlnet_core::NodeId;

/// A place holding tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id: NodeId,
    pub name: Option<String>,
    /// Token count, intended >= 0; absent when a loaded document omits it.
    pub tokens: Option<i64>,
}

/// A transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub id: NodeId,
    /// Intended non-blank; absent when a loaded document omits it.
    pub name: Option<String>,
}

/// Polymorphic net node.
///
/// `Unknown` holds a node kind the loader did not recognize; the validator
/// records it as a violation.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Place(Place),
    Transition(Transition),
    Unknown { id: NodeId, kind: String },
}

impl Node {
    /// Id of this node.
    pub fn id(&self) -> NodeId {
        match self {
            Node::Place(p) => p.id,
            Node::Transition(t) => t.id,
            Node::Unknown { id, .. } => *id,
        }
    }

    /// Name of this node, if present.
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Place(p) => p.name.as_deref(),
            Node::Transition(t) => t.name.as_deref(),
            Node::Unknown { .. } => None,
        }
    }

    /// Returns true if this is a place.
    pub fn is_place(&self) -> bool {
        matches!(self, Node::Place(_))
    }

    /// Returns true if this is a transition.
    pub fn is_transition(&self) -> bool {
        matches!(self, Node::Transition(_))
    }

    /// Get as a place if this is one.
    pub fn as_place(&self) -> Option<&Place> {
        match self {
            Node::Place(p) => Some(p),
            _ => None,
        }
    }

    /// Get as a transition if this is one.
    pub fn as_transition(&self) -> Option<&Transition> {
        match self {
            Node::Transition(t) => Some(t),
            _ => None,
        }
    }
}

/// A weighted arc between two node references.
///
/// Endpoints may be absent or dangling; the validator only flags arcs whose
/// endpoints both resolve to the same node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arc {
    pub source: Option<NodeId>,
    pub target: Option<NodeId>,
    /// Intended >= 1; absent when a loaded document omits it.
    pub weight: Option<i64>,
}

/// A Petri net: a named, ordered sequence of nodes and arcs.
#[derive(Debug, Clone)]
pub struct PetriNet {
    name: Option<String>,
    nodes: Vec<Node>,
    arcs: Vec<Arc>,
    next_id: u64,
}

impl PetriNet {
    /// Create a new named net.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            nodes: Vec::new(),
            arcs: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a net without a name.
    pub fn unnamed() -> Self {
        Self {
            name: None,
            nodes: Vec::new(),
            arcs: Vec::new(),
            next_id: 1,
        }
    }

    /// Net name, if present.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Replace the net name.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Arcs in insertion order.
    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    // ==================== Construction ====================

    /// Add a place with the given initial token count, returning its id.
    pub fn add_place(&mut self, name: impl Into<String>, tokens: i64) -> NodeId {
        let id = NodeId::new(self.alloc_id());
        self.nodes.push(Node::Place(Place {
            id,
            name: Some(name.into()),
            tokens: Some(tokens),
        }));
        id
    }

    /// Add a transition, returning its id.
    pub fn add_transition(&mut self, name: impl Into<String>) -> NodeId {
        let id = NodeId::new(self.alloc_id());
        self.nodes.push(Node::Transition(Transition {
            id,
            name: Some(name.into()),
        }));
        id
    }

    /// Add an arc between two nodes.
    pub fn add_arc(&mut self, source: NodeId, target: NodeId, weight: i64) {
        self.arcs.push(Arc {
            source: Some(source),
            target: Some(target),
            weight: Some(weight),
        });
    }

    /// Append an already-built node (document loading path).
    ///
    /// Keeps the id allocator ahead of the loaded id.
    pub fn push_node(&mut self, node: Node) {
        let id = node.id().raw();
        if id >= self.next_id {
            self.next_id = id + 1;
        }
        self.nodes.push(node);
    }

    /// Append an already-built arc (document loading path).
    pub fn push_arc(&mut self, arc: Arc) {
        self.arcs.push(arc);
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // ==================== Lookup ====================

    /// Resolve a node reference.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    /// Places in insertion order.
    pub fn places(&self) -> impl Iterator<Item = &Place> {
        self.nodes.iter().filter_map(Node::as_place)
    }

    /// Transitions in insertion order.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition> {
        self.nodes.iter().filter_map(Node::as_transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_resolve_nodes() {
        // GIVEN
        let mut net = PetriNet::new("N");

        // WHEN
        let p = net.add_place("start", 1);
        let t = net.add_transition("go");

        // THEN
        assert_ne!(p, t);
        assert!(net.node(p).unwrap().is_place());
        assert!(net.node(t).unwrap().is_transition());
        assert_eq!(net.node(p).unwrap().name(), Some("start"));
        assert_eq!(net.places().next().unwrap().tokens, Some(1));
    }

    #[test]
    fn test_arcs_keep_insertion_order() {
        // GIVEN
        let mut net = PetriNet::new("N");
        let p = net.add_place("p", 0);
        let t = net.add_transition("t");

        // WHEN
        net.add_arc(p, t, 1);
        net.add_arc(t, p, 2);

        // THEN
        assert_eq!(net.arcs().len(), 2);
        assert_eq!(net.arcs()[0].source, Some(p));
        assert_eq!(net.arcs()[1].weight, Some(2));
    }

    #[test]
    fn test_push_node_reserves_loaded_ids() {
        // GIVEN
        let mut net = PetriNet::unnamed();
        net.push_node(Node::Unknown {
            id: NodeId::new(20),
            kind: "timer".into(),
        });

        // WHEN
        let p = net.add_place("p", 0);

        // THEN
        assert_eq!(p.raw(), 21);
    }

    #[test]
    fn test_dangling_node_reference_resolves_to_none() {
        // GIVEN
        let net = PetriNet::new("N");

        // WHEN/THEN
        assert!(net.node(NodeId::new(9)).is_none());
    }
}
