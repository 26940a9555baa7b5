//! Petri-net constraint checking.

use std::collections::HashSet;

use pdlnet_core::{PetriElementKind, ValidationResult};
use pdlnet_petri::{Arc, Node, PetriNet, Place, Transition};

use crate::display_name;

/// Petri-net validator.
///
/// Walks a net and records one violation per failed constraint: name
/// uniqueness per node kind, token and weight bounds, and bipartiteness of
/// every arc.
#[derive(Debug, Clone, Default)]
pub struct PetriNetValidator;

impl PetriNetValidator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self
    }

    /// Validate a net and every node and arc it owns.
    ///
    /// Each call starts from an empty accumulator, so validating the same
    /// net twice yields identical results.
    pub fn validate(&self, net: &PetriNet) -> ValidationResult<PetriElementKind> {
        let mut result = ValidationResult::new();
        self.check_net(net, &mut result);
        result
    }

    fn check_net(&self, net: &PetriNet, result: &mut ValidationResult<PetriElementKind>) {
        // Place names and transition names are each unique; the two
        // namespaces are disjoint, so a place may share its name with a
        // transition.
        let mut place_names: HashSet<Option<&str>> = HashSet::new();
        let mut transition_names: HashSet<Option<&str>> = HashSet::new();

        for node in net.nodes() {
            match node {
                Node::Place(place) => {
                    result.record_if_failed(
                        place_names.insert(place.name.as_deref()),
                        PetriElementKind::Place,
                        display_name(place.name.as_deref()),
                        format!(
                            "place name '{}' is duplicated",
                            display_name(place.name.as_deref()),
                        ),
                    );
                    self.check_place(place, result);
                }
                Node::Transition(transition) => {
                    result.record_if_failed(
                        transition_names.insert(transition.name.as_deref()),
                        PetriElementKind::Transition,
                        display_name(transition.name.as_deref()),
                        format!(
                            "transition name '{}' is duplicated",
                            display_name(transition.name.as_deref()),
                        ),
                    );
                    self.check_transition(transition, result);
                }
                Node::Unknown { id, kind } => {
                    result.record_if_failed(
                        false,
                        PetriElementKind::Node,
                        id.to_string(),
                        format!("unknown node kind '{kind}'"),
                    );
                }
            }
        }

        for (index, arc) in net.arcs().iter().enumerate() {
            self.check_arc(net, index, arc, result);
        }
    }

    fn check_place(&self, place: &Place, result: &mut ValidationResult<PetriElementKind>) {
        result.record_if_failed(
            place.tokens.map_or(false, |tokens| tokens >= 0),
            PetriElementKind::Place,
            display_name(place.name.as_deref()),
            format!(
                "token count for place '{}' must be present and non-negative",
                display_name(place.name.as_deref()),
            ),
        );
    }

    fn check_transition(
        &self,
        transition: &Transition,
        result: &mut ValidationResult<PetriElementKind>,
    ) {
        result.record_if_failed(
            transition
                .name
                .as_deref()
                .map_or(false, |name| !name.trim().is_empty()),
            PetriElementKind::Transition,
            display_name(transition.name.as_deref()),
            "transition name must be present and non-blank",
        );
    }

    fn check_arc(
        &self,
        net: &PetriNet,
        index: usize,
        arc: &Arc,
        result: &mut ValidationResult<PetriElementKind>,
    ) {
        let label = format!("arc{index}");

        result.record_if_failed(
            arc.weight.map_or(false, |weight| weight >= 1),
            PetriElementKind::Arc,
            label.as_str(),
            "arc weight must be present and at least 1",
        );

        // Exactly one end of an arc is a place and the other a transition.
        // An endpoint that is absent or does not resolve has no kind and
        // cannot make the ends equal.
        let source = arc.source.and_then(|id| net.node(id));
        let target = arc.target.and_then(|id| net.node(id));
        let both_places =
            source.map_or(false, Node::is_place) && target.map_or(false, Node::is_place);
        let both_transitions = source.map_or(false, Node::is_transition)
            && target.map_or(false, Node::is_transition);

        result.record_if_failed(
            !(both_places || both_transitions),
            PetriElementKind::Arc,
            label.as_str(),
            "arc must connect a place and a transition",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdlnet_core::NodeId;

    fn validate(net: &PetriNet) -> ValidationResult<PetriElementKind> {
        PetriNetValidator::new().validate(net)
    }

    #[test]
    fn test_well_formed_net_passes() {
        // GIVEN
        let mut net = PetriNet::new("N");
        let ready = net.add_place("ready", 1);
        let done = net.add_place("done", 0);
        let fire = net.add_transition("fire");
        net.add_arc(ready, fire, 1);
        net.add_arc(fire, done, 1);

        // WHEN
        let result = validate(&net);

        // THEN
        assert!(result.is_empty(), "unexpected: {:?}", result.all());
    }

    #[test]
    fn test_duplicate_place_names_flag_repeats_only() {
        // GIVEN
        let mut net = PetriNet::new("N");
        net.add_place("p", 0);
        net.add_place("p", 0);
        net.add_place("q", 0);

        // WHEN
        let result = validate(&net);

        // THEN
        let duplicates = result
            .errors_for(PetriElementKind::Place)
            .filter(|e| e.message.contains("duplicated"))
            .count();
        assert_eq!(duplicates, 1);
    }

    #[test]
    fn test_place_and_transition_may_share_a_name() {
        // GIVEN - disjoint namespaces
        let mut net = PetriNet::new("N");
        net.add_place("step", 0);
        net.add_transition("step");

        // WHEN
        let result = validate(&net);

        // THEN
        assert!(result.is_empty());
    }

    #[test]
    fn test_negative_or_missing_tokens_flagged() {
        // GIVEN
        let mut net = PetriNet::new("N");
        net.add_place("bad", -1);
        net.push_node(Node::Place(Place {
            id: NodeId::new(50),
            name: Some("unset".into()),
            tokens: None,
        }));

        // WHEN
        let result = validate(&net);

        // THEN
        let errors = result
            .errors_for(PetriElementKind::Place)
            .filter(|e| e.message.contains("token count"))
            .count();
        assert_eq!(errors, 2);
    }

    #[test]
    fn test_blank_transition_name_flagged() {
        // GIVEN
        let mut net = PetriNet::new("N");
        net.add_transition("   ");

        // WHEN
        let result = validate(&net);

        // THEN
        let errors: Vec<_> = result.errors_for(PetriElementKind::Transition).collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("non-blank"));
    }

    #[test]
    fn test_unknown_node_kind_recorded() {
        // GIVEN
        let mut net = PetriNet::new("N");
        net.push_node(Node::Unknown {
            id: NodeId::new(1),
            kind: "timer".into(),
        });

        // WHEN
        let result = validate(&net);

        // THEN
        let errors: Vec<_> = result.errors_for(PetriElementKind::Node).collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("timer"));
    }

    #[test]
    fn test_place_to_place_arc_flagged() {
        // GIVEN
        let mut net = PetriNet::new("N");
        let p = net.add_place("p", 0);
        let q = net.add_place("q", 0);
        net.add_arc(p, q, 1);

        // WHEN
        let result = validate(&net);

        // THEN
        let errors: Vec<_> = result.errors_for(PetriElementKind::Arc).collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("place and a transition"));
    }

    #[test]
    fn test_transition_to_transition_arc_flagged() {
        // GIVEN
        let mut net = PetriNet::new("N");
        let t = net.add_transition("t");
        let u = net.add_transition("u");
        net.add_arc(t, u, 1);

        // WHEN
        let result = validate(&net);

        // THEN
        assert_eq!(result.errors_for(PetriElementKind::Arc).count(), 1);
    }

    #[test]
    fn test_place_to_transition_arc_accepted_both_directions() {
        // GIVEN
        let mut net = PetriNet::new("N");
        let p = net.add_place("p", 0);
        let t = net.add_transition("t");
        net.add_arc(p, t, 1);
        net.add_arc(t, p, 1);

        // WHEN
        let result = validate(&net);

        // THEN
        assert!(result.is_empty());
    }

    #[test]
    fn test_bad_weight_flagged() {
        // GIVEN
        let mut net = PetriNet::new("N");
        let p = net.add_place("p", 0);
        let t = net.add_transition("t");
        net.add_arc(p, t, 0);
        net.push_arc(Arc {
            source: Some(p),
            target: Some(t),
            weight: None,
        });

        // WHEN
        let result = validate(&net);

        // THEN
        let errors = result
            .errors_for(PetriElementKind::Arc)
            .filter(|e| e.message.contains("weight"))
            .count();
        assert_eq!(errors, 2);
    }

    #[test]
    fn test_dangling_arc_endpoint_does_not_trip_kind_check() {
        // GIVEN
        let mut net = PetriNet::new("N");
        let p = net.add_place("p", 0);
        net.push_arc(Arc {
            source: Some(p),
            target: Some(NodeId::new(99)),
            weight: Some(1),
        });

        // WHEN
        let result = validate(&net);

        // THEN
        assert!(result.is_empty());
    }

    #[test]
    fn test_repeated_validation_is_deterministic() {
        // GIVEN
        let mut net = PetriNet::new("N");
        let p = net.add_place("p", -3);
        let q = net.add_place("p", 0);
        net.add_arc(p, q, 0);
        let validator = PetriNetValidator::new();

        // WHEN
        let first = validator.validate(&net);
        let second = validator.validate(&net);

        // THEN
        assert_eq!(first.all(), second.all());
    }
}
