//! PDLNET Transformation
//!
//! Build a Petri net encoding the scheduling semantics of a process
//! definition. Each work definition becomes a ready place (one token), a
//! finished place (no tokens) and a "do" transition wired ready -> do ->
//! finished; each work sequence becomes one arc from a place of its
//! predecessor into the transition of its successor.
//!
//! The transformation is best-effort and infallible: a work sequence whose
//! endpoint is absent or does not resolve simply contributes no arc.

use std::collections::HashMap;

use pdlnet_core::{NodeId, WorkDefinitionId};
use pdlnet_pdl::{LinkType, Process};
use pdlnet_petri::PetriNet;

/// Transform a process definition into a freshly built Petri net.
///
/// Pure with respect to its input and deterministic: nodes and arcs are
/// created in the order the process lists its elements.
pub fn transform(process: &Process) -> PetriNet {
    let mut net = match process.name() {
        Some(name) => PetriNet::new(name),
        None => PetriNet::unnamed(),
    };

    let mut ready_places: HashMap<WorkDefinitionId, NodeId> = HashMap::new();
    let mut finished_places: HashMap<WorkDefinitionId, NodeId> = HashMap::new();
    let mut work_transitions: HashMap<WorkDefinitionId, NodeId> = HashMap::new();

    // First pass: one ready/finished place pair and one transition per
    // work definition, wired ready -> do -> finished.
    for wd in process.work_definitions() {
        let name = wd.name().unwrap_or("");

        let ready = net.add_place(format!("{name}_ready"), 1);
        let finished = net.add_place(format!("{name}_finished"), 0);
        let transition = net.add_transition(format!("{name}_do"));

        net.add_arc(ready, transition, 1);
        net.add_arc(transition, finished, 1);

        ready_places.insert(wd.id, ready);
        finished_places.insert(wd.id, finished);
        work_transitions.insert(wd.id, transition);
    }

    // Second pass: one dependency arc per work sequence. The source place
    // is read off the predecessor according to the link type; the target
    // is always the successor's transition. Note that both *-to-finish
    // flavors still feed the successor transition rather than its finished
    // place; this mirrors the modeling simplification of the source
    // semantics and is deliberately not reinterpreted here.
    for ws in process.work_sequences() {
        let source = match ws.link_type {
            LinkType::FinishToStart => lookup(&finished_places, ws.predecessor),
            LinkType::StartToStart => lookup(&ready_places, ws.predecessor),
            LinkType::FinishToFinish => lookup(&finished_places, ws.predecessor),
            LinkType::StartToFinish => lookup(&ready_places, ws.predecessor),
        };
        let target = lookup(&work_transitions, ws.successor);

        // Unresolvable endpoints degrade to omitting the arc.
        if let (Some(source), Some(target)) = (source, target) {
            net.add_arc(source, target, 1);
        }
    }

    net
}

fn lookup(
    table: &HashMap<WorkDefinitionId, NodeId>,
    wd: Option<WorkDefinitionId>,
) -> Option<NodeId> {
    wd.and_then(|id| table.get(&id).copied())
}
