//! Shared fixtures and helpers for integration scenarios.

use std::path::PathBuf;

use pdlnet_pdl::{LinkType, Process};
use pdlnet_petri::{Node, PetriNet};

/// A small valid process: two activities with a finish-to-start dependency,
/// one ressource claimed by the first activity.
pub fn example_process() -> Process {
    let mut process = Process::new("ExampleProcess");
    let a = process.add_work_definition("TaskA");
    let b = process.add_work_definition("TaskB");
    process.add_work_sequence(LinkType::FinishToStart, Some(a), Some(b));
    let machine = process.add_ressource("Machine", 2);
    process
        .add_requirement(a, Some(machine), 1)
        .expect("activity exists");
    process
}

/// A process violating one constraint of almost every kind.
pub fn flawed_process() -> Process {
    let mut process = Process::new("flawed process");
    let a = process.add_work_definition("Task");
    process.add_work_definition("TaskExtra");
    process.add_work_sequence(LinkType::FinishToStart, Some(a), Some(a));
    process.add_ressource("R", -1);
    process.add_ressource("R", 1);
    process.add_guidance(None);
    process
        .add_requirement(a, None, 0)
        .expect("activity exists");
    process
}

/// Unique scratch path under the system temp directory.
pub fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pdlnet-it-{}-{}", std::process::id(), name))
}

/// Arcs of a net rendered as (source name, target name, weight) triples.
pub fn arc_triples(net: &PetriNet) -> Vec<(String, String, Option<i64>)> {
    let name_of = |id| {
        net.node(id)
            .and_then(Node::name)
            .unwrap_or("?")
            .to_string()
    };
    net.arcs()
        .iter()
        .map(|arc| {
            (
                arc.source.map(|id| name_of(id)).unwrap_or_default(),
                arc.target.map(|id| name_of(id)).unwrap_or_default(),
                arc.weight,
            )
        })
        .collect()
}
