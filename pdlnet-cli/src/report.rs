//! Console rendering of validation results and Petri nets.

use std::fmt::Display;

use pdlnet_core::{NodeId, PdlElementKind, PetriElementKind, ValidationError, ValidationResult};
use pdlnet_petri::{Node, PetriNet};

/// Print a validation result for a Process-Definition graph, one section
/// per element kind.
pub fn print_pdl_result(result: &ValidationResult<PdlElementKind>) {
    for kind in [
        PdlElementKind::Process,
        PdlElementKind::WorkDefinition,
        PdlElementKind::WorkSequence,
        PdlElementKind::Ressource,
        PdlElementKind::RessourceRequirement,
        PdlElementKind::Guidance,
    ] {
        print_section(kind, result);
    }
}

/// Print a validation result for a Petri-net graph, one section per
/// element kind.
pub fn print_petri_result(result: &ValidationResult<PetriElementKind>) {
    for kind in [
        PetriElementKind::PetriNet,
        PetriElementKind::Node,
        PetriElementKind::Place,
        PetriElementKind::Transition,
        PetriElementKind::Arc,
    ] {
        print_section(kind, result);
    }
}

/// One section: "OK" when the kind has no violations, otherwise the count
/// followed by one line per violation.
fn print_section<K: Copy + PartialEq + Display>(kind: K, result: &ValidationResult<K>) {
    let errors: Vec<&ValidationError<K>> = result.errors_for(kind).collect();
    print!("- {kind}:");
    if errors.is_empty() {
        println!(" OK");
    } else {
        println!(" {} violation(s)", errors.len());
        for error in errors {
            println!("=> {error}");
        }
    }
}

/// Dump a Petri net to the console: places with their markings,
/// transitions, then arcs with resolved endpoint names.
pub fn print_net(net: &PetriNet) {
    println!("Petri net: {}", net.name().unwrap_or("<unnamed>"));

    println!("Places:");
    for place in net.places() {
        let tokens = place
            .tokens
            .map(|t| t.to_string())
            .unwrap_or_else(|| "?".to_string());
        println!(
            "  {} (tokens={tokens})",
            place.name.as_deref().unwrap_or("<unnamed>"),
        );
    }

    println!("Transitions:");
    for transition in net.transitions() {
        println!("  {}", transition.name.as_deref().unwrap_or("<unnamed>"));
    }

    println!("Arcs:");
    for arc in net.arcs() {
        let weight = arc
            .weight
            .map(|w| w.to_string())
            .unwrap_or_else(|| "?".to_string());
        println!(
            "  {} -> {} (weight={weight})",
            endpoint_name(net, arc.source),
            endpoint_name(net, arc.target),
        );
    }
}

fn endpoint_name(net: &PetriNet, id: Option<NodeId>) -> String {
    id.and_then(|id| net.node(id))
        .and_then(Node::name)
        .unwrap_or("?")
        .to_string()
}
