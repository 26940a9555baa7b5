//! Element-kind enums used to classify violations.

use std::fmt;

/// Kind of a Process-Definition model element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PdlElementKind {
    Process,
    WorkDefinition,
    WorkSequence,
    Ressource,
    RessourceRequirement,
    Guidance,
}

impl fmt::Display for PdlElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PdlElementKind::Process => "Process",
            PdlElementKind::WorkDefinition => "WorkDefinition",
            PdlElementKind::WorkSequence => "WorkSequence",
            PdlElementKind::Ressource => "Ressource",
            PdlElementKind::RessourceRequirement => "RessourceRequirement",
            PdlElementKind::Guidance => "Guidance",
        };
        f.write_str(s)
    }
}

/// Kind of a Petri-net model element.
///
/// `Node` classifies violations about a node whose concrete kind is not
/// known (an extension element loaded from a document).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PetriElementKind {
    PetriNet,
    Node,
    Place,
    Transition,
    Arc,
}

impl fmt::Display for PetriElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PetriElementKind::PetriNet => "PetriNet",
            PetriElementKind::Node => "Node",
            PetriElementKind::Place => "Place",
            PetriElementKind::Transition => "Transition",
            PetriElementKind::Arc => "Arc",
        };
        f.write_str(s)
    }
}
