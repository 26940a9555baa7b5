//! On-disk document schema and model conversions.
//!
//! The document layer owns its own serde structs and converts to and from
//! the in-memory models, so the models stay serialization-free. Element and
//! node lists are lenient: an entry whose kind (or shape) is not recognized
//! loads as an `Unknown` value instead of failing the whole document, and
//! survives a save/load round trip.

use pdlnet_core::{NodeId, RessourceId, WorkDefinitionId};
use pdlnet_pdl::{
    Guidance, LinkType, Process, ProcessElement, Ressource, RessourceRequirement, WorkDefinition,
    WorkSequence,
};
use pdlnet_petri::{Arc, Node, PetriNet, Place, Transition};
use serde::{Deserialize, Serialize};

/// `model` discriminator of a process document.
pub(crate) const PROCESS_MODEL: &str = "simplepdl";
/// `model` discriminator of a Petri-net document.
pub(crate) const PETRI_MODEL: &str = "petrinet";

// ==================== Process documents ====================

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ProcessDoc {
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub elements: Vec<ElementDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum ElementDoc {
    Known(KnownElementDoc),
    Unknown(UnknownDoc),
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum KnownElementDoc {
    WorkDefinition {
        id: u64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        requirements: Vec<RequirementDoc>,
    },
    WorkSequence {
        link_type: LinkTypeDoc,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        predecessor: Option<u64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        successor: Option<u64>,
    },
    Ressource {
        id: u64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        number: i64,
    },
    RessourceRequirement {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ressource: Option<u64>,
        number_required: i64,
    },
    Guidance {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct RequirementDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ressource: Option<u64>,
    pub number_required: i64,
}

/// Fallback for element kinds this version does not know.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct UnknownDoc {
    pub kind: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum LinkTypeDoc {
    FinishToStart,
    StartToStart,
    FinishToFinish,
    StartToFinish,
}

impl From<LinkTypeDoc> for LinkType {
    fn from(doc: LinkTypeDoc) -> Self {
        match doc {
            LinkTypeDoc::FinishToStart => LinkType::FinishToStart,
            LinkTypeDoc::StartToStart => LinkType::StartToStart,
            LinkTypeDoc::FinishToFinish => LinkType::FinishToFinish,
            LinkTypeDoc::StartToFinish => LinkType::StartToFinish,
        }
    }
}

impl From<LinkType> for LinkTypeDoc {
    fn from(link: LinkType) -> Self {
        match link {
            LinkType::FinishToStart => LinkTypeDoc::FinishToStart,
            LinkType::StartToStart => LinkTypeDoc::StartToStart,
            LinkType::FinishToFinish => LinkTypeDoc::FinishToFinish,
            LinkType::StartToFinish => LinkTypeDoc::StartToFinish,
        }
    }
}

pub(crate) fn process_from_doc(doc: ProcessDoc) -> Process {
    let mut process = Process::unnamed();
    process.set_name(doc.name);

    for element in doc.elements {
        let element = match element {
            ElementDoc::Known(KnownElementDoc::WorkDefinition {
                id,
                name,
                requirements,
            }) => ProcessElement::WorkDefinition(WorkDefinition {
                id: WorkDefinitionId::new(id),
                name,
                requirements: requirements
                    .into_iter()
                    .map(|req| RessourceRequirement {
                        ressource: req.ressource.map(RessourceId::new),
                        number_required: req.number_required,
                    })
                    .collect(),
            }),
            ElementDoc::Known(KnownElementDoc::WorkSequence {
                link_type,
                predecessor,
                successor,
            }) => ProcessElement::WorkSequence(WorkSequence {
                link_type: link_type.into(),
                predecessor: predecessor.map(WorkDefinitionId::new),
                successor: successor.map(WorkDefinitionId::new),
            }),
            ElementDoc::Known(KnownElementDoc::Ressource { id, name, number }) => {
                ProcessElement::Ressource(Ressource {
                    id: RessourceId::new(id),
                    name,
                    number,
                })
            }
            ElementDoc::Known(KnownElementDoc::RessourceRequirement {
                ressource,
                number_required,
            }) => ProcessElement::RessourceRequirement(RessourceRequirement {
                ressource: ressource.map(RessourceId::new),
                number_required,
            }),
            ElementDoc::Known(KnownElementDoc::Guidance { text }) => {
                ProcessElement::Guidance(Guidance { text })
            }
            ElementDoc::Unknown(UnknownDoc { kind }) => ProcessElement::Unknown { kind },
        };
        process.push_element(element);
    }

    process
}

pub(crate) fn process_to_doc(process: &Process) -> ProcessDoc {
    let elements = process
        .elements()
        .iter()
        .map(|element| match element {
            ProcessElement::WorkDefinition(wd) => {
                ElementDoc::Known(KnownElementDoc::WorkDefinition {
                    id: wd.id.raw(),
                    name: wd.name.clone(),
                    requirements: wd
                        .requirements
                        .iter()
                        .map(|req| RequirementDoc {
                            ressource: req.ressource.map(|id| id.raw()),
                            number_required: req.number_required,
                        })
                        .collect(),
                })
            }
            ProcessElement::WorkSequence(ws) => ElementDoc::Known(KnownElementDoc::WorkSequence {
                link_type: ws.link_type.into(),
                predecessor: ws.predecessor.map(|id| id.raw()),
                successor: ws.successor.map(|id| id.raw()),
            }),
            ProcessElement::Ressource(res) => ElementDoc::Known(KnownElementDoc::Ressource {
                id: res.id.raw(),
                name: res.name.clone(),
                number: res.number,
            }),
            ProcessElement::RessourceRequirement(req) => {
                ElementDoc::Known(KnownElementDoc::RessourceRequirement {
                    ressource: req.ressource.map(|id| id.raw()),
                    number_required: req.number_required,
                })
            }
            ProcessElement::Guidance(guidance) => ElementDoc::Known(KnownElementDoc::Guidance {
                text: guidance.text.clone(),
            }),
            ProcessElement::Unknown { kind } => {
                ElementDoc::Unknown(UnknownDoc { kind: kind.clone() })
            }
        })
        .collect();

    ProcessDoc {
        model: PROCESS_MODEL.to_string(),
        name: process.name().map(str::to_string),
        elements,
    }
}

// ==================== Petri-net documents ====================

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct PetriNetDoc {
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub nodes: Vec<NodeDoc>,
    #[serde(default)]
    pub arcs: Vec<ArcDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum NodeDoc {
    Known(KnownNodeDoc),
    Unknown(UnknownNodeDoc),
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum KnownNodeDoc {
    Place {
        id: u64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tokens: Option<i64>,
    },
    Transition {
        id: u64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
}

/// Fallback for node kinds this version does not know.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct UnknownNodeDoc {
    #[serde(default)]
    pub id: u64,
    pub kind: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ArcDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
}

pub(crate) fn petri_net_from_doc(doc: PetriNetDoc) -> PetriNet {
    let mut net = PetriNet::unnamed();
    net.set_name(doc.name);

    for node in doc.nodes {
        let node = match node {
            NodeDoc::Known(KnownNodeDoc::Place { id, name, tokens }) => Node::Place(Place {
                id: NodeId::new(id),
                name,
                tokens,
            }),
            NodeDoc::Known(KnownNodeDoc::Transition { id, name }) => {
                Node::Transition(Transition {
                    id: NodeId::new(id),
                    name,
                })
            }
            NodeDoc::Unknown(UnknownNodeDoc { id, kind }) => Node::Unknown {
                id: NodeId::new(id),
                kind,
            },
        };
        net.push_node(node);
    }

    for arc in doc.arcs {
        net.push_arc(Arc {
            source: arc.source.map(NodeId::new),
            target: arc.target.map(NodeId::new),
            weight: arc.weight,
        });
    }

    net
}

pub(crate) fn petri_net_to_doc(net: &PetriNet) -> PetriNetDoc {
    let nodes = net
        .nodes()
        .iter()
        .map(|node| match node {
            Node::Place(place) => NodeDoc::Known(KnownNodeDoc::Place {
                id: place.id.raw(),
                name: place.name.clone(),
                tokens: place.tokens,
            }),
            Node::Transition(transition) => NodeDoc::Known(KnownNodeDoc::Transition {
                id: transition.id.raw(),
                name: transition.name.clone(),
            }),
            Node::Unknown { id, kind } => NodeDoc::Unknown(UnknownNodeDoc {
                id: id.raw(),
                kind: kind.clone(),
            }),
        })
        .collect();

    let arcs = net
        .arcs()
        .iter()
        .map(|arc| ArcDoc {
            source: arc.source.map(|id| id.raw()),
            target: arc.target.map(|id| id.raw()),
            weight: arc.weight,
        })
        .collect();

    PetriNetDoc {
        model: PETRI_MODEL.to_string(),
        name: net.name().map(str::to_string),
        nodes,
        arcs,
    }
}
