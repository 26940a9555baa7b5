//! PDLNET Petri-net model
//!
//! In-memory Petri-net graph: places holding tokens and transitions,
//! connected by weighted arcs. Bipartiteness (an arc must connect a place
//! and a transition) is an intended invariant checked by `pdlnet-validate`,
//! not enforced by construction.

mod net;

pub use net::{Arc, Node, PetriNet, Place, Transition};
