//! Integration test support for PDLNET.

pub mod fixtures;

pub mod prelude {
    pub use crate::fixtures::*;
    pub use pdlnet_core::{PdlElementKind, PetriElementKind};
    pub use pdlnet_pdl::{LinkType, Process, ProcessElement};
    pub use pdlnet_petri::{Node, PetriNet};
    pub use pdlnet_transform::transform;
    pub use pdlnet_validate::{PetriNetValidator, SimplePdlValidator};
}
