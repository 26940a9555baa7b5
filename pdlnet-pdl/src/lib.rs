//! PDLNET SimplePDL model
//!
//! In-memory Process-Definition graph:
//! - `Process` owns an ordered sequence of `ProcessElement`
//! - Work definitions, ordering constraints, ressources, requirements and
//!   guidance notes as the element variants
//! - Id-based references that may be absent or dangling
//!
//! The model is data only: every intended invariant (identifier-shaped
//! names, unique ressource names, no self-referencing sequence, ...) is
//! validated by `pdlnet-validate`, never enforced by construction.

mod error;
mod process;

pub use error::{PdlError, PdlResult};
pub use process::{
    Guidance, LinkType, Process, ProcessElement, Ressource, RessourceRequirement, WorkDefinition,
    WorkSequence,
};
