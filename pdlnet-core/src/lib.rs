//! PDLNET Core
//!
//! Shared vocabulary for the PDLNET workspace:
//! - Identity newtypes for model elements
//! - The `ValidationResult` accumulator and its error records
//! - Element-kind enums used to classify recorded violations
//! - The well-formed-identifier predicate

mod id;
mod ident;
mod kind;
mod result;

pub use id::{NodeId, RessourceId, WorkDefinitionId};
pub use ident::is_well_formed_ident;
pub use kind::{PdlElementKind, PetriElementKind};
pub use result::{ValidationError, ValidationResult};
