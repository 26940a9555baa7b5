//! PDLNET Validation
//!
//! Walk a loaded model graph and collect constraint violations:
//! - `SimplePdlValidator` for Process-Definition graphs
//! - `PetriNetValidator` for Petri-net graphs
//!
//! Responsibilities:
//! - Run every per-kind check over every reachable element
//! - Accumulate findings into one `ValidationResult` per run
//! - Never fail: malformed input is what the checks exist to report
//!
//! Dispatch is a match over the closed element sum type; unknown extension
//! kinds take the deliberate no-op arm (SimplePDL) or are themselves
//! recorded (Petri net).

mod petrinet;
mod simplepdl;

pub use petrinet::PetriNetValidator;
pub use simplepdl::SimplePdlValidator;

/// Render a possibly-absent name for violation messages.
pub(crate) fn display_name(name: Option<&str>) -> &str {
    name.unwrap_or("<unnamed>")
}
