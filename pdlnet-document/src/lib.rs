//! PDLNET Documents
//!
//! Load and save model documents: JSON files carrying either a
//! Process-Definition graph (`"model": "simplepdl"`) or a Petri-net graph
//! (`"model": "petrinet"`). The validators and the transformer never touch
//! files themselves; this crate is the loader/saver collaborator they rely
//! on.

mod error;
mod schema;

use std::fs;
use std::path::Path;

use pdlnet_pdl::Process;
use pdlnet_petri::PetriNet;

pub use error::{LoadError, SaveError};

/// Load a Process-Definition graph from a document.
pub fn load_process(path: impl AsRef<Path>) -> Result<Process, LoadError> {
    let path = path.as_ref();
    let text = read(path)?;
    let doc: schema::ProcessDoc = parse(path, &text)?;
    check_model(path, schema::PROCESS_MODEL, &doc.model)?;
    Ok(schema::process_from_doc(doc))
}

/// Save a Process-Definition graph as a document.
pub fn save_process(path: impl AsRef<Path>, process: &Process) -> Result<(), SaveError> {
    let doc = schema::process_to_doc(process);
    write(path.as_ref(), &serde_json::to_string_pretty(&doc)?)
}

/// Load a Petri-net graph from a document.
pub fn load_petri_net(path: impl AsRef<Path>) -> Result<PetriNet, LoadError> {
    let path = path.as_ref();
    let text = read(path)?;
    let doc: schema::PetriNetDoc = parse(path, &text)?;
    check_model(path, schema::PETRI_MODEL, &doc.model)?;
    Ok(schema::petri_net_from_doc(doc))
}

/// Save a Petri-net graph as a document.
pub fn save_petri_net(path: impl AsRef<Path>, net: &PetriNet) -> Result<(), SaveError> {
    let doc = schema::petri_net_to_doc(net);
    write(path.as_ref(), &serde_json::to_string_pretty(&doc)?)
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse<'a, T: serde::Deserialize<'a>>(path: &Path, text: &'a str) -> Result<T, LoadError> {
    serde_json::from_str(text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn check_model(path: &Path, expected: &'static str, actual: &str) -> Result<(), LoadError> {
    if actual == expected {
        Ok(())
    } else {
        Err(LoadError::WrongModel {
            path: path.to_path_buf(),
            expected,
            actual: actual.to_string(),
        })
    }
}

fn write(path: &Path, text: &str) -> Result<(), SaveError> {
    fs::write(path, text).map_err(|source| SaveError::Io {
        path: path.to_path_buf(),
        source,
    })
}
