//! Process-Definition graph storage.

use pdlnet_core::{RessourceId, WorkDefinitionId};

use crate::error::{PdlError, PdlResult};

/// Temporal-dependency flavor of a work sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkType {
    FinishToStart,
    StartToStart,
    FinishToFinish,
    StartToFinish,
}

impl std::fmt::Display for LinkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LinkType::FinishToStart => "finish-to-start",
            LinkType::StartToStart => "start-to-start",
            LinkType::FinishToFinish => "finish-to-finish",
            LinkType::StartToFinish => "start-to-finish",
        };
        f.write_str(s)
    }
}

/// An activity of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkDefinition {
    pub id: WorkDefinitionId,
    /// Absent when a loaded document carries no name.
    pub name: Option<String>,
    /// Ressource requirements owned by this activity.
    pub requirements: Vec<RessourceRequirement>,
}

impl WorkDefinition {
    /// Name as a string slice, if present.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// An ordering constraint between two work definitions.
///
/// Both endpoints are references and may be absent or dangling; the
/// validator reports the former, the transformer tolerates both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkSequence {
    pub link_type: LinkType,
    pub predecessor: Option<WorkDefinitionId>,
    pub successor: Option<WorkDefinitionId>,
}

/// A ressource with an integer capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct Ressource {
    pub id: RessourceId,
    pub name: Option<String>,
    /// Capacity, intended >= 0 (validated, not enforced).
    pub number: i64,
}

impl Ressource {
    /// Name as a string slice, if present.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// A claim on a ressource by a work definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RessourceRequirement {
    pub ressource: Option<RessourceId>,
    /// Intended > 0 and <= the referenced ressource's capacity.
    pub number_required: i64,
}

/// A free-text guidance note.
#[derive(Debug, Clone, PartialEq)]
pub struct Guidance {
    pub text: Option<String>,
}

/// Polymorphic process element.
///
/// `Unknown` holds an element kind the loader did not recognize; validation
/// silently skips it so forward-compatible documents stay valid.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessElement {
    WorkDefinition(WorkDefinition),
    WorkSequence(WorkSequence),
    Ressource(Ressource),
    RessourceRequirement(RessourceRequirement),
    Guidance(Guidance),
    Unknown { kind: String },
}

impl ProcessElement {
    /// Get as a work definition if this is one.
    pub fn as_work_definition(&self) -> Option<&WorkDefinition> {
        match self {
            ProcessElement::WorkDefinition(wd) => Some(wd),
            _ => None,
        }
    }

    /// Get as a work sequence if this is one.
    pub fn as_work_sequence(&self) -> Option<&WorkSequence> {
        match self {
            ProcessElement::WorkSequence(ws) => Some(ws),
            _ => None,
        }
    }

    /// Get as a ressource if this is one.
    pub fn as_ressource(&self) -> Option<&Ressource> {
        match self {
            ProcessElement::Ressource(res) => Some(res),
            _ => None,
        }
    }
}

/// A process definition: a named, ordered sequence of process elements.
#[derive(Debug, Clone)]
pub struct Process {
    name: Option<String>,
    elements: Vec<ProcessElement>,
    next_id: u64,
}

impl Process {
    /// Create a new named process.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            elements: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a process without a name.
    pub fn unnamed() -> Self {
        Self {
            name: None,
            elements: Vec::new(),
            next_id: 1,
        }
    }

    /// Process name, if present.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Replace the process name.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Elements in insertion order.
    pub fn elements(&self) -> &[ProcessElement] {
        &self.elements
    }

    // ==================== Construction ====================

    /// Add a named work definition, returning its id.
    pub fn add_work_definition(&mut self, name: impl Into<String>) -> WorkDefinitionId {
        let id = WorkDefinitionId::new(self.alloc_id());
        self.elements.push(ProcessElement::WorkDefinition(WorkDefinition {
            id,
            name: Some(name.into()),
            requirements: Vec::new(),
        }));
        id
    }

    /// Add a work definition without a name, returning its id.
    pub fn add_unnamed_work_definition(&mut self) -> WorkDefinitionId {
        let id = WorkDefinitionId::new(self.alloc_id());
        self.elements.push(ProcessElement::WorkDefinition(WorkDefinition {
            id,
            name: None,
            requirements: Vec::new(),
        }));
        id
    }

    /// Add a work sequence between two (possibly absent) endpoints.
    pub fn add_work_sequence(
        &mut self,
        link_type: LinkType,
        predecessor: Option<WorkDefinitionId>,
        successor: Option<WorkDefinitionId>,
    ) {
        self.elements.push(ProcessElement::WorkSequence(WorkSequence {
            link_type,
            predecessor,
            successor,
        }));
    }

    /// Add a ressource with the given capacity, returning its id.
    pub fn add_ressource(&mut self, name: impl Into<String>, number: i64) -> RessourceId {
        let id = RessourceId::new(self.alloc_id());
        self.elements.push(ProcessElement::Ressource(Ressource {
            id,
            name: Some(name.into()),
            number,
        }));
        id
    }

    /// Add a guidance note.
    pub fn add_guidance(&mut self, text: Option<String>) {
        self.elements.push(ProcessElement::Guidance(Guidance { text }));
    }

    /// Attach a ressource requirement to an existing work definition.
    pub fn add_requirement(
        &mut self,
        work_definition: WorkDefinitionId,
        ressource: Option<RessourceId>,
        number_required: i64,
    ) -> PdlResult<()> {
        let wd = self
            .elements
            .iter_mut()
            .find_map(|e| match e {
                ProcessElement::WorkDefinition(wd) if wd.id == work_definition => Some(wd),
                _ => None,
            })
            .ok_or(PdlError::WorkDefinitionNotFound(work_definition))?;
        wd.requirements.push(RessourceRequirement {
            ressource,
            number_required,
        });
        Ok(())
    }

    /// Append an already-built element (document loading path).
    ///
    /// Keeps the id allocator ahead of any id carried by the element, so
    /// later `add_*` calls cannot collide with loaded ids.
    pub fn push_element(&mut self, element: ProcessElement) {
        match &element {
            ProcessElement::WorkDefinition(wd) => self.reserve_id(wd.id.raw()),
            ProcessElement::Ressource(res) => self.reserve_id(res.id.raw()),
            _ => {}
        }
        self.elements.push(element);
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn reserve_id(&mut self, id: u64) {
        if id >= self.next_id {
            self.next_id = id + 1;
        }
    }

    // ==================== Lookup ====================

    /// Resolve a work definition reference.
    pub fn work_definition(&self, id: WorkDefinitionId) -> Option<&WorkDefinition> {
        self.work_definitions().find(|wd| wd.id == id)
    }

    /// Resolve a ressource reference.
    pub fn ressource(&self, id: RessourceId) -> Option<&Ressource> {
        self.ressources().find(|res| res.id == id)
    }

    /// Work definitions in insertion order.
    pub fn work_definitions(&self) -> impl Iterator<Item = &WorkDefinition> {
        self.elements.iter().filter_map(ProcessElement::as_work_definition)
    }

    /// Work sequences in insertion order.
    pub fn work_sequences(&self) -> impl Iterator<Item = &WorkSequence> {
        self.elements.iter().filter_map(ProcessElement::as_work_sequence)
    }

    /// Ressources in insertion order.
    pub fn ressources(&self) -> impl Iterator<Item = &Ressource> {
        self.elements.iter().filter_map(ProcessElement::as_ressource)
    }
}
