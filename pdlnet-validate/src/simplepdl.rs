//! SimplePDL constraint checking.

use std::collections::HashSet;

use pdlnet_core::{is_well_formed_ident, PdlElementKind, RessourceId, ValidationResult};
use pdlnet_pdl::{
    Guidance, Process, ProcessElement, Ressource, RessourceRequirement, WorkDefinition,
    WorkSequence,
};

use crate::display_name;

/// SimplePDL validator.
///
/// Walks a process graph and records one violation per failed constraint.
/// Name uniqueness between work definitions is, as shipped, a substring
/// containment test; `strict_name_equality` switches it to exact equality.
#[derive(Debug, Clone, Default)]
pub struct SimplePdlValidator {
    strict_name_equality: bool,
}

impl SimplePdlValidator {
    /// Create a validator with the literal (substring) uniqueness check.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare work definition names for exact equality instead of
    /// substring containment.
    pub fn strict_name_equality(mut self, strict: bool) -> Self {
        self.strict_name_equality = strict;
        self
    }

    /// Validate a process and every element it owns.
    ///
    /// Each call starts from an empty accumulator, so validating the same
    /// process twice yields identical results.
    pub fn validate(&self, process: &Process) -> ValidationResult<PdlElementKind> {
        let mut result = ValidationResult::new();
        self.check_process(process, &mut result);
        result
    }

    fn check_process(&self, process: &Process, result: &mut ValidationResult<PdlElementKind>) {
        let process_label = display_name(process.name()).to_string();

        // Process name follows identifier conventions.
        result.record_if_failed(
            process.name().map_or(false, is_well_formed_ident),
            PdlElementKind::Process,
            process_label.as_str(),
            "process name is not a well-formed identifier",
        );

        // Ressource names are unique within the process. The first
        // occurrence is never flagged; every repeat after it is.
        let mut seen_names: HashSet<Option<&str>> = HashSet::new();
        for res in process.ressources() {
            if !seen_names.insert(res.name()) {
                result.record_if_failed(
                    false,
                    PdlElementKind::Ressource,
                    display_name(res.name()),
                    format!(
                        "ressource name '{}' is duplicated in process '{}'",
                        display_name(res.name()),
                        process_label,
                    ),
                );
            }
        }

        // Route every owned element to its per-kind check.
        for (index, element) in process.elements().iter().enumerate() {
            match element {
                ProcessElement::WorkDefinition(wd) => {
                    self.check_work_definition(process, wd, result);
                }
                ProcessElement::WorkSequence(ws) => {
                    self.check_work_sequence(process, index, ws, result);
                }
                ProcessElement::Ressource(res) => self.check_ressource(res, result),
                ProcessElement::RessourceRequirement(req) => {
                    self.check_requirement(process, format!("requirement@{index}"), req, result);
                }
                ProcessElement::Guidance(guidance) => {
                    self.check_guidance(index, guidance, result);
                }
                // Deliberate no-op: extension kinds must not break validation.
                ProcessElement::Unknown { .. } => {}
            }
        }
    }

    fn check_work_definition(
        &self,
        process: &Process,
        wd: &WorkDefinition,
        result: &mut ValidationResult<PdlElementKind>,
    ) {
        let label = wd
            .name()
            .map(str::to_string)
            .unwrap_or_else(|| wd.id.to_string());

        // A present name always passes here; only a missing name can fail.
        result.record_if_failed(
            wd.name.is_some() || wd.name().map_or(false, is_well_formed_ident),
            PdlElementKind::WorkDefinition,
            label.as_str(),
            "work definition name is not a well-formed identifier",
        );

        // Uniqueness among sibling work definitions. The shipped comparison
        // is substring containment: a sibling whose name merely contains
        // this one flags it as non-unique.
        let unique = process.work_definitions().all(|other| {
            if other.id == wd.id {
                return true;
            }
            match (other.name(), wd.name()) {
                (Some(other_name), Some(name)) => {
                    if self.strict_name_equality {
                        other_name != name
                    } else {
                        !other_name.contains(name)
                    }
                }
                _ => true,
            }
        });
        result.record_if_failed(
            unique,
            PdlElementKind::WorkDefinition,
            label.as_str(),
            format!("work definition name '{label}' is not unique"),
        );

        // A ressource may be required at most once per work definition.
        // One violation on the first duplicate, then stop scanning.
        let mut seen: HashSet<Option<RessourceId>> = HashSet::new();
        for req in &wd.requirements {
            if !seen.insert(req.ressource) {
                result.record_if_failed(
                    false,
                    PdlElementKind::WorkDefinition,
                    label.as_str(),
                    format!(
                        "ressource '{}' is required more than once by work definition '{label}'",
                        ressource_label(process, req.ressource),
                    ),
                );
                break;
            }
        }

        // Owned requirements are reachable elements; check each of them.
        for req in &wd.requirements {
            self.check_requirement(process, format!("requirement of '{label}'"), req, result);
        }
    }

    fn check_work_sequence(
        &self,
        process: &Process,
        index: usize,
        ws: &WorkSequence,
        result: &mut ValidationResult<PdlElementKind>,
    ) {
        let label = format!("ws{index}");

        // Both endpoints must be present; without them the remaining
        // checks are meaningless, so this one short-circuits.
        let (pred, succ) = match (ws.predecessor, ws.successor) {
            (Some(pred), Some(succ)) => (pred, succ),
            _ => {
                result.record_if_failed(
                    false,
                    PdlElementKind::WorkSequence,
                    label.as_str(),
                    "work sequence is incomplete: missing predecessor or successor",
                );
                return;
            }
        };

        let pred_label = process
            .work_definition(pred)
            .and_then(WorkDefinition::name)
            .unwrap_or("<unnamed>")
            .to_string();
        let succ_label = process
            .work_definition(succ)
            .and_then(WorkDefinition::name)
            .unwrap_or("<unnamed>")
            .to_string();

        // No self-loop.
        result.record_if_failed(
            pred != succ,
            PdlElementKind::WorkSequence,
            label.as_str(),
            format!("work sequence links activity '{pred_label}' to itself"),
        );

        // No sibling sequence with the identical (link type, predecessor,
        // successor) triple.
        let duplicate_free = process
            .elements()
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.as_work_sequence().map(|other| (i, other)))
            .all(|(i, other)| {
                i == index
                    || !(other.link_type == ws.link_type
                        && other.predecessor == ws.predecessor
                        && other.successor == ws.successor)
            });
        result.record_if_failed(
            duplicate_free,
            PdlElementKind::WorkSequence,
            label.as_str(),
            format!(
                "a {} dependency between '{pred_label}' and '{succ_label}' already exists",
                ws.link_type,
            ),
        );
    }

    fn check_ressource(&self, res: &Ressource, result: &mut ValidationResult<PdlElementKind>) {
        result.record_if_failed(
            res.number >= 0,
            PdlElementKind::Ressource,
            display_name(res.name()),
            format!(
                "ressource '{}' has a negative capacity ({})",
                display_name(res.name()),
                res.number,
            ),
        );
    }

    fn check_requirement(
        &self,
        process: &Process,
        label: String,
        req: &RessourceRequirement,
        result: &mut ValidationResult<PdlElementKind>,
    ) {
        result.record_if_failed(
            req.number_required > 0,
            PdlElementKind::RessourceRequirement,
            label.as_str(),
            "number of required ressources must be strictly positive",
        );

        // Capacity check only runs against a resolvable ressource.
        if let Some(res) = req.ressource.and_then(|id| process.ressource(id)) {
            result.record_if_failed(
                req.number_required <= res.number,
                PdlElementKind::RessourceRequirement,
                label.as_str(),
                format!(
                    "ressource '{}' requires {} units but only {} are available",
                    display_name(res.name()),
                    req.number_required,
                    res.number,
                ),
            );
        }
    }

    fn check_guidance(
        &self,
        index: usize,
        guidance: &Guidance,
        result: &mut ValidationResult<PdlElementKind>,
    ) {
        // Only a missing text is rejected; an empty string is accepted.
        result.record_if_failed(
            guidance.text.is_some(),
            PdlElementKind::Guidance,
            format!("guidance@{index}"),
            "guidance has no text",
        );
    }
}

/// Render a ressource reference for messages.
fn ressource_label(process: &Process, id: Option<RessourceId>) -> String {
    match id {
        Some(id) => match process.ressource(id) {
            Some(res) => display_name(res.name()).to_string(),
            None => id.to_string(),
        },
        None => "<none>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdlnet_pdl::LinkType;

    fn validate(process: &Process) -> ValidationResult<PdlElementKind> {
        SimplePdlValidator::new().validate(process)
    }

    #[test]
    fn test_well_formed_process_passes() {
        // GIVEN
        let mut process = Process::new("Dev_Process");
        let a = process.add_work_definition("Design");
        let b = process.add_work_definition("Code");
        process.add_work_sequence(LinkType::FinishToStart, Some(a), Some(b));
        let r = process.add_ressource("Machine", 3);
        process.add_requirement(a, Some(r), 2).unwrap();
        process.add_guidance(Some("read the handbook".into()));

        // WHEN
        let result = validate(&process);

        // THEN
        assert!(result.is_empty(), "unexpected: {:?}", result.all());
    }

    #[test]
    fn test_malformed_process_name_flagged() {
        // GIVEN
        let process = Process::new("not a name");

        // WHEN
        let result = validate(&process);

        // THEN
        let errors: Vec<_> = result.errors_for(PdlElementKind::Process).collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("well-formed identifier"));
    }

    #[test]
    fn test_duplicate_ressource_names_flag_repeats_only() {
        // GIVEN names R, R, S: exactly one violation, on the second R.
        let mut process = Process::new("P");
        process.add_ressource("R", 1);
        process.add_ressource("R", 1);
        process.add_ressource("S", 1);

        // WHEN
        let result = validate(&process);

        // THEN
        let duplicates: Vec<_> = result
            .errors_for(PdlElementKind::Ressource)
            .filter(|e| e.message.contains("duplicated"))
            .collect();
        assert_eq!(duplicates.len(), 1);
        assert!(duplicates[0].message.contains("'R'"));
    }

    #[test]
    fn test_triple_repeat_yields_two_violations() {
        // GIVEN
        let mut process = Process::new("P");
        process.add_ressource("R", 1);
        process.add_ressource("R", 1);
        process.add_ressource("R", 1);

        // WHEN
        let result = validate(&process);

        // THEN - every occurrence after the first is flagged
        let duplicates = result
            .errors_for(PdlElementKind::Ressource)
            .filter(|e| e.message.contains("duplicated"))
            .count();
        assert_eq!(duplicates, 2);
    }

    #[test]
    fn test_missing_work_definition_name_fails_or_quirk() {
        // GIVEN - the name check is an OR of "present" and "well-formed":
        // only an absent name can fail it.
        let mut process = Process::new("P");
        process.add_unnamed_work_definition();
        process.add_work_definition("not an identifier!");

        // WHEN
        let result = validate(&process);

        // THEN - the ill-formed but present name slips through
        let name_errors: Vec<_> = result
            .errors_for(PdlElementKind::WorkDefinition)
            .filter(|e| e.message.contains("well-formed"))
            .collect();
        assert_eq!(name_errors.len(), 1);
        assert_eq!(name_errors[0].element, "wd1");
    }

    #[test]
    fn test_substring_uniqueness_flags_contained_name() {
        // GIVEN - "Task" is contained in "TaskExtra", so the substring
        // comparison reports "Task" as non-unique.
        let mut process = Process::new("P");
        process.add_work_definition("Task");
        process.add_work_definition("TaskExtra");

        // WHEN
        let result = validate(&process);

        // THEN
        let unique_errors: Vec<_> = result
            .errors_for(PdlElementKind::WorkDefinition)
            .filter(|e| e.message.contains("not unique"))
            .collect();
        assert_eq!(unique_errors.len(), 1);
        assert_eq!(unique_errors[0].element, "Task");
    }

    #[test]
    fn test_strict_equality_accepts_contained_name() {
        // GIVEN
        let mut process = Process::new("P");
        process.add_work_definition("Task");
        process.add_work_definition("TaskExtra");

        // WHEN
        let result = SimplePdlValidator::new()
            .strict_name_equality(true)
            .validate(&process);

        // THEN
        assert!(result.is_empty());
    }

    #[test]
    fn test_strict_equality_still_flags_equal_names() {
        // GIVEN
        let mut process = Process::new("P");
        process.add_work_definition("Task");
        process.add_work_definition("Task");

        // WHEN
        let result = SimplePdlValidator::new()
            .strict_name_equality(true)
            .validate(&process);

        // THEN - both flag each other
        let unique_errors = result
            .errors_for(PdlElementKind::WorkDefinition)
            .filter(|e| e.message.contains("not unique"))
            .count();
        assert_eq!(unique_errors, 2);
    }

    #[test]
    fn test_duplicate_requirement_short_circuits() {
        // GIVEN - three requirements on the same ressource: one violation,
        // the scan stops at the first duplicate.
        let mut process = Process::new("P");
        let wd = process.add_work_definition("Build");
        let r = process.add_ressource("Machine", 9);
        process.add_requirement(wd, Some(r), 1).unwrap();
        process.add_requirement(wd, Some(r), 1).unwrap();
        process.add_requirement(wd, Some(r), 1).unwrap();

        // WHEN
        let result = validate(&process);

        // THEN
        let duplicates = result
            .errors_for(PdlElementKind::WorkDefinition)
            .filter(|e| e.message.contains("more than once"))
            .count();
        assert_eq!(duplicates, 1);
    }

    #[test]
    fn test_incomplete_work_sequence_records_one_violation() {
        // GIVEN
        let mut process = Process::new("P");
        let a = process.add_work_definition("A");
        process.add_work_sequence(LinkType::StartToStart, Some(a), None);

        // WHEN
        let result = validate(&process);

        // THEN - a single finding, the remaining sequence checks skipped
        let errors: Vec<_> = result.errors_for(PdlElementKind::WorkSequence).collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("incomplete"));
    }

    #[test]
    fn test_self_loop_flagged_and_duplicate_check_still_runs() {
        // GIVEN - two identical self-loops: each records a self-loop
        // violation and a duplicate-triple violation.
        let mut process = Process::new("P");
        let a = process.add_work_definition("A");
        process.add_work_sequence(LinkType::FinishToStart, Some(a), Some(a));
        process.add_work_sequence(LinkType::FinishToStart, Some(a), Some(a));

        // WHEN
        let result = validate(&process);

        // THEN
        let self_loops = result
            .errors_for(PdlElementKind::WorkSequence)
            .filter(|e| e.message.contains("itself"))
            .count();
        let duplicates = result
            .errors_for(PdlElementKind::WorkSequence)
            .filter(|e| e.message.contains("already exists"))
            .count();
        assert_eq!(self_loops, 2);
        assert_eq!(duplicates, 2);
    }

    #[test]
    fn test_single_self_loop_runs_duplicate_check_without_firing() {
        // GIVEN
        let mut process = Process::new("P");
        let a = process.add_work_definition("A");
        process.add_work_sequence(LinkType::FinishToStart, Some(a), Some(a));

        // WHEN
        let result = validate(&process);

        // THEN - only the self-loop fires
        let errors: Vec<_> = result.errors_for(PdlElementKind::WorkSequence).collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("itself"));
    }

    #[test]
    fn test_same_endpoints_different_link_type_not_duplicate() {
        // GIVEN
        let mut process = Process::new("P");
        let a = process.add_work_definition("A");
        let b = process.add_work_definition("B");
        process.add_work_sequence(LinkType::FinishToStart, Some(a), Some(b));
        process.add_work_sequence(LinkType::StartToStart, Some(a), Some(b));

        // WHEN
        let result = validate(&process);

        // THEN
        assert!(result.is_empty());
    }

    #[test]
    fn test_negative_ressource_capacity_flagged() {
        // GIVEN
        let mut process = Process::new("P");
        process.add_ressource("R", -1);

        // WHEN
        let result = validate(&process);

        // THEN
        let errors: Vec<_> = result.errors_for(PdlElementKind::Ressource).collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("negative"));
    }

    #[test]
    fn test_requirement_bounds_checked_against_capacity() {
        // GIVEN
        let mut process = Process::new("P");
        let wd = process.add_work_definition("Build");
        let r = process.add_ressource("Machine", 2);
        process.add_requirement(wd, Some(r), 3).unwrap();

        // WHEN
        let result = validate(&process);

        // THEN
        let errors: Vec<_> = result
            .errors_for(PdlElementKind::RessourceRequirement)
            .collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("only 2 are available"));
    }

    #[test]
    fn test_non_positive_requirement_flagged() {
        // GIVEN
        let mut process = Process::new("P");
        let wd = process.add_work_definition("Build");
        process.add_requirement(wd, None, 0).unwrap();

        // WHEN
        let result = validate(&process);

        // THEN - the capacity check is skipped without a ressource
        let errors: Vec<_> = result
            .errors_for(PdlElementKind::RessourceRequirement)
            .collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("strictly positive"));
    }

    #[test]
    fn test_guidance_missing_text_flagged_empty_accepted() {
        // GIVEN
        let mut process = Process::new("P");
        process.add_guidance(None);
        process.add_guidance(Some(String::new()));

        // WHEN
        let result = validate(&process);

        // THEN
        let errors: Vec<_> = result.errors_for(PdlElementKind::Guidance).collect();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_unknown_element_kind_is_skipped() {
        // GIVEN
        let mut process = Process::new("P");
        process.push_element(ProcessElement::Unknown {
            kind: "milestone".into(),
        });

        // WHEN
        let result = validate(&process);

        // THEN
        assert!(result.is_empty());
    }

    #[test]
    fn test_repeated_validation_is_deterministic() {
        // GIVEN
        let mut process = Process::new("bad name");
        let a = process.add_work_definition("A");
        process.add_work_sequence(LinkType::FinishToStart, Some(a), Some(a));
        process.add_ressource("R", -2);
        let validator = SimplePdlValidator::new();

        // WHEN
        let first = validator.validate(&process);
        let second = validator.validate(&process);

        // THEN - no state leaks between runs
        assert_eq!(first.all(), second.all());
    }
}
