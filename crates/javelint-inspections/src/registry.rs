//! Inspection trait and registry

use javelint_core::{Diagnostic, Severity};
use javelint_model::{CancelToken, Cancelled, FileModel};

use crate::char_sequence_to_string::UnnecessaryCharSequenceToString;

/// Context handed to an inspection run.
pub struct InspectionContext<'a> {
    /// Cancellation flag from the host; polled at every checkpoint
    pub token: &'a CancelToken,
    /// Severity the active profile assigns to this inspection
    pub severity: Severity,
}

/// A single registered inspection.
pub trait Inspection: Send + Sync {
    /// Stable identifier, e.g. "unnecessary_charsequence_tostring"
    fn id(&self) -> &'static str;

    /// User-visible display name
    fn display_name(&self) -> String;

    /// Severity used when the profile does not override it
    fn default_severity(&self) -> Severity {
        Severity::Redundant
    }

    /// Run over one file model and return its diagnostics.
    fn run(
        &self,
        model: &FileModel,
        ctx: &InspectionContext<'_>,
    ) -> Result<Vec<Diagnostic>, Cancelled>;
}

/// Registry of all available inspections.
pub struct InspectionRegistry {
    inspections: Vec<Box<dyn Inspection>>,
}

impl InspectionRegistry {
    /// Create a registry with all built-in inspections registered.
    pub fn new() -> Self {
        let mut registry = InspectionRegistry {
            inspections: Vec::new(),
        };
        registry.register(Box::new(UnnecessaryCharSequenceToString));
        registry
    }

    /// Create an empty registry.
    pub fn empty() -> Self {
        InspectionRegistry {
            inspections: Vec::new(),
        }
    }

    pub fn register(&mut self, inspection: Box<dyn Inspection>) {
        self.inspections.push(inspection);
    }

    pub fn get(&self, id: &str) -> Option<&dyn Inspection> {
        self.inspections
            .iter()
            .find(|inspection| inspection.id() == id)
            .map(|inspection| inspection.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Inspection> {
        self.inspections.iter().map(|inspection| inspection.as_ref())
    }

    /// Ids of all registered inspections.
    pub fn ids(&self) -> Vec<&'static str> {
        self.inspections
            .iter()
            .map(|inspection| inspection.id())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inspections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inspections.is_empty()
    }
}

impl Default for InspectionRegistry {
    fn default() -> Self {
        InspectionRegistry::new()
    }
}
