//! Analysis driver running registered inspections over file models
//!
//! One [`Analyzer`] owns the registry and the active profile. Single-file
//! analysis walks the registry in order; batch analysis fans the files out
//! across a rayon pool, one independent pass per file.

use javelint_model::{CancelToken, Cancelled, FileModel};
use rayon::prelude::*;

use javelint_core::DiagnosticCollection;

use crate::logging;
use crate::profile::InspectionProfile;
use crate::registry::{InspectionContext, InspectionRegistry};

pub struct Analyzer {
    registry: InspectionRegistry,
    profile: InspectionProfile,
}

impl Analyzer {
    /// Analyzer with every built-in inspection enabled at default severity.
    pub fn new() -> Self {
        Analyzer::with_profile(InspectionProfile::default())
    }

    pub fn with_profile(profile: InspectionProfile) -> Self {
        Analyzer {
            registry: InspectionRegistry::new(),
            profile,
        }
    }

    pub fn registry(&self) -> &InspectionRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut InspectionRegistry {
        &mut self.registry
    }

    pub fn profile(&self) -> &InspectionProfile {
        &self.profile
    }

    /// Run every enabled inspection over one file model. Diagnostics come
    /// back sorted by position.
    pub fn analyze_model(
        &self,
        model: &FileModel,
        token: &CancelToken,
    ) -> Result<DiagnosticCollection, Cancelled> {
        logging::log_pass_start(model.name());
        let mut collection = DiagnosticCollection::new();
        for inspection in self.registry.iter() {
            token.check()?;
            if !self.profile.is_enabled(inspection.id()) {
                logging::log_inspection_skipped(inspection.id());
                continue;
            }
            let severity = self
                .profile
                .severity_for(inspection.id())
                .unwrap_or_else(|| inspection.default_severity());
            let ctx = InspectionContext { token, severity };
            let diagnostics = inspection.run(model, &ctx)?;
            logging::log_inspection_result(inspection.id(), diagnostics.len());
            collection.extend(diagnostics);
        }
        collection.sort();
        logging::log_pass_complete(model.name(), collection.len());
        Ok(collection)
    }

    /// Analyze a batch of file models in parallel. The first cancellation
    /// observed wins; per-file results keep the input order.
    pub fn analyze_models(
        &self,
        models: &[FileModel],
        token: &CancelToken,
    ) -> Result<Vec<DiagnosticCollection>, Cancelled> {
        logging::log_batch_start(models.len());
        models
            .par_iter()
            .map(|model| self.analyze_model(model, token))
            .collect()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Analyzer::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char_sequence_to_string::INSPECTION_ID;
    use javelint_core::Severity;
    use javelint_model::{
        ClassRegistry, JavaType, Modifiers, TypeElement, JAVA_LANG_CHAR_SEQUENCE, JAVA_LANG_STRING,
    };

    /// One flagged declaration: `private final CharSequence raw;` and
    /// `private final String text = raw.toString();`
    fn flagged_model(name: &str) -> FileModel {
        let mut model = FileModel::new(ClassRegistry::with_java_lang());
        model.set_name(name);
        let cs_type = TypeElement::short(JavaType::class(JAVA_LANG_CHAR_SEQUENCE));
        let raw = model.new_field("raw", cs_type, Modifiers::PRIVATE_FINAL, None);
        let receiver = model.new_name_ref("raw", Some(raw));
        let call = model.new_method_call(Some(receiver), "toString", Vec::new());
        let string_type = TypeElement::short(JavaType::class(JAVA_LANG_STRING));
        model.new_field("text", string_type, Modifiers::PRIVATE_FINAL, Some(call));
        model
    }

    #[test]
    fn test_analyze_model_collects_diagnostics() {
        let analyzer = Analyzer::new();
        let model = flagged_model("Demo.java");
        let collection = analyzer
            .analyze_model(&model, &CancelToken::new())
            .unwrap();

        assert_eq!(collection.len(), 1);
        assert_eq!(collection.redundant_count(), 1);
        assert_eq!(collection.diagnostics()[0].inspection, INSPECTION_ID);
        assert_eq!(collection.diagnostics()[0].file, "Demo.java");
    }

    #[test]
    fn test_profile_disables_an_inspection() {
        let profile = InspectionProfile::default().with_disabled(INSPECTION_ID);
        let analyzer = Analyzer::with_profile(profile);
        let model = flagged_model("Demo.java");
        let collection = analyzer
            .analyze_model(&model, &CancelToken::new())
            .unwrap();

        assert!(collection.is_empty());
    }

    #[test]
    fn test_profile_overrides_severity() {
        let profile = InspectionProfile::default().with_severity(INSPECTION_ID, Severity::Warning);
        let analyzer = Analyzer::with_profile(profile);
        let model = flagged_model("Demo.java");
        let collection = analyzer
            .analyze_model(&model, &CancelToken::new())
            .unwrap();

        assert_eq!(collection.warning_count(), 1);
        assert_eq!(collection.redundant_count(), 0);
    }

    #[test]
    fn test_analyze_models_keeps_input_order() {
        let analyzer = Analyzer::new();
        let models = vec![flagged_model("A.java"), flagged_model("B.java")];
        let collections = analyzer
            .analyze_models(&models, &CancelToken::new())
            .unwrap();

        assert_eq!(collections.len(), 2);
        assert_eq!(collections[0].diagnostics()[0].file, "A.java");
        assert_eq!(collections[1].diagnostics()[0].file, "B.java");
    }

    #[test]
    fn test_cancelled_token_aborts_analysis() {
        let analyzer = Analyzer::new();
        let model = flagged_model("Demo.java");
        let token = CancelToken::new();
        token.cancel();

        let result = analyzer.analyze_model(&model, &token);
        assert_eq!(result.unwrap_err(), Cancelled);
    }
}
