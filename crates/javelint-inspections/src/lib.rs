//! javelint-inspections: Inspection implementations for Java file models
//!
//! This crate hosts the inspections that run over a [`javelint_model::FileModel`],
//! plus the machinery around them:
//!
//! - Inspection registry and analysis driver (single file or parallel batch)
//! - Profiles controlling which inspections run and at which severity
//! - Message bundle for diagnostic and fix texts
//! - Output formats (raw, json)
//! - Optional pass logging for debugging analysis runs
//!
//! Available inspections:
//! - unnecessary_charsequence_tostring: `toString()` calls on values that
//!   can stay `CharSequence`
//!
//! # Example
//!
//! ```
//! use javelint_core::FixOutcome;
//! use javelint_inspections::Analyzer;
//! use javelint_model::{CancelToken, ClassRegistry, FileModel, JavaType, Modifiers, TypeElement};
//!
//! // private final CharSequence raw;
//! // private final String text = raw.toString();
//! let mut model = FileModel::new(ClassRegistry::with_java_lang());
//! model.set_name("Demo.java");
//! let cs_type = TypeElement::short(JavaType::class("java.lang.CharSequence"));
//! let raw = model.new_field("raw", cs_type, Modifiers::PRIVATE_FINAL, None);
//! let receiver = model.new_name_ref("raw", Some(raw));
//! let call = model.new_method_call(Some(receiver), "toString", Vec::new());
//! let string_type = TypeElement::short(JavaType::class("java.lang.String"));
//! let text = model.new_field("text", string_type, Modifiers::PRIVATE_FINAL, Some(call));
//!
//! let analyzer = Analyzer::new();
//! let token = CancelToken::new();
//! let diagnostics = analyzer.analyze_model(&model, &token).unwrap();
//! assert_eq!(diagnostics.len(), 1);
//!
//! // the attached fix replaces the call and retypes the declaration
//! let fix = diagnostics.into_diagnostics().remove(0).fix.unwrap();
//! assert_eq!(fix.apply(&mut model, &token).unwrap(), FixOutcome::Applied);
//! assert_eq!(
//!     model.render_declaration(text),
//!     "private final CharSequence text = raw"
//! );
//! ```

pub mod analyzer;
pub mod bundle;
pub mod char_sequence_to_string;
pub mod logging;
pub mod output;
pub mod profile;
pub mod registry;

pub use analyzer::Analyzer;
pub use bundle::MessageCatalogue;
pub use char_sequence_to_string::{UnnecessaryCharSequenceToString, UnnecessaryToStringFix};
pub use output::{format_diagnostics, Formatter, OutputFormat};
pub use profile::{InspectionProfile, ProfileError};
pub use registry::{Inspection, InspectionContext, InspectionRegistry};
