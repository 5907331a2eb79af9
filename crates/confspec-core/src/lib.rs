// crates/confspec-core/src/lib.rs
// ============================================================================
// Module: Confspec Core
// Description: Core model and validation engine for versioned configuration.
// Purpose: Provide the property-specification corpus model and the engine
//          that validates configuration instances against it.
// Dependencies: serde, thiserror, regex
// ============================================================================

//! ## Overview
//! Confspec validates concrete configuration instances against a declarative
//! property-specification corpus: accepted name forms, datatypes with bounds,
//! version-scoped defaults and recommendations, role-based requirements,
//! inter-property dependencies, deprecation markers, and a registry of named
//! validation patterns ("units").
//!
//! The corpus is constructed once, integrity-checked, and immutable for the
//! life of the process. Validation of one instance is a pure synchronous
//! computation producing an ordered list of [`Finding`] values; no finding
//! aborts the run, so a single call surfaces every problem at once.

pub mod core;
pub mod runtime;

pub use crate::core::corpus::Corpus;
pub use crate::core::corpus::CorpusError;
pub use crate::core::finding::BoundViolation;
pub use crate::core::finding::Finding;
pub use crate::core::finding::FindingKind;
pub use crate::core::finding::Severity;
pub use crate::core::instance::Instance;
pub use crate::core::instance::ValidationContext;
pub use crate::core::property::Datatype;
pub use crate::core::property::Dependency;
pub use crate::core::property::NameKind;
pub use crate::core::property::PropertyName;
pub use crate::core::property::PropertySpec;
pub use crate::core::property::RoleRequirement;
pub use crate::core::property::VersionedValue;
pub use crate::core::units::Unit;
pub use crate::core::units::UnitError;
pub use crate::core::units::UnitRegistry;
pub use crate::core::units::UnknownUnit;
pub use crate::core::version::Version;
pub use crate::core::version::VersionParseError;
pub use crate::core::version::VersionRange;
pub use crate::runtime::engine::ValidationEngine;
