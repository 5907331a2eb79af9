// crates/confspec-core/src/core/instance.rs
// ============================================================================
// Module: Confspec Instance Model
// Description: One configuration instance and its validation context.
// Purpose: Carry caller-supplied configuration into a validation call.
// Dependencies: serde, crate::core::version
// ============================================================================

//! ## Overview
//! An [`Instance`] is the transient configuration under validation: property
//! names mapped to raw string values, in caller insertion order. The engine
//! never retains an instance beyond one call. The engine is agnostic to
//! whether the mapping originated from environment variables or a file.
//!
//! A [`ValidationContext`] pins the query version and the active role set
//! for one call.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

use crate::core::version::Version;

// ============================================================================
// SECTION: Instance
// ============================================================================

/// One configuration instance: ordered property name/value pairs.
///
/// # Invariants
/// - Insertion order is preserved; findings for supplied properties follow
///   this order.
/// - Lookups return the first entry with a matching name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Instance {
    /// Name/value pairs in insertion order.
    entries: Vec<(String, String)>,
}

impl Instance {
    /// Creates an empty instance.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Appends a property name/value pair.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Returns the value supplied under `name`, when present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns `true` when a value was supplied under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates name/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns the number of supplied pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Instance {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(pairs: I) -> Self {
        let entries = pairs.into_iter().map(|(name, value)| (name.into(), value.into())).collect();
        Self { entries }
    }
}

// ============================================================================
// SECTION: Validation Context
// ============================================================================

/// Query version and active roles for one validation call.
///
/// # Invariants
/// - Role order is irrelevant to the outcome; findings attribute
///   requirements to the spec's own role order for determinism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationContext {
    /// The product version the instance targets.
    pub version: Version,
    /// The deployment roles active for this instance.
    pub roles: Vec<String>,
}

impl ValidationContext {
    /// Creates a context from a version and active roles.
    #[must_use]
    pub fn new(version: Version, roles: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self { version, roles: roles.into_iter().map(Into::into).collect() }
    }

    /// Returns `true` when `role` is active.
    #[must_use]
    pub fn is_role_active(&self, role: &str) -> bool {
        self.roles.iter().any(|active| active == role)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Test-only assertions are permitted.")]

    use super::*;

    #[test]
    fn insertion_order_is_preserved() {
        let instance: Instance =
            [("b", "2"), ("a", "1"), ("c", "3")].into_iter().collect();
        let names: Vec<&str> = instance.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn lookup_returns_first_match() {
        let mut instance = Instance::new();
        instance.insert("key", "first");
        instance.insert("key", "second");
        assert_eq!(instance.get("key"), Some("first"));
        assert!(instance.contains("key"));
        assert!(!instance.contains("other"));
    }

    #[test]
    fn context_reports_active_roles() {
        let ctx = ValidationContext::new("1.0.0".parse().unwrap(), ["role_1"]);
        assert!(ctx.is_role_active("role_1"));
        assert!(!ctx.is_role_active("role_2"));
    }
}
