// crates/confspec-core/src/runtime/dependency.rs
// ============================================================================
// Module: Confspec Dependency Checker
// Description: Prerequisite evaluation for dependent properties.
// Purpose: Report missing or unsatisfied dependencies, exhaustively.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! A property may declare prerequisites: other properties that must be
//! present in the instance and hold an exact value. Each declared entry is
//! evaluated independently and every violation is reported; the checker never
//! short-circuits on the first problem.
//!
//! References resolve through the prerequisite's own name aliases, so a
//! dependency declared against the file-key form is satisfied by a value
//! supplied under the environment-variable form.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::corpus::Corpus;
use crate::core::instance::Instance;
use crate::core::property::PropertySpec;

// ============================================================================
// SECTION: Violations
// ============================================================================

/// One failed dependency of a property.
///
/// # Invariants
/// - `dependency` is the prerequisite's canonical name when it resolves in
///   the corpus, otherwise the name as declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyViolation {
    /// The prerequisite property the violation concerns.
    pub dependency: String,
    /// How the prerequisite failed.
    pub kind: DependencyViolationKind,
}

/// Classification of a failed dependency.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyViolationKind {
    /// The prerequisite is absent from the instance under every alias.
    Missing,
    /// The prerequisite is present but holds a different value.
    Unsatisfied {
        /// The value the prerequisite must hold.
        expected: String,
        /// The value the prerequisite actually holds.
        actual: String,
    },
}

// ============================================================================
// SECTION: Checking
// ============================================================================

/// Evaluates every declared prerequisite of `spec` against `instance`.
///
/// Returns all violations in declaration order; an empty result means every
/// dependency is satisfied.
#[must_use]
pub fn check_dependencies(
    spec: &PropertySpec,
    instance: &Instance,
    corpus: &Corpus,
) -> Vec<DependencyViolation> {
    let mut violations = Vec::new();
    for dependency in &spec.depends_on {
        let (display_name, effective) = lookup_dependency(&dependency.property, instance, corpus);
        match effective {
            None => violations.push(DependencyViolation {
                dependency: display_name,
                kind: DependencyViolationKind::Missing,
            }),
            Some(actual) if actual != dependency.value => {
                violations.push(DependencyViolation {
                    dependency: display_name,
                    kind: DependencyViolationKind::Unsatisfied {
                        expected: dependency.value.clone(),
                        actual: actual.to_string(),
                    },
                });
            }
            Some(_) => {}
        }
    }
    violations
}

/// Resolves a dependency reference to its canonical name and the value the
/// instance supplies under any of its aliases.
fn lookup_dependency<'a>(
    reference: &str,
    instance: &'a Instance,
    corpus: &Corpus,
) -> (String, Option<&'a str>) {
    match corpus.resolve(reference) {
        Some(prerequisite) => {
            let effective = prerequisite
                .names
                .iter()
                .find_map(|entry| instance.get(&entry.name));
            (prerequisite.canonical_name().to_string(), effective)
        }
        // Dangling references are rejected at corpus construction; direct
        // lookup keeps this total for standalone use.
        None => (reference.to_string(), instance.get(reference)),
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Test-only assertions are permitted.")]

    use super::*;
    use crate::core::property::Datatype;
    use crate::core::property::Dependency;
    use crate::core::property::NameKind;
    use crate::core::property::PropertyName;
    use crate::core::units::UnitRegistry;

    fn corpus() -> Corpus {
        let security = PropertySpec::new(
            vec![
                PropertyName::new("conf.security", NameKind::File),
                PropertyName::new("CONF_SECURITY", NameKind::Env),
            ],
            Datatype::Bool,
            "0.5.0".parse().unwrap(),
        );
        let mut password = PropertySpec::new(
            vec![PropertyName::new("conf.security.password", NameKind::File)],
            Datatype::String { max_length: None, unit: None },
            "0.5.0".parse().unwrap(),
        );
        password.depends_on = vec![Dependency::new("conf.security", "true")];
        Corpus::new(vec![security, password], UnitRegistry::default()).unwrap()
    }

    fn password_spec(corpus: &Corpus) -> &PropertySpec {
        corpus.resolve("conf.security.password").unwrap()
    }

    #[test]
    fn absent_prerequisite_is_missing() {
        let corpus = corpus();
        let instance: Instance =
            [("conf.security.password", "secret")].into_iter().collect();
        let violations = check_dependencies(password_spec(&corpus), &instance, &corpus);
        assert_eq!(
            violations,
            vec![DependencyViolation {
                dependency: "conf.security".to_string(),
                kind: DependencyViolationKind::Missing,
            }]
        );
    }

    #[test]
    fn wrong_prerequisite_value_reports_expected_and_actual() {
        let corpus = corpus();
        let instance: Instance =
            [("conf.security.password", "secret"), ("conf.security", "false")]
                .into_iter()
                .collect();
        let violations = check_dependencies(password_spec(&corpus), &instance, &corpus);
        assert_eq!(
            violations,
            vec![DependencyViolation {
                dependency: "conf.security".to_string(),
                kind: DependencyViolationKind::Unsatisfied {
                    expected: "true".to_string(),
                    actual: "false".to_string(),
                },
            }]
        );
    }

    #[test]
    fn prerequisite_satisfied_under_an_alias() {
        let corpus = corpus();
        // The dependency names the file-key form; the instance supplies the
        // environment-variable form.
        let instance: Instance =
            [("conf.security.password", "secret"), ("CONF_SECURITY", "true")]
                .into_iter()
                .collect();
        let violations = check_dependencies(password_spec(&corpus), &instance, &corpus);
        assert!(violations.is_empty());
    }

    #[test]
    fn all_violations_are_reported_not_just_the_first() {
        let first = PropertySpec::new(
            vec![PropertyName::new("a", NameKind::File)],
            Datatype::Bool,
            "0.1.0".parse().unwrap(),
        );
        let second = PropertySpec::new(
            vec![PropertyName::new("b", NameKind::File)],
            Datatype::Bool,
            "0.1.0".parse().unwrap(),
        );
        let mut dependent = PropertySpec::new(
            vec![PropertyName::new("c", NameKind::File)],
            Datatype::Bool,
            "0.1.0".parse().unwrap(),
        );
        dependent.depends_on =
            vec![Dependency::new("a", "true"), Dependency::new("b", "true")];
        let corpus =
            Corpus::new(vec![first, second, dependent], UnitRegistry::default()).unwrap();
        let instance: Instance = [("c", "true"), ("a", "false")].into_iter().collect();
        let violations =
            check_dependencies(corpus.resolve("c").unwrap(), &instance, &corpus);
        assert_eq!(violations.len(), 2);
        assert!(matches!(violations[0].kind, DependencyViolationKind::Unsatisfied { .. }));
        assert_eq!(violations[1].kind, DependencyViolationKind::Missing);
    }
}
