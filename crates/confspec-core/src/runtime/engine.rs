// crates/confspec-core/src/runtime/engine.rs
// ============================================================================
// Module: Confspec Validation Engine
// Description: Whole-instance validation against the specification corpus.
// Purpose: Produce the complete, ordered finding list for one instance.
// Dependencies: crate::core, crate::runtime
// ============================================================================

//! ## Overview
//! The engine validates a full configuration instance against the corpus for
//! a query version and active role set. Each supplied property runs through a
//! fixed rule list; afterwards a missing-required pass walks the corpus for
//! role-required properties the instance never supplied.
//!
//! The policy is whole-instance, all-errors-reported: no finding aborts the
//! run, so one call surfaces every problem. Findings are ordered — supplied
//! properties in input order, then missing-required properties in corpus
//! order — and identical inputs always produce identical output.
//!
//! New per-property checks slot into [`PROPERTY_RULES`]; existing rules never
//! need to change for that.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::corpus::Corpus;
use crate::core::finding::Finding;
use crate::core::finding::FindingKind;
use crate::core::instance::Instance;
use crate::core::instance::ValidationContext;
use crate::core::property::PropertySpec;
use crate::runtime::datatype::validate_value;
use crate::runtime::dependency::DependencyViolationKind;
use crate::runtime::dependency::check_dependencies;
use crate::runtime::resolver::resolve_effective;

// ============================================================================
// SECTION: Rule Plumbing
// ============================================================================

/// Everything one per-property rule may inspect.
///
/// # Invariants
/// - `spec` resolved from `supplied_name` and passed the version gate.
struct RuleContext<'a> {
    /// The shared corpus.
    corpus: &'a Corpus,
    /// The spec the supplied name resolved to.
    spec: &'a PropertySpec,
    /// The property name exactly as supplied by the caller.
    supplied_name: &'a str,
    /// The raw value as supplied.
    value: &'a str,
    /// The whole instance, for cross-property checks.
    instance: &'a Instance,
    /// Query version and active roles.
    ctx: &'a ValidationContext,
}

/// One independent per-property validation rule.
type Rule = fn(&RuleContext<'_>, &mut Vec<Finding>);

/// The per-property rule list, run in order for every supplied property that
/// resolves and passes the version gate.
const PROPERTY_RULES: &[Rule] = &[
    deprecation_rule,
    datatype_rule,
    allowed_values_rule,
    dependency_rule,
    restart_rule,
];

// ============================================================================
// SECTION: Engine
// ============================================================================

/// Validates configuration instances against one shared corpus.
///
/// # Invariants
/// - Holds the corpus by reference only; validation is stateless and any
///   number of calls may run concurrently.
#[derive(Debug, Clone, Copy)]
pub struct ValidationEngine<'a> {
    /// The immutable specification corpus.
    corpus: &'a Corpus,
}

impl<'a> ValidationEngine<'a> {
    /// Creates an engine over a constructed corpus.
    #[must_use]
    pub const fn new(corpus: &'a Corpus) -> Self {
        Self { corpus }
    }

    /// Validates one instance, returning the complete ordered finding list.
    #[must_use]
    pub fn validate(&self, instance: &Instance, ctx: &ValidationContext) -> Vec<Finding> {
        let mut findings = Vec::new();
        for (supplied_name, value) in instance.iter() {
            self.validate_supplied(supplied_name, value, instance, ctx, &mut findings);
        }
        self.check_missing_required(instance, ctx, &mut findings);
        findings
    }

    /// Runs the lookup, version gate, and rule list for one supplied pair.
    fn validate_supplied(
        &self,
        supplied_name: &str,
        value: &str,
        instance: &Instance,
        ctx: &ValidationContext,
        findings: &mut Vec<Finding>,
    ) {
        let Some(spec) = self.corpus.resolve(supplied_name) else {
            findings.push(Finding::new(supplied_name, FindingKind::UnknownProperty));
            return;
        };
        if !spec.is_available_at(&ctx.version) {
            // A value has no meaning for a property that does not exist yet;
            // the remaining rules are skipped for this property.
            findings.push(Finding::new(
                supplied_name,
                FindingKind::PropertyNotYetAvailable { as_of: spec.as_of_version.clone() },
            ));
            return;
        }
        let rule_ctx =
            RuleContext { corpus: self.corpus, spec, supplied_name, value, instance, ctx };
        for rule in PROPERTY_RULES {
            rule(&rule_ctx, findings);
        }
    }

    /// Reports role-required properties the instance never supplied.
    fn check_missing_required(
        &self,
        instance: &Instance,
        ctx: &ValidationContext,
        findings: &mut Vec<Finding>,
    ) {
        for spec in self.corpus.properties() {
            if spec.names.iter().any(|entry| instance.contains(&entry.name)) {
                continue;
            }
            if !spec.is_available_at(&ctx.version) || spec.is_deprecated_at(&ctx.version) {
                continue;
            }
            let Some(requirement) = spec
                .roles
                .iter()
                .find(|entry| entry.required && ctx.is_role_active(&entry.role))
            else {
                continue;
            };
            let default = resolve_effective(&spec.default_values, &ctx.version)
                .map(|entry| entry.value.clone());
            findings.push(Finding::new(
                spec.canonical_name(),
                FindingKind::MissingRequiredProperty {
                    role: requirement.role.clone(),
                    default,
                },
            ));
        }
    }
}

// ============================================================================
// SECTION: Per-Property Rules
// ============================================================================

/// Emits a deprecation warning once the query version reaches the marker.
fn deprecation_rule(ctx: &RuleContext<'_>, findings: &mut Vec<Finding>) {
    if ctx.spec.is_deprecated_at(&ctx.ctx.version)
        && let Some(since) = &ctx.spec.deprecated_since
    {
        findings.push(Finding::new(
            ctx.supplied_name,
            FindingKind::DeprecatedProperty {
                since: since.clone(),
                replaced_by: ctx.spec.deprecated_for.clone(),
            },
        ));
    }
}

/// Validates the value against the declared datatype.
fn datatype_rule(ctx: &RuleContext<'_>, findings: &mut Vec<Finding>) {
    if let Err(issue) = validate_value(&ctx.spec.datatype, ctx.value, ctx.corpus.units()) {
        findings.push(Finding::new(ctx.supplied_name, issue.into()));
    }
}

/// Enforces the closed allowed-value set, when one is declared.
fn allowed_values_rule(ctx: &RuleContext<'_>, findings: &mut Vec<Finding>) {
    let Some(allowed) = &ctx.spec.allowed_values else {
        return;
    };
    if allowed.is_empty() {
        findings.push(Finding::new(ctx.supplied_name, FindingKind::PropertyRetired));
        return;
    }
    if !allowed.iter().any(|legal| legal == ctx.value) {
        findings.push(Finding::new(
            ctx.supplied_name,
            FindingKind::NotAnAllowedValue {
                value: ctx.value.to_string(),
                allowed: allowed.clone(),
            },
        ));
    }
}

/// Reports every missing or unsatisfied dependency.
fn dependency_rule(ctx: &RuleContext<'_>, findings: &mut Vec<Finding>) {
    for violation in check_dependencies(ctx.spec, ctx.instance, ctx.corpus) {
        let kind = match violation.kind {
            DependencyViolationKind::Missing => {
                FindingKind::MissingDependency { dependency: violation.dependency }
            }
            DependencyViolationKind::Unsatisfied { expected, actual } => {
                FindingKind::UnsatisfiedDependency {
                    dependency: violation.dependency,
                    expected,
                    actual,
                }
            }
        };
        findings.push(Finding::new(ctx.supplied_name, kind));
    }
}

/// Surfaces the restart flag as an advisory.
fn restart_rule(ctx: &RuleContext<'_>, findings: &mut Vec<Finding>) {
    if ctx.spec.restart_required {
        findings.push(Finding::new(ctx.supplied_name, FindingKind::RestartRequired));
    }
}
