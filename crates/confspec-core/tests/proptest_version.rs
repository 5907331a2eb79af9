//! Property-based tests for version ordering and range invariants.
// crates/confspec-core/tests/proptest_version.rs
// ============================================================================
// Module: Version Property-Based Tests
// Description: Property tests for version parse, order, and containment.
// Purpose: Detect invariant violations across wide input ranges.
// ============================================================================

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::cmp::Ordering;

use confspec_core::Version;
use confspec_core::VersionRange;
use proptest::prelude::*;

/// Renders components as a dotted version string.
fn render(components: &[u32]) -> String {
    components.iter().map(ToString::to_string).collect::<Vec<_>>().join(".")
}

/// Component-wise numeric comparison with zero-fill, the model the
/// implementation must agree with.
fn model_cmp(left: &[u32], right: &[u32]) -> Ordering {
    let len = left.len().max(right.len());
    for index in 0 .. len {
        let l = left.get(index).copied().unwrap_or(0);
        let r = right.get(index).copied().unwrap_or(0);
        match l.cmp(&r) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    Ordering::Equal
}

fn components() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32 .. 1000, 1 .. 5)
}

proptest! {
    #[test]
    fn parse_accepts_any_dotted_numeric_string(components in components()) {
        let rendered = render(&components);
        let version: Version = rendered.parse().unwrap();
        prop_assert_eq!(version.to_string(), rendered);
    }

    #[test]
    fn ordering_matches_component_wise_model(
        left in components(),
        right in components(),
    ) {
        let left_version: Version = render(&left).parse().unwrap();
        let right_version: Version = render(&right).parse().unwrap();
        prop_assert_eq!(left_version.cmp(&right_version), model_cmp(&left, &right));
    }

    #[test]
    fn appending_zero_components_preserves_equality(components in components()) {
        let base: Version = render(&components).parse().unwrap();
        let padded: Version = format!("{}.0.0", render(&components)).parse().unwrap();
        prop_assert_eq!(&base, &padded);
        prop_assert_eq!(base.cmp(&padded), Ordering::Equal);
    }

    #[test]
    fn range_containment_agrees_with_ordering(
        from in components(),
        to in components(),
        query in components(),
    ) {
        let from: Version = render(&from).parse().unwrap();
        let to: Version = render(&to).parse().unwrap();
        let query: Version = render(&query).parse().unwrap();
        prop_assume!(from < to);
        let range = VersionRange::new(from.clone(), Some(to.clone()));
        let expected = from <= query && query < to;
        prop_assert_eq!(range.contains(&query), expected);
    }

    #[test]
    fn unbounded_range_contains_everything_from_start(
        from in components(),
        query in components(),
    ) {
        let from: Version = render(&from).parse().unwrap();
        let query: Version = render(&query).parse().unwrap();
        let range = VersionRange::new(from.clone(), None);
        prop_assert_eq!(range.contains(&query), from <= query);
    }
}
