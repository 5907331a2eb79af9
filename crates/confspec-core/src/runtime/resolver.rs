// crates/confspec-core/src/runtime/resolver.rs
// ============================================================================
// Module: Confspec Version Range Resolver
// Description: Point-containment queries over version-scoped value lists.
// Purpose: Select the single value effective at a query version.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Version-scoped value lists (defaults, recommendations) are interval lists
//! keyed by version. Corpus construction guarantees the intervals are ordered
//! and pairwise disjoint, so a point query hits at most one entry and a
//! linear scan suffices. A query falling in a gap is a valid absent result,
//! not an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::property::VersionedValue;
use crate::core::version::Version;

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Returns the entry whose range contains `query`, when one exists.
///
/// Overlaps are a corpus integrity error rejected at load; they are never
/// resolved here.
#[must_use]
pub fn resolve_effective<'a>(
    entries: &'a [VersionedValue],
    query: &Version,
) -> Option<&'a VersionedValue> {
    entries.iter().find(|entry| entry.range.contains(query))
}

// ============================================================================
// SECTION: Tests
// ============================================================================
