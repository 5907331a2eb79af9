// crates/confspec-core/src/core/mod.rs
// ============================================================================
// Module: Confspec Core Model
// Description: Data model for property specifications, versions, and findings.
// Purpose: Define the immutable corpus types consumed by the runtime engine.
// Dependencies: serde, thiserror, regex
// ============================================================================

//! ## Overview
//! The core model is pure data: property specifications, version values and
//! ranges, unit patterns, configuration instances, and validation findings.
//! All integrity checks run at [`corpus::Corpus`] construction; after that
//! every type here is read-only.

pub mod corpus;
pub mod finding;
pub mod instance;
pub mod property;
pub mod units;
pub mod version;
