// crates/confspec-core/src/runtime/mod.rs
// ============================================================================
// Module: Confspec Runtime
// Description: Pure validation logic over the core model.
// Purpose: Resolve versioned values and validate configuration instances.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Runtime modules are stateless functions and thin orchestration over the
//! immutable core model. Nothing here blocks, allocates shared state, or
//! mutates the corpus; every validation call is an independent, deterministic
//! computation.

pub mod datatype;
pub mod dependency;
pub mod engine;
pub mod resolver;
