// crates/confspec-corpus/src/lib.rs
// ============================================================================
// Module: Confspec Corpus Loader
// Description: JSON corpus document parsing into the core model.
// Purpose: Load and integrity-check the specification corpus at startup.
// Dependencies: confspec-core, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The corpus ships as one JSON document: `config_settings.unit` holds the
//! named validation patterns and `config_options` holds the property
//! specifications. This crate decodes the document, parses versions and
//! bounds into their typed forms, and hands the result to
//! [`confspec_core::Corpus::new`], which runs every integrity check.
//!
//! Loading happens once at process start. A document that fails to decode or
//! fails an integrity check yields a [`CorpusLoadError`]; the caller must not
//! serve validation against it.
//!
//! ```
//! let corpus = confspec_corpus::load_str(
//!     r#"{
//!         "config_settings": { "unit": [] },
//!         "config_options": [{
//!             "property_names": [
//!                 { "name": "http.port", "kind": "file" },
//!                 { "name": "HTTP_PORT", "kind": "env" }
//!             ],
//!             "datatype": { "type": "integer", "min": "0", "max": "65535" },
//!             "as_of_version": "0.5.0"
//!         }]
//!     }"#,
//! )?;
//! assert!(corpus.resolve("HTTP_PORT").is_some());
//! # Ok::<(), confspec_corpus::CorpusLoadError>(())
//! ```

mod error;
mod loader;
mod schema;

pub use crate::error::CorpusLoadError;
pub use crate::loader::load_path;
pub use crate::loader::load_str;
