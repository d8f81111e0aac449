//! Integration tests for whole-schema scenarios
//!
//! ## Test Organization
//!
//! - `round_trip` - Every definition kind scanned, rendered and rescanned
//! - `registry` - Registration through the schema bundle
//! - `refresh` - Matching rule use derivation over populated registries
//! - `rfc_scenarios` - Definitions as published in the RFCs

pub mod refresh;
pub mod registry;
pub mod rfc_scenarios;
pub mod round_trip;
