//! Core data structures modeling AlphaFold3 job documents.
//!
//! This module defines the foundational types for representing chain
//! entries, bond records, and the amino-acid component table. These types
//! form the backbone of `bond-forge` and are consumed and mutated by the
//! JSON I/O layer and the bridging operations pipeline.

pub mod bond;
pub mod document;
pub mod types;
