//! Vellum Core — shared types, the corpus-store contract, and errors.
//!
//! This crate provides the foundational types used across all Vellum crates.
//! It has no internal Vellum dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`fragment`]: Fragment, ScoredFragment, and Strategy
//! - [`store`]: The `CorpusStore` trait the host application implements
//! - [`util`]: Small string utilities

#![doc = include_str!("../README.md")]

pub mod error;
pub mod fragment;
pub mod store;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use fragment::{Fragment, ScoredFragment, Strategy};
pub use store::CorpusStore;

// Convenience re-exports from util
pub use util::truncate_chars;
