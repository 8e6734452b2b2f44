//! Rendering core for configurable content-list blocks.
//!
//! A block instance arrives as a flat attribute object, is resolved into a
//! typed configuration, drives one bounded fetch against an external
//! content store, and renders to a single markup string. The pass is
//! synchronous and stateless; every data state (unconfigured selection,
//! empty results, missing images) maps to a render branch rather than an
//! error.

pub mod application;
pub mod domain;
pub mod infra;
pub mod presentation;
