//! Host-side helpers for embedding `inventory-core`.
//!
//! - Inventory configuration (TOML files plus environment overrides)
//! - `tracing` subscriber installation for inventory diagnostics
//!
//! The core crate stays free of I/O; everything that touches the filesystem or
//! process environment lives here.

pub mod loaders;
pub mod logging;

pub use loaders::{ConfigLoader, LoadResult};
