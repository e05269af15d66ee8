//! ec-core: stable foundation for eqcalc.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - format (fixed-point rendering and root subscripts)

pub mod format;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use format::*;
pub use numeric::*;
