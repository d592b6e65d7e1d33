//! # Config Crate
//!
//! Centralized configuration constants for the bushing CSG generator.
//! Facet defaults, validation limits and float tolerances live here so the
//! generator, validator and printer agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_equal, BORE_HEIGHT_FACTOR, DEFAULT_CIRCLE_FACETS};
//!
//! let total_length = 14.0;
//! let bore_height = BORE_HEIGHT_FACTOR * total_length;
//! assert!(approx_equal(bore_height, 56.0));
//!
//! let facets: Option<u32> = None;
//! assert_eq!(facets.unwrap_or(DEFAULT_CIRCLE_FACETS), 64);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **OpenSCAD Compatible**: Facet counts map directly onto `$fn`

pub mod constants;
