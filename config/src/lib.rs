//! # Config Crate
//!
//! Centralized configuration constants for the procedural mesh engine.
//! All magic numbers and tunable parameters are defined here so the
//! generators, the extruder and the mesh store agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{clamp_segments, EPSILON, UNIT_SPHERE};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001;
//! assert!(value.abs() < EPSILON);
//!
//! // Generators clamp degenerate resolutions instead of failing
//! assert_eq!(clamp_segments(2), 3);
//!
//! // Built-in catalog names are shared with every consumer
//! assert_eq!(UNIT_SPHERE, "unit_sphere");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Stable Catalog**: Built-in mesh names are a contract with consumers

pub mod constants;

#[cfg(test)]
mod tests;
