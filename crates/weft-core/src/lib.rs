//! Core types for the weft layout engine.
//!
//! This crate provides the foundational types used by `weft-layout`:
//! - Device-unit geometry (`Rect`, `Size`, `Padding`)
//! - Axis and alignment enums
//! - Error types

pub mod errors;
pub mod geometry;
pub mod types;

pub use errors::*;
pub use geometry::*;
pub use types::*;
