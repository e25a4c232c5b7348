#![no_std]

//! matview core - geometry, bounds and traversal definitions
//!
//! This crate provides the allocation-free building blocks shared by every
//! matrix and view in `matview`: coordinates, rectangles, the error type,
//! the bounds policies and the row-major traversal state machine.

pub mod error;
pub mod geometry;
pub mod traversal;
pub mod validation;

pub use error::*;
pub use geometry::*;
pub use traversal::RowMajor;
pub use validation::{check_access, check_window, resolve, BoundsPolicy};
