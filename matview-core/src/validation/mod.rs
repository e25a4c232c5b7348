//! Bounds validation for matrix access and view construction
//!
//! This module contains pure functions with no storage dependencies. They
//! decide whether an access or a window is legal and translate view-local
//! coordinates into coordinates of the root matrix.

pub mod bounds;

pub use bounds::{check_access, check_window, resolve, BoundsPolicy};
