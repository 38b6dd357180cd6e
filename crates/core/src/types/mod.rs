//! Core types for Studyspot.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod amenity;
pub mod id;

pub use amenity::{Amenity, ParseAmenityError};
pub use id::*;
