//! Studyspot Core - shared types library.
//!
//! This crate provides the domain types shared by the Studyspot services:
//! - type-safe entity IDs
//! - the fixed amenity preference set
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no database
//! access, no HTTP clients. The optional `postgres` feature adds sqlx
//! encode/decode support for the ID types so they can be bound directly
//! in queries.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and the amenity enum

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
