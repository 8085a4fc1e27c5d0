//! Shared type definitions
//!
//! This module contains the data types shared between storage and the console surface.

pub mod preference;

pub use preference::{Location, Resolution};
