//! Core data types and structures
//!
//! This module contains the course and prerequisite types shared by both
//! solving strategies, separated from the algorithms themselves.

pub mod types;

pub use types::*;
