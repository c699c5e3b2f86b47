// src/utils/mod.rs
//! Helper functions and settings.

pub mod serialization;
pub mod settings;
