// src/services/mod.rs
//! Decoding logic.

pub mod decoder;
